//! Category Classifier
//!
//! ファイル名と本文のキーワード照合でドキュメントを分類する。

use super::builtin::{BuiltinCategory, BUILTIN_CATEGORIES};

/// キーワード分類器
pub struct Classifier {
    rules: Vec<&'static BuiltinCategory>,
    fallback: &'static BuiltinCategory,
}

impl Classifier {
    /// ビルトインカテゴリのみで分類器を構築
    pub fn builtin() -> Self {
        let rules = BUILTIN_CATEGORIES.iter().filter(|c| !c.fallback).collect();
        let fallback = BUILTIN_CATEGORIES
            .iter()
            .find(|c| c.fallback)
            .expect("builtin category table has a fallback entry");
        Self { rules, fallback }
    }

    /// 利用可能なカテゴリ名を取得（テーブル順）
    pub fn category_names(&self) -> Vec<&'static str> {
        BUILTIN_CATEGORIES.iter().map(|c| c.name).collect()
    }

    /// ドキュメントを分類
    ///
    /// ファイル名のキーワードを先に、本文のキーワードを後に照合する。
    /// どのルールにも一致しない場合はフォールバックカテゴリを返す。
    pub fn classify(&self, file_name: &str, content: &str) -> &'static BuiltinCategory {
        let file_name = file_name.to_lowercase();
        let content = content.to_lowercase();

        for &rule in &self.rules {
            if keyword_match(&file_name, rule.name_keywords)
                || keyword_match(&content, rule.content_keywords)
            {
                return rule;
            }
        }

        self.fallback
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::builtin()
    }
}

fn keyword_match(haystack: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| haystack.contains(kw))
}
