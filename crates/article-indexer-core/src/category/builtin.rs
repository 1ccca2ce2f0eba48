//! Builtin Category Definitions
//!
//! コード内で定義されるビルトインカテゴリ。
//! テーブルの並び順がそのまま出力JSONのキー順になる。

/// ビルトインカテゴリ定義
pub const BUILTIN_CATEGORIES: &[BuiltinCategory] = &[
    BuiltinCategory {
        name: "Development",
        name_keywords: &[],
        content_keywords: &[],
        fallback: true,
    },
    BuiltinCategory {
        name: "Programming",
        name_keywords: &["log"],
        content_keywords: &["code", "programming"],
        fallback: false,
    },
];

/// ビルトインカテゴリの静的定義
#[derive(Debug, Clone)]
pub struct BuiltinCategory {
    /// カテゴリ名（出力JSONのキー）
    pub name: &'static str,
    /// ファイル名に対するキーワード（小文字で定義）
    pub name_keywords: &'static [&'static str],
    /// 本文に対するキーワード（小文字で定義）
    pub content_keywords: &'static [&'static str],
    /// どのキーワードにも一致しないドキュメントの受け皿
    pub fallback: bool,
}
