//! # Category Module
//!
//! ドキュメントを意味的なカテゴリに分類する機能を提供する。
//!
//! カテゴリはビルトインの静的テーブルとして定義され、分類は
//! ファイル名と本文に対するキーワードの部分一致（大文字小文字無視）で行う。
//!
//! ## モジュール構成
//!
//! - `builtin`: ビルトインカテゴリ定義
//! - `classifier`: キーワード分類器
//!
//! ## 使用例
//!
//! ```rust
//! use article_indexer_core::category::Classifier;
//!
//! let classifier = Classifier::builtin();
//! assert_eq!(classifier.classify("changelog.md", "").name, "Programming");
//! assert_eq!(classifier.classify("about.md", "a static site").name, "Development");
//! ```

mod builtin;
mod classifier;

// Re-exports
pub use builtin::{BuiltinCategory, BUILTIN_CATEGORIES};
pub use classifier::Classifier;
