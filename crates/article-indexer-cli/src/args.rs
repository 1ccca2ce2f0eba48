use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "article-indexer")]
#[command(about = "Classify Markdown articles and generate a category index")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan the pages directory and write articles.json (default)
    Generate,

    /// Show the classified articles without writing the index
    List,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
