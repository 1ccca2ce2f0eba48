use std::io;
use std::path::Path;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use colored::Colorize;

use article_indexer_core::{Indexer, Result};

mod args;
use args::{Cli, Commands, Shell};

/// Directory scanned for Markdown articles.
const SOURCE_DIR: &str = "pages";
/// File the generated index is written to.
const INDEX_FILE: &str = "articles.json";

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        None | Some(Commands::Generate) => handle_generate(),
        Some(Commands::List) => handle_list(),
        Some(Commands::Completions { shell }) => {
            handle_completions(shell);
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "[ERROR]".red().bold(), e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn handle_generate() -> Result<()> {
    let index = Indexer::new().build_index(Path::new(SOURCE_DIR))?;
    index.write_to(Path::new(INDEX_FILE))?;

    println!(
        "{} {} ({} articles)",
        "Generated:".green(),
        INDEX_FILE,
        index.document_count()
    );
    Ok(())
}

fn handle_list() -> Result<()> {
    let index = Indexer::new().build_index(Path::new(SOURCE_DIR))?;

    println!();
    for (category, entries) in index.buckets() {
        println!("{} ({})", category.cyan().bold(), entries.len());
        for entry in entries {
            println!("  {} {}", entry.title, entry.file.dimmed());
        }
        println!();
    }
    println!("Total: {} articles", index.document_count());
    Ok(())
}

fn handle_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let shell = match shell {
        Shell::Bash => clap_complete::Shell::Bash,
        Shell::Zsh => clap_complete::Shell::Zsh,
        Shell::Fish => clap_complete::Shell::Fish,
        Shell::PowerShell => clap_complete::Shell::PowerShell,
        Shell::Elvish => clap_complete::Shell::Elvish,
    };
    generate(shell, &mut cmd, "article-indexer", &mut io::stdout());
}
