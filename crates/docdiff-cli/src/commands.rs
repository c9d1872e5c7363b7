use std::fs;
use std::path::Path;

use anyhow::Context;
use colored::Colorize;
use tracing::debug;

use docdiff_diff::{diff_documents_with, DiffConfig};
use docdiff_parse::parse_document;
use docdiff_tree::DocumentTree;

use crate::cli::*;
use crate::render::{DiffReport, TreeReport};

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Diff(args) => cmd_diff(args, cli.format),
        Command::Tree(args) => cmd_tree(args, cli.format),
    }
}

fn cmd_diff(args: DiffArgs, format: OutputFormat) -> anyhow::Result<()> {
    let config = load_config(&args)?;
    let old = read_document(&args.old)?;
    let new = read_document(&args.new)?;

    let script = diff_documents_with(&old, &new, &config.identity());
    let report = DiffReport::build(&old, &new, &script);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text if report.ops.is_empty() => println!("No changes."),
        OutputFormat::Text => {
            for op in &report.ops {
                println!("{}", op.to_text());
            }
            let s = &report.summary;
            println!(
                "\n{} moved, {} modified, {} deleted, {} created",
                s.moves.to_string().yellow(),
                s.modifications.to_string().cyan(),
                s.deletions.to_string().red(),
                s.creations.to_string().green(),
            );
        }
    }
    Ok(())
}

fn cmd_tree(args: TreeArgs, format: OutputFormat) -> anyhow::Result<()> {
    let tree = read_document(&args.file)?;
    let report = TreeReport::build(&tree);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => {
            for node in &report.nodes {
                println!("{}", node.to_text());
            }
        }
    }
    Ok(())
}

fn load_config(args: &DiffArgs) -> anyhow::Result<DiffConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            DiffConfig::from_toml_str(&text)
                .with_context(|| format!("failed to load config {}", path.display()))?
        }
        None => DiffConfig::default(),
    };
    if let Some(key) = &args.id_attribute {
        config.id_attribute = key.clone();
    }
    debug!(id_attribute = %config.id_attribute, "diff configuration");
    Ok(config)
}

fn read_document(path: &Path) -> anyhow::Result<DocumentTree> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let tree = parse_document(&text)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    debug!(path = %path.display(), nodes = tree.node_count(), "loaded document");
    Ok(tree)
}
