//! taoxml CLI
//!
//! Parses a markup document, prints its tree, and optionally resolves a tag
//! path against it.
//!
//! - `taoxml file.xml`            # Print the tree as markup
//! - `taoxml --xml '<a><b/></a>'` # Parse an inline string
//! - `taoxml --json file.xml`     # Print the tree as JSON
//! - `taoxml`                     # Use the bundled sample document and
//!   look up `html/body/div/span` and the `head` under `html`

mod json;
mod render;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use owo_colors::OwoColorize;
use taoxml_common::warning::clear_warnings;
use taoxml_dom::{DomTree, NodeId};
use taoxml_parser::{ParseOutcome, parse_document};

/// Sample document used when no input is given.
const DEMO_DOCUMENT: &str = include_str!("../demo.xml");

/// Tag path looked up in the sample document when `--find` is not given.
const DEMO_FIND_PATH: &str = "html/body/div/span";

/// taoxml: parse XML-like markup into a navigable tree
#[derive(Parser, Debug)]
#[command(name = "taoxml")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Parse the bundled sample document
    taoxml

    # Parse a file and print it back
    taoxml ./page.xml

    # Parse an inline string
    taoxml --xml '<a x="1"><b/>text</a>'

    # Dump the tree as JSON
    taoxml --json ./page.xml

    # Resolve a tag path with a find-chain
    taoxml --find html/body/div/span ./page.xml
"#)]
struct Cli {
    /// Path to a markup file
    #[arg(value_name = "FILE", conflicts_with = "xml")]
    path: Option<PathBuf>,

    /// Parse a markup string directly instead of a file
    #[arg(long, value_name = "MARKUP")]
    xml: Option<String>,

    /// Print the tree as JSON instead of markup
    #[arg(long)]
    json: bool,

    /// Slash-separated tag path to resolve, e.g. html/body/div
    #[arg(long, value_name = "PATH")]
    find: Option<String>,

    /// Print non-fatal parse issues
    #[arg(long)]
    issues: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let is_demo = cli.path.is_none() && cli.xml.is_none();
    let (source_name, markup, find) = match (&cli.path, &cli.xml) {
        (Some(path), _) => {
            let markup = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            (path.display().to_string(), markup, cli.find.clone())
        }
        (None, Some(xml)) => ("<inline>".to_string(), xml.clone(), cli.find.clone()),
        (None, None) => (
            "<sample>".to_string(),
            DEMO_DOCUMENT.to_string(),
            Some(cli.find.clone().unwrap_or_else(|| DEMO_FIND_PATH.to_string())),
        ),
    };

    clear_warnings();
    let outcome = parse_document(&markup);

    if cli.json {
        println!("{}", json::to_json(&outcome.tree)?);
    } else {
        print!("{}", render::to_markup(&outcome.tree, NodeId::ROOT));
    }

    if cli.issues {
        print_issues(&outcome);
    }

    if let Some(path) = find.as_deref() {
        print_find(&outcome.tree, path);
    }

    if is_demo {
        print_head_lookup(&outcome.tree);
    }

    match outcome.error {
        Some(error) => Err(error).with_context(|| format!("failed to parse {source_name}")),
        None => Ok(()),
    }
}

fn print_issues(outcome: &ParseOutcome) {
    if outcome.issues.is_empty() {
        eprintln!("{}", "no parse issues".green());
        return;
    }
    for issue in &outcome.issues {
        eprintln!("{} {} ({})", "issue:".yellow().bold(), issue.message, issue.position);
    }
}

fn print_find(tree: &DomTree, path: &str) {
    let found = tree
        .find(NodeId::ROOT)
        .path(path.split('/').filter(|tag| !tag.is_empty()));

    let Some(element) = found.element() else {
        println!("{} {path}", "not found:".red().bold());
        return;
    };

    println!("{} <{}>", "found:".green().bold(), element.tag());
    if let Some(text) = found.text() {
        println!("{} {text}", "text:".cyan());
    }
}

/// Look up `html` with a find-chain, then its first `head` child with a
/// filtered selection.
fn print_head_lookup(tree: &DomTree) {
    let Some(html) = tree.find(NodeId::ROOT).child("html").node() else {
        println!("{} html", "not found:".red().bold());
        return;
    };
    println!("{} <html>", "found:".green().bold());

    match tree.select(html, "head").next().and_then(|head| tree.as_element(head)) {
        Some(head) => println!("{} <{}>", "selected:".green().bold(), head.tag()),
        None => println!("{} head", "not selected:".red().bold()),
    }
}
