//! deckview CLI — validate, outline and print deck files.
//!
//! Commands:
//! - `check` — parse and validate a deck, report its slide count
//! - `outline` — numbered slide titles with their animation hooks
//! - `print` — every slide as plain text, one after another
//! - `demo` — write the built-in demo deck as TOML

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use deckview_core::{AnimationKind, Deck, Slide};

const BAR_WIDTH: usize = 30;

#[derive(Parser)]
#[command(name = "deckview", about = "deckview CLI — slide deck tooling", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse and validate a deck file.
    Check {
        /// Path to a deck TOML file.
        deck: PathBuf,
    },
    /// List slide titles with their animation hooks.
    Outline {
        /// Path to a deck TOML file.
        deck: PathBuf,
    },
    /// Print every slide as plain text.
    Print {
        /// Path to a deck TOML file.
        deck: PathBuf,
    },
    /// Write the built-in demo deck as TOML.
    Demo {
        /// Output file. Prints to stdout when omitted.
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check { deck } => run_check(&deck),
        Commands::Outline { deck } => {
            print!("{}", outline(&load(&deck)?));
            Ok(())
        }
        Commands::Print { deck } => {
            print!("{}", print_deck(&load(&deck)?));
            Ok(())
        }
        Commands::Demo { out } => run_demo(out.as_deref()),
    }
}

fn load(path: &Path) -> Result<Deck> {
    Deck::from_file(path).with_context(|| format!("loading deck {}", path.display()))
}

fn run_check(path: &Path) -> Result<()> {
    let deck = load(path)?;
    println!(
        "OK: \"{}\" — {} slide(s) in {}",
        deck.title,
        deck.len(),
        path.display()
    );
    Ok(())
}

fn run_demo(out: Option<&Path>) -> Result<()> {
    let toml = Deck::demo().to_toml()?;
    match out {
        Some(path) => {
            std::fs::write(path, toml)
                .with_context(|| format!("writing {}", path.display()))?;
            tracing::info!(path = %path.display(), "demo deck written");
            println!("Demo deck written to: {}", path.display());
        }
        None => print!("{toml}"),
    }
    Ok(())
}

fn outline(deck: &Deck) -> String {
    let mut out = format!("{}\n", deck.title);
    for (i, slide) in deck.slides().iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>3}. {:<32} {}",
            i + 1,
            slide.title,
            deck.animation_for(i).label()
        );
    }
    out
}

fn print_deck(deck: &Deck) -> String {
    let total = deck.len();
    deck.slides()
        .iter()
        .enumerate()
        .map(|(i, slide)| render_slide(slide, deck.animation_for(i), i, total))
        .collect::<Vec<_>>()
        .join("\n")
}

/// One slide in its final, fully-animated state.
fn render_slide(slide: &Slide, kind: AnimationKind, index: usize, total: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "== {}/{}  {} ==", index + 1, total, slide.title);
    if let Some(subtitle) = &slide.subtitle {
        let _ = writeln!(out, "{subtitle}");
    }
    if !slide.body.is_empty() {
        out.push('\n');
        for line in &slide.body {
            let _ = writeln!(out, "{line}");
        }
    }
    if !slide.items.is_empty() {
        out.push('\n');
    }

    match kind {
        AnimationKind::Grow if !slide.values.is_empty() => {
            let max = slide.values.iter().copied().fold(0.0_f64, f64::max);
            for (item, value) in slide.items.iter().zip(&slide.values) {
                let len = if max > 0.0 {
                    ((value / max) * BAR_WIDTH as f64).round() as usize
                } else {
                    0
                };
                let _ = writeln!(out, "  {item:<8} {} {value:.1}", "█".repeat(len));
            }
        }
        AnimationKind::Spin => {
            let _ = writeln!(out, "  ( {} )", slide.items.join(" | "));
        }
        AnimationKind::Stream => {
            for item in &slide.items {
                let _ = writeln!(out, "  → {item}");
            }
        }
        AnimationKind::ScaleIn => {
            for item in &slide.items {
                let _ = writeln!(out, "  [ {item} ]");
            }
        }
        _ => {
            for item in &slide.items {
                let _ = writeln!(out, "  • {item}");
            }
        }
    }

    if !slide.calls_to_action.is_empty() {
        let buttons: Vec<String> = slide
            .calls_to_action
            .iter()
            .map(|c| format!("[ {} ]", c.label))
            .collect();
        let _ = writeln!(out, "\n  {}", buttons.join("   "));
    }
    out
}
