//! Command-line front end for the deskguard anonymizer.
//!
//! Reads ticket text from a file or stdin, anonymizes it, and prints the
//! result. The privacy report goes to stderr so piped output stays clean.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use deskguard_core::PrivacyConfig;
use deskguard_privacy::PrivacyEngine;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "deskguard", version, about = "Anonymize PII in support-ticket text")]
struct Cli {
    /// TOML config with additional preserve patterns.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Anonymize ticket text from a file, or stdin with "-".
    Anonymize {
        /// Input file; "-" reads from stdin.
        #[arg(default_value = "-")]
        input: String,
        /// Emit the anonymized text and report as JSON.
        #[arg(long)]
        json: bool,
        /// Print the privacy report summary to stderr.
        #[arg(long)]
        report: bool,
    },
    /// Verify text contains no residual PII; exits nonzero if any remains.
    Check {
        /// Input file; "-" reads from stdin.
        #[arg(default_value = "-")]
        input: String,
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
    let engine = match &cli.config {
        Some(path) => {
            let config = PrivacyConfig::from_toml_file(path)
                .with_context(|| format!("loading config from {}", path.display()))?;
            PrivacyEngine::with_config(&config).context("compiling preserve patterns")?
        }
        None => PrivacyEngine::new(),
    };

    match cli.command {
        Command::Anonymize {
            input,
            json,
            report,
        } => {
            let text = read_input(&input)?;
            let result = engine.anonymize_text(&text);
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("{}", result.text);
                if report {
                    eprintln!("{}", result.report.summary());
                }
            }
        }
        Command::Check { input } => {
            let text = read_input(&input)?;
            let residual = engine.verify_clean(&text);
            if !residual.is_empty() {
                for category in &residual {
                    eprintln!("residual PII: {category}");
                }
                std::process::exit(1);
            }
            eprintln!("clean: no redactable PII detected");
        }
    }

    Ok(())
}

fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(input).with_context(|| format!("reading {input}"))
    }
}
