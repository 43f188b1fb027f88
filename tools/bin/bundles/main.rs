use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use content::bundle::{Bundle, Translations};

// Lint for the shipped language bundles
//
// the site tolerates key drift at runtime by leaving the affected regions
// on their fallback text, so this tool is where drift fails loudly

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// portuguese bundle
    #[arg(long, default_value = "webapp/assets/data/pt.json")]
    pt: PathBuf,

    /// english bundle
    #[arg(long, default_value = "webapp/assets/data/en.json")]
    en: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// verify that both bundles expose the same key set
    Check,

    /// list the dotted keys each bundle carries
    Keys,
}

fn read_bundle(path: &PathBuf) -> Result<Bundle> {
    let doc =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;

    serde_json::from_str(&doc).with_context(|| format!("failed to parse {}", path.display()))
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let translations = Translations {
        pt: read_bundle(&cli.pt)?,
        en: read_bundle(&cli.en)?,
    };

    match cli.command.unwrap_or(Commands::Check) {
        Commands::Check => {
            let drift = translations.missing_keys();

            if drift.is_empty() {
                println!(
                    "bundles agree on {} keys",
                    translations.pt.key_set().len()
                );
                return Ok(ExitCode::SUCCESS);
            }

            println!("bundle key sets differ:");
            for line in &drift {
                println!("  missing in {line}");
            }
            Ok(ExitCode::FAILURE)
        }
        Commands::Keys => {
            for (name, bundle) in [("pt", &translations.pt), ("en", &translations.en)] {
                println!("{name}:");
                for key in bundle.key_set() {
                    println!("  {key}");
                }
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}
