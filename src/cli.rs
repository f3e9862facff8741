//! Command-line interface for the dereferencer.

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::dereferencer::Dereferencer;
use crate::error::{DereferencerError, Result};

/// URI Dereferencer - Resolve linked data URIs to human-readable markup.
#[derive(Parser)]
#[command(name = "uri-dereferencer")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Dereference a URI and print the rendered markup.
    Resolve {
        /// Linked data URI (e.g., https://www.wikidata.org/wiki/Q42)
        uri: String,

        /// Relay URL prefix for authorities that require proxying
        #[arg(short, long)]
        relay: Option<String>,

        /// Print the machine-readable resource URL without fetching
        #[arg(long)]
        url_only: bool,

        /// Print the result as JSON instead of markup
        #[arg(long)]
        json: bool,
    },

    /// List the supported authorities in dispatch order.
    List,
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Resolve {
            uri,
            relay,
            url_only,
            json,
        } => resolve_command(&uri, relay, url_only, json),
        Commands::List => list_command(),
    }
}

/// Execute the resolve command.
fn resolve_command(uri: &str, relay: Option<String>, url_only: bool, json: bool) -> Result<()> {
    let mut dereferencer = Dereferencer::new()?;
    if let Some(relay) = relay {
        dereferencer = dereferencer.with_relay(relay);
    }

    if url_only {
        let resolver = dereferencer
            .registry()
            .dispatch(uri)
            .ok_or_else(|| DereferencerError::NoResolver(uri.to_string()))?;
        println!("{}", resolver.resource_url(uri));
        return Ok(());
    }

    // Create progress spinner
    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.set_message("Fetching...");
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let outcome = match dereferencer.dereference(uri) {
        Ok(outcome) => outcome,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };
    pb.finish_and_clear();

    let Some(result) = outcome else {
        return Err(DereferencerError::NoResolver(uri.to_string()));
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!(
        "{} {}",
        style("Authority:").bold(),
        style(&result.authority).cyan()
    );
    println!(
        "{} {}",
        style("Resource:").bold(),
        style(&result.resource_url).green()
    );
    println!();
    println!("{}", result.markup);

    Ok(())
}

/// Execute the list command.
fn list_command() -> Result<()> {
    let dereferencer = Dereferencer::new()?;

    for name in dereferencer.registry().names() {
        println!("{name}");
    }

    Ok(())
}
