//! hintkit CLI entry point.

mod args;
mod page;

use anyhow::Context;
use clap::Parser;
use hintkit_core::input::parse_key_sequence;
use hintkit_core::report::{HintListing, ReplayReport};
use tracing::{error, info};

use crate::args::{Cli, Commands};

fn main() {
    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    // Examples command just prints and exits
    if let Commands::Examples = cli.command {
        println!("{}", crate::args::EXAMPLES_TEXT);
        return Ok(());
    }

    let config = page::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Labels(args) => {
            let mut dom = page::load_page(&args.page)?;
            let listing = HintListing::capture(&mut dom, &config);
            info!("{} hints on {}", listing.count, args.page.display());
            println!("{}", serde_json::to_string_pretty(&listing)?);
        }
        Commands::Replay(args) => {
            let keys = parse_key_sequence(&args.keys)
                .with_context(|| format!("Invalid key sequence '{}'", args.keys))?;
            let mut dom = page::load_page(&args.page)?;
            let report = ReplayReport::run(&mut dom, &config, &keys, args.new_tab);
            info!(
                "Replayed {} keys on {}: {}",
                keys.len(),
                args.page.display(),
                report.final_signal
            );
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Commands::Examples => {}
    }

    Ok(())
}
