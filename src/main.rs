//! getpkt CLI entry point.

use clap::Parser;
use getpkt::cli::commands;
use getpkt::cli::commands::list::ListFilter;
use getpkt::cli::{Cli, Commands};
use getpkt::config::Settings;
use getpkt::error::Error;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    init_tracing(cli.verbose, cli.quiet);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.json {
                eprintln!("{}", e.to_structured_json());
            } else if let Some(hint) = e.hint() {
                eprintln!("Error: {e}\n  Hint: {hint}");
            } else {
                eprintln!("Error: {e}");
            }
            ExitCode::from(e.exit_code())
        }
    }
}

fn init_tracing(verbose: u8, quiet: bool) {
    use tracing_subscriber::EnvFilter;

    if quiet {
        return;
    }

    // Honor RUST_LOG if set, otherwise use verbosity flag
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        match verbose {
            0 => EnvFilter::new("warn"),
            1 => EnvFilter::new("info"),
            2 => EnvFilter::new("debug,hyper=info,reqwest=info"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn run(cli: &Cli) -> Result<(), Error> {
    let json = cli.json;

    // These never touch the filesystem or the network.
    match &cli.command {
        Commands::Version => return commands::version::execute(json),
        Commands::Completions { shell } => return commands::completions::execute(shell),
        _ => {}
    }

    let settings = Settings::resolve(
        cli.config.as_deref(),
        cli.snapshot.as_deref(),
        cli.api_url.as_deref(),
        cli.page_size,
    )?;
    tracing::debug!(?settings, "settings resolved");

    match &cli.command {
        Commands::Auth {
            consumer_key,
            access_token,
        } => commands::auth::execute(
            &settings,
            consumer_key.as_deref(),
            access_token.as_deref(),
            json,
        ),
        Commands::Sync { limit } => commands::sync::execute(&settings, *limit, json, cli.quiet),
        Commands::List {
            limit,
            cache,
            favorites,
            tag,
        } => commands::list::execute(
            &settings,
            *limit,
            *cache,
            &ListFilter {
                favorites: *favorites,
                tag: tag.clone(),
            },
            json,
        ),
        Commands::Rand => commands::rand::execute(&settings, json),
        Commands::Show { item_id } => commands::show::execute(&settings, item_id, json),
        Commands::Archive { item_id } => commands::archive::execute(&settings, item_id, json),
        Commands::Version | Commands::Completions { .. } => Ok(()),
    }
}
