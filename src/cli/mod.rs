//! CLI definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::sync::DEFAULT_PAGE_SIZE;

pub mod commands;

/// getpkt - Sync your Pocket reading list into a local snapshot
#[derive(Parser, Debug)]
#[command(name = "getpkt", author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file path (default: ~/.config/getpkt/config.json)
    #[arg(long, global = true, env = "GETPKT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Snapshot file path (default: ~/.config/getpkt/articles.json)
    #[arg(long, global = true, env = "GETPKT_SNAPSHOT")]
    pub snapshot: Option<PathBuf>,

    /// Pocket API root (default: https://getpocket.com/v3)
    #[arg(long, global = true, env = "GETPKT_API_URL")]
    pub api_url: Option<String>,

    /// Articles requested per page
    #[arg(long, global = true, default_value_t = DEFAULT_PAGE_SIZE)]
    pub page_size: usize,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Increase logging verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (no output except errors)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Store the consumer key and access token
    Auth {
        /// Consumer key of your Pocket application
        #[arg(long, env = "GETPKT_CONSUMER_KEY")]
        consumer_key: Option<String>,

        /// Access token granted to the application
        #[arg(long, env = "GETPKT_ACCESS_TOKEN", hide_env_values = true)]
        access_token: Option<String>,
    },

    /// Download the full reading list into the local snapshot
    Sync {
        /// Stop after this many articles (0 = all)
        #[arg(short, long, default_value = "0")]
        limit: usize,
    },

    /// List articles, newest first
    List {
        /// Maximum articles to show (0 = all)
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Read from the local snapshot instead of the API
        #[arg(long)]
        cache: bool,

        /// Only favorites
        #[arg(long)]
        favorites: bool,

        /// Only items carrying this tag (remote listing only)
        #[arg(long, conflicts_with = "cache")]
        tag: Option<String>,
    },

    /// Show a random article from the local snapshot
    Rand,

    /// Show one article from the local snapshot
    Show {
        /// Item ID to look up
        item_id: String,
    },

    /// Archive an article
    Archive {
        /// Item ID to archive
        item_id: String,
    },

    /// Print version information
    Version,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_list_flags() {
        let cli = Cli::try_parse_from(["getpkt", "list", "--limit", "3", "--cache"]).unwrap();
        match cli.command {
            Commands::List {
                limit,
                cache,
                favorites,
                tag,
            } => {
                assert_eq!(limit, 3);
                assert!(cache);
                assert!(!favorites);
                assert!(tag.is_none());
            }
            other => panic!("Expected list, got {other:?}"),
        }
    }

    #[test]
    fn test_tag_conflicts_with_cache() {
        assert!(Cli::try_parse_from(["getpkt", "list", "--cache", "--tag", "rust"]).is_err());
        let cli = Cli::try_parse_from(["getpkt", "list", "--tag", "rust"]).unwrap();
        assert!(matches!(cli.command, Commands::List { tag: Some(ref t), .. } if t == "rust"));
    }

    #[test]
    fn test_parse_archive_requires_id() {
        assert!(Cli::try_parse_from(["getpkt", "archive"]).is_err());
        let cli = Cli::try_parse_from(["getpkt", "archive", "229279689"]).unwrap();
        assert!(matches!(cli.command, Commands::Archive { ref item_id } if item_id == "229279689"));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "getpkt",
            "sync",
            "--snapshot",
            "/tmp/a.json",
            "--page-size",
            "5",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.snapshot, Some(PathBuf::from("/tmp/a.json")));
        assert_eq!(cli.page_size, 5);
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Commands::Sync { limit: 0 }));
    }

    #[test]
    fn test_parse_sync_limit() {
        let cli = Cli::try_parse_from(["getpkt", "sync", "-l", "50"]).unwrap();
        assert!(matches!(cli.command, Commands::Sync { limit: 50 }));
    }
}
