//! Shotpub CLI - versioned asset publish, resolve and rollback
//!
//! Usage: shotpub [--project DIR] <COMMAND>
//!
//! Commands:
//!   catalog   List sequences, shots and latest artifacts
//!   versions  List rollback candidates of one asset type
//!   publish   Commit the next version of each format
//!   rollback  Bind a previously published version
//!   watch     Load the latest artifacts and report external updates

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let global = commands::GlobalArgs {
        project: cli.project,
        config: cli.config,
        json: cli.json,
    };

    match cli.command {
        Commands::Catalog { sequence, shot } => {
            commands::catalog::cmd_catalog(&global, sequence.as_deref(), shot.as_deref())
        }
        Commands::Versions {
            sequence,
            shot,
            asset_type,
        } => commands::versions::cmd_versions(&global, &sequence, &shot, asset_type),
        Commands::Publish {
            sequence,
            shot,
            asset_type,
            wip,
            description,
            formats,
            roots,
            from,
        } => commands::publish::cmd_publish(
            &global,
            commands::publish::PublishArgs {
                sequence,
                shot,
                asset_type,
                wip,
                description,
                formats,
                roots,
                from,
            },
        ),
        Commands::Rollback {
            sequence,
            shot,
            asset_type,
            version,
            replace,
        } => commands::rollback::cmd_rollback(&global, &sequence, &shot, asset_type, &version, replace),
        Commands::Watch {
            sequence,
            shot,
            interval_ms,
        } => commands::watch::cmd_watch(&global, &sequence, &shot, interval_ms),
    }
}

/// `RUST_LOG` wins; otherwise -v steps warn -> info -> debug -> trace
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}
