//! Watch command handler

use std::sync::mpsc;
use std::time::Duration;

use anyhow::{Context, Result};

use shotpub::CopyEngine;

use super::GlobalArgs;

pub fn cmd_watch(global: &GlobalArgs, sequence: &str, shot: &str, interval_ms: Option<u64>) -> Result<()> {
    let mut session = super::open_session(global, CopyEngine::new())?;
    let report = session.load_latest(sequence, shot)?;

    if global.json {
        super::print_json(&serde_json::json!({
            "event": "loaded",
            "command": "watch",
            "namespaces": report.namespaces(),
            "failed": report.failed,
        }));
    } else {
        for handle in &report.loaded {
            println!("Loaded {} as {}", handle.artifact_label(), handle.namespace);
        }
        for failure in &report.failed {
            eprintln!("Failed to load {}: {}", failure.path.display(), failure.diagnostic);
        }
    }

    let interval = match interval_ms {
        Some(0) => anyhow::bail!("--interval-ms must be greater than 0"),
        Some(ms) => Duration::from_millis(ms),
        None => session.config().watch.interval(),
    };

    let (tx, rx) = mpsc::channel::<()>();
    ctrlc::set_handler(move || {
        let _ = tx.send(());
    })
    .context("cannot install Ctrl+C handler")?;

    session.start_watching_every(interval);
    if !global.json {
        println!(
            "Watching {}/{} every {} ms. Press Ctrl+C to stop",
            sequence,
            shot,
            interval.as_millis()
        );
    }

    let _ = rx.recv();
    session.stop_watching();
    if !global.json {
        println!("Stopped watching.");
    }
    Ok(())
}
