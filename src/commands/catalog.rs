//! Catalog command handler

use anyhow::Result;
use chrono::{DateTime, Utc};

use shotpub::{CopyEngine, VersionEntry};

use super::GlobalArgs;

pub fn cmd_catalog(global: &GlobalArgs, sequence: Option<&str>, shot: Option<&str>) -> Result<()> {
    let session = super::open_session(global, CopyEngine::new())?;
    let catalog = session.catalog();

    let sequences = match sequence {
        Some(s) => vec![s.to_string()],
        None => catalog.enumerate_sequences()?,
    };

    let mut json_sequences = Vec::new();
    for sequence in &sequences {
        let shots = match shot {
            Some(s) => vec![s.to_string()],
            None => catalog.enumerate_shots(sequence)?,
        };
        if !global.json {
            println!("{}", sequence);
        }

        let mut json_shots = Vec::new();
        for shot in &shots {
            let latest = catalog.enumerate_asset_types(sequence, shot)?;
            if global.json {
                let assets: serde_json::Map<String, serde_json::Value> = latest
                    .iter()
                    .map(|(asset_type, entry)| (asset_type.as_str().to_string(), entry_json(entry)))
                    .collect();
                json_shots.push(serde_json::json!({ "name": shot, "latest": assets }));
                continue;
            }

            println!("  {}", shot);
            if latest.is_empty() {
                println!("    (no published assets)");
            }
            for (asset_type, entry) in &latest {
                println!("    {:<28} {}", asset_type.label(), entry.label());
            }
        }
        json_sequences.push(serde_json::json!({ "name": sequence, "shots": json_shots }));
    }

    if global.json {
        super::print_json(&serde_json::json!({
            "type": "catalog",
            "root": session.root().display().to_string(),
            "sequences": json_sequences,
        }));
    } else if sequences.is_empty() {
        println!("No sequences under {}", session.root().display());
    }
    Ok(())
}

pub(super) fn entry_json(entry: &VersionEntry) -> serde_json::Value {
    let modified: DateTime<Utc> = entry.modified_at.into();
    serde_json::json!({
        "label": entry.label(),
        "format": entry.format,
        "version": entry.version,
        "path": entry.path.display().to_string(),
        "modified_at": modified.to_rfc3339(),
    })
}
