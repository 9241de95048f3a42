//! Versions command handler

use anyhow::Result;

use shotpub::{AssetType, CopyEngine};

use super::GlobalArgs;

pub fn cmd_versions(global: &GlobalArgs, sequence: &str, shot: &str, asset_type: AssetType) -> Result<()> {
    let session = super::open_session(global, CopyEngine::new())?;
    let versions = session.catalog().list_versions(sequence, shot, asset_type)?;

    if global.json {
        let items: Vec<_> = versions.iter().map(super::catalog::entry_json).collect();
        super::print_json(&serde_json::json!({
            "type": "versions",
            "sequence": sequence,
            "shot": shot,
            "asset_type": asset_type.as_str(),
            "versions": items,
        }));
        return Ok(());
    }

    if versions.is_empty() {
        println!("No versions of {} in {}/{}", asset_type.label(), sequence, shot);
        return Ok(());
    }
    for entry in &versions {
        println!("{}", entry.label());
    }
    Ok(())
}
