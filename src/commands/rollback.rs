//! Rollback command handler

use anyhow::Result;

use shotpub::{AssetType, CopyEngine, RollbackMode, RollbackRequest};

use super::GlobalArgs;

pub fn cmd_rollback(
    global: &GlobalArgs,
    sequence: &str,
    shot: &str,
    asset_type: AssetType,
    version: &str,
    replace: bool,
) -> Result<()> {
    let mut session = super::open_session(global, CopyEngine::new())?;
    let mode = if replace {
        RollbackMode::ReplaceScene
    } else {
        RollbackMode::Reference
    };
    let request = RollbackRequest::new(sequence, shot, Some(asset_type), version).with_mode(mode);
    let handle = session.rollback(&request)?;

    if global.json {
        super::print_json(&serde_json::json!({
            "type": "rollback",
            "namespace": handle.namespace,
            "path": handle.resolved_path.display().to_string(),
            "loaded_at": handle.loaded_at.to_rfc3339(),
            "replaced_scene": replace,
        }));
    } else {
        println!(
            "Rolled back {} to {} ({})",
            handle.locator,
            handle.artifact_label(),
            handle.namespace
        );
    }
    Ok(())
}
