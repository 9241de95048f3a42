//! Publish command handler

use std::path::PathBuf;

use anyhow::{bail, Result};

use shotpub::{AssetLocator, AssetType, CopyEngine, ExportFormat, PublishRequest};

use super::GlobalArgs;

pub struct PublishArgs {
    pub sequence: String,
    pub shot: String,
    pub asset_type: Option<AssetType>,
    pub wip: bool,
    pub description: String,
    pub formats: Vec<ExportFormat>,
    pub roots: Vec<String>,
    pub from: PathBuf,
}

pub fn cmd_publish(global: &GlobalArgs, args: PublishArgs) -> Result<()> {
    if !args.from.is_file() {
        bail!("scene file not found: {}", args.from.display());
    }

    let locator = match (args.wip, args.asset_type) {
        (true, asset_type) => AssetLocator::wip(&args.sequence, &args.shot, asset_type.unwrap_or(AssetType::Set)),
        (false, Some(asset_type)) => AssetLocator::publish(&args.sequence, &args.shot, asset_type),
        (false, None) => bail!("--asset-type is required for a publish"),
    };

    let mut session = super::open_session(global, CopyEngine::with_source(&args.from))?;
    let request = PublishRequest::new(locator, args.description)
        .with_formats(args.formats)
        .with_roots(args.roots);
    let result = session.publish(&request)?;

    for warning in &result.warnings {
        eprintln!("Warning: {}", warning);
    }

    if global.json {
        super::print_json(&serde_json::json!({
            "type": "publish",
            "directory": result.directory.display().to_string(),
            "base_tag": result.base_tag,
            "artifacts": result.artifacts,
        }));
        return Ok(());
    }

    println!("{}", result.summary());
    for artifact in &result.artifacts {
        println!("  {}", super::file_label(&artifact.path));
    }
    Ok(())
}
