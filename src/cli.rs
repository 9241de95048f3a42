use std::path::PathBuf;

use clap::{Parser, Subcommand};
use shotpub::{AssetType, ExportFormat};

/// Shotpub - versioned asset publish, resolve and rollback
#[derive(Parser, Debug)]
#[command(name = "shotpub")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Project root (defaults to config / SHOTPUB_PROJECT_ROOT / current directory)
    #[arg(long, global = true)]
    pub project: Option<PathBuf>,

    /// Configuration file (defaults to {project}/shotpub.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List sequences, shots and the latest artifact per asset type
    Catalog {
        /// Only this sequence
        #[arg(long)]
        sequence: Option<String>,

        /// Only this shot (requires --sequence)
        #[arg(long, requires = "sequence")]
        shot: Option<String>,
    },

    /// List every published version of one asset type (rollback candidates)
    Versions {
        #[arg(long)]
        sequence: String,

        #[arg(long)]
        shot: String,

        #[arg(long, value_enum)]
        asset_type: AssetType,
    },

    /// Commit the next version of each requested format
    Publish {
        #[arg(long)]
        sequence: String,

        #[arg(long)]
        shot: String,

        /// Asset type (required unless --wip)
        #[arg(long, value_enum, required_unless_present = "wip")]
        asset_type: Option<AssetType>,

        /// Save a work-in-progress scene instead of a publish
        #[arg(long)]
        wip: bool,

        /// Description embedded in publish file names
        #[arg(short, long)]
        description: String,

        /// Export formats, in commit order
        #[arg(short, long = "format", value_enum, value_delimiter = ',', required = true)]
        formats: Vec<ExportFormat>,

        /// Selection roots for abc / fbx / usd exports
        #[arg(long = "root", value_delimiter = ',')]
        roots: Vec<String>,

        /// Scene file to commit
        #[arg(long)]
        from: PathBuf,
    },

    /// Bind a previously published version
    Rollback {
        #[arg(long)]
        sequence: String,

        #[arg(long)]
        shot: String,

        #[arg(long, value_enum)]
        asset_type: AssetType,

        /// File name of the version, as listed by `versions`
        #[arg(long)]
        version: String,

        /// Open the version in place of the current scene
        #[arg(long)]
        replace: bool,
    },

    /// Load the latest artifacts of a shot and report external updates
    Watch {
        #[arg(long)]
        sequence: String,

        #[arg(long)]
        shot: String,

        /// Polling interval (defaults to watch.interval_ms)
        #[arg(long)]
        interval_ms: Option<u64>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_publish() {
        let cli = Cli::try_parse_from([
            "shotpub",
            "publish",
            "--sequence",
            "sq01",
            "--shot",
            "sh010",
            "--asset-type",
            "animation",
            "-d",
            "walk",
            "--format",
            "abc,fbx",
            "--root",
            "|hero",
            "--from",
            "work.mb",
        ])
        .unwrap();
        if let Commands::Publish {
            asset_type,
            wip,
            formats,
            roots,
            ..
        } = cli.command
        {
            assert_eq!(asset_type, Some(AssetType::Animation));
            assert!(!wip);
            assert_eq!(formats, vec![ExportFormat::Alembic, ExportFormat::Fbx]);
            assert_eq!(roots, vec!["|hero".to_string()]);
        } else {
            panic!("Expected Publish command");
        }
    }

    #[test]
    fn test_cli_publish_requires_asset_type_unless_wip() {
        let base = [
            "shotpub", "publish", "--sequence", "sq01", "--shot", "sh010", "-d", "x", "-f", "mb",
            "--from", "a.mb",
        ];
        assert!(Cli::try_parse_from(base).is_err());

        let mut wip = base.to_vec();
        wip.push("--wip");
        assert!(Cli::try_parse_from(wip).is_ok());
    }

    #[test]
    fn test_cli_parse_rollback() {
        let cli = Cli::try_parse_from([
            "shotpub",
            "rollback",
            "--sequence",
            "sq01",
            "--shot",
            "sh010",
            "--asset-type",
            "layout",
            "--version",
            "sh010_cam_layout_v002.fbx",
            "--replace",
        ])
        .unwrap();
        if let Commands::Rollback {
            version, replace, ..
        } = cli.command
        {
            assert_eq!(version, "sh010_cam_layout_v002.fbx");
            assert!(replace);
        } else {
            panic!("Expected Rollback command");
        }
    }

    #[test]
    fn test_cli_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["shotpub", "catalog", "--json", "-vv", "--project", "/p"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.project, Some(PathBuf::from("/p")));
    }

    #[test]
    fn test_cli_shot_requires_sequence() {
        assert!(Cli::try_parse_from(["shotpub", "catalog", "--shot", "sh010"]).is_err());
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        let result = Cli::try_parse_from([
            "shotpub", "publish", "--sequence", "a", "--shot", "b", "--wip", "-d", "x", "-f", "obj",
            "--from", "a.mb",
        ]);
        assert!(result.is_err());
    }
}
