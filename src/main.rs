use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use stampver::boundary::BoundaryWarning;
use stampver::config;
use stampver::domain::{BaseVersion, ResolvedVersion, Suffix};
use stampver::history::{Git2History, HistoryQuery};
use stampver::persist::FilePersistence;
use stampver::resolver::VersionResolver;
use stampver::ui;

#[derive(clap::Parser)]
#[command(
    name = "stampver",
    about = "Stamp the resolved build version and commit id into packaging files"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, help = "Repository root directory")]
    root: Option<PathBuf>,

    #[arg(long, help = "Preview what would happen without writing files")]
    dry_run: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("stampver {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Load configuration
    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }
    };

    let root = args.root.unwrap_or_else(|| PathBuf::from("."));
    let persistence = FilePersistence::new(&root, &config.version_file, &config.sha_file);

    // Read and validate the base version before touching any file, so a
    // malformed version leaves no partial state behind.
    let raw = match persistence.read_raw_version() {
        Ok(raw) => raw,
        Err(e) => {
            ui::display_error(&format!(
                "Cannot read version file '{}': {}",
                persistence.version_path().display(),
                e
            ));
            std::process::exit(1);
        }
    };

    let base = match BaseVersion::parse(&raw) {
        Ok(base) => base,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    // A directory that is not a git repository gets the same conservative
    // treatment as a shallow clone: plain base version, no commit id.
    let (suffix, warnings, sha) = match Git2History::open(&root) {
        Ok(history) => {
            let resolver = VersionResolver::new(&config.release_branch, &config.version_file);
            let resolution = resolver.resolve(&base, &history);
            let sha = history.last_commit(None);
            (resolution.suffix, resolution.warnings, sha)
        }
        Err(_) => {
            let warning = BoundaryWarning::ShallowHistory {
                base: base.to_string(),
            };
            (Suffix::Empty, vec![warning], None)
        }
    };

    for warning in &warnings {
        ui::display_boundary_warning(warning);
    }

    let resolved = ResolvedVersion::new(base, suffix).to_string();

    if args.dry_run {
        ui::display_status(&format!(
            "Would write commit id '{}' to {}",
            sha.as_deref().unwrap_or("n/a"),
            persistence.sha_path().display()
        ));
        ui::display_status(&format!("Would resolve version to {}", resolved));
        return Ok(());
    }

    persistence.write_commit_id(sha.as_deref()).with_context(|| {
        format!(
            "Cannot write commit id file '{}'",
            persistence.sha_path().display()
        )
    })?;

    let changed = persistence.write_version(&resolved).with_context(|| {
        format!(
            "Cannot write version file '{}'",
            persistence.version_path().display()
        )
    })?;

    if changed {
        ui::display_success(&format!("Updated version file to {}", resolved));
    }

    Ok(())
}
