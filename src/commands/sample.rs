//! `roadnet sample` - emit the built-in network as a snapshot

use std::path::Path;

use crate::cli::{Cli, OutputFormat};
use roadnet_core::error::Result;
use roadnet_core::snapshot::{RoadSnapshot, SnapshotFile, SnapshotFormat};

pub fn execute(cli: &Cli, output: Option<&Path>) -> Result<()> {
    let snapshot = RoadSnapshot::sample();

    if let Some(path) = output {
        SnapshotFile::new(path).write(&snapshot)?;
        if !cli.quiet {
            eprintln!("wrote {}", path.display());
        }
        return Ok(());
    }

    let format = match cli.format {
        OutputFormat::Json => SnapshotFormat::Json,
        OutputFormat::Human => SnapshotFormat::Yaml,
    };
    let text = snapshot.render(format)?;
    if text.ends_with('\n') {
        print!("{}", text);
    } else {
        println!("{}", text);
    }
    Ok(())
}
