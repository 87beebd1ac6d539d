use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::info;

use crate::parser::model::MenuDocument;

/// Serialize one hall's finished document into `dir/filename` as UTF-8 JSON
/// with 4-space indentation, non-ASCII characters left unescaped. The output
/// directory is created if missing.
pub fn write_document(dir: &Path, filename: &str, menu: &MenuDocument) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory {}", dir.display()))?;

    let path = dir.join(filename);
    let file =
        File::create(&path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);
    menu.serialize(&mut serializer)
        .with_context(|| format!("failed to serialize {}", path.display()))?;
    writer.flush()?;

    info!("Wrote {}", path.display());
    Ok(path)
}

// ── Tests ──
