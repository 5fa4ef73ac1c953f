//! Generation pipeline: stream acquisition through artifact writing.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::{debug, info};

use ipfix_codegen::Artifacts;

/// Header artifact file name when writing into a directory.
pub const HEADER_FILE_NAME: &str = "ipfix_iana.h";

/// Struct-table artifact file name when writing into a directory.
pub const TABLE_FILE_NAME: &str = "ipfix_iana.c";

/// Compile the two registries from local CSV files.
pub fn generate_from_paths(ie_file: &Path, type_file: &Path) -> Result<Artifacts> {
    debug!(ie_file = %ie_file.display(), type_file = %type_file.display(), "reading registries");
    let types_csv =
        File::open(type_file).with_context(|| format!("open {}", type_file.display()))?;
    let elements_csv =
        File::open(ie_file).with_context(|| format!("open {}", ie_file.display()))?;
    let artifacts = ipfix_codegen::generate_artifacts(types_csv, elements_csv)
        .context("compile registries")?;
    info!(
        header_bytes = artifacts.header.len(),
        table_bytes = artifacts.table.len(),
        "composed artifacts"
    );
    Ok(artifacts)
}

/// Compile the two registries freshly downloaded from IANA.
pub fn generate_from_update() -> Result<Artifacts> {
    let (elements_csv, types_csv) =
        ipfix_fetch::download_registries().context("download registries")?;
    ipfix_codegen::generate_artifacts(types_csv, elements_csv).context("compile registries")
}

/// Write both artifacts, to stdout or into `directory`.
///
/// Callers pass fully composed artifacts, so a compile failure earlier in
/// the run leaves both destinations untouched.
pub fn write_artifacts(artifacts: &Artifacts, directory: Option<&Path>) -> Result<()> {
    match directory {
        Some(dir) => {
            if !dir.is_dir() {
                bail!("output directory {} does not exist", dir.display());
            }
            let header_path = dir.join(HEADER_FILE_NAME);
            fs::write(&header_path, &artifacts.header)
                .with_context(|| format!("write {}", header_path.display()))?;
            let table_path = dir.join(TABLE_FILE_NAME);
            fs::write(&table_path, &artifacts.table)
                .with_context(|| format!("write {}", table_path.display()))?;
            info!(directory = %dir.display(), "wrote artifacts");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(artifacts.header.as_bytes())
                .and_then(|()| stdout.write_all(artifacts.table.as_bytes()))
                .context("write artifacts to stdout")?;
        }
    }
    Ok(())
}
