//! Subcommand implementations.

use anyhow::{Result, bail};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{CellAlignment, Table};
use tracing::{info, info_span};

use ipfix_registry::{PRIMITIVE_TYPES, VARIABLE_LENGTH};

use crate::cli::GenerateArgs;
use ipfix_cli::pipeline::{generate_from_paths, generate_from_update, write_artifacts};

pub fn run_generate(args: &GenerateArgs) -> Result<()> {
    let span = info_span!("generate");
    let _guard = span.enter();
    let artifacts = if args.update {
        info!("updating registries from IANA");
        generate_from_update()?
    } else {
        let (Some(ie_file), Some(type_file)) = (args.ie_file.as_deref(), args.type_file.as_deref())
        else {
            // clap enforces the mode matrix; this covers programmatic misuse.
            bail!("either --update or both --ie-file and --type-file are required");
        };
        generate_from_paths(ie_file, type_file)?
    };
    write_artifacts(&artifacts, args.directory.as_deref())
}

pub fn run_types() -> Result<()> {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.apply_modifier(UTF8_ROUND_CORNERS);
    table.set_header(vec!["Type", "Bytes"]);
    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    for ty in PRIMITIVE_TYPES {
        let bytes = if ty.bytes == VARIABLE_LENGTH {
            "variable".to_string()
        } else {
            ty.bytes.to_string()
        };
        table.add_row(vec![ty.name.to_string(), bytes]);
    }
    println!("{table}");
    Ok(())
}
