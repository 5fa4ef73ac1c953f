//! Macro emission for the data-type registry and the static vocabulary.

use std::fmt::Write;

use ipfix_registry::model::DataTypeRow;
use ipfix_registry::vocabulary::PRIMITIVE_TYPES;

/// Code-column token identifying the registry's header row.
const HEADER_TOKEN: &str = "Value";

/// Name padding for `IPFIX_TYPE_` macros.
const NUMERIC_CODE_WIDTH: usize = 37;

/// Name padding for `IPFIX_BYTES_` macros.
const BYTE_LENGTH_WIDTH: usize = 25;

/// One `IPFIX_TYPE_<name>` macro per registry row that carries a description
/// and is not the column header. Row order is preserved; no deduplication.
pub fn numeric_code_macros(rows: &[DataTypeRow]) -> String {
    let mut out = String::new();
    for row in rows {
        if row.description.is_empty() || row.code == HEADER_TOKEN {
            continue;
        }
        let _ = writeln!(
            out,
            "#define IPFIX_TYPE_{:<NUMERIC_CODE_WIDTH$} {}",
            row.name, row.code
        );
    }
    out
}

/// The full `IPFIX_BYTES_` block, one line per vocabulary entry in
/// declaration order, independent of what the parsed registry contains.
pub fn byte_length_macros() -> String {
    let mut out = String::new();
    for ty in PRIMITIVE_TYPES {
        let _ = writeln!(
            out,
            "#define IPFIX_BYTES_{:<BYTE_LENGTH_WIDTH$} {}",
            ty.name, ty.bytes
        );
    }
    out
}
