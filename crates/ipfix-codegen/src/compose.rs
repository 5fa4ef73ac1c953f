//! Artifact assembly: the include-guarded header and the struct-table source.
//!
//! Pure text concatenation over already-validated blocks; no failure path.
//! Output must be byte-identical across runs for a given input, so the block
//! order and blank-line placement here are part of the contract.

use ipfix_registry::model::DataTypeRow;

use crate::datatype::{byte_length_macros, numeric_code_macros};
use crate::element::ElementBlocks;

/// The two composed output texts, built fully in memory before any write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifacts {
    pub header: String,
    pub table: String,
}

/// Header artifact: include guard, numeric-code macros, the byte-length
/// block, then the ID, length, and type macro blocks in that order.
pub fn compose_header(data_types: &[DataTypeRow], blocks: &ElementBlocks) -> String {
    let mut out = String::new();
    out.push_str("#ifndef IPFIX_IANA_H\n#define IPFIX_IANA_H\n\n#include \"ipfix_names.h\"\n\n");
    out.push_str(&numeric_code_macros(data_types));
    out.push('\n');
    out.push_str(&byte_length_macros());
    out.push('\n');
    out.push_str(&blocks.ids);
    out.push('\n');
    out.push_str(&blocks.lengths);
    out.push('\n');
    out.push_str(&blocks.types);
    out.push('\n');
    out.push_str("\n#endif\n");
    out
}

/// Struct artifact: header include, `extern "C"` wrapper for mixed C/C++
/// linkage, and the identifier array in compiler order.
pub fn compose_table(blocks: &ElementBlocks) -> String {
    let mut out = String::new();
    out.push_str("#include \"ipfix_iana.h\"\n\n#ifdef __cplusplus\nextern \"C\" {\n#endif\n\n");
    out.push_str("struct ipfix_identifier ipfixids_iana[] = {\n/* IANA registry */\n");
    out.push_str(&blocks.struct_rows);
    out.push_str("};\n\n");
    out.push_str("#ifdef __cplusplus\n}\n#endif\n");
    out
}
