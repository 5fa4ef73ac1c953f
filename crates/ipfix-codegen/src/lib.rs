#![deny(unsafe_code)]

//! Turns the two IANA IPFIX registries into a pair of C artifacts: a macro
//! header and a struct-table source file for the flow collector.
//!
//! The compile is two passes in strict order. The data-type registry is read
//! first and projected into numeric-code macros; the element registry is then
//! read against the static type vocabulary, which is where an unknown type
//! name aborts the run. Both artifacts are composed fully in memory, so a
//! failure anywhere produces zero output bytes.

use std::io::Read;

pub mod compose;
pub mod datatype;
pub mod element;

pub use crate::compose::Artifacts;
pub use crate::element::ElementBlocks;

use ipfix_registry::csv::{DataTypeRows, ElementRows};
use ipfix_registry::error::RegistryError;

/// Run the full compile over two readable CSV streams.
///
/// # Errors
///
/// Fails on any malformed row and on the first element whose data type is
/// missing from the vocabulary; no partial artifact is returned.
pub fn generate_artifacts<T, E>(types_csv: T, elements_csv: E) -> Result<Artifacts, RegistryError>
where
    T: Read,
    E: Read,
{
    let mut data_types = Vec::new();
    for row in DataTypeRows::new(types_csv) {
        data_types.push(row?);
    }
    let blocks = element::compile_elements(ElementRows::new(elements_csv))?;
    Ok(Artifacts {
        header: compose::compose_header(&data_types, &blocks),
        table: compose::compose_table(&blocks),
    })
}
