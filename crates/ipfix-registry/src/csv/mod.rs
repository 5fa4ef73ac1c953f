//! Strict CSV row readers for the two registries.
//!
//! Dialect: comma delimiter, `"` quoting, fields trimmed. Header rows are
//! not special-cased here; both registries publish one and the downstream
//! filters discard it by content (the `Value` code token, the `current`
//! status check). Any dialect violation is fatal for the run.

mod data_types;
mod elements;

pub use data_types::DataTypeRows;
pub use elements::ElementRows;

use std::io::Read;

use crate::error::RegistryError;

fn reader<R: Read>(input: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_reader(input)
}

fn field(record: &csv::StringRecord, row: u64, column: usize) -> Result<String, RegistryError> {
    record
        .get(column)
        .map(str::to_string)
        .ok_or(RegistryError::MissingColumn { row, column })
}
