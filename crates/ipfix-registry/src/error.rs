#![deny(unsafe_code)]

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// An information element references a type name that is not in the
    /// static vocabulary. Fatal for the whole run.
    #[error("unknown primitive type {name:?}: not in the static type vocabulary")]
    UnknownPrimitiveType { name: String },

    /// A row violated the strict CSV dialect.
    #[error("malformed registry row: {source}")]
    MalformedRow {
        #[source]
        source: csv::Error,
    },

    /// A row is missing a column the compiler consults.
    #[error("registry row {row} is missing column {column}")]
    MissingColumn { row: u64, column: usize },
}
