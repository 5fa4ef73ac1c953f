//! Row types for the two IANA registries.
//!
//! Fields are kept as verbatim registry text. The compiler splices them into
//! macro definitions without interpreting them, so numeric columns stay
//! strings here.

/// One row of the data-type registry (`Value,Description,Reference`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataTypeRow {
    pub code: String,
    pub name: String,
    pub description: String,
}

/// One row of the information-element registry.
///
/// Built per CSV record, projected into macro text, then dropped; nothing
/// retains elements across the pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InformationElement {
    pub element_id: String,
    pub name: String,
    pub data_type: String,
    pub status: String,
}

impl InformationElement {
    /// Registry lifecycle filter: only current elements are generated.
    pub fn is_current(&self) -> bool {
        self.status == "current"
    }
}
