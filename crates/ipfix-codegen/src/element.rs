//! Element-registry compilation: per-element macro triplets and struct rows.

use std::fmt::Write;

use ipfix_registry::error::RegistryError;
use ipfix_registry::model::InformationElement;
use ipfix_registry::vocabulary::byte_length;

/// Name padding for element-derived macros and the quoted-name column.
const ELEMENT_NAME_WIDTH: usize = 40;

/// Struct-row padding for the byte-length reference column.
const ROW_BYTES_WIDTH: usize = 20;

/// Struct-row padding for the placeholder column (right-aligned).
const ROW_PLACEHOLDER_WIDTH: usize = 5;

/// Deferred struct-row field; consumers have never assigned it a meaning.
const ROW_PLACEHOLDER: u32 = 0;

/// The four output accumulators, each in input row order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ElementBlocks {
    pub ids: String,
    pub lengths: String,
    pub types: String,
    pub struct_rows: String,
}

/// Compile element rows in CSV order.
///
/// Elements whose status is not `current` are skipped entirely. An element
/// whose data type the vocabulary does not list aborts the compile.
///
/// # Errors
///
/// Propagates row errors from the reader and
/// [`RegistryError::UnknownPrimitiveType`] from the vocabulary check.
pub fn compile_elements<I>(rows: I) -> Result<ElementBlocks, RegistryError>
where
    I: IntoIterator<Item = Result<InformationElement, RegistryError>>,
{
    let mut blocks = ElementBlocks::default();
    for row in rows {
        let element = row?;
        if !element.is_current() {
            continue;
        }
        append_element(&mut blocks, &element)?;
    }
    Ok(blocks)
}

fn append_element(
    blocks: &mut ElementBlocks,
    element: &InformationElement,
) -> Result<(), RegistryError> {
    // The emitted text only splices the type name; this lookup is the
    // vocabulary consistency check and the one failure path here.
    byte_length(&element.data_type)?;

    let name = element.name.as_str();
    let _ = writeln!(
        blocks.ids,
        "#define IPFIX_TYPEID_{name:<ELEMENT_NAME_WIDTH$} {}",
        element.element_id
    );
    let _ = writeln!(
        blocks.types,
        "#define IPFIX_DATA_TYPE_{name:<ELEMENT_NAME_WIDTH$} IPFIX_TYPE_{}",
        element.data_type
    );
    let _ = writeln!(
        blocks.lengths,
        "#define IPFIX_LENGTH_{name:<ELEMENT_NAME_WIDTH$} IPFIX_BYTES_{}",
        element.data_type
    );
    let quoted = format!("\"{name}\"");
    let _ = writeln!(
        blocks.struct_rows,
        "  {{ IPFIX_TYPEID_{name:<ELEMENT_NAME_WIDTH$}, IPFIX_BYTES_{:<ROW_BYTES_WIDTH$}, {ROW_PLACEHOLDER:>ROW_PLACEHOLDER_WIDTH$}, {quoted:<ELEMENT_NAME_WIDTH$}, IPFIX_DATA_TYPE_{name:<ELEMENT_NAME_WIDTH$} }},",
        element.data_type
    );
    Ok(())
}
