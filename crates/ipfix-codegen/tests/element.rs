//! Tests for element-registry compilation.

use ipfix_codegen::element::compile_elements;
use ipfix_registry::{InformationElement, RegistryError};

fn element(id: &str, name: &str, data_type: &str, status: &str) -> InformationElement {
    InformationElement {
        element_id: id.to_string(),
        name: name.to_string(),
        data_type: data_type.to_string(),
        status: status.to_string(),
    }
}

fn compile(elements: Vec<InformationElement>) -> Result<ipfix_codegen::ElementBlocks, RegistryError> {
    compile_elements(elements.into_iter().map(Ok))
}

#[test]
fn minimal_current_element_compiles_to_the_macro_triplet() {
    let blocks = compile(vec![element("1", "test", "unsigned32", "current")]).unwrap();

    assert_eq!(
        blocks.ids,
        "#define IPFIX_TYPEID_test                                     1\n"
    );
    assert_eq!(
        blocks.types,
        "#define IPFIX_DATA_TYPE_test                                     IPFIX_TYPE_unsigned32\n"
    );
    assert_eq!(
        blocks.lengths,
        "#define IPFIX_LENGTH_test                                     IPFIX_BYTES_unsigned32\n"
    );
    assert_eq!(
        blocks.struct_rows,
        "  { IPFIX_TYPEID_test                                    , IPFIX_BYTES_unsigned32          ,     0, \"test\"                                  , IPFIX_DATA_TYPE_test                                     },\n"
    );
}

#[test]
fn non_current_elements_contribute_nothing() {
    for status in ["deprecated", "reserved", "", "Current"] {
        let blocks = compile(vec![element("3", "legacyThing", "unsigned32", status)]).unwrap();
        assert!(blocks.ids.is_empty());
        assert!(blocks.lengths.is_empty());
        assert!(blocks.types.is_empty());
        assert!(blocks.struct_rows.is_empty());
    }
}

#[test]
fn unknown_data_type_aborts_the_compile() {
    let error = compile(vec![
        element("1", "okElement", "unsigned32", "current"),
        element("2", "badElement", "bogusType", "current"),
    ])
    .unwrap_err();
    match error {
        RegistryError::UnknownPrimitiveType { name } => assert_eq!(name, "bogusType"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn unknown_type_on_a_skipped_row_is_not_checked() {
    // The status filter runs before the vocabulary check; a deprecated row
    // with a bad type never reaches it.
    let blocks = compile(vec![element("9", "oldElement", "bogusType", "deprecated")]).unwrap();
    assert!(blocks.struct_rows.is_empty());
}

#[test]
fn output_order_follows_input_row_order() {
    let blocks = compile(vec![
        element("8", "sourceIPv4Address", "ipv4Address", "current"),
        element("1", "octetDeltaCount", "unsigned64", "current"),
    ])
    .unwrap();
    let names: Vec<&str> = blocks
        .ids
        .lines()
        .map(|line| line.split_whitespace().nth(1).unwrap())
        .collect();
    assert_eq!(
        names,
        ["IPFIX_TYPEID_sourceIPv4Address", "IPFIX_TYPEID_octetDeltaCount"]
    );
}

#[test]
fn row_errors_propagate() {
    let rows: Vec<Result<InformationElement, RegistryError>> = vec![Err(
        RegistryError::MissingColumn { row: 7, column: 4 },
    )];
    assert!(compile_elements(rows).is_err());
}
