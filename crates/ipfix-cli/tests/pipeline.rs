//! Integration tests for the pipeline module.

use std::fs;
use std::path::Path;

use ipfix_cli::pipeline::{
    HEADER_FILE_NAME, TABLE_FILE_NAME, generate_from_paths, write_artifacts,
};
use ipfix_registry::RegistryError;

const DATA_TYPES_CSV: &str = "\
Value,Description,Reference
1,octetArray,[RFC7011]
4,unsigned32,[RFC7011]
";

const ELEMENTS_CSV: &str = "\
ElementID,Name,Data Type,Data Type Semantics,Status,Description,Units,Range,References,Requester,Revision,Date
1,octetDeltaCount,unsigned64,deltaCounter,current,The number of octets in packets of this flow.,octets,,[RFC5102],,0,2013-02-18
";

fn write_registries(dir: &Path) -> (std::path::PathBuf, std::path::PathBuf) {
    let ie_file = dir.join("ipfix-information-elements.csv");
    let type_file = dir.join("ipfix-information-element-data-types.csv");
    fs::write(&ie_file, ELEMENTS_CSV).unwrap();
    fs::write(&type_file, DATA_TYPES_CSV).unwrap();
    (ie_file, type_file)
}

#[test]
fn local_files_compile_to_the_same_artifacts_as_buffered_streams() {
    let dir = tempfile::tempdir().unwrap();
    let (ie_file, type_file) = write_registries(dir.path());

    let from_paths = generate_from_paths(&ie_file, &type_file).unwrap();
    let from_buffers =
        ipfix_codegen::generate_artifacts(DATA_TYPES_CSV.as_bytes(), ELEMENTS_CSV.as_bytes())
            .unwrap();

    assert_eq!(from_paths, from_buffers);
    assert!(from_paths.header.contains("IPFIX_TYPEID_octetDeltaCount"));
}

#[test]
fn artifacts_are_written_into_an_existing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let (ie_file, type_file) = write_registries(dir.path());
    let artifacts = generate_from_paths(&ie_file, &type_file).unwrap();

    let out_dir = tempfile::tempdir().unwrap();
    write_artifacts(&artifacts, Some(out_dir.path())).unwrap();

    let header = fs::read_to_string(out_dir.path().join(HEADER_FILE_NAME)).unwrap();
    let table = fs::read_to_string(out_dir.path().join(TABLE_FILE_NAME)).unwrap();
    assert_eq!(header, artifacts.header);
    assert_eq!(table, artifacts.table);
}

#[test]
fn a_missing_output_directory_is_rejected_before_writing() {
    let dir = tempfile::tempdir().unwrap();
    let (ie_file, type_file) = write_registries(dir.path());
    let artifacts = generate_from_paths(&ie_file, &type_file).unwrap();

    let missing = dir.path().join("no-such-dir");
    let error = write_artifacts(&artifacts, Some(&missing)).unwrap_err();
    assert!(error.to_string().contains("does not exist"));
    assert!(!missing.exists());
}

#[test]
fn an_unknown_element_type_fails_with_no_output_files() {
    let dir = tempfile::tempdir().unwrap();
    let ie_file = dir.path().join("elements.csv");
    let type_file = dir.path().join("types.csv");
    fs::write(&ie_file, ELEMENTS_CSV.replace("unsigned64", "bogusType")).unwrap();
    fs::write(&type_file, DATA_TYPES_CSV).unwrap();

    let error = generate_from_paths(&ie_file, &type_file).unwrap_err();
    let registry_error = error.downcast_ref::<RegistryError>().unwrap();
    assert!(matches!(
        registry_error,
        RegistryError::UnknownPrimitiveType { name } if name == "bogusType"
    ));
}

#[test]
fn a_missing_input_file_reports_its_path() {
    let dir = tempfile::tempdir().unwrap();
    let (_, type_file) = write_registries(dir.path());
    let missing = dir.path().join("nope.csv");

    let error = generate_from_paths(&missing, &type_file).unwrap_err();
    assert!(error.to_string().contains("nope.csv"));
}
