#![deny(unsafe_code)]

//! The static primitive-type vocabulary.
//!
//! This table is configuration, not parsed input. It must be kept in sync by
//! hand with the set of type names the IANA registry assigns; every type an
//! information element references has to resolve here (see [`byte_length`]).

use crate::error::RegistryError;

/// Sentinel byte width for array, list, and string types.
pub const VARIABLE_LENGTH: u16 = 65535;

/// A primitive data type and its encoded byte width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrimitiveType {
    pub name: &'static str,
    pub bytes: u16,
}

/// All primitive types known to the generator, in the order the byte-length
/// macro block is emitted.
pub const PRIMITIVE_TYPES: &[PrimitiveType] = &[
    PrimitiveType { name: "octetArray", bytes: VARIABLE_LENGTH },
    PrimitiveType { name: "unsigned8", bytes: 1 },
    PrimitiveType { name: "unsigned16", bytes: 2 },
    PrimitiveType { name: "unsigned32", bytes: 4 },
    PrimitiveType { name: "unsigned64", bytes: 8 },
    PrimitiveType { name: "signed8", bytes: 1 },
    PrimitiveType { name: "signed16", bytes: 2 },
    PrimitiveType { name: "signed32", bytes: 4 },
    PrimitiveType { name: "signed64", bytes: 8 },
    PrimitiveType { name: "float32", bytes: 4 },
    PrimitiveType { name: "float64", bytes: 8 },
    PrimitiveType { name: "boolean", bytes: 1 },
    PrimitiveType { name: "macAddress", bytes: 6 },
    PrimitiveType { name: "string", bytes: VARIABLE_LENGTH },
    PrimitiveType { name: "dateTimeSeconds", bytes: 4 },
    PrimitiveType { name: "dateTimeMilliseconds", bytes: 8 },
    PrimitiveType { name: "dateTimeMicroseconds", bytes: 8 },
    PrimitiveType { name: "dateTimeNanoseconds", bytes: 8 },
    PrimitiveType { name: "ipv4Address", bytes: 4 },
    PrimitiveType { name: "ipv6Address", bytes: 16 },
    PrimitiveType { name: "basicList", bytes: VARIABLE_LENGTH },
    PrimitiveType { name: "subTemplateList", bytes: VARIABLE_LENGTH },
    PrimitiveType { name: "subTemplateMultiList", bytes: VARIABLE_LENGTH },
];

/// Byte width of `name`.
///
/// # Errors
///
/// Returns [`RegistryError::UnknownPrimitiveType`] when the vocabulary does
/// not list `name`.
pub fn byte_length(name: &str) -> Result<u16, RegistryError> {
    PRIMITIVE_TYPES
        .iter()
        .find(|ty| ty.name == name)
        .map(|ty| ty.bytes)
        .ok_or_else(|| RegistryError::UnknownPrimitiveType {
            name: name.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_width_lookups() {
        assert_eq!(byte_length("unsigned8").unwrap(), 1);
        assert_eq!(byte_length("unsigned16").unwrap(), 2);
        assert_eq!(byte_length("unsigned32").unwrap(), 4);
        assert_eq!(byte_length("macAddress").unwrap(), 6);
        assert_eq!(byte_length("dateTimeNanoseconds").unwrap(), 8);
        assert_eq!(byte_length("ipv6Address").unwrap(), 16);
    }

    #[test]
    fn variable_width_types_use_the_sentinel() {
        for name in [
            "octetArray",
            "string",
            "basicList",
            "subTemplateList",
            "subTemplateMultiList",
        ] {
            assert_eq!(byte_length(name).unwrap(), VARIABLE_LENGTH);
        }
    }

    #[test]
    fn unknown_type_carries_the_offending_name() {
        let error = byte_length("bogusType").unwrap_err();
        match error {
            RegistryError::UnknownPrimitiveType { name } => assert_eq!(name, "bogusType"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert!(byte_length("Unsigned32").is_err());
    }

    #[test]
    fn vocabulary_covers_all_registry_types() {
        assert_eq!(PRIMITIVE_TYPES.len(), 23);
    }
}
