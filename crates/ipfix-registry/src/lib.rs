#![deny(unsafe_code)]

pub mod csv;
pub mod error;
pub mod model;
pub mod vocabulary;

pub use crate::csv::{DataTypeRows, ElementRows};
pub use crate::error::RegistryError;
pub use crate::model::{DataTypeRow, InformationElement};
pub use crate::vocabulary::{PRIMITIVE_TYPES, PrimitiveType, VARIABLE_LENGTH, byte_length};
