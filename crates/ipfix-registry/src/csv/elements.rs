//! Row reader for the information-element registry.
//!
//! Column layout:
//! `ElementID,Name,Data Type,Data Type Semantics,Status,Description,Units,`
//! `Range,References,Requester,Revision,Date` — only the ID, name, data
//! type, and status columns are consulted.

use std::io::Read;

use crate::error::RegistryError;
use crate::model::InformationElement;

use super::{field, reader};

const COL_ELEMENT_ID: usize = 0;
const COL_NAME: usize = 1;
const COL_DATA_TYPE: usize = 2;
const COL_STATUS: usize = 4;

/// Streaming reader over element registry rows, in file order. Each element
/// is built transiently per record; callers project it and drop it.
pub struct ElementRows<R: Read> {
    records: csv::StringRecordsIntoIter<R>,
    row: u64,
}

impl<R: Read> ElementRows<R> {
    pub fn new(input: R) -> Self {
        Self {
            records: reader(input).into_records(),
            row: 0,
        }
    }

    fn parse(&self, record: &csv::StringRecord) -> Result<InformationElement, RegistryError> {
        Ok(InformationElement {
            element_id: field(record, self.row, COL_ELEMENT_ID)?,
            name: field(record, self.row, COL_NAME)?,
            data_type: field(record, self.row, COL_DATA_TYPE)?,
            status: field(record, self.row, COL_STATUS)?,
        })
    }
}

impl<R: Read> Iterator for ElementRows<R> {
    type Item = Result<InformationElement, RegistryError>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = match self.records.next()? {
            Ok(record) => record,
            Err(source) => return Some(Err(RegistryError::MalformedRow { source })),
        };
        self.row += 1;
        Some(self.parse(&record))
    }
}
