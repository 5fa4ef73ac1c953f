//! Row reader for the data-type registry (`Value,Description,Reference`).

use std::io::Read;

use crate::error::RegistryError;
use crate::model::DataTypeRow;

use super::{field, reader};

const COL_CODE: usize = 0;
const COL_NAME: usize = 1;
const COL_DESCRIPTION: usize = 2;

/// Streaming reader over data-type registry rows, in file order.
pub struct DataTypeRows<R: Read> {
    records: csv::StringRecordsIntoIter<R>,
    row: u64,
}

impl<R: Read> DataTypeRows<R> {
    pub fn new(input: R) -> Self {
        Self {
            records: reader(input).into_records(),
            row: 0,
        }
    }

    fn parse(&self, record: &csv::StringRecord) -> Result<DataTypeRow, RegistryError> {
        Ok(DataTypeRow {
            code: field(record, self.row, COL_CODE)?,
            name: field(record, self.row, COL_NAME)?,
            description: field(record, self.row, COL_DESCRIPTION)?,
        })
    }
}

impl<R: Read> Iterator for DataTypeRows<R> {
    type Item = Result<DataTypeRow, RegistryError>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = match self.records.next()? {
            Ok(record) => record,
            Err(source) => return Some(Err(RegistryError::MalformedRow { source })),
        };
        self.row += 1;
        Some(self.parse(&record))
    }
}
