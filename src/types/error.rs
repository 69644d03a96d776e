use thiserror::Error;

use crate::types::value::DataType;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("table schema must have at least one column")]
    Empty,

    #[error("row size {row_size} exceeds page size {page_size}")]
    RowTooLarge { row_size: usize, page_size: usize },

    #[error("column '{column}' has zero width")]
    ZeroWidthColumn { column: String },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("row has {actual} values but schema has {expected} columns")]
    ColumnCountMismatch { expected: usize, actual: usize },

    #[error("column '{column}' expects {expected}, got {actual}")]
    TypeMismatch {
        column: String,
        expected: DataType,
        actual: DataType,
    },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    #[error("page {page_index} is beyond the {max_pages}-page limit")]
    TableFull { page_index: usize, max_pages: usize },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InsertError {
    #[error("no table has been created yet")]
    NotReady,

    #[error("table is full")]
    TableFull,

    #[error("invalid row: {0}")]
    InvalidRow(#[from] CodecError),
}

impl From<AddressError> for InsertError {
    fn from(_: AddressError) -> Self {
        InsertError::TableFull
    }
}
