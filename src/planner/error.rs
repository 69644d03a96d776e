use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PrepareError {
    #[error("unrecognized statement: '{0}'")]
    UnrecognizedStatement(String),

    #[error("unrecognized meta command: '{0}'")]
    UnrecognizedMeta(String),

    #[error("create requires a table name")]
    MissingTableName,

    #[error("create requires at least one column definition")]
    MissingColumns,

    #[error("column '{column}' is missing a data type")]
    MissingDataType { column: String },

    #[error("unknown data type '{0}' (expected 'int' or 'string')")]
    UnknownDataType(String),

    #[error("'{0}' is not a valid integer")]
    InvalidInteger(String),
}
