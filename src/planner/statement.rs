use crate::{storage::schema::Column, types::value::Value};

/// A fully typed command, decoupling the text grammar from the storage
/// layer: the parser produces these and the engine consumes them.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Create {
        table_name: String,
        columns: Vec<Column>,
    },
    Insert {
        values: Vec<Value>,
    },
    Select,
    Meta(MetaCommand),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaCommand {
    Exit,
    Tables,
}
