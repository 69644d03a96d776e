use thiserror::Error;

use crate::{
    planner::statement::{MetaCommand, Statement},
    storage::{
        schema::{Column, Schema},
        table::Table,
    },
    types::{
        RowId,
        error::{InsertError, SchemaError},
        row::Row,
    },
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExecuteError {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Insert(#[from] InsertError),
}

/// What a statement produced, for the REPL (or any other front end) to
/// render. The engine itself never prints.
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    Created { table_name: String },
    Inserted { row_id: RowId },
    Rows { header: Vec<String>, rows: Vec<Row> },
    Tables(Option<TableDescription>),
    Exit,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableDescription {
    pub name: String,
    pub columns: Vec<Column>,
    pub row_count: RowId,
}

/// Owns the single table and executes typed statements against it.
///
/// The engine is an explicit value created by the entry point and passed
/// wherever it is needed; there is no global table state.
#[derive(Debug, Default)]
pub struct Engine {
    table: Table,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current table's schema, used by the parser to type inserts
    /// and by front ends to render headers.
    pub fn schema(&self) -> Option<&Schema> {
        self.table.schema()
    }

    pub fn execute(&mut self, statement: Statement) -> Result<Response, ExecuteError> {
        match statement {
            Statement::Create {
                table_name,
                columns,
            } => {
                self.table.create(&table_name, columns)?;
                Ok(Response::Created { table_name })
            }
            Statement::Insert { values } => {
                let row_id = self.table.insert(Row::new(values))?;
                Ok(Response::Inserted { row_id })
            }
            Statement::Select => {
                let header = self
                    .table
                    .schema()
                    .map(Schema::column_names)
                    .unwrap_or_default();
                let rows = self.table.scan().collect();
                Ok(Response::Rows { header, rows })
            }
            Statement::Meta(MetaCommand::Tables) => Ok(Response::Tables(self.describe())),
            Statement::Meta(MetaCommand::Exit) => Ok(Response::Exit),
        }
    }

    fn describe(&self) -> Option<TableDescription> {
        let schema = self.table.schema()?;
        Some(TableDescription {
            name: self.table.name().unwrap_or_default().to_string(),
            columns: schema.columns().to_vec(),
            row_count: self.table.row_count(),
        })
    }
}
