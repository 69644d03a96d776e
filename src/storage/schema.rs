use serde::{Deserialize, Serialize};

use crate::types::{
    INT_WIDTH, PAGE_SIZE, TEXT_WIDTH,
    error::SchemaError,
    value::DataType,
};

/// Storage kind of a column. `Text` slots carry their fixed width so a
/// schema may mix widths even though the REPL only ever creates
/// `TEXT_WIDTH`-wide ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnKind {
    Integer,
    Text { width: usize },
}

impl ColumnKind {
    /// Number of bytes the column occupies in a row slot.
    pub fn width(&self) -> usize {
        match self {
            ColumnKind::Integer => INT_WIDTH,
            ColumnKind::Text { width } => *width,
        }
    }

    pub fn data_type(&self) -> DataType {
        match self {
            ColumnKind::Integer => DataType::Integer,
            ColumnKind::Text { .. } => DataType::Text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub kind: ColumnKind,
}

impl Column {
    pub fn new(name: impl Into<String>, kind: ColumnKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub fn integer(name: impl Into<String>) -> Self {
        Self::new(name, ColumnKind::Integer)
    }

    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, ColumnKind::Text { width: TEXT_WIDTH })
    }
}

/// Ordered column list plus the row geometry derived from it. Column order
/// defines both the byte layout of a slot and the value order of a row.
/// Immutable once built; `define` is the only constructor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    columns: Vec<Column>,
    row_size: usize,
    rows_per_page: usize,
}

impl Schema {
    /// Build a schema and compute its row geometry.
    ///
    /// Rejects empty column lists, zero-width columns, and rows wider than
    /// a page (which would make `rows_per_page` zero).
    pub fn define(columns: Vec<Column>) -> Result<Self, SchemaError> {
        if columns.is_empty() {
            return Err(SchemaError::Empty);
        }
        if let Some(column) = columns.iter().find(|column| column.kind.width() == 0) {
            return Err(SchemaError::ZeroWidthColumn {
                column: column.name.clone(),
            });
        }

        let row_size: usize = columns.iter().map(|column| column.kind.width()).sum();
        if row_size > PAGE_SIZE {
            return Err(SchemaError::RowTooLarge {
                row_size,
                page_size: PAGE_SIZE,
            });
        }

        let rows_per_page = PAGE_SIZE / row_size;
        Ok(Self {
            columns,
            row_size,
            rows_per_page,
        })
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn row_size(&self) -> usize {
        self.row_size
    }

    pub fn rows_per_page(&self) -> usize {
        self.rows_per_page
    }

    /// Byte offset of a column within a row slot: the prefix sum of the
    /// widths of all prior columns.
    pub fn column_offset(&self, column_index: usize) -> usize {
        self.columns[..column_index]
            .iter()
            .map(|column| column.kind.width())
            .sum()
    }

    pub fn column_names(&self) -> Vec<String> {
        self.columns
            .iter()
            .map(|column| column.name.clone())
            .collect()
    }
}
