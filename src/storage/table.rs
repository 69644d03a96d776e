use crate::types::{
    RowId,
    error::{InsertError, SchemaError},
    row::Row,
};

use crate::storage::{
    codec,
    pager::{self, Pager},
    schema::{Column, Schema},
};

/// The single table of the store: schema, page arena, and row count.
///
/// A table starts uninitialized (no schema). `create` makes it ready;
/// `insert` appends rows; `scan` reads them back. Writers take
/// `&mut self` and readers `&self`, which is exactly the single-writer /
/// shared-reader discipline the page memory needs.
#[derive(Debug, Default)]
pub struct Table {
    name: Option<String>,
    schema: Option<Schema>,
    pager: Pager,
    row_count: RowId,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    /// Define the table's schema and make it ready for inserts.
    ///
    /// On success any previously allocated pages are released and the row
    /// count resets to zero. On failure the table is left exactly as it
    /// was.
    pub fn create(&mut self, name: &str, columns: Vec<Column>) -> Result<(), SchemaError> {
        let schema = Schema::define(columns)?;
        self.name = Some(name.to_string());
        self.schema = Some(schema);
        self.pager.clear();
        self.row_count = 0;
        Ok(())
    }

    /// Append a row at the current end of the table.
    ///
    /// The row is encoded into a scratch slot first and copied into page
    /// memory only once everything has been validated, so a failed insert
    /// changes neither `row_count` nor any page byte. Allocates at most
    /// one page. Returns the zero-based row id.
    pub fn insert(&mut self, row: Row) -> Result<RowId, InsertError> {
        let schema = self.schema.as_ref().ok_or(InsertError::NotReady)?;

        let row_number = self.row_count;
        let slot = codec::encode(&row, schema)?;
        let addr = pager::address(row_number, schema)?;

        let page = self.pager.page_mut(addr.page_index)?;
        page[addr.byte_offset..addr.byte_offset + slot.len()].copy_from_slice(&slot);

        self.row_count += 1;
        Ok(row_number)
    }

    /// Iterate over all rows in insertion order.
    ///
    /// The row count is captured when the scan is created, so the scan's
    /// length is fixed at its start. Each call starts over from row zero
    /// against the table's current contents.
    pub fn scan(&self) -> TableScan<'_> {
        TableScan {
            table: self,
            next_row: 0,
            end_row: self.row_count,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn schema(&self) -> Option<&Schema> {
        self.schema.as_ref()
    }

    pub fn row_count(&self) -> RowId {
        self.row_count
    }

    pub fn is_ready(&self) -> bool {
        self.schema.is_some()
    }

    pub fn allocated_pages(&self) -> usize {
        self.pager.allocated_pages()
    }

    fn row_at(&self, row_number: RowId) -> Option<Row> {
        let schema = self.schema.as_ref()?;
        let addr = pager::address(row_number, schema).ok()?;
        let page = self.pager.page(addr.page_index)?;
        let slot = &page[addr.byte_offset..addr.byte_offset + schema.row_size()];
        Some(codec::decode(slot, schema))
    }
}

/// Snapshot iterator over a table's rows. See [`Table::scan`].
pub struct TableScan<'a> {
    table: &'a Table,
    next_row: RowId,
    end_row: RowId,
}

impl Iterator for TableScan<'_> {
    type Item = Row;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_row >= self.end_row {
            return None;
        }
        let row = self.table.row_at(self.next_row);
        self.next_row += 1;
        row
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.end_row - self.next_row) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for TableScan<'_> {}
