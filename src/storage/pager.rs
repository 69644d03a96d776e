use crate::types::{MAX_PAGES, PAGE_SIZE, RowId, error::AddressError};

use crate::storage::schema::Schema;

/// Location of a row slot: which page it lives on and where in that page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowAddress {
    pub page_index: usize,
    pub byte_offset: usize,
}

/// Compute the slot address for a row number under the given schema.
///
/// The page index is validated against `MAX_PAGES` here, before any
/// allocation is attempted, so a full table is reported without touching
/// page state.
pub fn address(row_number: RowId, schema: &Schema) -> Result<RowAddress, AddressError> {
    let page_index = row_number as usize / schema.rows_per_page();
    if page_index >= MAX_PAGES {
        return Err(AddressError::TableFull {
            page_index,
            max_pages: MAX_PAGES,
        });
    }

    let byte_offset = (row_number as usize % schema.rows_per_page()) * schema.row_size();
    Ok(RowAddress {
        page_index,
        byte_offset,
    })
}

/// Bounded arena of lazily allocated fixed-size pages.
///
/// A page exists iff some row addressed to it has been written. Pages are
/// zero-initialized on first touch and never freed while the table lives;
/// allocation is the only mutation.
#[derive(Debug, Default)]
pub struct Pager {
    pages: Vec<Option<Vec<u8>>>,
}

impl Pager {
    pub fn new() -> Self {
        Self { pages: Vec::new() }
    }

    /// The page at `page_index`, if it has been allocated.
    pub fn page(&self, page_index: usize) -> Option<&[u8]> {
        self.pages.get(page_index).and_then(|page| page.as_deref())
    }

    /// The page at `page_index`, allocating a zeroed one on first access.
    pub fn page_mut(&mut self, page_index: usize) -> Result<&mut [u8], AddressError> {
        if page_index >= MAX_PAGES {
            return Err(AddressError::TableFull {
                page_index,
                max_pages: MAX_PAGES,
            });
        }

        if page_index >= self.pages.len() {
            self.pages.resize_with(page_index + 1, || None);
        }
        Ok(self.pages[page_index]
            .get_or_insert_with(|| vec![0u8; PAGE_SIZE])
            .as_mut_slice())
    }

    pub fn allocated_pages(&self) -> usize {
        self.pages.iter().filter(|page| page.is_some()).count()
    }

    pub fn clear(&mut self) {
        self.pages.clear();
    }
}
