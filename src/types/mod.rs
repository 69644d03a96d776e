pub mod error;
pub mod row;
pub mod value;

// Common type aliases
pub type RowId = u32;
pub type PageId = u32;

pub const PAGE_SIZE: usize = 4096;
pub const MAX_PAGES: usize = 100;

pub const INT_WIDTH: usize = 4; // i32, little-endian
pub const TEXT_WIDTH: usize = 256; // slot width, last byte reserved for the NUL terminator
