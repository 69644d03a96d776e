pub mod codec;
pub mod pager;
pub mod schema;
pub mod table;
