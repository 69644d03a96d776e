//! lumbung: a minimal single-table record store. Rows are packed into
//! fixed-width slots on 4096-byte pages; the storage core lives in
//! [`storage`], the text command layer in [`planner`] and [`executor`].

pub mod executor;
pub mod planner;
pub mod storage;
pub mod types;
