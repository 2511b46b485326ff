//! Concrete domain function tables.
//!
//! Each mathematical domain defines its own `#[repr(C)]` table type and
//! holds one process-wide [`TableInitializer`](crate::loader::TableInitializer)
//! for it. The loader never looks past a table's leading version field;
//! everything after it belongs to the domain.

pub mod blas;
