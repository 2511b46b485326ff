//! Backend plugin loading and per-device table caching.
//!
//! A backend is a shared library that exports, under the domain's registry
//! symbol, a static `#[repr(C)]` table whose first field is a `u32` ABI
//! version:
//!
//! ```c
//! const tabulon_blas_table_t tabulon_blas_table = { .version = 1, /* ... */ };
//! ```
//!
//! [`TableInitializer`] finds, opens, and validates such plugins lazily,
//! one per device, and keeps each opened library resident for as long as
//! its cached table may be used.

mod initializer;
mod native;

pub use initializer::TableInitializer;
pub use native::{NativeLibrary, NativeLoader, SystemLibrary, SystemLoader};
