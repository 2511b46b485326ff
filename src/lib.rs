//! # Tabulon
//!
//! Runtime backend dispatch for a multi-backend numerical computing library.
//!
//! Tabulon lets one library front several hardware targets (CPU, integrated
//! GPU, discrete GPU, a generic fallback) without statically linking every
//! backend. At first use of a device, the loader walks an ordered list of
//! candidate backend plugins, opens the first one that loads, resolves the
//! domain's exported function-pointer table, validates its ABI version
//! stamp, and caches the table per device. Later calls for the same device
//! are a lock-free cache hit.
//!
//! ## Features
//!
//! - **Lazy loading**: backends are opened on first use of a device
//! - **Registry-driven search**: candidate order encodes preference,
//!   first successful open wins
//! - **Versioned ABI**: tables carry a leading version stamp that is
//!   validated before anything else is interpreted
//! - **Handle-lifetime management**: the plugin image stays resident for
//!   as long as its cached table may be used
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tabulon::prelude::*;
//! use tabulon::domains::blas;
//!
//! let queue = Queue::new(Device::Cpu);
//! let table = blas::blas_tables().resolve(queue.device(), &queue)?;
//! // `table` holds validated C-ABI function pointers into the CPU backend.
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod device;
pub mod domains;
pub mod error;
pub mod loader;
pub mod registry;
pub mod table;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::device::{Device, Domain, Queue};
    pub use crate::error::{Error, Result};
    pub use crate::loader::{NativeLibrary, NativeLoader, TableInitializer};
    pub use crate::table::{FunctionTable, SPEC_VERSION};
}

pub use error::{Error, Result};
