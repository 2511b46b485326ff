//! Error types for Tabulon.

use crate::device::{Device, Domain};
use thiserror::Error;

/// Result type alias using Tabulon's Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures raised while resolving a backend function table.
///
/// Every failure aborts the current resolve call; nothing is cached, so a
/// later call for the same device attempts loading again (for example after
/// the missing plugin has been installed).
#[derive(Error, Debug)]
pub enum Error {
    /// The generic fallback device was requested, no candidate opened, and
    /// this build carries no generic backend.
    #[error("device not supported by this build: {device}")]
    UnsupportedDevice {
        /// Description of the requesting queue's device.
        device: String,
    },

    /// No candidate backend library could be opened for the device.
    #[error("no {domain} backend found for {device} (tried {tried:?}): {detail}")]
    BackendNotFound {
        /// Domain being resolved.
        domain: Domain,
        /// Device being resolved.
        device: Device,
        /// Candidate library file names attempted, in registry order.
        tried: Vec<String>,
        /// Platform loader's error text for the last attempted candidate.
        detail: String,
    },

    /// A backend library opened but lacks the domain's exported table.
    #[error("backend is missing exported symbol `{symbol}`: {detail}")]
    FunctionNotFound {
        /// The exported symbol name the registry designates for the domain.
        symbol: &'static str,
        /// Platform loader's error text.
        detail: String,
    },

    /// The exported table's version stamp does not match this loader.
    #[error("backend ABI version mismatch: expected {expected}, found {found}")]
    SpecificationMismatch {
        /// Version this loader was built against.
        expected: u32,
        /// Version the plugin reported.
        found: u32,
    },
}
