//! Lazy per-device resolution and caching of backend function tables.

use std::collections::HashMap;
use std::sync::{Mutex, OnceLock};

use tracing::{debug, error};

use super::native::{NativeLibrary, NativeLoader, SystemLoader};
use crate::device::{Device, Queue};
use crate::error::{Error, Result};
use crate::registry;
use crate::table::{FunctionTable, SPEC_VERSION};

/// Whether this build ships a generic fallback backend.
const GENERIC_BACKEND_ENABLED: bool = cfg!(feature = "generic-backend");

/// Resolves and caches one domain's function tables, one per device.
///
/// The first [`resolve`](Self::resolve) for a device walks the registry's
/// candidate list, opens the first library that loads, resolves the
/// domain's exported table symbol, validates the table's ABI version, and
/// caches the table by value together with the library handle that keeps
/// its function pointers valid. Every later resolve for that device is a
/// lock-free cache hit returning the same reference.
///
/// A failed resolve caches nothing, so a later call attempts loading again.
///
/// One instance serves exactly one domain, fixed by `T::DOMAIN`; domains
/// typically hold theirs in a process-wide static (see
/// [`crate::domains::blas::blas_tables`]).
pub struct TableInitializer<T: FunctionTable, L: NativeLoader = SystemLoader> {
    /// Per-device table slots; a set slot is never replaced.
    tables: [OnceLock<T>; Device::COUNT],
    /// Keeps each backing plugin resident for as long as its table lives.
    handles: Mutex<HashMap<Device, L::Library>>,
    /// Serializes the slow path: at most one load attempt per device at a
    /// time, and callers arriving mid-load block until it finishes.
    load_guard: Mutex<()>,
    loader: L,
}

impl<T: FunctionTable> TableInitializer<T> {
    /// Create an initializer using the platform's dynamic linker.
    pub fn new() -> Self {
        Self::with_loader(SystemLoader)
    }
}

impl<T: FunctionTable> Default for TableInitializer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FunctionTable, L: NativeLoader> TableInitializer<T, L> {
    /// Create an initializer over a custom [`NativeLoader`].
    pub fn with_loader(loader: L) -> Self {
        Self {
            tables: std::array::from_fn(|_| OnceLock::new()),
            handles: Mutex::new(HashMap::new()),
            load_guard: Mutex::new(()),
            loader,
        }
    }

    /// Resolve the function table for `device`, loading a backend plugin on
    /// first request.
    ///
    /// `queue` supplies diagnostic context on failure and plays no part in
    /// dispatch. The returned reference stays valid for the lifetime of the
    /// initializer: the backing library is held until the initializer
    /// drops.
    pub fn resolve(&self, device: Device, queue: &Queue) -> Result<&T> {
        if let Some(table) = self.tables[device.index()].get() {
            return Ok(table);
        }
        self.load_table(device, queue)
    }

    /// Whether `device` already has a cached table.
    pub fn is_resolved(&self, device: Device) -> bool {
        self.tables[device.index()].get().is_some()
    }

    #[cold]
    fn load_table(&self, device: Device, queue: &Queue) -> Result<&T> {
        let _guard = self.load_guard.lock().unwrap();
        // A racing caller may have finished the load while we waited.
        if let Some(table) = self.tables[device.index()].get() {
            return Ok(table);
        }

        let candidates = registry::candidates(T::DOMAIN, device);
        let mut tried = Vec::with_capacity(candidates.len());
        let mut last_error = None;
        let mut opened = None;
        for stem in candidates {
            let file = registry::library_file_name(stem);
            debug!(domain = %T::DOMAIN, %device, library = %file, "trying backend candidate");
            match self.loader.open(&file) {
                Ok(lib) => {
                    debug!(domain = %T::DOMAIN, %device, library = %file, "backend opened");
                    opened = Some(lib);
                    break;
                }
                Err(text) => {
                    debug!(library = %file, error = %text, "candidate failed to open");
                    tried.push(file);
                    last_error = Some(text);
                }
            }
        }

        let Some(lib) = opened else {
            if device.is_generic() && !GENERIC_BACKEND_ENABLED {
                return Err(Error::UnsupportedDevice {
                    device: queue.device_description(),
                });
            }
            let detail =
                last_error.unwrap_or_else(|| "no candidate libraries registered".to_string());
            error!(
                domain = %T::DOMAIN, %device, ?tried, %detail,
                "no backend library could be opened"
            );
            return Err(Error::BackendNotFound {
                domain: T::DOMAIN,
                device,
                tried,
                detail,
            });
        };

        let symbol = registry::table_symbol(T::DOMAIN);
        let ptr = match lib.symbol(symbol) {
            Ok(ptr) => ptr,
            Err(detail) => {
                error!(
                    domain = %T::DOMAIN, %device, symbol, %detail,
                    "backend lacks the exported table symbol"
                );
                // `lib` drops on return, releasing the opened plugin.
                return Err(Error::FunctionNotFound { symbol, detail });
            }
        };

        // SAFETY: the plugin ABI contract guarantees `symbol` names a static
        // `repr(C)` table whose first field is the `u32` version, and the
        // image stays mapped while `lib` is held. Only the version field is
        // trusted before validation below.
        let table = unsafe { ptr.cast::<T>().as_ref() };
        if table.version() != SPEC_VERSION {
            return Err(Error::SpecificationMismatch {
                expected: SPEC_VERSION,
                found: table.version(),
            });
        }

        // Bank the handle before publishing the table: the cached copy
        // holds raw pointers into the plugin image, so the image must stay
        // resident for as long as the table can be referenced.
        self.handles.lock().unwrap().insert(device, lib);
        Ok(self.tables[device.index()].get_or_init(|| *table))
    }
}

impl<T: FunctionTable, L: NativeLoader> std::fmt::Debug for TableInitializer<T, L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let resolved = Device::ALL
            .iter()
            .filter(|d| self.is_resolved(**d))
            .count();
        f.debug_struct("TableInitializer")
            .field("domain", &T::DOMAIN)
            .field("resolved", &resolved)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::Domain;

    #[repr(C)]
    #[derive(Debug, Clone, Copy)]
    struct SparseProbe {
        version: u32,
    }

    // SAFETY: repr(C) with a leading u32 version field.
    unsafe impl FunctionTable for SparseProbe {
        const DOMAIN: Domain = Domain::Sparse;

        fn version(&self) -> u32 {
            self.version
        }
    }

    // No tabulon backend plugins are installed in the test environment, so
    // the system loader exhausts every candidate.
    #[test]
    fn test_missing_backends_report_backend_not_found() {
        let tables = TableInitializer::<SparseProbe>::new();
        let queue = Queue::new(Device::Cpu);
        match tables.resolve(Device::Cpu, &queue) {
            Err(Error::BackendNotFound { domain, device, tried, .. }) => {
                assert_eq!(domain, Domain::Sparse);
                assert_eq!(device, Device::Cpu);
                assert_eq!(
                    tried.len(),
                    registry::candidates(Domain::Sparse, Device::Cpu).len()
                );
            }
            other => panic!("expected BackendNotFound, got {other:?}"),
        }
        assert!(!tables.is_resolved(Device::Cpu));
    }

    #[cfg(not(feature = "generic-backend"))]
    #[test]
    fn test_generic_without_support_is_unsupported() {
        let tables = TableInitializer::<SparseProbe>::new();
        let queue = Queue::with_label(Device::Generic, "fallback");
        match tables.resolve(Device::Generic, &queue) {
            Err(Error::UnsupportedDevice { device }) => {
                assert!(device.contains("generic"));
                assert!(device.contains("fallback"));
            }
            other => panic!("expected UnsupportedDevice, got {other:?}"),
        }
    }
}
