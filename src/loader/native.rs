//! Native loading primitives behind one uniform seam.
//!
//! The loader needs exactly three primitives from the platform: open a
//! shared library by name, resolve an exported symbol to an address, and
//! release the library when its owner drops. [`SystemLoader`] provides them
//! over `libloading`, which presents POSIX `dlopen` and Windows
//! `LoadLibrary` through one API; the traits exist so tests can substitute
//! a stub loader and count opens, resolutions, and releases.

use std::ffi::c_void;
use std::ptr::NonNull;

use libloading::{Library, Symbol};

/// One opened backend library.
///
/// Exclusive ownership of the platform's loaded-library token: the image is
/// released exactly once, when the implementor drops. Failure to resolve a
/// symbol is reported as an `Err` carrying the platform's error text, not
/// interpreted here; the caller decides what the absence means.
pub trait NativeLibrary: Send + Sync + 'static {
    /// Resolve an exported symbol to its address.
    fn symbol(&self, name: &str) -> Result<NonNull<c_void>, String>;
}

/// Opens native libraries by file name.
pub trait NativeLoader: Send + Sync {
    /// The handle type this loader produces.
    type Library: NativeLibrary;

    /// Attempt to open a library; `Err` carries the platform's error text.
    fn open(&self, file_name: &str) -> Result<Self::Library, String>;
}

/// The production loader, backed by the platform's dynamic linker.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLoader;

/// A library opened by [`SystemLoader`]; released on drop.
pub struct SystemLibrary {
    inner: Library,
}

impl NativeLoader for SystemLoader {
    type Library = SystemLibrary;

    fn open(&self, file_name: &str) -> Result<SystemLibrary, String> {
        // SAFETY: Loading a backend runs its initialization code. Backends
        // are installed alongside the library and trusted by contract.
        let inner = unsafe { Library::new(file_name) }.map_err(|e| e.to_string())?;
        Ok(SystemLibrary { inner })
    }
}

impl NativeLibrary for SystemLibrary {
    fn symbol(&self, name: &str) -> Result<NonNull<c_void>, String> {
        // SAFETY: Resolving a data symbol by name. The `*const c_void`
        // instantiation reads the symbol's address itself, not through it.
        let sym: Symbol<'_, *const c_void> =
            unsafe { self.inner.get(name.as_bytes()) }.map_err(|e| e.to_string())?;
        NonNull::new((*sym).cast_mut()).ok_or_else(|| format!("symbol `{name}` resolved to null"))
    }
}

impl std::fmt::Debug for SystemLibrary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemLibrary").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_nonexistent_library_reports_platform_text() {
        let result = SystemLoader.open("libtabulon_no_such_backend_xyz.so");
        match result {
            Err(text) => assert!(!text.is_empty()),
            Ok(_) => panic!("opening a nonexistent library must fail"),
        }
    }
}
