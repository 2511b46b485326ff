//! The versioned binary contract between the loader and backend plugins.

use crate::device::Domain;

/// ABI version the loader expects in every exported table.
///
/// A plugin whose table reports any other value is rejected outright; the
/// loader never attempts partial interpretation of a mismatched table.
pub const SPEC_VERSION: u32 = 1;

/// A per-domain function-pointer table exported by backend plugins.
///
/// The loader only ever inspects the leading version field; the rest of the
/// table is domain-specific function pointers it treats as opaque. Tables
/// are copied by value into the cache after validation, which is why `Copy`
/// is required.
///
/// # Safety
///
/// Implementors must be `#[repr(C)]` plain data whose first field is the
/// `u32` ABI version, matching the layout plugins export under the
/// domain's registry symbol. `version()` must return that leading field.
pub unsafe trait FunctionTable: Copy + Send + Sync + 'static {
    /// The domain this table serves. One
    /// [`TableInitializer`](crate::loader::TableInitializer) instance exists
    /// per domain, fixed through this constant.
    const DOMAIN: Domain;

    /// The table's leading ABI version field.
    fn version(&self) -> u32;
}
