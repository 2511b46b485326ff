//! Dense linear algebra (BLAS) function table.

use std::ffi::c_void;
use std::sync::OnceLock;

use crate::device::Domain;
use crate::loader::TableInitializer;
use crate::table::FunctionTable;

/// Single-precision matrix-matrix multiply, C = alpha*A*B + beta*C.
pub type SgemmFn = unsafe extern "C" fn(
    queue: *mut c_void,
    m: i64,
    n: i64,
    k: i64,
    alpha: f32,
    a: *const f32,
    lda: i64,
    b: *const f32,
    ldb: i64,
    beta: f32,
    c: *mut f32,
    ldc: i64,
);

/// Double-precision matrix-matrix multiply.
pub type DgemmFn = unsafe extern "C" fn(
    queue: *mut c_void,
    m: i64,
    n: i64,
    k: i64,
    alpha: f64,
    a: *const f64,
    lda: i64,
    b: *const f64,
    ldb: i64,
    beta: f64,
    c: *mut f64,
    ldc: i64,
);

/// Single-precision y = alpha*x + y.
pub type SaxpyFn =
    unsafe extern "C" fn(queue: *mut c_void, n: i64, alpha: f32, x: *const f32, y: *mut f32);

/// Double-precision y = alpha*x + y.
pub type DaxpyFn =
    unsafe extern "C" fn(queue: *mut c_void, n: i64, alpha: f64, x: *const f64, y: *mut f64);

/// Single-precision dot product.
pub type SdotFn = unsafe extern "C" fn(queue: *mut c_void, n: i64, x: *const f32, y: *const f32) -> f32;

/// Double-precision dot product.
pub type DdotFn = unsafe extern "C" fn(queue: *mut c_void, n: i64, x: *const f64, y: *const f64) -> f64;

/// The table BLAS backends export under `tabulon_blas_table`.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct BlasTable {
    /// ABI version stamp; must equal [`SPEC_VERSION`](crate::table::SPEC_VERSION).
    pub version: u32,
    /// GEMM, single precision.
    pub sgemm: SgemmFn,
    /// GEMM, double precision.
    pub dgemm: DgemmFn,
    /// AXPY, single precision.
    pub saxpy: SaxpyFn,
    /// AXPY, double precision.
    pub daxpy: DaxpyFn,
    /// Dot product, single precision.
    pub sdot: SdotFn,
    /// Dot product, double precision.
    pub ddot: DdotFn,
}

// SAFETY: repr(C) plain data with the u32 version as the first field,
// matching the layout BLAS plugins export.
unsafe impl FunctionTable for BlasTable {
    const DOMAIN: Domain = Domain::Blas;

    fn version(&self) -> u32 {
        self.version
    }
}

/// The process-wide table initializer for the BLAS domain.
///
/// Tables resolved through this instance stay cached, and their backing
/// plugins stay loaded, for the remainder of the process.
pub fn blas_tables() -> &'static TableInitializer<BlasTable> {
    static TABLES: OnceLock<TableInitializer<BlasTable>> = OnceLock::new();
    TABLES.get_or_init(TableInitializer::new)
}
