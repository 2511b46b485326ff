//! Static backend registry.
//!
//! Pure data: for every `(domain, device)` pair, the ordered list of
//! candidate backend library stems, and for every domain the symbol name
//! under which its plugins export their function table. Order in a
//! candidate list encodes preference; the loader opens the first stem that
//! loads and never scores alternatives.

use crate::device::{Device, Domain};

/// Ordered candidate library stems for `(domain, device)`.
///
/// Stems are platform-neutral; [`library_file_name`] turns a stem into the
/// target's shared-library file name.
pub fn candidates(domain: Domain, device: Device) -> &'static [&'static str] {
    match (domain, device) {
        (Domain::Blas, Device::Cpu) => &["tabulon_blas_cpu"],
        (Domain::Blas, Device::IntegratedGpu) => &["tabulon_blas_igpu"],
        (Domain::Blas, Device::DiscreteGpu) => &["tabulon_blas_cublas", "tabulon_blas_rocblas"],
        (Domain::Blas, Device::Generic) => &["tabulon_blas_generic"],

        (Domain::Lapack, Device::Cpu) => &["tabulon_lapack_cpu"],
        (Domain::Lapack, Device::IntegratedGpu) => &["tabulon_lapack_igpu"],
        (Domain::Lapack, Device::DiscreteGpu) => {
            &["tabulon_lapack_cusolver", "tabulon_lapack_rocsolver"]
        }
        (Domain::Lapack, Device::Generic) => &["tabulon_lapack_generic"],

        (Domain::Fft, Device::Cpu) => &["tabulon_fft_cpu"],
        (Domain::Fft, Device::IntegratedGpu) => &["tabulon_fft_igpu"],
        (Domain::Fft, Device::DiscreteGpu) => &["tabulon_fft_cufft", "tabulon_fft_rocfft"],
        (Domain::Fft, Device::Generic) => &["tabulon_fft_generic"],

        (Domain::Sparse, Device::Cpu) => &["tabulon_sparse_cpu"],
        (Domain::Sparse, Device::IntegratedGpu) => &["tabulon_sparse_igpu"],
        (Domain::Sparse, Device::DiscreteGpu) => {
            &["tabulon_sparse_cusparse", "tabulon_sparse_rocsparse"]
        }
        (Domain::Sparse, Device::Generic) => &["tabulon_sparse_generic"],
    }
}

/// The symbol name under which a domain's plugins export their table.
pub fn table_symbol(domain: Domain) -> &'static str {
    match domain {
        Domain::Blas => "tabulon_blas_table",
        Domain::Lapack => "tabulon_lapack_table",
        Domain::Fft => "tabulon_fft_table",
        Domain::Sparse => "tabulon_sparse_table",
    }
}

/// Shared-library file name for a candidate stem on the current target.
///
/// For example, "tabulon_blas_cpu" becomes "libtabulon_blas_cpu.so" on
/// Linux, "libtabulon_blas_cpu.dylib" on macOS, and "tabulon_blas_cpu.dll"
/// on Windows.
pub fn library_file_name(stem: &str) -> String {
    if cfg!(target_os = "windows") {
        format!("{stem}.dll")
    } else if cfg!(target_os = "macos") {
        format!("lib{stem}.dylib")
    } else {
        format!("lib{stem}.so")
    }
}
