//! Compute devices, mathematical domains, and the dispatch queue.

use std::fmt;

/// A compute target the library can dispatch to.
///
/// Devices key the per-domain table cache: one backend plugin and one
/// function table per device. [`Device::Generic`] is the fallback target
/// used when no specialized backend matches the hardware.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Device {
    /// Host CPU.
    Cpu,
    /// Integrated GPU sharing host memory.
    IntegratedGpu,
    /// Discrete GPU with its own memory.
    DiscreteGpu,
    /// Generic fallback target.
    Generic,
}

impl Device {
    /// Number of device kinds.
    pub const COUNT: usize = 4;

    /// All device kinds, in cache-slot order.
    pub const ALL: [Device; Self::COUNT] = [
        Device::Cpu,
        Device::IntegratedGpu,
        Device::DiscreteGpu,
        Device::Generic,
    ];

    /// Cache-slot index for this device.
    pub(crate) fn index(self) -> usize {
        match self {
            Device::Cpu => 0,
            Device::IntegratedGpu => 1,
            Device::DiscreteGpu => 2,
            Device::Generic => 3,
        }
    }

    /// Whether this is the generic fallback target.
    pub fn is_generic(self) -> bool {
        matches!(self, Device::Generic)
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Device::Cpu => "cpu",
            Device::IntegratedGpu => "igpu",
            Device::DiscreteGpu => "dgpu",
            Device::Generic => "generic",
        };
        f.write_str(name)
    }
}

/// A mathematical area served by its own set of backend plugins.
///
/// Each domain has exactly one [`TableInitializer`](crate::loader::TableInitializer)
/// instance, fixed at compile time through
/// [`FunctionTable::DOMAIN`](crate::table::FunctionTable::DOMAIN).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    /// Dense linear algebra.
    Blas,
    /// Dense factorizations and solvers.
    Lapack,
    /// Fast Fourier transforms.
    Fft,
    /// Sparse linear algebra.
    Sparse,
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Domain::Blas => "blas",
            Domain::Lapack => "lapack",
            Domain::Fft => "fft",
            Domain::Sparse => "sparse",
        };
        f.write_str(name)
    }
}

/// The execution context on whose behalf a table is being resolved.
///
/// The queue takes no part in dispatch itself (dispatch is keyed purely on
/// [`Device`]); it supplies diagnostic context when resolution fails.
#[derive(Debug, Clone)]
pub struct Queue {
    device: Device,
    label: Option<String>,
}

impl Queue {
    /// Create a queue targeting `device`.
    pub fn new(device: Device) -> Self {
        Self {
            device,
            label: None,
        }
    }

    /// Create a labelled queue; the label appears in failure diagnostics.
    pub fn with_label(device: Device, label: impl Into<String>) -> Self {
        Self {
            device,
            label: Some(label.into()),
        }
    }

    /// The device this queue targets.
    pub fn device(&self) -> Device {
        self.device
    }

    /// Human-readable description of the queue's device, for diagnostics.
    pub fn device_description(&self) -> String {
        match &self.label {
            Some(label) => format!("{} (queue `{label}`)", self.device),
            None => self.device.to_string(),
        }
    }
}
