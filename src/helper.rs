//! Environment, device and seed helpers.
//!
//! Everything here reports through `tracing`; call [`crate::logging::init`]
//! (or install your own subscriber) to see the output.

use std::fmt;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

pub use crate::datasets::DEFAULT_SEED;

/// The `dfdx` version requirement this crate is built against.
pub const DFDX_VERSION: &str = "0.13";

/// Snapshot of the build and host the program is running on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnvInfo {
    pub crate_version: &'static str,
    pub dfdx_version: &'static str,
    pub os: &'static str,
    pub arch: &'static str,
    pub family: &'static str,
    pub cuda_enabled: bool,
}

impl EnvInfo {
    pub fn collect() -> Self {
        Self {
            crate_version: env!("CARGO_PKG_VERSION"),
            dfdx_version: DFDX_VERSION,
            os: std::env::consts::OS,
            arch: std::env::consts::ARCH,
            family: std::env::consts::FAMILY,
            cuda_enabled: cfg!(feature = "cuda"),
        }
    }
}

impl fmt::Display for EnvInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Environment Information ===")?;
        writeln!(f, "qqgjyx version: {}", self.crate_version)?;
        writeln!(f, "dfdx version: {}", self.dfdx_version)?;
        writeln!(f, "Platform: {}-{} ({})", self.os, self.arch, self.family)?;
        writeln!(
            f,
            "CUDA support: {}",
            if self.cuda_enabled { "compiled" } else { "not compiled" }
        )?;
        write!(f, "===============================")
    }
}

/// Logs and returns information about the environment.
pub fn env() -> EnvInfo {
    let info = EnvInfo::collect();
    info!(
        version = info.crate_version,
        dfdx = info.dfdx_version,
        os = info.os,
        arch = info.arch,
        cuda = info.cuda_enabled,
        "environment information"
    );
    info
}

#[deprecated(note = "use `env` instead")]
pub fn print_environment_info() -> EnvInfo {
    env()
}

/// Where computations are placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Device {
    #[default]
    Cpu,
    Cuda { ordinal: usize },
}

impl Device {
    pub fn is_cuda(&self) -> bool {
        matches!(self, Self::Cuda { .. })
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cpu => f.write_str("cpu"),
            Self::Cuda { ordinal } => write!(f, "cuda:{ordinal}"),
        }
    }
}

/// Picks CUDA device 0 when it can be opened, the CPU otherwise.
///
/// The probe device is dropped again; [`crate::config::Runtime`] keeps a
/// seeded one for computation.
pub fn dev() -> Device {
    #[cfg(feature = "cuda")]
    let cuda = open_cuda(DEFAULT_SEED).is_some();
    #[cfg(not(feature = "cuda"))]
    let cuda = false;
    device_for(cuda)
}

/// Device label for whether a CUDA device was opened, logged once.
pub(crate) fn device_for(cuda: bool) -> Device {
    let device = if cuda {
        Device::Cuda { ordinal: 0 }
    } else {
        Device::Cpu
    };
    info!(cuda_available = cuda, %device, "using device");
    device
}

/// Opens CUDA device 0 with its generator seeded from `seed`.
#[cfg(feature = "cuda")]
pub(crate) fn open_cuda(seed: u64) -> Option<dfdx::tensor::Cuda> {
    match dfdx::tensor::Cuda::try_build(0, seed) {
        Ok(cuda) => Some(cuda),
        Err(e) => {
            tracing::debug!(error = ?e, "cuda unavailable");
            None
        }
    }
}

#[deprecated(note = "use `dev` instead")]
pub fn get_device_info() -> Device {
    dev()
}

/// Records `value` as the run's seed and hands it back.
///
/// There is no process-wide generator to reseed; build generators from the
/// returned value with [`seeded_rng`] or through [`crate::config::Runtime`].
pub fn seed(value: u64) -> u64 {
    info!(seed = value, "setting random seeds");
    value
}

#[deprecated(note = "use `seed` instead")]
pub fn set_all_seeds(value: u64) -> u64 {
    seed(value)
}

/// A generator whose whole stream is determined by `value`.
pub fn seeded_rng(value: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{distributions::Standard, Rng};

    #[test]
    fn test_env_info() {
        let info = env();
        assert_eq!(info.crate_version, env!("CARGO_PKG_VERSION"));
        assert_eq!(info.os, std::env::consts::OS);

        let banner = info.to_string();
        assert!(banner.starts_with("=== Environment Information ==="));
        assert!(banner.contains("qqgjyx version: "));
        assert!(banner.contains(&format!("Platform: {}-", info.os)));
        assert!(banner.contains("dfdx version: 0.13\n"));
    }

    #[test]
    fn test_dfdx_version_matches_manifest() {
        let manifest = include_str!("../Cargo.toml");
        assert!(manifest.contains(&format!("dfdx = {{ version = \"{DFDX_VERSION}.")));
        assert_eq!(env().dfdx_version, DFDX_VERSION);
    }

    #[test]
    #[cfg(not(feature = "cuda"))]
    fn test_dev_without_cuda() {
        assert_eq!(dev(), Device::Cpu);
        assert_eq!(device_for(false), Device::Cpu);
        assert_eq!(device_for(true), Device::Cuda { ordinal: 0 });
    }

    #[test]
    fn test_device_display() {
        assert_eq!(Device::Cpu.to_string(), "cpu");
        assert_eq!(Device::Cuda { ordinal: 1 }.to_string(), "cuda:1");
        assert!(Device::Cuda { ordinal: 0 }.is_cuda());
        assert!(!Device::default().is_cuda());
    }

    #[test]
    fn test_seed_is_identity() {
        assert_eq!(seed(123), 123);
        assert_eq!(seed(DEFAULT_SEED), 42);
    }

    #[test]
    fn test_seeded_rng_reproducible() {
        let draw = |value| -> Vec<u32> { seeded_rng(value).sample_iter(Standard).take(8).collect() };
        let (a, b, c) = (draw(7), draw(7), draw(8));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    #[allow(deprecated)]
    fn test_aliases_forward() {
        assert_eq!(set_all_seeds(9), 9);
        assert_eq!(get_device_info(), dev());
        assert_eq!(print_environment_info(), env());
    }
}
