//! Explicit run configuration.
//!
//! Seeds, device choice and plot style are read once into a [`RuntimeConfig`]
//! and turned into owned generators by [`Runtime::init`]; nothing here touches
//! process-wide state.

use std::path::Path;

use dfdx::data::ExactSizeDataset;
#[cfg(feature = "cuda")]
use dfdx::tensor::Cuda;
use dfdx::tensor::Cpu;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::datasets::{self, Subset, DEFAULT_SEED, DEFAULT_VAL_RATIO};
use crate::helper::{self, Device};
use crate::validator::{ensure_between, RangeError};
use crate::visual::PlotStyle;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(#[from] RangeError),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub seed: u64,
    pub val_ratio: f64,
    pub prefer_cuda: bool,
    pub style: PlotStyle,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            val_ratio: DEFAULT_VAL_RATIO,
            prefer_cuda: true,
            style: PlotStyle::default(),
        }
    }
}

impl RuntimeConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading runtime config");
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> std::result::Result<(), RangeError> {
        ensure_between(self.val_ratio, 0.0, 1.0, "val_ratio")?;
        Ok(())
    }
}

/// Seeded state for one run, built from a [`RuntimeConfig`].
pub struct Runtime {
    config: RuntimeConfig,
    device: Device,
    cpu: Cpu,
    #[cfg(feature = "cuda")]
    cuda: Option<Cuda>,
    rng: ChaCha8Rng,
}

impl Runtime {
    pub fn init(config: RuntimeConfig) -> Result<Self> {
        config.validate()?;
        let seed = helper::seed(config.seed);

        #[cfg(feature = "cuda")]
        let cuda = if config.prefer_cuda {
            helper::open_cuda(seed)
        } else {
            None
        };
        #[cfg(feature = "cuda")]
        let device = helper::device_for(cuda.is_some());
        #[cfg(not(feature = "cuda"))]
        let device = helper::device_for(false);

        info!(seed, %device, val_ratio = config.val_ratio, "runtime initialized");
        Ok(Self {
            cpu: Cpu::seed_from_u64(seed),
            #[cfg(feature = "cuda")]
            cuda,
            rng: helper::seeded_rng(seed),
            device,
            config,
        })
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    pub fn device(&self) -> Device {
        self.device
    }

    /// CPU tensor device seeded from the configured seed.
    pub fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    /// CUDA device seeded from the configured seed, if one was opened.
    #[cfg(feature = "cuda")]
    pub fn cuda(&self) -> Option<&Cuda> {
        self.cuda.as_ref()
    }

    /// Generator for the run, e.g. for `ExactSizeDataset::shuffled`.
    pub fn rng(&mut self) -> &mut ChaCha8Rng {
        &mut self.rng
    }

    pub fn style(&self) -> &PlotStyle {
        &self.config.style
    }

    /// Splits `dataset` with the configured ratio and seed.
    pub fn split<'a, D: ExactSizeDataset>(
        &self,
        dataset: &'a D,
    ) -> std::result::Result<(Subset<'a, D>, Subset<'a, D>), RangeError> {
        datasets::split(dataset, self.config.val_ratio, self.config.seed)
    }
}
