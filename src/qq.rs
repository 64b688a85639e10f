//! One entry point for every helper in the crate.

use dfdx::data::ExactSizeDataset;

use crate::datasets::{self, Subset};
use crate::helper::{self, Device, EnvInfo};
use crate::validator::{self, RangeError};
use crate::visual::{self, PlotStyle};

const HELP: &str = "\
QQ Utilities:
  QQ::env()            - Show environment info
  QQ::dev()            - Get device info
  QQ::seed(n)          - Set seeds (default: 42)
  QQ::style()          - Get plotting style
  QQ::split(d, r, s)   - Split dataset
  QQ::help()           - Show this help

Usage:
  use qqgjyx::QQ;
  QQ::env();
  QQ::seed(123);
  let style = QQ::style();
  let (train, val) = QQ::split(&dataset, 0.2, 42)?;
";

/// Forwards to the free functions of [`helper`], [`visual`],
/// [`datasets`] and [`validator`].
pub struct QQ;

impl QQ {
    pub fn env() -> EnvInfo {
        helper::env()
    }

    pub fn dev() -> Device {
        helper::dev()
    }

    pub fn seed(value: u64) -> u64 {
        helper::seed(value)
    }

    pub fn style() -> PlotStyle {
        visual::style()
    }

    pub fn split<D: ExactSizeDataset>(
        dataset: &D,
        val_ratio: f64,
        seed: u64,
    ) -> Result<(Subset<'_, D>, Subset<'_, D>), RangeError> {
        datasets::split(dataset, val_ratio, seed)
    }

    pub fn ensure_between<T>(value: T, low: T, high: T, name: &str) -> Result<T, RangeError>
    where
        T: PartialOrd + std::fmt::Display,
    {
        validator::ensure_between(value, low, high, name)
    }

    pub fn help() -> &'static str {
        HELP
    }
}
