pub mod config;
pub mod datasets;
pub mod helper;
pub mod logging;
pub mod qq;
pub mod validator;
pub mod visual;

pub use config::{Runtime, RuntimeConfig};
pub use datasets::{split, DatasetSplit, InMemory, Subset};
pub use qq::QQ;
pub use validator::{ensure_between, RangeError};
