pub mod in_memory;
pub mod split;
pub mod subset;

pub use in_memory::InMemory;
#[allow(deprecated)]
pub use split::train_val_split;
pub use split::{split, split_counts, split_default, DatasetSplit, DEFAULT_SEED, DEFAULT_VAL_RATIO};
pub use subset::Subset;
