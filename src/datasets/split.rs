use dfdx::data::ExactSizeDataset;
use rand::{seq::SliceRandom, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::subset::Subset;
use crate::validator::{ensure_between, Result};

pub const DEFAULT_VAL_RATIO: f64 = 0.2;
pub const DEFAULT_SEED: u64 = 42;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatasetSplit {
    Train,
    Val,
}

impl std::fmt::Display for DatasetSplit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Train => "train",
            Self::Val => "val",
        })
    }
}

/// Sizes of the `(train, val)` halves for `n` items.
///
/// The train side is `floor(n * (1 - val_ratio))` and the validation side
/// takes the remainder, so the two always add up to `n`.
pub fn split_counts(n: usize, val_ratio: f64) -> Result<(usize, usize)> {
    let val_ratio = ensure_between(val_ratio, 0.0, 1.0, "val_ratio")?;
    // `n as f64` rounds past 2^53, so the endpoints skip the float math
    let train = if val_ratio == 0.0 {
        n
    } else if val_ratio == 1.0 {
        0
    } else {
        (((n as f64) * (1.0 - val_ratio)).floor() as usize).min(n)
    };
    Ok((train, n - train))
}

/// Randomly partitions `dataset` into a train view and a validation view.
///
/// The permutation comes from a ChaCha8 generator seeded with `seed` alone,
/// so the same `(len, val_ratio, seed)` always produces the same two index
/// lists. Every index of `dataset` lands in exactly one view.
///
/// ```
/// use qqgjyx::datasets::{split, InMemory};
///
/// let data: InMemory<u32> = (0..10).collect();
/// let (train, val) = split(&data, 0.2, 42).unwrap();
/// assert_eq!(train.indices().len(), 8);
/// assert_eq!(val.indices().len(), 2);
/// ```
pub fn split<D: ExactSizeDataset>(
    dataset: &D,
    val_ratio: f64,
    seed: u64,
) -> Result<(Subset<'_, D>, Subset<'_, D>)> {
    let n = dataset.len();
    let (train_count, val_count) = split_counts(n, val_ratio)?;

    let mut indices: Vec<usize> = (0..n).collect();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    indices.shuffle(&mut rng);

    let val_indices = indices.split_off(train_count);
    tracing::debug!(
        train = train_count,
        val = val_count,
        val_ratio,
        seed,
        "split dataset"
    );

    Ok((
        Subset::new(dataset, indices, DatasetSplit::Train),
        Subset::new(dataset, val_indices, DatasetSplit::Val),
    ))
}

/// [`split`] with a 20% validation share and seed 42.
pub fn split_default<D: ExactSizeDataset>(dataset: &D) -> Result<(Subset<'_, D>, Subset<'_, D>)> {
    split(dataset, DEFAULT_VAL_RATIO, DEFAULT_SEED)
}

#[deprecated(note = "use `split` instead")]
pub fn train_val_split<D: ExactSizeDataset>(
    dataset: &D,
    val_ratio: f64,
    seed: u64,
) -> Result<(Subset<'_, D>, Subset<'_, D>)> {
    split(dataset, val_ratio, seed)
}
