use dfdx::data::ExactSizeDataset;

use super::split::DatasetSplit;

/// An index view into a borrowed dataset.
///
/// Item `i` of the subset is item `indices[i]` of the wrapped dataset; the
/// wrapped items are never copied.
#[derive(Debug)]
pub struct Subset<'a, D> {
    dataset: &'a D,
    indices: Vec<usize>,
    split: DatasetSplit,
}

impl<'a, D> Subset<'a, D> {
    pub(crate) fn new(dataset: &'a D, indices: Vec<usize>, split: DatasetSplit) -> Self {
        Self {
            dataset,
            indices,
            split,
        }
    }

    /// Positions in the wrapped dataset, in view order.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn into_indices(self) -> Vec<usize> {
        self.indices
    }

    pub fn dataset(&self) -> &'a D {
        self.dataset
    }

    pub fn split(&self) -> DatasetSplit {
        self.split
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

impl<'a, D> Clone for Subset<'a, D> {
    fn clone(&self) -> Self {
        Self {
            dataset: self.dataset,
            indices: self.indices.clone(),
            split: self.split,
        }
    }
}

impl<'a, D: ExactSizeDataset> ExactSizeDataset for Subset<'a, D> {
    type Item<'b> = D::Item<'b> where Self: 'b;
    fn get(&self, index: usize) -> Self::Item<'_> {
        self.dataset.get(self.indices[index])
    }
    fn len(&self) -> usize {
        self.indices.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasets::InMemory;

    #[test]
    fn test_get_maps_through_indices() {
        let data: InMemory<char> = "abcde".chars().collect();
        let view = Subset::new(&data, vec![4, 0, 2], DatasetSplit::Val);

        assert_eq!(ExactSizeDataset::len(&view), 3);
        assert_eq!(*view.get(0), 'e');
        assert_eq!(*view.get(1), 'a');
        assert_eq!(*view.get(2), 'c');
        assert_eq!(view.split(), DatasetSplit::Val);
        assert_eq!(view.indices(), &[4, 0, 2]);
    }

    #[test]
    fn test_empty_view() {
        let data: InMemory<u8> = vec![1, 2, 3].into();
        let view = Subset::new(&data, Vec::new(), DatasetSplit::Train);
        assert!(view.is_empty());
        assert_eq!(ExactSizeDataset::len(&view), 0);
        assert_eq!(view.dataset().len(), 3);
    }

    #[test]
    fn test_clone_shares_dataset() {
        let data: InMemory<u8> = vec![7, 8].into();
        let view = Subset::new(&data, vec![1], DatasetSplit::Train);
        let copy = view.clone();
        assert!(std::ptr::eq(view.dataset(), copy.dataset()));
        assert_eq!(copy.into_indices(), vec![1]);
    }
}
