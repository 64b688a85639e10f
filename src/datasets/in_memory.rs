use dfdx::data::ExactSizeDataset;

/// A dataset held entirely in memory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InMemory<T> {
    data: Vec<T>,
}

impl<T> InMemory<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self { data }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn into_inner(self) -> Vec<T> {
        self.data
    }
}

impl<T> std::ops::Index<usize> for InMemory<T> {
    type Output = T;
    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<T> ExactSizeDataset for InMemory<T> {
    type Item<'a> = &'a T where Self: 'a;
    fn get(&self, index: usize) -> Self::Item<'_> {
        &self.data[index]
    }
    fn len(&self) -> usize {
        self.data.len()
    }
}

impl<T> From<Vec<T>> for InMemory<T> {
    fn from(data: Vec<T>) -> Self {
        Self::new(data)
    }
}

impl<T> FromIterator<T> for InMemory<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
