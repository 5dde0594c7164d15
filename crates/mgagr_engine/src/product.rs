//! Lazy cartesian product over option axes.

/// Iterator over every combination that picks one option per axis.
///
/// The last axis varies fastest. No axes yields a single empty
/// combination; any empty axis yields nothing.
#[derive(Clone, Debug)]
pub struct Product<T> {
    axes: Vec<Vec<T>>,
    indices: Vec<usize>,
    done: bool,
}

impl<T: Clone> Product<T> {
    /// Creates the product of `axes`.
    #[must_use]
    pub fn new(axes: Vec<Vec<T>>) -> Self {
        let done = axes.iter().any(Vec::is_empty);
        let indices = vec![0; axes.len()];
        Self {
            axes,
            indices,
            done,
        }
    }

    /// The total number of combinations, or `None` on overflow.
    #[must_use]
    pub fn count_combinations(&self) -> Option<usize> {
        self.axes
            .iter()
            .try_fold(1usize, |acc, axis| acc.checked_mul(axis.len()))
    }

    fn advance(&mut self) {
        for (i, axis) in self.axes.iter().enumerate().rev() {
            self.indices[i] += 1;
            if self.indices[i] < axis.len() {
                return;
            }
            self.indices[i] = 0;
        }
        self.done = true;
    }
}

impl<T: Clone> Iterator for Product<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let item = self
            .indices
            .iter()
            .zip(&self.axes)
            .map(|(&i, axis)| axis[i].clone())
            .collect();
        self.advance();
        Some(item)
    }
}
