//! Fixed-shape, row-major array storage.
//!
//! Every array in the output record has a shape decided before any data is
//! written and never changes afterwards.  `FixedArray` is allocated once,
//! pre-filled with a sentinel, and then written by index.

use crate::{CoreError, CoreResult};

/// A dense row-major array with an immutable shape.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedArray<T> {
    shape: Vec<usize>,
    data:  Vec<T>,
}

impl<T: Clone> FixedArray<T> {
    /// Allocate an array of `shape` with every element set to `fill`.
    pub fn filled(shape: &[usize], fill: T) -> Self {
        let len = shape.iter().product();
        Self { shape: shape.to_vec(), data: vec![fill; len] }
    }

    /// Wrap existing data; fails if `data.len()` does not match the shape.
    pub fn from_vec(shape: &[usize], data: Vec<T>) -> CoreResult<Self> {
        let expected: usize = shape.iter().product();
        if data.len() != expected {
            return Err(CoreError::ShapeMismatch {
                shape:    shape.to_vec(),
                expected,
                got:      data.len(),
            });
        }
        Ok(Self { shape: shape.to_vec(), data })
    }
}

impl<T> FixedArray<T> {
    #[inline]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Total element count.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Number of elements in one row (product of all trailing dimensions).
    #[inline]
    fn row_len(&self) -> usize {
        self.shape.iter().skip(1).product()
    }

    /// Number of rows (the leading dimension).
    #[inline]
    pub fn rows(&self) -> usize {
        self.shape.first().copied().unwrap_or(0)
    }

    /// Row `i` as a slice.
    ///
    /// # Panics
    /// Panics if `i >= self.rows()`.
    pub fn row(&self, i: usize) -> &[T] {
        let n = self.row_len();
        &self.data[i * n..(i + 1) * n]
    }

    /// Row `i` as a mutable slice.
    ///
    /// # Panics
    /// Panics if `i >= self.rows()`.
    pub fn row_mut(&mut self, i: usize) -> &mut [T] {
        let n = self.row_len();
        &mut self.data[i * n..(i + 1) * n]
    }

    /// Element at a multi-dimensional index; `None` if out of bounds or the
    /// index rank does not match the array rank.
    pub fn get(&self, index: &[usize]) -> Option<&T> {
        self.offset(index).map(|o| &self.data[o])
    }

    fn offset(&self, index: &[usize]) -> Option<usize> {
        if index.len() != self.shape.len() {
            return None;
        }
        let mut offset = 0;
        for (&i, &dim) in index.iter().zip(&self.shape) {
            if i >= dim {
                return None;
            }
            offset = offset * dim + i;
        }
        Some(offset)
    }
}
