//! Live sub-range views.

use std::fmt::{self, Display};
use std::ops::{Index, IndexMut};

use super::format::SeqFormat;
use super::types::{MSeq, Seq};

/// A mutable window over a contiguous range of another sequence.
///
/// Created by [`MSeq::sub_seq`] and [`MSeq::sub_seq_from`]. The view
/// borrows the parent's storage: index `i` of the view is index
/// `start + i` of the parent, and every write through the view is visible
/// in the parent once the view is dropped. A view is itself an [`MSeq`], so
/// views of views narrow the window further.
///
/// ```
/// use u_seq::seq::{MArray, MSeq, Seq};
///
/// let mut genes = MArray::from(vec![0, 1, 2, 3, 4]);
/// genes.sub_seq(1, 4).unwrap().set_all(9);
/// assert_eq!(genes.as_slice(), &[0, 9, 9, 9, 4]);
/// ```
pub struct MSlice<'a, T> {
    data: &'a mut [T],
}

impl<'a, T> MSlice<'a, T> {
    /// Wraps a mutable slice as a sequence view.
    pub fn new(data: &'a mut [T]) -> Self {
        Self { data }
    }

    /// Gives up the view, returning the borrowed slice.
    pub fn into_slice(self) -> &'a mut [T] {
        self.data
    }

    /// Splits the view into two disjoint views at `mid`.
    ///
    /// # Panics
    /// Panics if `mid > len()`, like [`slice::split_at_mut`].
    pub fn split_at(self, mid: usize) -> (MSlice<'a, T>, MSlice<'a, T>) {
        let (left, right) = self.data.split_at_mut(mid);
        (MSlice::new(left), MSlice::new(right))
    }
}

impl<T> Seq<T> for MSlice<'_, T> {
    fn as_slice(&self) -> &[T] {
        &*self.data
    }
}

impl<T> MSeq<T> for MSlice<'_, T> {
    fn as_mut_slice(&mut self) -> &mut [T] {
        &mut *self.data
    }
}

impl<T> Index<usize> for MSlice<'_, T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T> IndexMut<usize> for MSlice<'_, T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

impl<T: fmt::Debug> fmt::Debug for MSlice<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

impl<T: Display> Display for MSlice<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        SeqFormat::default().write(f, &self.data[..])
    }
}

impl<T: PartialEq> PartialEq for MSlice<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.data[..] == other.data[..]
    }
}

impl<T: PartialEq> PartialEq<[T]> for MSlice<'_, T> {
    fn eq(&self, other: &[T]) -> bool {
        self.data[..] == *other
    }
}

impl<T: Eq> Eq for MSlice<'_, T> {}

impl<'s, T> IntoIterator for &'s MSlice<'_, T> {
    type Item = &'s T;
    type IntoIter = std::slice::Iter<'s, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<'s, T> IntoIterator for &'s mut MSlice<'_, T> {
    type Item = &'s mut T;
    type IntoIter = std::slice::IterMut<'s, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter_mut()
    }
}
