//! Owned fixed-length mutable sequence.

use std::fmt::{self, Display};
use std::ops::{Index, IndexMut};

use super::format::SeqFormat;
use super::types::{MSeq, Seq};

/// Owned, fixed-length, mutable sequence.
///
/// The length is fixed at construction; every [`MSeq`] operation
/// overwrites or permutes slots in place.
///
/// # Construction
///
/// ```
/// use u_seq::seq::{MArray, Seq};
///
/// let from_fn = MArray::from_fn(3, |i| i * 2);
/// let from_vec = MArray::from(vec![0, 2, 4]);
/// let from_array = MArray::from([0, 2, 4]);
/// let collected: MArray<usize> = (0..3).map(|i| i * 2).collect();
/// assert_eq!(from_fn, from_vec);
/// assert_eq!(from_array, collected);
///
/// let mut next = 0;
/// let from_factory = MArray::from_factory(3, || {
///     next += 2;
///     next - 2
/// });
/// assert_eq!(from_factory.as_slice(), &[0, 2, 4]);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct MArray<T> {
    data: Box<[T]>,
}

impl<T> MArray<T> {
    /// Creates a sequence of `len` elements where element `i` is `generator(i)`.
    pub fn from_fn<F>(len: usize, generator: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        (0..len).map(generator).collect()
    }

    /// Creates a sequence of `len` elements, each produced by one call to
    /// `factory`, in index order.
    pub fn from_factory<F>(len: usize, mut factory: F) -> Self
    where
        F: FnMut() -> T,
    {
        (0..len).map(|_| factory()).collect()
    }

    /// Creates a sequence of `len` clones of `value`.
    pub fn filled(len: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::from(vec![value; len])
    }

    /// Consumes the sequence, returning its elements.
    pub fn into_vec(self) -> Vec<T> {
        self.data.into_vec()
    }
}

impl<T> Seq<T> for MArray<T> {
    fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T> MSeq<T> for MArray<T> {
    fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<T> From<Vec<T>> for MArray<T> {
    fn from(values: Vec<T>) -> Self {
        Self {
            data: values.into_boxed_slice(),
        }
    }
}

impl<T, const N: usize> From<[T; N]> for MArray<T> {
    fn from(values: [T; N]) -> Self {
        Self::from(Vec::from(values))
    }
}

impl<T: Clone> From<&[T]> for MArray<T> {
    fn from(values: &[T]) -> Self {
        Self::from(values.to_vec())
    }
}

impl<T> From<MArray<T>> for Vec<T> {
    fn from(seq: MArray<T>) -> Self {
        seq.into_vec()
    }
}

impl<T> FromIterator<T> for MArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<T> AsRef<[T]> for MArray<T> {
    fn as_ref(&self) -> &[T] {
        &self.data
    }
}

impl<T> AsMut<[T]> for MArray<T> {
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
}

/// # Panics
/// Panics if `index >= len()`. Use [`Seq::get`] for a checked read.
impl<T> Index<usize> for MArray<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

/// # Panics
/// Panics if `index >= len()`. Use [`MSeq::set`] for a checked write.
impl<T> IndexMut<usize> for MArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

impl<T> IntoIterator for MArray<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_vec().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a MArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut MArray<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter_mut()
    }
}

impl<T: fmt::Debug> fmt::Debug for MArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

impl<T: Display> Display for MArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        SeqFormat::default().write(f, &self.data[..])
    }
}
