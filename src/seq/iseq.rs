//! Immutable snapshot sequence.

use std::fmt::{self, Display};
use std::hash::{Hash, Hasher};
use std::ops::{Index, Range};
use std::sync::Arc;

use super::array::MArray;
use super::error::{check_range, check_start, SeqError};
use super::format::SeqFormat;
use super::types::Seq;

/// Immutable, ordered, fixed-length sequence.
///
/// Backed by reference-counted storage plus a `[start, end)` window, so
/// `clone` and [`sub_seq`](Self::sub_seq) are O(1) and share elements.
/// Nothing can write to that storage, which makes the sharing invisible.
/// Usually obtained from [`MSeq::to_iseq`](super::MSeq::to_iseq), which
/// copies the mutable source.
///
/// ```
/// use u_seq::seq::{ISeq, MSeq, Seq};
///
/// let genes = ISeq::from(vec![1, 2, 3, 4]);
/// let tail = genes.sub_seq_from(2).unwrap();
/// assert_eq!(tail.as_slice(), &[3, 4]);
///
/// let mut editable = tail.copy();
/// editable.set(0, 30).unwrap();
/// assert_eq!(tail.as_slice(), &[3, 4]);
/// ```
pub struct ISeq<T> {
    data: Arc<[T]>,
    range: Range<usize>,
}

impl<T> ISeq<T> {
    /// Returns an empty sequence.
    pub fn empty() -> Self {
        Self::from(Vec::new())
    }

    /// Returns the elements `[start, end)` as a new sequence sharing storage.
    ///
    /// # Errors
    /// - [`SeqError::InvalidRange`] if `start > end`
    /// - [`SeqError::RangeOutOfBounds`] if `end > len()`
    pub fn sub_seq(&self, start: usize, end: usize) -> Result<Self, SeqError> {
        check_range(start, end, self.len())?;
        Ok(Self {
            data: Arc::clone(&self.data),
            range: self.range.start + start..self.range.start + end,
        })
    }

    /// Returns the elements `[start, len)` as a new sequence sharing storage.
    ///
    /// # Errors
    /// [`SeqError::RangeOutOfBounds`] if `start > len()`.
    pub fn sub_seq_from(&self, start: usize) -> Result<Self, SeqError> {
        check_start(start, self.len())?;
        self.sub_seq(start, self.len())
    }

    /// Builds a new sequence whose element `i` is `mapper(&self[i])`.
    ///
    /// `mapper` is invoked exactly once per element, in index order.
    pub fn map<B, F>(&self, mapper: F) -> ISeq<B>
    where
        F: FnMut(&T) -> B,
    {
        self.as_slice().iter().map(mapper).collect()
    }

    /// Returns a mutable copy of this sequence.
    pub fn copy(&self) -> MArray<T>
    where
        T: Clone,
    {
        MArray::from(self.as_slice())
    }
}

impl<T> Seq<T> for ISeq<T> {
    fn as_slice(&self) -> &[T] {
        &self.data[self.range.clone()]
    }
}

impl<T> Clone for ISeq<T> {
    fn clone(&self) -> Self {
        Self {
            data: Arc::clone(&self.data),
            range: self.range.clone(),
        }
    }
}

impl<T> Default for ISeq<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<Vec<T>> for ISeq<T> {
    fn from(values: Vec<T>) -> Self {
        let range = 0..values.len();
        Self {
            data: Arc::from(values),
            range,
        }
    }
}

impl<T> From<MArray<T>> for ISeq<T> {
    fn from(seq: MArray<T>) -> Self {
        Self::from(seq.into_vec())
    }
}

impl<T> FromIterator<T> for ISeq<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<T> AsRef<[T]> for ISeq<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

/// # Panics
/// Panics if `index >= len()`. Use [`Seq::get`] for a checked read.
impl<T> Index<usize> for ISeq<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<'a, T> IntoIterator for &'a ISeq<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<T: PartialEq> PartialEq for ISeq<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for ISeq<T> {}

impl<T: Hash> Hash for ISeq<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for ISeq<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice().iter()).finish()
    }
}

impl<T: Display> Display for ISeq<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        SeqFormat::default().write(f, self.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seq::MSeq;

    #[test]
    fn test_snapshot_not_aliased() {
        let mut source = MArray::from(vec!['a', 'b', 'c']);
        let snapshot = source.to_iseq();
        source.set(1, 'z').unwrap();
        source.set_all_from(['x']);
        assert_eq!(snapshot.as_slice(), &['a', 'b', 'c']);
        assert_eq!(source.as_slice(), &['x', 'z', 'c']);
    }

    #[test]
    fn test_sub_seq_shares_storage() {
        let seq = ISeq::from(vec![0, 1, 2, 3, 4, 5]);
        let mid = seq.sub_seq(1, 5).unwrap();
        let inner = mid.sub_seq(1, 3).unwrap();
        assert!(Arc::ptr_eq(&seq.data, &inner.data));
        assert_eq!(mid.as_slice(), &[1, 2, 3, 4]);
        assert_eq!(inner.as_slice(), &[2, 3]);
        assert_eq!(inner.get(0), Ok(&2));
        assert_eq!(inner.get(2), Err(SeqError::IndexOutOfBounds { index: 2, len: 2 }));
    }

    #[test]
    fn test_sub_seq_errors() {
        let seq = ISeq::from(vec![1, 2, 3]);
        assert_eq!(
            seq.sub_seq(0, 4),
            Err(SeqError::RangeOutOfBounds {
                start: 0,
                end: 4,
                len: 3
            })
        );
        assert_eq!(
            seq.sub_seq(2, 1),
            Err(SeqError::InvalidRange { start: 2, end: 1 })
        );
        let tail = seq.sub_seq_from(1).unwrap();
        assert!(tail.sub_seq(0, 3).is_err());
        assert_eq!(
            seq.sub_seq_from(4),
            Err(SeqError::RangeOutOfBounds {
                start: 4,
                end: 4,
                len: 3
            })
        );
        assert_eq!(
            tail.sub_seq_from(3).unwrap_err().to_string(),
            "range 3..3 out of bounds for length 2"
        );
        assert!(seq.sub_seq_from(3).unwrap().is_empty());
    }

    #[test]
    fn test_map() {
        let seq = ISeq::from(vec![1, 2, 3]).sub_seq_from(1).unwrap();
        let names = seq.map(|x| x.to_string());
        assert_eq!(names.as_slice(), &["2", "3"]);
    }

    #[test]
    fn test_copy_round_trip_is_independent() {
        let seq = ISeq::from(vec![1, 2, 3]);
        let mut copy = seq.copy();
        copy.swap(0, 2).unwrap();
        assert_eq!(seq.as_slice(), &[1, 2, 3]);
        assert_eq!(copy.to_iseq(), ISeq::from(vec![3, 2, 1]));
    }

    #[test]
    fn test_eq_ignores_window_offset() {
        let a = ISeq::from(vec![9, 1, 2]).sub_seq_from(1).unwrap();
        let b = ISeq::from(vec![1, 2]);
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "[1,2]");
        assert_eq!(format!("{a:?}"), "[1, 2]");
        assert_eq!(a[1], 2);
    }

    #[test]
    fn test_empty() {
        let seq: ISeq<u8> = ISeq::default();
        assert!(seq.is_empty());
        assert_eq!(seq, ISeq::empty());
        assert_eq!(seq.to_string(), "[]");
    }

    #[test]
    fn test_send_sync() {
        fn assert_send_sync<S: Send + Sync>() {}
        assert_send_sync::<ISeq<u64>>();
    }
}
