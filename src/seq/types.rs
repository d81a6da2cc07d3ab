//! Core trait definitions for sequences.
//!
//! [`Seq`] is the read-only contract shared by every sequence type; [`MSeq`]
//! adds fixed-size, in-place mutation. Both are implemented on top of a
//! contiguous slice, so implementors only supply [`Seq::as_slice`] and
//! [`MSeq::as_mut_slice`] and inherit every operation.

use std::cmp::Ordering;
use std::fmt::Display;

use log::trace;
use rand::seq::SliceRandom;
use rand::Rng;

use super::array::MArray;
use super::cursor::Cursor;
use super::error::{check_index, check_range, check_start, SeqError};
use super::format::SeqFormat;
use super::iseq::ISeq;
use super::view::MSlice;

/// An ordered, fixed-length, index-addressable sequence.
///
/// Implemented by [`MArray`], [`MSlice`], and [`ISeq`].
pub trait Seq<T> {
    /// Returns the elements as a contiguous slice, in order.
    fn as_slice(&self) -> &[T];

    /// Number of elements.
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Returns `true` if the sequence has no elements.
    fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    /// [`SeqError::IndexOutOfBounds`] if `index >= len()`.
    fn get(&self, index: usize) -> Result<&T, SeqError> {
        let slice = self.as_slice();
        check_index(index, slice.len())?;
        Ok(&slice[index])
    }

    /// Iterates the elements from first to last.
    fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Returns `true` if some element equals `value`.
    fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.as_slice().contains(value)
    }

    /// Index of the first element equal to `value`.
    fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.index_where(|item| item == value)
    }

    /// Index of the last element equal to `value`.
    fn last_index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.last_index_where(|item| item == value)
    }

    /// Index of the first element matching `predicate`.
    fn index_where<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        self.as_slice().iter().position(predicate)
    }

    /// Index of the last element matching `predicate`.
    fn last_index_where<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        self.as_slice().iter().rposition(predicate)
    }

    /// Returns `true` if every element matches `predicate`.
    ///
    /// Vacuously `true` for an empty sequence.
    fn for_all<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.as_slice().iter().all(predicate)
    }

    /// Copies the elements into a new `Vec`.
    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.as_slice().to_vec()
    }

    /// Renders the elements using `format`.
    fn to_string_with(&self, format: &SeqFormat) -> String
    where
        T: Display,
    {
        format.render(self.as_slice())
    }
}

/// Mutable, ordered, fixed-size sequence.
///
/// The length never changes: every operation here overwrites or permutes
/// existing slots. Mutating operations that can be chained return
/// `&mut Self`.
///
/// # Example
///
/// ```
/// use u_seq::seq::{MArray, MSeq, Seq};
///
/// let mut genes = MArray::filled(4, 0u8);
/// genes.set_all(1).set_all_from([7, 8]);
/// genes.set(3, 9).unwrap();
/// assert_eq!(genes.as_slice(), &[7, 8, 1, 9]);
///
/// let snapshot = genes.to_iseq();
/// genes.swap(0, 3).unwrap();
/// assert_eq!(genes.as_slice(), &[9, 8, 1, 7]);
/// assert_eq!(snapshot.as_slice(), &[7, 8, 1, 9]);
/// ```
///
/// # Thread Safety
///
/// Mutation goes through `&mut self`, so a sequence and all live
/// [`MSlice`] views over it are never mutated from two threads at once.
/// Sharing across threads needs external synchronisation (a `Mutex`, or
/// splitting into disjoint views first).
pub trait MSeq<T>: Seq<T> {
    /// Returns the elements as a mutable slice.
    fn as_mut_slice(&mut self) -> &mut [T];

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    /// [`SeqError::IndexOutOfBounds`] if `index >= len()`.
    fn get_mut(&mut self, index: usize) -> Result<&mut T, SeqError> {
        let slice = self.as_mut_slice();
        check_index(index, slice.len())?;
        Ok(&mut slice[index])
    }

    /// Overwrites the element at `index` with `value`.
    ///
    /// # Errors
    /// [`SeqError::IndexOutOfBounds`] if `index >= len()`.
    fn set(&mut self, index: usize, value: T) -> Result<(), SeqError> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    /// Overwrites every element with a clone of `value`.
    fn set_all(&mut self, value: T) -> &mut Self
    where
        T: Clone,
    {
        self.as_mut_slice().fill(value);
        self
    }

    /// Overwrites elements `0..k` with the first `k` values of `values`,
    /// where `k = min(len(), number of values)`.
    ///
    /// Accepts iterators, collections, and arrays alike. The source is
    /// pulled at most `len()` times, so passing `&mut iter` leaves any
    /// surplus values in `iter`. A shorter source leaves the tail slots
    /// unchanged.
    fn set_all_from<I>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
    {
        let slots = self.as_mut_slice();
        let len = slots.len();
        let mut written = 0;
        for (slot, value) in slots.iter_mut().zip(values) {
            *slot = value;
            written += 1;
        }
        if written < len {
            trace!("set_all_from: source exhausted after {written} of {len} slots");
        }
        self
    }

    /// Overwrites every element with a fresh value from `factory`.
    ///
    /// `factory` is invoked exactly `len()` times, in index order.
    fn fill<F>(&mut self, factory: F) -> &mut Self
    where
        F: FnMut() -> T,
    {
        self.as_mut_slice().fill_with(factory);
        self
    }

    /// Exchanges the elements at `i` and `j`.
    ///
    /// # Errors
    /// [`SeqError::IndexOutOfBounds`] if either index is `>= len()`.
    fn swap(&mut self, i: usize, j: usize) -> Result<(), SeqError> {
        let slice = self.as_mut_slice();
        check_index(i, slice.len())?;
        check_index(j, slice.len())?;
        slice.swap(i, j);
        Ok(())
    }

    /// Exchanges the block `self[start..end]` with the equally long block
    /// of `other` starting at `other_start`.
    ///
    /// ```text
    ///            start                end
    ///              |                   |
    /// self:  +---+---+---+---+---+---+---+---+---+---+
    ///              +---------------+
    ///                          +---------------+
    /// other: +---+---+---+---+---+---+---+---+---+---+
    ///                          |
    ///                      other_start
    /// ```
    ///
    /// To exchange two blocks of the same sequence use
    /// [`swap_within`](MSeq::swap_within).
    ///
    /// # Errors
    /// - [`SeqError::InvalidRange`] if `start > end`
    /// - [`SeqError::RangeOutOfBounds`] if `end > len()` or the block does
    ///   not fit into `other`
    fn swap_range<O>(
        &mut self,
        start: usize,
        end: usize,
        other: &mut O,
        other_start: usize,
    ) -> Result<(), SeqError>
    where
        O: MSeq<T> + ?Sized,
    {
        check_range(start, end, self.len())?;
        let other_end = block_end(other_start, end - start, other.len())?;
        self.as_mut_slice()[start..end]
            .swap_with_slice(&mut other.as_mut_slice()[other_start..other_end]);
        Ok(())
    }

    /// Exchanges the block `self[start..end]` with the equally long block
    /// starting at `other_start` of the same sequence.
    ///
    /// Disjoint blocks are exchanged exactly. Overlapping blocks are
    /// resolved as the element-wise exchanges `swap(start + k,
    /// other_start + k)` for ascending `k`, which permutes the covered
    /// span without losing or duplicating elements.
    ///
    /// # Errors
    /// Same as [`swap_range`](MSeq::swap_range).
    fn swap_within(
        &mut self,
        start: usize,
        end: usize,
        other_start: usize,
    ) -> Result<(), SeqError> {
        let len = self.len();
        check_range(start, end, len)?;
        let n = end - start;
        block_end(other_start, n, len)?;
        if n == 0 || start == other_start {
            return Ok(());
        }

        let slice = self.as_mut_slice();
        let (lo, hi) = if start < other_start {
            (start, other_start)
        } else {
            (other_start, start)
        };
        if lo + n <= hi {
            let (left, right) = slice.split_at_mut(hi);
            left[lo..lo + n].swap_with_slice(&mut right[..n]);
        } else {
            trace!(
                "swap_within: overlapping blocks {start}..{end} and {other_start}..{}",
                other_start + n
            );
            for k in 0..n {
                slice.swap(start + k, other_start + k);
            }
        }
        Ok(())
    }

    /// Returns a bidirectional cursor positioned before the first element.
    fn cursor(&mut self) -> Cursor<'_, T> {
        Cursor::new(self.as_mut_slice(), 0)
    }

    /// Returns a cursor whose first [`next`](Cursor::next) yields `index`.
    ///
    /// # Errors
    /// [`SeqError::IndexOutOfBounds`] if `index > len()`.
    fn cursor_at(&mut self, index: usize) -> Result<Cursor<'_, T>, SeqError> {
        let slice = self.as_mut_slice();
        if index > slice.len() {
            return Err(SeqError::IndexOutOfBounds {
                index,
                len: slice.len(),
            });
        }
        Ok(Cursor::new(slice, index))
    }

    /// Returns a live view of `self[start..end]`.
    ///
    /// Writes through the view land in `self` at `start + i`.
    ///
    /// # Errors
    /// - [`SeqError::InvalidRange`] if `start > end`
    /// - [`SeqError::RangeOutOfBounds`] if `end > len()`
    fn sub_seq(&mut self, start: usize, end: usize) -> Result<MSlice<'_, T>, SeqError> {
        let slice = self.as_mut_slice();
        check_range(start, end, slice.len())?;
        Ok(MSlice::new(&mut slice[start..end]))
    }

    /// Returns a live view of `self[start..]`.
    ///
    /// # Errors
    /// [`SeqError::RangeOutOfBounds`] if `start > len()`.
    fn sub_seq_from(&mut self, start: usize) -> Result<MSlice<'_, T>, SeqError> {
        let len = self.len();
        check_start(start, len)?;
        self.sub_seq(start, len)
    }

    /// Builds a new sequence whose element `i` is `mapper(&self[i])`.
    ///
    /// `mapper` is invoked exactly once per element, in index order.
    fn map<B, F>(&self, mapper: F) -> MArray<B>
    where
        F: FnMut(&T) -> B,
    {
        self.as_slice().iter().map(mapper).collect()
    }

    /// Parallel [`map`](MSeq::map): `mapper` is still invoked exactly once
    /// per element and the result keeps index order.
    #[cfg(feature = "parallel")]
    fn par_map<B, F>(&self, mapper: F) -> MArray<B>
    where
        T: Sync,
        B: Send,
        F: Fn(&T) -> B + Sync + Send,
    {
        use rayon::prelude::*;

        let mapped: Vec<B> = self.as_slice().par_iter().map(mapper).collect();
        MArray::from(mapped)
    }

    /// Returns an immutable copy of the current contents.
    ///
    /// The snapshot owns its own storage: later writes to `self` are not
    /// visible through it.
    fn to_iseq(&self) -> ISeq<T>
    where
        T: Clone,
    {
        ISeq::from(self.as_slice().to_vec())
    }

    /// Returns an independent mutable copy.
    fn copy(&self) -> MArray<T>
    where
        T: Clone,
    {
        MArray::from(self.as_slice().to_vec())
    }

    /// Reverses the element order in place.
    fn reverse(&mut self) -> &mut Self {
        self.as_mut_slice().reverse();
        self
    }

    /// Randomly permutes the elements in place.
    fn shuffle<R>(&mut self, rng: &mut R) -> &mut Self
    where
        R: Rng + ?Sized,
    {
        self.as_mut_slice().shuffle(rng);
        self
    }

    /// Sorts the elements in place with `compare` (stable).
    fn sort_by<F>(&mut self, compare: F) -> &mut Self
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.as_mut_slice().sort_by(compare);
        self
    }
}

/// End of a block of `n` elements starting at `start`, checked against `len`.
fn block_end(start: usize, n: usize, len: usize) -> Result<usize, SeqError> {
    let end = start.checked_add(n).ok_or(SeqError::RangeOutOfBounds {
        start,
        end: usize::MAX,
        len,
    })?;
    check_range(start, end, len)?;
    Ok(end)
}
