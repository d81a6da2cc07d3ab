//! Bidirectional list cursor over a mutable sequence.

use std::mem;

use super::error::SeqError;

/// A cursor that walks a sequence in both directions and can replace the
/// element it last returned.
///
/// The position lies *between* elements, in `0..=len`: [`next`](Self::next)
/// returns the element after it and advances, [`previous`](Self::previous)
/// steps back and returns the element before it. Structural changes are not
/// offered, the sequence keeps its length.
///
/// ```
/// use u_seq::seq::{MArray, MSeq, Seq};
///
/// let mut genes = MArray::from(vec![1, 2, 3]);
/// let mut cursor = genes.cursor();
/// while let Some(&gene) = cursor.next() {
///     cursor.set(gene * 10).unwrap();
/// }
/// assert_eq!(cursor.previous(), Some(&30));
/// assert_eq!(genes.as_slice(), &[10, 20, 30]);
/// ```
#[derive(Debug)]
pub struct Cursor<'a, T> {
    data: &'a mut [T],
    position: usize,
    last: Option<usize>,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(data: &'a mut [T], position: usize) -> Self {
        debug_assert!(position <= data.len());
        Self {
            data,
            position,
            last: None,
        }
    }

    /// Returns `true` if [`next`](Self::next) would yield an element.
    pub fn has_next(&self) -> bool {
        self.position < self.data.len()
    }

    /// Returns `true` if [`previous`](Self::previous) would yield an element.
    pub fn has_previous(&self) -> bool {
        self.position > 0
    }

    /// Index of the element the next call to `next` returns.
    ///
    /// Equals the sequence length at the end.
    pub fn next_index(&self) -> usize {
        self.position
    }

    /// Index of the element the next call to `previous` returns, if any.
    pub fn previous_index(&self) -> Option<usize> {
        self.position.checked_sub(1)
    }

    /// Returns the element after the cursor and moves past it.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<&T> {
        if !self.has_next() {
            return None;
        }
        let index = self.position;
        self.position += 1;
        self.last = Some(index);
        Some(&self.data[index])
    }

    /// Moves before the previous element and returns it.
    pub fn previous(&mut self) -> Option<&T> {
        if !self.has_previous() {
            return None;
        }
        self.position -= 1;
        self.last = Some(self.position);
        Some(&self.data[self.position])
    }

    /// Mutable access to the element most recently returned by `next` or
    /// `previous`.
    ///
    /// # Errors
    /// [`SeqError::NoCurrentElement`] if the cursor has not moved yet.
    pub fn current_mut(&mut self) -> Result<&mut T, SeqError> {
        let index = self.last.ok_or(SeqError::NoCurrentElement)?;
        Ok(&mut self.data[index])
    }

    /// Replaces the element most recently returned by `next` or `previous`
    /// and returns the old value.
    ///
    /// # Errors
    /// [`SeqError::NoCurrentElement`] if the cursor has not moved yet.
    pub fn set(&mut self, value: T) -> Result<T, SeqError> {
        Ok(mem::replace(self.current_mut()?, value))
    }
}

#[cfg(test)]
mod tests {
    use crate::seq::{MArray, MSeq, Seq, SeqError};

    #[test]
    fn test_forward_and_backward() {
        let mut seq = MArray::from(vec!['a', 'b', 'c']);
        let mut cursor = seq.cursor();
        assert!(!cursor.has_previous());
        assert_eq!(cursor.previous_index(), None);
        assert_eq!(cursor.next(), Some(&'a'));
        assert_eq!(cursor.next(), Some(&'b'));
        assert_eq!(cursor.next(), Some(&'c'));
        assert_eq!(cursor.next(), None);
        assert_eq!(cursor.next_index(), 3);
        assert_eq!(cursor.previous(), Some(&'c'));
        assert_eq!(cursor.previous(), Some(&'b'));
        assert_eq!(cursor.previous(), Some(&'a'));
        assert_eq!(cursor.previous(), None);
    }

    #[test]
    fn test_set_replaces_last_returned() {
        let mut seq = MArray::from(vec![1, 2, 3]);
        {
            let mut cursor = seq.cursor();
            cursor.next();
            cursor.next();
            assert_eq!(cursor.set(20), Ok(2));
            cursor.previous();
            assert_eq!(cursor.set(200), Ok(20));
            cursor.previous();
            *cursor.current_mut().unwrap() += 100;
        }
        assert_eq!(seq.as_slice(), &[101, 200, 3]);
    }

    #[test]
    fn test_set_before_move_fails() {
        let mut seq = MArray::from(vec![1]);
        let mut cursor = seq.cursor();
        assert_eq!(cursor.set(5), Err(SeqError::NoCurrentElement));
        assert!(cursor.current_mut().is_err());
    }

    #[test]
    fn test_cursor_at() {
        let mut seq = MArray::from(vec![1, 2, 3]);
        let mut cursor = seq.cursor_at(2).unwrap();
        assert_eq!(cursor.previous_index(), Some(1));
        assert_eq!(cursor.next(), Some(&3));
        assert!(!cursor.has_next());

        let cursor = seq.cursor_at(3).unwrap();
        assert!(!cursor.has_next());
        assert!(cursor.has_previous());

        assert_eq!(
            seq.cursor_at(4).err(),
            Some(SeqError::IndexOutOfBounds { index: 4, len: 3 })
        );
    }

    #[test]
    fn test_empty_sequence() {
        let mut seq: MArray<u8> = MArray::from(Vec::new());
        let mut cursor = seq.cursor();
        assert!(!cursor.has_next());
        assert!(!cursor.has_previous());
        assert_eq!(cursor.next(), None);
    }
}
