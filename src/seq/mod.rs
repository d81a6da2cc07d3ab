//! Fixed-length sequences.
//!
//! The sequence layer beneath chromosome and population types. A GA
//! operator mutates genes through [`MSeq`], hands out immutable snapshots as
//! [`ISeq`], and works on sub-ranges (crossover segments, mutation windows)
//! through live [`MSlice`] views.
//!
//! # Core Traits
//!
//! - [`Seq`]: Read-only access — indexing, search, iteration, formatting
//! - [`MSeq`]: In-place mutation — `set`, `set_all`, `fill`, `swap`, block swaps
//!
//! # Key Types
//!
//! - [`MArray`]: Owned mutable sequence
//! - [`MSlice`]: Mutable view of a sub-range, sharing its parent's storage
//! - [`ISeq`]: Immutable, cheaply clonable snapshot
//! - [`Cursor`]: Bidirectional cursor with in-place replacement
//! - [`SeqFormat`]: Prefix / separator / suffix used for rendering
//! - [`SeqError`]: Bounds and range violations
//!
//! # Example: single-point crossover
//!
//! ```
//! use u_seq::seq::{MArray, MSeq, Seq};
//!
//! let mut mother = MArray::from(vec![0, 0, 0, 0, 0]);
//! let mut father = MArray::from(vec![1, 1, 1, 1, 1]);
//! let point = 3;
//! let len = mother.len();
//! mother.swap_range(point, len, &mut father, point).unwrap();
//! assert_eq!(mother.as_slice(), &[0, 0, 0, 1, 1]);
//! assert_eq!(father.as_slice(), &[1, 1, 1, 0, 0]);
//! ```

mod array;
mod cursor;
mod error;
mod format;
mod iseq;
mod types;
mod view;

pub use array::MArray;
pub use cursor::Cursor;
pub use error::SeqError;
pub use format::SeqFormat;
pub use iseq::ISeq;
pub use types::{MSeq, Seq};
pub use view::MSlice;
