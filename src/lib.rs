//! Fixed-length sequences for genetic-algorithm chromosomes.
//!
//! Provides the ordered containers that GA operators work on:
//!
//! - **Mutable sequences** ([`seq::MArray`]): fixed-size, bounds-checked,
//!   in-place mutation with chainable bulk writes.
//! - **Sub-range views** ([`seq::MSlice`]): live windows over a parent
//!   sequence, for crossover segments and mutation windows.
//! - **Immutable snapshots** ([`seq::ISeq`]): copies detached from the
//!   mutable source, cheap to clone and slice.
//!
//! # Architecture
//!
//! This crate sits at Layer 1 (Foundation) in the U-Engine ecosystem next
//! to `u-numflow`. It knows nothing about fitness, selection, or
//! populations; the algorithm crates at Layer 2 build those on top.
//!
//! # Features
//!
//! - `parallel`: enables `MSeq::par_map`, a rayon-backed `map`.

pub mod seq;
