#![warn(missing_docs)]

//! This crate provides a static range minimum query data structure. Given an immutable slice of
//! totally ordered values, it answers "which index holds the minimum value in the range `[i, j)`?"
//! in constant time after linear-time preprocessing. The structure cannot be modified after it has
//! been created, and it borrows the input slice instead of copying it.
//!
//! # Data structure
//! The [`FischerHeunRmq`] structure splits the input into blocks of logarithmic size, answers
//! queries over whole blocks with a sparse table over the block minima, and answers queries within
//! blocks with dense tables that are shared between all blocks whose Cartesian trees have the same
//! shape. This keeps preprocessing linear while every query remains a constant number of table
//! lookups.
//!
//! # Query contract
//! Queries are half-open ranges `[i, j)`. Ties between equal minima are always broken towards the
//! smallest index. An invalid range (`i >= j`, or `j` past the end of the slice) is answered with
//! an out-of-range sentinel index greater than or equal to `j` instead of a panic, so callers can
//! validate the result against `j`.

pub use rmq::fischer_heun::FischerHeunRmq;

pub mod rmq;
