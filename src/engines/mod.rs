//! Computation engines
//!
//! Algorithms over raw nucleotide and amino-acid bytes. Callers are expected
//! to hand in data that has already been validated against an alphabet; the
//! typed API in [`crate::modules`] takes care of that.

pub mod core;
pub mod compute;
