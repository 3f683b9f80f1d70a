//! Runtime support shared by the compute engines

#[cfg(feature = "parallel")]
pub mod parallel;
