//! Typed sequence analysis API

pub mod io;
pub mod seq;
