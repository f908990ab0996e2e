#![deny(rust_2018_idioms)]

//! Comparative benchmark for interchangeable two-input hash implementations.
//!
//! Several named candidates are registered behind the single [HashFn]
//! capability, checked once against a canonical input pair, and then timed
//! against shared pseudo-random input batches of increasing size. All
//! results go to a report writer; nothing is persisted.

pub mod bindings;
pub mod candidate;
pub mod clock;
pub mod correctness;
pub mod driver;
pub mod generator;
pub mod runner;

pub use candidate::{Candidate, Digest, HashFamily, HashFn, Numeral, Registry};
