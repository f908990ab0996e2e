#![deny(rust_2018_idioms)]

//! Pedersen hash over the STARK curve.
//!
//! The hash maps two elements of a 252-bit prime field to a single field
//! element using fixed constant points on the curve `y² = x³ + x + β`,
//! following starkware's crypto reference.

mod curve;
mod field;
mod pedersen;

pub use curve::CurvePoint;
pub use field::FieldElement;
pub use pedersen::pedersen_hash;
