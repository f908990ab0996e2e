//! Concrete hash bindings and the default candidate set.
//!
//! Each binding adapts one external implementation to the [HashFn]
//! contract, including the conversion from decimal numerals into whatever
//! encoding that implementation expects.

use anyhow::{Context, Result};
use num_bigint::BigUint;
use sha3::{Digest as _, Keccak256};
use starknet_types_core::felt::Felt;
use starknet_types_core::hash::{Pedersen, StarkHash};

use crate::candidate::{Digest, HashFamily, HashFn, Numeral, Registry};

/// The in-tree Pedersen implementation, built on `ff` field arithmetic.
pub struct LocalPedersen;

impl HashFn for LocalPedersen {
    fn invoke(&self, a: &Numeral, b: &Numeral) -> Result<Digest> {
        let a = parse_field_element(a)?;
        let b = parse_field_element(b)?;
        Ok(Digest::new(stark_hash::pedersen_hash(&a, &b).to_string()))
    }
}

/// Pedersen hash from `starknet-types-core`, an independent implementation
/// of the same function.
pub struct TypesCorePedersen;

impl HashFn for TypesCorePedersen {
    fn invoke(&self, a: &Numeral, b: &Numeral) -> Result<Digest> {
        let a = parse_felt(a)?;
        let b = parse_felt(b)?;
        Ok(Digest::new(format!("{:#x}", Pedersen::hash(&a, &b))))
    }
}

/// Keccak-256 over the two inputs encoded as 32-byte little-endian
/// buffers, concatenated. A different hash family entirely; registered as
/// a throughput baseline, never expected to agree with the Pedersen
/// candidates.
pub struct KeccakConcat;

impl HashFn for KeccakConcat {
    fn invoke(&self, a: &Numeral, b: &Numeral) -> Result<Digest> {
        let a = le_bytes(a)?;
        let b = le_bytes(b)?;

        let mut hasher = Keccak256::new();
        hasher.update(a);
        hasher.update(b);
        Ok(Digest::new(format!("0x{}", hex::encode(hasher.finalize()))))
    }
}

/// The fixed candidate set compared by the driver binary.
pub fn default_registry() -> Registry {
    let mut registry = Registry::default();
    registry.register("stark_hash (ff)", HashFamily::Pedersen, LocalPedersen);
    registry.register("starknet-types-core", HashFamily::Pedersen, TypesCorePedersen);
    registry.register("keccak-256 (sha3)", HashFamily::Keccak, KeccakConcat);
    registry
}

fn parse_field_element(numeral: &Numeral) -> Result<stark_hash::FieldElement> {
    stark_hash::FieldElement::from_dec_str(numeral.as_str())
        .with_context(|| format!("Numeral '{}' is not a field element", numeral))
}

fn parse_felt(numeral: &Numeral) -> Result<Felt> {
    let value: BigUint = numeral
        .as_str()
        .parse()
        .with_context(|| format!("Numeral '{}' is not an unsigned integer", numeral))?;

    let bytes = value.to_bytes_be();
    anyhow::ensure!(
        bytes.len() <= 32,
        "Numeral '{}' does not fit in 32 bytes",
        numeral
    );

    let mut buffer = [0u8; 32];
    buffer[32 - bytes.len()..].copy_from_slice(&bytes);
    Ok(Felt::from_bytes_be(&buffer))
}

/// Encodes a decimal numeral as a 32-byte little-endian buffer.
fn le_bytes(numeral: &Numeral) -> Result<[u8; 32]> {
    let value: BigUint = numeral
        .as_str()
        .parse()
        .with_context(|| format!("Numeral '{}' is not an unsigned integer", numeral))?;

    let bytes = value.to_bytes_le();
    anyhow::ensure!(
        bytes.len() <= 32,
        "Numeral '{}' does not fit in 32 bytes",
        numeral
    );

    let mut buffer = [0u8; 32];
    buffer[..bytes.len()].copy_from_slice(&bytes);
    Ok(buffer)
}
