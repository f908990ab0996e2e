use std::fmt;

use ff::PrimeField;

/// The 252-bit prime field the STARK curve is defined over.
#[derive(PrimeField)]
#[PrimeFieldModulus = "3618502788666131213697322783095070105623107215331596699973092056135872020481"]
#[PrimeFieldGenerator = "7"]
#[PrimeFieldReprEndianness = "little"]
pub struct FieldElement([u64; 4]);

impl FieldElement {
    /// Parses a decimal numeral.
    ///
    /// Returns `None` if the string is not a decimal numeral below the
    /// field modulus.
    pub fn from_dec_str(s: &str) -> Option<Self> {
        Self::from_str_vartime(s)
    }
}

/// Returns the `index`'th bit of a little-endian byte representation.
///
/// Panics if `index` is out of bounds.
pub(crate) fn le_bit(bytes: &[u8], index: usize) -> bool {
    (bytes[index / 8] >> (index % 8)) & 1 == 1
}

impl fmt::Display for FieldElement {
    /// Formats as `0x`-prefixed lowercase hex with leading zeroes trimmed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = self.to_repr();
        let mut be_bytes = repr.as_ref().to_vec();
        be_bytes.reverse();

        let hex = hex::encode(be_bytes);
        let trimmed = hex.trim_start_matches('0');
        if trimmed.is_empty() {
            f.write_str("0x0")
        } else {
            write!(f, "0x{trimmed}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ff::Field;
    use pretty_assertions_sorted::assert_eq;

    mod le_bit {
        use super::*;

        #[test]
        fn zero() {
            let repr = FieldElement::ZERO.to_repr();
            for i in 0..=255 {
                assert!(!le_bit(repr.as_ref(), i), "bit {}", i);
            }
        }

        #[test]
        fn one() {
            let repr = FieldElement::ONE.to_repr();
            assert!(le_bit(repr.as_ref(), 0));
            for i in 1..=255 {
                assert!(!le_bit(repr.as_ref(), i), "bit {}", i);
            }
        }

        #[test]
        fn two() {
            let repr = FieldElement::ONE.double().to_repr();
            assert!(!le_bit(repr.as_ref(), 0));
            assert!(le_bit(repr.as_ref(), 1));
            for i in 2..=255 {
                assert!(!le_bit(repr.as_ref(), i), "bit {}", i);
            }
        }
    }

    #[test]
    fn display_trims_leading_zeroes() {
        let value = FieldElement::from_str_vartime("18").unwrap();
        assert_eq!(value.to_string(), "0x12");
    }

    #[test]
    fn display_zero() {
        assert_eq!(FieldElement::ZERO.to_string(), "0x0");
    }
}
