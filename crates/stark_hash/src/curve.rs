use std::sync::LazyLock;

use ff::{Field, PrimeField};

use crate::field::{le_bit, FieldElement};

/// β constant of the curve equation `y² = x³ + x + β`.
static CURVE_BETA: LazyLock<FieldElement> = LazyLock::new(|| {
    FieldElement::from_str_vartime(
        "3141592653589793238462643383279502884197169399375105820974944592307816406665",
    )
    .expect("curve β is a valid field element")
});

/// An affine point on the STARK curve.
///
/// The curve has `α = 1`, so the affine equation is `y² = x³ + x + β`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CurvePoint {
    x: FieldElement,
    y: FieldElement,
    infinity: bool,
}

impl CurvePoint {
    /// The point at infinity.
    pub fn identity() -> CurvePoint {
        Self {
            x: FieldElement::ZERO,
            y: FieldElement::ZERO,
            infinity: true,
        }
    }

    /// Creates a point from decimal coordinate strings.
    ///
    /// Returns `None` if either coordinate is not a valid field element.
    /// The point is not checked to be on the curve; see [CurvePoint::is_on_curve].
    pub fn from_xy_str(x: &str, y: &str) -> Option<CurvePoint> {
        let x = FieldElement::from_str_vartime(x)?;
        let y = FieldElement::from_str_vartime(y)?;
        Some(CurvePoint {
            x,
            y,
            infinity: false,
        })
    }

    /// The affine x-coordinate.
    pub fn x(&self) -> &FieldElement {
        &self.x
    }

    /// Checks the curve equation `y² = x³ + x + β`.
    ///
    /// The point at infinity is considered on the curve.
    pub fn is_on_curve(&self) -> bool {
        if self.infinity {
            return true;
        }
        self.y.square() == self.x.square() * self.x + self.x + *CURVE_BETA
    }

    pub fn double(&self) -> CurvePoint {
        if self.infinity {
            return self.clone();
        }

        // λ = (3x² + α) / 2y, with α = 1
        let lambda = {
            let three = FieldElement::ONE.double() + FieldElement::ONE;
            let dividend = three * self.x.square() + FieldElement::ONE;
            let divisor_inv = self.y.double().invert().unwrap();
            dividend * divisor_inv
        };

        let x = lambda.square() - self.x.double();
        let y = lambda * (self.x - x) - self.y;
        CurvePoint {
            x,
            y,
            infinity: false,
        }
    }

    pub fn add(&self, other: &CurvePoint) -> CurvePoint {
        if self.infinity {
            return other.clone();
        }
        if other.infinity {
            return self.clone();
        }
        if self.x == other.x {
            // Same x-coordinate: either the same point or its mirror image.
            return if self.y == other.y {
                self.double()
            } else {
                CurvePoint::identity()
            };
        }

        // λ = (y2 - y1) / (x2 - x1)
        let lambda = {
            let dividend = other.y - self.y;
            let divisor_inv = (other.x - self.x).invert().unwrap();
            dividend * divisor_inv
        };

        let x = lambda.square() - self.x - other.x;
        let y = lambda * (self.x - x) - self.y;
        CurvePoint {
            x,
            y,
            infinity: false,
        }
    }

    /// Multiplies the point by a scalar, interpreting the scalar's canonical
    /// little-endian representation bit by bit.
    pub fn mul(&self, scalar: &FieldElement) -> CurvePoint {
        let repr = scalar.to_repr();
        let bits = repr.as_ref();

        let mut result = CurvePoint::identity();
        let mut power = self.clone();
        for i in 0..256 {
            if le_bit(bits, i) {
                result = result.add(&power);
            }
            power = power.double();
        }
        result
    }
}
