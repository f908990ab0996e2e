use std::sync::LazyLock;

use ff::PrimeField;

use crate::curve::CurvePoint;
use crate::field::{le_bit, FieldElement};

/// Bits of an input hashed against the first constant point of its pair.
const LOW_BITS: usize = 248;
/// Total bits of an input processed; field elements fit in 252 bits.
const ELEMENT_BITS: usize = 252;

/// The shift point and the four constant points of the hash, from
/// starkware's crypto reference.
static PEDERSEN_POINTS: LazyLock<[CurvePoint; 5]> = LazyLock::new(|| {
    [
        CurvePoint::from_xy_str(
            "2089986280348253421170679821480865132823066470938446095505822317253594081284",
            "1713931329540660377023406109199410414810705867260802078187082345529207694986",
        ),
        CurvePoint::from_xy_str(
            "996781205833008774514500082376783249102396023663454813447423147977397232763",
            "1668503676786377725805489344771023921079126552019160156920634619255970485781",
        ),
        CurvePoint::from_xy_str(
            "2251563274489750535117886426533222435294046428347329203627021249169616184184",
            "1798716007562728905295480679789526322175868328062420237419143593021674992973",
        ),
        CurvePoint::from_xy_str(
            "2138414695194151160943305727036575959195309218611738193261179310511854807447",
            "113410276730064486255102093846540133784865286929052426931474106396135072156",
        ),
        CurvePoint::from_xy_str(
            "2379962749567351885752724891227938183011949129833673362440656643086021394946",
            "776496453633298175483985398648758586525933812536653089401905292063708816422",
        ),
    ]
    .map(|p| p.expect("pedersen constant point invalid"))
});

/// Computes the Pedersen hash of two field elements.
///
/// Each input contributes its low 248 bits against one constant point and
/// its high 4 bits against the next; the result is the x-coordinate of the
/// accumulated sum, starting from the shift point.
pub fn pedersen_hash(a: &FieldElement, b: &FieldElement) -> FieldElement {
    let [shift, p1, p2, p3, p4] = &*PEDERSEN_POINTS;

    let mut state = shift.clone();
    state = state.add(&process_element(a, p1, p2));
    state = state.add(&process_element(b, p3, p4));
    *state.x()
}

/// Accumulates one input: `low * P_low + high * P_high` where `low` is the
/// element's low 248 bits and `high` its remaining 4 bits.
fn process_element(e: &FieldElement, p_low: &CurvePoint, p_high: &CurvePoint) -> CurvePoint {
    let repr = e.to_repr();
    let bits = repr.as_ref();

    let mut acc = CurvePoint::identity();

    let mut power = p_low.clone();
    for i in 0..LOW_BITS {
        if le_bit(bits, i) {
            acc = acc.add(&power);
        }
        power = power.double();
    }

    let mut power = p_high.clone();
    for i in LOW_BITS..ELEMENT_BITS {
        if le_bit(bits, i) {
            acc = acc.add(&power);
        }
        power = power.double();
    }

    acc
}
