use dashu::integer::UBig;

use crate::{field, Curve, UncompressedPoint};

/// Projective (X, Y, Z) triple representing the affine point (X/Z², Y/Z³).
/// Addition and doubling run without modular inversion; Z = 0 encodes the
/// point at infinity, canonically (0, 0, 0).
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct JacobianPoint {
    pub(crate) x: UBig,
    pub(crate) y: UBig,
    pub(crate) z: UBig,
}

impl JacobianPoint {
    pub(crate) fn identity() -> Self {
        Self {
            x: UBig::from_word(0),
            y: UBig::from_word(0),
            z: UBig::from_word(0),
        }
    }

    pub(crate) fn is_identity(&self) -> bool {
        self.z == UBig::from_word(0)
    }

    pub(crate) fn from_affine(point: &UncompressedPoint) -> Self {
        Self {
            x: UBig::from_be_bytes(&point.x()),
            y: UBig::from_be_bytes(&point.y()),
            z: UBig::from_word(1),
        }
    }

    pub(crate) fn double(&self) -> Self {
        if self.is_identity() {
            return Self::identity();
        }
        let p = UBig::from_be_bytes(&Curve::P);
        let a = UBig::from_be_bytes(&Curve::A);

        let y_sq = field::mul(&self.y, &self.y, &p);
        // S = 4·X·Y²
        let s = field::mul(&UBig::from_word(4), &field::mul(&self.x, &y_sq, &p), &p);
        let z_sq = field::mul(&self.z, &self.z, &p);
        let z_4 = field::mul(&z_sq, &z_sq, &p);
        // M = 3·X² + a·Z⁴
        let m = field::add(
            &field::mul(&UBig::from_word(3), &field::mul(&self.x, &self.x, &p), &p),
            &field::mul(&a, &z_4, &p),
            &p,
        );
        // X' = M² − 2·S
        let x3 = field::sub(
            &field::mul(&m, &m, &p),
            &field::mul(&UBig::from_word(2), &s, &p),
            &p,
        );
        // Y' = M·(S − X') − 8·Y⁴
        let y_4 = field::mul(&y_sq, &y_sq, &p);
        let y3 = field::sub(
            &field::mul(&m, &field::sub(&s, &x3, &p), &p),
            &field::mul(&UBig::from_word(8), &y_4, &p),
            &p,
        );
        // Z' = 2·Y·Z
        let z3 = field::mul(&UBig::from_word(2), &field::mul(&self.y, &self.z, &p), &p);

        Self { x: x3, y: y3, z: z3 }
    }

    /// Adds two points. The identity is handled on either side; H = 0
    /// (equal or opposite affine operands) is not, and never occurs in the
    /// scalar multiplication structure built on top of this routine.
    pub(crate) fn add(&self, other: &Self) -> Self {
        if self.is_identity() {
            return other.clone();
        }
        if other.is_identity() {
            return self.clone();
        }
        let p = UBig::from_be_bytes(&Curve::P);

        let z1_sq = field::mul(&self.z, &self.z, &p);
        let z2_sq = field::mul(&other.z, &other.z, &p);
        let z1_cu = field::mul(&z1_sq, &self.z, &p);
        let z2_cu = field::mul(&z2_sq, &other.z, &p);

        let u1 = field::mul(&self.x, &z2_sq, &p);
        let u2 = field::mul(&other.x, &z1_sq, &p);
        let s1 = field::mul(&self.y, &z2_cu, &p);
        let s2 = field::mul(&other.y, &z1_cu, &p);

        let h = field::sub(&u2, &u1, &p);
        let r = field::sub(&s2, &s1, &p);

        let h_sq = field::mul(&h, &h, &p);
        let h_cu = field::mul(&h_sq, &h, &p);
        let u1_h_sq = field::mul(&u1, &h_sq, &p);

        // X3 = R² − H³ − 2·U1·H²
        let x3 = field::sub(
            &field::sub(&field::mul(&r, &r, &p), &h_cu, &p),
            &field::mul(&UBig::from_word(2), &u1_h_sq, &p),
            &p,
        );
        // Y3 = R·(U1·H² − X3) − S1·H³
        let y3 = field::sub(
            &field::mul(&r, &field::sub(&u1_h_sq, &x3, &p), &p),
            &field::mul(&s1, &h_cu, &p),
            &p,
        );
        // Z3 = H·Z1·Z2
        let z3 = field::mul(&h, &field::mul(&self.z, &other.z, &p), &p);

        Self { x: x3, y: y3, z: z3 }
    }

    /// Converts back to affine with a single modular inversion. The
    /// identity maps to the zero sentinel point.
    pub(crate) fn to_affine(&self) -> UncompressedPoint {
        if self.is_identity() {
            return UncompressedPoint::identity();
        }
        let p = UBig::from_be_bytes(&Curve::P);
        let z_inv = field::inv(&self.z, &p);
        let z_inv_sq = field::mul(&z_inv, &z_inv, &p);
        let z_inv_cu = field::mul(&z_inv_sq, &z_inv, &p);
        let x_bytes = field::mul(&self.x, &z_inv_sq, &p).to_be_bytes();
        let y_bytes = field::mul(&self.y, &z_inv_cu, &p).to_be_bytes();

        let mut out = [0u8; 64];
        out[32 - x_bytes.len()..32].copy_from_slice(&x_bytes);
        out[64 - y_bytes.len()..].copy_from_slice(&y_bytes);
        UncompressedPoint(out)
    }
}
