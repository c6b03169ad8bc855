use core::{
    fmt::{Debug, Formatter},
    ops::Add,
};

use dashu::integer::UBig;

use crate::{field, Curve, Ecdsa, Secp256r1Error};

/// An affine secp256r1 point as 64 big-endian bytes, 𝑋 ‖ 𝑌. The all-zero
/// array is the reserved "no point" sentinel (identity or failure); it never
/// satisfies the curve equation because 𝑏 ≠ 0.
#[derive(PartialEq, Eq, Clone, Copy)]
pub struct UncompressedPoint(pub [u8; 64]);

impl UncompressedPoint {
    pub fn from_coordinates(x: &[u8; 32], y: &[u8; 32]) -> Self {
        let mut x_y = [0u8; 64];
        x_y[..32].copy_from_slice(x);
        x_y[32..].copy_from_slice(y);
        Self(x_y)
    }

    pub fn identity() -> Self {
        Self([0u8; 64])
    }

    pub fn is_identity(&self) -> bool {
        self.0 == [0u8; 64]
    }

    /// ### Is Odd
    /// Returns true if the 𝑌-coordinate of the point is odd
    pub fn is_odd(&self) -> bool {
        self.0[63] & 1 != 0
    }

    /// ### Is Even
    /// Returns true if the 𝑌-coordinate of the point is even
    pub fn is_even(&self) -> bool {
        self.0[63] & 1 != 1
    }

    /// ### 𝑋
    /// Returns the 𝑋 coordinate of the point
    pub fn x(&self) -> [u8; 32] {
        let mut x = [0u8; 32];
        x.copy_from_slice(&self.0[..32]);
        x
    }

    /// ### 𝑌
    /// Returns the 𝑌 coordinate of the point
    pub fn y(&self) -> [u8; 32] {
        let mut y = [0u8; 32];
        y.copy_from_slice(&self.0[32..]);
        y
    }

    /// ### Is On Curve
    ///
    /// Checks that both coordinates are reduced field elements and that the
    /// point satisfies y² ≡ x³ + 𝑎x + 𝑏 (mod 𝑃). The zero sentinel always
    /// fails the equation.
    pub fn is_on_curve(&self) -> bool {
        if self.x() >= Curve::P || self.y() >= Curve::P {
            return false;
        }
        let p = UBig::from_be_bytes(&Curve::P);
        let x = UBig::from_be_bytes(&self.x());
        let y = UBig::from_be_bytes(&self.y());

        let y_sq = field::mul(&y, &y, &p);
        let rhs = field::add(
            &field::add(
                &field::mul(&field::mul(&x, &x, &p), &x, &p),
                &field::mul(&UBig::from_be_bytes(&Curve::A), &x, &p),
                &p,
            ),
            &UBig::from_be_bytes(&Curve::B),
            &p,
        );
        y_sq == rhs
    }

    /// ### Lift 𝑋
    ///
    /// Finds a 𝑌-coordinate for the given 𝑋-coordinate by taking the square
    /// root of x³ + 𝑎x + 𝑏, re-squaring to reject non-residues. The parity
    /// of the returned root is unspecified; use [`Self::invert`] to select
    /// the other root.
    pub fn lift_x(x: &[u8; 32]) -> Result<Self, Secp256r1Error> {
        let p = UBig::from_be_bytes(&Curve::P);
        let x_int = UBig::from_be_bytes(x);

        let rhs = field::add(
            &field::add(
                &field::mul(&field::mul(&x_int, &x_int, &p), &x_int, &p),
                &field::mul(&UBig::from_be_bytes(&Curve::A), &x_int, &p),
                &p,
            ),
            &UBig::from_be_bytes(&Curve::B),
            &p,
        );
        let y = field::sqrt(&rhs, &p);
        if field::mul(&y, &y, &p) != rhs {
            return Err(Secp256r1Error::InvalidYCoordinate);
        }

        let y_bytes = y.to_be_bytes();
        let mut x_y = [0u8; 64];
        x_y[..32].copy_from_slice(x);
        x_y[64 - y_bytes.len()..].copy_from_slice(&y_bytes);
        Ok(Self(x_y))
    }

    /// ### Invert
    ///
    /// Flips the parity of the 𝑌-coordinate, replacing it with 𝑃 − 𝑌.
    pub fn invert(&mut self) {
        let p = UBig::from_be_bytes(&Curve::P);
        let y_bytes = field::neg(&UBig::from_be_bytes(&self.y()), &p).to_be_bytes();
        self.0[32..].fill(0);
        self.0[64 - y_bytes.len()..].copy_from_slice(&y_bytes);
    }
}

impl Add<UncompressedPoint> for UncompressedPoint {
    type Output = UncompressedPoint;

    /// Affine chord addition. Operands must be distinct on-curve points
    /// that are not negations of each other; doubling and the identity are
    /// outside this operator's domain.
    fn add(self, rhs: UncompressedPoint) -> Self::Output {
        let p = UBig::from_be_bytes(&Curve::P);

        let x_p = UBig::from_be_bytes(&self.x());
        let y_p = UBig::from_be_bytes(&self.y());
        let x_q = UBig::from_be_bytes(&rhs.x());
        let y_q = UBig::from_be_bytes(&rhs.y());

        // m = (y_q - y_p) / (x_q - x_p)
        let m = field::mul(
            &field::sub(&y_q, &y_p, &p),
            &field::inv(&field::sub(&x_q, &x_p, &p), &p),
            &p,
        );
        // xr = m² - x_p - x_q
        let xr = field::sub(&field::sub(&field::mul(&m, &m, &p), &x_p, &p), &x_q, &p);
        // yr = m·(x_p - xr) - y_p
        let yr = field::sub(&field::mul(&m, &field::sub(&x_p, &xr, &p), &p), &y_p, &p);

        let x_bytes = xr.to_be_bytes();
        let y_bytes = yr.to_be_bytes();
        let mut result = [0u8; 64];
        result[32 - x_bytes.len()..32].copy_from_slice(&x_bytes);
        result[64 - y_bytes.len()..].copy_from_slice(&y_bytes);
        UncompressedPoint(result)
    }
}

impl Debug for UncompressedPoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02X}", byte)?;
        }
        Ok(())
    }
}

impl TryFrom<[u8; 32]> for UncompressedPoint {
    type Error = Secp256r1Error;

    fn try_from(scalar: [u8; 32]) -> Result<Self, Secp256r1Error> {
        Ecdsa::derive_public_key(&scalar)
    }
}
