use tiny_keccak::{Hasher, Keccak};

use crate::*;

pub struct Ecdsa;

impl Ecdsa {
    /// Signature scalars and secret keys must be nonzero and below the
    /// curve order 𝑁. Big-endian array comparison matches numeric order.
    fn is_valid_scalar(k: &[u8; 32]) -> bool {
        *k != [0u8; 32] && *k < Curve::N
    }

    /// ### Verify
    ///
    /// Checks that the signature (𝒓, 𝒔) over the 256-bit message digest `𝒆`
    /// authenticates under `public_key`:
    ///
    /// - 𝒓, 𝒔 ∈ [1, 𝑁−1] and the public key lies on the curve, else false
    /// - 𝑤 = 𝒔⁻¹ mod 𝑁, u1 = 𝒆·𝑤, u2 = 𝒓·𝑤
    /// - accept iff the x-coordinate of u1·𝐺 + u2·𝑄 equals 𝒓
    ///
    /// The affine x-coordinate is compared against `𝒓` without reduction
    /// modulo 𝑁; the rare signatures whose point lands in the band [𝑁, 𝑃)
    /// are rejected.
    pub fn verify(
        public_key: &UncompressedPoint,
        r: &[u8; 32],
        s: &[u8; 32],
        digest: &[u8; 32],
    ) -> bool {
        if !Self::is_valid_scalar(r) || !Self::is_valid_scalar(s) {
            return false;
        }
        if !public_key.is_on_curve() {
            return false;
        }

        let w = Curve::mod_inv_n(s);
        let u1 = Curve::mul_mod_n(digest, &w);
        let u2 = Curve::mul_mod_n(r, &w);

        let table = LookupTable::from(public_key);
        table.mul_shamir(&u1, &u2).x() == *r
    }

    /// ### Recover
    ///
    /// Recovers the public key 𝑄 = 𝒓⁻¹·(𝒔·𝑅 − 𝒆·𝐺) from a signature and a
    /// recovery id `𝒗` selecting the parity of 𝑅's y-coordinate. Factoring
    /// the equation as (−𝒆·𝒓⁻¹)·𝐺 + (𝒔·𝒓⁻¹)·𝑅 lets the shared (𝐺, 𝑅) table
    /// produce it in a single Shamir pass.
    ///
    /// Returns the zero sentinel point on any failure: 𝒓 or 𝒔 out of range,
    /// 𝒗 ∉ {0, 1}, or an x-coordinate with no point on the curve.
    pub fn recover(r: &[u8; 32], s: &[u8; 32], v: u8, digest: &[u8; 32]) -> UncompressedPoint {
        if !Self::is_valid_scalar(r) || !Self::is_valid_scalar(s) || v > 1 {
            return UncompressedPoint::identity();
        }

        // r < N < P, so r is always a candidate x-coordinate in 𝔽ₚ.
        let mut r_point = match UncompressedPoint::lift_x(r) {
            Ok(point) => point,
            Err(_) => return UncompressedPoint::identity(),
        };
        if r_point.is_odd() != (v == 1) {
            r_point.invert();
        }

        let w = Curve::mod_inv_n(r);
        let u1 = Curve::mul_mod_n(&Curve::negate_n(digest), &w);
        let u2 = Curve::mul_mod_n(s, &w);

        let table = LookupTable::from(&r_point);
        table.mul_shamir(&u1, &u2)
    }

    /// ### Derive Public Key
    ///
    /// Computes 𝑄 = 𝒅·𝐺 for a secret scalar 𝒅 ∈ [1, 𝑁−1].
    pub fn derive_public_key(d: &[u8; 32]) -> Result<UncompressedPoint, Secp256r1Error> {
        if !Self::is_valid_scalar(d) {
            return Err(Secp256r1Error::InvalidSecretKey);
        }
        Ok(mul_g(d))
    }

    /// ### Derive Address
    ///
    /// keccak-256 over the 64-byte 𝑋 ‖ 𝑌 public key, low 20 bytes — the
    /// Ethereum address rule applied to a raw P-256 key.
    pub fn derive_address(public_key: &UncompressedPoint) -> [u8; 20] {
        let mut hasher = Keccak::v256();
        hasher.update(&public_key.0);
        let mut hash = [0u8; 32];
        hasher.finalize(&mut hash);

        let mut address = [0u8; 20];
        address.copy_from_slice(&hash[12..]);
        address
    }

    /// ### Recover Address
    ///
    /// [`Ecdsa::recover`] composed with [`Ecdsa::derive_address`]. A failed
    /// recovery hashes the 64-byte zero sentinel, so the caller always gets
    /// a deterministic address.
    pub fn recover_address(r: &[u8; 32], s: &[u8; 32], v: u8, digest: &[u8; 32]) -> [u8; 20] {
        Self::derive_address(&Self::recover(r, s, v, digest))
    }
}
