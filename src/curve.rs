use dashu::integer::{fast_div::ConstDivisor, UBig};

use crate::*;

pub struct Curve;

impl Curve {
    /// ### Field Prime Modulus 𝑃
    ///
    /// 0xffffffff00000001000000000000000000000000ffffffffffffffffffffffff
    ///
    /// The prime 𝑃 that defines the finite field over which secp256r1 is
    /// defined. All point arithmetic is performed modulo this prime.
    pub const P: [u8; 32] = [
        0xff, 0xff, 0xff, 0xff, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xff,
    ];

    /// ### Field Prime Modulus 𝑃-2
    ///
    /// 0xffffffff00000001000000000000000000000000fffffffffffffffffffffffd
    ///
    /// Precomputed Fermat exponent for modular inversion in 𝔽ₚ.
    pub const P_SUB_2: [u8; 32] = [
        0xff, 0xff, 0xff, 0xff, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xfd,
    ];

    /// ### Square Root Exponent (𝑃+1)/4
    ///
    /// 0x3fffffffc0000000400000000000000000000000400000000000000000000000
    ///
    /// Since 𝑃 ≡ 3 (mod 4), raising a quadratic residue to this power yields
    /// one of its square roots.
    pub const P_1_4: [u8; 32] = [
        0x3f, 0xff, 0xff, 0xff, 0xc0, 0x00, 0x00, 0x00, 0x40, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x40, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00,
    ];

    /// ### Curve order 𝑁
    ///
    /// 0xffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551
    ///
    /// The order 𝑁 of the secp256r1 group. All valid private keys and all
    /// signature scalars lie in [1, 𝑁-1].
    pub const N: [u8; 32] = [
        0xff, 0xff, 0xff, 0xff, 0x00, 0x00, 0x00, 0x00, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xbc, 0xe6, 0xfa, 0xad, 0xa7, 0x17, 0x9e, 0x84, 0xf3, 0xb9, 0xca, 0xc2, 0xfc, 0x63,
        0x25, 0x51,
    ];

    /// ### Curve order 𝑁-2
    ///
    /// 0xffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc63254f
    ///
    /// Precomputed Fermat exponent for modular inversion in 𝔽ₙ.
    pub const N_SUB_2: [u8; 32] = [
        0xff, 0xff, 0xff, 0xff, 0x00, 0x00, 0x00, 0x00, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xbc, 0xe6, 0xfa, 0xad, 0xa7, 0x17, 0x9e, 0x84, 0xf3, 0xb9, 0xca, 0xc2, 0xfc, 0x63,
        0x25, 0x4f,
    ];

    /// ### Curve coefficient 𝑎
    ///
    /// 0xffffffff00000001000000000000000000000000fffffffffffffffffffffffc
    ///
    /// Equals −3 mod 𝑃, per the short-Weierstrass equation y² = x³ + 𝑎x + 𝑏.
    pub const A: [u8; 32] = [
        0xff, 0xff, 0xff, 0xff, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xfc,
    ];

    /// ### Curve coefficient 𝑏
    ///
    /// 0x5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b
    pub const B: [u8; 32] = [
        0x5a, 0xc6, 0x35, 0xd8, 0xaa, 0x3a, 0x93, 0xe7, 0xb3, 0xeb, 0xbd, 0x55, 0x76, 0x98, 0x86,
        0xbc, 0x65, 0x1d, 0x06, 0xb0, 0xcc, 0x53, 0xb0, 0xf6, 0x3b, 0xce, 0x3c, 0x3e, 0x27, 0xd2,
        0x60, 0x4b,
    ];

    /// ### Generator Point 𝐺
    ///
    /// 𝐺.𝑋: 0x6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296
    /// 𝐺.𝑌: 0x4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5
    ///
    /// The agreed base point of the curve. Every valid public key is a
    /// scalar multiple of 𝐺.
    pub const G: UncompressedPoint = UncompressedPoint([
        0x6b, 0x17, 0xd1, 0xf2, 0xe1, 0x2c, 0x42, 0x47, 0xf8, 0xbc, 0xe6, 0xe5, 0x63, 0xa4, 0x40,
        0xf2, 0x77, 0x03, 0x7d, 0x81, 0x2d, 0xeb, 0x33, 0xa0, 0xf4, 0xa1, 0x39, 0x45, 0xd8, 0x98,
        0xc2, 0x96, 0x4f, 0xe3, 0x42, 0xe2, 0xfe, 0x1a, 0x7f, 0x9b, 0x8e, 0xe7, 0xeb, 0x4a, 0x7c,
        0x0f, 0x9e, 0x16, 0x2b, 0xce, 0x33, 0x57, 0x6b, 0x31, 0x5e, 0xce, 0xcb, 0xb6, 0x40, 0x68,
        0x37, 0xbf, 0x51, 0xf5,
    ]);

    /// ### Mul Mod 𝑁
    ///
    /// Multiplies two scalars modulo curve order 𝑁. Inputs need not be
    /// reduced.
    pub fn mul_mod_n(a: &[u8; 32], b: &[u8; 32]) -> [u8; 32] {
        let a_int = UBig::from_be_bytes(a);
        let b_int = UBig::from_be_bytes(b);
        let n_int = UBig::from_be_bytes(&Self::N);

        let res_bytes = ((a_int * b_int) % n_int).to_be_bytes();

        let mut result = [0u8; 32];
        result[32 - res_bytes.len()..].copy_from_slice(&res_bytes);
        result
    }

    /// ### Negate Mod 𝑁
    ///
    /// Calculates `𝑁 - 𝒌 mod 𝑁`. Correct for any `𝒌` below 2𝑁, which covers
    /// every 256-bit value, so an unreduced message digest may be negated
    /// directly.
    pub fn negate_n(k: &[u8; 32]) -> [u8; 32] {
        let n = UBig::from_be_bytes(&Self::N);
        let res_bytes = ((&n + &n - UBig::from_be_bytes(k)) % &n).to_be_bytes();

        let mut result = [0u8; 32];
        result[32 - res_bytes.len()..].copy_from_slice(&res_bytes);
        result
    }

    /// ### Modular Inverse 𝑁
    ///
    /// Calculates the modular inverse of `𝒌` via Fermat's little theorem:
    /// for the prime order 𝑁, `𝒌⁻¹ ≡ 𝒌⁽ᴺ⁻²⁾ mod 𝑁`. The caller guarantees
    /// `𝒌` is nonzero mod 𝑁; the signature range gates in [`Ecdsa`] enforce
    /// this before any inversion.
    pub fn mod_inv_n(k: &[u8; 32]) -> [u8; 32] {
        let ring = ConstDivisor::new(UBig::from_be_bytes(&Self::N));
        let res_bytes = ring
            .reduce(UBig::from_be_bytes(k))
            .pow(&UBig::from_be_bytes(&Self::N_SUB_2))
            .residue()
            .to_be_bytes();

        let mut inv_k = [0u8; 32];
        inv_k[32 - res_bytes.len()..].copy_from_slice(&res_bytes);
        inv_k
    }
}
