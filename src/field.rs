// 256-bit modular arithmetic over an explicit modulus. Every result is
// reduced into [0, m). The two moduli in this crate (the field prime 𝑃 and
// the group order 𝑁) never share a call site.

use dashu::integer::{fast_div::ConstDivisor, UBig};

pub(crate) fn add(a: &UBig, b: &UBig, m: &UBig) -> UBig {
    (a + b) % m
}

/// Requires `b < m`; `a` may be unreduced.
pub(crate) fn sub(a: &UBig, b: &UBig, m: &UBig) -> UBig {
    ((a + m) - b) % m
}

pub(crate) fn neg(a: &UBig, m: &UBig) -> UBig {
    (m - a % m) % m
}

pub(crate) fn mul(a: &UBig, b: &UBig, m: &UBig) -> UBig {
    (a * b) % m
}

pub(crate) fn pow(base: &UBig, exp: &UBig, m: &UBig) -> UBig {
    let ring = ConstDivisor::new(m.clone());
    ring.reduce(base.clone()).pow(exp).residue()
}

/// Modular inverse via Fermat's little theorem. Defined only for a prime
/// modulus and `a` nonzero mod `m`; both are guaranteed by the callers.
pub(crate) fn inv(a: &UBig, m: &UBig) -> UBig {
    pow(a, &(m - UBig::from_word(2)), m)
}

/// Square root in 𝔽ₚ for `p ≡ 3 (mod 4)`, as `a^((p+1)/4)`. The result is
/// a root only when `a` is a quadratic residue; callers must re-square and
/// compare.
pub(crate) fn sqrt(a: &UBig, p: &UBig) -> UBig {
    pow(a, &((p + UBig::from_word(1)) / UBig::from_word(4)), p)
}
