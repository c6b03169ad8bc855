use crate::{Curve, JacobianPoint, UncompressedPoint};

/// 16-entry table of 𝑎·𝐺 + 𝑏·𝑃 for 𝑎, 𝑏 ∈ {0..3}, indexed by (𝑎 ≪ 2) | 𝑏.
/// Rebuilt locally for every operation (2 doublings, 14 additions); never
/// cached across calls.
pub(crate) struct LookupTable([JacobianPoint; 16]);

impl From<&UncompressedPoint> for LookupTable {
    fn from(point: &UncompressedPoint) -> Self {
        let t1 = JacobianPoint::from_affine(point);
        let t4 = JacobianPoint::from_affine(&Curve::G);
        let t2 = t1.double();
        let t8 = t4.double();
        let t3 = t1.add(&t2);
        let t5 = t1.add(&t4);
        let t6 = t2.add(&t4);
        let t7 = t3.add(&t4);
        let t9 = t1.add(&t8);
        let t10 = t2.add(&t8);
        let t11 = t3.add(&t8);
        let t12 = t4.add(&t8);
        let t13 = t1.add(&t12);
        let t14 = t2.add(&t12);
        let t15 = t3.add(&t12);
        LookupTable([
            JacobianPoint::identity(),
            t1,
            t2,
            t3,
            t4,
            t5,
            t6,
            t7,
            t8,
            t9,
            t10,
            t11,
            t12,
            t13,
            t14,
            t15,
        ])
    }
}

impl LookupTable {
    /// ### Strauss–Shamir multiplication
    ///
    /// Computes u1·𝐺 + u2·𝑃 by consuming two bits of each scalar per
    /// iteration, 128 iterations from the most significant window down.
    /// Each window costs two doublings (skipped while the accumulator is
    /// still the identity) and at most one table addition.
    pub(crate) fn mul_shamir(&self, u1: &[u8; 32], u2: &[u8; 32]) -> UncompressedPoint {
        let mut acc = JacobianPoint::identity();
        for byte in 0..32 {
            for shift in [6u32, 4, 2, 0] {
                if !acc.is_identity() {
                    acc = acc.double().double();
                }
                let index = (((u1[byte] >> shift) & 3) << 2 | ((u2[byte] >> shift) & 3)) as usize;
                if index != 0 {
                    acc = acc.add(&self.0[index]);
                }
            }
        }
        acc.to_affine()
    }
}

/// ### Mul 𝐺
///
/// Computes 𝒌·𝐺 by MSB-first double-and-add against the fixed generator.
/// The shared table is not used here: a table built from 𝑃 = 𝐺 would hold
/// equal corner sums, which the addition formula excludes.
pub(crate) fn mul_g(k: &[u8; 32]) -> UncompressedPoint {
    let g = JacobianPoint::from_affine(&Curve::G);
    let mut acc = JacobianPoint::identity();
    for byte in k {
        for shift in (0u32..8).rev() {
            acc = acc.double();
            if (byte >> shift) & 1 == 1 {
                acc = acc.add(&g);
            }
        }
    }
    acc.to_affine()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scalar(k: u8) -> [u8; 32] {
        let mut bytes = [0u8; 32];
        bytes[31] = k;
        bytes
    }

    // k·P for k in 0..=3 without touching the table machinery.
    fn small_mul(point: &UncompressedPoint, k: u8) -> JacobianPoint {
        let p = JacobianPoint::from_affine(point);
        match k {
            0 => JacobianPoint::identity(),
            1 => p,
            2 => p.double(),
            3 => p.double().add(&p),
            _ => unreachable!(),
        }
    }

    #[test]
    fn table_matches_naive_combinations() {
        // 5·G shares no small multiple with G, so every table sum has
        // distinct addends.
        let base = mul_g(&scalar(5));
        let table = LookupTable::from(&base);
        for a in 0u8..4 {
            for b in 0u8..4 {
                let index = ((a << 2) | b) as usize;
                let expected = small_mul(&Curve::G, a).add(&small_mul(&base, b));
                assert_eq!(
                    table.0[index].to_affine(),
                    expected.to_affine(),
                    "table entry {index}"
                );
            }
        }
    }

    #[test]
    fn table_corners() {
        let base = mul_g(&scalar(5));
        let table = LookupTable::from(&base);
        assert!(table.0[0].is_identity());
        assert_eq!(table.0[1].to_affine(), base);
        assert_eq!(table.0[4].to_affine(), Curve::G);
    }

    #[test]
    fn mul_g_small_scalars() {
        assert!(mul_g(&scalar(0)).is_identity());
        assert_eq!(mul_g(&scalar(1)), Curve::G);
        assert_eq!(
            mul_g(&scalar(2)),
            JacobianPoint::from_affine(&Curve::G).double().to_affine()
        );
        assert!(mul_g(&scalar(3)).is_on_curve());
    }

    #[test]
    fn shamir_matches_the_generator_ladder() {
        let base = mul_g(&scalar(5));
        let table = LookupTable::from(&base);

        // u1·G + u2·(5G) = (u1 + 5·u2)·G
        assert_eq!(table.mul_shamir(&scalar(1), &scalar(0)), Curve::G);
        assert_eq!(table.mul_shamir(&scalar(0), &scalar(1)), base);
        assert_eq!(table.mul_shamir(&scalar(0), &scalar(7)), mul_g(&scalar(35)));
        assert_eq!(table.mul_shamir(&scalar(11), &scalar(7)), mul_g(&scalar(46)));
        assert_eq!(
            table.mul_shamir(&scalar(41), &scalar(39)),
            mul_g(&scalar(41 + 5 * 39))
        );
    }

    #[test]
    fn shamir_of_zero_scalars_is_the_sentinel() {
        let base = mul_g(&scalar(5));
        let table = LookupTable::from(&base);
        assert!(table.mul_shamir(&scalar(0), &scalar(0)).is_identity());
    }

    #[test]
    fn shamir_with_wide_scalars() {
        let base = mul_g(&scalar(5));
        let table = LookupTable::from(&base);

        // 2^255 + 2^254 + ... spread bits across every window position.
        let mut u1 = [0u8; 32];
        u1[0] = 0xc3;
        u1[15] = 0x5a;
        u1[31] = 0x01;
        let direct = table.mul_shamir(&u1, &scalar(0));
        assert_eq!(direct, mul_g(&u1));
        assert!(direct.is_on_curve());
    }
}
