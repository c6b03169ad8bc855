use p256::ecdsa::{signature::hazmat::PrehashSigner, Signature, SigningKey, VerifyingKey};
use secp256r1::{Curve, Ecdsa, UncompressedPoint};

fn h32(s: &str) -> [u8; 32] {
    hex::decode(s).unwrap().try_into().unwrap()
}

const SECRET_KEYS: [&str; 3] = [
    "0000000000000000000000000000000000000000000000000000000000000002",
    "c9afa9d845ba75166b5c215767b1d6934e50c3db36e89b127b8a622b120f6721",
    "3a1f5c77b2d4e691806fa3b24f78c4e2d09b815a7e3f2c4d5e6f708192a3b4c5",
];

const DIGESTS: [&str; 3] = [
    "af2bdbe1aa9b6ec1e2ade1d694f41fc71a831d0268e9891562113d8a62add1bf",
    "1111111111111111111111111111111111111111111111111111111111111111",
    "deadbeefdeadbeefdeadbeefdeadbeefdeadbeefdeadbeefdeadbeefdeadbeef",
];

// Signs with the RustCrypto P-256 stack, the independent reference this
// implementation is checked against.
fn reference_signature(
    d: &[u8; 32],
    digest: &[u8; 32],
) -> ([u8; 32], [u8; 32], UncompressedPoint) {
    let signing_key = SigningKey::from_bytes(&(*d).into()).unwrap();
    let signature: Signature = signing_key.sign_prehash(digest).unwrap();
    let (r, s) = signature.split_bytes();

    let encoded = VerifyingKey::from(&signing_key).to_encoded_point(false);
    let public_key = UncompressedPoint::from_coordinates(
        encoded.x().unwrap().as_slice().try_into().unwrap(),
        encoded.y().unwrap().as_slice().try_into().unwrap(),
    );
    (
        r.as_slice().try_into().unwrap(),
        s.as_slice().try_into().unwrap(),
        public_key,
    )
}

#[test]
fn key_derivation_matches_the_reference_implementation() {
    for d_hex in SECRET_KEYS {
        let d = h32(d_hex);
        let q = Ecdsa::derive_public_key(&d).unwrap();
        assert!(q.is_on_curve());

        let encoded = VerifyingKey::from(&SigningKey::from_bytes(&d.into()).unwrap())
            .to_encoded_point(false);
        assert_eq!(&q.x()[..], encoded.x().unwrap().as_slice());
        assert_eq!(&q.y()[..], encoded.y().unwrap().as_slice());
    }
}

#[test]
fn scalar_one_yields_the_generator() {
    let mut one = [0u8; 32];
    one[31] = 1;
    let q = Ecdsa::derive_public_key(&one).unwrap();
    assert_eq!(q, Curve::G);
    assert_eq!(
        q.x(),
        h32("6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296")
    );
    assert_eq!(
        q.y(),
        h32("4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5")
    );
}

#[test]
fn scalar_n_minus_one_yields_the_negated_generator() {
    let d = h32("ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632550");
    let q = Ecdsa::derive_public_key(&d).unwrap();

    let mut negated = Curve::G;
    negated.invert();
    assert_eq!(q, negated);
    assert_eq!(q.x(), Curve::G.x());
}

#[test]
fn verify_accepts_reference_signatures() {
    for d_hex in SECRET_KEYS {
        for e_hex in DIGESTS {
            let d = h32(d_hex);
            let e = h32(e_hex);
            let (r, s, q) = reference_signature(&d, &e);
            assert!(Ecdsa::verify(&q, &r, &s, &e), "key {d_hex} digest {e_hex}");
        }
    }
}

#[test]
fn verify_rejects_tampering() {
    let d = h32(SECRET_KEYS[1]);
    let e = h32(DIGESTS[0]);
    let (r, s, q) = reference_signature(&d, &e);

    // Wrong digest.
    assert!(!Ecdsa::verify(&q, &r, &s, &h32(DIGESTS[1])));
    // Swapped signature halves.
    assert!(!Ecdsa::verify(&q, &s, &r, &e));
    // Swapped public key coordinates.
    let flipped = UncompressedPoint::from_coordinates(&q.y(), &q.x());
    assert!(!Ecdsa::verify(&flipped, &r, &s, &e));
    // Signature from a different key.
    let (r2, s2, _) = reference_signature(&h32(SECRET_KEYS[2]), &e);
    assert!(!Ecdsa::verify(&q, &r2, &s2, &e));
}

#[test]
fn recovery_finds_the_signing_key() {
    for d_hex in SECRET_KEYS {
        for e_hex in DIGESTS {
            let d = h32(d_hex);
            let e = h32(e_hex);
            let (r, s, q) = reference_signature(&d, &e);

            let candidates = [
                Ecdsa::recover(&r, &s, 0, &e),
                Ecdsa::recover(&r, &s, 1, &e),
            ];
            assert!(
                candidates.contains(&q),
                "neither recovery id produced the key for {d_hex}/{e_hex}"
            );
        }
    }
}

#[test]
fn recovered_addresses_match_derived_addresses() {
    let d = h32(SECRET_KEYS[2]);
    let e = h32(DIGESTS[2]);
    let (r, s, q) = reference_signature(&d, &e);

    let expected = Ecdsa::derive_address(&q);
    let recovered = [
        Ecdsa::recover_address(&r, &s, 0, &e),
        Ecdsa::recover_address(&r, &s, 1, &e),
    ];
    assert!(recovered.contains(&expected));

    // The two recovery ids yield different keys, hence different addresses.
    assert_ne!(recovered[0], recovered[1]);
}

// RFC 6979 A.2.5, P-256 with SHA-256, message "sample". The reference
// signer is deterministic, so it must reproduce the published vector
// exactly.
#[test]
fn rfc6979_sample_known_answer() {
    let d = h32("c9afa9d845ba75166b5c215767b1d6934e50c3db36e89b127b8a622b120f6721");
    let e = h32("af2bdbe1aa9b6ec1e2ade1d694f41fc71a831d0268e9891562113d8a62add1bf");
    let r = h32("efd48b2aacb6a8fd1140dd9cd45e81d69d2c877b56aaf991c34d0ea84eaf3716");
    let s = h32("f7cb1c942d657c41d436c7a1b6e29f65f3e900dbb9aff4064dc4ab2f843acda8");

    let (ref_r, ref_s, q) = reference_signature(&d, &e);
    assert_eq!(ref_r, r);
    assert_eq!(ref_s, s);
    assert_eq!(
        q.x(),
        h32("60fed4ba255a9d31c961eb74c6356d68c049b8923b61fa6ce669622e60f29fb6")
    );
    assert_eq!(
        q.y(),
        h32("7903fe1008b8bc99a41ae9e95628bc64f2f1b20c2d7e9f5177a3c294d4462299")
    );

    assert!(Ecdsa::verify(&q, &r, &s, &e));
    let recovered = [
        Ecdsa::recover(&r, &s, 0, &e),
        Ecdsa::recover(&r, &s, 1, &e),
    ];
    assert!(recovered.contains(&q));
}

#[test]
fn off_curve_key_fails_regardless_of_signature() {
    let e = h32(DIGESTS[0]);
    let (r, s, _) = reference_signature(&h32(SECRET_KEYS[0]), &e);

    let mut x = Curve::G.x();
    x[0] = 0x3b;
    let q = UncompressedPoint::from_coordinates(&x, &Curve::G.y());
    assert!(!q.is_on_curve());
    assert!(!Ecdsa::verify(&q, &r, &s, &e));
}
