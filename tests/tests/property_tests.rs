// Property-based tests for the pairing groups and encodings

use bnpair::algorithms::ec::bn256::{Fp, Fp2};
use bnpair::prelude::*;
use bnpair_tests::strip_leading_zeros;
use proptest::prelude::*;

fn fp_from(limbs: [u8; 32]) -> Fp {
    // Clear the top bits so the value is always below p
    let mut bytes = limbs;
    bytes[0] &= 0x7f;
    Option::from(Fp::from_bytes(&bytes)).unwrap_or_else(Fp::zero)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_fp_field_laws(a in any::<[u8; 32]>(), b in any::<[u8; 32]>(), c in any::<[u8; 32]>()) {
        let (a, b, c) = (fp_from(a), fp_from(b), fp_from(c));

        prop_assert_eq!(a + b, b + a);
        prop_assert_eq!(a * b, b * a);
        prop_assert_eq!((a + b) * c, a * c + b * c);
        prop_assert_eq!(a - a, Fp::zero());
        prop_assert_eq!(Fp::from_bytes(&a.to_bytes()).unwrap(), a);
    }

    #[test]
    fn prop_fp2_inverse(a in any::<[u8; 32]>(), b in any::<[u8; 32]>()) {
        let x = Fp2 { c0: fp_from(a), c1: fp_from(b) };
        prop_assume!(!bool::from(x.is_zero()));

        let inv = Option::<Fp2>::from(x.invert()).unwrap();
        prop_assert_eq!(x * inv, Fp2::one());
    }

    #[test]
    fn prop_message_round_trip(msg in proptest::collection::vec(any::<u8>(), 0..382)) {
        let gt = map_message_to_gt(&msg).unwrap();
        prop_assert_eq!(map_gt_to_message(&gt), strip_leading_zeros(&msg).to_vec());
    }

    #[test]
    fn prop_unmarshal_never_panics(bytes in proptest::collection::vec(any::<u8>(), 0..400)) {
        let _ = G1::unmarshal(&bytes);
        let _ = G2::unmarshal(&bytes);
        let _ = Gt::unmarshal(&bytes);
        let _ = G1::from_bytes(&bytes);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn prop_g1_homomorphism(a in 1u64.., b in 1u64..) {
        let (a, b) = (BigUint::from(a), BigUint::from(b));
        let lhs = G1::scalar_base_mult(&a) + G1::scalar_base_mult(&b);
        prop_assert_eq!(lhs, G1::scalar_base_mult(&(&a + &b)));
    }

    #[test]
    fn prop_g1_encoding_round_trip(k in any::<u64>()) {
        let p = G1::scalar_base_mult(&BigUint::from(k));
        let bytes = p.marshal();
        let (decoded, rest) = G1::unmarshal(&bytes).unwrap();
        prop_assert_eq!(decoded, p);
        prop_assert!(rest.is_empty());
    }

    #[test]
    fn prop_g2_encoding_round_trip(k in any::<u64>()) {
        let q = G2::scalar_base_mult(&BigUint::from(k));
        prop_assert_eq!(G2::from_bytes(&q.to_bytes()).unwrap(), q);
    }

    #[test]
    fn prop_hash_to_g1_on_curve(msg in proptest::collection::vec(any::<u8>(), 0..64)) {
        let p = G1::hash(&msg).unwrap();
        prop_assert!(p.to_projective().is_on_curve());
        prop_assert!(!p.is_identity());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(4))]

    #[test]
    fn prop_pairing_bilinear(a in 1u64.., b in 1u64..) {
        let (a, b) = (BigUint::from(a), BigUint::from(b));
        let lhs = pair(&G1::scalar_base_mult(&a), &G2::scalar_base_mult(&b));
        prop_assert_eq!(lhs, Gt::generator().scalar_mult(&(&a * &b)));
    }
}
