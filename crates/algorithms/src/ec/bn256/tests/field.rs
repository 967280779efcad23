//! Field element tests for BN256

use super::super::field::fp::{Fp, MODULUS};
use super::super::field::{Fp12, Fp2, Fp6};

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

fn rng() -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(0x6e32_3536)
}

// ============================================================================
// Fp Field Tests
// ============================================================================

#[test]
fn test_fp_conditional_selection() {
    let a = Fp::from_u64(5);
    let b = Fp::from_u64(7);

    assert_eq!(
        ConditionallySelectable::conditional_select(&a, &b, Choice::from(0u8)),
        a
    );
    assert_eq!(
        ConditionallySelectable::conditional_select(&a, &b, Choice::from(1u8)),
        b
    );
}

#[test]
fn test_fp_equality() {
    let a = Fp::from_u64(42);
    assert!(bool::from(a.ct_eq(&Fp::from_u64(42))));
    assert!(!bool::from(a.ct_eq(&Fp::from_u64(43))));
    assert_eq!(a, Fp::from_u64(42));
}

#[test]
fn test_fp_small_arithmetic() {
    let two = Fp::from_u64(2);
    let three = Fp::from_u64(3);

    assert_eq!(two + three, Fp::from_u64(5));
    assert_eq!(three - two, Fp::one());
    assert_eq!(two * three, Fp::from_u64(6));
    assert_eq!(three.square(), Fp::from_u64(9));
    assert_eq!(two.double(), Fp::from_u64(4));
    assert_eq!(Fp::from_u64(6).halve(), three);
    assert_eq!(two - three, -Fp::one());
    assert_eq!(-Fp::zero(), Fp::zero());
}

#[test]
fn test_fp_wraparound_near_modulus() {
    // p − 1 is the largest residue; adding one wraps to zero
    let minus_one = -Fp::one();
    assert_eq!(minus_one + Fp::one(), Fp::zero());
    assert_eq!(minus_one.double(), -Fp::from_u64(2));
    assert_eq!(minus_one * minus_one, Fp::one());
}

#[test]
fn test_fp_inverse_law() {
    let mut rng = rng();
    for _ in 0..20 {
        let a = Fp::random(&mut rng);
        if bool::from(a.is_zero()) {
            continue;
        }
        let inv = a.invert().unwrap();
        assert_eq!(a * inv, Fp::one());
    }

    assert!(bool::from(Fp::zero().invert().is_none()));
}

#[test]
fn test_fp_sqrt() {
    let mut rng = rng();
    for _ in 0..20 {
        let a = Fp::random(&mut rng);
        let sq = a.square();
        let root = sq.sqrt().unwrap();
        assert!(root == a || root == -a);
    }

    // p ≡ 3 (mod 4), so −1 is a non-residue
    assert!(bool::from((-Fp::one()).sqrt().is_none()));
}

#[test]
fn test_fp_bytes() {
    let mut rng = rng();
    for _ in 0..10 {
        let a = Fp::random(&mut rng);
        assert_eq!(Fp::from_bytes(&a.to_bytes()).unwrap(), a);
    }

    let mut one = [0u8; 32];
    one[31] = 1;
    assert_eq!(Fp::one().to_bytes(), one);
    assert_eq!(Fp::from_bytes(&one).unwrap(), Fp::one());
}

#[test]
fn test_fp_from_bytes_rejects_non_canonical() {
    let mut modulus = [0u8; 32];
    for (i, limb) in MODULUS.iter().rev().enumerate() {
        modulus[i * 8..(i + 1) * 8].copy_from_slice(&limb.to_be_bytes());
    }
    assert!(bool::from(Fp::from_bytes(&modulus).is_none()));
    assert!(bool::from(Fp::from_bytes(&[0xff; 32]).is_none()));

    // p − 1 is accepted
    modulus[31] -= 1;
    assert_eq!(Fp::from_bytes(&modulus).unwrap(), -Fp::one());
}

#[test]
fn test_fp_pow_vartime() {
    let three = Fp::from_u64(3);
    assert_eq!(three.pow_vartime(&[0]), Fp::one());
    assert_eq!(three.pow_vartime(&[5]), Fp::from_u64(243));
    assert_eq!(three.pow_vartime(&[]), Fp::one());
}

// ============================================================================
// Fp2 Field Tests
// ============================================================================

#[test]
fn test_fp2_mul_by_xi() {
    let mut rng = rng();
    let xi = Fp2 {
        c0: Fp::from_u64(3),
        c1: Fp::one(),
    };
    for _ in 0..5 {
        let a = Fp2::random(&mut rng);
        assert_eq!(a.mul_by_xi(), a * xi);
    }
}

#[test]
fn test_fp2_i_squared() {
    let i = Fp2 {
        c0: Fp::zero(),
        c1: Fp::one(),
    };
    assert_eq!(i.square(), -Fp2::one());
}

#[test]
fn test_fp2_squaring_matches_mul() {
    let mut rng = rng();
    for _ in 0..10 {
        let a = Fp2::random(&mut rng);
        assert_eq!(a.square(), a * a);
    }
}

#[test]
fn test_fp2_inverse_law() {
    let mut rng = rng();
    for _ in 0..10 {
        let a = Fp2::random(&mut rng);
        assert_eq!(a * a.invert().unwrap(), Fp2::one());
    }

    assert!(bool::from(Fp2::zero().invert().is_none()));
}

#[test]
fn test_fp2_conjugate_is_frobenius() {
    let mut rng = rng();
    let a = Fp2::random(&mut rng);
    assert_eq!(a.conjugate(), a.pow_vartime(&MODULUS));
}

#[test]
fn test_fp2_sqrt() {
    let mut rng = rng();
    for _ in 0..10 {
        let a = Fp2::random(&mut rng);
        let sq = a.square();
        let root = sq.sqrt().unwrap();
        assert_eq!(root.square(), sq);
    }
}

#[test]
fn test_fp2_sqrt_edge_cases() {
    assert_eq!(Fp2::zero().sqrt().unwrap(), Fp2::zero());

    // −1 is not a square in Fp but is i² in Fp2
    let minus_one = -Fp2::one();
    assert_eq!(minus_one.sqrt().unwrap().square(), minus_one);

    // Any square a² with a ∈ Fp
    let nine = Fp2 {
        c0: Fp::from_u64(9),
        c1: Fp::zero(),
    };
    assert_eq!(nine.sqrt().unwrap().square(), nine);
}

#[test]
fn test_fp2_sqrt_non_residue() {
    let mut rng = rng();
    let xi = Fp2 {
        c0: Fp::from_u64(3),
        c1: Fp::one(),
    };
    // ξ is a non-residue in Fp2; so is ξ times any nonzero square
    let a = Fp2::random(&mut rng);
    let candidate = xi * a.square();
    assert!(bool::from(candidate.sqrt().is_none()));
}

// ============================================================================
// Fp6 Field Tests
// ============================================================================

#[test]
fn test_fp6_mul_by_tau() {
    let mut rng = rng();
    let tau = Fp6 {
        c0: Fp2::zero(),
        c1: Fp2::one(),
        c2: Fp2::zero(),
    };
    for _ in 0..5 {
        let a = Fp6::random(&mut rng);
        assert_eq!(a.mul_by_tau(), a * tau);
    }
}

#[test]
fn test_fp6_squaring_matches_mul() {
    let mut rng = rng();
    for _ in 0..5 {
        let a = Fp6::random(&mut rng);
        assert_eq!(a.square(), a * a);
    }
}

#[test]
fn test_fp6_inverse_law() {
    let mut rng = rng();
    for _ in 0..5 {
        let a = Fp6::random(&mut rng);
        assert_eq!(a * a.invert().unwrap(), Fp6::one());
    }

    assert!(bool::from(Fp6::zero().invert().is_none()));
}

#[test]
fn test_fp6_mul_by_scalars() {
    let mut rng = rng();
    let a = Fp6::random(&mut rng);
    let b = Fp2::random(&mut rng);
    let c = Fp::random(&mut rng);

    let b6 = Fp6 {
        c0: b,
        c1: Fp2::zero(),
        c2: Fp2::zero(),
    };
    let c6 = Fp6 {
        c0: Fp2 { c0: c, c1: Fp::zero() },
        c1: Fp2::zero(),
        c2: Fp2::zero(),
    };
    assert_eq!(a.mul_by_fp2(&b), a * b6);
    assert_eq!(a.mul_by_fp(&c), a * c6);
}

#[test]
fn test_fp6_frobenius() {
    let mut rng = rng();
    let a = Fp6::random(&mut rng);

    assert_eq!(a.frobenius().frobenius(), a.frobenius_p2());
    assert_eq!(a.frobenius_p2().frobenius_p2(), a.frobenius_p4());

    let mut b = a;
    for _ in 0..6 {
        b = b.frobenius();
    }
    assert_eq!(b, a);
}

// ============================================================================
// Fp12 Field Tests
// ============================================================================

#[test]
fn test_fp12_squaring_matches_mul() {
    let mut rng = rng();
    for _ in 0..5 {
        let a = Fp12::random(&mut rng);
        assert_eq!(a.square(), a * a);
    }
}

#[test]
fn test_fp12_inverse_law() {
    let mut rng = rng();
    for _ in 0..5 {
        let a = Fp12::random(&mut rng);
        assert_eq!(a * a.invert().unwrap(), Fp12::one());
    }

    assert!(bool::from(Fp12::zero().invert().is_none()));
}

#[test]
fn test_fp12_frobenius_is_p_power() {
    let mut rng = rng();
    let a = Fp12::random(&mut rng);

    let ap = a.pow_vartime(&MODULUS);
    assert_eq!(a.frobenius(), ap);
    assert_eq!(a.frobenius_p2(), ap.pow_vartime(&MODULUS));
    assert_eq!(a.frobenius_p2().frobenius_p2(), a.frobenius_p4());
}

#[test]
fn test_fp12_conjugate() {
    let mut rng = rng();
    let a = Fp12::random(&mut rng);

    // a · conj(a) lies in Fp6
    let n = a * a.conjugate();
    assert!(bool::from(n.c1.is_zero()));
    assert_eq!(a.conjugate().conjugate(), a);
}

#[test]
fn test_fp12_pow_vartime() {
    let mut rng = rng();
    let a = Fp12::random(&mut rng);

    assert_eq!(a.pow_vartime(&[0]), Fp12::one());
    assert_eq!(a.pow_vartime(&[1]), a);
    assert_eq!(a.pow_vartime(&[3]), a * a * a);
    // 2^64 spans two limbs
    let mut b = a;
    for _ in 0..64 {
        b = b.square();
    }
    assert_eq!(a.pow_vartime(&[0, 1]), b);
}

#[test]
fn test_field_defaults_are_zero() {
    assert_eq!(Fp::default(), Fp::zero());
    assert_eq!(Fp2::default(), Fp2::zero());
    assert_eq!(Fp6::default(), Fp6::zero());
    assert_eq!(Fp12::default(), Fp12::zero());
}
