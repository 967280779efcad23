//! Fixed parameters of the BN256 curve instance and its pairing.
//!
//! Every field constant below is stored in Montgomery form.

use num_bigint::BigUint;

use super::field::{Fp, Fp2};

/// Size of a serialized base field element in bytes
pub const BN256_FP_SIZE: usize = 32;

/// Size of a serialized scalar in bytes
pub const BN256_SCALAR_SIZE: usize = 32;

/// Size of a marshalled G1 element: affine X ‖ Y
pub const BN256_G1_SIZE: usize = 2 * BN256_FP_SIZE;

/// Size of a marshalled finite G2 element: tag ‖ X.c1 ‖ X.c0 ‖ Y.c1 ‖ Y.c0
pub const BN256_G2_SIZE: usize = 1 + 4 * BN256_FP_SIZE;

/// Size of a marshalled GT element: twelve base field values
pub const BN256_GT_SIZE: usize = 12 * BN256_FP_SIZE;

/// Upper bound on candidates tried by the hash-to-curve searches.
///
/// Each candidate succeeds with probability close to 1/2, so exhausting the
/// bound happens with probability about 2^-256.
pub const MAX_HASH_ATTEMPTS: usize = 256;

/// Curve seed u
pub const BN_U: u64 = 0x5a76_ae9a_ec58_8301;

/// Little-endian limbs of the prime group order n
pub(crate) const ORDER: [u64; 4] = [
    0x1a2e_f45b_57ac_7261,
    0x2e8d_8e12_f82b_3924,
    0xaa6f_ecb8_6184_dc21,
    0x8fb5_01e3_4aa3_87f9,
];

/// Non-adjacent form of 6u + 2, least significant digit first
pub(crate) const SIX_U_PLUS_2_NAF: [i8; 66] = [
    0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, -1, 0, 1, 0, 1, 0, 0, 0, 0, 1, 0, 1,
    0, 0, 0, -1, 0, 1, 0, 0, 0, 1, 0, -1, 0, 0, 0, -1, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, -1,
    0, -1, 0, 0, 0, 0, 1, 0, 0, 0, 1,
];

// ============================================================================
// Frobenius Coefficients
// ============================================================================

/// ξ^((p−1)/6)
pub(crate) const XI_TO_P_MINUS_1_OVER_6: Fp2 = Fp2 {
    c0: Fp::from_raw_unchecked([
        0x7407_634d_d9cc_a958,
        0x36d5_bd6c_7afb_8f26,
        0xf4b1_c32c_ebd8_80fa,
        0x06aa_7869_306f_455f,
    ]),
    c1: Fp::from_raw_unchecked([
        0x25af_5298_8477_cdb7,
        0x3d81_a455_ddce_d86a,
        0x227d_012e_872c_2431,
        0x0179_198d_3ea6_5d05,
    ]),
};

/// ξ^((p−1)/3)
pub(crate) const XI_TO_P_MINUS_1_OVER_3: Fp2 = Fp2 {
    c0: Fp::from_raw_unchecked([
        0xf860_6916_d381_6f2c,
        0x1e5c_0d79_26de_927e,
        0xbc45_f394_6d81_185e,
        0x8075_2a25_aa73_8091,
    ]),
    c1: Fp::from_raw_unchecked([
        0x4f59_e37c_0183_2e57,
        0xae6b_e39a_c2bb_bfe4,
        0xe04e_a1bb_6975_12f8,
        0x3097_caa8_fc40_e10e,
    ]),
};

/// ξ^((p−1)/2)
pub(crate) const XI_TO_P_MINUS_1_OVER_2: Fp2 = Fp2 {
    c0: Fp::from_raw_unchecked([
        0x18db_ee03_fb77_08fa,
        0x1e76_01a6_02c8_43c7,
        0x5dde_0688_cdb2_31cb,
        0x86db_5cf2_c605_a524,
    ]),
    c1: Fp::from_raw_unchecked([
        0x19da_7133_3653_ee20,
        0x7eaa_f34f_c6ed_6019,
        0xc4ba_3a29_a60c_dd1d,
        0x7528_1311_bcc9_df79,
    ]),
};

/// ξ^((2p−2)/3)
pub(crate) const XI_TO_2P_MINUS_2_OVER_3: Fp2 = Fp2 {
    c0: Fp::from_raw_unchecked([
        0x4d2e_a218_872f_3d2c,
        0x2fcb_27fc_4abe_7b69,
        0xd31d_972f_0e88_ced9,
        0x53ad_c04a_00a7_3b15,
    ]),
    c1: Fp::from_raw_unchecked([
        0x5167_8e74_69b3_c52a,
        0x4fb9_8f8b_1331_9fc9,
        0x29b2_254d_b3f1_df75,
        0x1c04_4935_a3d2_2fb2,
    ]),
};

/// ξ^((p²−1)/3), which lies in Fp
pub(crate) const XI_TO_P_SQUARED_MINUS_1_OVER_3: Fp = Fp::from_raw_unchecked([
    0x12d3_cef5_e1ad_a57d,
    0xe2ec_a146_3753_babb,
    0x0ca4_1e40_ddcc_f750,
    0x5513_3706_0397_e04c,
]);

/// ξ^((2p²−2)/3), which lies in Fp
pub(crate) const XI_TO_2P_SQUARED_MINUS_2_OVER_3: Fp = Fp::from_raw_unchecked([
    0x3642_364f_386c_1db8,
    0xe825_f92d_2acd_661f,
    0xf2ab_a7e8_46c1_9d14,
    0x5a0b_cea3_dc52_b7a0,
]);

/// ξ^((p²−1)/6), which lies in Fp
pub(crate) const XI_TO_P_SQUARED_MINUS_1_OVER_6: Fp = Fp::from_raw_unchecked([
    0xe21a_761d_259c_78af,
    0x0635_8fa3_f5e8_4f7e,
    0xb7c4_44d0_1ac3_3f0d,
    0x35a9_333f_6e50_d058,
]);

// ============================================================================
// Arbitrary-Precision Views
// ============================================================================

fn limbs_to_biguint(limbs: &[u64; 4]) -> BigUint {
    let mut bytes = [0u8; 32];
    for (chunk, limb) in bytes.chunks_exact_mut(8).zip(limbs.iter()) {
        chunk.copy_from_slice(&limb.to_le_bytes());
    }
    BigUint::from_bytes_le(&bytes)
}

/// The prime group order n as an arbitrary-precision integer
pub fn order() -> BigUint {
    limbs_to_biguint(&ORDER)
}

/// The base field modulus p as an arbitrary-precision integer
pub fn modulus() -> BigUint {
    limbs_to_biguint(&super::field::fp::MODULUS)
}
