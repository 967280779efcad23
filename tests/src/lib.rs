//! Shared helpers for the bnpair integration and property tests

use bnpair::prelude::*;
use rand::{CryptoRng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Deterministic RNG so failures reproduce across runs
pub fn seeded_rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

/// Lowercase hex of an encoding, for comparing against fixed vectors
pub fn to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Parses a fixed hex vector, ignoring whitespace
pub fn from_hex(s: &str) -> core::result::Result<Vec<u8>, hex::FromHexError> {
    let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();
    hex::decode(compact)
}

/// Strips leading zero bytes, which the GT message mapping does not preserve
pub fn strip_leading_zeros(bytes: &[u8]) -> &[u8] {
    let start = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
    &bytes[start..]
}

/// One participant of a one-round tripartite key agreement.
///
/// Each party publishes its secret times both generators; any two other
/// parties' public values are enough to derive the common key
/// e(G1, G2)^(abc).
pub struct Party {
    secret: BigUint,
    /// Public share in G1
    pub g1: G1,
    /// Public share in G2
    pub g2: G2,
}

impl Party {
    /// Sample a fresh secret and its public shares
    pub fn new<R: CryptoRng + RngCore>(rng: &mut R) -> Self {
        let (secret, g1) = G1::random(rng);
        let g2 = G2::scalar_base_mult(&secret);
        Self { secret, g1, g2 }
    }

    /// Derive the shared key from the other two parties' shares
    pub fn shared_key(&self, first: &G1, second: &G2) -> Gt {
        pair(first, second).scalar_mult(&self.secret)
    }
}

/// Short signatures over G1 with public keys in G2
pub mod signature {
    use super::*;

    /// Secret scalar and public key x·G2
    pub fn keygen<R: CryptoRng + RngCore>(rng: &mut R) -> (BigUint, G2) {
        G2::random(rng)
    }

    /// x·H(msg)
    pub fn sign(secret: &BigUint, msg: &[u8]) -> Result<G1> {
        Ok(G1::hash(msg)?.scalar_mult(secret))
    }

    /// Checks e(sig, G2) == e(H(msg), pk)
    pub fn verify(public: &G2, msg: &[u8], sig: &G1) -> Result<bool> {
        let h = G1::hash(msg)?;
        Ok(pair(sig, &G2::generator()) == pair(&h, public))
    }
}

/// ElGamal encryption of messages embedded in GT
pub mod elgamal {
    use super::*;

    /// Ciphertext (M·e(G1, G2)^(xs), s·G1)
    pub struct Ciphertext {
        /// Masked message
        pub c0: Gt,
        /// Randomness commitment
        pub c1: G1,
    }

    impl Ciphertext {
        /// GT encoding followed by the G1 encoding
        pub fn to_bytes(&self) -> Vec<u8> {
            let mut out = self.c0.marshal();
            out.extend_from_slice(&self.c1.marshal());
            out
        }

        /// Parse a ciphertext, rejecting trailing data
        pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
            let (c0, rest) = Gt::unmarshal(bytes).with_context("ciphertext mask")?;
            let c1 = G1::from_bytes(rest)?;
            Ok(Self { c0, c1 })
        }
    }

    /// Secret key x·G2 with public key e(G1, G2)^x
    pub fn keygen<R: CryptoRng + RngCore>(rng: &mut R) -> (G2, Gt) {
        let (x, sk) = G2::random(rng);
        (sk, Gt::scalar_base_mult(&x))
    }

    /// Encrypt a message that fits below p^12
    pub fn encrypt<R: CryptoRng + RngCore>(
        rng: &mut R,
        public: &Gt,
        msg: &[u8],
    ) -> Result<Ciphertext> {
        let m = map_message_to_gt(msg)?;
        let (s, c1) = G1::random(rng);
        Ok(Ciphertext {
            c0: m + public.scalar_mult(&s),
            c1,
        })
    }

    /// Recover the message bytes, without leading zeros
    pub fn decrypt(secret: &G2, ct: &Ciphertext) -> Vec<u8> {
        let mask = pair(&ct.c1, secret);
        map_gt_to_message(&(ct.c0 - mask))
    }
}
