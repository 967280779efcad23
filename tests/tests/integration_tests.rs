// Integration tests for the bnpair facade crate

use bnpair::api::Error as CoreError;
use bnpair::prelude::*;
use bnpair_tests::{elgamal, from_hex, seeded_rng, signature, strip_leading_zeros, to_hex, Party};

#[test]
fn test_tripartite_key_agreement() {
    let mut rng = seeded_rng(1);
    let alice = Party::new(&mut rng);
    let bob = Party::new(&mut rng);
    let carol = Party::new(&mut rng);

    let k_a = alice.shared_key(&bob.g1, &carol.g2);
    let k_b = bob.shared_key(&carol.g1, &alice.g2);
    let k_c = carol.shared_key(&alice.g1, &bob.g2);

    assert_eq!(k_a, k_b);
    assert_eq!(k_b, k_c);
    assert!(!k_a.is_one());
}

#[test]
fn test_tripartite_key_survives_encoding() {
    let mut rng = seeded_rng(2);
    let alice = Party::new(&mut rng);
    let bob = Party::new(&mut rng);
    let carol = Party::new(&mut rng);

    // Shares travel as bytes
    let bob_g1 = G1::from_bytes(&bob.g1.to_bytes()).unwrap();
    let carol_g2 = G2::from_bytes(&carol.g2.to_bytes()).unwrap();

    let key = alice.shared_key(&bob_g1, &carol_g2);
    let wire = Gt::from_bytes(&key.to_bytes()).unwrap();
    assert_eq!(wire, bob.shared_key(&carol.g1, &alice.g2));
}

#[test]
fn test_signature_sign_and_verify() {
    let mut rng = seeded_rng(3);
    let (sk, pk) = signature::keygen(&mut rng);

    let sig = signature::sign(&sk, b"attribute: admin").unwrap();
    assert!(signature::verify(&pk, b"attribute: admin", &sig).unwrap());
    assert!(!signature::verify(&pk, b"attribute: guest", &sig).unwrap());

    let (_, other_pk) = signature::keygen(&mut rng);
    assert!(!signature::verify(&other_pk, b"attribute: admin", &sig).unwrap());
}

#[test]
fn test_signature_aggregation() {
    // Signatures on the same message under different keys aggregate in G1
    let mut rng = seeded_rng(4);
    let (sk1, pk1) = signature::keygen(&mut rng);
    let (sk2, pk2) = signature::keygen(&mut rng);
    let msg = b"policy v2";

    let agg = signature::sign(&sk1, msg).unwrap() + signature::sign(&sk2, msg).unwrap();
    assert!(signature::verify(&(pk1 + pk2), msg, &agg).unwrap());
}

#[test]
fn test_elgamal_round_trip() {
    let mut rng = seeded_rng(5);
    let (sk, pk) = elgamal::keygen(&mut rng);

    let msg = b"the quick brown fox jumps over the lazy dog";
    let ct = elgamal::encrypt(&mut rng, &pk, msg).unwrap();
    assert_eq!(elgamal::decrypt(&sk, &ct), msg.to_vec());
}

#[test]
fn test_elgamal_ciphertext_encoding() {
    let mut rng = seeded_rng(6);
    let (sk, pk) = elgamal::keygen(&mut rng);

    let msg = [0u8, 0, 42, 17];
    let ct = elgamal::encrypt(&mut rng, &pk, &msg).unwrap();
    let bytes = ct.to_bytes();
    assert_eq!(bytes.len(), 384 + 64);

    let parsed = elgamal::Ciphertext::from_bytes(&bytes).unwrap();
    assert_eq!(elgamal::decrypt(&sk, &parsed), strip_leading_zeros(&msg).to_vec());

    // Wrong key yields a different plaintext
    let (other_sk, _) = elgamal::keygen(&mut rng);
    assert_ne!(elgamal::decrypt(&other_sk, &parsed), msg.to_vec());
}

#[test]
fn test_elgamal_rejects_bad_ciphertexts() {
    let mut rng = seeded_rng(7);
    let (_, pk) = elgamal::keygen(&mut rng);
    let ct = elgamal::encrypt(&mut rng, &pk, b"hi").unwrap();
    let bytes = ct.to_bytes();

    match elgamal::Ciphertext::from_bytes(&bytes[..100]) {
        Err(CoreError::InvalidLength { context, .. }) => assert_eq!(context, "ciphertext mask"),
        Err(other) => panic!("unexpected error {:?}", other),
        Ok(_) => panic!("truncated ciphertext accepted"),
    }

    let mut trailing = bytes.clone();
    trailing.push(0);
    assert!(matches!(
        elgamal::Ciphertext::from_bytes(&trailing),
        Err(CoreError::InvalidLength { .. })
    ));
}

#[test]
fn test_elgamal_message_too_large() {
    let mut rng = seeded_rng(8);
    let (_, pk) = elgamal::keygen(&mut rng);

    let msg = [0xffu8; 384];
    assert!(matches!(
        elgamal::encrypt(&mut rng, &pk, &msg),
        Err(CoreError::MessageTooLarge { .. })
    ));
}

#[test]
fn test_hash_outputs_are_stable() {
    assert_eq!(to_hex(&G1::hash(b"x").unwrap().marshal()[..4]), "2d711642");
    assert_eq!(hash_to_g1(b"x").unwrap(), G1::hash(b"x").unwrap());
    assert_eq!(hash_to_g2(b"x").unwrap(), G2::hash(b"x").unwrap());
}

#[test]
fn test_miller_products_finalize_once() {
    // e(P1, Q1) · e(P2, Q2) computed with a single final exponentiation
    let mut rng = seeded_rng(9);
    let (_, p1) = G1::random(&mut rng);
    let (_, q1) = G2::random(&mut rng);
    let (_, p2) = G1::random(&mut rng);
    let (_, q2) = G2::random(&mut rng);

    let batched = (miller(&p1, &q1) + miller(&p2, &q2)).finalize();
    assert_eq!(batched, pair(&p1, &q1) + pair(&p2, &q2));

    // e(P, Q) · e(−P, Q) == 1
    assert!((miller(&p1, &q1) + miller(&-p1, &q1)).finalize().is_one());
}

#[test]
fn test_serde_json_through_facade() {
    let mut rng = seeded_rng(10);
    let (_, p) = G1::random(&mut rng);
    let (_, q) = G2::random(&mut rng);
    let t = pair(&p, &q);

    let json = serde_json::to_string(&(p, q, t)).unwrap();
    let (p2, q2, t2): (G1, G2, Gt) = serde_json::from_str(&json).unwrap();
    assert_eq!((p2, q2, t2), (p, q, t));
}

#[test]
fn test_generator_encoding_vector() {
    let expected = from_hex(
        "0000000000000000000000000000000000000000000000000000000000000001
         8fb501e34aa387f9aa6fecb86184dc21ee5b88d120b5b59e185cac6c5e089665",
    )
    .unwrap();
    assert_eq!(G1::generator().to_bytes(), expected);
    assert_eq!(G1::from_bytes(&expected).unwrap(), G1::generator());
}
