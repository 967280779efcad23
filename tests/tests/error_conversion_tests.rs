// Conversion of engine errors into the public error type

use bnpair::api::{Error as CoreError, Result as CoreResult, ResultExt};
use bnpair::prelude::*;
use bnpair_algorithms::error::{validate, Error as EngineError};

fn decode_g2(bytes: &[u8]) -> CoreResult<G2> {
    let (q, _) = G2::unmarshal(bytes)?;
    Ok(q)
}

#[test]
fn test_question_mark_converts_engine_errors() {
    let mut bytes = G2::generator().marshal();
    bytes[0] = 0x05;
    assert!(matches!(decode_g2(&bytes), Err(CoreError::InvalidPoint { .. })));

    assert!(matches!(
        decode_g2(&bytes[..10]),
        Err(CoreError::InvalidLength { .. })
    ));
}

#[test]
fn test_length_error_keeps_sizes() {
    let err = CoreError::from(G1::unmarshal(&[0u8; 10]).unwrap_err());
    match err {
        CoreError::InvalidLength { expected, actual, .. } => {
            assert_eq!(expected, 64);
            assert_eq!(actual, 10);
        }
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn test_with_context_overrides_context() {
    let res = Gt::unmarshal(&[1, 2, 3]).with_context("session key");
    match res {
        Err(CoreError::InvalidLength { context, .. }) => assert_eq!(context, "session key"),
        other => panic!("unexpected result {:?}", other.map(|(t, _)| t)),
    }
}

#[test]
fn test_message_too_large_converts() {
    let err = map_message_to_gt(&[0xff; 400]).unwrap_err();
    assert!(matches!(err, EngineError::MessageTooLarge { bits: 3200, max_bits: 3063 }));

    match CoreError::from(err) {
        CoreError::MessageTooLarge { context, message } => {
            assert_eq!(context, "map_message_to_gt");
            assert!(message.contains("3200"));
        }
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn test_not_affine_maps_to_invalid_point() {
    let err = CoreError::from(EngineError::NotAffine { context: "G2 Frobenius" });
    assert!(matches!(err, CoreError::InvalidPoint { context: "G2 Frobenius", .. }));
}

#[test]
fn test_validate_helpers() {
    assert!(validate::length("G1", 64, 64).is_ok());
    assert!(matches!(
        validate::length("G1", 63, 64),
        Err(EngineError::Length { expected: 64, actual: 63, .. })
    ));
    assert!(validate::parameter(true, "k", "nonzero").is_ok());
    assert!(matches!(
        validate::parameter(false, "k", "nonzero"),
        Err(EngineError::Parameter { .. })
    ));
}

#[test]
fn test_error_display() {
    let err = EngineError::MalformedPoint { context: "G1" };
    assert!(!err.to_string().is_empty());

    let err: CoreError = EngineError::NoSquareRoot { context: "hash_to_g1" }.into();
    assert!(err.to_string().contains("hash_to_g1"));
}
