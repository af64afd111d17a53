// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use proptest::prelude::*;

use super::support::{init_tracing, small_params};
use crate::argon2::hash;
use crate::config::Variant;
use crate::encoding::decode;
use crate::error::{DecodeError, Error};
use crate::verifier::{Verifier, verify};

const ARGON2ID: &str =
    "$argon2id$v=19$m=32,t=1,p=1$c2FsdHNhbHQ$5VWezsgKQsDKtClk21IaEpz+vjaoMj1kDv27eipxuMk";

#[test]
fn test_verify_match_and_mismatch() {
    init_tracing();

    assert!(verify(ARGON2ID, b"password", None, None).expect("Failed to verify(..)"));
    assert!(!verify(ARGON2ID, b"Password", None, None).expect("Failed to verify(..)"));
}

#[test]
fn test_verify_every_variant() {
    for variant in [Variant::Argon2d, Variant::Argon2i, Variant::Argon2id] {
        let (encoded, _) = hash(
            &small_params(variant),
            b"password",
            None,
            Some(b"key"),
            Some(b"ad"),
        )
        .expect("Failed to hash(..)");

        assert!(
            verify(&encoded, b"password", Some(b"key"), Some(b"ad"))
                .expect("Failed to verify(..)")
        );
        assert!(!verify(&encoded, b"password", None, Some(b"ad")).expect("Failed to verify(..)"));
        assert!(!verify(&encoded, b"password", Some(b"key"), None).expect("Failed to verify(..)"));
    }
}

#[test]
fn test_verify_corrupted_base64_is_error() {
    init_tracing();

    let corrupted = ARGON2ID.replace("5VWez", "5VW!z");

    assert_eq!(
        verify(&corrupted, b"password", None, None),
        Err(Error::Decode(DecodeError::InvalidBase64("hash")))
    );
}

#[test]
fn test_verify_truncated_hash_is_error() {
    let truncated = &ARGON2ID[..ARGON2ID.len() - 40];

    let err = verify(truncated, b"password", None, None).expect_err("Expected verify(..) to fail");
    assert!(err.is_decode_error());
}

#[test]
fn test_verify_empty_password_is_error() {
    assert_eq!(
        verify(ARGON2ID, b"", None, None),
        Err(Error::PasswordTooShort)
    );
}

#[test]
fn test_verify_legacy_encoding_without_version() {
    let params = crate::config::Params {
        version: crate::config::Version::V0x10,
        ..small_params(Variant::Argon2i)
    };
    let (encoded, _) =
        hash(&params, b"password", Some(b"saltsalt"), None, None).expect("Failed to hash(..)");
    let legacy = encoded.replace("$v=16", "");

    assert!(verify(&legacy, b"password", None, None).expect("Failed to verify(..)"));
}

#[test]
fn test_verifier_builder() {
    let mut verifier = Verifier::new();

    let matches = verifier
        .with_hash(ARGON2ID)
        .with_password("password")
        .verify()
        .expect("Failed to verify()");
    assert!(matches);

    let matches = verifier
        .with_password("passw0rd")
        .verify()
        .expect("Failed to verify()");
    assert!(!matches);
}

#[test]
fn test_verifier_with_hash_raw() {
    let raw = decode(ARGON2ID).expect("Failed to decode(..)");

    let mut verifier = Verifier::default();
    verifier.with_hash_raw(&raw).with_password("password");

    assert_eq!(verifier.hash().as_deref(), Some(ARGON2ID));
    assert!(verifier.verify().expect("Failed to verify()"));
}

#[test]
fn test_verifier_hash_missing() {
    let mut verifier = Verifier::default();
    verifier.with_password("password");

    assert_eq!(verifier.verify(), Err(Error::HashMissing));
}

#[test]
fn test_verifier_password_missing() {
    let mut verifier = Verifier::default();
    verifier.with_hash(ARGON2ID);

    assert_eq!(verifier.verify(), Err(Error::PasswordMissing));
}

#[test]
fn test_verifier_decode_error() {
    let mut verifier = Verifier::default();
    verifier.with_hash("$argon2id$v=19$m=32").with_password("password");

    let err = verifier.verify().expect_err("Expected verify() to fail");
    assert!(err.is_decode_error());
}

#[test]
fn test_verifier_password_clearing() {
    let mut password = b"password".to_vec();

    let mut verifier = Verifier::default();
    let matches = verifier
        .configure_password_clearing(true)
        .with_hash(ARGON2ID)
        .with_password(&mut password)
        .verify()
        .expect("Failed to verify()");

    assert!(matches);
    assert!(verifier.password().is_none());
    drop(verifier);
    assert_eq!(password, [0u8; 8]);
}

#[test]
fn test_verifier_password_immutable() {
    let mut verifier = Verifier::default();
    verifier
        .configure_password_clearing(true)
        .with_hash(ARGON2ID)
        .with_password("password");

    assert_eq!(verifier.verify(), Err(Error::PasswordImmutable));
}

#[test]
fn test_verifier_secret_key_clearing() {
    let params = small_params(Variant::Argon2id);
    let (encoded, _) =
        hash(&params, b"password", None, Some(b"key"), None).expect("Failed to hash(..)");
    let mut secret_key = b"key".to_vec();

    let mut verifier = Verifier::default();
    let matches = verifier
        .configure_secret_key_clearing(true)
        .with_hash(&encoded)
        .with_password("password")
        .with_secret_key(&mut secret_key)
        .verify()
        .expect("Failed to verify()");

    assert!(matches);
    drop(verifier);
    assert_eq!(secret_key, [0u8; 3]);
}

#[test]
fn test_verifier_secret_key_immutable() {
    let mut verifier = Verifier::default();
    verifier
        .configure_secret_key_clearing(true)
        .with_hash(ARGON2ID)
        .with_password("password")
        .with_secret_key("key");

    assert_eq!(verifier.verify(), Err(Error::SecretKeyImmutable));
}

#[test]
fn test_verifier_threads_zero() {
    let mut verifier = Verifier::default();
    verifier
        .configure_threads(0)
        .with_hash(ARGON2ID)
        .with_password("password");

    assert_eq!(verifier.verify(), Err(Error::ThreadsTooFew));
}

#[test]
fn test_verifier_additional_data() {
    let params = small_params(Variant::Argon2id);
    let (encoded, _) =
        hash(&params, b"password", None, None, Some(b"context")).expect("Failed to hash(..)");

    let mut verifier = Verifier::default();
    verifier.with_hash(&encoded).with_password("password");
    assert!(!verifier.verify().expect("Failed to verify()"));

    verifier.with_additional_data("context");
    assert!(verifier.verify().expect("Failed to verify()"));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn test_verify_round_trip(password in proptest::collection::vec(any::<u8>(), 1..64)) {
        let (encoded, _) = hash(&small_params(Variant::Argon2id), &password, None, None, None)
            .expect("Failed to hash(..)");

        prop_assert!(verify(&encoded, &password, None, None).expect("Failed to verify(..)"));
    }

    #[test]
    fn test_verify_rejects_flipped_byte(
        password in proptest::collection::vec(any::<u8>(), 1..64),
        position in any::<prop::sample::Index>(),
        bit in 0u8..8,
    ) {
        let (encoded, _) = hash(&small_params(Variant::Argon2id), &password, None, None, None)
            .expect("Failed to hash(..)");

        let mut flipped = password.clone();
        let index = position.index(flipped.len());
        flipped[index] ^= 1 << bit;

        prop_assert!(!verify(&encoded, &flipped, None, None).expect("Failed to verify(..)"));
    }
}
