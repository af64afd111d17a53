// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use rampart_rand::EntropyError;
use rampart_rand::test_utils::{MockEntropySource, MockEntropySourceBehaviour};
use rampart_util::test_utils::hex_to_bytes;

use super::support::small_params;
use crate::argon2::{hash, hash_raw, hash_with_entropy};
use crate::config::{Params, Variant, Version};
use crate::encoding::decode;
use crate::error::Error;
use crate::verifier::verify;

const SALTSALT: &[u8] = b"saltsalt";

#[test]
fn test_golden_argon2id_65536() {
    let params = Params {
        variant: Variant::Argon2id,
        version: Version::V0x13,
        iterations: 2,
        memory_size: 65536,
        lanes: 1,
        threads: 1,
        hash_len: 32,
    };

    let (encoded, raw) = hash(&params, b"correct horse", Some(SALTSALT), None, None)
        .expect("Failed to hash(..)");

    assert_eq!(
        encoded,
        "$argon2id$v=19$m=65536,t=2,p=1$c2FsdHNhbHQ$5NukIitqJW1G2ak1eDNCRTOQjOFnWKPRcHJHz6Dqcfk"
    );
    assert_eq!(raw.len(), 32);
    assert!(verify(&encoded, b"correct horse", None, None).expect("Failed to verify(..)"));
    assert!(!verify(&encoded, b"wrong horse", None, None).expect("Failed to verify(..)"));
}

#[test]
fn test_golden_small_per_variant() {
    let cases = [
        (
            Variant::Argon2d,
            "$argon2d$v=19$m=32,t=1,p=1$c2FsdHNhbHQ$eSYYwQcsrWKxnJc82avUPz/emX3n3T8fSIWFyaPjJfg",
        ),
        (
            Variant::Argon2i,
            "$argon2i$v=19$m=32,t=1,p=1$c2FsdHNhbHQ$G/QYpEQRl+4m1qOqB4nMHyXvYwpyf/A+G+6lzFsYYxc",
        ),
        (
            Variant::Argon2id,
            "$argon2id$v=19$m=32,t=1,p=1$c2FsdHNhbHQ$5VWezsgKQsDKtClk21IaEpz+vjaoMj1kDv27eipxuMk",
        ),
    ];

    for (variant, expected) in cases {
        let (encoded, _) = hash(&small_params(variant), b"password", Some(SALTSALT), None, None)
            .expect("Failed to hash(..)");
        assert_eq!(encoded, expected);
    }
}

#[test]
fn test_golden_memory_aligned_but_encoded_as_requested() {
    let params = Params {
        memory_size: 1,
        lanes: 4,
        threads: 4,
        ..small_params(Variant::Argon2id)
    };

    let (encoded, _) =
        hash(&params, b"password", Some(SALTSALT), None, None).expect("Failed to hash(..)");

    assert_eq!(
        encoded,
        "$argon2id$v=19$m=1,t=1,p=4$c2FsdHNhbHQ$hbcJo03BVjhECf2+06UGF/a1wryxTSk23GQ8VppspXU"
    );
}

#[test]
fn test_golden_non_power_of_two_memory() {
    let params = Params {
        iterations: 2,
        memory_size: 300,
        lanes: 2,
        threads: 2,
        ..small_params(Variant::Argon2i)
    };

    let raw = hash_raw(&params, b"password", SALTSALT, None, None).expect("Failed to hash_raw(..)");

    assert_eq!(
        raw,
        hex_to_bytes("add0b90c36a779cc6e5893848ae706b9049d0a8a165e0ee8a09cb8504618f0f7")
    );
}

#[test]
fn test_golden_legacy_version_multi_lane() {
    let params = Params {
        variant: Variant::Argon2d,
        version: Version::V0x10,
        iterations: 2,
        memory_size: 64,
        lanes: 4,
        threads: 4,
        hash_len: 32,
    };

    let (encoded, _) =
        hash(&params, b"password", Some(SALTSALT), None, None).expect("Failed to hash(..)");

    assert_eq!(
        encoded,
        "$argon2d$v=16$m=64,t=2,p=4$c2FsdHNhbHQ$KcSIK2ihUPpFz7Ap0lRt+409M4NaPNvXP9MmEmcpBLQ"
    );
}

#[test]
fn test_golden_two_lanes() {
    let params = Params {
        iterations: 2,
        memory_size: 64,
        lanes: 2,
        threads: 2,
        ..small_params(Variant::Argon2id)
    };

    let raw = hash_raw(&params, b"password", SALTSALT, None, None).expect("Failed to hash_raw(..)");

    assert_eq!(
        raw,
        hex_to_bytes("9c20067f22f5516067b657ca60c1f37d423ad88e352930186d02a69e3a825dac")
    );
}

#[test]
fn test_golden_address_block_regeneration() {
    // 256-block segments need a second address block.
    let params = Params {
        memory_size: 1024,
        ..small_params(Variant::Argon2id)
    };

    let raw = hash_raw(&params, b"password", SALTSALT, None, None).expect("Failed to hash_raw(..)");

    assert_eq!(
        raw,
        hex_to_bytes("2b7774a77faacbfbcc9e1ee27921a95a8f8c4b8bbed1d084052153aa3879435f")
    );
}

#[test]
fn test_golden_output_lengths() {
    let short = Params {
        hash_len: 4,
        ..small_params(Variant::Argon2id)
    };
    let long = Params {
        hash_len: 100,
        ..small_params(Variant::Argon2id)
    };

    assert_eq!(
        hash_raw(&short, b"password", SALTSALT, None, None).expect("Failed to hash_raw(..)"),
        hex_to_bytes("b5cb0931")
    );
    assert_eq!(
        hash_raw(&long, b"password", SALTSALT, None, None).expect("Failed to hash_raw(..)"),
        hex_to_bytes(
            "02fc21c66d782a0e7b66a0379a7cf1d143cbac91d3356d42ddb16fd51804317a\
             6a230f590a202e21f677f78a2528031bfe62005b1d616cc6ebaf55d9bf5e35a0\
             4c51d4ef586bc6b7cf22b6a4ee8d36d7b56dc0f2ade29aedbc3cd42bebeeeb1d\
             601b8757"
        )
    );
}

#[test]
fn test_hash_is_deterministic_with_explicit_salt() {
    let params = small_params(Variant::Argon2id);

    let first = hash(&params, b"password", Some(SALTSALT), Some(b"key"), Some(b"ad"))
        .expect("Failed to hash(..)");
    let second = hash(&params, b"password", Some(SALTSALT), Some(b"key"), Some(b"ad"))
        .expect("Failed to hash(..)");

    assert_eq!(first, second);
}

#[test]
fn test_hash_random_salts_differ() {
    let params = small_params(Variant::Argon2id);

    let (first, _) = hash(&params, b"password", None, None, None).expect("Failed to hash(..)");
    let (second, _) = hash(&params, b"password", None, None, None).expect("Failed to hash(..)");

    assert_ne!(first, second);
    assert_eq!(
        decode(&first).expect("Failed to decode(..)").raw_salt_bytes().len(),
        32
    );
}

#[test]
fn test_hash_random_salt_from_source() {
    let source = MockEntropySource::new(MockEntropySourceBehaviour::FillWith(0x2A));
    let params = small_params(Variant::Argon2id);

    let (encoded, _) = hash_with_entropy(&source, &params, b"password", None, None, None)
        .expect("Failed to hash_with_entropy(..)");

    let raw = decode(&encoded).expect("Failed to decode(..)");
    assert_eq!(raw.raw_salt_bytes(), [0x2A; 32]);
    assert_eq!(source.calls(), 1);
}

#[test]
fn test_hash_entropy_failure() {
    let source = MockEntropySource::new(MockEntropySourceBehaviour::FailAtFillBytes);
    let params = small_params(Variant::Argon2id);

    let result = hash_with_entropy(&source, &params, b"password", None, None, None);

    assert_eq!(
        result,
        Err(Error::Entropy(EntropyError::EntropyNotAvailable))
    );
}

#[test]
fn test_hash_explicit_salt_skips_entropy() {
    let source = MockEntropySource::new(MockEntropySourceBehaviour::FailAtFillBytes);
    let params = small_params(Variant::Argon2id);

    hash_with_entropy(&source, &params, b"password", Some(SALTSALT), None, None)
        .expect("Failed to hash_with_entropy(..)");

    assert_eq!(source.calls(), 0);
}

#[test]
fn test_hash_secret_key_and_additional_data_bind() {
    let params = small_params(Variant::Argon2id);
    let hash_with = |secret: Option<&[u8]>, ad: Option<&[u8]>| {
        hash_raw(&params, b"password", SALTSALT, secret, ad).expect("Failed to hash_raw(..)")
    };

    let plain = hash_with(None, None);
    let keyed = hash_with(Some(b"key"), None);
    let bound = hash_with(None, Some(b"ad"));

    assert_ne!(plain, keyed);
    assert_ne!(plain, bound);
    assert_ne!(keyed, bound);
    // An empty secret is the same as none.
    assert_eq!(hash_with(Some(b""), None), plain);
}

#[test]
fn test_hash_validates_before_running() {
    let params = Params {
        lanes: 0,
        ..small_params(Variant::Argon2id)
    };

    assert_eq!(
        hash_raw(&params, b"password", SALTSALT, None, None),
        Err(Error::LanesTooFew)
    );
    assert_eq!(
        hash_raw(&small_params(Variant::Argon2id), b"", SALTSALT, None, None),
        Err(Error::PasswordTooShort)
    );
    assert_eq!(
        hash_raw(&small_params(Variant::Argon2id), b"password", b"short", None, None),
        Err(Error::SaltTooShort)
    );
}

#[test]
fn test_hash_accepts_threads_above_lanes() {
    let clamped = Params {
        threads: 16,
        ..small_params(Variant::Argon2d)
    };

    assert_eq!(
        hash_raw(&clamped, b"password", SALTSALT, None, None).expect("Failed to hash_raw(..)"),
        hash_raw(&small_params(Variant::Argon2d), b"password", SALTSALT, None, None)
            .expect("Failed to hash_raw(..)")
    );
}
