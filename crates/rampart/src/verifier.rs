// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Constant-time verification of encoded hashes.

use rampart_util::constant_time_eq;
use rampart_zero::ZeroizingGuard;
use tracing::debug;

use crate::config::defaults::verify_threads;
use crate::config::{MemoryPolicy, Params, VerifierConfig};
use crate::encoding;
use crate::error::Error;
use crate::input::{AdditionalData, Password, SecretKey};
use crate::instance::{self, Inputs};
use crate::memory::try_zeroed_bytes;
use crate::output::HashRaw;
use crate::validation;

/// Checks `password` against an encoded hash.
///
/// Returns `Ok(false)` on a mismatch and `Err(_)` when the string cannot be
/// decoded or the recomputation fails. Uses `min(available parallelism,
/// lanes)` threads.
///
/// ```rust
/// let encoded = "$argon2id$v=19$m=32,t=1,p=1$c2FsdHNhbHQ$5VWezsgKQsDKtClk21IaEpz+vjaoMj1kDv27eipxuMk";
///
/// assert!(rampart::verify(encoded, b"password", None, None).expect("Failed to verify(..)"));
/// assert!(!rampart::verify(encoded, b"passw0rd", None, None).expect("Failed to verify(..)"));
/// assert!(rampart::verify("$argon2id$garbage", b"password", None, None).is_err());
/// ```
pub fn verify(
    encoded: &str,
    password: &[u8],
    secret_key: Option<&[u8]>,
    additional_data: Option<&[u8]>,
) -> Result<bool, Error> {
    let raw = decode_logged(encoded)?;
    let threads = verify_threads(raw.lanes());

    verify_raw(
        &raw,
        Inputs {
            password,
            salt: raw.raw_salt_bytes(),
            secret_key: secret_key.unwrap_or_default(),
            additional_data: additional_data.unwrap_or_default(),
        },
        threads,
    )
}

fn decode_logged(encoded: &str) -> Result<HashRaw, Error> {
    encoding::decode(encoded).inspect_err(|err| {
        debug!(outcome = "decode_error", error = %err, "Argon2 verification");
    })
}

/// Recomputes `raw` from `inputs` and compares in constant time.
///
/// `inputs.salt` must be the salt of `raw`.
pub(crate) fn verify_raw(raw: &HashRaw, inputs: Inputs<'_>, threads: u32) -> Result<bool, Error> {
    let expected = raw.raw_hash_bytes();
    let hash_len = u32::try_from(expected.len()).map_err(|_| Error::HashLenTooLong)?;

    let params = Params {
        variant: raw.variant(),
        version: raw.version(),
        iterations: raw.iterations(),
        memory_size: raw.memory_size(),
        lanes: raw.lanes(),
        threads,
        hash_len,
    };

    validation::validate(
        &params,
        MemoryPolicy::Aligned,
        inputs.password,
        inputs.salt,
        inputs.secret_key,
        inputs.additional_data,
    )?;

    let mut computed = ZeroizingGuard::new(try_zeroed_bytes(expected.len())?);
    instance::hash_into(&params, &inputs, &mut computed)?;

    let matches = constant_time_eq(&computed, expected);
    debug!(
        outcome = if matches { "match" } else { "mismatch" },
        "Argon2 verification"
    );

    Ok(matches)
}

#[derive(Debug)]
enum HashSource {
    Encoded(String),
    Raw(HashRaw),
}

/// Builder that checks passwords against stored hashes.
///
/// ```rust
/// use rampart::Verifier;
///
/// let mut verifier = Verifier::default();
/// let is_valid = verifier
///     .with_hash("$argon2i$v=19$m=32,t=1,p=1$c2FsdHNhbHQ$G/QYpEQRl+4m1qOqB4nMHyXvYwpyf/A+G+6lzFsYYxc")
///     .with_password("password")
///     .verify()
///     .expect("Failed to verify()");
///
/// assert!(is_valid);
/// ```
#[derive(Debug, Default)]
pub struct Verifier<'a> {
    additional_data: Option<AdditionalData>,
    config: VerifierConfig,
    hash: Option<HashSource>,
    password: Option<Password<'a>>,
    secret_key: Option<SecretKey<'a>>,
}

impl<'a> Verifier<'a> {
    #[allow(missing_docs)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero a mutably borrowed password after every verification attempt.
    pub fn configure_password_clearing(&mut self, clearing: bool) -> &mut Self {
        self.config.set_password_clearing(clearing);
        self
    }

    /// Zero a mutably borrowed secret key after every verification attempt.
    pub fn configure_secret_key_clearing(&mut self, clearing: bool) -> &mut Self {
        self.config.set_secret_key_clearing(clearing);
        self
    }

    /// Upper bound on worker threads; the run uses `min(threads, lanes)`.
    pub fn configure_threads(&mut self, threads: u32) -> &mut Self {
        self.config.set_threads(threads);
        self
    }

    #[allow(missing_docs)]
    pub fn with_additional_data<AD>(&mut self, additional_data: AD) -> &mut Self
    where
        AD: Into<AdditionalData>,
    {
        self.additional_data = Some(additional_data.into());
        self
    }

    /// Encoded hash to verify against. Parsed when [`verify`](Verifier::verify) runs.
    pub fn with_hash<S>(&mut self, hash: S) -> &mut Self
    where
        S: AsRef<str>,
    {
        self.hash = Some(HashSource::Encoded(hash.as_ref().to_string()));
        self
    }

    #[allow(missing_docs)]
    pub fn with_hash_raw(&mut self, hash_raw: &HashRaw) -> &mut Self {
        self.hash = Some(HashSource::Raw(hash_raw.clone()));
        self
    }

    #[allow(missing_docs)]
    pub fn with_password<P>(&mut self, password: P) -> &mut Self
    where
        P: Into<Password<'a>>,
    {
        self.password = Some(password.into());
        self
    }

    #[allow(missing_docs)]
    pub fn with_secret_key<SK>(&mut self, secret_key: SK) -> &mut Self
    where
        SK: Into<SecretKey<'a>>,
    {
        self.secret_key = Some(secret_key.into());
        self
    }

    /// `Ok(true)` when the password matches the hash.
    pub fn verify(&mut self) -> Result<bool, Error> {
        let result = self.try_verify();
        self.clear();
        result
    }

    fn try_verify(&mut self) -> Result<bool, Error> {
        let source = self.hash.as_ref().ok_or(Error::HashMissing)?;

        let password = self.password.as_ref().ok_or(Error::PasswordMissing)?;
        password.validate()?;
        if self.config.password_clearing() && !password.is_mutable() {
            return Err(Error::PasswordImmutable);
        }

        if let Some(secret_key) = &self.secret_key {
            secret_key.validate()?;
            if self.config.secret_key_clearing() && !secret_key.is_mutable() {
                return Err(Error::SecretKeyImmutable);
            }
        }

        if let Some(additional_data) = &self.additional_data {
            additional_data.validate()?;
        }

        let decoded;
        let raw = match source {
            HashSource::Encoded(encoded) => {
                decoded = decode_logged(encoded)?;
                &decoded
            }
            HashSource::Raw(raw) => raw,
        };

        let inputs = Inputs {
            password: password.as_bytes(),
            salt: raw.raw_salt_bytes(),
            secret_key: self.secret_key.as_ref().map(SecretKey::as_bytes).unwrap_or_default(),
            additional_data: self
                .additional_data
                .as_ref()
                .map(AdditionalData::as_bytes)
                .unwrap_or_default(),
        };

        verify_raw(raw, inputs, self.config.threads().min(raw.lanes()))
    }

    fn clear(&mut self) {
        if self.config.password_clearing() {
            if let Some(mut password) = self.password.take() {
                password.clear();
            }
        }
        if self.config.secret_key_clearing() {
            if let Some(mut secret_key) = self.secret_key.take() {
                secret_key.clear();
            }
        }
    }

    #[allow(missing_docs)]
    pub fn additional_data(&self) -> Option<&AdditionalData> {
        self.additional_data.as_ref()
    }

    #[allow(missing_docs)]
    pub fn config(&self) -> &VerifierConfig {
        &self.config
    }

    /// Encoded form of the hash, if one is set.
    pub fn hash(&self) -> Option<String> {
        match self.hash.as_ref()? {
            HashSource::Encoded(encoded) => Some(encoded.clone()),
            HashSource::Raw(raw) => Some(raw.encode()),
        }
    }

    #[allow(missing_docs)]
    pub fn password(&self) -> Option<&Password<'a>> {
        self.password.as_ref()
    }

    #[allow(missing_docs)]
    pub fn secret_key(&self) -> Option<&SecretKey<'a>> {
        self.secret_key.as_ref()
    }

    /// Copy that owns its password and secret key.
    pub fn to_owned(&self) -> Verifier<'static> {
        Verifier {
            additional_data: self.additional_data.clone(),
            config: self.config.clone(),
            hash: self.hash.as_ref().map(|hash| match hash {
                HashSource::Encoded(encoded) => HashSource::Encoded(encoded.clone()),
                HashSource::Raw(raw) => HashSource::Raw(raw.clone()),
            }),
            password: self.password.as_ref().map(Password::to_owned),
            secret_key: self.secret_key.as_ref().map(SecretKey::to_owned),
        }
    }
}
