// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use rampart_rand::{EntropySource, SystemEntropySource};
use tracing::warn;

use crate::argon2::hash_to_raw;
use crate::config::{HasherConfig, MemoryPolicy, Variant, Version};
use crate::error::Error;
use crate::input::{AdditionalData, Password, Salt, SecretKey};
use crate::instance::Inputs;
use crate::output::HashRaw;

/// Builder that hashes passwords.
///
/// Cost parameters are checked with the strict memory policy: the memory
/// size must be a power of two and at least `8 * lanes`. A random salt is
/// renewed by every call to [`hash`](Hasher::hash).
///
/// ```rust
/// use rampart::Hasher;
///
/// let mut hasher = Hasher::default();
/// let encoded = hasher
///     .configure_iterations(2)
///     .configure_lanes(1)
///     .configure_memory_size(64)
///     .configure_threads(1)
///     .opt_out_of_secret_key(true)
///     .with_password("P@ssw0rd")
///     .with_salt("somesalt")
///     .hash()
///     .expect("Failed to hash()");
///
/// assert!(encoded.starts_with("$argon2id$v=19$m=64,t=2,p=1$c29tZXNhbHQ$"));
/// ```
#[derive(Debug)]
pub struct Hasher<'a> {
    additional_data: Option<AdditionalData>,
    config: HasherConfig,
    password: Option<Password<'a>>,
    salt: Salt,
    secret_key: Option<SecretKey<'a>>,
}

impl Default for Hasher<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Hasher<'a> {
    /// Hasher with the defaults from [`config::defaults`](crate::config::defaults).
    pub fn new() -> Self {
        Self {
            additional_data: None,
            config: HasherConfig::default(),
            password: None,
            salt: Salt::default(),
            secret_key: None,
        }
    }

    /// Cheap parameters for tests and tooling. Never use for real passwords.
    ///
    /// One iteration, the smallest power-of-two memory size holding
    /// `8 * lanes` blocks, a fixed all-zero 8-byte salt and no secret key.
    pub fn fast_but_insecure() -> Self {
        let mut hasher = Self::new();
        let lanes = hasher.config.lanes();

        hasher.config.set_iterations(1);
        hasher.config.set_memory_size((8 * lanes).next_power_of_two());
        hasher.config.set_threads(lanes);
        hasher.config.set_opt_out_of_secret_key(true);
        hasher.salt = Salt::from(vec![0u8; 8]);
        hasher
    }

    #[allow(missing_docs)]
    pub fn configure_hash_len(&mut self, hash_len: u32) -> &mut Self {
        self.config.set_hash_len(hash_len);
        self
    }

    #[allow(missing_docs)]
    pub fn configure_iterations(&mut self, iterations: u32) -> &mut Self {
        self.config.set_iterations(iterations);
        self
    }

    #[allow(missing_docs)]
    pub fn configure_lanes(&mut self, lanes: u32) -> &mut Self {
        self.config.set_lanes(lanes);
        self
    }

    /// Memory cost in KiB.
    pub fn configure_memory_size(&mut self, memory_size: u32) -> &mut Self {
        self.config.set_memory_size(memory_size);
        self
    }

    /// Zero a mutably borrowed password after every hash attempt.
    pub fn configure_password_clearing(&mut self, clearing: bool) -> &mut Self {
        self.config.set_password_clearing(clearing);
        self
    }

    /// Zero a mutably borrowed secret key after every hash attempt.
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
    pub fn configure_variant(&mut self, variant: Variant) -> &mut Self {
        self.config.set_variant(variant);
        self
    }

    /// Version 0x10 is accepted for compatibility with old hashes.
    pub fn configure_version(&mut self, version: Version) -> &mut Self {
        if version != Version::V0x13 {
            warn!(version = %version, "Hasher configured with a legacy Argon2 version");
        }
        self.config.set_version(version);
        self
    }

    /// Allow hashing without a secret key.
    pub fn opt_out_of_secret_key(&mut self, opt_out: bool) -> &mut Self {
        self.config.set_opt_out_of_secret_key(opt_out);
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

    #[allow(missing_docs)]
    pub fn with_password<P>(&mut self, password: P) -> &mut Self
    where
        P: Into<Password<'a>>,
    {
        self.password = Some(password.into());
        self
    }

    #[allow(missing_docs)]
    pub fn with_salt<S>(&mut self, salt: S) -> &mut Self
    where
        S: Into<Salt>,
    {
        self.salt = salt.into();
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

    /// Hashes the password into an encoded string.
    pub fn hash(&mut self) -> Result<String, Error> {
        Ok(self.hash_raw()?.encode())
    }

    /// Hashes the password into a [`HashRaw`].
    pub fn hash_raw(&mut self) -> Result<HashRaw, Error> {
        self.hash_raw_with_entropy(&SystemEntropySource {})
    }

    /// Same as [`hash_raw`](Hasher::hash_raw), drawing random salts from
    /// `source`.
    pub fn hash_raw_with_entropy(&mut self, source: &dyn EntropySource) -> Result<HashRaw, Error> {
        let result = self.try_hash_raw(source);
        self.clear();
        result
    }

    fn try_hash_raw(&mut self, source: &dyn EntropySource) -> Result<HashRaw, Error> {
        self.config.validate()?;

        if let Some(additional_data) = &self.additional_data {
            additional_data.validate()?;
        }

        let password = self.password.as_ref().ok_or(Error::PasswordMissing)?;
        password.validate()?;
        if self.config.password_clearing() && !password.is_mutable() {
            return Err(Error::PasswordImmutable);
        }

        self.salt.validate()?;

        match &self.secret_key {
            Some(secret_key) => {
                secret_key.validate()?;
                if self.config.secret_key_clearing() && !secret_key.is_mutable() {
                    return Err(Error::SecretKeyImmutable);
                }
            }
            None if !self.config.opt_out_of_secret_key() => return Err(Error::SecretKeyMissing),
            None => {}
        }

        if self.config.threads() > self.config.lanes() {
            warn!(
                threads = self.config.threads(),
                lanes = self.config.lanes(),
                "Hasher threads exceed lanes, clamping"
            );
        }

        self.salt.update(source)?;

        let params = self.config.params();
        let inputs = Inputs {
            password: password.as_bytes(),
            salt: self.salt.as_bytes(),
            secret_key: self.secret_key.as_ref().map(SecretKey::as_bytes).unwrap_or_default(),
            additional_data: self
                .additional_data
                .as_ref()
                .map(AdditionalData::as_bytes)
                .unwrap_or_default(),
        };

        hash_to_raw(&params, MemoryPolicy::Strict, inputs)
    }

    /// Applies the clearing options after a hash attempt.
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
    pub fn config(&self) -> &HasherConfig {
        &self.config
    }

    #[allow(missing_docs)]
    pub fn password(&self) -> Option<&Password<'a>> {
        self.password.as_ref()
    }

    #[allow(missing_docs)]
    pub fn salt(&self) -> &Salt {
        &self.salt
    }

    #[allow(missing_docs)]
    pub fn secret_key(&self) -> Option<&SecretKey<'a>> {
        self.secret_key.as_ref()
    }

    /// Copy that owns its password and secret key.
    pub fn to_owned(&self) -> Hasher<'static> {
        Hasher {
            additional_data: self.additional_data.clone(),
            config: self.config.clone(),
            password: self.password.as_ref().map(Password::to_owned),
            salt: self.salt.clone(),
            secret_key: self.secret_key.as_ref().map(SecretKey::to_owned),
        }
    }
}
