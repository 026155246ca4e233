//! Salt and token derivation for password authentication.
//!
//! Subsonic never sends the password. Each request carries a random salt
//! `s` and `t = md5(password ++ s)` in lowercase hex. MD5 is what the
//! protocol mandates; it only keeps the password off the wire and is not a
//! security boundary.

use std::sync::{Arc, Mutex};

use base64::alphabet::Alphabet;
use base64::engine::{general_purpose, GeneralPurpose};
use base64::Engine as _;
use md5::{Digest, Md5};
use tracing::debug;

use crate::error::{Error, ErrorKind, Result};

/// Number of random bytes in a generated salt.
pub const SALT_BYTES: usize = 16;

/// Standard base64 with `+` → `~` and `/` → `_`. Servers expect exactly this.
const SALT_ALPHABET: Alphabet = match Alphabet::new(
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789~_",
) {
    Ok(alphabet) => alphabet,
    Err(_) => panic!("invalid salt alphabet"),
};

/// Salt encoder: custom alphabet, no padding.
pub const SALT_ENGINE: GeneralPurpose = GeneralPurpose::new(&SALT_ALPHABET, general_purpose::NO_PAD);

/// Source of cryptographically secure random bytes.
pub trait SecureRandom: Send + Sync {
    /// Fill `dest` entirely with random bytes.
    fn fill(&self, dest: &mut [u8]) -> Result<()>;
}

/// Random source backed by the operating system.
#[cfg(feature = "native")]
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandom;

#[cfg(feature = "native")]
impl SecureRandom for OsRandom {
    fn fill(&self, dest: &mut [u8]) -> Result<()> {
        use rand::TryRngCore;

        rand::rngs::OsRng
            .try_fill_bytes(dest)
            .map_err(|e| Error::with_source(ErrorKind::CryptoUnavailable(e.to_string()), e))
    }
}

/// A salt and the token derived from it. Always used together.
#[derive(Clone, PartialEq, Eq)]
pub struct SaltToken {
    pub salt: String,
    pub token: String,
}

impl std::fmt::Debug for SaltToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SaltToken")
            .field("salt", &self.salt)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

impl SaltToken {
    /// Derive the token for `password` and `salt`.
    pub fn derive(password: &str, salt: impl Into<String>) -> Self {
        let salt = salt.into();
        let token = derive_token(password, &salt);
        Self { salt, token }
    }
}

/// Encode raw bytes with the salt alphabet.
pub fn encode_salt(bytes: &[u8]) -> String {
    SALT_ENGINE.encode(bytes)
}

/// Draw [`SALT_BYTES`] random bytes and encode them.
pub fn generate_salt(random: Option<&dyn SecureRandom>) -> Result<String> {
    let random = random.ok_or_else(|| {
        Error::new(ErrorKind::CryptoUnavailable(
            "no random source configured".to_string(),
        ))
    })?;

    let mut bytes = [0u8; SALT_BYTES];
    random.fill(&mut bytes)?;
    Ok(encode_salt(&bytes))
}

/// Lowercase hex MD5 of `password ++ salt`.
pub fn derive_token(password: &str, salt: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(password.as_bytes());
    hasher.update(salt.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Per-client salt state.
///
/// Without reuse every call draws a fresh salt. With reuse the first call
/// generates a pair and every later call returns it unchanged; the mutex
/// makes concurrent first calls converge on one pair.
pub(crate) struct SaltGenerator {
    fixed: Option<String>,
    reuse: bool,
    random: Option<Arc<dyn SecureRandom>>,
    cache: Mutex<Option<SaltToken>>,
}

impl std::fmt::Debug for SaltGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SaltGenerator")
            .field("fixed", &self.fixed.is_some())
            .field("reuse", &self.reuse)
            .field("random", &self.random.is_some())
            .finish_non_exhaustive()
    }
}

impl SaltGenerator {
    pub(crate) fn new(
        fixed: Option<String>,
        reuse: bool,
        random: Option<Arc<dyn SecureRandom>>,
    ) -> Self {
        Self {
            fixed,
            reuse,
            random,
            cache: Mutex::new(None),
        }
    }

    /// Returns true if salts can be produced at all.
    pub(crate) fn is_available(&self) -> bool {
        self.fixed.is_some() || self.random.is_some()
    }

    /// Salt and token for the next request.
    pub(crate) fn next(&self, password: &str) -> Result<SaltToken> {
        if let Some(ref salt) = self.fixed {
            return Ok(SaltToken::derive(password, salt.as_str()));
        }

        if !self.reuse {
            return self.generate(password);
        }

        let mut cache = self.cache.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(ref cached) = *cache {
            return Ok(cached.clone());
        }

        let pair = self.generate(password)?;
        debug!("Caching salt for the lifetime of the client");
        *cache = Some(pair.clone());
        Ok(pair)
    }

    fn generate(&self, password: &str) -> Result<SaltToken> {
        let salt = generate_salt(self.random.as_deref())?;
        Ok(SaltToken::derive(password, salt))
    }
}
