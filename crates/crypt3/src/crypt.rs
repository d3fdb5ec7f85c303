//! The crypt(3) MD5-style construction, generalized over the digest algorithm.
//!
//! This follows the FreeBSD 3.0 `crypt_md5()` function by Poul-Henning Kamp
//! (Beer-Ware License), which is also the basis of Apache's APR1-MD5. With
//! [`Algorithm::Md5`] and the `$1$` magic the output matches the system
//! crypt(3); with `$apr1$` it matches Apache htpasswd.
//!
//! # Security Warning
//!
//! 1000 rounds of a fast digest offer little protection against offline
//! cracking. Use this for compatibility with existing hashes only.

use crate::algorithm::Algorithm;
use crate::alphabet::{DEFAULT_SALT_LEN, generate_salt};
use crate::encode::{MIN_DIGEST_LEN, encode};
use crate::engine::{DigestBytes, DigestState, one_shot};
use crate::error::{DigestTooShortSnafu, InvalidSaltSnafu, Result};
use zeroize::Zeroizing;

/// Magic prefix of the standard crypt(3) MD5 scheme.
pub const DEFAULT_MAGIC: &str = "$1$";

/// Number of stretching rounds. Fixed by the format.
pub const ROUNDS: u32 = 1000;

/// Leading bytes of H(password, salt, password) cycled into the first pass,
/// whatever the digest length.
const MIXIN_CYCLE: usize = 16;

/// A validated hashing configuration.
///
/// ```
/// use crypt3::{Algorithm, Crypt3};
///
/// # fn main() -> Result<(), crypt3::Error> {
/// let hasher = Crypt3::new(Algorithm::Md5)?.with_magic("$apr1$");
/// let hash = hasher.hash_with_salt(b"hello", "xlWep/gn")?;
/// assert_eq!(hash, "$apr1$xlWep/gn$6UNiHq3WE714EKfeH2X5c.");
/// assert!(hasher.verify(b"hello", &hash)?);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crypt3 {
    algorithm: Algorithm,
    magic: String,
    salt_len: usize,
}

impl Default for Crypt3 {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::Md5,
            magic: DEFAULT_MAGIC.to_string(),
            salt_len: DEFAULT_SALT_LEN,
        }
    }
}

impl Crypt3 {
    /// Configure hashing with `algorithm`, the `$1$` magic and 8-character salts.
    ///
    /// Fails with [`Error::DigestTooShort`](crate::Error::DigestTooShort) when
    /// the digest cannot feed the encoder.
    pub fn new(algorithm: Algorithm) -> Result<Self> {
        let len = algorithm.output_len();
        snafu::ensure!(len >= MIN_DIGEST_LEN, DigestTooShortSnafu { len });
        Ok(Self {
            algorithm,
            ..Self::default()
        })
    }

    /// Use a different magic prefix.
    pub fn with_magic(mut self, magic: impl Into<String>) -> Self {
        self.magic = magic.into();
        self
    }

    /// Use a different length for generated salts.
    pub fn with_salt_len(mut self, salt_len: usize) -> Self {
        self.salt_len = salt_len;
        self
    }

    /// Configured digest algorithm.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Configured magic prefix.
    pub fn magic(&self) -> &str {
        &self.magic
    }

    /// Length of generated salts.
    pub fn salt_len(&self) -> usize {
        self.salt_len
    }

    /// Hash `password` with a freshly generated salt.
    pub fn hash(&self, password: &[u8]) -> Result<String> {
        let salt = generate_salt(self.salt_len)?;
        self.hash_with_salt(password, &salt)
    }

    /// Hash `password` with the given salt.
    ///
    /// Returns `<magic><salt>$<22 characters>`.
    pub fn hash_with_salt(&self, password: &[u8], salt: &str) -> Result<String> {
        snafu::ensure!(!salt.contains('$'), InvalidSaltSnafu { salt });
        tracing::debug!(
            algorithm = %self.algorithm,
            magic = %self.magic,
            salt_len = salt.len(),
            "Hashing password"
        );

        let digest = stretch(
            self.algorithm,
            password,
            self.magic.as_bytes(),
            salt.as_bytes(),
        );
        let encoded = encode(&digest)?;

        Ok(format!("{}{}${}", self.magic, salt, encoded))
    }
}

/// Run the mixing passes and the stretching rounds, returning the final digest.
fn stretch(algorithm: Algorithm, password: &[u8], magic: &[u8], salt: &[u8]) -> DigestBytes {
    // The password first, since that is what is most unknown
    let mut ctx = DigestState::new(algorithm);
    ctx.update(password);
    ctx.update(magic);
    ctx.update(salt);

    // As many bytes of H(password, salt, password), cycling its first 16
    let seed = Zeroizing::new([password, salt, password].concat());
    let mixin = one_shot(algorithm, &*seed);
    for byte in mixin
        .iter()
        .take(MIXIN_CYCLE)
        .cycle()
        .take(password.len())
    {
        ctx.update([*byte]);
    }

    // Always the first password byte, never the one at `i`
    let mut i = password.len();
    while i != 0 {
        if i & 1 != 0 {
            ctx.update([0u8]);
        } else {
            ctx.update(&password[..1]);
        }
        i >>= 1;
    }

    let mut digest = ctx.finalize();

    for round in 0..ROUNDS {
        let mut ctx = DigestState::new(algorithm);

        if round & 1 != 0 {
            ctx.update(password);
        } else {
            ctx.update(&*digest);
        }
        if round % 3 != 0 {
            ctx.update(salt);
        }
        if round % 7 != 0 {
            ctx.update(password);
        }
        if round & 1 != 0 {
            ctx.update(&*digest);
        } else {
            ctx.update(password);
        }

        digest = ctx.finalize();
    }
    tracing::trace!(%algorithm, rounds = ROUNDS, "Stretching finished");

    digest
}

/// Hash `password` the crypt(3) way.
///
/// A salt of [`DEFAULT_SALT_LEN`] characters is generated when `salt` is
/// `None`. The usual call is `crypt(password, Algorithm::Md5, None, DEFAULT_MAGIC)`.
pub fn crypt(
    password: &[u8],
    algorithm: Algorithm,
    salt: Option<&str>,
    magic: &str,
) -> Result<String> {
    let hasher = Crypt3::new(algorithm)?.with_magic(magic);
    match salt {
        Some(salt) => hasher.hash_with_salt(password, salt),
        None => hasher.hash(password),
    }
}
