use crate::algorithm::Algorithm;
use crate::crypt::Crypt3;
use crate::error::{MalformedHashSnafu, Result};
use subtle::ConstantTimeEq;

/// Split `$<magic>$<salt>$...` into the rebuilt magic and the salt.
///
/// Anything before the first `$` is ignored. The salt may be empty, as in
/// `$1$$qRPK7m23GJusamGpoGLby/`.
fn parse_hash(hash: &str) -> Result<(String, &str)> {
    let mut segments = hash.split('$').skip(1);
    match (segments.next(), segments.next()) {
        (Some(id), Some(salt)) => Ok((format!("${id}$"), salt)),
        _ => MalformedHashSnafu { hash }.fail(),
    }
}

impl Crypt3 {
    /// Recompute `hash` for `password` and compare.
    ///
    /// Magic and salt are taken from `hash`; only the configured algorithm is
    /// used. The comparison is plain string equality and therefore not
    /// constant-time, see [`Crypt3::verify_constant_time`].
    pub fn verify(&self, password: &[u8], hash: &str) -> Result<bool> {
        Ok(self.recompute(password, hash)? == hash)
    }

    /// Like [`Crypt3::verify`], comparing the hash strings in constant time.
    pub fn verify_constant_time(&self, password: &[u8], hash: &str) -> Result<bool> {
        let computed = self.recompute(password, hash)?;
        Ok(computed.as_bytes().ct_eq(hash.as_bytes()).into())
    }

    fn recompute(&self, password: &[u8], hash: &str) -> Result<String> {
        let (magic, salt) = parse_hash(hash)?;
        tracing::debug!(algorithm = %self.algorithm(), %magic, "Verifying password");
        self.clone().with_magic(magic).hash_with_salt(password, salt)
    }
}

/// Check `password` against a stored crypt hash.
///
/// `algorithm` must be the one the hash was created with; the magic prefix
/// is not checked against it.
pub fn check(password: &[u8], hash: &str, algorithm: Algorithm) -> Result<bool> {
    Crypt3::new(algorithm)?.verify(password, hash)
}

/// Like [`check`], comparing in constant time.
pub fn check_constant_time(password: &[u8], hash: &str, algorithm: Algorithm) -> Result<bool> {
    Crypt3::new(algorithm)?.verify_constant_time(password, hash)
}
