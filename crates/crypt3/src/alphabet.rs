use crate::error::{Result, SaltGenerationSnafu};

/// Custom base64 alphabet (itoa64) used by crypt(3).
///
/// Differs from standard base64 by starting with `./` instead of `A-Za-z`.
/// The order is part of the hash format.
pub const ITOA64: &[u8; 64] = b"./0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Salt length used when the caller does not supply a salt.
pub const DEFAULT_SALT_LEN: usize = 8;

/// Append `n` 6-bit groups of `v` to `out`, least significant first.
pub(crate) fn to64(out: &mut String, mut v: u32, n: usize) {
    for _ in 0..n {
        out.push(char::from(ITOA64[(v & 0x3f) as usize]));
        v >>= 6;
    }
}

/// Generate a random salt of `length` itoa64 characters.
///
/// Each character takes the low 6 bits of one byte from the OS entropy
/// source, which keeps every symbol uniformly distributed.
pub fn generate_salt(length: usize) -> Result<String> {
    let mut bytes = vec![0u8; length];
    getrandom::fill(&mut bytes).map_err(|e| {
        SaltGenerationSnafu {
            message: e.to_string(),
        }
        .build()
    })?;

    Ok(bytes
        .iter()
        .map(|b| char::from(ITOA64[usize::from(b & 0x3f)]))
        .collect())
}
