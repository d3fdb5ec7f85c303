use crate::alphabet::to64;
use crate::error::{DigestTooShortSnafu, Result};
use snafu::OptionExt;

/// Length of the encoded digest in a hash string.
pub const ENCODED_LEN: usize = 22;

/// Number of leading digest bytes the encoding reads.
pub const MIN_DIGEST_LEN: usize = 16;

/// Byte triplets packed into four characters each.
///
/// Byte 11 is left out here and encoded on its own at the end.
const TRIPLETS: [[usize; 3]; 5] = [[0, 6, 12], [1, 7, 13], [2, 8, 14], [3, 9, 15], [4, 10, 5]];

/// Encode a final digest into its 22-character crypt form.
///
/// Only the first 16 bytes are read, so the longer digests of the SHA-2
/// variants contribute nothing beyond byte 15. The ordering follows `to64()`
/// in the FreeBSD and APR crypt implementations:
/// ```c
/// l = (final[ 0]<<16) | (final[ 6]<<8) | final[12]; to64(p, l, 4); p += 4;
/// l = (final[ 1]<<16) | (final[ 7]<<8) | final[13]; to64(p, l, 4); p += 4;
/// l = (final[ 2]<<16) | (final[ 8]<<8) | final[14]; to64(p, l, 4); p += 4;
/// l = (final[ 3]<<16) | (final[ 9]<<8) | final[15]; to64(p, l, 4); p += 4;
/// l = (final[ 4]<<16) | (final[10]<<8) | final[ 5]; to64(p, l, 4); p += 4;
/// l = final[11];                                     to64(p, l, 2); p += 2;
/// ```
pub fn encode(digest: &[u8]) -> Result<String> {
    let digest: &[u8; MIN_DIGEST_LEN] = digest
        .get(..MIN_DIGEST_LEN)
        .and_then(|head| head.try_into().ok())
        .context(DigestTooShortSnafu { len: digest.len() })?;

    let mut result = String::with_capacity(ENCODED_LEN);
    for [a, b, c] in TRIPLETS {
        to64(
            &mut result,
            u32::from(digest[a]) << 16 | u32::from(digest[b]) << 8 | u32::from(digest[c]),
            4,
        );
    }
    to64(&mut result, u32::from(digest[11]), 2);

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_encode_zeroes() {
        assert_eq!(encode(&[0u8; 16]).unwrap(), "......................");
    }

    #[test]
    fn test_encode_all_ones() {
        assert_eq!(encode(&[0xff; 16]).unwrap(), "zzzzzzzzzzzzzzzzzzzzz1");
    }

    #[test]
    fn test_encode_byte_positions() {
        let mut digest = [0u8; 16];
        digest[12] = 1;
        assert_eq!(encode(&digest).unwrap(), "/.....................");

        let mut digest = [0u8; 16];
        digest[11] = 2;
        assert_eq!(encode(&digest).unwrap(), "....................0.");

        let mut digest = [0u8; 16];
        digest[5] = 3;
        assert_eq!(encode(&digest).unwrap(), "................1.....");
    }

    #[test]
    fn test_encode_ignores_bytes_past_fifteen() {
        let mut long = [0x5au8; 64];
        let short = encode(&long[..16]).unwrap();
        long[16..].fill(0);
        assert_eq!(encode(&long).unwrap(), short);
        assert_eq!(short.len(), ENCODED_LEN);
    }

    #[test]
    fn test_encode_rejects_short_digest() {
        let err = encode(&[0u8; 15]).unwrap_err();
        assert!(matches!(err, Error::DigestTooShort { len: 15 }));
        assert!(encode(&[]).is_err());
    }
}
