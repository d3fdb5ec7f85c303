use crate::error::{Error, Result, UnsupportedAlgorithmSnafu};
use std::str::FromStr;

/// Digest algorithm driving the crypt construction.
///
/// Only [`Algorithm::Md5`] is compatible with the system crypt(3); the other
/// variants run the same construction over a different digest and are not
/// understood by other implementations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// MD5, 16-byte output.
    #[default]
    Md5,
    /// SHA-1, 20-byte output.
    Sha1,
    /// SHA-256, 32-byte output.
    Sha256,
    /// SHA-384, 48-byte output.
    Sha384,
    /// SHA-512, 64-byte output.
    Sha512,
    /// RIPEMD-160, 20-byte output.
    Rmd160,
}

impl Algorithm {
    /// Every supported algorithm.
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Md5,
        Algorithm::Sha1,
        Algorithm::Sha256,
        Algorithm::Sha384,
        Algorithm::Sha512,
        Algorithm::Rmd160,
    ];

    /// Lowercase name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Md5 => "md5",
            Algorithm::Sha1 => "sha1",
            Algorithm::Sha256 => "sha256",
            Algorithm::Sha384 => "sha384",
            Algorithm::Sha512 => "sha512",
            Algorithm::Rmd160 => "rmd160",
        }
    }

    /// Raw digest length in bytes.
    pub const fn output_len(self) -> usize {
        match self {
            Algorithm::Md5 => 16,
            Algorithm::Sha1 | Algorithm::Rmd160 => 20,
            Algorithm::Sha256 => 32,
            Algorithm::Sha384 => 48,
            Algorithm::Sha512 => 64,
        }
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let lowered = s.to_lowercase();
        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.name() == lowered)
            .ok_or_else(|| UnsupportedAlgorithmSnafu { name: s }.build())
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_algorithm_from_str() {
        assert_eq!(Algorithm::from_str("md5").unwrap(), Algorithm::Md5);
        assert_eq!(Algorithm::from_str("MD5").unwrap(), Algorithm::Md5);
        assert_eq!(Algorithm::from_str("sha1").unwrap(), Algorithm::Sha1);
        assert_eq!(Algorithm::from_str("sha256").unwrap(), Algorithm::Sha256);
        assert_eq!(Algorithm::from_str("Sha384").unwrap(), Algorithm::Sha384);
        assert_eq!(Algorithm::from_str("sha512").unwrap(), Algorithm::Sha512);
        assert_eq!(Algorithm::from_str("rmd160").unwrap(), Algorithm::Rmd160);
    }

    #[test]
    fn test_unknown_algorithm() {
        let err = Algorithm::from_str("whirlpool").unwrap_err();
        assert!(matches!(err, Error::UnsupportedAlgorithm { ref name } if name == "whirlpool"));
        assert!(Algorithm::from_str("").is_err());
        assert!(Algorithm::from_str("sha").is_err());
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.to_string().parse::<Algorithm>().unwrap(), algorithm);
        }
    }

    #[test]
    fn test_default_is_md5() {
        assert_eq!(Algorithm::default(), Algorithm::Md5);
    }
}
