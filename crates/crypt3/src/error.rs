use snafu::Snafu;

/// Convenience alias for results produced by this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors that can occur while hashing or verifying a password.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    /// The algorithm name is not one of the supported digests.
    #[snafu(display("Unsupported algorithm '{name}'"))]
    UnsupportedAlgorithm {
        /// Name as given by the caller.
        name: String,
    },

    /// The hash string has no salt segment.
    #[snafu(display("Malformed hash '{hash}', expected $<magic>$<salt>$<digest>"))]
    MalformedHash {
        /// The rejected hash string.
        hash: String,
    },

    /// The digest is too short for the crypt encoding.
    #[snafu(display("Digest of {len} bytes is shorter than the 16 bytes the encoder reads"))]
    DigestTooShort {
        /// Length of the offending digest in bytes.
        len: usize,
    },

    /// The salt contains the `$` separator.
    #[snafu(display("Salt '{salt}' must not contain '$'"))]
    InvalidSalt {
        /// The rejected salt.
        salt: String,
    },

    /// The OS entropy source failed while generating a salt.
    #[snafu(display("Failed to generate salt: {message}"))]
    SaltGeneration {
        /// Message from the entropy source.
        message: String,
    },
}
