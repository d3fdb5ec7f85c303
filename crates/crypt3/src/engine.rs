//! Incremental digest state over the supported algorithms.

use crate::algorithm::Algorithm;
use md5::Md5;
use ripemd::Ripemd160;
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha384, Sha512};
use zeroize::Zeroizing;

/// Finalized digest bytes, wiped on drop.
pub type DigestBytes = Zeroizing<Vec<u8>>;

/// A digest accumulator for one [`Algorithm`].
///
/// Created fresh for every accumulation pass and consumed by
/// [`DigestState::finalize`].
#[derive(Clone)]
pub enum DigestState {
    /// MD5 accumulator.
    Md5(Md5),
    /// SHA-1 accumulator.
    Sha1(Sha1),
    /// SHA-256 accumulator.
    Sha256(Sha256),
    /// SHA-384 accumulator.
    Sha384(Sha384),
    /// SHA-512 accumulator.
    Sha512(Sha512),
    /// RIPEMD-160 accumulator.
    Rmd160(Ripemd160),
}

impl DigestState {
    /// Start an empty accumulator.
    pub fn new(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::Md5 => DigestState::Md5(Md5::new()),
            Algorithm::Sha1 => DigestState::Sha1(Sha1::new()),
            Algorithm::Sha256 => DigestState::Sha256(Sha256::new()),
            Algorithm::Sha384 => DigestState::Sha384(Sha384::new()),
            Algorithm::Sha512 => DigestState::Sha512(Sha512::new()),
            Algorithm::Rmd160 => DigestState::Rmd160(Ripemd160::new()),
        }
    }

    /// Feed more bytes.
    pub fn update(&mut self, bytes: impl AsRef<[u8]>) {
        let bytes = bytes.as_ref();
        match self {
            DigestState::Md5(d) => d.update(bytes),
            DigestState::Sha1(d) => d.update(bytes),
            DigestState::Sha256(d) => d.update(bytes),
            DigestState::Sha384(d) => d.update(bytes),
            DigestState::Sha512(d) => d.update(bytes),
            DigestState::Rmd160(d) => d.update(bytes),
        }
    }

    /// Finish the accumulator; the result is `output_len()` bytes of its algorithm.
    pub fn finalize(self) -> DigestBytes {
        let bytes = match self {
            DigestState::Md5(d) => d.finalize().to_vec(),
            DigestState::Sha1(d) => d.finalize().to_vec(),
            DigestState::Sha256(d) => d.finalize().to_vec(),
            DigestState::Sha384(d) => d.finalize().to_vec(),
            DigestState::Sha512(d) => d.finalize().to_vec(),
            DigestState::Rmd160(d) => d.finalize().to_vec(),
        };
        Zeroizing::new(bytes)
    }
}

/// Digest `bytes` in one go.
pub fn one_shot(algorithm: Algorithm, bytes: impl AsRef<[u8]>) -> DigestBytes {
    let mut state = DigestState::new(algorithm);
    state.update(bytes);
    state.finalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(bytes: &[u8]) -> String {
        bytes.iter().map(|b| format!("{b:02x}")).collect()
    }

    #[test]
    fn test_output_len_matches_algorithm() {
        for algorithm in Algorithm::ALL {
            let digest = one_shot(algorithm, b"abc");
            assert_eq!(digest.len(), algorithm.output_len(), "{algorithm}");
        }
    }

    #[test]
    fn test_known_digests_of_abc() {
        assert_eq!(
            hex(&one_shot(Algorithm::Md5, b"abc")),
            "900150983cd24fb0d6963f7d28e17f72"
        );
        assert_eq!(
            hex(&one_shot(Algorithm::Sha1, b"abc")),
            "a9993e364706816aba3e25717850c26c9cd0d89d"
        );
        assert_eq!(
            hex(&one_shot(Algorithm::Sha256, b"abc")),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
        assert_eq!(
            hex(&one_shot(Algorithm::Rmd160, b"abc")),
            "8eb208f7e05d987a9b044a8e98c6b087f15a0bfc"
        );
    }

    #[test]
    fn test_incremental_matches_one_shot() {
        for algorithm in Algorithm::ALL {
            let mut state = DigestState::new(algorithm);
            state.update(b"pass");
            state.update(b"");
            state.update([b'w', b'o', b'r', b'd']);
            assert_eq!(*state.finalize(), *one_shot(algorithm, b"password"));
        }
    }
}
