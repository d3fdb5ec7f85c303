#![warn(missing_docs)]

//! A salted, 1000-round crypt(3) password hash over several digest algorithms.
//!
//! This crate implements the FreeBSD MD5 crypt construction used by the
//! system `crypt(3)` for `$1$` hashes and by Apache for `$apr1$` hashes,
//! generalized so that md5, sha1, sha256, sha384, sha512 or rmd160 can drive
//! it. Only md5 output is understood by other implementations.
//!
//! Hash strings have the format `<magic><salt>$<22 characters>`.
//!
//! # Example
//!
//! ```
//! use crypt3::{Algorithm, DEFAULT_MAGIC, check, crypt};
//!
//! # fn main() -> Result<(), crypt3::Error> {
//! // Hash with a random 8-character salt
//! let hash = crypt(b"password123", Algorithm::Md5, None, DEFAULT_MAGIC)?;
//!
//! // Verify a candidate
//! assert!(check(b"password123", &hash, Algorithm::Md5)?);
//! assert!(!check(b"password124", &hash, Algorithm::Md5)?);
//!
//! // Fixed salt, the classic reference value
//! assert_eq!(
//!     crypt(b"", Algorithm::Md5, Some(""), DEFAULT_MAGIC)?,
//!     "$1$$qRPK7m23GJusamGpoGLby/"
//! );
//! # Ok(())
//! # }
//! ```

mod algorithm;
mod alphabet;
mod crypt;
mod encode;
mod engine;
mod error;
mod verify;

pub use algorithm::Algorithm;
pub use alphabet::{DEFAULT_SALT_LEN, ITOA64, generate_salt};
pub use crypt::{Crypt3, DEFAULT_MAGIC, ROUNDS, crypt};
pub use encode::{ENCODED_LEN, MIN_DIGEST_LEN, encode};
pub use engine::{DigestBytes, DigestState, one_shot};
pub use error::{Error, Result};
pub use verify::{check, check_constant_time};
