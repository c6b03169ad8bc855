//! Self-contained ECDSA over NIST P-256 (secp256r1): signature
//! verification, public key recovery, key derivation and Ethereum-style
//! address derivation. All integers cross the API as raw big-endian byte
//! arrays; message digests are supplied by the caller. Signing is out of
//! scope.

mod curve;
mod ecdsa;
mod errors;
mod field;
mod jacobian;
mod mul;
mod uncompressed_point;

pub use curve::*;
pub use ecdsa::*;
pub use errors::*;
pub use uncompressed_point::*;

pub(crate) use jacobian::*;
pub(crate) use mul::*;
