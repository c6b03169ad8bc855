#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Secp256r1Error {
    InvalidSecretKey,
    InvalidYCoordinate,
}
