//! Opaque encrypted payload handle.
//!
//! The gateway contract never inspects ciphertext. Payloads are produced and
//! consumed by the off-chain encryption oracle; on-chain they are stored and
//! passed through unchanged.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Binary;

/// Ciphertext handle submitted with a decryption request.
///
/// The contract only requires that a payload can be stored, returned in
/// queries, and checked for emptiness. Its internal structure belongs to the
/// encryption scheme, not to this contract.
#[cw_serde]
pub struct EncryptedPayload(pub Binary);

impl EncryptedPayload {
    pub fn new(data: impl Into<Binary>) -> Self {
        Self(data.into())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn as_slice(&self) -> &[u8] {
        self.0.as_slice()
    }

    pub fn into_inner(self) -> Binary {
        self.0
    }
}

impl From<Binary> for EncryptedPayload {
    fn from(data: Binary) -> Self {
        Self(data)
    }
}

impl From<Vec<u8>> for EncryptedPayload {
    fn from(data: Vec<u8>) -> Self {
        Self(Binary::from(data))
    }
}
