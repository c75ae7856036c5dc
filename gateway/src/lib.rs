//! Cipher Gateway Contract - Escrowed Request/Fulfillment for Confidential Compute
//!
//! A caller escrows a fee and submits an opaque encrypted payload. A trusted
//! off-chain worker (the "gateway") later delivers the result via callback.
//! If the worker never responds within the timeout bound, the escrowed fee
//! flows back to the requester.
//!
//! # Request Flow
//! 1. Caller sends `SubmitRequest` with the fee attached; request is `Pending`
//! 2. Gateway optionally marks it `Processing`, then delivers `Callback`
//! 3. On success the request is `Completed` and the fee accrues to the owner
//! 4. On failure (or silence past the timeout) `ClaimRefund` returns the fee
//!
//! # Security
//! - Only the configured gateway identity may deliver callbacks
//! - Status guards make duplicate callbacks and double refunds impossible
//! - Per-caller fixed-window rate limiting on submissions
//! - Append-only audit log over every state transition and config change
//! - Emergency pause functionality

pub mod audit;
pub mod contract;
pub mod error;
mod execute;
pub mod msg;
mod query;
pub mod rate_limit;
pub mod state;

pub use common::EncryptedPayload;

pub use crate::error::ContractError;
pub use crate::rate_limit::{RateLimitConfig, OP_SUBMIT};
pub use crate::state::{DecryptionRequest, RequestStatus, REQUEST_TIMEOUT};
