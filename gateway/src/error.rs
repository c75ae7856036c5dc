//! Error types for the Cipher Gateway contract
//!
//! Every precondition failure surfaces as a `ContractError` variant; the host
//! aborts the call and rolls back all writes, so no partial state survives a
//! failed call.

use cosmwasm_std::{OverflowError, StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    /// Escrow arithmetic must never underflow or overflow; hitting this is a
    /// programming error, not a user-facing condition.
    #[error("{0}")]
    Overflow(#[from] OverflowError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Unauthorized: only owner can perform this action")]
    Unauthorized,

    #[error("Unauthorized: only the gateway can deliver callbacks")]
    UnauthorizedGateway,

    #[error("Unauthorized: only pending owner can accept")]
    UnauthorizedPendingOwner,

    #[error("Unauthorized: only the requester can reclaim a failed request")]
    UnauthorizedRefund,

    // ========================================================================
    // Owner Transfer Errors
    // ========================================================================

    #[error("No pending owner change")]
    NoPendingOwner,

    #[error("Timelock not expired: {remaining_seconds} seconds remaining")]
    TimelockNotExpired { remaining_seconds: u64 },

    // ========================================================================
    // Gateway State Errors
    // ========================================================================

    #[error("Gateway is paused")]
    ContractPaused,

    #[error("Request not found: {id}")]
    RequestNotFound { id: u64 },

    #[error("Invalid state for request {id}: {status}")]
    InvalidState { id: u64, status: String },

    // ========================================================================
    // Submission Errors
    // ========================================================================

    #[error("Insufficient fee: expected at least {expected}, got {got}")]
    InsufficientFee { expected: Uint128, got: Uint128 },

    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("Rate limited: {operation} allows {max_calls} calls per {window_seconds} seconds")]
    RateLimited {
        operation: String,
        max_calls: u32,
        window_seconds: u64,
    },

    // ========================================================================
    // Refund Errors
    // ========================================================================

    #[error("Refund already claimed for request {id}")]
    AlreadyRefunded { id: u64 },

    #[error("Request {id} is not eligible for refund: neither failed nor timed out")]
    NotEligible { id: u64 },

    // ========================================================================
    // Fee Withdrawal Errors
    // ========================================================================

    #[error("No accrued fees to withdraw")]
    NoFeesToWithdraw,

    // ========================================================================
    // Configuration Errors
    // ========================================================================

    #[error("Invalid rate limit config: {reason}")]
    InvalidRateLimitConfig { reason: String },
}
