//! Message types for the Cipher Gateway contract
//!
//! This module defines all messages for instantiation, execution, and queries,
//! together with their response types.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Timestamp, Uint128};

use common::EncryptedPayload;

use crate::audit::AuditEntry;
use crate::rate_limit::RateLimitConfig;
use crate::state::DecryptionRequest;

// ============================================================================
// Instantiate & Migrate
// ============================================================================

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Instantiate message
#[cw_serde]
pub struct InstantiateMsg {
    /// Owner address for contract management
    pub owner: String,
    /// Trusted off-chain worker authorized to deliver callbacks
    pub gateway: String,
    /// Minimum fee required to submit a request (must be positive)
    pub base_fee: Uint128,
    /// Native denom used for request fees (e.g. "uluna")
    pub fee_denom: String,
    /// Overrides the default submission rate limit (10 calls per hour)
    pub submit_rate_limit: Option<RateLimitConfig>,
}

// ============================================================================
// Execute Messages
// ============================================================================

/// Execute messages
#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Request Lifecycle
    // ========================================================================
    /// Submit a decryption request
    ///
    /// Authorization: Anyone (rate limited per caller)
    ///
    /// The fee is escrowed from the attached funds: exactly one coin of the
    /// configured denom with amount >= base_fee. The new request id is
    /// returned in the `request_id` event attribute.
    SubmitRequest {
        /// Opaque ciphertext for the off-chain worker
        payload: EncryptedPayload,
    },

    /// Mark a pending request as picked up
    ///
    /// Authorization: Gateway only
    MarkProcessing {
        /// Request to transition to Processing
        request_id: u64,
    },

    /// Deliver the result for a request
    ///
    /// Authorization: Gateway only
    ///
    /// Resolves a Pending or Processing request to Completed or Failed. A
    /// second callback for the same request is rejected, whatever the
    /// `success` flag. No funds move here: a completed request's fee accrues
    /// to the owner, a failed request's fee stays refundable.
    Callback {
        /// Request being resolved
        request_id: u64,
        /// Result bytes from the worker
        response: Binary,
        /// Whether the computation succeeded
        success: bool,
    },

    /// Reclaim the escrowed fee of a failed or timed-out request
    ///
    /// Authorization: The requester for a failed request; anyone once the
    /// request has timed out. Funds always flow to the original requester.
    ClaimRefund {
        /// Request to refund
        request_id: u64,
    },

    // ========================================================================
    // Configuration
    // ========================================================================
    /// Replace the trusted gateway identity
    ///
    /// Authorization: Owner only
    UpdateGatewayAddress {
        /// New gateway address
        gateway: String,
    },

    /// Change the minimum submission fee
    ///
    /// Authorization: Owner only
    UpdateBaseFee {
        /// New base fee (must be positive)
        base_fee: Uint128,
    },

    /// Configure rate limiting for an operation
    ///
    /// Authorization: Owner only
    SetRateLimit {
        /// Operation key (e.g. "submit")
        operation: String,
        config: RateLimitConfig,
    },

    /// Withdraw fees accrued from completed requests
    ///
    /// Authorization: Owner only
    WithdrawFees {},

    // ========================================================================
    // Owner Operations
    // ========================================================================
    /// Pause the gateway (blocks submissions and callbacks)
    ///
    /// Authorization: Owner only
    Pause {},

    /// Unpause the gateway
    ///
    /// Authorization: Owner only
    Unpause {},

    /// Propose a new owner (starts 7-day timelock)
    ///
    /// Authorization: Owner only
    ProposeOwner {
        /// Proposed owner address
        new_owner: String,
    },

    /// Accept the pending owner role after the timelock
    ///
    /// Authorization: Pending owner only
    AcceptOwner {},

    /// Cancel a pending owner proposal
    ///
    /// Authorization: Owner only
    CancelOwnerProposal {},
}

// ============================================================================
// Query Messages
// ============================================================================

/// Query messages
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Contract configuration
    #[returns(ConfigResponse)]
    Config {},

    /// Gateway statistics
    #[returns(StatsResponse)]
    Stats {},

    /// A single request record
    #[returns(RequestResponse)]
    Request { request_id: u64 },

    /// Paginated request records
    #[returns(RequestsResponse)]
    Requests {
        start_after: Option<u64>,
        limit: Option<u32>,
    },

    /// Whether a request has exceeded the timeout bound
    #[returns(HasTimedOutResponse)]
    HasTimedOut { request_id: u64 },

    /// Seconds until a request becomes refund-eligible by timeout
    #[returns(TimeUntilTimeoutResponse)]
    TimeUntilTimeout { request_id: u64 },

    /// Rate limit configuration for an operation
    #[returns(RateLimitResponse)]
    RateLimit { operation: String },

    /// Remaining admissible calls for a caller within the current window
    #[returns(RemainingCallsResponse)]
    RemainingCalls { caller: String, operation: String },

    /// A single audit entry
    #[returns(AuditEntryResponse)]
    AuditEntry { id: u64 },

    /// Paginated audit entries
    #[returns(AuditEntriesResponse)]
    AuditEntries {
        start_after: Option<u64>,
        limit: Option<u32>,
    },

    /// Number of audit entries written so far
    #[returns(AuditCountResponse)]
    AuditCount {},

    /// Escrow accounting totals
    #[returns(EscrowInfoResponse)]
    EscrowInfo {},

    /// Pending owner proposal (if any)
    #[returns(PendingOwnerResponse)]
    PendingOwner {},
}

// ============================================================================
// Query Responses
// ============================================================================

#[cw_serde]
pub struct ConfigResponse {
    pub owner: Addr,
    pub gateway: Addr,
    pub base_fee: Uint128,
    pub fee_denom: String,
    pub paused: bool,
}

#[cw_serde]
pub struct StatsResponse {
    pub total_requests: u64,
    pub total_completed: u64,
    pub total_failed: u64,
    pub total_refunded: u64,
}

#[cw_serde]
pub struct RequestResponse {
    pub request: DecryptionRequest,
}

#[cw_serde]
pub struct RequestsResponse {
    pub requests: Vec<DecryptionRequest>,
}

#[cw_serde]
pub struct HasTimedOutResponse {
    pub request_id: u64,
    pub timed_out: bool,
}

#[cw_serde]
pub struct TimeUntilTimeoutResponse {
    pub request_id: u64,
    /// Zero once the timeout bound has elapsed
    pub remaining_seconds: u64,
}

#[cw_serde]
pub struct RateLimitResponse {
    pub operation: String,
    /// None when the operation is unthrottled
    pub config: Option<RateLimitConfig>,
}

#[cw_serde]
pub struct RemainingCallsResponse {
    pub caller: Addr,
    pub operation: String,
    /// None when the operation is unthrottled or the limit is disabled
    pub remaining: Option<u32>,
}

#[cw_serde]
pub struct AuditEntryResponse {
    pub entry: AuditEntry,
}

#[cw_serde]
pub struct AuditEntriesResponse {
    pub entries: Vec<AuditEntry>,
}

#[cw_serde]
pub struct AuditCountResponse {
    pub count: u64,
}

#[cw_serde]
pub struct EscrowInfoResponse {
    /// Sum of escrowed fees over all requests not yet refunded and not yet
    /// withdrawn by the owner
    pub total_escrowed: Uint128,
    /// Fees of completed requests, withdrawable by the owner
    pub accrued_fees: Uint128,
}

#[cw_serde]
pub struct PendingOwnerResponse {
    pub new_owner: Option<Addr>,
    pub execute_after: Option<Timestamp>,
}
