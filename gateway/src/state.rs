//! State definitions for the Cipher Gateway contract
//!
//! This module defines all storage structures and state maps for the gateway,
//! including the request lifecycle records and the escrow accounting items.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Binary, Timestamp, Uint128};
use cw_storage_plus::{Item, Map};

use common::EncryptedPayload;

// ============================================================================
// Core Configuration
// ============================================================================

/// Contract configuration
#[cw_serde]
pub struct Config {
    /// Owner address for contract management
    pub owner: Addr,
    /// The trusted off-chain worker authorized to deliver results
    pub gateway: Addr,
    /// Minimum fee required to submit a request (in `fee_denom`)
    pub base_fee: Uint128,
    /// Native denom used for request fees
    pub fee_denom: String,
    /// Whether the gateway is currently paused
    pub paused: bool,
}

/// Pending owner change proposal
#[cw_serde]
pub struct PendingOwner {
    /// Proposed new owner address
    pub new_address: Addr,
    /// Block time when the change can be executed
    pub execute_after: Timestamp,
}

// ============================================================================
// Request Lifecycle
// ============================================================================

/// Lifecycle status of a decryption request
#[cw_serde]
pub enum RequestStatus {
    /// Submitted, awaiting the gateway worker
    Pending,
    /// Picked up by the gateway worker
    Processing,
    /// Result delivered successfully; fee is retained for the worker
    Completed,
    /// Worker reported failure; fee remains refundable to the requester
    Failed,
    /// Escrowed fee returned to the requester (terminal)
    Refunded,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Processing => "processing",
            RequestStatus::Completed => "completed",
            RequestStatus::Failed => "failed",
            RequestStatus::Refunded => "refunded",
        }
    }

    /// Whether a callback may still resolve this request.
    pub fn is_open(&self) -> bool {
        matches!(self, RequestStatus::Pending | RequestStatus::Processing)
    }
}

/// Decryption request record (one per submitted job)
#[cw_serde]
pub struct DecryptionRequest {
    /// Unique id, dense and monotonic starting at 0
    pub id: u64,
    /// Owner of the request; refunds always flow here
    pub requester: Addr,
    /// Opaque ciphertext handle, never inspected by this contract
    pub payload: EncryptedPayload,
    /// Block time of submission, used only for timeout computation
    pub submitted_at: Timestamp,
    /// Fee escrowed at submission; released in full on refund
    pub escrowed_fee: Uint128,
    /// Set exactly once, guards against double refund
    pub refund_claimed: bool,
    /// Current lifecycle status
    pub status: RequestStatus,
    /// Result bytes delivered by the gateway callback
    pub response_data: Option<Binary>,
}

impl DecryptionRequest {
    /// Whether the request has exceeded the timeout bound.
    ///
    /// Deliberately status-blind: a completed request can report `true` after
    /// enough time. Refund eligibility is gated separately so that a
    /// completed request is never refundable.
    pub fn has_timed_out(&self, now: Timestamp) -> bool {
        now.seconds() > self.submitted_at.seconds() + REQUEST_TIMEOUT
    }

    /// Seconds remaining until the timeout bound (0 once elapsed).
    pub fn time_until_timeout(&self, now: Timestamp) -> u64 {
        let deadline = self.submitted_at.seconds() + REQUEST_TIMEOUT;
        deadline.saturating_sub(now.seconds())
    }
}

/// Gateway statistics
#[cw_serde]
pub struct Stats {
    /// Total number of submitted requests
    pub total_requests: u64,
    /// Total number of requests completed by the gateway
    pub total_completed: u64,
    /// Total number of requests the gateway reported as failed
    pub total_failed: u64,
    /// Total number of refunded requests
    pub total_refunded: u64,
}

// ============================================================================
// Constants
// ============================================================================

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:cipher-gateway";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Seconds after submission until an unresolved request becomes
/// refund-eligible (24 hours)
pub const REQUEST_TIMEOUT: u64 = 86_400;

/// 7 days in seconds for owner change timelock
pub const OWNER_TIMELOCK_DURATION: u64 = 604_800;

// ============================================================================
// Core State Storage
// ============================================================================

/// Primary config storage
pub const CONFIG: Item<Config> = Item::new("config");

/// Pending owner proposal (if any)
pub const PENDING_OWNER: Item<PendingOwner> = Item::new("pending_owner");

/// Gateway statistics
pub const STATS: Item<Stats> = Item::new("stats");

/// Next request id (dense, monotonic, starts at 0)
pub const NEXT_REQUEST_ID: Item<u64> = Item::new("next_request_id");

/// Request records
/// Key: request id, Value: DecryptionRequest
pub const REQUESTS: Map<u64, DecryptionRequest> = Map::new("requests");

// ============================================================================
// Fee Ledger
// ============================================================================

/// Aggregate escrow balance: the sum of `escrowed_fee` over all requests that
/// have not been refunded and whose fee has not been withdrawn by the owner.
pub const TOTAL_ESCROWED: Item<Uint128> = Item::new("total_escrowed");

/// Fees accrued from completed requests, withdrawable by the owner.
/// Always <= TOTAL_ESCROWED.
pub const ACCRUED_FEES: Item<Uint128> = Item::new("accrued_fees");
