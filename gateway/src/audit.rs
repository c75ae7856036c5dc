//! Audit Log Module
//!
//! Append-only, monotonically-indexed record of every state transition and
//! configuration change. Entries are structured records rather than
//! preformatted strings; display formatting belongs to whatever reads them.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Env, StdResult, Storage, Timestamp, Uint128};
use cw_storage_plus::{Item, Map};

// ============================================================================
// Data Structures
// ============================================================================

/// Operation recorded by an audit entry
#[cw_serde]
pub enum AuditOperation {
    SubmitRequest,
    MarkProcessing,
    CallbackCompleted,
    CallbackFailed,
    ClaimRefund,
    UpdateGateway,
    UpdateBaseFee,
    SetRateLimit,
    WithdrawFees,
    Pause,
    Unpause,
    ProposeOwner,
    AcceptOwner,
    CancelOwnerProposal,
}

impl AuditOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditOperation::SubmitRequest => "submit_request",
            AuditOperation::MarkProcessing => "mark_processing",
            AuditOperation::CallbackCompleted => "callback_completed",
            AuditOperation::CallbackFailed => "callback_failed",
            AuditOperation::ClaimRefund => "claim_refund",
            AuditOperation::UpdateGateway => "update_gateway",
            AuditOperation::UpdateBaseFee => "update_base_fee",
            AuditOperation::SetRateLimit => "set_rate_limit",
            AuditOperation::WithdrawFees => "withdraw_fees",
            AuditOperation::Pause => "pause",
            AuditOperation::Unpause => "unpause",
            AuditOperation::ProposeOwner => "propose_owner",
            AuditOperation::AcceptOwner => "accept_owner",
            AuditOperation::CancelOwnerProposal => "cancel_owner_proposal",
        }
    }
}

/// Immutable audit record
#[cw_serde]
pub struct AuditEntry {
    /// Dense monotonic id starting at 0
    pub id: u64,
    /// What happened
    pub operation: AuditOperation,
    /// Who triggered it
    pub actor: Addr,
    /// The request involved, if any
    pub request_id: Option<u64>,
    /// The fee amount involved, if any
    pub amount: Option<Uint128>,
    /// Block time of the entry
    pub timestamp: Timestamp,
}

// ============================================================================
// Storage
// ============================================================================

/// Number of audit entries written so far (also the next entry id)
pub const AUDIT_COUNT: Item<u64> = Item::new("audit_count");

/// Audit entries
/// Key: entry id, Value: AuditEntry
pub const AUDIT_ENTRIES: Map<u64, AuditEntry> = Map::new("audit_entries");

// ============================================================================
// Append / Read
// ============================================================================

/// Append an audit entry and return its id.
///
/// Fails only on storage errors; entries are never mutated or removed.
pub fn append(
    storage: &mut dyn Storage,
    env: &Env,
    operation: AuditOperation,
    actor: &Addr,
    request_id: Option<u64>,
    amount: Option<Uint128>,
) -> StdResult<u64> {
    let id = AUDIT_COUNT.may_load(storage)?.unwrap_or(0);

    let entry = AuditEntry {
        id,
        operation,
        actor: actor.clone(),
        request_id,
        amount,
        timestamp: env.block.time,
    };

    AUDIT_ENTRIES.save(storage, id, &entry)?;
    AUDIT_COUNT.save(storage, &(id + 1))?;

    Ok(id)
}

/// Load a single audit entry.
pub fn get(storage: &dyn Storage, id: u64) -> StdResult<Option<AuditEntry>> {
    AUDIT_ENTRIES.may_load(storage, id)
}

/// Number of entries written so far.
pub fn count(storage: &dyn Storage) -> StdResult<u64> {
    Ok(AUDIT_COUNT.may_load(storage)?.unwrap_or(0))
}
