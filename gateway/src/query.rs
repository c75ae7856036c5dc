//! Query handlers for the Cipher Gateway contract.
//!
//! This module contains all query message handlers for retrieving contract
//! state. Timeout queries recompute lazily from the stored submission time;
//! there is no active timer anywhere.

use cosmwasm_std::{Deps, Env, Order, StdError, StdResult};
use cw_storage_plus::Bound;

use crate::audit;
use crate::msg::{
    AuditCountResponse, AuditEntriesResponse, AuditEntryResponse, ConfigResponse,
    EscrowInfoResponse, HasTimedOutResponse, PendingOwnerResponse, RateLimitResponse,
    RemainingCallsResponse, RequestResponse, RequestsResponse, StatsResponse,
    TimeUntilTimeoutResponse,
};
use crate::rate_limit::{self, RATE_LIMITS};
use crate::state::{
    ACCRUED_FEES, CONFIG, PENDING_OWNER, REQUESTS, STATS, TOTAL_ESCROWED,
};

// ============================================================================
// Core Queries
// ============================================================================

/// Query contract configuration.
pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        owner: config.owner,
        gateway: config.gateway,
        base_fee: config.base_fee,
        fee_denom: config.fee_denom,
        paused: config.paused,
    })
}

/// Query gateway statistics.
pub fn query_stats(deps: Deps) -> StdResult<StatsResponse> {
    let stats = STATS.load(deps.storage)?;
    Ok(StatsResponse {
        total_requests: stats.total_requests,
        total_completed: stats.total_completed,
        total_failed: stats.total_failed,
        total_refunded: stats.total_refunded,
    })
}

/// Query a pending owner proposal.
pub fn query_pending_owner(deps: Deps) -> StdResult<PendingOwnerResponse> {
    let pending = PENDING_OWNER.may_load(deps.storage)?;
    Ok(PendingOwnerResponse {
        new_owner: pending.as_ref().map(|p| p.new_address.clone()),
        execute_after: pending.map(|p| p.execute_after),
    })
}

// ============================================================================
// Request Queries
// ============================================================================

/// Query a single request record.
pub fn query_request(deps: Deps, request_id: u64) -> StdResult<RequestResponse> {
    let request = REQUESTS
        .may_load(deps.storage, request_id)?
        .ok_or_else(|| StdError::not_found(format!("request {request_id}")))?;
    Ok(RequestResponse { request })
}

/// Query paginated request records.
pub fn query_requests(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<RequestsResponse> {
    let limit = limit.unwrap_or(10).min(50) as usize;
    let start = start_after.map(Bound::exclusive);

    let requests = REQUESTS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| item.map(|(_, request)| request))
        .collect::<StdResult<Vec<_>>>()?;

    Ok(RequestsResponse { requests })
}

/// Query whether a request has exceeded the timeout bound.
///
/// Status-blind by design: a completed request reports `true` once enough
/// time has passed, yet is never refundable.
pub fn query_has_timed_out(deps: Deps, env: Env, request_id: u64) -> StdResult<HasTimedOutResponse> {
    let request = REQUESTS
        .may_load(deps.storage, request_id)?
        .ok_or_else(|| StdError::not_found(format!("request {request_id}")))?;
    Ok(HasTimedOutResponse {
        request_id,
        timed_out: request.has_timed_out(env.block.time),
    })
}

/// Query seconds until a request becomes refund-eligible by timeout.
pub fn query_time_until_timeout(
    deps: Deps,
    env: Env,
    request_id: u64,
) -> StdResult<TimeUntilTimeoutResponse> {
    let request = REQUESTS
        .may_load(deps.storage, request_id)?
        .ok_or_else(|| StdError::not_found(format!("request {request_id}")))?;
    Ok(TimeUntilTimeoutResponse {
        request_id,
        remaining_seconds: request.time_until_timeout(env.block.time),
    })
}

// ============================================================================
// Rate Limit Queries
// ============================================================================

/// Query the rate limit configuration for an operation.
pub fn query_rate_limit(deps: Deps, operation: String) -> StdResult<RateLimitResponse> {
    let config = RATE_LIMITS.may_load(deps.storage, &operation)?;
    Ok(RateLimitResponse { operation, config })
}

/// Query remaining admissible calls within the current window.
pub fn query_remaining_calls(
    deps: Deps,
    env: Env,
    caller: String,
    operation: String,
) -> StdResult<RemainingCallsResponse> {
    let caller = deps.api.addr_validate(&caller)?;
    let remaining = rate_limit::remaining_calls(deps.storage, env.block.time, &caller, &operation)
        .map_err(|e| StdError::generic_err(e.to_string()))?;
    Ok(RemainingCallsResponse {
        caller,
        operation,
        remaining,
    })
}

// ============================================================================
// Audit Queries
// ============================================================================

/// Query a single audit entry.
pub fn query_audit_entry(deps: Deps, id: u64) -> StdResult<AuditEntryResponse> {
    let entry = audit::get(deps.storage, id)?
        .ok_or_else(|| StdError::not_found(format!("audit entry {id}")))?;
    Ok(AuditEntryResponse { entry })
}

/// Query paginated audit entries.
pub fn query_audit_entries(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<AuditEntriesResponse> {
    let limit = limit.unwrap_or(10).min(50) as usize;
    let start = start_after.map(Bound::exclusive);

    let entries = audit::AUDIT_ENTRIES
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| item.map(|(_, entry)| entry))
        .collect::<StdResult<Vec<_>>>()?;

    Ok(AuditEntriesResponse { entries })
}

/// Query the number of audit entries written so far.
pub fn query_audit_count(deps: Deps) -> StdResult<AuditCountResponse> {
    Ok(AuditCountResponse {
        count: audit::count(deps.storage)?,
    })
}

// ============================================================================
// Escrow Queries
// ============================================================================

/// Query escrow accounting totals.
pub fn query_escrow_info(deps: Deps) -> StdResult<EscrowInfoResponse> {
    Ok(EscrowInfoResponse {
        total_escrowed: TOTAL_ESCROWED.load(deps.storage)?,
        accrued_fees: ACCRUED_FEES.load(deps.storage)?,
    })
}
