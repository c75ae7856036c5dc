//! Gateway callback handlers.
//!
//! The trusted worker resolves requests here:
//! - `MarkProcessing` - flags a pending request as picked up
//! - `Callback` - delivers the result, transitioning to Completed or Failed
//!
//! Both handlers guard on the current status, so a duplicate call against the
//! same request id always fails with `InvalidState`.

use cosmwasm_std::{Binary, DepsMut, Env, MessageInfo, Response};

use crate::audit::{self, AuditOperation};
use crate::error::ContractError;
use crate::state::{RequestStatus, ACCRUED_FEES, CONFIG, REQUESTS, STATS};

/// Execute handler for marking a pending request as picked up (gateway only).
pub fn execute_mark_processing(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    request_id: u64,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    if config.paused {
        return Err(ContractError::ContractPaused);
    }

    if info.sender != config.gateway {
        return Err(ContractError::UnauthorizedGateway);
    }

    let mut request = REQUESTS
        .may_load(deps.storage, request_id)?
        .ok_or(ContractError::RequestNotFound { id: request_id })?;

    if request.status != RequestStatus::Pending {
        return Err(ContractError::InvalidState {
            id: request_id,
            status: request.status.as_str().to_string(),
        });
    }

    request.status = RequestStatus::Processing;
    REQUESTS.save(deps.storage, request_id, &request)?;

    audit::append(
        deps.storage,
        &env,
        AuditOperation::MarkProcessing,
        &info.sender,
        Some(request_id),
        None,
    )?;

    Ok(Response::new()
        .add_attribute("method", "mark_processing")
        .add_attribute("request_id", request_id.to_string()))
}

/// Execute handler for delivering a result (gateway only).
pub fn execute_callback(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    request_id: u64,
    response: Binary,
    success: bool,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    if config.paused {
        return Err(ContractError::ContractPaused);
    }

    if info.sender != config.gateway {
        return Err(ContractError::UnauthorizedGateway);
    }

    let mut request = REQUESTS
        .may_load(deps.storage, request_id)?
        .ok_or(ContractError::RequestNotFound { id: request_id })?;

    // Idempotency guard: only an open request accepts a callback
    if !request.status.is_open() {
        return Err(ContractError::InvalidState {
            id: request_id,
            status: request.status.as_str().to_string(),
        });
    }

    request.status = if success {
        RequestStatus::Completed
    } else {
        RequestStatus::Failed
    };
    request.response_data = Some(response);
    REQUESTS.save(deps.storage, request_id, &request)?;

    let mut stats = STATS.load(deps.storage)?;
    let operation = if success {
        // No funds move here; the fee merely becomes owner-withdrawable
        let accrued = ACCRUED_FEES.load(deps.storage)?;
        ACCRUED_FEES.save(deps.storage, &accrued.checked_add(request.escrowed_fee)?)?;
        stats.total_completed += 1;
        AuditOperation::CallbackCompleted
    } else {
        stats.total_failed += 1;
        AuditOperation::CallbackFailed
    };
    STATS.save(deps.storage, &stats)?;

    audit::append(
        deps.storage,
        &env,
        operation,
        &info.sender,
        Some(request_id),
        Some(request.escrowed_fee),
    )?;

    Ok(Response::new()
        .add_attribute("method", "callback")
        .add_attribute("request_id", request_id.to_string())
        .add_attribute("success", success.to_string())
        .add_attribute("status", request.status.as_str()))
}
