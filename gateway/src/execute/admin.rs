//! Owner operations handlers.
//!
//! This module handles:
//! - Pause/unpause the gateway
//! - Owner transfer (propose/accept/cancel, 7-day timelock)

use cosmwasm_std::{DepsMut, Env, MessageInfo, Response};

use crate::audit::{self, AuditOperation};
use crate::error::ContractError;
use crate::state::{PendingOwner, CONFIG, OWNER_TIMELOCK_DURATION, PENDING_OWNER};

// ============================================================================
// Pause/Unpause
// ============================================================================

/// Pause the gateway (blocks submissions and callbacks).
pub fn execute_pause(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }

    config.paused = true;
    CONFIG.save(deps.storage, &config)?;

    audit::append(
        deps.storage,
        &env,
        AuditOperation::Pause,
        &info.sender,
        None,
        None,
    )?;

    Ok(Response::new().add_attribute("method", "pause"))
}

/// Unpause the gateway.
pub fn execute_unpause(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }

    config.paused = false;
    CONFIG.save(deps.storage, &config)?;

    audit::append(
        deps.storage,
        &env,
        AuditOperation::Unpause,
        &info.sender,
        None,
        None,
    )?;

    Ok(Response::new().add_attribute("method", "unpause"))
}

// ============================================================================
// Owner Transfer
// ============================================================================

/// Propose a new owner (starts timelock).
pub fn execute_propose_owner(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    new_owner: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }

    let new_owner_addr = deps.api.addr_validate(&new_owner)?;
    let pending = PendingOwner {
        new_address: new_owner_addr.clone(),
        execute_after: env.block.time.plus_seconds(OWNER_TIMELOCK_DURATION),
    };
    PENDING_OWNER.save(deps.storage, &pending)?;

    audit::append(
        deps.storage,
        &env,
        AuditOperation::ProposeOwner,
        &info.sender,
        None,
        None,
    )?;

    Ok(Response::new()
        .add_attribute("method", "propose_owner")
        .add_attribute("new_owner", new_owner_addr.to_string())
        .add_attribute("execute_after", pending.execute_after.seconds().to_string()))
}

/// Accept pending owner role (after timelock).
pub fn execute_accept_owner(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let pending = PENDING_OWNER
        .may_load(deps.storage)?
        .ok_or(ContractError::NoPendingOwner)?;

    if info.sender != pending.new_address {
        return Err(ContractError::UnauthorizedPendingOwner);
    }

    if env.block.time < pending.execute_after {
        let remaining = pending.execute_after.seconds() - env.block.time.seconds();
        return Err(ContractError::TimelockNotExpired {
            remaining_seconds: remaining,
        });
    }

    let mut config = CONFIG.load(deps.storage)?;
    config.owner = pending.new_address.clone();
    CONFIG.save(deps.storage, &config)?;
    PENDING_OWNER.remove(deps.storage);

    audit::append(
        deps.storage,
        &env,
        AuditOperation::AcceptOwner,
        &info.sender,
        None,
        None,
    )?;

    Ok(Response::new()
        .add_attribute("method", "accept_owner")
        .add_attribute("owner", config.owner))
}

/// Cancel a pending owner proposal.
pub fn execute_cancel_owner_proposal(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }

    if PENDING_OWNER.may_load(deps.storage)?.is_none() {
        return Err(ContractError::NoPendingOwner);
    }
    PENDING_OWNER.remove(deps.storage);

    audit::append(
        deps.storage,
        &env,
        AuditOperation::CancelOwnerProposal,
        &info.sender,
        None,
        None,
    )?;

    Ok(Response::new().add_attribute("method", "cancel_owner_proposal"))
}
