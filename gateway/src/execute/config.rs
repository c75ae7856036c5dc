//! Configuration handlers.
//!
//! Owner-gated operations: swapping the gateway identity, tuning the base
//! fee and rate limits, and withdrawing accrued fees.

use cosmwasm_std::{BankMsg, Coin, CosmosMsg, DepsMut, Env, MessageInfo, Response, Uint128};

use crate::audit::{self, AuditOperation};
use crate::error::ContractError;
use crate::rate_limit::{RateLimitConfig, RATE_LIMITS};
use crate::state::{ACCRUED_FEES, CONFIG, TOTAL_ESCROWED};

/// Replace the trusted gateway identity (owner only).
pub fn execute_update_gateway_address(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    gateway: String,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }

    let gateway_addr = deps.api.addr_validate(&gateway)?;
    config.gateway = gateway_addr.clone();
    CONFIG.save(deps.storage, &config)?;

    audit::append(
        deps.storage,
        &env,
        AuditOperation::UpdateGateway,
        &info.sender,
        None,
        None,
    )?;

    Ok(Response::new()
        .add_attribute("method", "update_gateway_address")
        .add_attribute("gateway", gateway_addr))
}

/// Change the minimum submission fee (owner only).
pub fn execute_update_base_fee(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    base_fee: Uint128,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }

    // A zero base fee would allow zero-escrow requests
    if base_fee.is_zero() {
        return Err(ContractError::InvalidInput {
            reason: "base_fee must be positive".to_string(),
        });
    }

    config.base_fee = base_fee;
    CONFIG.save(deps.storage, &config)?;

    audit::append(
        deps.storage,
        &env,
        AuditOperation::UpdateBaseFee,
        &info.sender,
        None,
        Some(base_fee),
    )?;

    Ok(Response::new()
        .add_attribute("method", "update_base_fee")
        .add_attribute("base_fee", base_fee.to_string()))
}

/// Configure rate limiting for an operation (owner only).
pub fn execute_set_rate_limit(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    operation: String,
    rate_limit: RateLimitConfig,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }

    if operation.is_empty() {
        return Err(ContractError::InvalidRateLimitConfig {
            reason: "operation key must not be empty".to_string(),
        });
    }
    rate_limit.validate()?;

    RATE_LIMITS.save(deps.storage, &operation, &rate_limit)?;

    audit::append(
        deps.storage,
        &env,
        AuditOperation::SetRateLimit,
        &info.sender,
        None,
        None,
    )?;

    Ok(Response::new()
        .add_attribute("method", "set_rate_limit")
        .add_attribute("operation", operation)
        .add_attribute("max_calls_per_window", rate_limit.max_calls_per_window.to_string())
        .add_attribute("window_seconds", rate_limit.window_seconds.to_string())
        .add_attribute("enabled", rate_limit.enabled.to_string()))
}

/// Withdraw fees accrued from completed requests (owner only).
///
/// Escrow still backing open or refundable requests is untouchable here;
/// only fees of completed requests have accrued.
pub fn execute_withdraw_fees(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }

    let accrued = ACCRUED_FEES.load(deps.storage)?;
    if accrued.is_zero() {
        return Err(ContractError::NoFeesToWithdraw);
    }

    ACCRUED_FEES.save(deps.storage, &Uint128::zero())?;

    let total = TOTAL_ESCROWED.load(deps.storage)?;
    TOTAL_ESCROWED.save(deps.storage, &total.checked_sub(accrued)?)?;

    audit::append(
        deps.storage,
        &env,
        AuditOperation::WithdrawFees,
        &info.sender,
        None,
        Some(accrued),
    )?;

    let withdraw_msg = CosmosMsg::Bank(BankMsg::Send {
        to_address: config.owner.to_string(),
        amount: vec![Coin {
            denom: config.fee_denom,
            amount: accrued,
        }],
    });

    Ok(Response::new()
        .add_message(withdraw_msg)
        .add_attribute("method", "withdraw_fees")
        .add_attribute("amount", accrued.to_string()))
}
