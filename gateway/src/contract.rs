//! Cipher Gateway Contract - Entry Points
//!
//! The contract exposes the request lifecycle (submit, callback, refund), the
//! owner surface, and the read-only query surface. The implementation is
//! modularized into:
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
    Uint128,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_accept_owner, execute_callback, execute_cancel_owner_proposal, execute_claim_refund,
    execute_mark_processing, execute_pause, execute_propose_owner, execute_set_rate_limit,
    execute_submit_request, execute_unpause, execute_update_base_fee,
    execute_update_gateway_address, execute_withdraw_fees,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_audit_count, query_audit_entries, query_audit_entry, query_config, query_escrow_info,
    query_has_timed_out, query_pending_owner, query_rate_limit, query_remaining_calls,
    query_request, query_requests, query_stats, query_time_until_timeout,
};
use crate::rate_limit::{RateLimitConfig, OP_SUBMIT, RATE_LIMITS};
use crate::state::{
    Config, Stats, ACCRUED_FEES, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, NEXT_REQUEST_ID, STATS,
    TOTAL_ESCROWED,
};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let owner = deps.api.addr_validate(&msg.owner)?;
    let gateway = deps.api.addr_validate(&msg.gateway)?;

    // Every stored request must carry a positive escrow
    if msg.base_fee.is_zero() {
        return Err(ContractError::InvalidInput {
            reason: "base_fee must be positive".to_string(),
        });
    }
    if msg.fee_denom.is_empty() {
        return Err(ContractError::InvalidInput {
            reason: "fee_denom must not be empty".to_string(),
        });
    }

    let config = Config {
        owner,
        gateway,
        base_fee: msg.base_fee,
        fee_denom: msg.fee_denom,
        paused: false,
    };
    CONFIG.save(deps.storage, &config)?;

    NEXT_REQUEST_ID.save(deps.storage, &0u64)?;
    TOTAL_ESCROWED.save(deps.storage, &Uint128::zero())?;
    ACCRUED_FEES.save(deps.storage, &Uint128::zero())?;

    let stats = Stats {
        total_requests: 0,
        total_completed: 0,
        total_failed: 0,
        total_refunded: 0,
    };
    STATS.save(deps.storage, &stats)?;

    let submit_limit = msg
        .submit_rate_limit
        .unwrap_or_else(RateLimitConfig::default_submit);
    submit_limit.validate()?;
    RATE_LIMITS.save(deps.storage, OP_SUBMIT, &submit_limit)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", config.owner)
        .add_attribute("gateway", config.gateway)
        .add_attribute("base_fee", config.base_fee.to_string())
        .add_attribute("fee_denom", config.fee_denom))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        // Request lifecycle
        ExecuteMsg::SubmitRequest { payload } => execute_submit_request(deps, env, info, payload),
        ExecuteMsg::MarkProcessing { request_id } => {
            execute_mark_processing(deps, env, info, request_id)
        }
        ExecuteMsg::Callback {
            request_id,
            response,
            success,
        } => execute_callback(deps, env, info, request_id, response, success),
        ExecuteMsg::ClaimRefund { request_id } => execute_claim_refund(deps, env, info, request_id),

        // Configuration
        ExecuteMsg::UpdateGatewayAddress { gateway } => {
            execute_update_gateway_address(deps, env, info, gateway)
        }
        ExecuteMsg::UpdateBaseFee { base_fee } => {
            execute_update_base_fee(deps, env, info, base_fee)
        }
        ExecuteMsg::SetRateLimit { operation, config } => {
            execute_set_rate_limit(deps, env, info, operation, config)
        }
        ExecuteMsg::WithdrawFees {} => execute_withdraw_fees(deps, env, info),

        // Owner operations
        ExecuteMsg::Pause {} => execute_pause(deps, env, info),
        ExecuteMsg::Unpause {} => execute_unpause(deps, env, info),
        ExecuteMsg::ProposeOwner { new_owner } => execute_propose_owner(deps, env, info, new_owner),
        ExecuteMsg::AcceptOwner {} => execute_accept_owner(deps, env, info),
        ExecuteMsg::CancelOwnerProposal {} => execute_cancel_owner_proposal(deps, env, info),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::Stats {} => to_json_binary(&query_stats(deps)?),
        QueryMsg::Request { request_id } => to_json_binary(&query_request(deps, request_id)?),
        QueryMsg::Requests { start_after, limit } => {
            to_json_binary(&query_requests(deps, start_after, limit)?)
        }
        QueryMsg::HasTimedOut { request_id } => {
            to_json_binary(&query_has_timed_out(deps, env, request_id)?)
        }
        QueryMsg::TimeUntilTimeout { request_id } => {
            to_json_binary(&query_time_until_timeout(deps, env, request_id)?)
        }
        QueryMsg::RateLimit { operation } => to_json_binary(&query_rate_limit(deps, operation)?),
        QueryMsg::RemainingCalls { caller, operation } => {
            to_json_binary(&query_remaining_calls(deps, env, caller, operation)?)
        }
        QueryMsg::AuditEntry { id } => to_json_binary(&query_audit_entry(deps, id)?),
        QueryMsg::AuditEntries { start_after, limit } => {
            to_json_binary(&query_audit_entries(deps, start_after, limit)?)
        }
        QueryMsg::AuditCount {} => to_json_binary(&query_audit_count(deps)?),
        QueryMsg::EscrowInfo {} => to_json_binary(&query_escrow_info(deps)?),
        QueryMsg::PendingOwner {} => to_json_binary(&query_pending_owner(deps)?),
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
