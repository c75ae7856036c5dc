//! Refund handler.
//!
//! A failed request is refundable by its requester. A request stuck open past
//! the timeout bound is refundable by anyone, which lets third parties poke
//! stuck requests; the escrow always returns to the original requester.

use cosmwasm_std::{BankMsg, Coin, CosmosMsg, DepsMut, Env, MessageInfo, Response};

use crate::audit::{self, AuditOperation};
use crate::error::ContractError;
use crate::state::{RequestStatus, CONFIG, REQUESTS, STATS, TOTAL_ESCROWED};

/// Execute handler for reclaiming the escrowed fee of a failed or timed-out
/// request.
pub fn execute_claim_refund(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    request_id: u64,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    let mut request = REQUESTS
        .may_load(deps.storage, request_id)?
        .ok_or(ContractError::RequestNotFound { id: request_id })?;

    if request.refund_claimed {
        return Err(ContractError::AlreadyRefunded { id: request_id });
    }

    let timed_out = request.has_timed_out(env.block.time);

    // A completed request is never refundable, however much time has passed.
    // The timeout path only applies to requests still open.
    let eligible = request.status == RequestStatus::Failed
        || (request.status.is_open() && timed_out);
    if !eligible {
        return Err(ContractError::NotEligible { id: request_id });
    }

    // Before the timeout only the requester may reclaim a failed request;
    // once timed out anyone may trigger the transfer.
    if !timed_out && info.sender != request.requester {
        return Err(ContractError::UnauthorizedRefund);
    }

    request.refund_claimed = true;
    request.status = RequestStatus::Refunded;
    REQUESTS.save(deps.storage, request_id, &request)?;

    let total = TOTAL_ESCROWED.load(deps.storage)?;
    TOTAL_ESCROWED.save(deps.storage, &total.checked_sub(request.escrowed_fee)?)?;

    let mut stats = STATS.load(deps.storage)?;
    stats.total_refunded += 1;
    STATS.save(deps.storage, &stats)?;

    audit::append(
        deps.storage,
        &env,
        AuditOperation::ClaimRefund,
        &info.sender,
        Some(request_id),
        Some(request.escrowed_fee),
    )?;

    // Escrow always returns to the requester, not the caller
    let refund_msg = CosmosMsg::Bank(BankMsg::Send {
        to_address: request.requester.to_string(),
        amount: vec![Coin {
            denom: config.fee_denom,
            amount: request.escrowed_fee,
        }],
    });

    Ok(Response::new()
        .add_message(refund_msg)
        .add_attribute("method", "claim_refund")
        .add_attribute("request_id", request_id.to_string())
        .add_attribute("requester", request.requester)
        .add_attribute("claimed_by", info.sender)
        .add_attribute("amount", request.escrowed_fee.to_string())
        .add_attribute("timed_out", timed_out.to_string()))
}
