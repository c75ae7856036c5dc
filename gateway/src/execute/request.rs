//! Request submission handler.
//!
//! A caller escrows a fee and hands the gateway an opaque ciphertext. The
//! request is created in `Pending` and resolved later by the worker callback
//! or by a refund claim.

use cosmwasm_std::{DepsMut, Env, MessageInfo, Response, Uint128};

use common::EncryptedPayload;

use crate::audit::{self, AuditOperation};
use crate::error::ContractError;
use crate::rate_limit::{self, OP_SUBMIT};
use crate::state::{
    DecryptionRequest, RequestStatus, CONFIG, NEXT_REQUEST_ID, REQUESTS, STATS, TOTAL_ESCROWED,
};

/// Execute handler for submitting a decryption request.
pub fn execute_submit_request(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    payload: EncryptedPayload,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    if config.paused {
        return Err(ContractError::ContractPaused);
    }

    if payload.is_empty() {
        return Err(ContractError::InvalidInput {
            reason: "payload must not be empty".to_string(),
        });
    }

    // Validate the attached fee
    if info.funds.len() > 1 {
        return Err(ContractError::InvalidInput {
            reason: "only one coin type allowed for the fee".to_string(),
        });
    }

    let paid = match info.funds.first() {
        None => Uint128::zero(),
        Some(coin) if coin.denom == config.fee_denom => coin.amount,
        Some(_) => {
            return Err(ContractError::InvalidInput {
                reason: format!("fee must be paid in {}", config.fee_denom),
            })
        }
    };

    if paid.is_zero() || paid < config.base_fee {
        return Err(ContractError::InsufficientFee {
            expected: config.base_fee,
            got: paid,
        });
    }

    // Throttle per caller; rejection aborts before any state is written
    rate_limit::check_and_count(deps.storage, &env, &info.sender, OP_SUBMIT)?;

    // Assign the next dense id
    let request_id = NEXT_REQUEST_ID.load(deps.storage)?;
    NEXT_REQUEST_ID.save(deps.storage, &(request_id + 1))?;

    let request = DecryptionRequest {
        id: request_id,
        requester: info.sender.clone(),
        payload,
        submitted_at: env.block.time,
        escrowed_fee: paid,
        refund_claimed: false,
        status: RequestStatus::Pending,
        response_data: None,
    };
    REQUESTS.save(deps.storage, request_id, &request)?;

    // Escrow the full paid amount
    let total = TOTAL_ESCROWED.load(deps.storage)?;
    TOTAL_ESCROWED.save(deps.storage, &total.checked_add(paid)?)?;

    let mut stats = STATS.load(deps.storage)?;
    stats.total_requests += 1;
    STATS.save(deps.storage, &stats)?;

    audit::append(
        deps.storage,
        &env,
        AuditOperation::SubmitRequest,
        &info.sender,
        Some(request_id),
        Some(paid),
    )?;

    Ok(Response::new()
        .add_attribute("method", "submit_request")
        .add_attribute("request_id", request_id.to_string())
        .add_attribute("requester", info.sender)
        .add_attribute("escrowed_fee", paid.to_string())
        .add_attribute("submitted_at", env.block.time.seconds().to_string()))
}
