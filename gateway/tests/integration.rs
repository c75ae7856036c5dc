//! Integration tests for the request lifecycle.
//!
//! Covers submission, gateway callbacks, refunds, the timeout path, pause
//! behavior, and the owner transfer timelock.

use cosmwasm_std::{coins, Addr, Binary, Uint128};
use cw_multi_test::{App, ContractWrapper, Executor};

use gateway::msg::{
    ConfigResponse, ExecuteMsg, HasTimedOutResponse, InstantiateMsg, PendingOwnerResponse,
    QueryMsg, RequestResponse, StatsResponse, TimeUntilTimeoutResponse,
};
use gateway::{EncryptedPayload, RequestStatus, REQUEST_TIMEOUT};

// ============================================================================
// Test Setup
// ============================================================================

const BASE_FEE: u128 = 100;
const FEE_DENOM: &str = "uluna";

fn contract_gateway() -> Box<dyn cw_multi_test::Contract<cosmwasm_std::Empty>> {
    let contract = ContractWrapper::new(
        gateway::contract::execute,
        gateway::contract::instantiate,
        gateway::contract::query,
    );
    Box::new(contract)
}

fn setup() -> (App, Addr, Addr, Addr, Addr) {
    let mut app = App::default();
    let owner = Addr::unchecked("terra1owner");
    let worker = Addr::unchecked("terra1worker");
    let user = Addr::unchecked("terra1user");
    let third_party = Addr::unchecked("terra1poker");

    app.init_modules(|router, _, storage| {
        for addr in [&owner, &worker, &user, &third_party] {
            router
                .bank
                .init_balance(storage, addr, coins(1_000_000, FEE_DENOM))
                .unwrap();
        }
    });

    let code_id = app.store_code(contract_gateway());
    let contract_addr = app
        .instantiate_contract(
            code_id,
            owner.clone(),
            &InstantiateMsg {
                owner: owner.to_string(),
                gateway: worker.to_string(),
                base_fee: Uint128::from(BASE_FEE),
                fee_denom: FEE_DENOM.to_string(),
                submit_rate_limit: None,
            },
            &[],
            "cipher-gateway",
            Some(owner.to_string()),
        )
        .unwrap();

    (app, contract_addr, owner, worker, user)
}

fn payload() -> EncryptedPayload {
    EncryptedPayload::from(vec![0xC1, 0xF3, 0x42, 0x42])
}

fn submit(app: &mut App, contract: &Addr, sender: &Addr, fee: u128) -> u64 {
    let res = app
        .execute_contract(
            sender.clone(),
            contract.clone(),
            &ExecuteMsg::SubmitRequest { payload: payload() },
            &coins(fee, FEE_DENOM),
        )
        .unwrap();

    res.events
        .iter()
        .flat_map(|e| e.attributes.iter())
        .find(|a| a.key == "request_id")
        .map(|a| a.value.parse().unwrap())
        .unwrap()
}

fn get_request(app: &App, contract: &Addr, request_id: u64) -> RequestResponse {
    app.wrap()
        .query_wasm_smart(contract, &QueryMsg::Request { request_id })
        .unwrap()
}

// ============================================================================
// Instantiate
// ============================================================================

#[test]
fn test_instantiate_config() {
    let (app, contract_addr, owner, worker, _user) = setup();

    let config: ConfigResponse = app
        .wrap()
        .query_wasm_smart(&contract_addr, &QueryMsg::Config {})
        .unwrap();

    assert_eq!(config.owner, owner);
    assert_eq!(config.gateway, worker);
    assert_eq!(config.base_fee, Uint128::from(BASE_FEE));
    assert_eq!(config.fee_denom, FEE_DENOM);
    assert!(!config.paused);
}

#[test]
fn test_instantiate_rejects_zero_base_fee() {
    let mut app = App::default();
    let owner = Addr::unchecked("terra1owner");
    let code_id = app.store_code(contract_gateway());

    let res = app.instantiate_contract(
        code_id,
        owner.clone(),
        &InstantiateMsg {
            owner: owner.to_string(),
            gateway: "terra1worker".to_string(),
            base_fee: Uint128::zero(),
            fee_denom: FEE_DENOM.to_string(),
            submit_rate_limit: None,
        },
        &[],
        "cipher-gateway",
        None,
    );

    assert!(res.is_err());
}

// ============================================================================
// Submission
// ============================================================================

#[test]
fn test_submit_creates_pending_request() {
    let (mut app, contract_addr, _owner, _worker, user) = setup();

    let id = submit(&mut app, &contract_addr, &user, BASE_FEE);
    assert_eq!(id, 0);

    let res = get_request(&app, &contract_addr, id);
    assert_eq!(res.request.id, 0);
    assert_eq!(res.request.requester, user);
    assert_eq!(res.request.status, RequestStatus::Pending);
    assert_eq!(res.request.escrowed_fee, Uint128::from(BASE_FEE));
    assert!(!res.request.refund_claimed);
    assert!(res.request.response_data.is_none());

    // Escrow sits on the contract
    let balance = app.wrap().query_balance(&contract_addr, FEE_DENOM).unwrap();
    assert_eq!(balance.amount, Uint128::from(BASE_FEE));
}

#[test]
fn test_request_ids_are_dense() {
    let (mut app, contract_addr, _owner, _worker, user) = setup();

    assert_eq!(submit(&mut app, &contract_addr, &user, BASE_FEE), 0);
    assert_eq!(submit(&mut app, &contract_addr, &user, BASE_FEE), 1);
    assert_eq!(submit(&mut app, &contract_addr, &user, BASE_FEE), 2);
}

#[test]
fn test_submit_without_fee_fails() {
    let (mut app, contract_addr, _owner, _worker, user) = setup();

    let res = app.execute_contract(
        user.clone(),
        contract_addr.clone(),
        &ExecuteMsg::SubmitRequest { payload: payload() },
        &[],
    );

    assert!(res.is_err());
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(
        err_str.contains("Insufficient fee"),
        "Expected insufficient fee error, got: {}",
        err_str
    );

    // No request was created and no id was consumed
    let stats: StatsResponse = app
        .wrap()
        .query_wasm_smart(&contract_addr, &QueryMsg::Stats {})
        .unwrap();
    assert_eq!(stats.total_requests, 0);
    assert_eq!(submit(&mut app, &contract_addr, &user, BASE_FEE), 0);
}

#[test]
fn test_submit_below_base_fee_fails() {
    let (mut app, contract_addr, _owner, _worker, user) = setup();

    let res = app.execute_contract(
        user.clone(),
        contract_addr.clone(),
        &ExecuteMsg::SubmitRequest { payload: payload() },
        &coins(BASE_FEE - 1, FEE_DENOM),
    );

    assert!(res.is_err());
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("Insufficient fee"));
}

#[test]
fn test_submit_above_base_fee_escrows_full_amount() {
    let (mut app, contract_addr, _owner, _worker, user) = setup();

    let id = submit(&mut app, &contract_addr, &user, 250);
    let res = get_request(&app, &contract_addr, id);
    assert_eq!(res.request.escrowed_fee, Uint128::from(250u128));
}

#[test]
fn test_submit_wrong_denom_fails() {
    let (mut app, contract_addr, _owner, _worker, user) = setup();

    app.init_modules(|router, _, storage| {
        router
            .bank
            .init_balance(storage, &user, coins(1_000, "uusd"))
            .unwrap();
    });

    let res = app.execute_contract(
        user.clone(),
        contract_addr.clone(),
        &ExecuteMsg::SubmitRequest { payload: payload() },
        &coins(BASE_FEE, "uusd"),
    );

    assert!(res.is_err());
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("fee must be paid in"));
}

#[test]
fn test_submit_empty_payload_fails() {
    let (mut app, contract_addr, _owner, _worker, user) = setup();

    let res = app.execute_contract(
        user.clone(),
        contract_addr.clone(),
        &ExecuteMsg::SubmitRequest {
            payload: EncryptedPayload::from(Vec::<u8>::new()),
        },
        &coins(BASE_FEE, FEE_DENOM),
    );

    assert!(res.is_err());
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("payload must not be empty"));
}

// ============================================================================
// Callback
// ============================================================================

#[test]
fn test_callback_completes_request() {
    let (mut app, contract_addr, _owner, worker, user) = setup();
    let id = submit(&mut app, &contract_addr, &user, BASE_FEE);

    app.execute_contract(
        worker.clone(),
        contract_addr.clone(),
        &ExecuteMsg::Callback {
            request_id: id,
            response: Binary::from(b"plaintext".as_slice()),
            success: true,
        },
        &[],
    )
    .unwrap();

    let res = get_request(&app, &contract_addr, id);
    assert_eq!(res.request.status, RequestStatus::Completed);
    assert_eq!(
        res.request.response_data,
        Some(Binary::from(b"plaintext".as_slice()))
    );
}

#[test]
fn test_callback_failure_marks_failed() {
    let (mut app, contract_addr, _owner, worker, user) = setup();
    let id = submit(&mut app, &contract_addr, &user, BASE_FEE);

    app.execute_contract(
        worker.clone(),
        contract_addr.clone(),
        &ExecuteMsg::Callback {
            request_id: id,
            response: Binary::default(),
            success: false,
        },
        &[],
    )
    .unwrap();

    let res = get_request(&app, &contract_addr, id);
    assert_eq!(res.request.status, RequestStatus::Failed);
}

#[test]
fn test_callback_requires_gateway_identity() {
    let (mut app, contract_addr, _owner, _worker, user) = setup();
    let id = submit(&mut app, &contract_addr, &user, BASE_FEE);

    // Neither the requester nor the owner may deliver a callback
    let res = app.execute_contract(
        user.clone(),
        contract_addr.clone(),
        &ExecuteMsg::Callback {
            request_id: id,
            response: Binary::default(),
            success: true,
        },
        &[],
    );

    assert!(res.is_err());
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("only the gateway"));
}

#[test]
fn test_callback_unknown_request_fails() {
    let (mut app, contract_addr, _owner, worker, _user) = setup();

    let res = app.execute_contract(
        worker.clone(),
        contract_addr.clone(),
        &ExecuteMsg::Callback {
            request_id: 42,
            response: Binary::default(),
            success: true,
        },
        &[],
    );

    assert!(res.is_err());
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("Request not found"));
}

#[test]
fn test_second_callback_rejected_regardless_of_flag() {
    let (mut app, contract_addr, _owner, worker, user) = setup();
    let id = submit(&mut app, &contract_addr, &user, BASE_FEE);

    app.execute_contract(
        worker.clone(),
        contract_addr.clone(),
        &ExecuteMsg::Callback {
            request_id: id,
            response: Binary::default(),
            success: true,
        },
        &[],
    )
    .unwrap();

    for success in [true, false] {
        let res = app.execute_contract(
            worker.clone(),
            contract_addr.clone(),
            &ExecuteMsg::Callback {
                request_id: id,
                response: Binary::default(),
                success,
            },
            &[],
        );
        assert!(res.is_err());
        let err_str = res.unwrap_err().root_cause().to_string();
        assert!(
            err_str.contains("Invalid state"),
            "Expected invalid state error, got: {}",
            err_str
        );
    }
}

#[test]
fn test_mark_processing_flow() {
    let (mut app, contract_addr, _owner, worker, user) = setup();
    let id = submit(&mut app, &contract_addr, &user, BASE_FEE);

    app.execute_contract(
        worker.clone(),
        contract_addr.clone(),
        &ExecuteMsg::MarkProcessing { request_id: id },
        &[],
    )
    .unwrap();

    let res = get_request(&app, &contract_addr, id);
    assert_eq!(res.request.status, RequestStatus::Processing);

    // A processing request still accepts the callback
    app.execute_contract(
        worker.clone(),
        contract_addr.clone(),
        &ExecuteMsg::Callback {
            request_id: id,
            response: Binary::from(b"out".as_slice()),
            success: true,
        },
        &[],
    )
    .unwrap();

    // But cannot be marked processing twice
    let id2 = submit(&mut app, &contract_addr, &user, BASE_FEE);
    app.execute_contract(
        worker.clone(),
        contract_addr.clone(),
        &ExecuteMsg::MarkProcessing { request_id: id2 },
        &[],
    )
    .unwrap();
    let res = app.execute_contract(
        worker.clone(),
        contract_addr.clone(),
        &ExecuteMsg::MarkProcessing { request_id: id2 },
        &[],
    );
    assert!(res.is_err());
}

// ============================================================================
// Refunds
// ============================================================================

#[test]
fn test_failed_request_refund_flow() {
    let (mut app, contract_addr, _owner, worker, user) = setup();
    let id = submit(&mut app, &contract_addr, &user, BASE_FEE);

    let balance_after_submit = app.wrap().query_balance(&user, FEE_DENOM).unwrap().amount;

    app.execute_contract(
        worker.clone(),
        contract_addr.clone(),
        &ExecuteMsg::Callback {
            request_id: id,
            response: Binary::default(),
            success: false,
        },
        &[],
    )
    .unwrap();

    app.execute_contract(
        user.clone(),
        contract_addr.clone(),
        &ExecuteMsg::ClaimRefund { request_id: id },
        &[],
    )
    .unwrap();

    // Fee returned in full
    let balance = app.wrap().query_balance(&user, FEE_DENOM).unwrap().amount;
    assert_eq!(balance, balance_after_submit + Uint128::from(BASE_FEE));

    let res = get_request(&app, &contract_addr, id);
    assert_eq!(res.request.status, RequestStatus::Refunded);
    assert!(res.request.refund_claimed);

    // Second claim always fails
    let res = app.execute_contract(
        user.clone(),
        contract_addr.clone(),
        &ExecuteMsg::ClaimRefund { request_id: id },
        &[],
    );
    assert!(res.is_err());
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(
        err_str.contains("already claimed"),
        "Expected already refunded error, got: {}",
        err_str
    );
}

#[test]
fn test_failed_refund_restricted_to_requester_before_timeout() {
    let (mut app, contract_addr, _owner, worker, user) = setup();
    let third_party = Addr::unchecked("terra1poker");
    let id = submit(&mut app, &contract_addr, &user, BASE_FEE);

    app.execute_contract(
        worker.clone(),
        contract_addr.clone(),
        &ExecuteMsg::Callback {
            request_id: id,
            response: Binary::default(),
            success: false,
        },
        &[],
    )
    .unwrap();

    let res = app.execute_contract(
        third_party.clone(),
        contract_addr.clone(),
        &ExecuteMsg::ClaimRefund { request_id: id },
        &[],
    );
    assert!(res.is_err());
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("only the requester"));
}

#[test]
fn test_pending_request_not_refundable_before_timeout() {
    let (mut app, contract_addr, _owner, _worker, user) = setup();
    let id = submit(&mut app, &contract_addr, &user, BASE_FEE);

    let res = app.execute_contract(
        user.clone(),
        contract_addr.clone(),
        &ExecuteMsg::ClaimRefund { request_id: id },
        &[],
    );
    assert!(res.is_err());
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("not eligible"));
}

#[test]
fn test_timeout_refund_by_third_party_pays_requester() {
    let (mut app, contract_addr, _owner, _worker, user) = setup();
    let third_party = Addr::unchecked("terra1poker");
    let id = submit(&mut app, &contract_addr, &user, BASE_FEE);

    let user_balance = app.wrap().query_balance(&user, FEE_DENOM).unwrap().amount;
    let poker_balance = app
        .wrap()
        .query_balance(&third_party, FEE_DENOM)
        .unwrap()
        .amount;

    // No callback ever arrives; advance past the timeout bound
    app.update_block(|block| {
        block.time = block.time.plus_seconds(REQUEST_TIMEOUT + 1);
    });

    app.execute_contract(
        third_party.clone(),
        contract_addr.clone(),
        &ExecuteMsg::ClaimRefund { request_id: id },
        &[],
    )
    .unwrap();

    // Funds go to the original requester, not the caller
    let balance = app.wrap().query_balance(&user, FEE_DENOM).unwrap().amount;
    assert_eq!(balance, user_balance + Uint128::from(BASE_FEE));
    let balance = app
        .wrap()
        .query_balance(&third_party, FEE_DENOM)
        .unwrap()
        .amount;
    assert_eq!(balance, poker_balance);
}

#[test]
fn test_timeout_boundary_is_strict() {
    let (mut app, contract_addr, _owner, _worker, user) = setup();
    let id = submit(&mut app, &contract_addr, &user, BASE_FEE);

    // Exactly at the bound: not yet timed out
    app.update_block(|block| {
        block.time = block.time.plus_seconds(REQUEST_TIMEOUT);
    });

    let res: HasTimedOutResponse = app
        .wrap()
        .query_wasm_smart(&contract_addr, &QueryMsg::HasTimedOut { request_id: id })
        .unwrap();
    assert!(!res.timed_out);

    let res = app.execute_contract(
        user.clone(),
        contract_addr.clone(),
        &ExecuteMsg::ClaimRefund { request_id: id },
        &[],
    );
    assert!(res.is_err());

    // One second later the request is refund-eligible
    app.update_block(|block| {
        block.time = block.time.plus_seconds(1);
    });

    let res: HasTimedOutResponse = app
        .wrap()
        .query_wasm_smart(&contract_addr, &QueryMsg::HasTimedOut { request_id: id })
        .unwrap();
    assert!(res.timed_out);

    app.execute_contract(
        user.clone(),
        contract_addr.clone(),
        &ExecuteMsg::ClaimRefund { request_id: id },
        &[],
    )
    .unwrap();
}

#[test]
fn test_completed_request_never_refundable() {
    let (mut app, contract_addr, _owner, worker, user) = setup();
    let id = submit(&mut app, &contract_addr, &user, BASE_FEE);

    app.execute_contract(
        worker.clone(),
        contract_addr.clone(),
        &ExecuteMsg::Callback {
            request_id: id,
            response: Binary::from(b"ok".as_slice()),
            success: true,
        },
        &[],
    )
    .unwrap();

    // Even long past the timeout bound the timeout predicate reports true...
    app.update_block(|block| {
        block.time = block.time.plus_seconds(REQUEST_TIMEOUT * 2);
    });
    let res: HasTimedOutResponse = app
        .wrap()
        .query_wasm_smart(&contract_addr, &QueryMsg::HasTimedOut { request_id: id })
        .unwrap();
    assert!(res.timed_out);

    // ...but the refund gate still refuses a completed request
    let res = app.execute_contract(
        user.clone(),
        contract_addr.clone(),
        &ExecuteMsg::ClaimRefund { request_id: id },
        &[],
    );
    assert!(res.is_err());
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(
        err_str.contains("not eligible"),
        "Expected not eligible error, got: {}",
        err_str
    );
}

#[test]
fn test_time_until_timeout_query() {
    let (mut app, contract_addr, _owner, _worker, user) = setup();
    let id = submit(&mut app, &contract_addr, &user, BASE_FEE);

    let res: TimeUntilTimeoutResponse = app
        .wrap()
        .query_wasm_smart(&contract_addr, &QueryMsg::TimeUntilTimeout { request_id: id })
        .unwrap();
    assert_eq!(res.remaining_seconds, REQUEST_TIMEOUT);

    app.update_block(|block| {
        block.time = block.time.plus_seconds(1_000);
    });
    let res: TimeUntilTimeoutResponse = app
        .wrap()
        .query_wasm_smart(&contract_addr, &QueryMsg::TimeUntilTimeout { request_id: id })
        .unwrap();
    assert_eq!(res.remaining_seconds, REQUEST_TIMEOUT - 1_000);

    app.update_block(|block| {
        block.time = block.time.plus_seconds(REQUEST_TIMEOUT);
    });
    let res: TimeUntilTimeoutResponse = app
        .wrap()
        .query_wasm_smart(&contract_addr, &QueryMsg::TimeUntilTimeout { request_id: id })
        .unwrap();
    assert_eq!(res.remaining_seconds, 0);
}

// ============================================================================
// Pause
// ============================================================================

#[test]
fn test_pause_blocks_submissions_and_callbacks() {
    let (mut app, contract_addr, owner, worker, user) = setup();
    let id = submit(&mut app, &contract_addr, &user, BASE_FEE);

    app.execute_contract(
        owner.clone(),
        contract_addr.clone(),
        &ExecuteMsg::Pause {},
        &[],
    )
    .unwrap();

    let res = app.execute_contract(
        user.clone(),
        contract_addr.clone(),
        &ExecuteMsg::SubmitRequest { payload: payload() },
        &coins(BASE_FEE, FEE_DENOM),
    );
    assert!(res.is_err());
    assert!(res
        .unwrap_err()
        .root_cause()
        .to_string()
        .contains("paused"));

    let res = app.execute_contract(
        worker.clone(),
        contract_addr.clone(),
        &ExecuteMsg::Callback {
            request_id: id,
            response: Binary::default(),
            success: true,
        },
        &[],
    );
    assert!(res.is_err());

    // The refund path stays open while paused
    app.update_block(|block| {
        block.time = block.time.plus_seconds(REQUEST_TIMEOUT + 1);
    });
    app.execute_contract(
        user.clone(),
        contract_addr.clone(),
        &ExecuteMsg::ClaimRefund { request_id: id },
        &[],
    )
    .unwrap();

    // Unpause restores submissions
    app.execute_contract(
        owner.clone(),
        contract_addr.clone(),
        &ExecuteMsg::Unpause {},
        &[],
    )
    .unwrap();
    submit(&mut app, &contract_addr, &user, BASE_FEE);
}

// ============================================================================
// Owner Transfer & Config
// ============================================================================

#[test]
fn test_owner_transfer_timelock() {
    let (mut app, contract_addr, owner, _worker, _user) = setup();
    let new_owner = Addr::unchecked("terra1newowner");

    app.execute_contract(
        owner.clone(),
        contract_addr.clone(),
        &ExecuteMsg::ProposeOwner {
            new_owner: new_owner.to_string(),
        },
        &[],
    )
    .unwrap();

    let pending: PendingOwnerResponse = app
        .wrap()
        .query_wasm_smart(&contract_addr, &QueryMsg::PendingOwner {})
        .unwrap();
    assert_eq!(pending.new_owner, Some(new_owner.clone()));

    // Accepting before the timelock fails
    let res = app.execute_contract(
        new_owner.clone(),
        contract_addr.clone(),
        &ExecuteMsg::AcceptOwner {},
        &[],
    );
    assert!(res.is_err());
    assert!(res
        .unwrap_err()
        .root_cause()
        .to_string()
        .contains("Timelock not expired"));

    // After 7 days the transfer completes
    app.update_block(|block| {
        block.time = block.time.plus_seconds(604_800);
    });
    app.execute_contract(
        new_owner.clone(),
        contract_addr.clone(),
        &ExecuteMsg::AcceptOwner {},
        &[],
    )
    .unwrap();

    let config: ConfigResponse = app
        .wrap()
        .query_wasm_smart(&contract_addr, &QueryMsg::Config {})
        .unwrap();
    assert_eq!(config.owner, new_owner);
}

#[test]
fn test_update_gateway_address() {
    let (mut app, contract_addr, owner, _worker, user) = setup();
    let new_worker = Addr::unchecked("terra1newworker");
    let id = submit(&mut app, &contract_addr, &user, BASE_FEE);

    app.execute_contract(
        owner.clone(),
        contract_addr.clone(),
        &ExecuteMsg::UpdateGatewayAddress {
            gateway: new_worker.to_string(),
        },
        &[],
    )
    .unwrap();

    // Only the new identity may deliver callbacks now
    app.execute_contract(
        new_worker.clone(),
        contract_addr.clone(),
        &ExecuteMsg::Callback {
            request_id: id,
            response: Binary::default(),
            success: true,
        },
        &[],
    )
    .unwrap();
}

#[test]
fn test_update_gateway_requires_owner() {
    let (mut app, contract_addr, _owner, _worker, user) = setup();

    let res = app.execute_contract(
        user.clone(),
        contract_addr.clone(),
        &ExecuteMsg::UpdateGatewayAddress {
            gateway: "terra1sneaky".to_string(),
        },
        &[],
    );
    assert!(res.is_err());
    assert!(res
        .unwrap_err()
        .root_cause()
        .to_string()
        .contains("only owner"));
}

#[test]
fn test_update_base_fee() {
    let (mut app, contract_addr, owner, _worker, user) = setup();

    app.execute_contract(
        owner.clone(),
        contract_addr.clone(),
        &ExecuteMsg::UpdateBaseFee {
            base_fee: Uint128::from(500u128),
        },
        &[],
    )
    .unwrap();

    // The old fee is no longer enough
    let res = app.execute_contract(
        user.clone(),
        contract_addr.clone(),
        &ExecuteMsg::SubmitRequest { payload: payload() },
        &coins(BASE_FEE, FEE_DENOM),
    );
    assert!(res.is_err());

    submit(&mut app, &contract_addr, &user, 500);
}

#[test]
fn test_stats_track_lifecycle() {
    let (mut app, contract_addr, _owner, worker, user) = setup();

    let a = submit(&mut app, &contract_addr, &user, BASE_FEE);
    let b = submit(&mut app, &contract_addr, &user, BASE_FEE);
    submit(&mut app, &contract_addr, &user, BASE_FEE);

    app.execute_contract(
        worker.clone(),
        contract_addr.clone(),
        &ExecuteMsg::Callback {
            request_id: a,
            response: Binary::default(),
            success: true,
        },
        &[],
    )
    .unwrap();
    app.execute_contract(
        worker.clone(),
        contract_addr.clone(),
        &ExecuteMsg::Callback {
            request_id: b,
            response: Binary::default(),
            success: false,
        },
        &[],
    )
    .unwrap();
    app.execute_contract(
        user.clone(),
        contract_addr.clone(),
        &ExecuteMsg::ClaimRefund { request_id: b },
        &[],
    )
    .unwrap();

    let stats: StatsResponse = app
        .wrap()
        .query_wasm_smart(&contract_addr, &QueryMsg::Stats {})
        .unwrap();
    assert_eq!(stats.total_requests, 3);
    assert_eq!(stats.total_completed, 1);
    assert_eq!(stats.total_failed, 1);
    assert_eq!(stats.total_refunded, 1);
}
