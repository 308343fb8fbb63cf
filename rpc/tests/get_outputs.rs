//! End-to-end behaviour of `get_outputs` against nullable collaborators.

use std::sync::Arc;

use serde_json::{json, Value};

use coinview_crypto::AddressCodec;
use coinview_nullables::{NullAddressCodec, NullGateway};
use coinview_rpc::handlers::OutputsResult;
use coinview_rpc::outputs::{validate_params, GET_OUTPUTS};
use coinview_rpc::{OutputsQuery, Request, Response, RpcError, RpcState};
use coinview_store::{OutputSetGateway, StoreError};
use coinview_types::{Address, Coins, Hours, OutputId, OutputSet, Timestamp, TxHash, UnspentOutput};

fn addr(n: u8) -> Address {
    Address::new(0, [n; 20])
}

fn output(tx: u8, owner: Address) -> UnspentOutput {
    UnspentOutput {
        id: OutputId::new(TxHash::new([tx; 32]), 0),
        hash: TxHash::new([tx.wrapping_add(100); 32]),
        owner,
        coins: Coins::from_droplets(1_500_000),
        hours: Hours::new(4),
        block_seq: tx as u64,
        time: Timestamp::new(1_000),
    }
}

fn codec() -> Arc<NullAddressCodec> {
    Arc::new(
        NullAddressCodec::new()
            .with_address("addrA", addr(1))
            .with_address("addrB", addr(2))
            .with_address("validAddr1", addr(3))
            .with_address("validAddr2", addr(4))
            .with_address("Abc123", addr(5)),
    )
}

fn state(codec: &Arc<NullAddressCodec>, gateway: &Arc<NullGateway>) -> RpcState {
    RpcState::new(codec.clone(), gateway.clone())
}

fn call(state: &RpcState, id: Value, params: Value) -> Response {
    state.handle(&Request::new(id, GET_OUTPUTS, params))
}

fn error_of(response: &Response) -> (i32, String) {
    let err = response.error_object().expect("expected an error response");
    (err.code, err.message.clone())
}

fn outputs_of(response: &Response) -> OutputsResult {
    let result = response.result().expect("expected a success response");
    serde_json::from_value(result.clone()).unwrap()
}

// ── Emptiness and decoding ──────────────────────────────────────────────

#[test]
fn empty_list_is_invalid_params_regardless_of_gateway() {
    for gateway in [
        NullGateway::empty(),
        NullGateway::failing(StoreError::Unavailable("down".into())),
    ] {
        let codec = codec();
        let gateway = Arc::new(gateway);
        let resp = call(&state(&codec, &gateway), json!("1"), json!([]));
        assert_eq!(error_of(&resp), (-32602, "Invalid params".to_string()));
        assert!(codec.calls().is_empty());
        assert_eq!(gateway.query_count(), 0);
    }
}

#[test]
fn non_string_params_are_invalid_params() {
    let codec = codec();
    let gateway = Arc::new(NullGateway::empty());
    for params in [json!(null), json!("addrA"), json!([1]), json!({"addrs": ["addrA"]})] {
        let resp = call(&state(&codec, &gateway), json!("1"), params);
        assert_eq!(error_of(&resp), (-32602, "Invalid params".to_string()));
    }
    assert!(codec.calls().is_empty());
    assert_eq!(gateway.query_count(), 0);
}

// ── Trimming ────────────────────────────────────────────────────────────

#[test]
fn codec_receives_space_trimmed_text() {
    let codec = codec();
    let gateway = Arc::new(NullGateway::empty());
    let resp = call(&state(&codec, &gateway), json!("1"), json!([" Abc123 "]));
    assert!(resp.result().is_some());
    assert_eq!(codec.calls(), vec!["Abc123"]);
    assert_eq!(gateway.queries(), vec![vec![addr(5)]]);
}

#[test]
fn tabs_are_not_trimmed() {
    let codec = codec();
    let gateway = Arc::new(NullGateway::empty());
    let resp = call(&state(&codec, &gateway), json!("1"), json!(["\tAbc123"]));
    assert_eq!(
        error_of(&resp),
        (-32602, "invalid address: \tAbc123".to_string())
    );
}

#[test]
fn whitespace_only_entry_fails_as_invalid_address() {
    let codec = codec();
    let gateway = Arc::new(NullGateway::empty());
    let resp = call(&state(&codec, &gateway), json!("1"), json!(["   "]));
    assert_eq!(error_of(&resp), (-32602, "invalid address: ".to_string()));
    assert_eq!(codec.calls(), vec![""]);
    assert_eq!(gateway.query_count(), 0);
}

// ── Fail-fast ───────────────────────────────────────────────────────────

#[test]
fn first_invalid_address_stops_validation() {
    let codec = codec();
    let gateway = Arc::new(NullGateway::empty());
    let resp = call(
        &state(&codec, &gateway),
        json!("1"),
        json!(["validAddr1", "not-an-address", "validAddr2", "also-bad"]),
    );
    assert_eq!(
        error_of(&resp),
        (-32602, "invalid address: not-an-address".to_string())
    );
    assert_eq!(codec.calls(), vec!["validAddr1", "not-an-address"]);
    assert_eq!(gateway.query_count(), 0);
}

// ── Success path ────────────────────────────────────────────────────────

#[test]
fn gateway_outputs_pass_through_unchanged() {
    // Gateway order deliberately differs from request order.
    let set = OutputSet::new(
        Timestamp::new(1_000 + 3600),
        vec![output(2, addr(2)), output(1, addr(1))],
    );
    let codec = codec();
    let gateway = Arc::new(NullGateway::returning(set.clone()));

    let result = OutputsQuery::new(&*codec, &*gateway)
        .execute(&["addrA".to_string(), "addrB".to_string()])
        .unwrap();
    assert_eq!(result.outputs, set);

    let resp = call(&state(&codec, &gateway), json!("1"), json!(["addrA", "addrB"]));
    let body = outputs_of(&resp);
    let owners: Vec<&str> = body.outputs.iter().map(|o| o.address.as_str()).collect();
    assert_eq!(owners, vec!["addrB", "addrA"]);
    assert_eq!(body.outputs[0].src_tx, TxHash::new([2; 32]).to_hex());
    assert_eq!(body.outputs[0].index, 0);
    assert_eq!(body.outputs[0].coins, "1.500000");
    assert_eq!(body.outputs[0].hours, 4);
    // 1.5 coins held for one hour accrue one whole hour.
    assert_eq!(body.outputs[0].calculated_hours, 5);
}

#[test]
fn success_body_has_outputs_member() {
    let codec = codec();
    let gateway = Arc::new(NullGateway::empty());
    let resp = call(&state(&codec, &gateway), json!("1"), json!(["addrA"]));
    assert_eq!(resp.result(), Some(&json!({"outputs": []})));
}

// ── Gateway failure ─────────────────────────────────────────────────────

#[test]
fn gateway_failure_maps_to_internal_error() {
    let codec = codec();
    let gateway = Arc::new(NullGateway::failing(StoreError::Corruption(
        "index mismatch".into(),
    )));
    let resp = call(&state(&codec, &gateway), json!("1"), json!(["addrA", "addrB"]));
    assert_eq!(
        error_of(&resp),
        (
            -32603,
            "get unspent outputs failed: database is corrupted: index mismatch".to_string()
        )
    );
    assert!(resp.result().is_none());
    assert_eq!(gateway.query_count(), 1);
}

#[test]
fn deadline_from_gateway_is_internal_error() {
    let codec = codec();
    let gateway = NullGateway::failing(StoreError::DeadlineExceeded);
    let err = OutputsQuery::new(&*codec, &gateway)
        .execute(&["addrA".to_string()])
        .unwrap_err();
    assert_eq!(
        err,
        RpcError::internal("get unspent outputs", "deadline exceeded")
    );
}

// ── Duplicates ──────────────────────────────────────────────────────────

#[test]
fn duplicate_addresses_are_forwarded_unchanged() {
    let codec = codec();
    let gateway = Arc::new(NullGateway::empty());
    let resp = call(&state(&codec, &gateway), json!("1"), json!(["addrA", "addrA"]));
    assert!(resp.result().is_some());
    assert_eq!(codec.calls(), vec!["addrA", "addrA"]);
    assert_eq!(gateway.queries(), vec![vec![addr(1), addr(1)]]);
}

// ── Correlation echo ────────────────────────────────────────────────────

#[test]
fn id_is_echoed_for_success_and_every_error_kind() {
    let codec = codec();
    let ok = Arc::new(NullGateway::empty());
    let failing = Arc::new(NullGateway::failing(StoreError::Backend("io".into())));

    for id in [json!("req-42"), json!(42), json!(null)] {
        let cases = [
            call(&state(&codec, &ok), id.clone(), json!(["addrA"])),
            call(&state(&codec, &ok), id.clone(), json!([])),
            call(&state(&codec, &ok), id.clone(), json!(["nope"])),
            call(&state(&codec, &failing), id.clone(), json!(["addrA"])),
            state(&codec, &ok).handle(&Request::new(id.clone(), "no_such_method", json!([]))),
        ];
        for resp in cases {
            assert_eq!(resp.id, id);
            assert_eq!(resp.jsonrpc, "2.0");
        }
    }
}

#[test]
fn wrong_protocol_version_is_invalid_request() {
    let codec = codec();
    let gateway = Arc::new(NullGateway::empty());
    let mut req = Request::new("7", GET_OUTPUTS, json!(["addrA"]));
    req.jsonrpc = "1.0".into();
    let resp = state(&codec, &gateway).handle(&req);
    assert_eq!(error_of(&resp), (-32600, "Invalid request".to_string()));
    assert_eq!(resp.id, json!("7"));
    assert_eq!(gateway.query_count(), 0);
}

#[test]
fn unknown_method_is_method_not_found() {
    let codec = codec();
    let gateway = Arc::new(NullGateway::empty());
    let resp = state(&codec, &gateway).handle(&Request::new("1", "get_balance", json!([])));
    assert_eq!(error_of(&resp), (-32601, "Method not found".to_string()));
}

#[test]
fn raw_body_parse_error_has_null_id() {
    let codec = codec();
    let gateway = Arc::new(NullGateway::empty());
    let resp = state(&codec, &gateway).handle_body(b"{\"id\": \"1\", ");
    assert_eq!(error_of(&resp), (-32700, "Parse error".to_string()));
    assert_eq!(resp.id, Value::Null);
}

#[test]
fn validator_is_usable_on_its_own() {
    let req = Request::new("1", GET_OUTPUTS, json!([" a", "b "]));
    assert_eq!(validate_params(&req).unwrap(), vec!["a", "b"]);
}

#[test]
fn real_codec_and_nullable_gateway_compose() {
    let codec: Arc<dyn AddressCodec> = Arc::new(coinview_crypto::Base58AddressCodec);
    let text = codec.encode(&addr(9));
    let gateway = Arc::new(NullGateway::returning(OutputSet::new(
        Timestamp::new(1_000),
        vec![output(1, addr(9))],
    )));
    let gateway_dyn: Arc<dyn OutputSetGateway> = gateway.clone();
    let state = RpcState::new(codec, gateway_dyn);

    let resp = call(&state, json!(1), json!([format!(" {text} ")]));
    let body = outputs_of(&resp);
    assert_eq!(body.outputs.len(), 1);
    assert_eq!(body.outputs[0].address, text);
    assert_eq!(gateway.queries(), vec![vec![addr(9)]]);
}

#[test]
fn oversized_address_is_invalid_address_without_gateway_call() {
    let codec: Arc<dyn AddressCodec> = Arc::new(coinview_crypto::Base58AddressCodec);
    let gateway = Arc::new(NullGateway::empty());
    let gateway_dyn: Arc<dyn OutputSetGateway> = gateway.clone();
    let state = RpcState::new(codec, gateway_dyn);

    let long = "2".repeat(1_000_000);
    let (code, message) = error_of(&call(&state, json!(3), json!([long])));
    assert_eq!(code, -32602);
    assert!(message.starts_with("invalid address: 222"));
    assert_eq!(gateway.query_count(), 0);
}
