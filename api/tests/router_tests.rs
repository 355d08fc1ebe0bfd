use axum::body::Body;
use axum::http::{Request, StatusCode};
use cinder_api::router;
use cinder_nullables::NullBalanceProvider;
use cinder_provider::ProviderError;
use cinder_types::{ChainAddress, TokenAmount, TokenBalance};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

fn token(address: &str, symbol: &str, balance: u128) -> TokenBalance {
    TokenBalance {
        address: ChainAddress::parse(address).unwrap(),
        symbol: symbol.to_string(),
        balance: TokenAmount::new(balance),
        decimals: 18,
    }
}

async fn get(provider: Arc<NullBalanceProvider>, uri: &str) -> (StatusCode, Value) {
    let app = router(provider);
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap();
    (status, body)
}

#[tokio::test]
async fn missing_address_is_a_bad_request() {
    let provider = Arc::new(NullBalanceProvider::new());
    let (status, body) = get(provider.clone(), "/tokens").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Address is required");
    assert_eq!(provider.fetch_count(), 0);
}

#[tokio::test]
async fn malformed_address_is_a_bad_request() {
    let provider = Arc::new(NullBalanceProvider::new());
    let (status, body) = get(provider.clone(), "/tokens?address=not-an-address").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
    assert_eq!(provider.fetch_count(), 0);
}

#[tokio::test]
async fn provider_failure_is_a_server_error() {
    let provider = Arc::new(NullBalanceProvider::new());
    provider.push_result(Err(ProviderError::Http("status 502".into())));

    let (status, body) = get(
        provider,
        "/tokens?address=0x1111111111111111111111111111111111111111",
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn tokens_returns_the_provider_list() {
    let provider = Arc::new(NullBalanceProvider::new());
    provider.push_result(Ok(vec![
        token(
            "0x1111111111111111111111111111111111111111",
            "AAA",
            1_000_000_000_000_000_000,
        ),
        token("0x2222222222222222222222222222222222222222", "BBB", 0),
    ]));

    let (status, body) = get(
        provider,
        "/tokens?address=0x9999999999999999999999999999999999999999",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let list = body.as_array().unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(
        list[0]["token_address"],
        "0x1111111111111111111111111111111111111111"
    );
    assert_eq!(list[0]["balance"], "1000000000000000000");
    assert_eq!(list[1]["symbol"], "BBB");
    assert_eq!(list[1]["balance"], "0");
}

#[tokio::test]
async fn mixed_case_address_is_accepted() {
    let provider = Arc::new(NullBalanceProvider::new());
    provider.push_result(Ok(Vec::new()));

    let (status, body) = get(
        provider.clone(),
        "/tokens?address=0xAbCdEf1234567890aBcDeF1234567890ABCDEF12",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!([]));
    assert_eq!(provider.fetch_count(), 1);
}

#[tokio::test]
async fn health_reports_ok() {
    let provider = Arc::new(NullBalanceProvider::new());
    let (status, body) = get(provider, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}
