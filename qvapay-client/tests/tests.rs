use std::{collections::HashMap, time::Duration};

use axum::{
    extract::{Path, Query},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use pretty_assertions::assert_eq;
use qvapay_client::{http::reqwest::ReqwestHttpClient, HttpOptions, QvapayClient, QvapayError};
use qvapay_core::{
    fixture::read_fixture_as,
    invoice::InvoiceRequest,
    params::Credentials,
    primitives::{AppInfo, Balance, Transaction, Transactions},
};
use serde_json::{json, Value};
use url::Url;

type Params = Query<HashMap<String, String>>;
type ApiResult = Result<Json<Value>, (StatusCode, Json<Value>)>;

fn authorize(params: &HashMap<String, String>) -> Result<(), (StatusCode, Json<Value>)> {
    let authorized = params.get("app_id").map(String::as_str) == Some("XXXX")
        && params.get("app_secret").map(String::as_str) == Some("YYYY");
    if authorized {
        Ok(())
    } else {
        Err((
            StatusCode::UNAUTHORIZED,
            Json(json!({"error": "Unauthorized"})),
        ))
    }
}

fn fixture(name: &str) -> Json<Value> {
    Json(read_fixture_as::<Value>(name).expect("fixture not found"))
}

async fn info(Query(params): Params) -> ApiResult {
    authorize(&params)?;
    Ok(fixture("app_info.json"))
}

async fn balance(Query(params): Params) -> ApiResult {
    authorize(&params)?;
    Ok(fixture("balance.json"))
}

async fn transactions(Query(params): Params) -> ApiResult {
    authorize(&params)?;
    let mut page = fixture("transactions.json");
    if let Some(number) = params.get("page") {
        page.0["current_page"] = json!(number.parse::<u64>().unwrap_or(1));
    }
    Ok(page)
}

async fn transaction(Path(uuid): Path<String>, Query(params): Params) -> ApiResult {
    authorize(&params)?;
    let mut transaction = fixture("transaction.json");
    transaction.0["uuid"] = json!(uuid);
    Ok(transaction)
}

// echoes the query so tests can see what was sent
async fn create_invoice(Query(params): Params) -> ApiResult {
    authorize(&params)?;
    Ok(Json(json!(params)))
}

async fn slow() -> Json<Value> {
    tokio::time::sleep(Duration::from_secs(2)).await;
    Json(json!("0.00"))
}

async fn spawn_server() -> anyhow::Result<Url> {
    let app = Router::new()
        .route("/api/v1/info", get(info))
        .route("/api/v1/balance", get(balance))
        .route("/api/v1/transactions", get(transactions))
        .route("/api/v1/transaction/:uuid", get(transaction))
        .route("/api/v1/create_invoice", get(create_invoice))
        .route("/slow/api/v1/balance", get(slow));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move { axum::serve(listener, app).await });
    Ok(Url::parse(&format!("http://{addr}/api/v1"))?)
}

async fn client_with(credentials: Credentials) -> anyhow::Result<QvapayClient> {
    let base_url = spawn_server().await?;
    let http = ReqwestHttpClient::with_base_url(base_url, &HttpOptions::default())?;
    Ok(QvapayClient::new(credentials, http))
}

async fn client() -> anyhow::Result<QvapayClient> {
    client_with(Credentials::new("XXXX", "YYYY")).await
}

#[tokio::test]
async fn test_get_app_info() -> anyhow::Result<()> {
    let client = client().await?;
    let response = client.get_app_info().await?;

    assert_eq!(200, response.status);
    assert_eq!(read_fixture_as::<Value>("app_info.json")?, response.data);
    assert!(response
        .header("content-type")
        .is_some_and(|value| value.starts_with("application/json")));
    assert_eq!("my_website", response.json::<AppInfo>()?.name);
    Ok(())
}

#[tokio::test]
async fn test_get_balance() -> anyhow::Result<()> {
    let client = client().await?;
    let response = client.get_balance().await?;

    assert_eq!(json!("66.00"), response.data);
    assert_eq!("66.00", response.json::<Balance>()?.as_str());
    Ok(())
}

#[tokio::test]
async fn test_list_transactions() -> anyhow::Result<()> {
    let client = client().await?;

    let page = client.list_transactions().await?.json::<Transactions>()?;
    assert_eq!(1, page.current_page);
    assert_eq!(9, page.total);

    let page = client
        .list_transactions_page(2)
        .await?
        .json::<Transactions>()?;
    assert_eq!(2, page.current_page);
    Ok(())
}

#[tokio::test]
async fn test_get_transaction() -> anyhow::Result<()> {
    let client = client().await?;
    let response = client
        .get_transaction("6507ee0d-db6c-4aa9-b59a-75dc7f6eab52")
        .await?;

    assert_eq!(read_fixture_as::<Value>("transaction.json")?, response.data);
    let transaction = response.json::<Transaction>()?;
    assert_eq!("6507ee0d-db6c-4aa9-b59a-75dc7f6eab52", transaction.uuid);
    assert_eq!(
        "796a9e01-3d67-4a42-9dc2-02a5d069fa23",
        transaction.owner.expect("owner").uuid
    );
    Ok(())
}

#[tokio::test]
async fn test_create_invoice_sends_normalized_params() -> anyhow::Result<()> {
    let client = client().await?;
    let response = client
        .create_invoice(InvoiceRequest::new(22.233, "Testing Method").with_remote_id("22211"))
        .await?;

    assert_eq!(
        json!({
            "app_id": "XXXX",
            "app_secret": "YYYY",
            "amount": "22.23",
            "description": "Testing Method",
            "signed": "1",
            "remote_id": "22211"
        }),
        response.data
    );
    Ok(())
}

#[tokio::test]
async fn test_create_invoice_escapes_description() -> anyhow::Result<()> {
    let client = client().await?;
    let response = client
        .create_invoice(InvoiceRequest::new("33", "Café & té = 2?").unsigned())
        .await?;

    assert_eq!(json!("Café & té = 2?"), response.data["description"]);
    assert_eq!(json!("33.00"), response.data["amount"]);
    assert_eq!(json!("0"), response.data["signed"]);
    assert_eq!(None, response.data.get("remote_id"));
    Ok(())
}

#[tokio::test]
async fn test_bad_credentials_surface_as_http_error() -> anyhow::Result<()> {
    let client = client_with(Credentials::new("XXXX", "wrong")).await?;
    let err = client.get_balance().await.expect_err("should be unauthorized");

    assert_eq!(Some(401), err.status());
    match err {
        QvapayError::Http { body, .. } => assert!(body.contains("Unauthorized")),
        other => panic!("unexpected error {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn test_timeout() -> anyhow::Result<()> {
    let base_url = spawn_server().await?;
    let slow_url = Url::parse(&format!(
        "http://{}:{}/slow/api/v1",
        base_url.host_str().unwrap_or("127.0.0.1"),
        base_url.port().unwrap_or(80)
    ))?;
    let options = HttpOptions::default().with_timeout(Duration::from_millis(100));
    let http = ReqwestHttpClient::with_base_url(slow_url, &options)?;
    let client = QvapayClient::new(Credentials::new("XXXX", "YYYY"), http);

    let err = client.get_balance().await.expect_err("should time out");
    match err {
        QvapayError::Reqwest(err) => assert!(err.is_timeout()),
        other => panic!("unexpected error {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn test_concurrent_requests() -> anyhow::Result<()> {
    let client = client().await?;
    let (info, balance, transactions) = tokio::join!(
        client.get_app_info(),
        client.get_balance(),
        client.list_transactions()
    );

    assert_eq!(200, info?.status);
    assert_eq!(json!("66.00"), balance?.data);
    assert_eq!(9, transactions?.json::<Transactions>()?.total);
    Ok(())
}
