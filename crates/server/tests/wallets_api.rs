use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode},
    response::Response,
};
use chrono::{DateTime, TimeZone, Utc};
use http_body_util::BodyExt;
use sea_orm::Database;
use serde_json::{Value, json};
use tower::ServiceExt;

use engine::{
    InMemoryWalletRepository, NewWallet, SeaOrmWalletRepository, Wallet, WalletService,
};
use migration::MigratorTrait;
use server::{
    ServerState, router,
    types::{error::ErrorBody, wallet::WalletDto},
};

fn creation_date(day: u32, h: u32, m: u32, s: u32, micros: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2022, 9, day, h, m, s).unwrap()
        + chrono::Duration::microseconds(i64::from(micros))
}

fn three_wallets() -> Vec<Wallet> {
    vec![
        NewWallet::new("nameOfWallet1".to_string(), creation_date(24, 19, 9, 35, 573_036))
            .into_wallet(1),
        NewWallet::new("nameOfWallet2".to_string(), creation_date(25, 17, 10, 39, 684_145))
            .into_wallet(2),
        NewWallet::new("nameOfWallet3".to_string(), creation_date(26, 18, 11, 49, 132_454))
            .into_wallet(3),
    ]
}

fn app_with(repo: InMemoryWalletRepository) -> Router {
    let service = WalletService::builder().repository(repo).build().unwrap();
    router(ServerState::new(service))
}

fn app() -> Router {
    app_with(InMemoryWalletRepository::new())
}

async fn sqlite_app() -> Router {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    let service = WalletService::builder()
        .repository(SeaOrmWalletRepository::new(db))
        .build()
        .unwrap();
    router(ServerState::new(service))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Response {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            request = request.header("content-type", "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };
    app.clone()
        .oneshot(request.body(body).unwrap())
        .await
        .unwrap()
}

async fn json_body(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn error_body(response: Response) -> ErrorBody {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn create_rejects_invalid_names() {
    let app = app();

    for body in [
        json!({ "name": "#$@" }),
        json!({ "name": "" }),
        json!({ "name": null }),
        json!({}),
        json!({ "name": "Too long name - more than 20 letters." }),
    ] {
        let res = send(&app, Method::POST, "/api/wallet", Some(body.clone())).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "{body}");
        assert_eq!(json_body(res).await["code"], "W001");
    }

    let list = send(&app, Method::GET, "/api/wallet", None).await;
    assert_eq!(json_body(list).await, json!([]));
}

#[tokio::test]
async fn create_reports_field_errors() {
    let app = app();

    let res = send(&app, Method::POST, "/api/wallet", Some(json!({ "name": "@#$" }))).await;

    let body = error_body(res).await;
    assert_eq!(body.code, "W001");
    assert_eq!(body.error, "Wallet request is invalid");
    assert_eq!(body.fields.len(), 1);
    assert_eq!(body.fields[0].field, "name");
}

#[tokio::test]
async fn create_returns_created_wallet() {
    let app = app();

    let res = send(
        &app,
        Method::POST,
        "/api/wallet",
        Some(json!({ "name": "Wallet name" })),
    )
    .await;

    assert_eq!(res.status(), StatusCode::CREATED);
    let body = json_body(res).await;
    assert_eq!(body["id"], 1);
    assert_eq!(body["name"], "Wallet name");
    assert!(body["creationDate"].is_string());
    assert!(body.get("userId").is_none());
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let app = app();

    let res = send(&app, Method::PUT, "/api/wallet", Some(json!({ "id": "one" }))).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_renames_wallet() {
    let app = app_with(InMemoryWalletRepository::with_wallets(three_wallets()));

    let res = send(
        &app,
        Method::PUT,
        "/api/wallet",
        Some(json!({ "id": 1, "name": "anyName" })),
    )
    .await;

    assert_eq!(res.status(), StatusCode::OK);
    let body = json_body(res).await;
    assert_eq!(body["id"], 1);
    assert_eq!(body["name"], "anyName");
    assert_eq!(body["creationDate"], "2022-09-24T19:09:35.573036Z");
}

#[tokio::test]
async fn update_rejects_invalid_requests() {
    let app = app_with(InMemoryWalletRepository::with_wallets(three_wallets()));

    for body in [
        json!({ "id": 1, "name": "" }),
        json!({ "id": 1, "name": "@#$%^&" }),
        json!({ "id": 1, "name": "Too long name - more than 20 letters." }),
        json!({ "id": 0, "name": "walletName" }),
        json!({ "id": -3, "name": "walletName" }),
        json!({ "id": null, "name": "walletName" }),
    ] {
        let res = send(&app, Method::PUT, "/api/wallet", Some(body.clone())).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "{body}");
    }

    let res = send(&app, Method::GET, "/api/wallet/1", None).await;
    assert_eq!(json_body(res).await["name"], "nameOfWallet1");
}

#[tokio::test]
async fn update_missing_wallet_is_not_found() {
    let app = app();

    let res = send(
        &app,
        Method::PUT,
        "/api/wallet",
        Some(json!({ "id": 100, "name": "walletName" })),
    )
    .await;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body = error_body(res).await;
    assert_eq!(body.code, "W003");
    assert_eq!(body.error, "Wallet with that id doesn't exist");
    assert!(body.fields.is_empty());
}

#[tokio::test]
async fn list_empty_store() {
    let app = app();

    let res = send(&app, Method::GET, "/api/wallet", None).await;

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.headers()["message"],
        "There are no available wallets to view."
    );
    assert_eq!(json_body(res).await, json!([]));
}

#[tokio::test]
async fn list_returns_wallets_in_order() {
    let wallets = three_wallets();
    let app = app_with(InMemoryWalletRepository::with_wallets(wallets.clone()));

    let res = send(&app, Method::GET, "/api/wallet", None).await;

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.headers()["message"],
        "The list of wallets has been successfully retrieved."
    );
    let body: Vec<WalletDto> = serde_json::from_value(json_body(res).await).unwrap();
    assert_eq!(body.len(), 3);
    for (dto, wallet) in body.iter().zip(&wallets) {
        assert_eq!(dto.id, wallet.id);
        assert_eq!(dto.name, wallet.name);
        assert_eq!(dto.creation_date, wallet.creation_date);
    }
}

#[tokio::test]
async fn find_by_id_returns_wallet() {
    let app = app_with(InMemoryWalletRepository::with_wallets(three_wallets()));

    let res = send(&app, Method::GET, "/api/wallet/2", None).await;

    assert_eq!(res.status(), StatusCode::OK);
    let body = json_body(res).await;
    assert_eq!(body["id"], 2);
    assert_eq!(body["name"], "nameOfWallet2");
    assert_eq!(body["creationDate"], "2022-09-25T17:10:39.684145Z");
}

#[tokio::test]
async fn find_by_id_status_codes() {
    let app = app_with(InMemoryWalletRepository::with_wallets(three_wallets()));

    let missing = send(&app, Method::GET, "/api/wallet/100", None).await;
    let zero = send(&app, Method::GET, "/api/wallet/0", None).await;
    let negative = send(&app, Method::GET, "/api/wallet/-1", None).await;
    let not_a_number = send(&app, Method::GET, "/api/wallet/abc", None).await;

    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    assert_eq!(zero.status(), StatusCode::BAD_REQUEST);
    assert_eq!(negative.status(), StatusCode::BAD_REQUEST);
    assert_eq!(not_a_number.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn find_by_name_matches_substring_ignoring_case() {
    let app = app_with(InMemoryWalletRepository::with_wallets(three_wallets()));

    let res = send(&app, Method::GET, "/api/wallet/wallets/WALLET2", None).await;

    assert_eq!(res.status(), StatusCode::OK);
    let body = json_body(res).await;
    assert_eq!(body.as_array().map(Vec::len), Some(1));
    assert_eq!(body[0]["id"], 2);
    assert_eq!(body[0]["name"], "nameOfWallet2");
    assert_eq!(body[0]["creationDate"], "2022-09-25T17:10:39.684145Z");
}

#[tokio::test]
async fn find_by_name_decodes_spaces() {
    let app = app_with(InMemoryWalletRepository::with_wallets(vec![
        NewWallet::new("Family wallet".to_string(), creation_date(24, 0, 0, 0, 0))
            .into_wallet(1),
        NewWallet::new("Common Wallet".to_string(), creation_date(24, 0, 0, 0, 0))
            .into_wallet(2),
    ]));

    let res = send(&app, Method::GET, "/api/wallet/wallets/family%20w", None).await;

    let body = json_body(res).await;
    assert_eq!(body.as_array().map(Vec::len), Some(1));
    assert_eq!(body[0]["name"], "Family wallet");
}

#[tokio::test]
async fn delete_wallet() {
    let app = app_with(InMemoryWalletRepository::with_wallets(three_wallets()));

    let res = send(&app, Method::DELETE, "/api/wallet/1", None).await;
    assert_eq!(res.status(), StatusCode::OK);

    let again = send(&app, Method::DELETE, "/api/wallet/1", None).await;
    assert_eq!(again.status(), StatusCode::NOT_FOUND);

    let zero = send(&app, Method::DELETE, "/api/wallet/0", None).await;
    assert!(zero.status().is_client_error());
}

#[tokio::test]
async fn sqlite_create_then_fetch_round_trips() {
    let app = sqlite_app().await;

    let created = send(
        &app,
        Method::POST,
        "/api/wallet",
        Some(json!({ "name": "Smith Family" })),
    )
    .await;
    assert_eq!(created.status(), StatusCode::CREATED);
    let created = json_body(created).await;

    let id = created["id"].as_i64().unwrap();
    let fetched = send(&app, Method::GET, &format!("/api/wallet/{id}"), None).await;
    assert_eq!(fetched.status(), StatusCode::OK);
    let fetched = json_body(fetched).await;

    assert_eq!(fetched["name"], created["name"]);
    assert_eq!(fetched["creationDate"], created["creationDate"]);
}

#[tokio::test]
async fn spawned_server_answers_over_tcp() {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let service = WalletService::builder().build().unwrap();
    let addr = server::spawn_with_listener(service, listener).unwrap();

    let mut stream = tokio::net::TcpStream::connect(addr).await.unwrap();
    stream
        .write_all(b"GET /api/wallet HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
        .await
        .unwrap();
    let mut response = String::new();
    stream.read_to_string(&mut response).await.unwrap();

    assert!(response.starts_with("HTTP/1.1 200 OK"), "{response}");
    assert!(response.ends_with("[]"), "{response}");
}
