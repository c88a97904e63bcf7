//! # HTTP エンドポイントのテスト
//!
//! `build_router` で本番と同じルーター・レイヤー構成を組み立て、
//! `FixedEnv` で環境を注入して `oneshot` で叩く。
//! プロセスの環境変数は変更しないため、テストは並列に実行できる。

use std::sync::Arc;

use axum::{
   Router,
   body::{Body, to_bytes},
};
use gestao_api::{AppState, app::build_router};
use gestao_domain::FixedEnv;
use http::{Method, Request, StatusCode};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};
use tower::ServiceExt;

fn test_app(env: FixedEnv) -> Router {
   build_router(AppState::new(Arc::new(env)))
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
   let response = app.oneshot(request).await.unwrap();
   let status = response.status();
   let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
   let body = if bytes.is_empty() {
      Value::Null
   } else {
      serde_json::from_slice(&bytes).unwrap()
   };
   (status, body)
}

fn get(uri: &str) -> Request<Body> {
   Request::builder()
      .method(Method::GET)
      .uri(uri)
      .body(Body::empty())
      .unwrap()
}

fn post(uri: &str) -> Request<Body> {
   Request::builder()
      .method(Method::POST)
      .uri(uri)
      .body(Body::empty())
      .unwrap()
}

// ===== GET /api/health =====

#[tokio::test]
async fn test_healthは常に200と固定メッセージを返す() {
   let (status, body) = send(test_app(FixedEnv::new()), get("/api/health")).await;

   assert_eq!(status, StatusCode::OK);
   assert_eq!(
      body,
      json!({ "status": "ok", "message": "Gestão Interna API is running" })
   );
   assert!(body["message"].as_str().unwrap().contains("is running"));
}

#[tokio::test]
async fn test_healthは環境に依存しない() {
   let env = FixedEnv::new()
      .with("APP_PASSWORD", "S3cr3t")
      .with("VITE_SUPABASE_URL", "https://example.supabase.co");

   let (status, body) = send(test_app(env), get("/api/health")).await;

   assert_eq!(status, StatusCode::OK);
   assert_eq!(body["status"], "ok");
}

// ===== GET /api/config =====

#[rstest]
#[case::何も設定なし(FixedEnv::new(), false, false)]
#[case::urlのみ(
   FixedEnv::new().with("VITE_SUPABASE_URL", "https://example.supabase.co"),
   true,
   false
)]
#[case::パスワードのみ(FixedEnv::new().with("VITE_APP_PASSWORD", "hunter2"), false, true)]
#[case::両方(
   FixedEnv::new()
      .with("VITE_SUPABASE_URL", "https://example.supabase.co")
      .with("VITE_APP_PASSWORD", "hunter2"),
   true,
   true
)]
#[case::空文字も設定ありとみなす(
   FixedEnv::new().with("VITE_SUPABASE_URL", "").with("VITE_APP_PASSWORD", ""),
   true,
   true
)]
#[tokio::test]
async fn test_configは環境変数の有無を返す(
   #[case] env: FixedEnv,
   #[case] supabase_configured: bool,
   #[case] auth_configured: bool,
) {
   let (status, body) = send(test_app(env), get("/api/config")).await;

   assert_eq!(status, StatusCode::OK);
   assert_eq!(
      body,
      json!({
         "supabase_configured": supabase_configured,
         "auth_configured": auth_configured,
      })
   );
}

#[tokio::test]
async fn test_configは変数の値を漏らさない() {
   let env = FixedEnv::new()
      .with("VITE_SUPABASE_URL", "https://leak-check.supabase.co")
      .with("VITE_APP_PASSWORD", "leak-check-password");

   let response = test_app(env).oneshot(get("/api/config")).await.unwrap();
   let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
   let text = String::from_utf8(bytes.to_vec()).unwrap();

   assert!(!text.contains("leak-check"));
}

// ===== POST /api/verify =====

#[tokio::test]
async fn test_verify_シークレット未設定でデフォルトパスワードなら認可される() {
   let (status, body) = send(
      test_app(FixedEnv::new()),
      post("/api/verify?password=admin123"),
   )
   .await;

   assert_eq!(status, StatusCode::OK);
   assert_eq!(body, json!({ "authorized": true }));
}

#[rstest]
#[case("wrong")]
#[case("Admin123")]
#[case("admin1234")]
#[case("")]
#[tokio::test]
async fn test_verify_シークレット未設定で他のパスワードなら401(#[case] password: &str) {
   let uri = format!("/api/verify?password={password}");

   let (status, body) = send(test_app(FixedEnv::new()), post(&uri)).await;

   assert_eq!(status, StatusCode::UNAUTHORIZED);
   assert_eq!(body["status"], 401);
   assert_eq!(body["detail"], "Unauthorized");
}

#[rstest]
#[case("S3cr3t", StatusCode::OK)]
#[case("wrong", StatusCode::UNAUTHORIZED)]
#[case("admin123", StatusCode::UNAUTHORIZED)]
#[tokio::test]
async fn test_verify_シークレット設定時はその値と照合する(
   #[case] password: &str,
   #[case] expected: StatusCode,
) {
   let env = FixedEnv::new().with("APP_PASSWORD", "S3cr3t");
   let uri = format!("/api/verify?password={password}");

   let (status, _) = send(test_app(env), post(&uri)).await;

   assert_eq!(status, expected);
}

#[tokio::test]
async fn test_verify_パーセントエンコードされたパスワードをデコードして照合する() {
   let env = FixedEnv::new().with("APP_PASSWORD", "p@ss word&1");

   let (status, body) = send(
      test_app(env),
      post("/api/verify?password=p%40ss%20word%261"),
   )
   .await;

   assert_eq!(status, StatusCode::OK);
   assert_eq!(body, json!({ "authorized": true }));
}

#[tokio::test]
async fn test_verify_x_app_keyヘッダーは結果に影響しない() {
   let with_header = Request::builder()
      .method(Method::POST)
      .uri("/api/verify?password=wrong")
      .header("x-app-key", "admin123")
      .body(Body::empty())
      .unwrap();
   let (status, _) = send(test_app(FixedEnv::new()), with_header).await;
   assert_eq!(status, StatusCode::UNAUTHORIZED);

   let with_header = Request::builder()
      .method(Method::POST)
      .uri("/api/verify?password=admin123")
      .header("x-app-key", "anything")
      .body(Body::empty())
      .unwrap();
   let (status, body) = send(test_app(FixedEnv::new()), with_header).await;
   assert_eq!(status, StatusCode::OK);
   assert_eq!(body, json!({ "authorized": true }));
}

#[tokio::test]
async fn test_verify_passwordが無ければ400() {
   let (status, body) = send(test_app(FixedEnv::new()), post("/api/verify")).await;

   assert_eq!(status, StatusCode::BAD_REQUEST);
   assert_eq!(body["status"], 400);
   assert_eq!(body["title"], "Bad Request");
}

#[rstest]
#[case::後ろが正解("/api/verify?password=x&password=admin123")]
#[case::前が正解("/api/verify?password=admin123&password=x")]
#[case::両方正解("/api/verify?password=admin123&password=admin123")]
#[tokio::test]
async fn test_verify_passwordが重複していれば照合せず400(#[case] uri: &str) {
   let (status, body) = send(test_app(FixedEnv::new()), post(uri)).await;

   assert_eq!(status, StatusCode::BAD_REQUEST);
   assert_eq!(body["title"], "Bad Request");
   assert!(body["detail"].as_str().unwrap().contains("duplicate field"));
}

#[tokio::test]
async fn test_verify_getは405() {
   let (status, _) = send(
      test_app(FixedEnv::new()),
      get("/api/verify?password=admin123"),
   )
   .await;

   assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

// ===== 冪等性 =====

#[rstest]
#[case::health(Method::GET, "/api/health")]
#[case::config(Method::GET, "/api/config")]
#[case::verify_success(Method::POST, "/api/verify?password=admin123")]
#[case::verify_failure(Method::POST, "/api/verify?password=wrong")]
#[tokio::test]
async fn test_同一リクエストを繰り返しても同じレスポンスを返す(
   #[case] method: Method,
   #[case] uri: &str,
) {
   let app = test_app(FixedEnv::new().with("VITE_SUPABASE_URL", "https://example.supabase.co"));
   let request = || {
      Request::builder()
         .method(method.clone())
         .uri(uri)
         .body(Body::empty())
         .unwrap()
   };

   let first = send(app.clone(), request()).await;
   let second = send(app.clone(), request()).await;
   let third = send(app, request()).await;

   assert_eq!(first, second);
   assert_eq!(second, third);
}

// ===== フォールバック・Request ID =====

#[tokio::test]
async fn test_未定義ルートは404() {
   let (status, body) = send(test_app(FixedEnv::new()), get("/api/unknown")).await;

   assert_eq!(status, StatusCode::NOT_FOUND);
   assert_eq!(body["status"], 404);
}

#[tokio::test]
async fn test_レスポンスにuuid_v7のx_request_idが含まれる() {
   let response = test_app(FixedEnv::new())
      .oneshot(get("/api/health"))
      .await
      .unwrap();

   let request_id = response
      .headers()
      .get("x-request-id")
      .unwrap()
      .to_str()
      .unwrap();
   let uuid = uuid::Uuid::parse_str(request_id)
      .unwrap_or_else(|_| panic!("有効な UUID であること: {request_id}"));
   assert_eq!(uuid.get_version(), Some(uuid::Version::SortRand));
}

#[tokio::test]
async fn test_クライアント提供のx_request_idがそのまま返される() {
   let request = Request::builder()
      .uri("/api/health")
      .header("x-request-id", "client-provided-request-id-123")
      .body(Body::empty())
      .unwrap();

   let response = test_app(FixedEnv::new()).oneshot(request).await.unwrap();

   assert_eq!(
      response.headers().get("x-request-id").unwrap(),
      "client-provided-request-id-123"
   );
}
