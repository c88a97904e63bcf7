//! # ヘルスチェックハンドラ
//!
//! レスポンス型は [`gestao_shared::HealthResponse`] を参照。

use axum::Json;
use gestao_shared::HealthResponse;

/// ヘルスチェックの message に含めるサービス名
pub const SERVICE_NAME: &str = "Gestão Interna API";

/// GET /api/health
///
/// 常に 200 OK を返す。外部サービスへの接続は確認しない。
pub async fn health_check() -> Json<HealthResponse> {
   Json(HealthResponse::ok(SERVICE_NAME))
}
