//! # 設定プローブハンドラ

use axum::{Json, extract::State};
use gestao_domain::ConfigStatus;
use serde::Serialize;

use crate::AppState;

/// 設定プローブレスポンス
#[derive(Debug, Serialize)]
pub struct ConfigStatusResponse {
   pub supabase_configured: bool,
   pub auth_configured:     bool,
}

impl From<ConfigStatus> for ConfigStatusResponse {
   fn from(status: ConfigStatus) -> Self {
      Self {
         supabase_configured: status.supabase_configured,
         auth_configured:     status.auth_configured,
      }
   }
}

/// GET /api/config
///
/// 環境変数の有無のみを返す。値は返さない。
pub async fn config_status(State(state): State<AppState>) -> Json<ConfigStatusResponse> {
   let status = ConfigStatus::probe(state.env.as_ref());

   tracing::debug!(
      supabase_configured = status.supabase_configured,
      auth_configured = status.auth_configured,
      "設定状態を返します"
   );

   Json(status.into())
}
