//! # パスワード検証ハンドラ
//!
//! `POST /api/verify?password=...`
//!
//! シークレットはリクエストごとに `APP_PASSWORD` から読み直し、
//! 未設定なら `admin123` を使う。
//!
//! `x-app-key` ヘッダーは受け付けるが照合には使わない。
//! 値は読まず、存在の有無だけをログに残す。

use axum::{
   Json,
   extract::{Query, State, rejection::QueryRejection},
   http::HeaderMap,
};
use gestao_domain::{AppSecret, PlainPassword};
use serde::{Deserialize, Serialize};

use crate::{AppState, error::ApiError};

/// 照合に使わない任意ヘッダー
pub const APP_KEY_HEADER: &str = "x-app-key";

/// クエリパラメータ
///
/// パスワードを含むため `Debug` は実装しない。
#[derive(Deserialize)]
pub struct VerifyParams {
   pub password: String,
}

/// パスワード検証レスポンス
#[derive(Debug, Serialize)]
pub struct VerifyResponse {
   pub authorized: bool,
}

/// POST /api/verify
///
/// 一致すれば 200 `{"authorized": true}`、それ以外は 401。
/// `password` が欠けている場合は 400。
pub async fn verify(
   State(state): State<AppState>,
   headers: HeaderMap,
   params: Result<Query<VerifyParams>, QueryRejection>,
) -> Result<Json<VerifyResponse>, ApiError> {
   let Query(params) = params.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

   tracing::debug!(
      app_key_present = headers.contains_key(APP_KEY_HEADER),
      "x-app-key は照合に使用しません"
   );

   let password = PlainPassword::new(params.password);
   let secret = AppSecret::from_env(state.env.as_ref());

   if secret.verify(&password).is_match() {
      tracing::info!("パスワード検証に成功しました");
      Ok(Json(VerifyResponse { authorized: true }))
   } else {
      tracing::warn!("パスワード検証に失敗しました");
      Err(ApiError::Unauthorized)
   }
}
