//! # エラーレスポンス（RFC 9457 Problem Details）
//!
//! ## 設計
//!
//! - `ErrorResponse` は純粋なデータ構造（`Serialize` / `Deserialize` のみ）
//! - axum の `IntoResponse` 変換は API 側の責務
//! - よく使うエラー種別は便利コンストラクタで提供し、URI のハードコードを排除

use serde::{Deserialize, Serialize};

/// error_type URI のベースパス
const ERROR_TYPE_BASE: &str = "https://gestao.example.com/errors";

/// エラーレスポンス（RFC 9457 Problem Details）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
   #[serde(rename = "type")]
   pub error_type: String,
   pub title:      String,
   pub status:     u16,
   pub detail:     String,
}

impl ErrorResponse {
   /// 汎用コンストラクタ
   ///
   /// `error_type_suffix` はベース URI に付加される（例: `"unauthorized"`）。
   pub fn new(
      error_type_suffix: &str,
      title: impl Into<String>,
      status: u16,
      detail: impl Into<String>,
   ) -> Self {
      Self {
         error_type: format!("{ERROR_TYPE_BASE}/{error_type_suffix}"),
         title: title.into(),
         status,
         detail: detail.into(),
      }
   }

   /// 400 Bad Request
   pub fn bad_request(detail: impl Into<String>) -> Self {
      Self::new("bad-request", "Bad Request", 400, detail)
   }

   /// 401 Unauthorized
   pub fn unauthorized(detail: impl Into<String>) -> Self {
      Self::new("unauthorized", "Unauthorized", 401, detail)
   }

   /// 404 Not Found
   pub fn not_found(detail: impl Into<String>) -> Self {
      Self::new("not-found", "Not Found", 404, detail)
   }

   /// 500 Internal Server Error
   ///
   /// detail は固定値（内部情報を漏らさないため）。
   pub fn internal_error() -> Self {
      Self::new(
         "internal-error",
         "Internal Server Error",
         500,
         "An internal error occurred",
      )
   }
}
