//! # ヘルスチェック共通型

use serde::{Deserialize, Serialize};

/// ヘルスチェックレスポンス
///
/// `status` は常に `"ok"`、`message` はサービス名を含む固定文言。
///
/// ## 使用例
///
/// ```
/// use gestao_shared::HealthResponse;
///
/// let response = HealthResponse::ok("Gestão Interna API");
/// assert_eq!(response.status, "ok");
/// assert_eq!(response.message, "Gestão Interna API is running");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
   pub status:  String,
   pub message: String,
}

impl HealthResponse {
   /// 稼働中を示すレスポンスを作成する
   pub fn ok(service_name: &str) -> Self {
      Self {
         status:  "ok".to_string(),
         message: format!("{service_name} is running"),
      }
   }
}
