//! # Gestão Interna 共有ユーティリティ
//!
//! API とドメイン層の双方から使われる共通型を提供する。
//!
//! ## 設計方針
//!
//! - ビジネスロジックを含まない純粋なユーティリティのみを配置
//! - axum への依存は入れない（`IntoResponse` 変換は API 側の責務）
//! - トレーシング関連の依存は `observability` フィーチャーの背後に置く

pub mod error_response;
pub mod health;
pub mod observability;

pub use error_response::ErrorResponse;
pub use health::HealthResponse;
