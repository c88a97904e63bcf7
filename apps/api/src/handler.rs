//! # HTTP リクエストハンドラ
//!
//! ハンドラは薄く保ち、判定ロジックはドメイン層に委譲する。
//!
//! ```text
//! handler.rs          # 親モジュール（re-export）
//! └── handler/
//!     ├── config.rs   # GET  /api/config
//!     ├── health.rs   # GET  /api/health
//!     └── verify.rs   # POST /api/verify
//! ```

pub mod config;
pub mod health;
pub mod verify;

pub use config::{ConfigStatusResponse, config_status};
pub use health::{SERVICE_NAME, health_check};
pub use verify::{VerifyResponse, verify};

use crate::error::ApiError;

/// 未定義ルートのフォールバック
pub async fn not_found() -> ApiError {
   ApiError::NotFound
}
