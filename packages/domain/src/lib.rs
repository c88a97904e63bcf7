//! # Gestão Interna ドメイン層
//!
//! HTTP やフレームワークに依存しないルールを集約する。
//!
//! ## モジュール構成
//!
//! - [`env`] - 環境変数プロバイダ（テストで差し替え可能にするための抽象化）
//! - [`config_status`] - 設定プローブ（環境変数の有無のみを判定）
//! - [`password`] - アプリケーションパスワードの検証

pub mod config_status;
pub mod env;
pub mod password;

pub use config_status::ConfigStatus;
pub use env::{EnvProvider, FixedEnv, SystemEnv};
pub use password::{AppSecret, PasswordVerifyResult, PlainPassword};
