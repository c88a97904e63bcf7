//! # API サーバー設定
//!
//! 起動時に一度だけ環境変数から読み込む。
//!
//! | 変数名 | 必須 | デフォルト | 説明 |
//! |--------|------|------------|------|
//! | `API_HOST` | No | `0.0.0.0` | バインドアドレス |
//! | `API_PORT` | No | `8000` | ポート番号 |
//!
//! `/api/config` と `/api/verify` が参照する変数はここでは読まない。
//! それらはリクエストのたびに [`EnvProvider`] から読み直す。

use std::num::ParseIntError;

use gestao_domain::{EnvProvider, SystemEnv};
use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;

/// 設定読み込みエラー
#[derive(Debug, Error)]
pub enum ConfigError {
   #[error("API_PORT は有効なポート番号である必要があります: {value:?}")]
   InvalidPort {
      value:  String,
      #[source]
      source: ParseIntError,
   },
}

/// API サーバーの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
   /// バインドアドレス
   pub host: String,
   /// ポート番号
   pub port: u16,
}

impl ApiConfig {
   /// プロセスの環境変数から設定を読み込む
   pub fn from_env() -> Result<Self, ConfigError> {
      Self::from_provider(&SystemEnv)
   }

   /// 任意の [`EnvProvider`] から設定を読み込む
   pub fn from_provider(env: &dyn EnvProvider) -> Result<Self, ConfigError> {
      let host = env.var("API_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
      let port = match env.var("API_PORT") {
         Some(value) => value
            .trim()
            .parse()
            .map_err(|source| ConfigError::InvalidPort { value, source })?,
         None => DEFAULT_PORT,
      };

      Ok(Self { host, port })
   }
}
