//! # Gestão Interna API
//!
//! 店舗管理フロントエンドの補助 API。状態を持たず、3 つのエンドポイントのみを提供する。
//!
//! | メソッド | パス | 説明 |
//! |----------|------|------|
//! | GET | `/api/health` | 稼働確認 |
//! | GET | `/api/config` | 環境変数の設定有無 |
//! | POST | `/api/verify` | アプリケーションパスワードの照合 |
//!
//! ## モジュール構成
//!
//! - [`app`] - ルーター構築とサーバー起動
//! - [`config`] - サーバー設定（環境変数からの読み込み）
//! - [`error`] - API エラー定義と HTTP レスポンスへの変換
//! - [`handler`] - HTTP リクエストハンドラ

pub mod app;
pub mod config;
pub mod error;
pub mod handler;

use std::sync::Arc;

use gestao_domain::EnvProvider;

/// ハンドラの共有状態
///
/// 可変状態は持たない。環境変数はリクエストごとに `env` から読む。
#[derive(Clone)]
pub struct AppState {
   pub env: Arc<dyn EnvProvider>,
}

impl AppState {
   pub fn new(env: Arc<dyn EnvProvider>) -> Self {
      Self { env }
   }
}
