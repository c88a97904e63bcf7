//! # Gestão Interna API サーバー
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `API_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `API_PORT` | No | ポート番号（デフォルト: `8000`） |
//! | `APP_PASSWORD` | No | `/api/verify` の照合先（デフォルト: `admin123`） |
//! | `VITE_SUPABASE_URL` | No | `/api/config` が有無のみ報告 |
//! | `VITE_APP_PASSWORD` | No | `/api/config` が有無のみ報告 |
//! | `LOG_FORMAT` | No | `json` または `pretty`（デフォルト） |
//! | `RUST_LOG` | No | ログレベル（デフォルト: `info,gestao=debug`） |
//!
//! ## 起動方法
//!
//! ```bash
//! cargo run -p gestao-api
//!
//! API_PORT=8080 APP_PASSWORD=... LOG_FORMAT=json cargo run -p gestao-api --release
//! ```

use std::sync::Arc;

use gestao_api::{AppState, app, config::ApiConfig};
use gestao_domain::SystemEnv;
use gestao_shared::observability::{TracingConfig, init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
   // .env ファイルを読み込む（存在する場合）
   dotenvy::dotenv().ok();

   let tracing_config = TracingConfig::from_env("gestao-api");
   init_tracing(&tracing_config);
   let _tracing_guard = tracing_config.app_span().entered();

   let config = ApiConfig::from_env()?;

   tracing::info!(
      "Gestão Interna API を起動します: {}:{}",
      config.host,
      config.port
   );

   let state = AppState::new(Arc::new(SystemEnv));
   app::serve(&config, app::build_router(state)).await
}
