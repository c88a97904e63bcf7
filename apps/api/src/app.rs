//! # ルーター構築とサーバー起動

use axum::{
   Router,
   routing::{get, post},
};
use gestao_shared::observability::{MakeRequestUuidV7, make_request_span};
use tokio::net::TcpListener;
use tower_http::{
   request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
   trace::TraceLayer,
};

use crate::{
   AppState,
   config::ApiConfig,
   handler::{config_status, health_check, not_found, verify},
};

/// ルーターを構築する
///
/// レイヤーは下から順に適用される。Request ID を付与してからスパンを作り、
/// 最後にレスポンスヘッダーへ伝播する。
pub fn build_router(state: AppState) -> Router {
   Router::new()
      .route("/api/health", get(health_check))
      .route("/api/config", get(config_status))
      .route("/api/verify", post(verify))
      .fallback(not_found)
      .with_state(state)
      .layer(PropagateRequestIdLayer::x_request_id())
      .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
      .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}

/// サーバーを起動し、シャットダウンシグナルまで待機する
pub async fn serve(config: &ApiConfig, router: Router) -> anyhow::Result<()> {
   let listener = TcpListener::bind((config.host.as_str(), config.port)).await?;
   tracing::info!(addr = %listener.local_addr()?, "Gestão Interna API が起動しました");

   axum::serve(listener, router)
      .with_graceful_shutdown(shutdown_signal())
      .await?;

   tracing::info!("Gestão Interna API を停止しました");
   Ok(())
}

/// Ctrl+C または SIGTERM を待つ
///
/// 受信後は新規接続の受け付けを止め、処理中のリクエストの完了を待つ。
async fn shutdown_signal() {
   let ctrl_c = async {
      if let Err(e) = tokio::signal::ctrl_c().await {
         tracing::error!(error = %e, "Ctrl+C ハンドラの登録に失敗しました");
         std::future::pending::<()>().await;
      }
   };

   #[cfg(unix)]
   let terminate = async {
      match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
         Ok(mut signal) => {
            signal.recv().await;
         }
         Err(e) => {
            tracing::error!(error = %e, "SIGTERM ハンドラの登録に失敗しました");
            std::future::pending::<()>().await;
         }
      }
   };

   #[cfg(not(unix))]
   let terminate = std::future::pending::<()>();

   tokio::select! {
      _ = ctrl_c => tracing::info!("Ctrl+C を受信しました。シャットダウンを開始します"),
      _ = terminate => tracing::info!("SIGTERM を受信しました。シャットダウンを開始します"),
   }
}
