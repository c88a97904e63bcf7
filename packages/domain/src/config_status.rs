//! # 設定プローブ
//!
//! 外部サービス向けの環境変数が設定済みかどうかを判定する。
//! 返すのは真偽値のみで、変数の値そのものは外に出さない。

use crate::env::EnvProvider;

/// Supabase の URL を保持する環境変数
pub const SUPABASE_URL_VAR: &str = "VITE_SUPABASE_URL";

/// フロントエンドのログインパスワードを保持する環境変数
pub const APP_PASSWORD_HINT_VAR: &str = "VITE_APP_PASSWORD";

/// 設定状態
///
/// リクエストごとに導出され、保存されることはない。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigStatus {
   pub supabase_configured: bool,
   pub auth_configured:     bool,
}

impl ConfigStatus {
   /// 環境を調べて設定状態を返す
   ///
   /// 変数が存在すれば値に関わらず `true`（空文字も含む）。
   pub fn probe(env: &dyn EnvProvider) -> Self {
      Self {
         supabase_configured: env.is_set(SUPABASE_URL_VAR),
         auth_configured:     env.is_set(APP_PASSWORD_HINT_VAR),
      }
   }
}
