//! # EnvProvider（環境変数プロバイダ）
//!
//! ハンドラからの `std::env` 直接参照を置き換え、
//! テストで任意の環境を注入可能にするための抽象化。
//!
//! 値はキャッシュしない。呼び出しのたびに読み直すため、
//! リクエスト時点の環境が常に反映される。

use std::{
   collections::HashMap,
   ffi::{OsStr, OsString},
};

/// 環境変数を提供するトレイト
pub trait EnvProvider: Send + Sync {
   /// 変数の生の値を返す。未設定なら `None`、空文字で設定されていれば `Some("")`。
   fn var_os(&self, key: &str) -> Option<OsString>;

   /// 変数の値を文字列で返す
   ///
   /// 非 UTF-8 の値は U+FFFD に置き換えられる。
   /// 照合に使う値は [`var_os`](EnvProvider::var_os) から読むこと。
   fn var(&self, key: &str) -> Option<String> {
      self.var_os(key)
         .map(|value| value.to_string_lossy().into_owned())
   }

   /// 変数が設定されているか（値は問わない）
   fn is_set(&self, key: &str) -> bool {
      self.var_os(key).is_some()
   }
}

/// プロセスの環境変数を読む実装
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl EnvProvider for SystemEnv {
   fn var_os(&self, key: &str) -> Option<OsString> {
      std::env::var_os(key)
   }
}

/// 固定の値を返すテスト用実装
#[derive(Debug, Clone, Default)]
pub struct FixedEnv {
   vars: HashMap<String, OsString>,
}

impl FixedEnv {
   pub fn new() -> Self {
      Self::default()
   }

   /// 変数を追加した新しいインスタンスを返す
   pub fn with(mut self, key: impl Into<String>, value: impl AsRef<OsStr>) -> Self {
      self.vars.insert(key.into(), value.as_ref().to_os_string());
      self
   }
}

impl EnvProvider for FixedEnv {
   fn var_os(&self, key: &str) -> Option<OsString> {
      self.vars.get(key).cloned()
   }
}
