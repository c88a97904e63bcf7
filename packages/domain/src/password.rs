//! # パスワード
//!
//! アプリケーションパスワード関連の値オブジェクトを定義する。
//!
//! ## ドメイン用語
//!
//! | 型 | ドメイン用語 | 用途 |
//! |---|------------|------|
//! | [`PlainPassword`] | 入力パスワード | `/api/verify` で送信された値 |
//! | [`AppSecret`] | アプリケーションシークレット | 照合先の期待値（`APP_PASSWORD`） |
//! | [`PasswordVerifyResult`] | 検証結果 | 照合の成否 |

use subtle::ConstantTimeEq;

use crate::env::EnvProvider;

/// シークレットを保持する環境変数
pub const APP_SECRET_VAR: &str = "APP_PASSWORD";

/// `APP_PASSWORD` 未設定時に使うシークレット
pub const DEFAULT_APP_SECRET: &str = "admin123";

/// 入力パスワード
///
/// # セキュリティ
///
/// Debug 出力ではパスワードの値をマスクする。
#[derive(Clone)]
pub struct PlainPassword(String);

impl std::fmt::Debug for PlainPassword {
   fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
      f.debug_tuple("PlainPassword").field(&"[REDACTED]").finish()
   }
}

impl PlainPassword {
   pub fn new(value: impl Into<String>) -> Self {
      Self(value.into())
   }

   pub fn as_str(&self) -> &str {
      &self.0
   }
}

/// アプリケーションシークレット
///
/// 入力パスワードの照合先。リクエストごとに環境から読み直す。
///
/// `None` は UTF-8 として解釈できないシークレットを表し、どの入力とも一致しない。
#[derive(Clone)]
pub struct AppSecret(Option<String>);

impl std::fmt::Debug for AppSecret {
   fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
      f.debug_tuple("AppSecret").field(&"[REDACTED]").finish()
   }
}

impl AppSecret {
   pub fn new(value: impl Into<String>) -> Self {
      Self(Some(value.into()))
   }

   /// 環境からシークレットを読み込む
   ///
   /// `APP_PASSWORD` が未設定なら [`DEFAULT_APP_SECRET`] を使う。
   /// 空文字で設定されている場合は空文字がシークレットになる。
   /// 非 UTF-8 の値は置換文字で近似せず、照合不能なシークレットとして扱う。
   pub fn from_env(env: &dyn EnvProvider) -> Self {
      match env.var_os(APP_SECRET_VAR) {
         None => Self::new(DEFAULT_APP_SECRET),
         Some(value) => Self(value.into_string().ok()),
      }
   }

   /// 入力パスワードと照合する
   ///
   /// 完全一致のみ成功。比較は定数時間で行う
   /// （長さが異なる場合は即座に不一致となる）。
   pub fn verify(&self, password: &PlainPassword) -> PasswordVerifyResult {
      let Some(secret) = &self.0 else {
         return PasswordVerifyResult::Mismatch;
      };
      let matched: bool = secret.as_bytes().ct_eq(password.as_str().as_bytes()).into();
      PasswordVerifyResult::from(matched)
   }
}

/// パスワード検証結果
///
/// bool ではなく専用の型を使うことで、意図が明確になる。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordVerifyResult {
   /// パスワードが一致した
   Match,
   /// パスワードが一致しなかった
   Mismatch,
}

impl PasswordVerifyResult {
   pub fn is_match(&self) -> bool {
      matches!(self, Self::Match)
   }

   pub fn is_mismatch(&self) -> bool {
      matches!(self, Self::Mismatch)
   }
}

impl From<bool> for PasswordVerifyResult {
   fn from(matched: bool) -> Self {
      if matched { Self::Match } else { Self::Mismatch }
   }
}
