//! Decision identifiers.
//!
//! # ULID ベースの ID
//! ULID (Universally Unique Lexicographically Sortable Identifier) を使用します。
//! - **時刻でソート可能**: timestamp が先頭にあるため、生成順序でソートできる
//! - **128-bit**: UUID と同じサイズ
//!
//! 画面表示用には `short()` で末尾 8 文字（ランダム部分）だけを使います。

use serde::{Deserialize, Serialize};
use std::fmt;
use ulid::Ulid;

/// Identifier of a Decision.
///
/// Opaque to callers: the only way to obtain one is from the registry's
/// `IdGenerator` (or `from_ulid` in tests).
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DecisionId(Ulid);

impl DecisionId {
    /// Display で使うプレフィックス
    const PREFIX: &'static str = "dec-";

    /// Length of the short form returned by [`DecisionId::short`].
    pub const SHORT_LEN: usize = 8;

    /// ULID から DecisionId を作成
    pub fn from_ulid(ulid: Ulid) -> Self {
        Self(ulid)
    }

    /// 内部の ULID を取得
    pub fn as_ulid(&self) -> Ulid {
        self.0
    }

    /// 8-character lowercase form taken from the random tail of the ULID.
    pub fn short(&self) -> String {
        let encoded = self.0.to_string();
        encoded[encoded.len() - Self::SHORT_LEN..].to_ascii_lowercase()
    }
}

impl From<Ulid> for DecisionId {
    fn from(ulid: Ulid) -> Self {
        Self::from_ulid(ulid)
    }
}

impl fmt::Display for DecisionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Self::PREFIX, self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_has_prefix() {
        let ulid = Ulid::new();
        let id = DecisionId::from_ulid(ulid);

        assert_eq!(id.as_ulid(), ulid);
        assert_eq!(id.to_string(), format!("dec-{ulid}"));
    }

    #[test]
    fn short_form_is_eight_lowercase_chars() {
        let id = DecisionId::from(Ulid::new());
        let short = id.short();

        assert_eq!(short.len(), DecisionId::SHORT_LEN);
        assert_eq!(short, short.to_ascii_lowercase());
        assert!(id.to_string().to_ascii_lowercase().ends_with(&short));
    }

    #[test]
    fn ulid_ids_are_sortable() {
        let id1 = DecisionId::from_ulid(Ulid::new());
        std::thread::sleep(std::time::Duration::from_millis(2));
        let id2 = DecisionId::from_ulid(Ulid::new());

        assert!(id1 < id2);
    }

    #[test]
    fn serializes_as_plain_ulid_string() {
        let ulid = Ulid::new();
        let id = DecisionId::from_ulid(ulid);

        let serialized = serde_json::to_string(&id).unwrap();
        assert_eq!(serialized, format!("\"{ulid}\""));

        let deserialized: DecisionId = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, id);
    }
}
