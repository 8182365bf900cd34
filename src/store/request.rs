//! Request kinds and monotonic request tokens.
//!
//! Every issued request carries a token. On completion the store compares it
//! against the last token issued for the same sequence; anything older is a
//! stale response and is dropped.

use serde::{Deserialize, Serialize};

/// The operations the view model issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestKind {
    Price,
    Historical,
    FavoriteList,
    FavoriteAdd,
    FavoritePrices,
    Watchlist,
}

impl RequestKind {
    pub const ALL: [RequestKind; 6] = [
        RequestKind::Price,
        RequestKind::Historical,
        RequestKind::FavoriteList,
        RequestKind::FavoriteAdd,
        RequestKind::FavoritePrices,
        RequestKind::Watchlist,
    ];

    pub(crate) const fn index(self) -> usize {
        match self {
            Self::Price => 0,
            Self::Historical => 1,
            Self::FavoriteList => 2,
            Self::FavoriteAdd => 3,
            Self::FavoritePrices => 4,
            Self::Watchlist => 5,
        }
    }

    /// Kinds that overwrite the same field share one sequence, so the
    /// last-issued of either wins.
    const fn sequence_slot(self) -> usize {
        match self {
            Self::FavoriteAdd => Self::FavoriteList.index(),
            other => other.index(),
        }
    }

    /// Favorites responses each carry the whole server list, so any response
    /// newer than the last applied one is still valid, even when a later
    /// request is outstanding.
    const fn applies_in_commit_order(self) -> bool {
        matches!(self, Self::FavoriteList | Self::FavoriteAdd)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Price => "price",
            Self::Historical => "historical",
            Self::FavoriteList => "favorite_list",
            Self::FavoriteAdd => "favorite_add",
            Self::FavoritePrices => "favorite_prices",
            Self::Watchlist => "watchlist",
        }
    }
}

impl std::fmt::Display for RequestKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifies one issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestToken {
    pub kind: RequestKind,
    pub seq: u64,
}

/// Hands out tokens and remembers, per sequence, the last one issued and
/// the last one whose response was applied.
#[derive(Debug, Clone, Default)]
pub struct RequestSequencer {
    last_issued: [u64; RequestKind::ALL.len()],
    last_committed: [u64; RequestKind::ALL.len()],
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a token that supersedes every earlier one in its sequence.
    pub fn issue(&mut self, kind: RequestKind) -> RequestToken {
        let slot = &mut self.last_issued[kind.sequence_slot()];
        *slot += 1;
        RequestToken { kind, seq: *slot }
    }

    /// Whether `token` is still the most recently issued in its sequence.
    pub fn is_current(&self, token: RequestToken) -> bool {
        self.last_issued[token.kind.sequence_slot()] == token.seq
    }

    /// Whether a response carrying `token` may still be applied.
    ///
    /// Most kinds accept only the last-issued token. Favorites kinds accept
    /// any token newer than the last committed one.
    pub fn admits(&self, token: RequestToken) -> bool {
        let slot = token.kind.sequence_slot();
        if token.kind.applies_in_commit_order() {
            token.seq > self.last_committed[slot]
        } else {
            self.last_issued[slot] == token.seq
        }
    }

    /// Record that the response for `token` was applied.
    pub fn commit(&mut self, token: RequestToken) {
        let slot = &mut self.last_committed[token.kind.sequence_slot()];
        *slot = (*slot).max(token.seq);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_increase_per_kind() {
        let mut seq = RequestSequencer::new();
        let a = seq.issue(RequestKind::Historical);
        let b = seq.issue(RequestKind::Historical);
        assert!(b.seq > a.seq);
        assert!(!seq.is_current(a));
        assert!(seq.is_current(b));
    }

    #[test]
    fn test_kinds_are_independent() {
        let mut seq = RequestSequencer::new();
        let price = seq.issue(RequestKind::Price);
        let _chart = seq.issue(RequestKind::Historical);
        assert!(seq.is_current(price));
    }

    #[test]
    fn test_favorite_add_supersedes_list() {
        let mut seq = RequestSequencer::new();
        let list = seq.issue(RequestKind::FavoriteList);
        let add = seq.issue(RequestKind::FavoriteAdd);
        assert!(!seq.is_current(list));
        assert!(seq.is_current(add));
    }

    #[test]
    fn test_favorites_admit_until_newer_commit() {
        let mut seq = RequestSequencer::new();
        let first = seq.issue(RequestKind::FavoriteAdd);
        let second = seq.issue(RequestKind::FavoriteAdd);
        assert!(seq.admits(first));

        seq.commit(second);
        assert!(!seq.admits(first));
        assert!(!seq.admits(second));
    }

    #[test]
    fn test_other_kinds_admit_only_last_issued() {
        let mut seq = RequestSequencer::new();
        let first = seq.issue(RequestKind::Historical);
        let second = seq.issue(RequestKind::Historical);
        assert!(!seq.admits(first));
        assert!(seq.admits(second));
    }
}
