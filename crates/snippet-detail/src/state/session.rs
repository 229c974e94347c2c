//! Snippet Session State
//!
//! The snippet of record and the bookkeeping for requests in flight.

use bitflags::bitflags;
use snippet_client::{Snippet, SnippetId};

bitflags! {
    /// Request kinds currently waiting for a response
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct PendingOps: u8 {
        const LOAD = 1 << 0;
        const SAVE = 1 << 1;
        const DELETE = 1 << 2;
        const COMPARE = 1 << 3;
        const CANDIDATES = 1 << 4;
    }
}

impl PendingOps {
    /// Name of a single flag, for logs
    pub fn label(&self) -> &'static str {
        let mut names = self.iter_names();
        match (names.next(), names.next()) {
            (Some((name, _)), None) => name,
            (None, _) => "NONE",
            _ => "MULTIPLE",
        }
    }
}

/// Session state for the one snippet shown on the page
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    /// Id the page was opened for
    pub snippet_id: Option<SnippetId>,
    /// Snippet of record, replaced only by server responses
    pub snippet: Option<Snippet>,
    /// Requests in flight
    pub pending: PendingOps,
    /// Token of the last dispatched compare; older results are stale
    pub compare_token: u64,
    /// Set once the snippet was deleted; no further operations are accepted
    pub ended: bool,
}

impl SessionState {
    pub fn is_pending(&self, op: PendingOps) -> bool {
        self.pending.contains(op)
    }

    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }

    /// Token the next compare request will carry
    pub fn next_compare_token(&self) -> u64 {
        self.compare_token.wrapping_add(1)
    }

    /// Whether a compare result carrying `token` is still wanted
    pub fn is_current_compare(&self, token: u64) -> bool {
        self.is_pending(PendingOps::COMPARE) && token == self.compare_token
    }

    /// Declared language of the loaded snippet in wire form
    pub fn language(&self) -> Option<&'static str> {
        self.snippet
            .as_ref()
            .and_then(|snippet| snippet.language)
            .map(|lang| lang.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_flags() {
        let mut session = SessionState::default();
        assert!(session.is_idle());

        session.pending.insert(PendingOps::SAVE | PendingOps::COMPARE);
        assert!(session.is_pending(PendingOps::SAVE));
        assert!(!session.is_pending(PendingOps::LOAD));

        session.pending.remove(PendingOps::SAVE);
        assert!(!session.is_idle());
        assert_eq!(session.pending.label(), "COMPARE");
        assert_eq!(PendingOps::empty().label(), "NONE");
    }

    #[test]
    fn test_compare_token() {
        let mut session = SessionState::default();
        assert_eq!(session.next_compare_token(), 1);

        session.compare_token = session.next_compare_token();
        session.pending.insert(PendingOps::COMPARE);
        assert!(session.is_current_compare(1));
        assert!(!session.is_current_compare(0));

        session.pending.remove(PendingOps::COMPARE);
        assert!(!session.is_current_compare(1));
    }
}
