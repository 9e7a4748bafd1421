//! Token-based debouncing for search inputs.
//!
//! Every keystroke calls [`Debounce::input`] and gets a token. The caller
//! sleeps for [`SEARCH_DEBOUNCE`] and then calls [`Debounce::settle`]; only
//! the token from the most recent keystroke yields the value.

use std::time::Duration;

pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(400);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DebounceToken(u64);

#[derive(Clone, Debug, PartialEq)]
pub struct Debounce<V> {
    latest: u64,
    pending: Option<V>,
}

impl<V> Default for Debounce<V> {
    fn default() -> Self {
        Self {
            latest: 0,
            pending: None,
        }
    }
}

impl<V> Debounce<V> {
    pub fn input(&mut self, value: V) -> DebounceToken {
        self.latest += 1;
        self.pending = Some(value);
        DebounceToken(self.latest)
    }

    /// The pending value, if `token` is still the most recent one.
    pub fn settle(&mut self, token: DebounceToken) -> Option<V> {
        if token.0 != self.latest {
            return None;
        }
        self.pending.take()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_last_keystroke_settles() {
        let mut debounce = Debounce::default();
        let t1 = debounce.input("a".to_string());
        let t2 = debounce.input("ac".to_string());
        let t3 = debounce.input("acm".to_string());

        assert_eq!(debounce.settle(t1), None);
        assert_eq!(debounce.settle(t2), None);
        assert_eq!(debounce.settle(t3).as_deref(), Some("acm"));
        assert!(!debounce.is_pending());
        assert_eq!(debounce.settle(t3), None);
    }
}
