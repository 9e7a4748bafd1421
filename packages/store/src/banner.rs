//! Transient success/error banners shown above a view.
//!
//! Each banner gets a fresh id so a dismiss timer started for an older banner
//! never removes a newer one.

use std::time::Duration;

pub const SUCCESS_DISMISS: Duration = Duration::from_secs(3);
pub const ERROR_DISMISS: Duration = Duration::from_secs(5);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Banner {
    pub id: u64,
    pub kind: BannerKind,
    pub message: String,
}

impl Banner {
    pub fn dismiss_after(&self) -> Duration {
        match self.kind {
            BannerKind::Success => SUCCESS_DISMISS,
            BannerKind::Error => ERROR_DISMISS,
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == BannerKind::Error
    }
}

/// Holds at most one banner; a new one replaces the current.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BannerSlot {
    current: Option<Banner>,
    next_id: u64,
}

impl BannerSlot {
    pub fn current(&self) -> Option<&Banner> {
        self.current.as_ref()
    }

    pub fn success(&mut self, message: impl Into<String>) -> Banner {
        self.show(BannerKind::Success, message.into())
    }

    pub fn error(&mut self, message: impl Into<String>) -> Banner {
        self.show(BannerKind::Error, message.into())
    }

    fn show(&mut self, kind: BannerKind, message: String) -> Banner {
        self.next_id += 1;
        let banner = Banner {
            id: self.next_id,
            kind,
            message,
        };
        self.current = Some(banner.clone());
        banner
    }

    /// Remove the banner with `id`. Returns false if it was already replaced.
    pub fn dismiss(&mut self, id: u64) -> bool {
        if self.current.as_ref().is_some_and(|b| b.id == id) {
            self.current = None;
            return true;
        }
        false
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dismiss_timing_by_kind() {
        let mut slot = BannerSlot::default();
        assert_eq!(slot.success("Saved").dismiss_after(), Duration::from_secs(3));
        assert_eq!(slot.error("Nope").dismiss_after(), Duration::from_secs(5));
    }

    #[test]
    fn test_stale_dismiss_keeps_newer_banner() {
        let mut slot = BannerSlot::default();
        let first = slot.success("Project created");
        let second = slot.error("Failed to fetch projects");

        assert!(!slot.dismiss(first.id));
        assert_eq!(slot.current(), Some(&second));
        assert!(slot.dismiss(second.id));
        assert!(slot.current().is_none());
    }
}
