//! Application Context
//!
//! Shared state provided via Leptos Context API: transient notifications,
//! the builder mode, and reload triggers.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use outfit_core::{BuilderMode, OutfitError};

/// How long a notification stays on screen
pub const NOTICE_TIMEOUT_MS: u32 = 4000;
/// Older notifications are dropped beyond this many
pub const MAX_NOTICES: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: u32,
    pub kind: NoticeKind,
    pub text: String,
}

/// Notifications currently shown, oldest first
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoticeQueue {
    next_id: u32,
    notices: Vec<Notice>,
}

impl NoticeQueue {
    /// Append a notice and return its id
    pub fn push(&mut self, kind: NoticeKind, text: String) -> u32 {
        self.next_id += 1;
        self.notices.push(Notice {
            id: self.next_id,
            kind,
            text,
        });
        if self.notices.len() > MAX_NOTICES {
            let overflow = self.notices.len() - MAX_NOTICES;
            self.notices.drain(..overflow);
        }
        self.next_id
    }

    pub fn dismiss(&mut self, id: u32) {
        self.notices.retain(|notice| notice.id != id);
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub notices: ReadSignal<NoticeQueue>,
    set_notices: WriteSignal<NoticeQueue>,
    /// Create or edit(id); decides what saving does
    pub mode: ReadSignal<BuilderMode>,
    set_mode: WriteSignal<BuilderMode>,
    /// Bumped to refetch the wardrobe palette
    pub palette_version: ReadSignal<u32>,
    set_palette_version: WriteSignal<u32>,
    /// Bumped to refetch the saved outfit lists
    pub history_version: ReadSignal<u32>,
    set_history_version: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(mode: BuilderMode) -> Self {
        let (notices, set_notices) = signal(NoticeQueue::default());
        let (mode, set_mode) = signal(mode);
        let (palette_version, set_palette_version) = signal(0u32);
        let (history_version, set_history_version) = signal(0u32);
        Self {
            notices,
            set_notices,
            mode,
            set_mode,
            palette_version,
            set_palette_version,
            history_version,
            set_history_version,
        }
    }

    /// Show a notification that dismisses itself
    pub fn notify(&self, kind: NoticeKind, text: impl Into<String>) {
        let mut id = 0;
        let text = text.into();
        self.set_notices.update(|queue| id = queue.push(kind, text));
        let set_notices = self.set_notices;
        spawn_local(async move {
            TimeoutFuture::new(NOTICE_TIMEOUT_MS).await;
            set_notices.update(|queue| queue.dismiss(id));
        });
    }

    pub fn success(&self, text: impl Into<String>) {
        self.notify(NoticeKind::Success, text);
    }

    /// Report a failed command; constraint violations are expected and only warned
    pub fn error(&self, err: &OutfitError) {
        if err.is_constraint() {
            log::warn!("{err}");
        } else {
            log::error!("{err}");
        }
        self.notify(NoticeKind::Error, err.to_string());
    }

    pub fn dismiss(&self, id: u32) {
        self.set_notices.update(|queue| queue.dismiss(id));
    }

    pub fn set_mode(&self, mode: BuilderMode) {
        self.set_mode.set(mode);
    }

    pub fn reload_palette(&self) {
        self.set_palette_version.update(|v| *v += 1);
    }

    pub fn reload_history(&self) {
        self.set_history_version.update(|v| *v += 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_keeps_newest() {
        let mut queue = NoticeQueue::default();
        for n in 0..5 {
            queue.push(NoticeKind::Error, format!("failure {n}"));
        }
        let texts: Vec<&str> = queue.notices().iter().map(|n| n.text.as_str()).collect();
        assert_eq!(texts, vec!["failure 2", "failure 3", "failure 4"]);
    }

    #[test]
    fn test_dismiss() {
        let mut queue = NoticeQueue::default();
        let saved = queue.push(NoticeKind::Success, "Outfit saved".to_string());
        let failed = queue.push(NoticeKind::Error, "Network error".to_string());

        queue.dismiss(saved);
        queue.dismiss(saved);

        assert_eq!(queue.notices().len(), 1);
        assert_eq!(queue.notices()[0].id, failed);
    }
}
