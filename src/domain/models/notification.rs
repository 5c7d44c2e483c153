//! Transient notifications ("toasts") and their countdown bookkeeping.
//!
//! The queue never reads the clock itself: every operation that depends on
//! time takes `now`, so the same code drives the browser surface and tests.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::constants::TOAST_AUTO_CLOSE_MS;
use crate::shared::logging::log_notification_dropped;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ToastId(Uuid);

impl ToastId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for ToastId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
            ToastKind::Info => "info",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ToastKind::Success => "✅",
            ToastKind::Error => "❌",
            ToastKind::Info => "ℹ️",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ToastConfig {
    pub auto_close: Duration,
    /// When false, new toasts stack below older ones.
    pub newest_on_top: bool,
    pub pause_on_hover: bool,
    pub pause_on_focus_loss: bool,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            auto_close: Duration::milliseconds(TOAST_AUTO_CLOSE_MS),
            newest_on_top: false,
            pause_on_hover: true,
            pause_on_focus_loss: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: ToastId,
    pub kind: ToastKind,
    pub message: String,
    pub posted_at: DateTime<Utc>,
    remaining: Duration,
    running_since: Option<DateTime<Utc>>,
    hovered: bool,
}

impl Toast {
    /// Fold elapsed running time into `remaining`.
    fn settle(&mut self, now: DateTime<Utc>) {
        if let Some(since) = self.running_since {
            let elapsed = (now - since).max(Duration::zero());
            self.remaining -= elapsed;
            self.running_since = Some(now);
        }
    }

    fn remaining_at(&self, now: DateTime<Utc>) -> Duration {
        match self.running_since {
            Some(since) => self.remaining - (now - since).max(Duration::zero()),
            None => self.remaining,
        }
    }

    pub fn is_paused(&self) -> bool {
        self.running_since.is_none()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NotificationQueue {
    config: ToastConfig,
    items: Vec<Toast>,
    surface_focused: bool,
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::new(ToastConfig::default())
    }
}

impl NotificationQueue {
    pub fn new(config: ToastConfig) -> Self {
        Self { config, items: Vec::new(), surface_focused: true }
    }

    /// Post a message. Blank messages are dropped and yield `None`.
    pub fn post(&mut self, kind: ToastKind, message: impl Into<String>, now: DateTime<Utc>) -> Option<ToastId> {
        let message = message.into();
        if message.trim().is_empty() {
            log_notification_dropped(kind.as_str(), "empty message");
            return None;
        }

        let mut toast = Toast {
            id: ToastId::new(),
            kind,
            message,
            posted_at: now,
            remaining: self.config.auto_close,
            running_since: None,
            hovered: false,
        };
        if self.should_run(&toast) {
            toast.running_since = Some(now);
        }
        let id = toast.id;
        self.items.push(toast);
        Some(id)
    }

    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let before = self.items.len();
        self.items.retain(|t| t.id != id);
        self.items.len() != before
    }

    pub fn set_hovered(&mut self, id: ToastId, hovered: bool, now: DateTime<Utc>) {
        let Some(index) = self.items.iter().position(|t| t.id == id) else {
            return;
        };
        self.items[index].hovered = hovered;
        self.refresh_clock(index, now);
    }

    pub fn set_surface_focused(&mut self, focused: bool, now: DateTime<Utc>) {
        if self.surface_focused == focused {
            return;
        }
        self.surface_focused = focused;
        for index in 0..self.items.len() {
            self.refresh_clock(index, now);
        }
    }

    pub fn is_surface_focused(&self) -> bool {
        self.surface_focused
    }

    /// Remove every toast whose countdown has run out.
    pub fn tick(&mut self, now: DateTime<Utc>) -> Vec<ToastId> {
        let mut expired = Vec::new();
        self.items.retain(|t| {
            let done = t.remaining_at(now) <= Duration::zero();
            if done {
                expired.push(t.id);
            }
            !done
        });
        expired
    }

    /// True when `tick(now)` would remove something.
    pub fn has_expired(&self, now: DateTime<Utc>) -> bool {
        self.items.iter().any(|t| t.remaining_at(now) <= Duration::zero())
    }

    /// Toasts in display order, top to bottom.
    pub fn visible(&self) -> Vec<&Toast> {
        let mut toasts: Vec<&Toast> = self.items.iter().collect();
        if self.config.newest_on_top {
            toasts.reverse();
        }
        toasts
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_paused(&self, id: ToastId) -> Option<bool> {
        self.items.iter().find(|t| t.id == id).map(Toast::is_paused)
    }

    pub fn remaining(&self, id: ToastId, now: DateTime<Utc>) -> Option<Duration> {
        self.items.iter().find(|t| t.id == id).map(|t| t.remaining_at(now))
    }

    fn should_run(&self, toast: &Toast) -> bool {
        let hover_pause = self.config.pause_on_hover && toast.hovered;
        let focus_pause = self.config.pause_on_focus_loss && !self.surface_focused;
        !hover_pause && !focus_pause
    }

    fn refresh_clock(&mut self, index: usize, now: DateTime<Utc>) {
        let run = self.should_run(&self.items[index]);
        let toast = &mut self.items[index];
        toast.settle(now);
        toast.running_since = if run { Some(now) } else { None };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, 10, 0, 0).unwrap()
    }

    fn ms(n: i64) -> Duration {
        Duration::milliseconds(n)
    }

    #[test]
    fn test_blank_message_is_dropped() {
        let mut queue = NotificationQueue::default();
        assert!(queue.post(ToastKind::Info, "   ", t0()).is_none());
        assert!(queue.post(ToastKind::Error, "", t0()).is_none());
        assert!(queue.is_empty());
    }

    #[test]
    fn test_message_text_is_kept_verbatim() {
        let mut queue = NotificationQueue::default();
        let id = queue.post(ToastKind::Info, "  indented\n", t0()).unwrap();
        let toast = queue.visible().into_iter().find(|t| t.id == id).unwrap();
        assert_eq!(toast.message, "  indented\n");
    }

    #[test]
    fn test_auto_close_after_five_seconds() {
        let mut queue = NotificationQueue::default();
        let id = queue.post(ToastKind::Success, "Saved", t0()).unwrap();

        assert!(queue.tick(t0() + ms(4_999)).is_empty());
        assert_eq!(queue.tick(t0() + ms(5_000)), vec![id]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_early_dismiss() {
        let mut queue = NotificationQueue::default();
        let id = queue.post(ToastKind::Info, "Hello", t0()).unwrap();
        assert!(queue.dismiss(id));
        assert!(!queue.dismiss(id));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_five_toasts_stack_and_hover_pauses_only_one() {
        let mut queue = NotificationQueue::default();
        let ids: Vec<ToastId> = (0..5)
            .map(|i| {
                queue
                    .post(ToastKind::Info, format!("message {}", i), t0() + ms(i * 200))
                    .unwrap()
            })
            .collect();

        let one_second = t0() + ms(1_000);
        assert!(queue.tick(one_second).is_empty());
        let order: Vec<ToastId> = queue.visible().iter().map(|t| t.id).collect();
        assert_eq!(order, ids);

        queue.set_hovered(ids[0], true, one_second);
        assert_eq!(queue.is_paused(ids[0]), Some(true));
        for id in &ids[1..] {
            assert_eq!(queue.is_paused(*id), Some(false));
        }

        let removed = queue.tick(t0() + ms(6_000));
        assert_eq!(removed, ids[1..].to_vec());
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.remaining(ids[0], t0() + ms(6_000)), Some(ms(4_000)));
    }

    #[test]
    fn test_hover_resume_continues_countdown() {
        let mut queue = NotificationQueue::default();
        let id = queue.post(ToastKind::Error, "Failed", t0()).unwrap();

        queue.set_hovered(id, true, t0() + ms(2_000));
        queue.set_hovered(id, false, t0() + ms(10_000));

        assert!(queue.tick(t0() + ms(12_999)).is_empty());
        assert_eq!(queue.tick(t0() + ms(13_000)), vec![id]);
    }

    #[test]
    fn test_focus_loss_pauses_every_toast() {
        let mut queue = NotificationQueue::default();
        let a = queue.post(ToastKind::Info, "a", t0()).unwrap();
        let b = queue.post(ToastKind::Info, "b", t0()).unwrap();

        queue.set_surface_focused(false, t0() + ms(1_000));
        assert_eq!(queue.is_paused(a), Some(true));
        assert_eq!(queue.is_paused(b), Some(true));
        assert!(queue.tick(t0() + ms(60_000)).is_empty());

        queue.set_surface_focused(true, t0() + ms(60_000));
        assert_eq!(queue.remaining(a, t0() + ms(60_000)), Some(ms(4_000)));
    }

    #[test]
    fn test_toast_posted_while_unfocused_starts_paused() {
        let mut queue = NotificationQueue::default();
        queue.set_surface_focused(false, t0());
        let id = queue.post(ToastKind::Info, "later", t0()).unwrap();
        assert_eq!(queue.is_paused(id), Some(true));
    }

    #[test]
    fn test_newest_on_top_reverses_order() {
        let mut queue = NotificationQueue::new(ToastConfig { newest_on_top: true, ..ToastConfig::default() });
        let first = queue.post(ToastKind::Info, "first", t0()).unwrap();
        let second = queue.post(ToastKind::Info, "second", t0()).unwrap();
        let order: Vec<ToastId> = queue.visible().iter().map(|t| t.id).collect();
        assert_eq!(order, vec![second, first]);
    }

    #[test]
    fn test_hover_ignored_when_disabled() {
        let mut queue = NotificationQueue::new(ToastConfig { pause_on_hover: false, ..ToastConfig::default() });
        let id = queue.post(ToastKind::Info, "x", t0()).unwrap();
        queue.set_hovered(id, true, t0());
        assert_eq!(queue.is_paused(id), Some(false));
    }
}
