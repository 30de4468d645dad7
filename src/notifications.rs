//! User-facing notifications raised by studio actions.
//!
//! Every handler that can succeed partially or fail reports through a
//! `Toast`. The studio keeps recent toasts in a `ToastManager` so a front
//! end can render and expire them.

use crate::constants::MAX_TOASTS;
use std::time::{Duration, Instant};

/// Severity of a toast
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastVariant {
    Success,
    Info,
    Warning,
    Error,
}

impl ToastVariant {
    pub fn default_duration(&self) -> Duration {
        match self {
            ToastVariant::Success | ToastVariant::Info => Duration::from_secs(3),
            ToastVariant::Warning => Duration::from_secs(4),
            ToastVariant::Error => Duration::from_secs(5),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Toast {
    /// Assigned by `ToastManager::push`; zero until then
    pub id: u64,
    pub message: String,
    pub variant: ToastVariant,
    pub duration: Duration,
    created_at: Instant,
}

impl Toast {
    fn new(message: impl Into<String>, variant: ToastVariant) -> Self {
        Self {
            id: 0,
            message: message.into(),
            variant,
            duration: variant.default_duration(),
            created_at: Instant::now(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, ToastVariant::Success)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, ToastVariant::Info)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, ToastVariant::Warning)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, ToastVariant::Error)
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }

    /// Fraction of the display time left, in `0.0..=1.0`
    pub fn remaining_percent(&self) -> f32 {
        if self.duration.is_zero() {
            return 0.0;
        }
        let elapsed = self.created_at.elapsed().as_secs_f32();
        (1.0 - elapsed / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }
}

/// Recent toasts, oldest first
#[derive(Default)]
pub struct ToastManager {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `toast` and return it with its assigned id.
    ///
    /// Expired toasts are pruned first and at most `MAX_TOASTS` are kept,
    /// dropping the oldest.
    pub fn push(&mut self, mut toast: Toast) -> Toast {
        self.next_id += 1;
        toast.id = self.next_id;
        match toast.variant {
            ToastVariant::Error => tracing::error!("{}", toast.message),
            ToastVariant::Warning => tracing::warn!("{}", toast.message),
            ToastVariant::Success | ToastVariant::Info => tracing::info!("{}", toast.message),
        }
        self.remove_expired();
        if self.toasts.len() >= MAX_TOASTS {
            let excess = self.toasts.len() + 1 - MAX_TOASTS;
            self.toasts.drain(..excess);
        }
        self.toasts.push(toast.clone());
        toast
    }

    pub fn remove(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn remove_expired(&mut self) {
        self.toasts.retain(|t| !t.is_expired());
    }

    pub fn latest(&self) -> Option<&Toast> {
        self.toasts.last()
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn count(&self) -> usize {
        self.toasts.len()
    }

    pub fn clear(&mut self) {
        self.toasts.clear();
    }
}
