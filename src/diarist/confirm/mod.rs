//! # Confirmation Flow
//!
//! A one-shot, cancelable accept/reject gate placed in front of destructive
//! actions.
//!
//! ```text
//!   Idle ──open()──▶ Open ──Accept──────────────▶ Idle  (on_accept runs)
//!                     │ ──Reject/Backdrop/Escape─▶ Idle  (on_reject runs)
//!                     └─ open() again ─▶ AlreadyOpen, nothing changes
//! ```
//!
//! Each open instance subscribes one listener per [`Trigger`] and owns the
//! returned [`Subscription`] guards. Whichever trigger arrives first resolves the
//! instance, runs exactly one callback and drops every guard, so the next
//! `open()` starts with a clean listener table.
//!
//! Callbacks return a value of type `T`, handed back to the caller in the
//! [`Resolution`]. The router uses this to carry a follow-up action out of the
//! flow instead of letting callbacks reach back into shared state.

pub mod listeners;

pub use listeners::{Listeners, Subscription, Trigger};

use crate::script::TextStyle;

pub type Callback<T> = Box<dyn FnOnce() -> T>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmState {
    Idle,
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Accepted,
    Rejected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenOutcome {
    Opened,
    /// Another confirmation is still open; the request was dropped.
    AlreadyOpen,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution<T> {
    pub decision: Decision,
    pub trigger: Trigger,
    pub output: T,
}

/// The single open confirmation.
pub struct PendingConfirmation<T> {
    prompt: String,
    style: TextStyle,
    on_accept: Callback<T>,
    on_reject: Callback<T>,
    subscriptions: Vec<Subscription>,
}

impl<T> PendingConfirmation<T> {
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn style(&self) -> &TextStyle {
        &self.style
    }
}

pub struct ConfirmationFlow<T> {
    listeners: Listeners,
    pending: Option<PendingConfirmation<T>>,
}

impl<T> Default for ConfirmationFlow<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ConfirmationFlow<T> {
    pub fn new() -> Self {
        Self {
            listeners: Listeners::new(),
            pending: None,
        }
    }

    pub fn state(&self) -> ConfirmState {
        if self.pending.is_some() {
            ConfirmState::Open
        } else {
            ConfirmState::Idle
        }
    }

    pub fn pending(&self) -> Option<&PendingConfirmation<T>> {
        self.pending.as_ref()
    }

    #[cfg(test)]
    pub(crate) fn listeners(&self) -> &Listeners {
        &self.listeners
    }

    pub fn open<A, R>(&mut self, prompt: impl Into<String>, on_accept: A, on_reject: R) -> OpenOutcome
    where
        A: FnOnce() -> T + 'static,
        R: FnOnce() -> T + 'static,
    {
        let prompt = prompt.into();
        if self.pending.is_some() {
            tracing::warn!(%prompt, "confirmation already open; ignoring request");
            return OpenOutcome::AlreadyOpen;
        }

        let subscriptions: Vec<Subscription> = Trigger::ALL
            .iter()
            .map(|trigger| self.listeners.subscribe(*trigger))
            .collect();
        let style = TextStyle::of(&prompt);

        tracing::debug!(%prompt, direction = %style.direction, "confirmation opened");
        self.pending = Some(PendingConfirmation {
            prompt,
            style,
            on_accept: Box::new(on_accept),
            on_reject: Box::new(on_reject),
            subscriptions,
        });
        OpenOutcome::Opened
    }

    /// Delivers `trigger` to the open instance.
    ///
    /// Returns `None` when nothing is open or nothing listens for `trigger`.
    /// Otherwise the instance is torn down (listeners first), its callback runs,
    /// and the flow is back to [`ConfirmState::Idle`].
    pub fn resolve(&mut self, trigger: Trigger) -> Option<Resolution<T>> {
        if !self.listeners.is_listening(trigger) {
            return None;
        }
        let pending = self.pending.take()?;
        let PendingConfirmation {
            on_accept,
            on_reject,
            subscriptions,
            ..
        } = pending;
        drop(subscriptions);

        let (decision, callback) = match trigger {
            Trigger::Accept => (Decision::Accepted, on_accept),
            Trigger::Reject | Trigger::Backdrop | Trigger::Escape => (Decision::Rejected, on_reject),
        };
        tracing::debug!(?trigger, ?decision, "confirmation resolved");

        Some(Resolution {
            decision,
            trigger,
            output: callback(),
        })
    }
}
