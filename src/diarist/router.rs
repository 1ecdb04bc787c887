//! # Interaction Router
//!
//! Turns raw input events into calls on the store, the confirmation flow, the
//! theme and the view. All mutable session state lives in [`Session`]: the draft
//! being typed, the start of an in-progress touch gesture, and the collaborators
//! themselves.
//!
//! Every event runs to completion before the next one is handled. The only thing
//! that waits is a delete request, which sits in the confirmation flow until one
//! of its triggers arrives.

use crate::confirm::{ConfirmState, ConfirmationFlow, OpenOutcome, Trigger};
use crate::config::DiaristConfig;
use crate::model::{Direction, Entry, ThemePreference};
use crate::present::{self, EntryView, View};
use crate::script::TextStyle;
use crate::store::{DeleteOutcome, EntryStore, StorageBackend};
use crate::theme::{ColorSchemeSource, ThemeControl};
use std::rc::Rc;

pub const DELETE_PROMPT: &str = "Are you sure you want to delete this entry?";
pub const DELETE_PROMPT_RTL: &str = "האם אתה בטוח שברצונך למחוק רשומה זו?";

/// Keys the router cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Escape,
    Char(char),
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    pub ctrl: bool,
    pub meta: bool,
}

impl KeyPress {
    pub fn plain(key: Key) -> Self {
        Self {
            key,
            ctrl: false,
            meta: false,
        }
    }

    pub fn ctrl(key: Key) -> Self {
        Self {
            key,
            ctrl: true,
            meta: false,
        }
    }

    pub fn meta(key: Key) -> Self {
        Self {
            key,
            ctrl: false,
            meta: true,
        }
    }

    fn is_save_combo(&self) -> bool {
        self.key == Key::Enter && (self.ctrl || self.meta)
    }
}

/// Raw input, as delivered by the host surface.
///
/// Rows are 0-based indexes into the newest-first list as last rendered.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    SaveClicked,
    KeyDown(KeyPress),
    TextChanged(String),
    DeleteClicked { row: usize },
    TouchStart { x: f64 },
    TouchEnd { x: f64, row: Option<usize> },
    Swipe { start_x: f64, end_x: f64, row: Option<usize> },
    ThemeToggled,
    ConfirmClicked,
    CancelClicked,
    /// A click on the confirmation overlay; `on_backdrop` is false when the click
    /// landed on the prompt surface itself.
    OverlayClicked { on_backdrop: bool },
}

/// Work carried out of an accepted confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowUp {
    Delete { position: usize },
}

/// What handling an event did.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteOutcome {
    Ignored,
    PreviewUpdated(Direction),
    Saved { position: usize },
    /// The draft was blank; nothing was stored.
    SaveSkipped,
    ConfirmationRequested { position: usize },
    /// A confirmation is already open; the new request was dropped.
    ConfirmationBusy,
    Deleted { position: usize },
    /// The confirmed position no longer exists; nothing was deleted.
    DeleteNotFound { position: usize },
    Cancelled,
    ThemeChanged(ThemePreference),
    /// A storage write failed. The error has been logged.
    Failed(String),
}

/// Options the router takes from configuration.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub swipe_threshold: f64,
    pub entries_key: String,
    pub theme_key: String,
}

impl From<&DiaristConfig> for SessionOptions {
    fn from(config: &DiaristConfig) -> Self {
        Self {
            swipe_threshold: config.swipe_threshold,
            entries_key: config.entries_key.clone(),
            theme_key: config.theme_key.clone(),
        }
    }
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self::from(&DiaristConfig::default())
    }
}

/// Touch-start position of the gesture in progress.
#[derive(Debug, Clone, Copy, Default)]
struct GestureTracker {
    start_x: Option<f64>,
}

/// Everything one journal session needs.
pub struct Session<B: StorageBackend, V: View> {
    store: EntryStore<Rc<B>>,
    theme: ThemeControl<Rc<B>>,
    confirm: ConfirmationFlow<Option<FollowUp>>,
    view: V,
    draft: String,
    gesture: GestureTracker,
    swipe_threshold: f64,
}

impl<B: StorageBackend, V: View> Session<B, V> {
    pub fn new(
        backend: Rc<B>,
        view: V,
        options: &SessionOptions,
        system: &dyn ColorSchemeSource,
    ) -> Self {
        let store = EntryStore::with_key(Rc::clone(&backend), &options.entries_key);
        let theme = ThemeControl::initialize_with_key(backend, &options.theme_key, system);
        Self {
            store,
            theme,
            confirm: ConfirmationFlow::new(),
            view,
            draft: String::new(),
            gesture: GestureTracker::default(),
            swipe_threshold: options.swipe_threshold,
        }
    }

    /// Initial paint: theme indicators, the whole list, an empty LTR input.
    pub fn start(&mut self) {
        self.view.set_theme_indicators(self.theme.current().is_dark);
        self.render_all();
        self.view.set_input_style(&TextStyle::plain());
    }

    /// Re-renders the whole list from a fresh load.
    pub fn render_all(&mut self) {
        let entries = self.store.load();
        self.view.render_full_list(&present::present_list(&entries));
    }

    pub fn store(&self) -> &EntryStore<Rc<B>> {
        &self.store
    }

    pub fn theme(&self) -> ThemePreference {
        self.theme.current()
    }

    pub fn confirm_state(&self) -> ConfirmState {
        self.confirm.state()
    }

    #[cfg(test)]
    pub(crate) fn confirmation(&self) -> &ConfirmationFlow<Option<FollowUp>> {
        &self.confirm
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn handle(&mut self, event: InputEvent) -> RouteOutcome {
        tracing::trace!(?event, "input event");
        match event {
            InputEvent::SaveClicked => self.save(),
            InputEvent::KeyDown(press) => self.key_down(press),
            InputEvent::TextChanged(text) => self.text_changed(text),
            InputEvent::DeleteClicked { row } => self.request_delete(row),
            InputEvent::TouchStart { x } => {
                self.gesture.start_x = Some(x);
                RouteOutcome::Ignored
            }
            InputEvent::TouchEnd { x, row } => match self.gesture.start_x.take() {
                Some(start_x) => self.swipe(start_x, x, row),
                None => RouteOutcome::Ignored,
            },
            InputEvent::Swipe {
                start_x,
                end_x,
                row,
            } => self.swipe(start_x, end_x, row),
            InputEvent::ThemeToggled => self.toggle_theme(),
            InputEvent::ConfirmClicked => self.deliver(Trigger::Accept),
            InputEvent::CancelClicked => self.deliver(Trigger::Reject),
            InputEvent::OverlayClicked { on_backdrop: true } => self.deliver(Trigger::Backdrop),
            InputEvent::OverlayClicked { on_backdrop: false } => RouteOutcome::Ignored,
        }
    }

    fn key_down(&mut self, press: KeyPress) -> RouteOutcome {
        if press.key == Key::Escape {
            return self.deliver(Trigger::Escape);
        }
        if press.is_save_combo() {
            return self.save();
        }
        RouteOutcome::Ignored
    }

    fn text_changed(&mut self, text: String) -> RouteOutcome {
        let style = TextStyle::of(&text);
        self.draft = text;
        self.view.set_input_style(&style);
        RouteOutcome::PreviewUpdated(style.direction)
    }

    fn save(&mut self) -> RouteOutcome {
        match self.store.append(&self.draft) {
            Ok(Some(appended)) => {
                let view = EntryView::new(&appended.entry, appended.position);
                self.view.render_new_entry(&view);
                self.draft.clear();
                self.view.clear_input();
                self.view.set_input_style(&TextStyle::plain());
                RouteOutcome::Saved {
                    position: appended.position,
                }
            }
            Ok(None) => RouteOutcome::SaveSkipped,
            Err(err) => {
                tracing::error!(%err, "failed to save entry");
                RouteOutcome::Failed(err.to_string())
            }
        }
    }

    fn swipe(&mut self, start_x: f64, end_x: f64, row: Option<usize>) -> RouteOutcome {
        let delta = end_x - start_x;
        match row {
            Some(row) if delta <= -self.swipe_threshold => {
                tracing::debug!(delta, row, "swipe qualifies as delete");
                self.request_delete(row)
            }
            _ => RouteOutcome::Ignored,
        }
    }

    fn request_delete(&mut self, row: usize) -> RouteOutcome {
        let entries = self.store.load();
        let Some(position) = present::store_position(row, entries.len()) else {
            tracing::debug!(row, len = entries.len(), "delete requested for a row that no longer exists");
            return RouteOutcome::Ignored;
        };
        let prompt = delete_prompt(&entries[position]);

        match self.confirm.open(
            prompt,
            move || Some(FollowUp::Delete { position }),
            || None,
        ) {
            OpenOutcome::Opened => {
                if let Some(pending) = self.confirm.pending() {
                    self.view.show_confirmation(pending.prompt(), pending.style());
                }
                RouteOutcome::ConfirmationRequested { position }
            }
            OpenOutcome::AlreadyOpen => RouteOutcome::ConfirmationBusy,
        }
    }

    fn deliver(&mut self, trigger: Trigger) -> RouteOutcome {
        let Some(resolution) = self.confirm.resolve(trigger) else {
            return RouteOutcome::Ignored;
        };
        self.view.hide_confirmation();

        match resolution.output {
            Some(FollowUp::Delete { position }) => self.delete(position),
            None => RouteOutcome::Cancelled,
        }
    }

    fn delete(&mut self, position: usize) -> RouteOutcome {
        if position < self.store.len() {
            self.view.mark_removed(position);
        }
        let outcome = match self.store.delete_at(position) {
            Ok(DeleteOutcome::Removed(_)) => RouteOutcome::Deleted { position },
            Ok(DeleteOutcome::NotFound) => RouteOutcome::DeleteNotFound { position },
            Err(err) => {
                tracing::error!(%err, position, "failed to delete entry");
                RouteOutcome::Failed(err.to_string())
            }
        };
        self.render_all();
        outcome
    }

    fn toggle_theme(&mut self) -> RouteOutcome {
        let result = self.theme.toggle();
        self.view.set_theme_indicators(self.theme.current().is_dark);
        match result {
            Ok(preference) => RouteOutcome::ThemeChanged(preference),
            Err(err) => {
                tracing::error!(%err, "failed to persist theme preference");
                RouteOutcome::Failed(err.to_string())
            }
        }
    }
}

/// The delete prompt, in the language of the entry it is about.
pub fn delete_prompt(entry: &Entry) -> &'static str {
    if entry.direction.is_rtl() {
        DELETE_PROMPT_RTL
    } else {
        DELETE_PROMPT
    }
}
