//! # Presentation Adapter
//!
//! The boundary between the journal core and whatever surface draws it.
//!
//! The store keeps entries oldest first; every surface shows them newest first.
//! This module owns that reversal, and the way back: a row on screen is turned
//! into a store position with [`store_position`]. Rows are only meaningful
//! against the collection they were rendered from; after any delete the list has
//! to be re-rendered from a fresh load.
//!
//! Presentation hints come from what was stored with the entry, never from the
//! text again. The font is applied only when the stored direction is RTL.

use crate::model::Entry;
use crate::script::TextStyle;
use chrono::{DateTime, Local, Utc};

/// One entry, ready to draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryView {
    /// Position in the stored sequence.
    pub position: usize,
    pub text: String,
    pub date: DateTime<Utc>,
    pub style: TextStyle,
}

impl EntryView {
    pub fn new(entry: &Entry, position: usize) -> Self {
        Self {
            position,
            text: entry.text.clone(),
            date: entry.date,
            style: TextStyle::new(entry.direction, &entry.font_family),
        }
    }

    /// 1-based number shown to the user, derived from the store position.
    pub fn number(&self) -> usize {
        self.position + 1
    }

    pub fn header(&self) -> String {
        format!("Entry {} - {}", self.number(), format_date(self.date))
    }

    /// The entry text as a paragraph carrying its direction and font.
    pub fn markup(&self) -> String {
        let style = match &self.style.font {
            Some(font) => format!(" style=\"font-family: {}\"", escape(font.css())),
            None => String::new(),
        };
        format!(
            "<p dir=\"{}\"{}>{}</p>",
            self.style.direction,
            style,
            escape(&self.text)
        )
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Long-form local date, e.g. `March 1, 2024 10:20`.
pub fn format_date(date: DateTime<Utc>) -> String {
    date.with_timezone(&Local)
        .format("%B %-d, %Y %H:%M")
        .to_string()
}

/// Entries in presentation order: newest first.
pub fn present_list(entries: &[Entry]) -> Vec<EntryView> {
    entries
        .iter()
        .enumerate()
        .rev()
        .map(|(position, entry)| EntryView::new(entry, position))
        .collect()
}

/// Maps a 0-based row of the newest-first list back to a store position.
pub fn store_position(row: usize, len: usize) -> Option<usize> {
    (row < len).then(|| len - 1 - row)
}

/// A rendering surface.
///
/// Implementations draw; they never touch storage and never decide anything.
pub trait View {
    /// Replace everything shown with `entries` (already newest first).
    fn render_full_list(&mut self, entries: &[EntryView]);

    /// Show a freshly appended entry at the top of the list.
    fn render_new_entry(&mut self, entry: &EntryView);

    /// The entry at store `position` is about to go away.
    fn mark_removed(&mut self, position: usize);

    fn set_theme_indicators(&mut self, is_dark: bool);

    /// Direction and font of the text being typed.
    fn set_input_style(&mut self, style: &TextStyle);

    fn clear_input(&mut self);

    fn show_confirmation(&mut self, prompt: &str, style: &TextStyle);

    fn hide_confirmation(&mut self);
}

#[cfg(any(test, feature = "test_utils"))]
pub mod recording {
    use super::*;

    /// Everything a [`RecordingView`] was asked to do.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum ViewCall {
        FullList(Vec<EntryView>),
        NewEntry(EntryView),
        MarkRemoved(usize),
        ThemeIndicators(bool),
        InputStyle(TextStyle),
        ClearInput,
        ShowConfirmation(String, TextStyle),
        HideConfirmation,
    }

    #[derive(Debug, Default)]
    pub struct RecordingView {
        pub calls: Vec<ViewCall>,
    }

    impl RecordingView {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn take(&mut self) -> Vec<ViewCall> {
            std::mem::take(&mut self.calls)
        }

        pub fn last_full_list(&self) -> Option<&[EntryView]> {
            self.calls.iter().rev().find_map(|call| match call {
                ViewCall::FullList(entries) => Some(entries.as_slice()),
                _ => None,
            })
        }

        pub fn confirmation_shown(&self) -> Option<&str> {
            self.calls.iter().rev().find_map(|call| match call {
                ViewCall::ShowConfirmation(prompt, _) => Some(prompt.as_str()),
                _ => None,
            })
        }
    }

    impl View for RecordingView {
        fn render_full_list(&mut self, entries: &[EntryView]) {
            self.calls.push(ViewCall::FullList(entries.to_vec()));
        }

        fn render_new_entry(&mut self, entry: &EntryView) {
            self.calls.push(ViewCall::NewEntry(entry.clone()));
        }

        fn mark_removed(&mut self, position: usize) {
            self.calls.push(ViewCall::MarkRemoved(position));
        }

        fn set_theme_indicators(&mut self, is_dark: bool) {
            self.calls.push(ViewCall::ThemeIndicators(is_dark));
        }

        fn set_input_style(&mut self, style: &TextStyle) {
            self.calls.push(ViewCall::InputStyle(style.clone()));
        }

        fn clear_input(&mut self) {
            self.calls.push(ViewCall::ClearInput);
        }

        fn show_confirmation(&mut self, prompt: &str, style: &TextStyle) {
            self.calls
                .push(ViewCall::ShowConfirmation(prompt.to_string(), style.clone()));
        }

        fn hide_confirmation(&mut self) {
            self.calls.push(ViewCall::HideConfirmation);
        }
    }
}
