//! # Terminal View
//!
//! A [`View`] that draws the journal as styled text on any `io::Write`.
//!
//! Rendering goes through minijinja templates (see [`templates`]) with a `style`
//! filter that maps semantic style names onto the light or dark [`styles`]
//! palette. Color is optional; with `use_color` off the filter passes text
//! through untouched.
//!
//! Terminals cannot switch fonts, so the presentation hints are expressed as
//! layout: RTL text is right-aligned to the configured line width, LTR text is
//! indented from the left.
//!
//! Drawing never fails the caller. A template or write error is logged and the
//! session carries on.

pub mod styles;
pub mod templates;

use crate::error::Result;
use crate::model::ThemePreference;
use crate::present::{EntryView, View};
use crate::script::TextStyle;
use crate::theme::ThemeIndicators;
use chrono::{DateTime, Utc};
use minijinja::{Environment, Value};
use serde::Serialize;
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use unicode_width::UnicodeWidthStr;

pub const INDENT: &str = "    ";
pub const EMPTY_MESSAGE: &str = "No entries yet.";
pub const CONFIRM_HINT: &str = "Confirm with :yes, cancel with :no or :esc";

#[derive(Serialize)]
struct EntryData {
    row: String,
    header: String,
    age: String,
    lines: Vec<String>,
}

#[derive(Serialize)]
struct ListData {
    entries: Vec<EntryData>,
    empty_message: &'static str,
}

#[derive(Serialize)]
struct NewEntryData {
    entry: EntryData,
}

#[derive(Serialize)]
struct RemovedData {
    message: String,
}

#[derive(Serialize)]
struct ConfirmData {
    lines: Vec<String>,
    hint: &'static str,
}

#[derive(Serialize)]
struct ThemeData {
    mode: &'static str,
    icon: &'static str,
    label: &'static str,
}

#[derive(Serialize)]
struct InputData {
    direction: String,
    font: Option<String>,
}

/// Lays `text` out line by line: RTL right-aligned within `width`, LTR indented.
pub fn layout_lines(text: &str, style: &TextStyle, width: usize) -> Vec<String> {
    text.lines()
        .map(|line| {
            if style.direction.is_rtl() {
                let pad = width.saturating_sub(line.width());
                format!("{}{}", " ".repeat(pad), line)
            } else {
                format!("{}{}", INDENT, line)
            }
        })
        .collect()
}

/// Relative age of `date` as seen from `now`, e.g. `2 hours ago`.
///
/// Dates in the future (clock skew between writers) read as `now`.
pub fn format_age(date: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let duration = now.signed_duration_since(date);
    timeago::Formatter::new().convert(duration.to_std().unwrap_or_default())
}

fn build_environment(is_dark: Arc<AtomicBool>, use_color: bool) -> Result<Environment<'static>> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    for (name, source) in templates::ALL {
        env.add_template(name, source)?;
    }
    env.add_filter("style", move |value: Value, name: String| -> String {
        let palette = styles::palette(is_dark.load(Ordering::Relaxed));
        palette.apply(&name, &value.to_string(), use_color)
    });
    Ok(env)
}

pub struct TerminalView<W: Write> {
    out: W,
    env: Environment<'static>,
    is_dark: Arc<AtomicBool>,
    line_width: usize,
    input_style: TextStyle,
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W, line_width: usize, use_color: bool) -> Result<Self> {
        let is_dark = Arc::new(AtomicBool::new(false));
        let env = build_environment(Arc::clone(&is_dark), use_color)?;
        Ok(Self {
            out,
            env,
            is_dark,
            line_width,
            input_style: TextStyle::plain(),
        })
    }

    pub fn is_dark(&self) -> bool {
        self.is_dark.load(Ordering::Relaxed)
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn entry_data(&self, row: usize, entry: &EntryView, now: DateTime<Utc>) -> EntryData {
        EntryData {
            row: format!("[{}]", row + 1),
            header: entry.header(),
            age: format_age(entry.date, now),
            lines: layout_lines(&entry.text, &entry.style, self.line_width),
        }
    }

    fn emit<S: Serialize>(&mut self, template: &str, data: &S) {
        let rendered = self
            .env
            .get_template(template)
            .and_then(|tmpl| tmpl.render(data));
        let mut text = match rendered {
            Ok(text) => text,
            Err(err) => {
                tracing::error!(%err, template, "failed to render");
                return;
            }
        };
        if !text.ends_with('\n') {
            text.push('\n');
        }
        if let Err(err) = self
            .out
            .write_all(text.as_bytes())
            .and_then(|_| self.out.flush())
        {
            tracing::error!(%err, template, "failed to write to terminal");
        }
    }
}

impl<W: Write> View for TerminalView<W> {
    fn render_full_list(&mut self, entries: &[EntryView]) {
        let now = Utc::now();
        let data = ListData {
            entries: entries
                .iter()
                .enumerate()
                .map(|(row, entry)| self.entry_data(row, entry, now))
                .collect(),
            empty_message: EMPTY_MESSAGE,
        };
        self.emit("list.tmp", &data);
    }

    fn render_new_entry(&mut self, entry: &EntryView) {
        let data = NewEntryData {
            entry: self.entry_data(0, entry, Utc::now()),
        };
        self.emit("new_entry.tmp", &data);
    }

    fn mark_removed(&mut self, position: usize) {
        let data = RemovedData {
            message: format!("Removing entry {}", position + 1),
        };
        self.emit("removed.tmp", &data);
    }

    fn set_theme_indicators(&mut self, is_dark: bool) {
        self.is_dark.store(is_dark, Ordering::Relaxed);
        let indicators = ThemeIndicators::for_preference(ThemePreference { is_dark });
        let data = ThemeData {
            mode: if is_dark { "dark theme" } else { "light theme" },
            icon: indicators.icon,
            label: indicators.label,
        };
        self.emit("theme.tmp", &data);
    }

    fn set_input_style(&mut self, style: &TextStyle) {
        if *style == self.input_style {
            return;
        }
        self.input_style = style.clone();
        let data = InputData {
            direction: style.direction.to_string(),
            font: style.font.as_ref().map(|font| font.css().to_string()),
        };
        self.emit("input.tmp", &data);
    }

    // The terminal has no input box to clear; the draft line is already consumed.
    fn clear_input(&mut self) {}

    fn show_confirmation(&mut self, prompt: &str, style: &TextStyle) {
        let data = ConfirmData {
            lines: layout_lines(prompt, style, self.line_width)
                .into_iter()
                .map(|line| line.trim_start_matches(INDENT).to_string())
                .collect(),
            hint: CONFIRM_HINT,
        };
        self.emit("confirm.tmp", &data);
    }

    fn hide_confirmation(&mut self) {}
}
