//! Named styles for the terminal view.
//!
//! Templates only ever refer to semantic names (`header`, `age`, `prompt`...).
//! Each name maps to a `console::Style` in a light and a dark palette; switching
//! themes swaps the palette, never the templates.
//!
//! A name with no style renders with a `(!?)` marker in front so typos in a
//! template show up in the output instead of silently losing their styling.

use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;

pub const MISSING_STYLE_INDICATOR: &str = "(!?)";

pub mod names {
    pub const INDEX: &str = "index";
    pub const HEADER: &str = "header";
    pub const AGE: &str = "age";
    pub const TEXT: &str = "text";
    pub const MUTED: &str = "muted";
    pub const SUCCESS: &str = "success";
    pub const REMOVED: &str = "removed";
    pub const PROMPT: &str = "prompt";
    pub const HINT: &str = "hint";
    pub const THEME: &str = "theme";
}

#[derive(Debug, Clone, Default)]
pub struct Palette {
    styles: HashMap<&'static str, Style>,
}

impl Palette {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, name: &'static str, style: Style) -> Self {
        self.styles.insert(name, style);
        self
    }

    pub fn has(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    pub fn apply(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.styles.get(name) {
            Some(style) if use_color => style.apply_to(text).to_string(),
            Some(_) => text.to_string(),
            None => format!("{} {}", MISSING_STYLE_INDICATOR, text),
        }
    }
}

/// Converts an RGB triplet to the nearest ANSI 256-color palette index.
pub fn rgb_to_ansi256((r, g, b): (u8, u8, u8)) -> u8 {
    if r == g && g == b {
        if r < 8 {
            16
        } else if r > 248 {
            231
        } else {
            232 + ((r as u16 - 8) * 24 / 247) as u8
        }
    } else {
        let red = (r as u16 * 5 / 255) as u8;
        let green = (g as u16 * 5 / 255) as u8;
        let blue = (b as u16 * 5 / 255) as u8;
        16 + 36 * red + 6 * green + blue
    }
}

fn rgb(triplet: (u8, u8, u8)) -> Style {
    Style::new().color256(rgb_to_ansi256(triplet))
}

pub static LIGHT: Lazy<Palette> = Lazy::new(|| {
    Palette::new()
        .add(names::INDEX, rgb((175, 135, 0)))
        .add(names::HEADER, Style::new().bold())
        .add(names::AGE, rgb((115, 115, 115)).italic())
        .add(names::TEXT, Style::new())
        .add(names::MUTED, rgb((115, 115, 115)))
        .add(names::SUCCESS, rgb((0, 135, 0)))
        .add(names::REMOVED, rgb((175, 0, 0)).bold())
        .add(names::PROMPT, Style::new().bold().red())
        .add(names::HINT, rgb((115, 115, 115)).italic())
        .add(names::THEME, Style::new())
});

pub static DARK: Lazy<Palette> = Lazy::new(|| {
    Palette::new()
        .add(names::INDEX, rgb((255, 215, 95)))
        .add(names::HEADER, rgb((238, 238, 238)).bold())
        .add(names::AGE, rgb((154, 154, 154)).italic())
        .add(names::TEXT, rgb((228, 228, 228)))
        .add(names::MUTED, rgb((154, 154, 154)))
        .add(names::SUCCESS, rgb((135, 215, 135)))
        .add(names::REMOVED, rgb((255, 95, 95)).bold())
        .add(names::PROMPT, rgb((255, 135, 135)).bold())
        .add(names::HINT, rgb((154, 154, 154)).italic())
        .add(names::THEME, rgb((238, 238, 238)))
});

pub fn palette(is_dark: bool) -> &'static Palette {
    if is_dark {
        &DARK
    } else {
        &LIGHT
    }
}
