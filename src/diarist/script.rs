//! # Script Classifier
//!
//! Maps text to a layout [`Direction`] and a [`FontFamily`] hint using nothing but
//! code-point range membership.
//!
//! The two questions are answered differently:
//!
//! - **Direction** is a union: any character from any of the RTL ranges, *or* any
//!   Devanagari character, makes the whole string RTL. Devanagari is written
//!   left-to-right, but entries containing it are laid out RTL. Existing journals
//!   were rendered this way, so the behavior is kept.
//! - **Font** is first-match-wins over Hebrew, Arabic, Devanagari, in that order.
//!   A string mixing Hebrew and Devanagari is RTL and gets the Hebrew font.
//!
//! The two range tables intentionally differ: the direction table covers the
//! whole Hebrew..NKo span plus presentation forms and bidi controls, while the
//! font table only looks at the core Hebrew and Arabic blocks. A Syriac string is
//! therefore RTL with the default font.

use crate::model::{Direction, FontFamily};
use std::ops::RangeInclusive;

/// Hebrew through NKo, RLM, RLE, RLO, Hebrew + Arabic presentation forms.
const RTL_RANGES: &[RangeInclusive<char>] = &[
    '\u{0591}'..='\u{07FF}',
    '\u{200F}'..='\u{200F}',
    '\u{202B}'..='\u{202B}',
    '\u{202E}'..='\u{202E}',
    '\u{FB1D}'..='\u{FDFD}',
    '\u{FE70}'..='\u{FEFC}',
];

const HEBREW: RangeInclusive<char> = '\u{0591}'..='\u{05F4}';
const ARABIC: RangeInclusive<char> = '\u{0600}'..='\u{06FF}';
const DEVANAGARI: RangeInclusive<char> = '\u{0900}'..='\u{097F}';

fn contains_any(text: &str, ranges: &[RangeInclusive<char>]) -> bool {
    text.chars()
        .any(|c| ranges.iter().any(|range| range.contains(&c)))
}

fn contains(text: &str, range: &RangeInclusive<char>) -> bool {
    text.chars().any(|c| range.contains(&c))
}

pub fn classify_direction(text: &str) -> Direction {
    if contains_any(text, RTL_RANGES) || contains(text, &DEVANAGARI) {
        Direction::Rtl
    } else {
        Direction::Ltr
    }
}

pub fn classify_font(text: &str) -> FontFamily {
    if contains(text, &HEBREW) {
        FontFamily::Hebrew
    } else if contains(text, &ARABIC) {
        FontFamily::Arabic
    } else if contains(text, &DEVANAGARI) {
        FontFamily::Devanagari
    } else {
        FontFamily::Default
    }
}

/// Direction plus the font a view should apply.
///
/// The font is only applied to RTL text; LTR text keeps the surface's default
/// font, which is expressed as `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextStyle {
    pub direction: Direction,
    pub font: Option<FontFamily>,
}

impl TextStyle {
    pub fn new(direction: Direction, font: &FontFamily) -> Self {
        let font = direction.is_rtl().then(|| font.clone());
        Self { direction, font }
    }

    /// Classifies live text, e.g. the draft being typed or a prompt.
    pub fn of(text: &str) -> Self {
        Self::new(classify_direction(text), &classify_font(text))
    }

    pub fn plain() -> Self {
        Self {
            direction: Direction::Ltr,
            font: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latin_text_is_ltr_with_default_font() {
        assert_eq!(classify_direction("Dear diary"), Direction::Ltr);
        assert_eq!(classify_font("Dear diary"), FontFamily::Default);
    }

    #[test]
    fn empty_text_is_ltr_with_default_font() {
        assert_eq!(classify_direction(""), Direction::Ltr);
        assert_eq!(classify_font(""), FontFamily::Default);
    }

    #[test]
    fn hebrew_text_is_rtl_with_hebrew_font() {
        assert_eq!(classify_direction("יומן יקר"), Direction::Rtl);
        assert_eq!(classify_font("יומן יקר"), FontFamily::Hebrew);
    }

    #[test]
    fn arabic_text_is_rtl_with_arabic_font() {
        assert_eq!(classify_direction("مرحبا"), Direction::Rtl);
        assert_eq!(classify_font("مرحبا"), FontFamily::Arabic);
    }

    // Devanagari is laid out RTL even though the script reads left-to-right.
    #[test]
    fn devanagari_only_text_is_classified_rtl() {
        assert_eq!(classify_direction("नमस्ते"), Direction::Rtl);
        assert_eq!(classify_font("नमस्ते"), FontFamily::Devanagari);
    }

    #[test]
    fn hebrew_and_devanagari_get_rtl_and_hebrew_font() {
        let mixed = "नमस्ते שלום";
        assert_eq!(classify_direction(mixed), Direction::Rtl);
        assert_eq!(classify_font(mixed), FontFamily::Hebrew);
    }

    #[test]
    fn arabic_wins_over_devanagari_for_font() {
        let mixed = "नमस्ते مرحبا";
        assert_eq!(classify_font(mixed), FontFamily::Arabic);
    }

    #[test]
    fn a_single_rtl_character_flips_mixed_text() {
        assert_eq!(classify_direction("hello ש world"), Direction::Rtl);
    }

    #[test]
    fn bidi_controls_are_rtl_without_a_script_font() {
        for control in ['\u{200F}', '\u{202B}', '\u{202E}'] {
            let text = format!("abc{control}");
            assert_eq!(classify_direction(&text), Direction::Rtl);
            assert_eq!(classify_font(&text), FontFamily::Default);
        }
        assert_eq!(classify_direction("abc\u{200E}"), Direction::Ltr);
    }

    #[test]
    fn presentation_forms_are_rtl() {
        assert_eq!(classify_direction("\u{FB1D}"), Direction::Rtl);
        assert_eq!(classify_direction("\u{FDFD}"), Direction::Rtl);
        assert_eq!(classify_direction("\u{FE70}"), Direction::Rtl);
        assert_eq!(classify_direction("\u{FEFC}"), Direction::Rtl);
        assert_eq!(classify_direction("\u{FEFD}"), Direction::Ltr);
    }

    #[test]
    fn syriac_is_rtl_but_keeps_default_font() {
        let syriac = "\u{0710}\u{0712}";
        assert_eq!(classify_direction(syriac), Direction::Rtl);
        assert_eq!(classify_font(syriac), FontFamily::Default);
    }

    #[test]
    fn range_edges() {
        assert_eq!(classify_direction("\u{0590}"), Direction::Ltr);
        assert_eq!(classify_direction("\u{0591}"), Direction::Rtl);
        assert_eq!(classify_direction("\u{07FF}"), Direction::Rtl);
        assert_eq!(classify_direction("\u{0800}"), Direction::Ltr);
        assert_eq!(classify_direction("\u{0900}"), Direction::Rtl);
        assert_eq!(classify_direction("\u{097F}"), Direction::Rtl);
        assert_eq!(classify_direction("\u{0980}"), Direction::Ltr);
        // Hebrew font stops at U+05F4 even though direction keeps going.
        assert_eq!(classify_font("\u{05F5}"), FontFamily::Default);
    }

    #[test]
    fn text_style_drops_font_for_ltr() {
        assert_eq!(TextStyle::of("hello"), TextStyle::plain());
        let rtl = TextStyle::of("שלום");
        assert_eq!(rtl.direction, Direction::Rtl);
        assert_eq!(rtl.font, Some(FontFamily::Hebrew));
    }
}
