use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use serde::{Deserialize, Serialize, Serializer};

use crate::script;

/// Layout flow of a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

impl Direction {
    pub fn is_rtl(self) -> bool {
        self == Direction::Rtl
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const HEBREW_FONT: &str = "'Noto Sans Hebrew', sans-serif";
pub const ARABIC_FONT: &str = "'Noto Sans Arabic', sans-serif";
pub const DEVANAGARI_FONT: &str = "'Noto Sans Devanagari', sans-serif";
pub const DEFAULT_FONT: &str = "'Noto Sans', sans-serif";

/// Font family hint stored alongside an entry.
///
/// Persisted as its CSS font-family string. Strings we don't recognise survive a
/// load/save cycle untouched as [`FontFamily::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FontFamily {
    Hebrew,
    Arabic,
    Devanagari,
    #[default]
    Default,
    Other(String),
}

impl FontFamily {
    pub fn css(&self) -> &str {
        match self {
            FontFamily::Hebrew => HEBREW_FONT,
            FontFamily::Arabic => ARABIC_FONT,
            FontFamily::Devanagari => DEVANAGARI_FONT,
            FontFamily::Default => DEFAULT_FONT,
            FontFamily::Other(css) => css,
        }
    }
}

impl From<String> for FontFamily {
    fn from(css: String) -> Self {
        match css.as_str() {
            HEBREW_FONT => FontFamily::Hebrew,
            ARABIC_FONT => FontFamily::Arabic,
            DEVANAGARI_FONT => FontFamily::Devanagari,
            DEFAULT_FONT => FontFamily::Default,
            _ => FontFamily::Other(css),
        }
    }
}

impl From<FontFamily> for String {
    fn from(font: FontFamily) -> Self {
        match font {
            FontFamily::Other(css) => css,
            known => known.css().to_string(),
        }
    }
}

impl std::fmt::Display for FontFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.css())
    }
}

/// One diary record.
///
/// `direction` and `font_family` are computed once from `text` when the entry is
/// created and are never re-derived afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub text: String,
    #[serde(serialize_with = "serialize_iso_millis")]
    pub date: DateTime<Utc>,
    pub direction: Direction,
    pub font_family: FontFamily,
}

impl Entry {
    /// Builds an entry from already-trimmed, non-empty text.
    pub(crate) fn new(text: String, date: DateTime<Utc>) -> Self {
        let direction = script::classify_direction(&text);
        let font_family = script::classify_font(&text);
        Self {
            text,
            date,
            direction,
            font_family,
        }
    }

    /// Creation instant, at the millisecond precision of an ISO-8601 timestamp.
    pub(crate) fn now() -> DateTime<Utc> {
        Utc::now().trunc_subsecs(3)
    }
}

/// ISO-8601 with exactly three fractional digits and a `Z`, as browsers write it.
fn serialize_iso_millis<S: Serializer>(
    date: &DateTime<Utc>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&date.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// Light/dark choice for the whole session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThemePreference {
    pub is_dark: bool,
}

impl ThemePreference {
    pub fn dark() -> Self {
        Self { is_dark: true }
    }

    pub fn light() -> Self {
        Self { is_dark: false }
    }

    pub fn toggled(self) -> Self {
        Self {
            is_dark: !self.is_dark,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_serializes_with_camel_case_fields() {
        let date = "2024-03-01T10:20:30.123Z".parse().unwrap();
        let entry = Entry::new("שלום".to_string(), date);
        let json = serde_json::to_value(&entry).unwrap();

        assert_eq!(json["text"], "שלום");
        assert_eq!(json["direction"], "rtl");
        assert_eq!(json["fontFamily"], HEBREW_FONT);
        assert_eq!(json["date"], "2024-03-01T10:20:30.123Z");
    }

    #[test]
    fn whole_second_dates_keep_their_millisecond_digits() {
        let date = "2024-03-01T10:20:30.000Z".parse().unwrap();
        let entry = Entry::new("x".to_string(), date);
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["date"], "2024-03-01T10:20:30.000Z");

        let back: Entry = serde_json::from_value(json).unwrap();
        assert_eq!(back.date, date);
    }

    #[test]
    fn unknown_font_strings_are_preserved() {
        let font = FontFamily::from("'Comic Sans MS'".to_string());
        assert_eq!(font, FontFamily::Other("'Comic Sans MS'".to_string()));
        assert_eq!(String::from(font), "'Comic Sans MS'");
    }

    #[test]
    fn known_font_strings_map_to_variants() {
        assert_eq!(FontFamily::from(ARABIC_FONT.to_string()), FontFamily::Arabic);
        assert_eq!(FontFamily::from(DEFAULT_FONT.to_string()), FontFamily::Default);
    }

    #[test]
    fn entry_timestamps_have_millisecond_precision() {
        let now = Entry::now();
        assert_eq!(now.timestamp_subsec_nanos() % 1_000_000, 0);
    }

    #[test]
    fn theme_toggle_flips() {
        assert_eq!(ThemePreference::light().toggled(), ThemePreference::dark());
        assert_eq!(ThemePreference::dark().toggled(), ThemePreference::light());
    }
}
