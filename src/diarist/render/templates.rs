//! Template sources for the terminal view.
//!
//! Templates live in stand-alone `.tmp` files next to this module and are pulled
//! in as string constants. The environment runs with `trim_blocks` and
//! `lstrip_blocks`, so a block tag on its own line produces no output, and every
//! other line break in a template file is a line break in the output.
//!
//! Layout (alignment, numbering, relative ages) is computed in Rust; templates
//! only arrange the pieces and pick semantic style names.

pub const ENTRY_TEMPLATE: &str = include_str!("templates/entry.tmp");
pub const LIST_TEMPLATE: &str = include_str!("templates/list.tmp");
pub const NEW_ENTRY_TEMPLATE: &str = include_str!("templates/new_entry.tmp");
pub const REMOVED_TEMPLATE: &str = include_str!("templates/removed.tmp");
pub const CONFIRM_TEMPLATE: &str = include_str!("templates/confirm.tmp");
pub const THEME_TEMPLATE: &str = include_str!("templates/theme.tmp");
pub const INPUT_TEMPLATE: &str = include_str!("templates/input.tmp");

/// Name and source of every template, registered together.
pub const ALL: [(&str, &str); 7] = [
    ("entry.tmp", ENTRY_TEMPLATE),
    ("list.tmp", LIST_TEMPLATE),
    ("new_entry.tmp", NEW_ENTRY_TEMPLATE),
    ("removed.tmp", REMOVED_TEMPLATE),
    ("confirm.tmp", CONFIRM_TEMPLATE),
    ("theme.tmp", THEME_TEMPLATE),
    ("input.tmp", INPUT_TEMPLATE),
];
