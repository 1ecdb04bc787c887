//! # Diarist Architecture
//!
//! Diarist is the core of a **bidirectional-aware journaling widget**: a person writes
//! short free-form entries in any script, and each entry is shown right-to-left with a
//! matching font when the script calls for it. The core knows nothing about the surface
//! it is drawn on. A terminal host ships in `main.rs`; a browser or mobile shell would
//! implement the same [`present::View`] trait.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Host (main.rs, host.rs)                                    │
//! │  - Turns terminal lines into input events                   │
//! │  - The ONLY place that knows about stdin/exit codes         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Interaction Router (router.rs)                             │
//! │  - Owns session state: draft, gesture, open confirmation    │
//! │  - Decides; the View draws                                  │
//! └─────────────────────────────────────────────────────────────┘
//!            │                  │                    │
//!            ▼                  ▼                    ▼
//! ┌──────────────────┐ ┌──────────────────┐ ┌──────────────────┐
//! │ Entry Store      │ │ Confirmation     │ │ Theme Control    │
//! │ (store/)         │ │ Flow (confirm/)  │ │ (theme.rs)       │
//! └──────────────────┘ └──────────────────┘ └──────────────────┘
//!            │                                       │
//!            ▼                                       ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage backend (store/backend.rs)                         │
//! │  - Flat string key/value: FsBackend, MemBackend             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Positions and rows
//!
//! Entries are stored oldest first and shown newest first. A *position* is an index
//! into storage; a *row* is an index into what is on screen. Only [`present`] converts
//! between them, and a row is only valid against the list it was rendered from.
//!
//! ## Script classification
//!
//! Direction and font are decided once, when an entry is saved, by [`script`], and
//! stored with the entry. Rendering uses the stored hints, never the text.
//!
//! ## Module Overview
//!
//! - [`script`]: Direction and font classification
//! - [`model`]: `Entry`, `Direction`, `FontFamily`, `ThemePreference`
//! - [`codec`]: JSON encoding of the stored values
//! - [`store`]: Storage backends and the entry store
//! - [`confirm`]: One-shot accept/reject gate with scoped listeners
//! - [`theme`]: Light/dark preference
//! - [`present`]: Presentation order and the `View` trait
//! - [`render`]: Styled terminal view
//! - [`router`]: Input events to actions
//! - [`config`]: Configuration
//! - [`logging`]: tracing subscriber setup
//! - [`error`]: Error types

pub mod codec;
pub mod config;
pub mod confirm;
pub mod error;
pub mod logging;
pub mod model;
pub mod present;
pub mod render;
pub mod router;
pub mod script;
pub mod store;
pub mod theme;
