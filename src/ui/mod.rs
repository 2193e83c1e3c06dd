//! ui
//!
//! Front-end service glue: theme resolution, keyboard-shortcut dispatch,
//! and file/folder icon lookup.
//!
//! These services are deliberately thin. They hold no domain state of their
//! own; each wraps a platform input (settings, OS theme, menu events, file
//! names) behind a small observable or lookup surface the views consume.

pub mod icons;
pub mod shortcuts;
pub mod theme;
