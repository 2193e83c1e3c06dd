//! gitdesk-forge - Forge integration and UI services for the gitdesk desktop client
//!
//! This crate is the non-visual half of the gitdesk front end. It owns the
//! forge abstraction layer (selecting and constructing GitHub or GitLab
//! clients from a repository's remote identity), the fork-parent cache that
//! survives repository switches, and the small UI services the shell consumes:
//! theming, keyboard-shortcut dispatch, and file/folder icon lookup.
//!
//! # Architecture
//!
//! - [`forge`] - Forge selection, construction, and the provider adapters
//! - [`backend`] - Host shell surfaces: command invocation, events, analytics,
//!   store dispatch
//! - [`ui`] - Theme resolution, shortcut dispatch, and icon lookup
//!
//! # Correctness Invariants
//!
//! 1. The factory is the single writer of the current forge; observers only
//!    read through the watch channel
//! 2. The fork-parent cache is sticky per project: an absent parent never
//!    erases a cached value for the same project
//! 3. Provider selection always yields a concrete instance; there is no
//!    error path at the selection layer

pub mod backend;
pub mod forge;
pub mod ui;
