//! # Pager Core
//!
//! Everything `peruse` knows about a document and how it is being viewed,
//! independent of any real terminal:
//!
//! * **[`document`]**: the text itself, stored in a rope.
//! * **[`search`]**: regex search over a document and the `n`/`N` cycle.
//! * **[`viewport`]**: which lines are on screen and where the cursor is.
//! * **[`keymap`]**: translation of terminal events into [`keymap::Action`]s.
//! * **[`pager`]**: the state machine tying the pieces together.
//!
//! Drawing is left to the caller; the CLI renders a [`pager::Pager`] after
//! each handled event.

pub mod document;
pub mod keymap;
pub mod pager;
pub mod search;
pub mod viewport;
