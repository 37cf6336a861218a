//! # peruse
//!
//! Terminal front end of the pager: argument parsing, logging, the raw-mode
//! terminal session and the renderer that draws a
//! [`Pager`](peruse_core::pager::Pager) after every event.

pub mod app;
pub mod commands;
pub mod terminal;
