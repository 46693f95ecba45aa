//! Command handlers.

pub mod draw;
