//! Integration tests for draw-me.

mod cli_test;
mod draw_test;
mod helpers;
