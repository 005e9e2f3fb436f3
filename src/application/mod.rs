//! Application layer: the interaction state machine and the session loop
//! that drives it from a console.
//!
//! The machine itself is synchronous and owns all of its state. The
//! `Session` feeds it one line at a time from an async `Console` and writes
//! its replies back before reading the next line.

pub mod machine;
pub mod session;
