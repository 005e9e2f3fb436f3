//! Console implementations: streams for real terminals and script files,
//! and an in-memory console for tests.

pub mod in_memory;
pub mod stream;
