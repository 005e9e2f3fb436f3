//! Domain model: the recipe catalog, the resource ledger and the messages
//! the machine shows.

pub mod message;
pub mod ports;
pub mod recipe;
pub mod state;
pub mod supplies;
