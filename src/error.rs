use thiserror::Error;

#[derive(Error, Debug)]
pub enum MachineError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Not enough {0} to take out")]
    Depleted(&'static str),
    #[error("Too much {0} to hold")]
    Overflow(&'static str),
}

/// A resource the machine ran out of while checking a recipe.
///
/// The display text is exactly what the machine prints to the user.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortage {
    #[error("Sorry, not enough water!")]
    Water,
    #[error("Sorry, not enough milk!")]
    Milk,
    #[error("Sorry, not enough coffee beans!")]
    Beans,
    #[error("Sorry, not enough disposable cups!")]
    Cups,
}

pub type Result<T> = std::result::Result<T, MachineError>;
