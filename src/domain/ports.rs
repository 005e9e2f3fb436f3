use crate::error::Result;
use async_trait::async_trait;

/// The line-oriented terminal the machine talks through.
#[async_trait]
pub trait Console: Send {
    /// Reads the next line without its terminator, or `None` at end of input.
    async fn read_line(&mut self) -> Result<Option<String>>;
    /// Writes `message` followed by a newline.
    async fn write_message(&mut self, message: &str) -> Result<()>;
}

pub type ConsoleBox = Box<dyn Console>;
