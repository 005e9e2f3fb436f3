use crate::domain::ports::Console;
use crate::error::Result;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Everything written to a [`ScriptedConsole`], one entry per message.
///
/// Cloning gives another handle on the same transcript, so a test can keep
/// one while the console itself is moved into a session.
#[derive(Default, Clone, Debug)]
pub struct Transcript {
    lines: Arc<RwLock<Vec<String>>>,
}

impl Transcript {
    pub async fn lines(&self) -> Vec<String> {
        self.lines.read().await.clone()
    }

    /// The transcript as it would appear on a terminal.
    pub async fn text(&self) -> String {
        self.lines
            .read()
            .await
            .iter()
            .map(|line| format!("{line}\n"))
            .collect()
    }
}

/// An in-memory console fed from a fixed list of lines.
///
/// Ideal for testing: input is known up front and output is kept in a
/// shared [`Transcript`].
#[derive(Default, Debug)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    transcript: Transcript,
}

impl ScriptedConsole {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            transcript: Transcript::default(),
        }
    }

    pub fn transcript(&self) -> Transcript {
        self.transcript.clone()
    }
}

#[async_trait]
impl Console for ScriptedConsole {
    async fn read_line(&mut self) -> Result<Option<String>> {
        Ok(self.input.pop_front())
    }

    async fn write_message(&mut self, message: &str) -> Result<()> {
        let mut lines = self.transcript.lines.write().await;
        lines.push(message.to_string());
        Ok(())
    }
}
