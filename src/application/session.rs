use super::machine::{CoffeeMachine, Flow};
use crate::domain::ports::ConsoleBox;
use crate::error::Result;
use tracing::{debug, info};

/// How a session came to an end.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SessionEnd {
    /// The user typed `exit`.
    Exit,
    /// The input ran out before `exit`.
    EndOfInput,
}

/// Drives a [`CoffeeMachine`] from a console, one line at a time.
///
/// Each line is fully handled, and all of its replies written, before the
/// next one is read.
pub struct Session {
    machine: CoffeeMachine,
    console: ConsoleBox,
    echo: bool,
}

impl Session {
    /// Creates a new `Session`.
    ///
    /// # Arguments
    ///
    /// * `machine` - The machine to operate.
    /// * `console` - Where commands come from and replies go.
    pub fn new(machine: CoffeeMachine, console: ConsoleBox) -> Self {
        Self {
            machine,
            console,
            echo: false,
        }
    }

    /// Writes every command back as `> command` before its replies.
    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    pub fn machine(&self) -> &CoffeeMachine {
        &self.machine
    }

    pub fn into_machine(self) -> CoffeeMachine {
        self.machine
    }

    /// Runs until the user exits or the input is exhausted.
    ///
    /// Only console failures are returned as errors; anything the user types
    /// is handled by the machine.
    pub async fn run(&mut self) -> Result<SessionEnd> {
        info!("coffee machine switched on");
        let greeting = self.machine.greeting();
        self.console.write_message(&greeting.to_string()).await?;

        let end = loop {
            let Some(line) = self.console.read_line().await? else {
                break SessionEnd::EndOfInput;
            };
            let line = line.trim();
            if self.echo {
                self.console.write_message(&format!("> {line}")).await?;
            }

            match self.machine.input(line) {
                Flow::Continue(messages) => {
                    for message in messages {
                        self.console.write_message(&message.to_string()).await?;
                    }
                }
                Flow::Exit => break SessionEnd::Exit,
            }
        };

        match serde_json::to_string(self.machine.supplies()) {
            Ok(snapshot) => debug!(?end, supplies = %snapshot, "session finished"),
            Err(e) => debug!(?end, error = %e, "session finished"),
        }
        Ok(end)
    }
}
