#![allow(dead_code)]

use coffee_machine::application::machine::CoffeeMachine;
use coffee_machine::application::session::{Session, SessionEnd};
use coffee_machine::infrastructure::in_memory::ScriptedConsole;

pub const ACTION_PROMPT: &str = "Write action (buy, fill, take, remaining, exit): ";
pub const COFFEE_PROMPT: &str =
    "What do you want to buy? 1 - espresso, 2 - latte, 3 - cappuccino, back - to main menu:";
pub const BREWING: &str = "I have enough resources, making you a coffee!";

pub struct Outcome {
    pub end: SessionEnd,
    pub lines: Vec<String>,
    pub machine: CoffeeMachine,
}

/// Runs `commands` through a fresh machine and collects everything it printed.
pub async fn run_commands(commands: &[&str]) -> Outcome {
    run_commands_on(CoffeeMachine::new(), commands).await
}

pub async fn run_commands_on(machine: CoffeeMachine, commands: &[&str]) -> Outcome {
    let console = ScriptedConsole::new(commands.iter().copied());
    let transcript = console.transcript();

    let mut session = Session::new(machine, Box::new(console));
    let end = session.run().await.expect("scripted console never fails");

    Outcome {
        end,
        lines: transcript.lines().await,
        machine: session.into_machine(),
    }
}

/// Writes a command script, one command per line.
pub fn write_script(commands: &[&str]) -> tempfile::NamedTempFile {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    for command in commands {
        writeln!(file, "{command}").unwrap();
    }
    file.flush().unwrap();
    file
}
