use crate::domain::message::Message;
use crate::domain::recipe::find_recipe;
use crate::domain::state::InteractionState;
use crate::domain::supplies::{Amount, Supplies};
use crate::error::MachineError;
use tracing::{debug, info, trace};

/// What the caller should do after feeding a line to the machine.
#[derive(Debug, PartialEq)]
pub enum Flow {
    /// Show these messages (possibly none) and keep reading input.
    Continue(Vec<Message>),
    /// The user asked to exit. Nothing more is shown.
    Exit,
}

/// Outcome of one state handler.
#[derive(Debug, PartialEq)]
enum Step {
    /// Input was not understood; state and supplies are untouched.
    Stay,
    Move(InteractionState, Vec<Message>),
    Halt,
}

/// The coffee machine: the current interaction state plus the supplies it
/// owns.
///
/// Feed it one line at a time with [`CoffeeMachine::input`].
#[derive(Debug, Default)]
pub struct CoffeeMachine {
    state: InteractionState,
    supplies: Supplies,
}

impl CoffeeMachine {
    /// Creates a machine waiting for an action, stocked with the default supplies.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_supplies(supplies: Supplies) -> Self {
        Self {
            state: InteractionState::ChooseAction,
            supplies,
        }
    }

    /// The prompt shown once when the machine is switched on.
    pub fn greeting(&self) -> Message {
        Message::ActionPrompt
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn supplies(&self) -> &Supplies {
        &self.supplies
    }

    /// Handles one line of input in the current state.
    ///
    /// Input the current state does not understand is ignored without any
    /// message.
    pub fn input(&mut self, line: &str) -> Flow {
        let step = match self.state {
            InteractionState::ChooseAction => choose_action(&mut self.supplies, line),
            InteractionState::ChooseCoffee => choose_coffee(&mut self.supplies, line),
            InteractionState::FillWater => fill_water(&mut self.supplies, line),
            InteractionState::FillMilk => fill_milk(&mut self.supplies, line),
            InteractionState::FillBeans => fill_beans(&mut self.supplies, line),
            InteractionState::FillCups => fill_cups(&mut self.supplies, line),
        };

        match step {
            Step::Stay => {
                trace!(state = ?self.state, line, "ignored input");
                Flow::Continue(Vec::new())
            }
            Step::Move(next, messages) => {
                debug!(from = ?self.state, to = ?next, "transition");
                self.state = next;
                Flow::Continue(messages)
            }
            Step::Halt => {
                debug!("exit requested");
                Flow::Exit
            }
        }
    }
}

fn choose_action(supplies: &mut Supplies, line: &str) -> Step {
    match line {
        "buy" => Step::Move(InteractionState::ChooseCoffee, vec![Message::CoffeePrompt]),
        "fill" => Step::Move(InteractionState::FillWater, vec![Message::WaterPrompt]),
        "remaining" => Step::Move(
            InteractionState::ChooseAction,
            vec![Message::Report(supplies.report()), Message::ActionPrompt],
        ),
        "take" => {
            let taken = supplies.take_money();
            info!(amount = %taken.0, "money taken");
            Step::Move(
                InteractionState::ChooseAction,
                vec![Message::Payout(taken), Message::ActionPrompt],
            )
        }
        "exit" => Step::Halt,
        _ => Step::Stay,
    }
}

fn choose_coffee(supplies: &mut Supplies, line: &str) -> Step {
    if line == "back" {
        return Step::Move(InteractionState::ChooseAction, vec![Message::ActionPrompt]);
    }
    let Ok(id) = line.parse::<i32>() else {
        return Step::Stay;
    };

    let mut messages = Vec::new();
    // Unknown ids fall back to the main menu without a word.
    if let Some(recipe) = find_recipe(id) {
        match supplies.check(recipe) {
            Ok(()) => {
                supplies.buy(recipe);
                info!(coffee = recipe.coffee.name(), "coffee made");
                messages.push(Message::Brewing);
            }
            Err(shortage) => {
                debug!(coffee = recipe.coffee.name(), %shortage, "cannot make coffee");
                messages.push(Message::Shortage(shortage));
            }
        }
    }
    messages.push(Message::ActionPrompt);
    Step::Move(InteractionState::ChooseAction, messages)
}

fn fill_water(supplies: &mut Supplies, line: &str) -> Step {
    match Amount::parse(line).map(|amount| supplies.add_water(amount)) {
        Some(Ok(())) => Step::Move(InteractionState::FillMilk, vec![Message::MilkPrompt]),
        Some(Err(e)) => rejected_fill(e),
        None => Step::Stay,
    }
}

fn fill_milk(supplies: &mut Supplies, line: &str) -> Step {
    match Amount::parse(line).map(|amount| supplies.add_milk(amount)) {
        Some(Ok(())) => Step::Move(InteractionState::FillBeans, vec![Message::BeansPrompt]),
        Some(Err(e)) => rejected_fill(e),
        None => Step::Stay,
    }
}

fn fill_beans(supplies: &mut Supplies, line: &str) -> Step {
    match Amount::parse(line).map(|amount| supplies.add_beans(amount)) {
        Some(Ok(())) => Step::Move(InteractionState::FillCups, vec![Message::CupsPrompt]),
        Some(Err(e)) => rejected_fill(e),
        None => Step::Stay,
    }
}

fn fill_cups(supplies: &mut Supplies, line: &str) -> Step {
    let Ok(cups) = line.parse::<i32>() else {
        return Step::Stay;
    };
    match supplies.add_cups(cups) {
        Ok(()) => {
            info!(
                water = %supplies.water(),
                milk = %supplies.milk(),
                beans = %supplies.beans(),
                cups = supplies.cups(),
                "machine filled"
            );
            Step::Move(InteractionState::ChooseAction, vec![Message::ActionPrompt])
        }
        Err(e) => rejected_fill(e),
    }
}

fn rejected_fill(error: MachineError) -> Step {
    debug!(%error, "fill rejected");
    Step::Stay
}
