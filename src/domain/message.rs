use super::recipe::CATALOG;
use super::supplies::{Balance, Report};
use crate::error::Shortage;
use std::fmt;

/// A line (or block) of text the machine shows the user.
///
/// The `Display` output is the exact text printed; the console adds the
/// trailing newline.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    ActionPrompt,
    CoffeePrompt,
    WaterPrompt,
    MilkPrompt,
    BeansPrompt,
    CupsPrompt,
    Brewing,
    Shortage(Shortage),
    Report(Report),
    Payout(Balance),
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Message::ActionPrompt => write!(f, "Write action (buy, fill, take, remaining, exit): "),
            Message::CoffeePrompt => {
                write!(f, "What do you want to buy? ")?;
                for recipe in &CATALOG {
                    write!(f, "{} - {}, ", recipe.id, recipe.coffee.name())?;
                }
                write!(f, "back - to main menu:")
            }
            Message::WaterPrompt => write!(f, "Write how many ml of water do you want to add:"),
            Message::MilkPrompt => write!(f, "Write how many ml of milk do you want to add:"),
            Message::BeansPrompt => {
                write!(f, "Write how many grams of coffee beans do you want to add:")
            }
            Message::CupsPrompt => {
                write!(f, "Write how many disposable cups of coffee do you want to add:")
            }
            Message::Brewing => write!(f, "I have enough resources, making you a coffee!"),
            Message::Shortage(shortage) => write!(f, "{shortage}"),
            Message::Report(report) => write!(f, "{report}"),
            Message::Payout(balance) => write!(f, "I gave you ${}", balance.truncated()),
        }
    }
}
