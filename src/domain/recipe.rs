use super::supplies::Balance;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum Coffee {
    Espresso,
    Latte,
    Cappuccino,
}

impl Coffee {
    /// The label shown in the coffee menu.
    pub fn name(&self) -> &'static str {
        match self {
            Coffee::Espresso => "espresso",
            Coffee::Latte => "latte",
            Coffee::Cappuccino => "cappuccino",
        }
    }
}

/// A fixed catalog entry: what one cup consumes and what it costs.
#[derive(Debug, Serialize, PartialEq, Clone, Copy)]
pub struct Recipe {
    /// The number the user types to pick this coffee.
    pub id: i32,
    pub coffee: Coffee,
    /// Water in ml.
    pub water: Decimal,
    /// Milk in ml.
    pub milk: Decimal,
    /// Coffee beans in grams.
    pub beans: Decimal,
    pub cups: u32,
    pub price: Balance,
}

pub const CATALOG: [Recipe; 3] = [
    Recipe {
        id: 1,
        coffee: Coffee::Espresso,
        water: dec!(250),
        milk: dec!(0),
        beans: dec!(16),
        cups: 1,
        price: Balance(dec!(4.0)),
    },
    Recipe {
        id: 2,
        coffee: Coffee::Latte,
        water: dec!(350),
        milk: dec!(75),
        beans: dec!(20),
        cups: 1,
        price: Balance(dec!(7.0)),
    },
    Recipe {
        id: 3,
        coffee: Coffee::Cappuccino,
        water: dec!(200),
        milk: dec!(100),
        beans: dec!(12),
        cups: 1,
        price: Balance(dec!(6.0)),
    },
];

/// Looks a recipe up by the number the user typed.
pub fn find_recipe(id: i32) -> Option<&'static Recipe> {
    CATALOG.iter().find(|recipe| recipe.id == id)
}
