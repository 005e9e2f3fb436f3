use super::recipe::Recipe;
use crate::error::{MachineError, Result, Shortage};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use std::fmt;
use std::ops::{Add, AddAssign};

/// Money held by the machine.
///
/// Only recipe prices are ever added to it, and it only goes back to zero
/// when the money is taken out.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize)]
pub struct Balance(pub Decimal);

impl Balance {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// The whole-unit part of the balance, as shown to the user.
    pub fn truncated(&self) -> Decimal {
        self.0.trunc()
    }
}

impl Add for Balance {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Balance {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

/// A quantity of water, milk or beans typed during a refill.
///
/// Negative amounts take that much back out of the machine.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Amount(Decimal);

impl Amount {
    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Parses a user token such as `50`, `-10`, `12.5` or `1e3`.
    ///
    /// Returns `None` for anything that is not a plain number. Digit
    /// separators (`1_000`) do not count.
    pub fn parse(token: &str) -> Option<Self> {
        if token.contains('_') {
            return None;
        }
        token
            .parse::<Decimal>()
            .or_else(|_| Decimal::from_scientific(token))
            .ok()
            .map(Self)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

/// Integer snapshot of the machine contents, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Report {
    pub water: Decimal,
    pub milk: Decimal,
    pub beans: Decimal,
    pub cups: u32,
    pub money: Decimal,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "The coffee machine has:")?;
        writeln!(f, "{} of water", self.water)?;
        writeln!(f, "{} of milk", self.milk)?;
        writeln!(f, "{} of coffee beans", self.beans)?;
        writeln!(f, "{} of disposable cups", self.cups)?;
        writeln!(f, "{} of money", self.money)
    }
}

/// Everything the machine holds: ingredients, cups and money.
///
/// No operation here lets a quantity drop below zero. Purchases must be
/// checked with [`Supplies::check`] first; [`Supplies::buy`] trusts its caller.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct Supplies {
    water: Decimal,
    milk: Decimal,
    beans: Decimal,
    cups: u32,
    money: Balance,
}

impl Default for Supplies {
    fn default() -> Self {
        Self::new(dec!(400), dec!(540), dec!(120), 9, Balance::new(dec!(550)))
    }
}

impl Supplies {
    pub fn new(water: Decimal, milk: Decimal, beans: Decimal, cups: u32, money: Balance) -> Self {
        Self {
            water,
            milk,
            beans,
            cups,
            money,
        }
    }

    pub fn water(&self) -> Decimal {
        self.water
    }

    pub fn milk(&self) -> Decimal {
        self.milk
    }

    pub fn beans(&self) -> Decimal {
        self.beans
    }

    pub fn cups(&self) -> u32 {
        self.cups
    }

    pub fn money(&self) -> Balance {
        self.money
    }

    /// Checks that one cup of `recipe` can be made.
    ///
    /// Resources are checked in the order water, milk, beans, cups and the
    /// first one that falls short is reported. Money is never a constraint.
    pub fn check(&self, recipe: &Recipe) -> std::result::Result<(), Shortage> {
        if self.water < recipe.water {
            Err(Shortage::Water)
        } else if self.milk < recipe.milk {
            Err(Shortage::Milk)
        } else if self.beans < recipe.beans {
            Err(Shortage::Beans)
        } else if self.cups < recipe.cups {
            Err(Shortage::Cups)
        } else {
            Ok(())
        }
    }

    /// Makes one cup of `recipe` and takes its price.
    pub fn buy(&mut self, recipe: &Recipe) {
        self.water -= recipe.water;
        self.milk -= recipe.milk;
        self.beans -= recipe.beans;
        self.cups -= recipe.cups;
        self.money += recipe.price;
    }

    pub fn add_water(&mut self, amount: Amount) -> Result<()> {
        self.water = checked_fill(self.water, amount, "water")?;
        Ok(())
    }

    pub fn add_milk(&mut self, amount: Amount) -> Result<()> {
        self.milk = checked_fill(self.milk, amount, "milk")?;
        Ok(())
    }

    pub fn add_beans(&mut self, amount: Amount) -> Result<()> {
        self.beans = checked_fill(self.beans, amount, "coffee beans")?;
        Ok(())
    }

    pub fn add_cups(&mut self, cups: i32) -> Result<()> {
        let filled = i64::from(self.cups) + i64::from(cups);
        if filled < 0 {
            return Err(MachineError::Depleted("disposable cups"));
        }
        self.cups =
            u32::try_from(filled).map_err(|_| MachineError::Overflow("disposable cups"))?;
        Ok(())
    }

    pub fn report(&self) -> Report {
        Report {
            water: self.water.trunc(),
            milk: self.milk.trunc(),
            beans: self.beans.trunc(),
            cups: self.cups,
            money: self.money.truncated(),
        }
    }

    /// Empties the cash box and returns what was in it.
    pub fn take_money(&mut self) -> Balance {
        std::mem::replace(&mut self.money, Balance::ZERO)
    }
}

fn checked_fill(current: Decimal, amount: Amount, what: &'static str) -> Result<Decimal> {
    let filled = current
        .checked_add(amount.value())
        .ok_or(MachineError::Overflow(what))?;
    if filled < Decimal::ZERO {
        return Err(MachineError::Depleted(what));
    }
    Ok(filled)
}
