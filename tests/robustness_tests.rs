use coffee_machine::application::machine::{CoffeeMachine, Flow};
use coffee_machine::domain::recipe::find_recipe;
use coffee_machine::domain::state::InteractionState;
use coffee_machine::domain::supplies::Supplies;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;

const TOKENS: &[&str] = &[
    "buy", "fill", "take", "remaining", "back", "1", "2", "3", "0", "-1", "4", "12.5", "1e2",
    "-3", "abc", "", " ", "BUY", "99999999999", "2.0",
];

fn assert_non_negative(supplies: &Supplies) {
    assert!(supplies.water() >= Decimal::ZERO);
    assert!(supplies.milk() >= Decimal::ZERO);
    assert!(supplies.beans() >= Decimal::ZERO);
    assert!(supplies.money().0 >= Decimal::ZERO);
}

#[test]
fn test_random_input_never_breaks_invariants() {
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);
    let mut machine = CoffeeMachine::new();

    for _ in 0..5_000 {
        let token = *TOKENS.choose(&mut rng).unwrap();
        let before = machine.supplies().clone();
        let state = machine.state();

        match machine.input(token) {
            Flow::Exit => panic!("exit is never fed"),
            Flow::Continue(messages) => {
                if messages.is_empty() {
                    // Silent inputs change nothing at all.
                    assert_eq!(machine.state(), state);
                    assert_eq!(machine.supplies(), &before);
                }
            }
        }
        assert_non_negative(machine.supplies());

        // A purchase either happens in full or not at all.
        if state == InteractionState::ChooseCoffee
            && let Ok(id) = token.parse::<i32>()
            && let Some(recipe) = find_recipe(id)
        {
            let after = machine.supplies();
            if before.check(recipe).is_ok() {
                assert_eq!(after.water(), before.water() - recipe.water);
                assert_eq!(after.cups(), before.cups() - recipe.cups);
                assert_eq!(after.money(), before.money() + recipe.price);
            } else {
                assert_eq!(after, &before);
            }
        }
    }
}

#[test]
fn test_random_fill_amounts_accumulate() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut machine = CoffeeMachine::new();
    let mut expected_water = machine.supplies().water();
    let mut expected_cups = machine.supplies().cups();

    for _ in 0..200 {
        let water = rng.gen_range(0..1_000u32);
        let cups = rng.gen_range(0..10u32);
        let (water_token, cups_token) = (water.to_string(), cups.to_string());
        for token in ["fill", water_token.as_str(), "0", "0", cups_token.as_str()] {
            machine.input(token);
        }
        expected_water += Decimal::from(water);
        expected_cups += cups;
    }

    assert_eq!(machine.state(), InteractionState::ChooseAction);
    assert_eq!(machine.supplies().water(), expected_water);
    assert_eq!(machine.supplies().cups(), expected_cups);
}

#[test]
fn test_garbage_in_fill_states_keeps_waiting() {
    let mut machine = CoffeeMachine::new();
    machine.input("fill");

    for garbage in ["water", "", "1,5", "NaN", "--1", "0x10"] {
        assert_eq!(machine.input(garbage), Flow::Continue(Vec::new()));
        assert_eq!(machine.state(), InteractionState::FillWater);
    }
    assert_eq!(machine.supplies(), &Supplies::default());
}
