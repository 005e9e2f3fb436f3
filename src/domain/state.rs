/// Where the machine is in its conversation with the user.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum InteractionState {
    #[default]
    ChooseAction,
    ChooseCoffee,
    FillWater,
    FillMilk,
    FillBeans,
    FillCups,
}
