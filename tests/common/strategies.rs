use proptest::prelude::*;
use yggdrasil::models::{ItemCreate, ItemUpdate};

/// Strategy for generating item titles
pub fn title_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{1,40}"
}

/// Strategy for generating optional descriptions
pub fn description_strategy() -> impl Strategy<Value = Option<String>> {
    prop::option::of("[a-zA-Z0-9 .,!?]{0,120}")
}

pub fn item_create_strategy() -> impl Strategy<Value = ItemCreate> {
    (title_strategy(), description_strategy())
        .prop_map(|(title, description)| ItemCreate { title, description })
}

pub fn item_update_strategy() -> impl Strategy<Value = ItemUpdate> {
    (prop::option::of(title_strategy()), description_strategy())
        .prop_map(|(title, description)| ItemUpdate { title, description })
}

/// Owner ids for a batch of items, drawn from a small pool so owners repeat
pub fn owners_strategy() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(1i64..=4, 0..25)
}
