use rand::{rngs::SmallRng, SeedableRng};
use wasm_bindgen::prelude::*;

use crate::{
    deck::Card,
    game::{self, Action, GameState},
    hand,
};

fn js_error(message: String) -> JsValue {
    js_sys::Error::new(&message).into()
}

#[wasm_bindgen]
pub fn initial_state() -> Result<JsValue, JsValue> {
    console_error_panic_hook::set_once();
    serde_wasm_bindgen::to_value(&GameState::default())
        .map_err(|err| js_error(format!("Serialization failed: {err}")))
}

/// Runs one transition on a state held by the page and returns the next one.
#[wasm_bindgen]
pub fn apply_action(state: &JsValue, action: &str) -> Result<JsValue, JsValue> {
    console_error_panic_hook::set_once();
    let state: GameState = serde_wasm_bindgen::from_value(state.clone())
        .map_err(|err| js_error(format!("Invalid state: {err}")))?;
    let action: Action = action
        .parse()
        .map_err(|err| js_error(format!("Invalid input: {err}")))?;

    let mut rng = SmallRng::from_entropy();
    let next = game::apply(&state, action, &mut rng).map_err(|err| {
        web_sys::console::warn_1(&JsValue::from_str(&err.to_string()));
        js_error(err.to_string())
    })?;

    serde_wasm_bindgen::to_value(&next)
        .map_err(|err| js_error(format!("Serialization failed: {err}")))
}

#[wasm_bindgen]
pub fn hand_total(cards: &JsValue) -> Result<u8, JsValue> {
    let cards: Vec<Card> = serde_wasm_bindgen::from_value(cards.clone())
        .map_err(|err| js_error(format!("Invalid input: {err}")))?;
    Ok(hand::hand_value(&cards))
}
