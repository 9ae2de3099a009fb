use serde::Serialize;
use wasm_bindgen::prelude::*;

pub mod board;
pub mod game;
pub mod movegen;
pub mod types;

pub use board::Board;
pub use game::Game;
pub use types::{GameView, Kind, Piece, Position, SelectOutcome, Side};

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}

/// Browser-facing handle owning a single game.
#[wasm_bindgen]
pub struct PopeChess {
    game: Game,
}

#[wasm_bindgen]
impl PopeChess {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self { game: Game::new() }
    }

    /// Board grid, side to move, selection and highlighted destinations.
    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        to_js(&self.game.snapshot())
    }

    /// Click on `(row, col)`. Returns the serialized `SelectOutcome`.
    pub fn select(&mut self, row: u8, col: u8) -> Result<JsValue, JsValue> {
        let pos = Position::try_new(row, col).map_err(|e| JsValue::from_str(&e))?;
        to_js(&self.game.select(pos))
    }

    #[wasm_bindgen(js_name = currentTurn)]
    pub fn current_turn(&self) -> String {
        self.game.current_turn().name().to_string()
    }

    pub fn status(&self) -> String {
        self.game.status()
    }

    pub fn reset(&mut self) {
        self.game.reset();
    }
}

impl Default for PopeChess {
    fn default() -> Self {
        Self::new()
    }
}

/// Empty squares and missing selections cross the boundary as `null`.
fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    let serializer = serde_wasm_bindgen::Serializer::new().serialize_missing_as_null(true);
    value.serialize(&serializer).map_err(JsValue::from)
}
