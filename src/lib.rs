use once_cell::sync::OnceCell;
use serde::Serialize;
use wasm_bindgen::prelude::*;

pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod types;

pub use board::Board;
pub use config::RuleConfig;
pub use error::{GameError, InvalidMove, InvalidSelection, MoveFault, SelectionFault};
pub use game::{ClickOutcome, GameEngine, GameState, Phase};
pub use types::{Cell, MoveOutcome, Player, Position, SelectionAccepted};

use types::{MoveView, StateView};

static LOGGER: OnceCell<()> = OnceCell::new();

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}

/// Routes `log` output to the browser console. Later calls are no-ops.
/// `level` is one of `error`, `warn`, `info`, `debug`, `trace`; anything else
/// falls back to `info`.
#[wasm_bindgen]
pub fn init_logging(level: Option<String>) {
    let level = parse_level(level.as_deref());
    LOGGER.get_or_init(|| install_logger(level));
}

fn parse_level(name: Option<&str>) -> log::Level {
    name.and_then(|name| name.parse().ok()).unwrap_or(log::Level::Info)
}

#[cfg(target_arch = "wasm32")]
fn install_logger(level: log::Level) {
    _ = console_log::init_with_level(level);
}

// Native hosts install their own logger and choose their own max level.
#[cfg(not(target_arch = "wasm32"))]
fn install_logger(_level: log::Level) {}

/// Starting layout as 36 row-major bytes (0=empty, 1=player one, 2=player two).
#[wasm_bindgen]
pub fn initial_board() -> Vec<u8> {
    Board::initial().to_array().to_vec()
}

/// One game, owned by the JS side through this handle.
#[wasm_bindgen]
pub struct DamesSession {
    engine: GameEngine,
}

#[wasm_bindgen]
impl DamesSession {
    #[wasm_bindgen(constructor)]
    pub fn new() -> DamesSession {
        log::info!("new game with default rules");
        DamesSession {
            engine: GameEngine::new(),
        }
    }

    /// Builds a session from a JS rules object such as `{ strict_captures: true }`.
    /// Missing fields take their defaults.
    pub fn with_rules(rules: JsValue) -> Result<DamesSession, JsValue> {
        let rules: RuleConfig = if rules.is_undefined() || rules.is_null() {
            RuleConfig::default()
        } else {
            serde_wasm_bindgen::from_value(rules)?
        };
        log::info!("new game with {rules:?}");
        Ok(DamesSession {
            engine: GameEngine::with_rules(rules),
        })
    }

    pub fn select_cell(&mut self, row: i32, col: i32) -> Result<JsValue, JsValue> {
        let accepted = self
            .engine
            .select_cell(Position::from_js(row, col))
            .map_err(to_js_error)?;
        to_js(&accepted)
    }

    pub fn attempt_move(&mut self, row: i32, col: i32) -> Result<JsValue, JsValue> {
        let outcome = self
            .engine
            .attempt_move(Position::from_js(row, col))
            .map_err(to_js_error)?;
        to_js(&MoveView::from(&outcome))
    }

    /// Select-or-move in one call, for a board that only reports clicks.
    /// Returns the resulting state view.
    pub fn click(&mut self, row: i32, col: i32) -> Result<JsValue, JsValue> {
        self.engine
            .handle_click(Position::from_js(row, col))
            .map_err(to_js_error)?;
        self.state()
    }

    pub fn clear_selection(&mut self) {
        self.engine.clear_selection();
    }

    pub fn legal_destinations(&self) -> Result<JsValue, JsValue> {
        to_js(&self.engine.legal_destinations())
    }

    pub fn state(&self) -> Result<JsValue, JsValue> {
        let view: StateView = self.engine.current_state().to_view();
        to_js(&view)
    }
}

impl Default for DamesSession {
    fn default() -> Self {
        Self::new()
    }
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(JsValue::from)
}

fn to_js_error(err: impl std::error::Error) -> JsValue {
    JsValue::from_str(&err.to_string())
}
