use log::{debug, trace};

use crate::board::Board;
use crate::config::RuleConfig;
use crate::error::{GameError, InvalidMove, InvalidSelection, MoveFault, SelectionFault};
use crate::types::{Cell, MoveOutcome, Player, Position, SelectionAccepted, StateView};

/// Where a game is in its select-then-move cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingSelection,
    AwaitingDestination,
}

impl Phase {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AwaitingSelection => "AwaitingSelection",
            Self::AwaitingDestination => "AwaitingDestination",
        }
    }
}

/// Snapshot of a game for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub active_player: Player,
    /// Contract: when set, holds a piece of `active_player`.
    pub selected: Option<Position>,
}

impl GameState {
    pub fn phase(&self) -> Phase {
        if self.selected.is_some() {
            Phase::AwaitingDestination
        } else {
            Phase::AwaitingSelection
        }
    }

    pub fn to_view(&self) -> StateView {
        let (player_one_count, player_two_count) = self.board.count();
        StateView {
            board: self.board.to_array().to_vec(),
            active_player: self.active_player.id(),
            selected: self.selected,
            phase: self.phase().as_str(),
            player_one_count,
            player_two_count,
        }
    }
}

/// Result of [`GameEngine::handle_click`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    Selected(SelectionAccepted),
    Moved(MoveOutcome),
}

/// Rules engine for one game session.
#[derive(Debug, Clone)]
pub struct GameEngine {
    board: Board,
    active_player: Player,
    selected: Option<Position>,
    rules: RuleConfig,
}

impl GameEngine {
    pub fn new() -> Self {
        Self::with_rules(RuleConfig::default())
    }

    pub fn with_rules(rules: RuleConfig) -> Self {
        Self {
            board: Board::initial(),
            active_player: Player::One,
            selected: None,
            rules,
        }
    }

    pub fn active_player(&self) -> Player {
        self.active_player
    }

    pub fn phase(&self) -> Phase {
        self.current_state().phase()
    }

    pub fn current_state(&self) -> GameState {
        GameState {
            board: self.board,
            active_player: self.active_player,
            selected: self.selected,
        }
    }

    /// Picks the origin of the next move. Replaces any earlier selection.
    /// On failure the earlier selection, if any, is kept.
    pub fn select_cell(&mut self, position: Position) -> Result<SelectionAccepted, InvalidSelection> {
        let reason = match self.board.get(position) {
            None => SelectionFault::OutOfBounds,
            Some(Cell::Empty) => SelectionFault::Empty,
            Some(Cell::Owned(owner)) if owner != self.active_player => SelectionFault::OpponentPiece,
            Some(Cell::Owned(_)) => {
                self.selected = Some(position);
                debug!("{} selected {}", self.active_player, position);
                return Ok(SelectionAccepted { position });
            }
        };

        trace!("{} rejected selection {}: {}", self.active_player, position, reason);
        Err(InvalidSelection { position, reason })
    }

    /// Moves the selected piece to `destination`, then passes the turn.
    /// On failure nothing changes and the selection is kept for a retry.
    pub fn attempt_move(&mut self, destination: Position) -> Result<MoveOutcome, InvalidMove> {
        let Some(origin) = self.selected else {
            return Err(InvalidMove {
                from: None,
                to: destination,
                reason: MoveFault::NoSelection,
            });
        };

        let player = self.active_player;
        let kind = self
            .board
            .classify_move(origin, destination, player, &self.rules)
            .map_err(|reason| {
                trace!("{player} rejected move {origin} -> {destination}: {reason}");
                InvalidMove {
                    from: Some(origin),
                    to: destination,
                    reason,
                }
            })?;

        let captured = self.board.apply_move(origin, destination, player, kind);
        self.active_player = player.opponent();
        self.selected = None;

        match captured {
            Some(taken) => debug!("{player} moved {origin} -> {destination}, captured {taken}"),
            None => debug!("{player} moved {origin} -> {destination}"),
        }

        Ok(MoveOutcome {
            board: self.board,
            active_player: self.active_player,
            captured,
        })
    }

    /// One cell click: selects when nothing is selected yet, otherwise tries
    /// to move the selected piece there.
    pub fn handle_click(&mut self, position: Position) -> Result<ClickOutcome, GameError> {
        if self.selected.is_none() {
            Ok(ClickOutcome::Selected(self.select_cell(position)?))
        } else {
            Ok(ClickOutcome::Moved(self.attempt_move(position)?))
        }
    }

    pub fn clear_selection(&mut self) {
        if let Some(position) = self.selected.take() {
            debug!("{} dropped selection {}", self.active_player, position);
        }
    }

    /// Destinations the selected piece may move to; empty without a selection.
    pub fn legal_destinations(&self) -> Vec<Position> {
        match self.selected {
            Some(origin) => self
                .board
                .legal_destinations(origin, self.active_player, &self.rules),
            None => Vec::new(),
        }
    }

    #[cfg(test)]
    fn set_board_for_test(&mut self, board: Board, active_player: Player) {
        self.board = board;
        self.active_player = active_player;
        self.selected = None;
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
