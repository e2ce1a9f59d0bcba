use crate::config::RuleConfig;
use crate::error::MoveFault;
use crate::types::{Cell, Player, Position};

pub const BOARD_SIZE: usize = 6;
pub const BOARD_LEN: usize = BOARD_SIZE * BOARD_SIZE;
const HOME_ROWS: usize = 2;
const STEPS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
    (-2, -2),
    (-2, 2),
    (2, -2),
    (2, 2),
];

/// Kind of a move that passed the legality rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    Simple,
    Capture { captured: Position },
}

/// 6x6 draughts board, indexed `[row][col]`, row 0 at the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn empty() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Creates the starting layout: player one on the dark cells of rows 0-1,
    /// player two on the dark cells of rows 4-5. A cell is dark when
    /// `(row + col) % 2 == 1`.
    pub fn initial() -> Self {
        let mut board = Self::empty();
        for row in 0..BOARD_SIZE {
            let owner = if row < HOME_ROWS {
                Player::One
            } else if row >= BOARD_SIZE - HOME_ROWS {
                Player::Two
            } else {
                continue;
            };

            for col in 0..BOARD_SIZE {
                if (row + col) % 2 == 1 {
                    board.cells[row][col] = Cell::Owned(owner);
                }
            }
        }
        board
    }

    pub fn contains(pos: Position) -> bool {
        index(pos).is_some()
    }

    /// Returns the cell at `pos`, or `None` when it lies off the board.
    pub fn get(&self, pos: Position) -> Option<Cell> {
        index(pos).map(|(row, col)| self.cells[row][col])
    }

    /// Writes `cell` at `pos`. Returns `false` and leaves the board untouched
    /// when `pos` lies off the board.
    pub fn set(&mut self, pos: Position, cell: Cell) -> bool {
        match index(pos) {
            Some((row, col)) => {
                self.cells[row][col] = cell;
                true
            }
            None => false,
        }
    }

    pub fn owner(&self, pos: Position) -> Option<Player> {
        self.get(pos).and_then(Cell::owner)
    }

    /// Checks a move of `player` from `from` to `to` against the movement
    /// rules without touching the board.
    pub fn classify_move(
        &self,
        from: Position,
        to: Position,
        player: Player,
        rules: &RuleConfig,
    ) -> Result<MoveKind, MoveFault> {
        if !Self::contains(from) || !Self::contains(to) {
            return Err(MoveFault::OutOfBounds);
        }
        if self.get(to) != Some(Cell::Empty) {
            return Err(MoveFault::Occupied);
        }

        let d_row = to.row - from.row;
        let d_col = (to.col - from.col).abs();

        match (d_row.abs(), d_col) {
            (1, 1) => {
                if self.owner(from) != Some(player) {
                    return Err(MoveFault::NotOwnPiece);
                }
                if d_row != player.forward() {
                    return Err(MoveFault::WrongDirection);
                }
                Ok(MoveKind::Simple)
            }
            (2, 2) => {
                if rules.strict_captures {
                    if self.owner(from) != Some(player) {
                        return Err(MoveFault::NotOwnPiece);
                    }
                    if d_row != 2 * player.forward() {
                        return Err(MoveFault::WrongDirection);
                    }
                }

                let mid = from.midpoint(to);
                match self.owner(mid) {
                    Some(owner) if owner != player => Ok(MoveKind::Capture { captured: mid }),
                    _ => Err(MoveFault::NothingToCapture),
                }
            }
            _ => Err(MoveFault::NotDiagonal),
        }
    }

    /// Moves `player`'s piece from `from` to `to` and removes the jumped
    /// piece for a capture. Caller contract: `kind` came from
    /// [`Board::classify_move`] for the same arguments.
    /// Returns the captured position, if any.
    pub fn apply_move(
        &mut self,
        from: Position,
        to: Position,
        player: Player,
        kind: MoveKind,
    ) -> Option<Position> {
        self.set(to, Cell::Owned(player));
        self.set(from, Cell::Empty);

        match kind {
            MoveKind::Simple => None,
            MoveKind::Capture { captured } => {
                self.set(captured, Cell::Empty);
                Some(captured)
            }
        }
    }

    /// Every destination reachable from `from` by one legal move of `player`.
    pub fn legal_destinations(
        &self,
        from: Position,
        player: Player,
        rules: &RuleConfig,
    ) -> Vec<Position> {
        if !Self::contains(from) {
            return Vec::new();
        }

        STEPS
            .iter()
            .map(|&(dr, dc)| Position::new(from.row + dr, from.col + dc))
            .filter(|&to| self.classify_move(from, to, player, rules).is_ok())
            .collect()
    }

    /// Returns `(player_one_count, player_two_count)`.
    pub fn count(&self) -> (u8, u8) {
        self.cells
            .iter()
            .flatten()
            .fold((0, 0), |(one, two), cell| match cell {
                Cell::Owned(Player::One) => (one + 1, two),
                Cell::Owned(Player::Two) => (one, two + 1),
                Cell::Empty => (one, two),
            })
    }

    /// Converts board to `[u8; 36]` where 0=empty, 1=player one, 2=player two.
    pub fn to_array(&self) -> [u8; BOARD_LEN] {
        let mut out = [0u8; BOARD_LEN];
        for (slot, cell) in out.iter_mut().zip(self.cells.iter().flatten()) {
            *slot = cell.owner().map_or(0, Player::id);
        }
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

fn index(pos: Position) -> Option<(usize, usize)> {
    let size = BOARD_SIZE as i8;
    if (0..size).contains(&pos.row) && (0..size).contains(&pos.col) {
        Some((pos.row as usize, pos.col as usize))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(row: i8, col: i8) -> Position {
        Position::new(row, col)
    }

    fn board_with(pieces: &[(i8, i8, Player)]) -> Board {
        let mut board = Board::empty();
        for &(row, col, player) in pieces {
            assert!(board.set(pos(row, col), Cell::Owned(player)));
        }
        board
    }

    #[test]
    fn initial_layout_fills_dark_cells_of_home_rows() {
        let board = Board::initial();

        for row in 0..BOARD_SIZE as i8 {
            for col in 0..BOARD_SIZE as i8 {
                let dark = (row + col) % 2 == 1;
                let expected = match row {
                    0 | 1 if dark => Cell::Owned(Player::One),
                    4 | 5 if dark => Cell::Owned(Player::Two),
                    _ => Cell::Empty,
                };
                assert_eq!(board.get(pos(row, col)), Some(expected), "cell ({row}, {col})");
            }
        }
        assert_eq!(board.count(), (6, 6));
    }

    #[test]
    fn get_and_set_reject_off_board_positions() {
        let mut board = Board::empty();
        let before = board;

        assert_eq!(board.get(pos(-1, 0)), None);
        assert_eq!(board.get(pos(0, 6)), None);
        assert!(!board.set(pos(6, 6), Cell::Owned(Player::One)));
        assert_eq!(board, before);
    }

    #[test]
    fn simple_move_only_goes_forward() {
        let board = board_with(&[(2, 3, Player::One), (3, 2, Player::Two)]);
        let rules = RuleConfig::default();

        assert_eq!(
            board.classify_move(pos(2, 3), pos(3, 4), Player::One, &rules),
            Ok(MoveKind::Simple)
        );
        assert_eq!(
            board.classify_move(pos(2, 3), pos(1, 2), Player::One, &rules),
            Err(MoveFault::WrongDirection)
        );
        assert_eq!(
            board.classify_move(pos(3, 2), pos(2, 1), Player::Two, &rules),
            Ok(MoveKind::Simple)
        );
        assert_eq!(
            board.classify_move(pos(3, 2), pos(4, 3), Player::Two, &rules),
            Err(MoveFault::WrongDirection)
        );
    }

    #[test]
    fn simple_move_requires_own_piece_at_origin() {
        let board = board_with(&[(2, 3, Player::Two)]);

        assert_eq!(
            board.classify_move(pos(2, 3), pos(3, 4), Player::One, &RuleConfig::default()),
            Err(MoveFault::NotOwnPiece)
        );
    }

    #[test]
    fn capture_needs_opposing_piece_in_the_middle() {
        let rules = RuleConfig::default();
        let board = board_with(&[
            (0, 1, Player::One),
            (1, 2, Player::Two),
            (1, 0, Player::One),
            (2, 1, Player::One),
        ]);

        assert_eq!(
            board.classify_move(pos(0, 1), pos(2, 3), Player::One, &rules),
            Ok(MoveKind::Capture {
                captured: pos(1, 2)
            })
        );
        // Friendly piece in between.
        assert_eq!(
            board.classify_move(pos(1, 0), pos(3, 2), Player::One, &rules),
            Err(MoveFault::NothingToCapture)
        );
        // Nothing in between.
        assert_eq!(
            board.classify_move(pos(1, 2), pos(3, 4), Player::Two, &rules),
            Err(MoveFault::NothingToCapture)
        );
    }

    #[test]
    fn literal_capture_rule_allows_backward_jumps() {
        let board = board_with(&[(3, 2, Player::One), (2, 3, Player::Two)]);

        assert_eq!(
            board.classify_move(pos(3, 2), pos(1, 4), Player::One, &RuleConfig::default()),
            Ok(MoveKind::Capture {
                captured: pos(2, 3)
            })
        );
        assert_eq!(
            board.classify_move(pos(3, 2), pos(1, 4), Player::One, &RuleConfig::strict()),
            Err(MoveFault::WrongDirection)
        );
    }

    #[test]
    fn literal_capture_rule_ignores_origin_owner() {
        // Origin holds a player two piece, jumped cell holds player two too.
        let board = board_with(&[(0, 1, Player::Two), (1, 2, Player::Two)]);

        assert_eq!(
            board.classify_move(pos(0, 1), pos(2, 3), Player::One, &RuleConfig::default()),
            Ok(MoveKind::Capture {
                captured: pos(1, 2)
            })
        );
        assert_eq!(
            board.classify_move(pos(0, 1), pos(2, 3), Player::One, &RuleConfig::strict()),
            Err(MoveFault::NotOwnPiece)
        );
    }

    #[test]
    fn occupied_destination_and_bad_geometry_are_rejected() {
        let rules = RuleConfig::default();
        let board = board_with(&[(2, 3, Player::One), (3, 4, Player::Two), (4, 5, Player::Two)]);

        assert_eq!(
            board.classify_move(pos(2, 3), pos(3, 4), Player::One, &rules),
            Err(MoveFault::Occupied)
        );
        assert_eq!(
            board.classify_move(pos(3, 4), pos(4, 5), Player::Two, &rules),
            Err(MoveFault::Occupied)
        );
        assert_eq!(
            board.classify_move(pos(2, 3), pos(3, 3), Player::One, &rules),
            Err(MoveFault::NotDiagonal)
        );
        assert_eq!(
            board.classify_move(pos(2, 3), pos(5, 0), Player::One, &rules),
            Err(MoveFault::NotDiagonal)
        );
    }

    #[test]
    fn apply_capture_removes_jumped_piece() {
        let mut board = board_with(&[(0, 1, Player::One), (1, 2, Player::Two)]);
        let kind = board
            .classify_move(pos(0, 1), pos(2, 3), Player::One, &RuleConfig::default())
            .unwrap();

        let captured = board.apply_move(pos(0, 1), pos(2, 3), Player::One, kind);

        assert_eq!(captured, Some(pos(1, 2)));
        assert_eq!(board.get(pos(0, 1)), Some(Cell::Empty));
        assert_eq!(board.get(pos(1, 2)), Some(Cell::Empty));
        assert_eq!(board.get(pos(2, 3)), Some(Cell::Owned(Player::One)));
        assert_eq!(board.count(), (1, 0));
    }

    #[test]
    fn legal_destinations_from_initial_front_row() {
        let board = Board::initial();
        let rules = RuleConfig::default();

        assert_eq!(
            board.legal_destinations(pos(1, 0), Player::One, &rules),
            vec![pos(2, 1)]
        );
        assert_eq!(
            board.legal_destinations(pos(4, 3), Player::Two, &rules),
            vec![pos(3, 2), pos(3, 4)]
        );
        assert!(board.legal_destinations(pos(0, 1), Player::One, &rules).is_empty());
        assert!(board.legal_destinations(pos(9, 9), Player::One, &rules).is_empty());
    }

    #[test]
    fn to_array_is_row_major() {
        let cells = Board::initial().to_array();

        assert_eq!(cells[1], 1); // (0, 1)
        assert_eq!(cells[0], 0); // (0, 0)
        assert_eq!(cells[4 * BOARD_SIZE + 1], 2); // (4, 1)
        assert_eq!(cells[2 * BOARD_SIZE + 1], 0); // (2, 1)
    }
}
