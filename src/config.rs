use serde::Deserialize;

/// Rule toggles fixed for the lifetime of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct RuleConfig {
    /// Contract:
    /// - `false`: a capture only needs an opposing piece on the jumped cell;
    ///   it may go in any diagonal direction, backward included.
    /// - `true`: a capture also requires the origin to hold a piece of the
    ///   active player and must go in that player's forward direction.
    pub strict_captures: bool,
}

impl RuleConfig {
    pub fn strict() -> Self {
        Self {
            strict_captures: true,
        }
    }
}
