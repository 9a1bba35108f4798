//! Pattern scores for positional evaluation
//!
//! A line only scores when it is live (it still has room to grow into a
//! five). Each tier is an order of magnitude above the one below it, so a
//! single stronger shape outweighs several weaker ones.

use serde::{Deserialize, Serialize};

use crate::search::LineShape;

/// Pattern scores for evaluation
pub struct LineScore;

impl LineScore {
    /// Exactly five: the move wins
    pub const FIVE: i32 = 100_000;
    /// Four, open or closed
    pub const FOUR: i32 = 10_000;
    /// Open three: _OOO_
    pub const OPEN_THREE: i32 = 1_000;
    /// Closed three: XOOO_ or _OOOX
    pub const CLOSED_THREE: i32 = 100;
    /// Open two: _OO_
    pub const OPEN_TWO: i32 = 50;
    /// Closed two: XOO_ or _OOX
    pub const CLOSED_TWO: i32 = 10;
}

/// Value of one line shape. Dead lines and overlines are worth nothing.
pub fn line_value(shape: &LineShape) -> i32 {
    if !shape.is_live() {
        return 0;
    }
    let half_open = shape.open_ends == 1;
    match shape.length {
        5 => LineScore::FIVE,
        4 => LineScore::FOUR,
        3 if shape.is_open() => LineScore::OPEN_THREE,
        3 if half_open => LineScore::CLOSED_THREE,
        2 if shape.is_open() => LineScore::OPEN_TWO,
        2 if half_open => LineScore::CLOSED_TWO,
        _ => 0,
    }
}

/// Weights of the three positional terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    /// Weight of lines the mover would build
    pub offense: i32,
    /// Weight of opponent lines the move would occupy
    pub defense: i32,
    /// Weight of closeness to the centre
    pub center: i32,
}

impl ScoreWeights {
    /// Largest weight a config may set
    pub const MAX: i32 = 1_000;

    /// Every weight lies in `0..=MAX`.
    pub fn in_range(&self) -> bool {
        [self.offense, self.defense, self.center]
            .iter()
            .all(|w| (0..=Self::MAX).contains(w))
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            offense: 2,
            defense: 1,
            center: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape(length: usize, open_ends: u8, room: usize) -> LineShape {
        LineShape {
            length,
            open_ends,
            room,
        }
    }

    #[test]
    fn test_pattern_hierarchy() {
        assert!(LineScore::FIVE > LineScore::FOUR);
        assert!(LineScore::FOUR > LineScore::OPEN_THREE);
        assert!(LineScore::OPEN_THREE > LineScore::CLOSED_THREE);
        assert!(LineScore::CLOSED_THREE > LineScore::OPEN_TWO);
        assert!(LineScore::OPEN_TWO > LineScore::CLOSED_TWO);
    }

    #[test]
    fn test_line_values() {
        assert_eq!(line_value(&shape(5, 0, 5)), LineScore::FIVE);
        assert_eq!(line_value(&shape(4, 1, 9)), LineScore::FOUR);
        assert_eq!(line_value(&shape(3, 2, 15)), LineScore::OPEN_THREE);
        assert_eq!(line_value(&shape(3, 1, 6)), LineScore::CLOSED_THREE);
        assert_eq!(line_value(&shape(2, 2, 8)), LineScore::OPEN_TWO);
        assert_eq!(line_value(&shape(2, 1, 5)), LineScore::CLOSED_TWO);
        assert_eq!(line_value(&shape(1, 2, 15)), 0);
        assert_eq!(line_value(&shape(3, 0, 7)), 0);
    }

    #[test]
    fn test_dead_and_overlines_score_zero() {
        assert_eq!(line_value(&shape(4, 1, 4)), 0);
        assert_eq!(line_value(&shape(6, 2, 15)), 0);
    }

    #[test]
    fn test_default_weights() {
        let weights = ScoreWeights::default();
        assert_eq!((weights.offense, weights.defense, weights.center), (2, 1, 1));
    }

    #[test]
    fn test_weights_partial_toml() {
        let weights: ScoreWeights = toml::from_str("defense = 3").unwrap();
        assert_eq!(weights.defense, 3);
        assert_eq!(weights.offense, 2);
    }
}
