//! Heuristic value of the tiles kept on the rack after a move.
use crate::tiles::NLETTERS;
use crate::Rack;

/// Value of keeping a single tile, per label. Index 0 is the blank.
const TILE_VALUES: [f32; NLETTERS + 1] = [
    25.0, // blank
    1.0,  // A
    -2.0, // B
    0.5,  // C
    0.0,  // D
    1.5,  // E
    -2.0, // F
    -2.5, // G
    0.5,  // H
    -0.5, // I
    -2.5, // J
    -1.5, // K
    -0.5, // L
    -0.5, // M
    0.0,  // N
    -1.0, // O
    -0.5, // P
    -7.0, // Q
    1.0,  // R
    7.5,  // S
    0.0,  // T
    -3.0, // U
    -5.0, // V
    -3.5, // W
    3.5,  // X
    -1.0, // Y
    2.0,  // Z
];

/// Penalty for each copy of a letter beyond the first. Blanks are exempt.
pub const DUPLICATE_PENALTY: f32 = 4.0;

/// Equity of the tiles left on `rack`, added to the raw score when ranking moves.
/// ## Example
/// ```
/// use scrabble_engine::{leave, Rack};
/// let good: Rack = "ERS*".parse()?;
/// let bad: Rack = "QUUV".parse()?;
/// assert!(leave::equity(&good) > 0.0);
/// assert!(leave::equity(&bad) < 0.0);
/// # Ok::<(), scrabble_engine::Error>(())
/// ```
pub fn equity(rack: &Rack) -> f32 {
    let blanks = rack.blanks() as f32 * TILE_VALUES[0];
    let letters: f32 = (1..=NLETTERS)
        .map(|label| {
            let count = rack.count_label(label as u8);
            if count == 0 {
                return 0.0;
            }
            count as f32 * TILE_VALUES[label] - (count - 1) as f32 * DUPLICATE_PENALTY
        })
        .sum();
    blanks + letters
}

#[cfg(test)]
mod tests {
    use super::*;

    fn equity_of(s: &str) -> f32 {
        equity(&s.parse::<Rack>().unwrap())
    }

    #[test]
    fn test_empty_leave() {
        assert_eq!(equity(&Rack::new()), 0.0);
    }

    #[test]
    fn test_single_tiles() {
        assert!(equity_of("*") > equity_of("S"));
        assert!(equity_of("S") > 0.0);
        assert!(equity_of("Z") > 0.0);
        for s in &["Q", "U", "V", "W"] {
            assert!(equity_of(s) < 0.0, "{} should be negative", s);
        }
    }

    #[test]
    fn test_duplicates() {
        assert_eq!(equity_of("EE"), 2.0 * 1.5 - DUPLICATE_PENALTY);
        assert_eq!(equity_of("EEE"), 3.0 * 1.5 - 2.0 * DUPLICATE_PENALTY);
        // two blanks are worth twice one blank
        assert_eq!(equity_of("**"), 2.0 * equity_of("*"));
    }
}
