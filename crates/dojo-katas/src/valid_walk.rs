//! Ten-minute walk validation.
//!
//! A walk is valid iff it takes exactly ten one-block steps and returns
//! to the start. Directions are the four compass points; parsing raw
//! tokens into [`Direction`] is the caller's job, so an out-of-domain
//! token never reaches the walk check.

/// One compass step of a walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Parse a lowercase single-letter token; anything else is `None`.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "n" => Some(Self::North),
            "s" => Some(Self::South),
            "e" => Some(Self::East),
            "w" => Some(Self::West),
            _ => None,
        }
    }

    fn displacement(self) -> (i32, i32) {
        match self {
            Self::North => (0, 1),
            Self::South => (0, -1),
            Self::East => (1, 0),
            Self::West => (-1, 0),
        }
    }
}

/// Fold the displacement; valid iff length is exactly 10 and the net
/// displacement is (0, 0).
pub fn is_valid_walk(walk: &[Direction]) -> bool {
    if walk.len() != 10 {
        return false;
    }
    let (dx, dy) = walk.iter().fold((0, 0), |(x, y), step| {
        let (sx, sy) = step.displacement();
        (x + sx, y + sy)
    });
    dx == 0 && dy == 0
}
