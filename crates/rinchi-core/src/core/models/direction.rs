use crate::core::constants::{DIRECTION_EQUILIBRIUM, DIRECTION_FORWARD, DIRECTION_REVERSE};
use phf::{Map, phf_map};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    Forward,       // Layer 2 -> layer 3 ("/d+")
    Backward,      // Layer 3 -> layer 2 ("/d-")
    Bidirectional, // Equilibrium ("/d=")
    #[default]
    Undirected, // No direction layer
}

static DIRECTION_TAGS: Map<char, Direction> = phf_map! {
    '=' => Direction::Bidirectional,
    '+' => Direction::Forward,
    '-' => Direction::Backward,
};

impl Direction {
    /// Resolves the character following a `/d` tag.
    ///
    /// An absent or unrecognized character resolves to [`Direction::Undirected`]
    /// instead of failing; the grammar already rejects malformed tags, so this
    /// only matters for direct callers.
    pub fn from_tag(tag: Option<char>) -> Self {
        tag.and_then(|c| DIRECTION_TAGS.get(&c).copied())
            .unwrap_or_default()
    }

    /// The character written after `/d` for this direction, if any.
    pub fn tag(self) -> Option<char> {
        match self {
            Self::Forward => Some(DIRECTION_FORWARD),
            Self::Backward => Some(DIRECTION_REVERSE),
            Self::Bidirectional => Some(DIRECTION_EQUILIBRIUM),
            Self::Undirected => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Forward => "Forward",
                Self::Backward => "Backward",
                Self::Bidirectional => "Bidirectional",
                Self::Undirected => "Undirected",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_tag_maps_the_three_direction_characters() {
        assert_eq!(Direction::from_tag(Some('=')), Direction::Bidirectional);
        assert_eq!(Direction::from_tag(Some('+')), Direction::Forward);
        assert_eq!(Direction::from_tag(Some('-')), Direction::Backward);
    }

    #[test]
    fn from_tag_falls_back_to_undirected() {
        assert_eq!(Direction::from_tag(None), Direction::Undirected);
        assert_eq!(Direction::from_tag(Some('x')), Direction::Undirected);
        assert_eq!(Direction::from_tag(Some('>')), Direction::Undirected);
    }

    #[test]
    fn tag_is_inverse_of_from_tag() {
        for direction in [
            Direction::Forward,
            Direction::Backward,
            Direction::Bidirectional,
            Direction::Undirected,
        ] {
            assert_eq!(Direction::from_tag(direction.tag()), direction);
        }
    }

    #[test]
    fn default_direction_is_undirected() {
        assert_eq!(Direction::default(), Direction::Undirected);
    }
}
