//! Door positions.

use crate::game::error::GameError;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of doors on stage. The puzzle is only defined for three.
pub const DOOR_COUNT: usize = 3;

/// Zero-based position of a door, guaranteed to be in `0..DOOR_COUNT`.
///
/// ```rust
/// use montyhall::game::{DoorIndex, GameError};
///
/// let middle = DoorIndex::new(1).unwrap();
/// assert_eq!(middle.get(), 1);
/// assert_eq!(middle.number(), 2);
///
/// assert_eq!(DoorIndex::new(5), Err(GameError::InvalidInput { index: 5 }));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct DoorIndex(u8);

impl DoorIndex {
    /// Every door, left to right.
    pub const ALL: [DoorIndex; DOOR_COUNT] = [DoorIndex(0), DoorIndex(1), DoorIndex(2)];

    /// Validate a zero-based index.
    pub fn new(index: usize) -> Result<Self, GameError> {
        if index < DOOR_COUNT {
            Ok(Self(index as u8))
        } else {
            Err(GameError::InvalidInput { index })
        }
    }

    /// Zero-based index.
    pub fn get(self) -> usize {
        self.0 as usize
    }

    /// One-based number as shown to players.
    pub fn number(self) -> usize {
        self.get() + 1
    }

    /// Uniform draw over all doors.
    pub(crate) fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(rng.random_range(0..DOOR_COUNT) as u8)
    }
}

impl TryFrom<usize> for DoorIndex {
    type Error = GameError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::new(index)
    }
}

impl From<DoorIndex> for usize {
    fn from(door: DoorIndex) -> Self {
        door.get()
    }
}

impl fmt::Display for DoorIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "door {}", self.number())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn accepts_every_door_in_range() {
        for index in 0..DOOR_COUNT {
            assert_eq!(DoorIndex::new(index).map(DoorIndex::get), Ok(index));
        }
    }

    #[test]
    fn rejects_out_of_range_index() {
        assert_eq!(DoorIndex::new(3), Err(GameError::InvalidInput { index: 3 }));
        assert_eq!(
            DoorIndex::try_from(usize::MAX),
            Err(GameError::InvalidInput { index: usize::MAX })
        );
    }

    #[test]
    fn display_uses_one_based_number() {
        assert_eq!(DoorIndex::ALL[0].to_string(), "door 1");
        assert_eq!(DoorIndex::ALL[2].to_string(), "door 3");
    }

    #[test]
    fn deserialize_rejects_out_of_range() {
        assert_eq!(serde_json::from_str::<DoorIndex>("2").unwrap(), DoorIndex::ALL[2]);
        assert!(serde_json::from_str::<DoorIndex>("7").is_err());
    }

    #[test]
    fn random_draw_covers_all_doors() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut seen = [false; DOOR_COUNT];
        for _ in 0..100 {
            seen[DoorIndex::random(&mut rng).get()] = true;
        }
        assert_eq!(seen, [true; DOOR_COUNT]);
    }
}
