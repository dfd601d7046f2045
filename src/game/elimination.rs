//! Choosing which losing door the host opens.
//!
//! The host never opens the prize door and never opens the door the
//! player picked. With three doors that leaves one candidate when the
//! player picked wrong and two when the player picked the prize; the
//! second case is settled by a fair coin.

use crate::game::door::DoorIndex;
use rand::Rng;

/// Doors that are neither the prize nor the player's pick.
pub fn candidates(prize: DoorIndex, selected: DoorIndex) -> Vec<DoorIndex> {
    DoorIndex::ALL
        .into_iter()
        .filter(|door| *door != prize && *door != selected)
        .collect()
}

/// Pick the door to eliminate.
///
/// A single candidate is returned without touching `rng`.
///
/// ```rust
/// use montyhall::game::{choose_eliminated, DoorIndex};
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let mut rng = StdRng::seed_from_u64(0);
/// let [first, second, third] = DoorIndex::ALL;
///
/// assert_eq!(choose_eliminated(first, second, &mut rng), Some(third));
/// ```
pub fn choose_eliminated<R: Rng + ?Sized>(
    prize: DoorIndex,
    selected: DoorIndex,
    rng: &mut R,
) -> Option<DoorIndex> {
    match candidates(prize, selected).as_slice() {
        [] => None,
        [only] => Some(*only),
        many => {
            let pick = rng.random_range(0..many.len());
            log::trace!("tie-break between {} candidates picked {}", many.len(), many[pick]);
            Some(many[pick])
        }
    }
}
