//! Circular scan over the slots of a list of categories.

use rand::Rng;

/// A slot in the ring: (category index, element index).
pub(crate) type Slot = (usize, usize);

/// Visits every slot of a ring exactly once, starting anywhere and wrapping
/// around category boundaries until it is back at the start.
///
/// The ring is described by the length of each category. Empty categories
/// are stepped over.
#[derive(Debug, Clone)]
pub(crate) struct CircularScan<'a> {
    lens: &'a [usize],
    start: Slot,
    next: Option<Slot>,
}

impl<'a> CircularScan<'a> {
    /// Start at a given slot, which must exist.
    pub fn starting_at(lens: &'a [usize], start: Slot) -> Self {
        let valid = start.0 < lens.len() && start.1 < lens[start.0];
        Self {
            lens,
            start,
            next: valid.then_some(start),
        }
    }

    /// Start at a random slot: a random non-empty category, then a random
    /// element in it. Returns `None` if the ring has no slot at all.
    pub fn random(lens: &'a [usize], rng: &mut impl Rng) -> Option<Self> {
        let filled: Vec<usize> = (0..lens.len()).filter(|&c| lens[c] > 0).collect();
        if filled.is_empty() {
            return None;
        }
        let category = filled[rng.gen_range(0..filled.len())];
        let index = rng.gen_range(0..lens[category]);
        Some(Self::starting_at(lens, (category, index)))
    }

    fn step(&self, (mut category, mut index): Slot) -> Slot {
        index += 1;
        // The start slot is non-empty, so this always lands somewhere.
        while index >= self.lens[category] {
            category = (category + 1) % self.lens.len();
            index = 0;
        }
        (category, index)
    }
}

impl Iterator for CircularScan<'_> {
    type Item = Slot;

    fn next(&mut self) -> Option<Slot> {
        let current = self.next?;
        let following = self.step(current);
        self.next = (following != self.start).then_some(following);
        Some(current)
    }
}
