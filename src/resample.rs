use crate::index::IndexSet;
use rand::Rng;

/// One resampling step: the unit at position `unit` of the index set gets the
/// new identifier `sequence_number` (1-based) in the replicate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Draw {
    pub sequence_number: usize,
    pub unit: usize,
}

/// Draws units uniformly with replacement until the drawn lengths add up to at
/// least the total length of the index set. Every unit is equally likely
/// regardless of its length: the resampled blocks are units, not base pairs.
///
/// Always yields at least one draw.
pub struct Resampler<'a, R: Rng> {
    index: &'a IndexSet,
    rng: &'a mut R,
    accumulated_length: u64,
    draw_count: usize,
}

impl<'a, R: Rng> Resampler<'a, R> {
    /// Returns None if the index set is empty, since no draw could ever reach the target.
    pub fn new(index: &'a IndexSet, rng: &'a mut R) -> Option<Self> {
        if index.is_empty() {
            return None;
        }
        Some(Resampler {
            index,
            rng,
            accumulated_length: 0,
            draw_count: 0,
        })
    }

    pub fn accumulated_length(&self) -> u64 {
        self.accumulated_length
    }

    fn done(&self) -> bool {
        self.draw_count > 0 && self.accumulated_length >= self.index.total_length()
    }
}

impl<'a, R: Rng> Iterator for Resampler<'a, R> {
    type Item = Draw;

    fn next(&mut self) -> Option<Draw> {
        if self.done() {
            return None;
        }
        let unit = self.rng.random_range(0..self.index.len());
        let length = self.index.get(unit).length;
        self.accumulated_length = self.accumulated_length.saturating_add(length);
        self.draw_count += 1;
        Some(Draw {
            sequence_number: self.draw_count,
            unit,
        })
    }
}
