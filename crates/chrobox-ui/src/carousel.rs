//! Timer-driven carousels.
//!
//! Two landing-page sections rotate a fixed small list of images on an
//! interval. The wrapping arithmetic lives in [`FrameCycle`] so it can be
//! unit tested; [`use_rotation`] owns the timer, which is released when the
//! component unmounts.

use std::time::Duration;

use leptos::leptos_dom::helpers::set_interval_with_handle;
use leptos::prelude::*;

/// A wrapping index over a fixed number of frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameCycle {
    len: usize,
    index: usize,
}

impl FrameCycle {
    /// A cycle over `len` frames, starting at frame 0. A zero-length cycle
    /// stays pinned to 0.
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    /// The current frame index, always within `0..len` for non-empty cycles.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Advance one frame, wrapping back to 0 after the last.
    pub fn advance(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }
}

/// A reactive frame index advancing every `period`, forever, until the
/// calling component unmounts.
pub fn use_rotation(len: usize, period: Duration) -> Signal<usize> {
    let cycle = RwSignal::new(FrameCycle::new(len));
    match set_interval_with_handle(
        move || cycle.update(|cycle| cycle.advance()),
        period,
    ) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(err) => log::warn!("rotation timer unavailable: {err:?}"),
    }
    Signal::derive(move || cycle.get().index())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_wraps_within_bounds() {
        let mut cycle = FrameCycle::new(3);
        let mut seen = Vec::new();
        for _ in 0..7 {
            seen.push(cycle.index());
            cycle.advance();
        }
        assert_eq!(seen, vec![0, 1, 2, 0, 1, 2, 0]);
    }

    #[test]
    fn test_single_frame_stays_put() {
        let mut cycle = FrameCycle::new(1);
        cycle.advance();
        cycle.advance();
        assert_eq!(cycle.index(), 0);
    }

    #[test]
    fn test_empty_cycle_does_not_divide_by_zero() {
        let mut cycle = FrameCycle::new(0);
        cycle.advance();
        assert_eq!(cycle.index(), 0);
    }

    #[test]
    fn test_two_frame_alternation() {
        let mut cycle = FrameCycle::new(2);
        assert_eq!(cycle.index(), 0);
        cycle.advance();
        assert_eq!(cycle.index(), 1);
        cycle.advance();
        assert_eq!(cycle.index(), 0);
    }
}
