//! Revealed prefix of a run, as handed to the renderer.

use super::Track;

/// The head trace up to and including the current step.
///
/// `revealed` counts how many entries of `sequence` have been serviced;
/// it never exceeds `sequence.len()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame<'a> {
    head: Track,
    sequence: &'a [Track],
    revealed: usize,
}

impl<'a> Frame<'a> {
    /// Creates a frame, clamping `revealed` to the sequence length.
    pub fn new(head: Track, sequence: &'a [Track], revealed: usize) -> Self {
        Self {
            head,
            sequence,
            revealed: revealed.min(sequence.len()),
        }
    }

    /// Starting head position.
    #[inline]
    pub fn head(&self) -> Track {
        self.head
    }

    /// Full service sequence (fixes the x-axis extent).
    #[inline]
    pub fn sequence(&self) -> &'a [Track] {
        self.sequence
    }

    /// Number of serviced entries.
    #[inline]
    pub fn revealed(&self) -> usize {
        self.revealed
    }

    /// Serviced prefix of the sequence.
    pub fn visited(&self) -> &'a [Track] {
        &self.sequence[..self.revealed]
    }

    /// Head followed by the serviced prefix.
    pub fn points(&self) -> impl Iterator<Item = Track> + 'a {
        std::iter::once(self.head).chain(self.visited().iter().copied())
    }

    /// Largest plotted value: max of head, every sequence entry, and `floor`.
    pub fn scale_max(&self, floor: Track) -> Track {
        self.sequence
            .iter()
            .copied()
            .fold(self.head.max(floor), Track::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_include_head() {
        let seq = [10, 20, 30];
        let frame = Frame::new(50, &seq, 2);
        assert_eq!(frame.points().collect::<Vec<_>>(), vec![50, 10, 20]);
        assert_eq!(frame.visited(), &[10, 20]);
    }

    #[test]
    fn test_revealed_clamped() {
        let seq = [1, 2];
        let frame = Frame::new(0, &seq, 9);
        assert_eq!(frame.revealed(), 2);
        assert_eq!(frame.visited(), &[1, 2]);
        assert_eq!(frame.points().count(), 3);
    }

    #[test]
    fn test_scale_max() {
        let seq = [10, 250, 30];
        assert_eq!(Frame::new(50, &seq, 0).scale_max(200), 250);
        assert_eq!(Frame::new(50, &[10], 0).scale_max(200), 200);
        assert_eq!(Frame::new(300, &[10], 0).scale_max(200), 300);
    }
}
