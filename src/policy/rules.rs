//! Built-in ordering rules.
//!
//! # Categories
//!
//! - **Arrival**: FCFS
//! - **Greedy**: SSTF
//! - **Sweep**: SCAN, C-SCAN, LOOK
//! - **Heuristic**: Ascending (the form's "AI" option)
//!
//! Every rule returns a permutation of its input; duplicates are kept.

use super::{Direction, SchedulingPolicy};
use crate::models::Track;

// ======================== Arrival order ========================

/// First-Come First-Served.
///
/// Services requests in arrival order.
#[derive(Debug, Clone, Copy)]
pub struct Fcfs;

impl SchedulingPolicy for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn order(&self, _head: Track, requests: &[Track]) -> Vec<Track> {
        requests.to_vec()
    }

    fn description(&self) -> &'static str {
        "First-Come First-Served"
    }
}

// ======================== Greedy ========================

/// Shortest Seek Time First.
///
/// Repeatedly moves to the pending request nearest the current head.
/// On equal distance the request that arrived first wins.
///
/// # Complexity
/// O(n²) in the number of requests.
#[derive(Debug, Clone, Copy)]
pub struct Sstf;

impl SchedulingPolicy for Sstf {
    fn name(&self) -> &'static str {
        "SSTF"
    }

    fn order(&self, head: Track, requests: &[Track]) -> Vec<Track> {
        let mut remaining = requests.to_vec();
        let mut order = Vec::with_capacity(remaining.len());
        let mut current = head;

        while !remaining.is_empty() {
            let mut best = 0;
            for (i, &track) in remaining.iter().enumerate().skip(1) {
                if track.abs_diff(current) < remaining[best].abs_diff(current) {
                    best = i;
                }
            }
            // `remove` keeps the arrival order of the rest for tie-breaking
            current = remaining.remove(best);
            order.push(current);
        }

        order
    }

    fn description(&self) -> &'static str {
        "Shortest Seek Time First"
    }
}

// ======================== Heuristic ========================

/// Ascending track order.
///
/// Offered on the form as "AI". Ignores the head entirely; it is a
/// placeholder heuristic, not an optimization.
#[derive(Debug, Clone, Copy)]
pub struct Ascending;

impl SchedulingPolicy for Ascending {
    fn name(&self) -> &'static str {
        "AI"
    }

    fn order(&self, _head: Track, requests: &[Track]) -> Vec<Track> {
        let mut order = requests.to_vec();
        order.sort_unstable();
        order
    }

    fn description(&self) -> &'static str {
        "Ascending track order"
    }
}

// ======================== Sweeps ========================

/// Splits requests into those on the sweep side of `head` (inclusive) and
/// those behind it, each sorted in the sweep direction.
fn split_sweep(head: Track, requests: &[Track], direction: Direction) -> (Vec<Track>, Vec<Track>) {
    let (mut ahead, mut behind): (Vec<Track>, Vec<Track>) = match direction {
        Direction::Up => requests.iter().partition(|&&t| t >= head),
        Direction::Down => requests.iter().partition(|&&t| t <= head),
    };
    match direction {
        Direction::Up => {
            ahead.sort();
            behind.sort();
        }
        Direction::Down => {
            ahead.sort_by(|a, b| b.cmp(a));
            behind.sort_by(|a, b| b.cmp(a));
        }
    }
    (ahead, behind)
}

/// Sweep ahead, then reverse and sweep back.
fn elevator(head: Track, requests: &[Track], direction: Direction) -> Vec<Track> {
    let (mut order, mut behind) = split_sweep(head, requests, direction);
    behind.reverse();
    order.append(&mut behind);
    order
}

/// SCAN (elevator).
///
/// The arm sweeps to the disk edge before reversing. Only requests are
/// emitted, so the service order matches LOOK; the two differ in arm
/// travel, not in visiting order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Scan {
    direction: Direction,
}

impl Scan {
    /// Creates a SCAN rule sweeping first in `direction`.
    pub fn new(direction: Direction) -> Self {
        Self { direction }
    }
}

impl SchedulingPolicy for Scan {
    fn name(&self) -> &'static str {
        "SCAN"
    }

    fn order(&self, head: Track, requests: &[Track]) -> Vec<Track> {
        elevator(head, requests, self.direction)
    }

    fn description(&self) -> &'static str {
        "Elevator sweep to the disk edge"
    }
}

/// Circular SCAN.
///
/// Sweeps in one direction only; after the last request ahead it returns
/// to the far end and continues in the same direction.
#[derive(Debug, Clone, Copy, Default)]
pub struct CScan {
    direction: Direction,
}

impl CScan {
    /// Creates a C-SCAN rule sweeping in `direction`.
    pub fn new(direction: Direction) -> Self {
        Self { direction }
    }
}

impl SchedulingPolicy for CScan {
    fn name(&self) -> &'static str {
        "C-SCAN"
    }

    fn order(&self, head: Track, requests: &[Track]) -> Vec<Track> {
        let (mut order, mut wrapped) = split_sweep(head, requests, self.direction);
        order.append(&mut wrapped);
        order
    }

    fn description(&self) -> &'static str {
        "Circular elevator sweep"
    }
}

/// LOOK.
///
/// Like SCAN, but reverses at the last pending request instead of the edge.
#[derive(Debug, Clone, Copy, Default)]
pub struct Look {
    direction: Direction,
}

impl Look {
    /// Creates a LOOK rule sweeping first in `direction`.
    pub fn new(direction: Direction) -> Self {
        Self { direction }
    }
}

impl SchedulingPolicy for Look {
    fn name(&self) -> &'static str {
        "LOOK"
    }

    fn order(&self, head: Track, requests: &[Track]) -> Vec<Track> {
        elevator(head, requests, self.direction)
    }

    fn description(&self) -> &'static str {
        "Elevator sweep reversing at the last request"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUEUE: [Track; 8] = [98, 183, 37, 122, 14, 124, 65, 67];

    #[test]
    fn test_fcfs_unchanged() {
        assert_eq!(Fcfs.order(53, &QUEUE), QUEUE.to_vec());
    }

    #[test]
    fn test_sstf_textbook() {
        // Silberschatz: 53 → 65 → 67 → 37 → 14 → 98 → 122 → 124 → 183
        assert_eq!(
            Sstf.order(53, &QUEUE),
            vec![65, 67, 37, 14, 98, 122, 124, 183]
        );
    }

    #[test]
    fn test_sstf_first_pick_from_50() {
        assert_eq!(Sstf.order(50, &QUEUE)[0], 65);
    }

    #[test]
    fn test_sstf_tie_keeps_arrival_order() {
        // 40 and 60 are both 10 away from 50; 60 arrived first
        assert_eq!(Sstf.order(50, &[60, 40]), vec![60, 40]);
        assert_eq!(Sstf.order(50, &[40, 60]), vec![40, 60]);
    }

    #[test]
    fn test_sstf_keeps_duplicates() {
        assert_eq!(Sstf.order(0, &[5, 5, 1]), vec![1, 5, 5]);
    }

    #[test]
    fn test_ascending() {
        assert_eq!(
            Ascending.order(53, &QUEUE),
            vec![14, 37, 65, 67, 98, 122, 124, 183]
        );
    }

    #[test]
    fn test_look_up() {
        assert_eq!(
            Look::new(Direction::Up).order(53, &QUEUE),
            vec![65, 67, 98, 122, 124, 183, 37, 14]
        );
    }

    #[test]
    fn test_look_down() {
        assert_eq!(
            Look::new(Direction::Down).order(53, &QUEUE),
            vec![37, 14, 65, 67, 98, 122, 124, 183]
        );
    }

    #[test]
    fn test_scan_matches_look_order() {
        let scan = Scan::new(Direction::Up).order(53, &QUEUE);
        let look = Look::new(Direction::Up).order(53, &QUEUE);
        assert_eq!(scan, look);
    }

    #[test]
    fn test_cscan_up_wraps() {
        assert_eq!(
            CScan::new(Direction::Up).order(53, &QUEUE),
            vec![65, 67, 98, 122, 124, 183, 14, 37]
        );
    }

    #[test]
    fn test_cscan_down_wraps() {
        assert_eq!(
            CScan::new(Direction::Down).order(53, &QUEUE),
            vec![37, 14, 183, 124, 122, 98, 67, 65]
        );
    }

    #[test]
    fn test_request_at_head_served_first() {
        assert_eq!(Look::new(Direction::Up).order(50, &[10, 50, 90]), vec![50, 90, 10]);
        assert_eq!(
            Look::new(Direction::Down).order(50, &[10, 50, 90]),
            vec![50, 10, 90]
        );
    }
}
