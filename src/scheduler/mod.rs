//! Service-order computation and seek metrics.
//!
//! # Algorithm
//!
//! [`schedule_with`] resolves a [`Policy`] to its rule and applies it to
//! the request list. The result is immutable for the rest of the run.
//!
//! # Metrics
//!
//! [`StepMetrics`] is recomputed from scratch for every revealed prefix:
//! seek distance, average response time and throughput.

mod metrics;

pub use metrics::{response_time, seek_time, StepMetrics};

use tracing::debug;

use crate::models::Track;
use crate::policy::{Policy, SweepMode};

/// Computes the service order with the default (pass-through) sweep mode.
pub fn schedule(policy: &Policy, head: Track, requests: &[Track]) -> Vec<Track> {
    schedule_with(policy, head, requests, SweepMode::default())
}

/// Computes the service order.
///
/// Unknown policies order pass-through; nothing here fails.
pub fn schedule_with(
    policy: &Policy,
    head: Track,
    requests: &[Track],
    sweep: SweepMode,
) -> Vec<Track> {
    let rule = policy.rule(sweep);
    let sequence = rule.order(head, requests);
    debug!(
        policy = %policy,
        rule = rule.name(),
        head,
        requests = requests.len(),
        "computed service sequence"
    );
    sequence
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::Direction;
    use proptest::prelude::*;

    fn sorted(mut v: Vec<Track>) -> Vec<Track> {
        v.sort_unstable();
        v
    }

    #[test]
    fn test_schedule_fcfs() {
        assert_eq!(schedule(&Policy::Fcfs, 50, &[10, 20, 30]), vec![10, 20, 30]);
    }

    #[test]
    fn test_schedule_sorted() {
        assert_eq!(schedule(&Policy::Sorted, 50, &[30, 10, 20]), vec![10, 20, 30]);
    }

    #[test]
    fn test_schedule_unknown_pass_through() {
        let policy = Policy::from_name("quantum");
        assert_eq!(schedule(&policy, 0, &[3, 1, 2]), vec![3, 1, 2]);
    }

    #[test]
    fn test_schedule_directional_look() {
        let sweep = SweepMode::Directional(Direction::Up);
        assert_eq!(
            schedule_with(&Policy::Look, 50, &[10, 70, 30, 90], sweep),
            vec![70, 90, 30, 10]
        );
    }

    proptest! {
        #[test]
        fn prop_fcfs_identity(
            head in -500i64..500,
            requests in prop::collection::vec(-500i64..500, 1..32),
        ) {
            prop_assert_eq!(schedule(&Policy::Fcfs, head, &requests), requests);
        }

        #[test]
        fn prop_every_policy_permutes(
            head in -500i64..500,
            requests in prop::collection::vec(-500i64..500, 1..32),
            up in any::<bool>(),
        ) {
            let direction = if up { Direction::Up } else { Direction::Down };
            for sweep in [SweepMode::PassThrough, SweepMode::Directional(direction)] {
                for policy in Policy::BUILT_IN {
                    let sequence = schedule_with(&policy, head, &requests, sweep);
                    prop_assert_eq!(sorted(sequence), sorted(requests.clone()));
                }
            }
        }

        #[test]
        fn prop_sstf_picks_nearest(
            head in -200i64..200,
            requests in prop::collection::vec(-200i64..200, 1..12),
        ) {
            let sequence = schedule(&Policy::Sstf, head, &requests);
            let mut remaining = requests.clone();
            let mut current = head;
            for &pick in &sequence {
                let nearest = remaining.iter().map(|t| t.abs_diff(current)).min().unwrap();
                prop_assert_eq!(pick.abs_diff(current), nearest);
                let idx = remaining.iter().position(|&t| t == pick).unwrap();
                remaining.remove(idx);
                current = pick;
            }
            prop_assert!(remaining.is_empty());
        }
    }
}
