//! Single-threaded pacing loop.

use std::time::Duration;
use tracing::debug;

use super::{Driver, TickOutcome, TickTicket};
use crate::display::Display;
use crate::models::RunRecord;

/// Waits out a ticket's delay.
pub trait Pacer {
    fn wait(&mut self, delay: Duration);
}

/// Sleeps the current thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadPacer;

impl Pacer for ThreadPacer {
    fn wait(&mut self, delay: Duration) {
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
    }
}

/// Accumulates delays without sleeping.
#[derive(Debug, Clone, Copy, Default)]
pub struct VirtualClock {
    elapsed: Duration,
}

impl VirtualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total simulated wait.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
}

impl Pacer for VirtualClock {
    fn wait(&mut self, delay: Duration) {
        self.elapsed += delay;
    }
}

/// Feeds tickets back into a [`Driver`] until the run ends or is cancelled.
///
/// Ticks never overlap: the next wait starts only after the previous tick
/// has drawn, published and advanced.
#[derive(Debug, Clone, Default)]
pub struct Player<P: Pacer> {
    pacer: P,
}

impl<P: Pacer> Player<P> {
    pub fn new(pacer: P) -> Self {
        Self { pacer }
    }

    pub fn pacer(&self) -> &P {
        &self.pacer
    }

    /// Plays from `ticket` to completion.
    ///
    /// Returns the run record, or `None` if the ticket chain was revoked.
    pub fn play(
        &mut self,
        driver: &mut Driver,
        ticket: TickTicket,
        display: &mut dyn Display,
    ) -> Option<RunRecord> {
        self.play_with(driver, ticket, display, |_, _, _| {})
    }

    /// Like [`Player::play`], calling `on_tick` after every tick.
    ///
    /// The hook may pause or reset the driver; the loop then stops at the
    /// revoked ticket.
    pub fn play_with<F>(
        &mut self,
        driver: &mut Driver,
        mut ticket: TickTicket,
        display: &mut dyn Display,
        mut on_tick: F,
    ) -> Option<RunRecord>
    where
        F: FnMut(&mut Driver, &mut dyn Display, &TickOutcome),
    {
        loop {
            self.pacer.wait(ticket.delay());
            let outcome = driver.tick(ticket, display);
            on_tick(driver, display, &outcome);
            match outcome {
                TickOutcome::Stepped { next, .. } => ticket = next,
                TickOutcome::Completed(record) => return Some(record),
                TickOutcome::Cancelled => {
                    debug!(cursor = driver.cursor(), "playback stopped");
                    return None;
                }
            }
        }
    }
}
