//! Run driver.

use std::time::Duration;
use tracing::{debug, info, warn};

use crate::config::{FormState, Settings};
use crate::display::{Display, Notice};
use crate::error::{Error, Result};
use crate::history::HistoryLog;
use crate::models::{Frame, RunInput, RunRecord, RunState, Track};
use crate::policy::Policy;
use crate::scheduler::{schedule_with, StepMetrics};
use crate::validation::{validate_run_input, ValidationError};

/// Permission to run one tick after `delay`.
///
/// Only the most recently issued ticket is honoured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickTicket {
    generation: u64,
    delay: Duration,
}

impl TickTicket {
    /// How long the caller should wait before ticking.
    #[inline]
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

/// Result of a tick.
#[derive(Debug, Clone, PartialEq)]
pub enum TickOutcome {
    /// One more request was revealed; tick again with `next`.
    Stepped {
        revealed: usize,
        metrics: StepMetrics,
        next: TickTicket,
    },
    /// The sequence was exhausted and the run recorded.
    Completed(RunRecord),
    /// Ticket was revoked by pause, reset or a newer ticket; nothing changed.
    Cancelled,
}

#[derive(Debug, Clone)]
struct LoadedRun {
    head: Track,
    policy: Policy,
    sequence: Vec<Track>,
}

/// Owns all run state: lifecycle, sequence, cursor and history.
///
/// Only [`Driver::tick`] advances the cursor, and only after the frame
/// for the new prefix has been drawn and its metrics published.
#[derive(Debug, Default)]
pub struct Driver {
    settings: Settings,
    state: RunState,
    run: Option<LoadedRun>,
    cursor: usize,
    last_metrics: Option<StepMetrics>,
    history: HistoryLog,
    generation: u64,
    pending: Option<u64>,
}

impl Driver {
    /// Creates an idle driver.
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            ..Default::default()
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[inline]
    pub fn state(&self) -> RunState {
        self.state
    }

    /// Requests revealed so far.
    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Service sequence of the loaded run; empty when idle.
    pub fn sequence(&self) -> &[Track] {
        self.run.as_ref().map_or(&[], |r| r.sequence.as_slice())
    }

    /// Starting head of the loaded run.
    pub fn head(&self) -> Option<Track> {
        self.run.as_ref().map(|r| r.head)
    }

    /// Policy of the loaded run.
    pub fn policy(&self) -> Option<&Policy> {
        self.run.as_ref().map(|r| &r.policy)
    }

    /// Metrics published by the latest step.
    pub fn last_metrics(&self) -> Option<&StepMetrics> {
        self.last_metrics.as_ref()
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    /// Validates form values and starts a run.
    ///
    /// Rejected while a run is Running or Paused. Validation failures are
    /// reported through `display` and leave the driver untouched.
    pub fn start(&mut self, form: &FormState, display: &mut dyn Display) -> Result<TickTicket> {
        self.ensure_startable(display)?;
        match validate_run_input(&form.head, &form.requests, &form.algorithm) {
            Ok(input) => self.start_input(input, display),
            Err(errors) => {
                for e in &errors {
                    display.notify(Notice::InvalidInput(e.message.clone()));
                }
                warn!(errors = errors.len(), "run input rejected");
                Err(Error::Validation(errors))
            }
        }
    }

    /// Starts a run from already-parsed input.
    ///
    /// Returns the first ticket, due immediately.
    pub fn start_input(
        &mut self,
        input: RunInput,
        display: &mut dyn Display,
    ) -> Result<TickTicket> {
        self.ensure_startable(display)?;
        if input.requests.is_empty() {
            let error = ValidationError::empty_requests();
            display.notify(Notice::InvalidInput(error.message.clone()));
            return Err(Error::Validation(vec![error]));
        }

        let sequence = schedule_with(
            &input.policy,
            input.head,
            &input.requests,
            self.settings.sweep_mode,
        );
        display.show_policy(&input.policy.label());
        info!(
            policy = %input.policy,
            head = input.head,
            requests = sequence.len(),
            "run started"
        );

        self.run = Some(LoadedRun {
            head: input.head,
            policy: input.policy,
            sequence,
        });
        self.cursor = 0;
        self.last_metrics = None;
        self.state = RunState::Running;
        Ok(self.issue(Duration::ZERO))
    }

    /// Halts stepping, keeping sequence and cursor. Revokes the live ticket.
    pub fn pause(&mut self) -> Result<()> {
        if self.state != RunState::Running {
            return Err(self.invalid("pause"));
        }
        self.pending = None;
        self.state = RunState::Paused;
        debug!(cursor = self.cursor, "paused");
        Ok(())
    }

    /// Continues a paused run from its cursor. Returns a ticket due immediately.
    pub fn resume(&mut self) -> Result<TickTicket> {
        if self.state != RunState::Paused {
            return Err(self.invalid("resume"));
        }
        self.state = RunState::Running;
        debug!(cursor = self.cursor, "resumed");
        Ok(self.issue(Duration::ZERO))
    }

    /// Discards the run and clears the display. Valid from every state;
    /// history is kept.
    pub fn reset(&mut self, display: &mut dyn Display) {
        self.pending = None;
        self.run = None;
        self.cursor = 0;
        self.last_metrics = None;
        self.state = RunState::Idle;
        display.clear();
        info!("reset");
    }

    /// Performs one step for `ticket`.
    ///
    /// While requests remain: draws head + the prefix through the next
    /// request, publishes its metrics, advances the cursor and returns the
    /// next ticket. Once exhausted: records the run and completes.
    pub fn tick(&mut self, ticket: TickTicket, display: &mut dyn Display) -> TickOutcome {
        if self.pending != Some(ticket.generation) {
            debug!(generation = ticket.generation, "stale tick ignored");
            return TickOutcome::Cancelled;
        }
        self.pending = None;

        let Some(run) = self.run.as_ref() else {
            return TickOutcome::Cancelled;
        };

        if self.cursor >= run.sequence.len() {
            let metrics = self.last_metrics.unwrap_or_else(|| {
                StepMetrics::for_prefix(run.head, &run.sequence, run.sequence.len())
            });
            let record = RunRecord::from_metrics(&run.policy, &metrics);
            self.history.push(record.clone());
            self.state = RunState::Completed;
            info!(
                policy = %record.policy,
                seek = record.seek_time,
                response = record.response_time,
                throughput = record.throughput,
                "run completed"
            );
            return TickOutcome::Completed(record);
        }

        let revealed = self.cursor + 1;
        display.draw(&Frame::new(run.head, &run.sequence, revealed));
        let metrics = StepMetrics::for_prefix(run.head, &run.sequence, revealed);
        display.publish(&metrics);
        debug!(step = revealed, seek = metrics.seek_time, "step");

        self.last_metrics = Some(metrics);
        self.cursor = revealed;
        let next = self.issue(self.settings.tick_interval());
        TickOutcome::Stepped {
            revealed,
            metrics,
            next,
        }
    }

    fn ensure_startable(&self, display: &mut dyn Display) -> Result<()> {
        if self.state.is_active() {
            warn!(state = %self.state, "start rejected");
            display.notify(Notice::RunRejected);
            return Err(Error::RunActive);
        }
        Ok(())
    }

    fn invalid(&self, action: &'static str) -> Error {
        warn!(state = %self.state, action, "invalid transition");
        Error::InvalidTransition {
            from: self.state,
            action,
        }
    }

    fn issue(&mut self, delay: Duration) -> TickTicket {
        self.generation += 1;
        self.pending = Some(self.generation);
        TickTicket {
            generation: self.generation,
            delay,
        }
    }
}
