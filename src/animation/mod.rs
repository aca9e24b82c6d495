//! Step-paced replay of a service sequence.
//!
//! # State machine
//!
//! ```text
//! Idle ──start──▶ Running ──pause──▶ Paused
//!  ▲                │  ▲──resume──────┘
//!  │                ▼
//!  └──reset── Completed   (reset is valid from every state)
//! ```
//!
//! # Ticks
//!
//! The [`Driver`] never schedules anything itself. Each operation that
//! (re)starts stepping hands back a [`TickTicket`]; the caller waits the
//! ticket's delay and passes it to [`Driver::tick`]. At most one ticket is
//! live. Pause and reset revoke it, so a tick that was already due when
//! the user paused is rejected as [`TickOutcome::Cancelled`] instead of
//! racing the pause.
//!
//! [`Player`] is the single-threaded loop that does the waiting.

mod driver;
mod player;

pub use driver::{Driver, TickOutcome, TickTicket};
pub use player::{Pacer, Player, ThreadPacer, VirtualClock};
