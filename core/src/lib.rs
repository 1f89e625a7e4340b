#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use controller::*;
pub use error::*;
pub use grid::*;
pub use session::*;
pub use types::*;

mod controller;
mod error;
mod grid;
mod session;
mod types;

/// Default countdown length, five minutes.
pub const DEFAULT_DURATION_SECS: u32 = 300;

/// Default pause between winning and revealing the full image.
pub const DEFAULT_REVEAL_DELAY_MS: u32 = 500;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub duration_secs: u32,
    pub reveal_delay_ms: u32,
    pub base: Pattern,
}

impl SessionConfig {
    pub const fn new_unchecked(duration_secs: u32, reveal_delay_ms: u32, base: Pattern) -> Self {
        Self {
            duration_secs,
            reveal_delay_ms,
            base,
        }
    }

    /// A session needs at least one second on the clock.
    pub fn new(duration_secs: u32, reveal_delay_ms: u32, base: Pattern) -> Self {
        Self::new_unchecked(duration_secs.max(1), reveal_delay_ms, base)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new_unchecked(
            DEFAULT_DURATION_SECS,
            DEFAULT_REVEAL_DELAY_MS,
            Pattern::default(),
        )
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StartOutcome {
    Ignored,
    Started,
}

impl StartOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::Ignored => false,
            Self::Started => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ToggleOutcome {
    Ignored,
    Toggled,
    Won,
}

impl ToggleOutcome {
    pub const fn has_update(self) -> bool {
        use ToggleOutcome::*;
        match self {
            Ignored => false,
            Toggled => true,
            Won => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Ignored,
    Counted,
    TimedOut,
}

impl TickOutcome {
    pub const fn has_update(self) -> bool {
        use TickOutcome::*;
        match self {
            Ignored => false,
            Counted => true,
            TimedOut => true,
        }
    }
}
