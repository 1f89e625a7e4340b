use core::num::Saturating;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    #[default]
    Idle,
    Active,
    Won,
    TimedOut,
}

impl SessionState {
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::TimedOut)
    }
}

/// One play-through: the board, the move counter and the countdown.
///
/// Every input is accepted or ignored according to [`SessionState`], nothing
/// here can fail.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    config: SessionConfig,
    grid: LightGrid,
    moves: Saturating<u32>,
    seconds_remaining: u32,
    state: SessionState,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        let grid = LightGrid::new(config.base.clone());
        let seconds_remaining = config.duration_secs;
        Self {
            config,
            grid,
            moves: Saturating(0),
            seconds_remaining,
            state: Default::default(),
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn grid(&self) -> &LightGrid {
        &self.grid
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn moves(&self) -> u32 {
        self.moves.0
    }

    pub fn seconds_remaining(&self) -> u32 {
        self.seconds_remaining
    }

    /// Begins a fresh play-through from any state.
    pub fn start(&mut self) -> StartOutcome {
        self.grid.reset_to_base();
        self.moves = Saturating(0);
        self.seconds_remaining = self.config.duration_secs;
        self.state = SessionState::Active;
        log::debug!("session started, {}s on the clock", self.seconds_remaining);
        StartOutcome::Started
    }

    /// Starts over, but only while a play-through is running.
    pub fn restart(&mut self) -> StartOutcome {
        if !self.state.is_active() {
            return StartOutcome::Ignored;
        }
        self.start()
    }

    pub fn toggle(&mut self, coords: Coord2) -> ToggleOutcome {
        if !self.state.is_active() || !self.grid.contains(coords) {
            return ToggleOutcome::Ignored;
        }

        self.moves += 1;
        self.grid.toggle_cross(coords);
        log::trace!("toggle {:?}, move {}", coords, self.moves.0);

        if self.grid.is_solved() {
            self.state = SessionState::Won;
            log::debug!(
                "solved in {} moves with {}s left",
                self.moves.0,
                self.seconds_remaining
            );
            ToggleOutcome::Won
        } else {
            ToggleOutcome::Toggled
        }
    }

    pub fn tick(&mut self) -> TickOutcome {
        if !self.state.is_active() {
            return TickOutcome::Ignored;
        }

        self.seconds_remaining = self.seconds_remaining.saturating_sub(1);
        log::trace!("tick, {}s left", self.seconds_remaining);

        if self.seconds_remaining == 0 {
            self.state = SessionState::TimedOut;
            log::debug!("timed out after {} moves", self.moves.0);
            TickOutcome::TimedOut
        } else {
            TickOutcome::Counted
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
