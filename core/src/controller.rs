use crate::*;

/// Source of the two timed events a session needs.
///
/// Tasks are owned handles, dropping one cancels it. This is how
/// `gloo::timers::callback::{Interval, Timeout}` behave.
pub trait Scheduler {
    type Task;

    /// Starts delivering one [`Controller::tick`] per second until dropped.
    fn start_countdown(&mut self) -> Self::Task;

    /// Delivers a single [`Controller::reveal`] after `delay_ms`.
    fn schedule_reveal(&mut self, delay_ms: u32) -> Self::Task;
}

/// Presentation side of a session.
pub trait Renderer {
    /// Called after every accepted input.
    fn render(&mut self, session: &Session);

    /// Called once the reveal delay after a win has elapsed.
    fn reveal_solved(&mut self);

    /// Called once when the countdown runs out.
    fn timed_out(&mut self) {}
}

/// Drives a [`Session`] and owns its timers.
///
/// At most one countdown task is alive, and only while the session is active.
pub struct Controller<S: Scheduler, R: Renderer> {
    session: Session,
    scheduler: S,
    renderer: R,
    countdown: Option<S::Task>,
    pending_reveal: Option<S::Task>,
}

impl<S: Scheduler, R: Renderer> Controller<S, R> {
    pub fn new(config: SessionConfig, scheduler: S, mut renderer: R) -> Self {
        let session = Session::new(config);
        renderer.render(&session);
        Self {
            session,
            scheduler,
            renderer,
            countdown: None,
            pending_reveal: None,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn has_countdown(&self) -> bool {
        self.countdown.is_some()
    }

    pub fn has_pending_reveal(&self) -> bool {
        self.pending_reveal.is_some()
    }

    pub fn start(&mut self) -> StartOutcome {
        // release the old timers before acquiring a new countdown
        self.pending_reveal = None;
        self.countdown = None;

        let outcome = self.session.start();
        self.countdown = Some(self.scheduler.start_countdown());
        self.renderer.render(&self.session);
        outcome
    }

    pub fn restart(&mut self) -> StartOutcome {
        if !self.session.state().is_active() {
            log::debug!("restart ignored in {:?}", self.session.state());
            return StartOutcome::Ignored;
        }
        self.start()
    }

    pub fn toggle(&mut self, coords: Coord2) -> ToggleOutcome {
        let outcome = self.session.toggle(coords);
        match outcome {
            ToggleOutcome::Ignored => return outcome,
            ToggleOutcome::Toggled => {}
            ToggleOutcome::Won => {
                self.countdown = None;
                let delay_ms = self.session.config().reveal_delay_ms;
                self.pending_reveal = Some(self.scheduler.schedule_reveal(delay_ms));
            }
        }
        self.renderer.render(&self.session);
        outcome
    }

    pub fn tick(&mut self) -> TickOutcome {
        let outcome = self.session.tick();
        match outcome {
            TickOutcome::Ignored => return outcome,
            TickOutcome::Counted => self.renderer.render(&self.session),
            TickOutcome::TimedOut => {
                self.countdown = None;
                self.renderer.render(&self.session);
                self.renderer.timed_out();
            }
        }
        outcome
    }

    /// Completes a pending reveal, returns whether the renderer was told.
    pub fn reveal(&mut self) -> bool {
        if self.pending_reveal.take().is_none() {
            return false;
        }
        if !matches!(self.session.state(), SessionState::Won) {
            return false;
        }
        log::debug!("revealing solved image");
        self.renderer.reveal_solved();
        true
    }
}
