use crate::{Error, PostCode, ResetPath, Role, Stage};
use core::convert::Infallible;
use log::{debug, error, trace};

/// What a sequencer needs from the board besides the step actions.
pub trait Platform {
    /// Write `code` to the POST port. Must not fail.
    fn post_code(&mut self, code: PostCode);

    /// Pass control to the next stage. Only ever returns on failure.
    fn enter_next_stage(&mut self) -> Result<Infallible, Error>;
}

/// Per-entry state of a stage, handed to every step action.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SequencerState {
    role: Role,
    reset_path: ResetPath,
    bist: u32,
    current_checkpoint: Option<PostCode>,
}

impl SequencerState {
    pub const fn new(role: Role, reset_path: ResetPath, bist: u32) -> Self {
        Self {
            role,
            reset_path,
            bist,
            current_checkpoint: None,
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn reset_path(&self) -> ResetPath {
        self.reset_path
    }

    /// Built-in self-test result as passed in by the reset vector, 0 = pass
    pub fn bist(&self) -> u32 {
        self.bist
    }

    pub fn current_checkpoint(&self) -> Option<PostCode> {
        self.current_checkpoint
    }
}

/// Runs a [`Stage`] exactly once.
pub struct Sequencer<'s, 'a, P> {
    stage: &'s Stage<'a, P>,
    state: SequencerState,
}

impl<'s, 'a, P: Platform> Sequencer<'s, 'a, P> {
    pub fn new(stage: &'s Stage<'a, P>, role: Role, reset_path: ResetPath, bist: u32) -> Self {
        Self {
            stage,
            state: SequencerState::new(role, reset_path, bist),
        }
    }

    pub fn state(&self) -> &SequencerState {
        &self.state
    }

    fn checkpoint(&mut self, platform: &mut P, code: PostCode) {
        trace!("POST: {code}");
        platform.post_code(code);
        self.state.current_checkpoint = Some(code);
    }

    /// Walk the step table and hand off to the next stage.
    ///
    /// This does not return when the handoff succeeds. Whatever comes back
    /// is fatal: either a step failed, or the next stage returned, in which
    /// case the stage's terminal POST code has been emitted.
    pub fn run(mut self, platform: &mut P) -> Error {
        let stage = self.stage;
        debug!(
            "{}: {:?} core, {:?} reset",
            stage.name(),
            self.state.role,
            self.state.reset_path
        );

        for step in stage.steps() {
            if !step.gate.allows(self.state.role, self.state.reset_path) {
                trace!("{}: skip {}", stage.name(), step.name);
                continue;
            }
            if let Some(code) = step.checkpoint {
                self.checkpoint(platform, code);
            }
            trace!("{}: {}", stage.name(), step.name);
            if let Err(e) = (step.action)(platform, &self.state) {
                error!("{}: {} failed: {e}", stage.name(), step.name);
                return e;
            }
        }

        self.checkpoint(platform, stage.handoff());
        let err = match platform.enter_next_stage() {
            Ok(never) => match never {},
            Err(e) => e,
        };
        error!("{}: next stage returned: {err}", stage.name());
        self.checkpoint(platform, stage.terminal());
        err
    }
}
