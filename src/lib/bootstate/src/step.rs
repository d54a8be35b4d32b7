use crate::{Error, PostCode, SequencerState};

/// Whether the executing core does the one-time platform bring-up
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Role {
    /// The boot strap processor
    Primary,
    /// Any application processor
    Secondary,
}

/// How the stage was entered
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ResetPath {
    /// Full power-on
    Cold,
    /// CPU init was already detected, e.g. after an INIT IPI
    Warm,
}

/// Decides whether a step runs for a given role and reset path.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Gate {
    Always,
    /// Only on the primary core and only on the cold path
    ColdBootCpu,
}

impl Gate {
    pub fn allows(self, role: Role, reset_path: ResetPath) -> bool {
        match self {
            Self::Always => true,
            Self::ColdBootCpu => role == Role::Primary && reset_path == ResetPath::Cold,
        }
    }
}

pub type Action<P> = fn(&mut P, &SequencerState) -> Result<(), Error>;

/// One entry of a stage's step table.
pub struct Step<P> {
    pub name: &'static str,
    /// Emitted before `action` runs; `None` runs under the previous code
    pub checkpoint: Option<PostCode>,
    pub gate: Gate,
    pub action: Action<P>,
}

impl<P> Step<P> {
    pub const fn always(
        name: &'static str,
        checkpoint: Option<PostCode>,
        action: Action<P>,
    ) -> Self {
        Self {
            name,
            checkpoint,
            gate: Gate::Always,
            action,
        }
    }

    pub const fn cold_boot_cpu(
        name: &'static str,
        checkpoint: Option<PostCode>,
        action: Action<P>,
    ) -> Self {
        Self {
            name,
            checkpoint,
            gate: Gate::ColdBootCpu,
            action,
        }
    }
}

// derive would require `P: Clone`
impl<P> Clone for Step<P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P> Copy for Step<P> {}

/// A boot stage: its step table plus the POST codes that frame the handoff.
pub struct Stage<'a, P> {
    name: &'static str,
    steps: &'a [Step<P>],
    handoff: PostCode,
    terminal: PostCode,
}

impl<'a, P> Stage<'a, P> {
    /// Builds a stage, rejecting tables whose POST codes (followed by
    /// `handoff` and `terminal`) are not strictly increasing.
    pub fn new(
        name: &'static str,
        steps: &'a [Step<P>],
        handoff: PostCode,
        terminal: PostCode,
    ) -> Result<Self, Error> {
        let codes = steps
            .iter()
            .filter_map(|s| s.checkpoint)
            .chain([handoff, terminal]);

        let mut previous: Option<PostCode> = None;
        for next in codes {
            if let Some(previous) = previous {
                if next <= previous {
                    return Err(Error::CheckpointOrder { previous, next });
                }
            }
            previous = Some(next);
        }

        Ok(Self {
            name,
            steps,
            handoff,
            terminal,
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn steps(&self) -> &'a [Step<P>] {
        self.steps
    }

    /// POST code emitted right before control is passed on
    pub fn handoff(&self) -> PostCode {
        self.handoff
    }

    /// POST code that should never be seen: the next stage came back
    pub fn terminal(&self) -> PostCode {
        self.terminal
    }
}
