use crate::PostCode;
use core::fmt;

/// Everything that ends a boot stage early.
///
/// None of these are recoverable: the board is expected to halt (or let the
/// watchdog reset it) once a sequencer hands one back.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// The CPU reported a non-zero built-in self-test result
    SelfTestFailure { bist: u32 },
    /// Control came back from the next stage
    NextStageReturned,
    /// A step table whose POST codes do not strictly increase
    CheckpointOrder { previous: PostCode, next: PostCode },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SelfTestFailure { bist } => write!(f, "BIST failed: {bist:08x}"),
            Self::NextStageReturned => write!(f, "next stage returned"),
            Self::CheckpointOrder { previous, next } => {
                write!(f, "POST code {next} does not follow {previous}")
            }
        }
    }
}
