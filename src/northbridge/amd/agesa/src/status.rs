use core::fmt;

/// AGESA_STATUS, ordered by severity
#[repr(u32)]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub enum AgesaStatus {
    Success = 0,
    Unsupported,
    BoundsChk,
    Alert,
    Warning,
    Error,
    Critical,
    Fatal,
}

impl AgesaStatus {
    /// Alert and Warning: the phase completed, with something to report
    pub fn is_warning(self) -> bool {
        matches!(self, Self::Alert | Self::Warning)
    }

    /// Error and worse
    pub fn is_error(self) -> bool {
        self >= Self::Error
    }
}

impl From<u32> for AgesaStatus {
    fn from(raw: u32) -> Self {
        match raw {
            0 => Self::Success,
            1 => Self::Unsupported,
            2 => Self::BoundsChk,
            3 => Self::Alert,
            4 => Self::Warning,
            5 => Self::Error,
            6 => Self::Critical,
            // anything past the known range is treated as the worst case
            _ => Self::Fatal,
        }
    }
}

impl fmt::Display for AgesaStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Success => "AGESA_SUCCESS",
            Self::Unsupported => "AGESA_UNSUPPORTED",
            Self::BoundsChk => "AGESA_BOUNDS_CHK",
            Self::Alert => "AGESA_ALERT",
            Self::Warning => "AGESA_WARNING",
            Self::Error => "AGESA_ERROR",
            Self::Critical => "AGESA_CRITICAL",
            Self::Fatal => "AGESA_FATAL",
        };
        f.write_str(name)
    }
}
