use core::fmt;

/// A POST code, the byte written to the debug port to mark boot progress.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct PostCode(u8);

impl PostCode {
    pub const fn new(code: u8) -> Self {
        Self(code)
    }

    pub const fn value(self) -> u8 {
        self.0
    }
}

impl From<u8> for PostCode {
    fn from(code: u8) -> Self {
        Self(code)
    }
}

impl From<PostCode> for u8 {
    fn from(code: PostCode) -> Self {
        code.0
    }
}

impl fmt::Display for PostCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#04x}", self.0)
    }
}
