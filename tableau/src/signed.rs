use core::fmt::{self, Display};

/// Truth value asserted for a formula in a tableau.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Mark {
    T,
    F,
}

impl Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::T => write!(f, "T"),
            Mark::F => write!(f, "F"),
        }
    }
}

impl core::ops::Neg for Mark {
    type Output = Self;
    fn neg(self) -> Self {
        match self {
            Mark::T => Mark::F,
            Mark::F => Mark::T,
        }
    }
}

/// Wrapper around an object to store a mark (T/F) along it.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Signed<T>(pub Mark, pub T);

impl<T> Signed<T> {
    pub fn mark(&self) -> Mark {
        self.0
    }
}

impl<T: Display> Display for Signed<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.0, self.1)
    }
}

impl<T> core::ops::Neg for Signed<T> {
    type Output = Self;
    fn neg(self) -> Self {
        Self(-self.0, self.1)
    }
}
