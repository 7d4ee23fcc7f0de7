/// Outcome sentinel returned by every drawing operation.
///
/// Drawing never raises: failures are logged and reported through this
/// two-valued flag, and callers decide whether to care.
#[must_use]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Attempt {
    Success,
    Fail,
}

impl Attempt {
    #[inline]
    pub const fn is_success(self) -> bool {
        matches!(self, Attempt::Success)
    }

    #[inline]
    pub const fn is_fail(self) -> bool {
        matches!(self, Attempt::Fail)
    }

    /// Logical AND: `Success` only when both outcomes succeeded.
    ///
    /// Used to fold per-strip outcomes in gradient drawing.
    #[inline]
    pub const fn and(self, other: Attempt) -> Attempt {
        match (self, other) {
            (Attempt::Success, Attempt::Success) => Attempt::Success,
            _ => Attempt::Fail,
        }
    }
}

impl From<bool> for Attempt {
    #[inline]
    fn from(ok: bool) -> Self {
        if ok { Attempt::Success } else { Attempt::Fail }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn and_is_logical_conjunction() {
        assert_eq!(Attempt::Success.and(Attempt::Success), Attempt::Success);
        assert_eq!(Attempt::Success.and(Attempt::Fail), Attempt::Fail);
        assert_eq!(Attempt::Fail.and(Attempt::Success), Attempt::Fail);
        assert_eq!(Attempt::Fail.and(Attempt::Fail), Attempt::Fail);
    }

    #[test]
    fn converts_from_bool() {
        assert_eq!(Attempt::from(true), Attempt::Success);
        assert_eq!(Attempt::from(false), Attempt::Fail);
    }
}
