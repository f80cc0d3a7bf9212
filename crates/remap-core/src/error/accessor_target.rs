use super::Error;

/// Error when a getter or setter is handed an object of a type it was not
/// built for, e.g. a source path hop wired to the wrong owner type.
#[derive(Debug)]
pub(super) struct AccessorTargetError {
    expected: &'static str,
    actual: &'static str,
}

impl std::error::Error for AccessorTargetError {}

impl core::fmt::Display for AccessorTargetError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "accessor for `{}` applied to `{}`",
            self.expected, self.actual
        )
    }
}

impl Error {
    /// Creates an accessor target error.
    pub fn accessor_target(expected: &'static str, actual: &'static str) -> Error {
        Error::from(super::ErrorKind::AccessorTarget(AccessorTargetError {
            expected,
            actual,
        }))
    }

    /// Returns `true` if this error is an accessor target error.
    pub fn is_accessor_target(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::AccessorTarget(_))
    }
}
