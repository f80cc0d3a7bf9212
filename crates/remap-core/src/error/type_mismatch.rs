use super::Error;

/// Which side of a mapping call received an object of the wrong type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapSide {
    Source,
    Destination,
}

/// Error when a mapping routine is called with an object whose runtime type
/// differs from the type declared by its type map.
#[derive(Debug)]
pub(super) struct TypeMismatchError {
    side: MapSide,
    expected: &'static str,
    actual: &'static str,
}

impl std::error::Error for TypeMismatchError {}

impl core::fmt::Display for TypeMismatchError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let subject = match self.side {
            MapSide::Source => "Source",
            MapSide::Destination => "Constructed",
        };

        write!(
            f,
            "{subject} object type expected {}, but actual {}",
            self.expected, self.actual
        )
    }
}

impl Error {
    /// Creates a type mismatch error.
    ///
    /// This is a contract violation by the caller, not a data error.
    pub fn type_mismatch(side: MapSide, expected: &'static str, actual: &'static str) -> Error {
        Error::from(super::ErrorKind::TypeMismatch(TypeMismatchError {
            side,
            expected,
            actual,
        }))
    }

    /// Returns `true` if this error is a type mismatch error.
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::TypeMismatch(_))
    }

    /// Returns the side of the mapping call that was mistyped.
    pub fn type_mismatch_side(&self) -> Option<MapSide> {
        match self.kind() {
            super::ErrorKind::TypeMismatch(err) => Some(err.side),
            _ => None,
        }
    }
}
