use super::Error;

/// Error when no type map is registered for a requested type pair.
#[derive(Debug)]
pub(super) struct TypeMapNotFoundError {
    source_type: &'static str,
    destination_type: &'static str,
}

impl std::error::Error for TypeMapNotFoundError {}

impl core::fmt::Display for TypeMapNotFoundError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "no type map registered for {} -> {}",
            self.source_type, self.destination_type
        )
    }
}

impl Error {
    /// Creates a type map not found error.
    pub fn type_map_not_found(source_type: &'static str, destination_type: &'static str) -> Error {
        Error::from(super::ErrorKind::TypeMapNotFound(TypeMapNotFoundError {
            source_type,
            destination_type,
        }))
    }

    /// Returns `true` if this error is a type map not found error.
    pub fn is_type_map_not_found(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::TypeMapNotFound(_))
    }
}
