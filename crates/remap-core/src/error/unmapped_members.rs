use super::Error;

/// Error when a type map still has destination members without a source.
///
/// Raised at configuration time; the message is meant for the developer
/// assembling the type map.
#[derive(Debug)]
pub(super) struct UnmappedMembersError {
    source_type: &'static str,
    destination_type: &'static str,
    members: Vec<String>,
}

impl std::error::Error for UnmappedMembersError {}

impl core::fmt::Display for UnmappedMembersError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "Unmapped members were found. Add a custom mapping expression, ignore, \
             add a custom resolver, or modify the source/destination type:\n\
             {} -> {}\n\
             Destination members: {}",
            self.source_type,
            self.destination_type,
            self.members.join(", ")
        )
    }
}

impl Error {
    /// Creates an unmapped members error.
    pub fn unmapped_members(
        source_type: &'static str,
        destination_type: &'static str,
        members: Vec<String>,
    ) -> Error {
        Error::from(super::ErrorKind::UnmappedMembers(UnmappedMembersError {
            source_type,
            destination_type,
            members,
        }))
    }

    /// Returns `true` if this error is an unmapped members error.
    pub fn is_unmapped_members(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnmappedMembers(_))
    }

    /// Returns the names of the destination members that have no source.
    pub fn unmapped_member_names(&self) -> Option<&[String]> {
        match self.kind() {
            super::ErrorKind::UnmappedMembers(err) => Some(&err.members),
            _ => None,
        }
    }
}
