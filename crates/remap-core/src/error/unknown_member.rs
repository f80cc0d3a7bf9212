use super::Error;

/// Error when configuration names a member a type does not expose, or a
/// member that cannot be used the way the configuration asks.
#[derive(Debug)]
pub(super) struct UnknownMemberError {
    ty: &'static str,
    member: Box<str>,
}

impl std::error::Error for UnknownMemberError {}

impl core::fmt::Display for UnknownMemberError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "type `{}` has no member `{}`", self.ty, self.member)
    }
}

impl Error {
    /// Creates an unknown member error.
    pub fn unknown_member(ty: &'static str, member: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnknownMember(UnknownMemberError {
            ty,
            member: member.into().into(),
        }))
    }

    /// Returns `true` if this error is an unknown member error.
    pub fn is_unknown_member(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnknownMember(_))
    }
}
