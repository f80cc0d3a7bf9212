mod accessor_target;
mod adhoc;
mod type_conversion;
mod type_map_not_found;
mod type_mismatch;
mod unknown_member;
mod unmapped_members;

use accessor_target::AccessorTargetError;
use adhoc::AdhocError;
use std::sync::Arc;
use type_conversion::TypeConversionError;
use type_map_not_found::TypeMapNotFoundError;
use type_mismatch::TypeMismatchError;
use unknown_member::UnknownMemberError;
use unmapped_members::UnmappedMembersError;

pub use type_mismatch::MapSide;

/// Returns early with an ad-hoc [`Error`] built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::Error::from_args(format_args!($($arg)*)))
    };
}

/// Builds an ad-hoc [`Error`] from a format string.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from_args(format_args!($($arg)*))
    };
}

/// An error raised while configuring a type map or executing a mapping.
///
/// The error is a single pointer wide and cheap to clone. Callers inspect it
/// through the `is_*` predicates rather than matching on a public enum.
#[derive(Clone)]
pub struct Error {
    inner: Option<Arc<ErrorInner>>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Adds context to this error.
    ///
    /// Context is displayed in reverse order: the most recently added context
    /// is shown first, followed by earlier context, ending with the root cause.
    #[inline(always)]
    pub fn context(self, consequent: impl IntoError) -> Error {
        self.context_impl(consequent.into_error())
    }

    #[inline(never)]
    #[cold]
    fn context_impl(self, consequent: Error) -> Error {
        let mut err = consequent;
        let inner = err.inner.get_or_insert_with(|| {
            Arc::new(ErrorInner {
                kind: ErrorKind::Unknown,
                cause: None,
            })
        });

        match Arc::get_mut(inner) {
            Some(inner) if inner.cause.is_none() => {
                inner.cause = Some(self);
                err
            }
            // The consequent is shared or already chained; keep its message
            // and hang this error below it.
            _ => Error {
                inner: Some(Arc::new(ErrorInner {
                    kind: ErrorKind::Adhoc(AdhocError::new(err.to_string())),
                    cause: Some(self),
                })),
            },
        }
    }

    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.inner.as_ref().and_then(|inner| inner.cause.as_ref())?;
            Some(err)
        }))
    }

    fn kind(&self) -> &ErrorKind {
        self.inner
            .as_ref()
            .map(|inner| &inner.kind)
            .unwrap_or(&ErrorKind::Unknown)
    }

    /// Returns `true` if this error reports a validation failure.
    ///
    /// Both configuration errors (unmapped members found by
    /// [`TypeMap::validate`](crate::TypeMap::validate)) and contract
    /// violations (a mapping call with mistyped objects) are validation
    /// errors.
    pub fn is_validation(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::UnmappedMembers(_) | ErrorKind::TypeMismatch(_)
        )
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::Anyhow(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            let Some(ref inner) = self.inner else {
                return f.debug_struct("Error").field("kind", &"None").finish();
            };
            f.debug_struct("Error")
                .field("kind", &inner.kind)
                .field("cause", &inner.cause)
                .finish()
        }
    }
}

#[derive(Debug)]
enum ErrorKind {
    Anyhow(anyhow::Error),
    Adhoc(AdhocError),
    AccessorTarget(AccessorTargetError),
    TypeConversion(TypeConversionError),
    TypeMismatch(TypeMismatchError),
    UnknownMember(UnknownMemberError),
    UnmappedMembers(UnmappedMembersError),
    TypeMapNotFound(TypeMapNotFoundError),
    Unknown,
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            Anyhow(err) => core::fmt::Display::fmt(err, f),
            Adhoc(err) => core::fmt::Display::fmt(err, f),
            AccessorTarget(err) => core::fmt::Display::fmt(err, f),
            TypeConversion(err) => core::fmt::Display::fmt(err, f),
            TypeMismatch(err) => core::fmt::Display::fmt(err, f),
            UnknownMember(err) => core::fmt::Display::fmt(err, f),
            UnmappedMembers(err) => core::fmt::Display::fmt(err, f),
            TypeMapNotFound(err) => core::fmt::Display::fmt(err, f),
            Unknown => f.write_str("unknown remap error"),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Some(Arc::new(ErrorInner { kind, cause: None })),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        Error::from(ErrorKind::Anyhow(err))
    }
}

impl From<core::num::ParseIntError> for Error {
    fn from(err: core::num::ParseIntError) -> Error {
        Error::from(anyhow::Error::from(err))
    }
}

impl From<core::num::ParseFloatError> for Error {
    fn from(err: core::num::ParseFloatError) -> Error {
        Error::from(anyhow::Error::from(err))
    }
}

/// Trait for types that can be converted into an Error.
pub trait IntoError {
    /// Converts this type into an Error.
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Value;

    #[test]
    fn error_size() {
        // Ensure Error stays at one word (size of pointer/Arc)
        let expected_size = core::mem::size_of::<usize>();
        assert_eq!(expected_size, core::mem::size_of::<Error>());
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }

    #[test]
    fn error_from_args() {
        let err = Error::from_args(format_args!("bad member: {}", "name"));
        assert_eq!(err.to_string(), "bad member: name");
    }

    #[test]
    fn error_chain_display() {
        let root = err!("converter failed");
        let top = err!("mapping `User` -> `UserDto`");

        let chained = root.context(top);
        assert_eq!(
            chained.to_string(),
            "mapping `User` -> `UserDto`: converter failed"
        );
    }

    #[test]
    fn context_on_shared_consequent() {
        let consequent = err!("outer");
        let _shared = consequent.clone();

        let chained = err!("inner").context(consequent);
        assert_eq!(chained.to_string(), "outer: inner");
    }

    #[test]
    fn anyhow_bridge() {
        let our_err: Error = anyhow::anyhow!("resolver exploded").into();
        assert_eq!(our_err.to_string(), "resolver exploded");
        assert!(std::error::Error::source(&our_err).is_some());
    }

    #[test]
    fn parse_errors_bridge() {
        let err: Error = "x".parse::<i32>().unwrap_err().into();
        assert!(err.to_string().contains("invalid digit"));
    }

    #[test]
    fn type_conversion_error() {
        let err = Error::type_conversion(Value::String("abc".into()), "i32");
        assert_eq!(err.to_string(), "cannot convert String to i32");
        assert!(err.is_type_conversion());
        assert!(!err.is_validation());
    }

    #[test]
    fn unmapped_members_error() {
        let err = Error::unmapped_members(
            "app::User",
            "app::UserDto",
            vec!["companyName".to_string(), "roleName".to_string()],
        );

        assert!(err.is_validation());
        assert!(err.is_unmapped_members());
        assert_eq!(
            err.unmapped_member_names(),
            Some(&["companyName".to_string(), "roleName".to_string()][..])
        );
        assert_eq!(
            err.to_string(),
            "Unmapped members were found. Add a custom mapping expression, ignore, \
             add a custom resolver, or modify the source/destination type:\n\
             app::User -> app::UserDto\n\
             Destination members: companyName, roleName"
        );
    }

    #[test]
    fn type_mismatch_error() {
        let err = Error::type_mismatch(MapSide::Source, "app::User", "app::Company");
        assert!(err.is_validation());
        assert!(err.is_type_mismatch());
        assert_eq!(
            err.to_string(),
            "Source object type expected app::User, but actual app::Company"
        );

        let err = Error::type_mismatch(MapSide::Destination, "app::UserDto", "i32");
        assert_eq!(
            err.to_string(),
            "Constructed object type expected app::UserDto, but actual i32"
        );
    }

    #[test]
    fn accessor_target_error() {
        let err = Error::accessor_target("app::Company", "app::User");
        assert!(err.is_accessor_target());
        assert!(!err.is_validation());
        assert!(!err.is_type_mismatch());
        assert_eq!(
            err.to_string(),
            "accessor for `app::Company` applied to `app::User`"
        );
    }

    #[test]
    fn unknown_member_error() {
        let err = Error::unknown_member("app::Company", "title");
        assert!(err.is_unknown_member());
        assert_eq!(err.to_string(), "type `app::Company` has no member `title`");
    }

    #[test]
    fn type_map_not_found_error() {
        let err = Error::type_map_not_found("app::User", "app::Company");
        assert!(err.is_type_map_not_found());
        assert_eq!(
            err.to_string(),
            "no type map registered for app::User -> app::Company"
        );
    }
}
