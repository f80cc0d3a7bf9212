mod error;
pub(crate) use error::ErrorSet;

mod member;
pub(crate) use member::{Member, MemberKind};

mod name;
pub(crate) use name::Name;

mod reflect;
pub(crate) use reflect::Reflect;

mod reflect_attr;
pub(crate) use reflect_attr::ReflectAttr;

mod ty;
