pub mod accessor;

pub mod convert;

pub mod creator;
pub use creator::{DefaultCreator, ObjectCreator};

mod error;
pub use error::{Error, IntoError, MapSide};

mod map_func;
pub use map_func::MapFunc;

pub mod naming;

pub mod object;
pub use object::{Object, TypeRef};

mod property_map;
pub use property_map::PropertyMap;

pub mod shape;
pub use shape::{Reflect, Shape};

mod type_map;
pub use type_map::{MapHook, TypeMap};

mod value;
pub use value::{FromValue, Value};

/// A Result type alias that uses remap's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
