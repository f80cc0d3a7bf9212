mod config;
pub use config::Config;

pub mod mapper;
pub use mapper::Mapper;

pub use remap_core::{
    accessor, convert, creator, err, bail, naming, object, shape, DefaultCreator, Error,
    FromValue, IntoError, MapFunc, MapHook, MapSide, Object, ObjectCreator, PropertyMap,
    Reflect, Result, Shape, TypeMap, TypeRef, Value,
};

pub use remap_macros::Reflect;

#[doc(hidden)]
pub mod codegen_support {
    pub use remap_core::{Reflect, Shape};
}
