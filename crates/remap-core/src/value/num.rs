use super::{FromValue, Value};
use crate::{err, Error, Result};

impl Value {
    /// Widens any integer variant so cross-width conversions can be range
    /// checked in one place.
    fn as_i128(&self) -> Option<i128> {
        match *self {
            Self::I8(v) => Some(v.into()),
            Self::I16(v) => Some(v.into()),
            Self::I32(v) => Some(v.into()),
            Self::I64(v) => Some(v.into()),
            Self::U8(v) => Some(v.into()),
            Self::U16(v) => Some(v.into()),
            Self::U32(v) => Some(v.into()),
            Self::U64(v) => Some(v.into()),
            _ => None,
        }
    }
}

macro_rules! impl_int {
    (
        $(
            $variant:ident($ty:ty) {
                $is:ident
            } )*
    ) => {
        impl Value {
            $(
                pub fn $is(&self) -> bool {
                    matches!(self, Self::$variant(_))
                }
            )*
        }

        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }

            impl From<&$ty> for Value {
                fn from(value: &$ty) -> Self {
                    Self::$variant(*value)
                }
            }

            impl FromValue for $ty {
                fn from_value(value: Value) -> Result<Self> {
                    if let Some(int) = value.as_i128() {
                        return <$ty>::try_from(int).map_err(|_| {
                            err!("value {} is out of range for {}", int, stringify!($ty))
                        });
                    }

                    match value {
                        Value::String(s) => s.trim().parse::<$ty>().map_err(|_| {
                            err!("cannot parse '{}' as {}", s, stringify!($ty))
                        }),
                        _ => Err(Error::type_conversion(value, stringify!($ty))),
                    }
                }
            }
        )*
    };
}

impl_int! {
    I8(i8) {
        is_i8
    }
    I16(i16) {
        is_i16
    }
    I32(i32) {
        is_i32
    }
    I64(i64) {
        is_i64
    }
    U8(u8) {
        is_u8
    }
    U16(u16) {
        is_u16
    }
    U32(u32) {
        is_u32
    }
    U64(u64) {
        is_u64
    }
}

macro_rules! impl_float {
    ( $( $variant:ident($ty:ty) )* ) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }

            impl From<&$ty> for Value {
                fn from(value: &$ty) -> Self {
                    Self::$variant(*value)
                }
            }

            impl FromValue for $ty {
                fn from_value(value: Value) -> Result<Self> {
                    if let Some(int) = value.as_i128() {
                        let float = int as $ty;
                        if float as i128 != int {
                            return Err(err!(
                                "value {} is not exactly representable as {}",
                                int,
                                stringify!($ty)
                            ));
                        }
                        return Ok(float);
                    }

                    let (float, finite) = match value {
                        Value::F32(v) => (v as $ty, v.is_finite()),
                        Value::F64(v) => (v as $ty, v.is_finite()),
                        Value::String(s) => {
                            let s = s.trim();
                            let float = s.parse::<$ty>().map_err(|_| {
                                err!("cannot parse '{}' as {}", s, stringify!($ty))
                            })?;
                            (float, !s.to_ascii_lowercase().contains("inf"))
                        }
                        _ => return Err(Error::type_conversion(value, stringify!($ty))),
                    };

                    // A finite input must stay finite.
                    if finite && float.is_infinite() {
                        return Err(err!("value is out of range for {}", stringify!($ty)));
                    }

                    Ok(float)
                }
            }
        )*
    };
}

impl_float! {
    F32(f32)
    F64(f64)
}
