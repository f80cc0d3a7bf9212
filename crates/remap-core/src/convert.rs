//! Per-member value conversion.

use crate::{FromValue, Result, Value};

/// Transforms a source value before it is written to the destination.
pub trait ValueConverter: Send + Sync {
    fn convert(&self, value: Value) -> Result<Value>;
}

impl<F> ValueConverter for F
where
    F: Fn(Value) -> Result<Value> + Send + Sync,
{
    fn convert(&self, value: Value) -> Result<Value> {
        self(value)
    }
}

/// Wraps a typed closure as a [`ValueConverter`].
///
/// The input is converted to `A` with [`FromValue`]; `Null` bypasses the
/// closure so that the member's null substitute still applies.
pub fn typed<A, B, F>(f: F) -> impl ValueConverter
where
    A: FromValue,
    B: Into<Value>,
    F: Fn(A) -> B + Send + Sync,
{
    move |value: Value| -> Result<Value> {
        if value.is_null() {
            return Ok(value);
        }
        Ok(f(A::from_value(value)?).into())
    }
}

/// Like [`typed`], for closures that can fail.
pub fn try_typed<A, B, F>(f: F) -> impl ValueConverter
where
    A: FromValue,
    B: Into<Value>,
    F: Fn(A) -> Result<B> + Send + Sync,
{
    move |value: Value| -> Result<Value> {
        if value.is_null() {
            return Ok(value);
        }
        Ok(f(A::from_value(value)?)?.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std_util::prelude::*;

    #[test]
    fn typed_converter_skips_null() {
        let upper = typed(|name: String| name.to_uppercase());

        assert_eq!(
            assert_ok!(upper.convert(Value::from("acme"))),
            Value::from("ACME")
        );
        assert_eq!(assert_ok!(upper.convert(Value::Null)), Value::Null);
    }

    #[test]
    fn typed_converter_reports_bad_input() {
        let double = typed(|n: i64| n * 2);

        let err = assert_err!(double.convert(Value::from(true)));
        assert!(err.is_type_conversion());
    }

    #[test]
    fn try_typed_propagates_closure_error() {
        let positive = try_typed(|n: i32| {
            if n < 0 {
                crate::bail!("negative: {n}");
            }
            Ok(n)
        });

        assert_eq!(assert_ok!(positive.convert(Value::I32(4))), Value::I32(4));
        assert_eq!(
            assert_err!(positive.convert(Value::I32(-1))).to_string(),
            "negative: -1"
        );
    }
}
