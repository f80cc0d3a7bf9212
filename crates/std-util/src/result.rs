/// Unwraps an `Ok`, panicking with the expression and the actual value
/// otherwise.
#[macro_export]
macro_rules! assert_ok {
    ($e:expr $(,)?) => {
        match $e {
            Ok(v) => v,
            Err(err) => panic!(
                "expected `Ok` from `{}`; got Err({:?})",
                stringify!($e),
                err
            ),
        }
    };
}

/// Unwraps an `Err`, returning the error. An optional format string is
/// appended to the panic message.
#[macro_export]
macro_rules! assert_err {
    ($e:expr $(, $($t:tt)* )?) => {
        match $e {
            Err(err) => err,
            Ok(v) => {
                #[allow(unused_mut)]
                let mut msg = format!(
                    "expected `Err` from `{}`; got Ok({:?})",
                    stringify!($e),
                    v
                );

                $(
                    msg.push_str("; ");
                    msg.push_str(&format!($($t)*));
                )?

                panic!("{}", msg);
            }
        }
    };
}
