#[macro_export]
macro_rules! assert_none {
    ($e:expr $(,)?) => {
        match &$e {
            None => {}
            Some(v) => panic!("expected `None` from `{}`; got Some({:?})", stringify!($e), v),
        }
    };
}

#[macro_export]
macro_rules! assert_some {
    ($e:expr $(,)?) => {
        match $e {
            Some(v) => v,
            None => panic!("expected `Some` from `{}`; got None", stringify!($e)),
        }
    };
}
