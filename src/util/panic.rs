/// Asserts that a block panics. With `message = ...`, also asserts that the panic payload is
/// exactly that message.
#[allow(unused_macros)]
macro_rules! assert_panics {
    ($run:block) => {
        assert_panics!($run, "assertion failed to panic")
    };
    ($run:block, message = $expected:expr) => {
        let payload = std::panic::catch_unwind(|| $run).expect_err("assertion failed to panic");
        let message = payload.downcast_ref::<String>()
            .map(String::as_str)
            .or_else(|| payload.downcast_ref::<&str>().copied())
            .unwrap_or_default();
        assert_eq!(message, $expected, "panicked with the wrong message");
        println!("^ panic caught");
    };
    ($run:block, $msg:literal) => {
        assert!(std::panic::catch_unwind(|| $run).is_err(), $msg);
        println!("^ panic caught");
    };
}

#[allow(unused_imports)]
pub(crate) use assert_panics;
