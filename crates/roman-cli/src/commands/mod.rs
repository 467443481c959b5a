/// Unwrap `$result`, or print the error and return `ExitCode::FAILURE` from
/// the enclosing command. Commands never call `process::exit`, so `main`
/// still gets to drop the trace guard and flush logs.
macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        match $result {
            Ok(v) => v,
            Err(e) => {
                eprintln!($($arg)*, e);
                return std::process::ExitCode::FAILURE;
            }
        }
    };
}

pub mod batch_ops;
pub mod config_ops;
pub mod convert_ops;
pub mod verify_ops;
