//! Return the absolute path to the current executable, without trusting
//! arg0 or the current working directory.
//!
//! This supports GNU/Linux, MacOS, and Windows. Other platforms are not
//! supported and fail with [Error::ResolutionFailure] on every call.

mod error;
mod exe;

pub use error::{
        Error,
        Result,
    };
pub use exe::get_executable_path;
