//! Command line argument acquisition.
//!
//! Every source yields the arguments as UTF-8 `String`s, with the invocation
//! path at index 0.

use std::io;

use thiserror::Error;

pub use self::native::NativeArgs;
#[cfg(windows)]
pub use self::windows::WideCommandLine;

mod native;
#[cfg(windows)]
mod windows;

/// Argument source used by the current platform.
#[cfg(windows)]
pub type PlatformArgs = WideCommandLine;

/// Argument source used by the current platform.
#[cfg(not(windows))]
pub type PlatformArgs = NativeArgs;

/// Returns the argument source for the current platform.
pub fn platform() -> PlatformArgs {
    PlatformArgs::default()
}

/// Error while acquiring the command line.
#[derive(Debug, Error)]
pub enum AcquireError {
    /// The platform could not supply the command line.
    #[error("failed to retrieve the command line: {0}")]
    Platform(#[source] io::Error),
    /// An argument is not valid UTF-8.
    #[error("command line argument #{index} is not valid UTF-8: {lossy:?}")]
    NotUnicode {
        /// Position in the argument vector.
        index: usize,
        /// Argument with invalid sequences replaced.
        lossy: String,
    },
}

/// Source of normalized (UTF-8) command line arguments.
pub trait ArgSource {
    /// Acquires the arguments, invocation path first.
    fn acquire(&self) -> Result<Vec<String>, AcquireError>;
}

impl<T: ArgSource + ?Sized> ArgSource for &T {
    fn acquire(&self) -> Result<Vec<String>, AcquireError> {
        (**self).acquire()
    }
}

/// Arguments given by the caller.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct GivenArgs(Vec<String>);

impl GivenArgs {
    /// Creates a new `GivenArgs`.
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(args.into_iter().map(Into::into).collect())
    }
}

impl ArgSource for GivenArgs {
    fn acquire(&self) -> Result<Vec<String>, AcquireError> {
        Ok(self.0.clone())
    }
}
