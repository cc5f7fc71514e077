//! Command line reacquired through the Win32 API.
//!
//! The runtime's `argv` is encoded with the console code page, which cannot
//! represent every path. The command line is read again as UTF-16 and split
//! with `CommandLineToArgvW`. That split may differ from the runtime's own in
//! edge cases; it is used as-is.

use std::{convert::TryFrom, io, ptr::NonNull, slice};

use log::debug;
use windows_sys::Win32::{
    Foundation::LocalFree, System::Environment::GetCommandLineW, UI::Shell::CommandLineToArgvW,
};

use super::{AcquireError, ArgSource};

/// Arguments split from the UTF-16 process command line.
#[derive(Default, Debug, Clone, Copy)]
pub struct WideCommandLine;

impl ArgSource for WideCommandLine {
    fn acquire(&self) -> Result<Vec<String>, AcquireError> {
        let argv = LocalArgv::from_process().map_err(AcquireError::Platform)?;
        let args = argv.iter().map(from_wide).collect::<Vec<_>>();
        debug!("acquired {} arguments from the wide command line", args.len());

        Ok(args)
    }
}

/// Converts a UTF-16 argument into UTF-8.
///
/// Unpaired surrogates become U+FFFD, as `WideCharToMultiByte` does.
fn from_wide(arg: &[u16]) -> String {
    String::from_utf16_lossy(arg)
}

/// Argument array allocated by `CommandLineToArgvW`.
///
/// The array is freed with `LocalFree` on drop.
struct LocalArgv {
    /// Array of NUL-terminated wide strings.
    ptr: NonNull<*mut u16>,
    /// Number of strings.
    len: usize,
}

impl LocalArgv {
    /// Splits the command line of the current process.
    fn from_process() -> io::Result<Self> {
        let mut count: i32 = 0;
        // SAFETY: `GetCommandLineW` returns a NUL-terminated string that lives
        // as long as the process.
        let ptr = unsafe { CommandLineToArgvW(GetCommandLineW(), &mut count) };
        let ptr = NonNull::new(ptr).ok_or_else(io::Error::last_os_error)?;

        Ok(Self {
            ptr,
            len: usize::try_from(count).unwrap_or(0),
        })
    }

    /// Returns an iterator of the arguments, without terminating NULs.
    fn iter(&self) -> impl Iterator<Item = &[u16]> + '_ {
        // SAFETY: `CommandLineToArgvW` returned `len` valid pointers.
        let args = unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len) };
        args.iter().map(|&arg| {
            // SAFETY: each argument is NUL-terminated and lives as long as
            // the array.
            unsafe {
                let mut len = 0;
                while *arg.add(len) != 0 {
                    len += 1;
                }
                slice::from_raw_parts(arg, len)
            }
        })
    }
}

impl Drop for LocalArgv {
    fn drop(&mut self) {
        // SAFETY: the array was allocated by `CommandLineToArgvW` and is
        // freed only here.
        unsafe {
            LocalFree(self.ptr.as_ptr().cast());
        }
    }
}
