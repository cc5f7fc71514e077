//! Arguments as supplied by the runtime.

use std::ffi::OsString;

use log::debug;

use super::{AcquireError, ArgSource};

/// Arguments from `std::env::args_os`, trusted to be UTF-8.
#[derive(Default, Debug, Clone, Copy)]
pub struct NativeArgs;

impl ArgSource for NativeArgs {
    fn acquire(&self) -> Result<Vec<String>, AcquireError> {
        from_os_args(std::env::args_os())
    }
}

/// Copies the arguments without conversion.
pub(crate) fn from_os_args<I>(args: I) -> Result<Vec<String>, AcquireError>
where
    I: IntoIterator<Item = OsString>,
{
    let args = args
        .into_iter()
        .enumerate()
        .map(|(index, arg)| {
            arg.into_string().map_err(|arg| AcquireError::NotUnicode {
                index,
                lossy: arg.to_string_lossy().into_owned(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    debug!("acquired {} native arguments", args.len());

    Ok(args)
}
