//! Command line front end for FBX to glTF conversion.
//!
//! Arguments are acquired as UTF-8 from an [`args::ArgSource`] and parsed
//! into [`CliArgs`].
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

pub use self::{
    cli_opt::{CliArgs, ConversionOptions, OutputFormat},
    read::{
        parse_args, read_cli_args, read_cli_args_to, try_read_cli_args, usage, ReadError,
    },
};

pub mod args;
mod cli_opt;
mod read;
