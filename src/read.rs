//! Reading CLI options from the process.

use std::{io, path::Path};

use clap::{CommandFactory, Parser};
use log::debug;
use thiserror::Error;

use crate::{
    args::{AcquireError, ArgSource},
    CliArgs,
};

/// Error while reading CLI options.
#[derive(Debug, Error)]
pub enum ReadError {
    /// The arguments could not be acquired.
    #[error(transparent)]
    Acquire(#[from] AcquireError),
    /// No arguments at all, not even the invocation path.
    #[error("empty command line")]
    EmptyInput,
    /// The arguments did not match the options.
    #[error("invalid command line arguments")]
    Parse {
        /// Invocation path, the first argument.
        invocation: String,
        /// Cause.
        #[source]
        source: clap::Error,
    },
}

/// Parses normalized arguments.
///
/// The first argument is the invocation path and is not matched.
pub fn parse_args(args: &[String]) -> Result<CliArgs, ReadError> {
    let invocation = args.first().ok_or(ReadError::EmptyInput)?;
    CliArgs::try_parse_from(args).map_err(|source| ReadError::Parse {
        invocation: invocation.clone(),
        source,
    })
}

/// Renders the usage text.
///
/// The file name of `invocation` is shown as the program name, if any.
pub fn usage(invocation: &str) -> String {
    let mut command = CliArgs::command();
    if let Some(name) = Path::new(invocation).file_name() {
        command = command.bin_name(name.to_string_lossy().into_owned());
    }
    command.render_help().to_string()
}

/// Acquires and parses the arguments.
pub fn try_read_cli_args(source: &impl ArgSource) -> Result<CliArgs, ReadError> {
    let args = source.acquire()?;
    parse_args(&args)
}

/// Reads CLI options, printing the usage to stdout on failure.
///
/// Acquisition failures are reported to stderr.
pub fn read_cli_args(source: &impl ArgSource) -> Option<CliArgs> {
    let stdout = io::stdout();
    let stderr = io::stderr();
    read_cli_args_to(source, &mut stdout.lock(), &mut stderr.lock())
}

/// Reads CLI options, writing the usage to `out` on failure.
///
/// If the arguments cannot be acquired, a single diagnostic line is written
/// to `err` instead.
pub fn read_cli_args_to(
    source: &impl ArgSource,
    out: &mut impl io::Write,
    err: &mut impl io::Write,
) -> Option<CliArgs> {
    let e = match try_read_cli_args(source) {
        Ok(v) => return Some(v),
        Err(e) => e,
    };

    let written = match &e {
        ReadError::Acquire(cause) => writeln!(err, "{}", cause),
        ReadError::EmptyInput => {
            debug!("{}", e);
            out.write_all(usage("").as_bytes())
        }
        ReadError::Parse { invocation, source: cause } => {
            debug!("{}: {}", e, cause.render());
            out.write_all(usage(invocation).as_bytes())
        }
    };
    if let Err(e) = written {
        debug!("failed to write the diagnostic: {}", e);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::args::GivenArgs;

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|&s| s.to_owned()).collect()
    }

    /// Source that always fails.
    struct Broken;

    impl ArgSource for Broken {
        fn acquire(&self) -> Result<Vec<String>, AcquireError> {
            Err(AcquireError::Platform(io::Error::new(
                io::ErrorKind::Other,
                "no command line",
            )))
        }
    }

    #[test]
    fn empty_input() {
        assert!(matches!(parse_args(&[]), Err(ReadError::EmptyInput)));
    }

    #[test]
    fn parse_failures() {
        for args in &[
            &["prog"][..],
            &["prog", "--out"][..],
            &["prog", "--unknown", "a.fbx"][..],
            &["prog", "a.fbx", "--help"][..],
        ] {
            match parse_args(&strings(args)) {
                Err(ReadError::Parse { .. }) => {}
                v => panic!("unexpected result for {:?}: {:?}", args, v),
            }
        }
    }

    #[test]
    fn invocation_is_not_matched() {
        let args = parse_args(&strings(&["input.fbx", "model.fbx"])).unwrap();
        assert_eq!(args.input_file, Path::new("model.fbx"));
    }

    #[test]
    fn usage_lists_options() {
        let text = usage("/usr/local/bin/fbx2gltf-custom");
        assert!(text.contains("fbx2gltf-custom"));
        assert!(!text.contains("/usr/local/bin"));
        for opt in &[
            "--out",
            "--fbm-dir",
            "--no-flip-v",
            "--animation-bake-rate",
            "--suspected-animation-duration-limit",
            "Do not flip V texture coordinates.",
        ] {
            assert!(text.contains(opt), "{:?} missing from usage", opt);
        }
    }

    #[test]
    fn usage_without_invocation() {
        assert!(usage("").contains("--out"));
    }

    #[test]
    fn parse_failure_keeps_invocation() {
        match parse_args(&strings(&["bin/fbx2gltf", "--no-flip-v"])) {
            Err(ReadError::Parse { invocation, .. }) => assert_eq!(invocation, "bin/fbx2gltf"),
            v => panic!("unexpected result: {:?}", v),
        }
    }

    #[test]
    fn try_read_reports_each_failure() {
        assert!(matches!(
            try_read_cli_args(&Broken),
            Err(ReadError::Acquire(AcquireError::Platform(_)))
        ));
        assert!(matches!(
            try_read_cli_args(&GivenArgs::default()),
            Err(ReadError::EmptyInput)
        ));
        assert!(matches!(
            try_read_cli_args(&GivenArgs::new(vec!["prog", "--out"])),
            Err(ReadError::Parse { .. })
        ));
        let args = try_read_cli_args(&GivenArgs::new(vec!["prog", "m.fbx"])).unwrap();
        assert_eq!(args.input_file, Path::new("m.fbx"));
    }

    #[test]
    fn failure_writes_usage() {
        let (mut out, mut err) = (Vec::<u8>::new(), Vec::<u8>::new());
        let source = GivenArgs::new(vec!["prog", "--out"]);
        assert_eq!(read_cli_args_to(&source, &mut out, &mut err), None);
        assert!(String::from_utf8(out).unwrap().contains("Usage: prog"));
        assert!(err.is_empty());
    }

    #[test]
    fn empty_input_writes_usage() {
        let (mut out, mut err) = (Vec::<u8>::new(), Vec::<u8>::new());
        assert_eq!(read_cli_args_to(&GivenArgs::default(), &mut out, &mut err), None);
        assert!(String::from_utf8(out).unwrap().contains("Usage: fbx2gltf"));
        assert!(err.is_empty());
    }

    #[test]
    fn success_writes_nothing() {
        let (mut out, mut err) = (Vec::<u8>::new(), Vec::<u8>::new());
        let source = GivenArgs::new(vec!["prog", "model.fbx"]);
        assert!(read_cli_args_to(&source, &mut out, &mut err).is_some());
        assert!(out.is_empty());
        assert!(err.is_empty());
    }

    #[test]
    fn acquisition_failure_writes_one_line() {
        let (mut out, mut err) = (Vec::<u8>::new(), Vec::<u8>::new());
        assert_eq!(read_cli_args_to(&Broken, &mut out, &mut err), None);
        assert!(out.is_empty());
        let err = String::from_utf8(err).unwrap();
        assert_eq!(err, "failed to retrieve the command line: no command line\n");
        assert_eq!(err.lines().count(), 1);
    }
}
