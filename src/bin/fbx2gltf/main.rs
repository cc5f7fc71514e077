//! FBX to glTF converter.

use std::{fs, process::ExitCode};

use anyhow::{bail, Context};
use log::{debug, error, info};

use fbx2gltf_cli::{args, read_cli_args, CliArgs};

fn main() -> ExitCode {
    env_logger::init();
    info!("version: {}", env!("CARGO_PKG_VERSION"));

    let cli_args = match read_cli_args(&args::platform()) {
        Some(v) => v,
        None => return ExitCode::FAILURE,
    };

    match run(&cli_args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Checks the input and reports the resolved conversion settings.
fn run(cli_args: &CliArgs) -> anyhow::Result<()> {
    let input = &cli_args.input_file;
    let metadata = fs::metadata(input)
        .with_context(|| format!("failed to access input file {}", input.display()))?;
    if !metadata.is_file() {
        bail!("input path {} is not a file", input.display());
    }
    info!("input: {}", input.display());

    let out_file = cli_args.out_file_or_default();
    info!(
        "output: {} ({:?})",
        out_file.display(),
        cli_args.output_format()
    );
    if let Some(fbm_dir) = &cli_args.fbm_dir {
        info!("embedded media directory: {}", fbm_dir.display());
    }
    debug!("conversion options: {:?}", cli_args.convert_options);

    Ok(())
}
