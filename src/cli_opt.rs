//! CLI options.

use std::{
    ffi::{OsStr, OsString},
    path::{Path, PathBuf},
};

use clap::{Args, Parser};

/// File name used when no output path can be derived from the input.
const FALLBACK_OUT_FILE: &str = "out.gltf";

/// CLI options.
#[derive(Debug, Clone, PartialEq, Parser)]
#[command(name = "fbx2gltf", about = "Converts an FBX file into glTF or GLB")]
pub struct CliArgs {
    /// Input FBX file
    #[arg(value_name = "INPUT_FILE", value_parser = parse_input_file)]
    pub input_file: PathBuf,
    /// The output path to the .gltf or .glb file. Defaults to
    /// `<working-directory>/<FBX-filename-basename>.gltf`
    #[arg(long = "out", value_name = "OUT_FILE")]
    pub out_file: Option<PathBuf>,
    /// The directory to store the embedded media.
    #[arg(long, value_name = "DIR")]
    pub fbm_dir: Option<PathBuf>,
    /// Conversion options.
    #[command(flatten)]
    pub convert_options: ConversionOptions,
}

impl CliArgs {
    /// Returns the output path, derived from the input file if not given.
    pub fn out_file_or_default(&self) -> PathBuf {
        if let Some(out_file) = &self.out_file {
            return out_file.clone();
        }
        match self.input_file.file_stem() {
            Some(stem) => {
                let mut name = OsString::from(stem);
                name.push(".gltf");
                PathBuf::from(name)
            }
            None => PathBuf::from(FALLBACK_OUT_FILE),
        }
    }

    /// Returns the output format.
    pub fn output_format(&self) -> OutputFormat {
        OutputFormat::from_path(&self.out_file_or_default())
    }
}

/// Options passed to the converter.
#[derive(Default, Debug, Clone, PartialEq, Args)]
pub struct ConversionOptions {
    /// Do not flip V texture coordinates.
    #[arg(long)]
    pub no_flip_v: bool,
    /// Animation bake rate (in FPS).
    #[arg(long, value_name = "FPS", value_parser = parse_finite, allow_negative_numbers = true)]
    pub animation_bake_rate: Option<f64>,
    /// The suspected animation duration limit.
    #[arg(long, value_name = "SECONDS", value_parser = parse_finite, allow_negative_numbers = true)]
    pub suspected_animation_duration_limit: Option<f64>,
}

/// Output file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    /// JSON glTF.
    Gltf,
    /// Binary glTF.
    Glb,
}

impl OutputFormat {
    /// Guesses the format from the file extension.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(OsStr::to_str) {
            Some(ext) if ext.eq_ignore_ascii_case("glb") => OutputFormat::Glb,
            _ => OutputFormat::Gltf,
        }
    }
}

/// Parses the input file path.
fn parse_input_file(s: &str) -> Result<PathBuf, String> {
    if s.is_empty() {
        return Err("input file path must not be empty".to_owned());
    }
    Ok(PathBuf::from(s))
}

/// Parses a finite number.
fn parse_finite(s: &str) -> Result<f64, String> {
    let v = s.parse::<f64>().map_err(|e| e.to_string())?;
    if !v.is_finite() {
        return Err(format!("expected a finite number, got `{}`", s));
    }
    Ok(v)
}
