//! Command-line surface for the converter.

use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "blpconv")]
#[command(about = "Convert BLP texture files to standard image formats", long_about = None)]
#[command(version)]
pub struct Cli {
    /// BLP files to convert
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Print information about the BLP file(s) instead of converting
    #[arg(short, long)]
    pub info: bool,

    /// Directory the converted image(s) are written to
    #[arg(short = 'o', long, default_value = ".")]
    pub dest: PathBuf,

    /// Output image format
    #[arg(short, long, value_enum, default_value = "png")]
    pub format: OutputFormat,

    /// Mip level to convert; levels past the last stored one clamp to it
    #[arg(short, long, default_value_t = 0)]
    pub mip_level: usize,

    /// Verbosity level (can be repeated for more detail)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Png,
    Tga,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Tga => "tga",
        }
    }
}

impl From<OutputFormat> for image::ImageFormat {
    fn from(value: OutputFormat) -> Self {
        match value {
            OutputFormat::Png => image::ImageFormat::Png,
            OutputFormat::Tga => image::ImageFormat::Tga,
        }
    }
}
