use std::path::{PathBuf};
use clap::{Parser};
use log::{LevelFilter};

use crate::{Mode, Options};

#[derive(Debug, Parser)]
#[command(about = "Convert an image into an OpenSCAD texture array.")]
#[command(version, long_about = None)]
pub struct Args {
    /// Input image path.
    pub image: PathBuf,

    /// The identifier to which the array is assigned.
    #[arg(short, long, default_value = "texture")]
    pub name: String,

    /// `L` for 8-bit grayscale values, `1` for black and white.
    #[arg(long, value_enum, default_value_t = Mode::Binary)]
    pub mode: Mode,

    /// Invert the luminance before quantising.
    #[arg(long)]
    pub invert: bool,

    /// Use Floyd-Steinberg dithering in black and white mode.
    #[arg(long)]
    pub dither: bool,

    /// Log more to stderr. Repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Returns the processing options selected by `self`.
    pub fn options(&self) -> Options {
        Options {mode: self.mode, invert: self.invert, dither: self.dither}
    }

    /// Returns the most verbose level of log message to show.
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

// ----------------------------------------------------------------------------
