use std::io::{BufWriter};
use std::path::{Path};
use log::{debug, warn};

use super::{Mode, Raster, Result, write_texture};
use super::io::{load_image};

/// How to turn luminance into matrix values.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Options {
    pub mode: Mode,

    /// Replace each luminance `v` with `255 - v` before quantising.
    pub invert: bool,

    /// Dither rather than threshold. Only affects [`Mode::Binary`].
    pub dither: bool,
}

/// Loads the image at `path` and returns its quantised luminance.
pub fn convert(path: impl AsRef<Path>, options: Options) -> Result<Raster> {
    let mut raster = load_image(path)?;
    if options.invert { raster = raster.invert(); }
    if options.dither && options.mode == Mode::Grayscale {
        warn!("Dithering has no effect in grayscale mode");
    }
    debug!("Quantising {}x{} pixels with {:?}", raster.width(), raster.height(), options);
    Ok(raster.quantize(options.mode, options.dither))
}

/// Converts the image at `path` and prints it to stdout as an assignment to
/// `name`.
///
/// Nothing is printed unless the image decodes.
pub fn img2texture(path: impl AsRef<Path>, name: &str, options: Options) -> Result {
    let raster = convert(path, options)?;
    let stdout = std::io::stdout();
    write_texture(&mut BufWriter::new(stdout.lock()), name, &raster)?;
    Ok(())
}

// ----------------------------------------------------------------------------
