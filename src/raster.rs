use multidimension::{View, Array};

use super::{Grid};

/// Luminance values at or above this become `1` in [`Mode::Binary`].
pub const THRESHOLD: u8 = 128;

// ----------------------------------------------------------------------------

/// Selects the range of the values in the output matrix.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Mode {
    /// Eight-bit grayscale. Every value is in `0..=255`.
    #[value(name = "L")]
    Grayscale,

    /// Black and white. Every value is `0` or `1`.
    #[default]
    #[value(name = "1")]
    Binary,
}

/// A rectangular grid of 8-bit values, indexed by `(row, column)`.
///
/// Before quantisation the values are luminances in `0..=255`; afterwards they
/// are whatever the chosen [`Mode`] produces.
#[derive(Clone)]
pub struct Raster(pub Array<Grid, u8>);

impl Raster {
    /// Wraps `data`, which must contain `height * width` values in row-major
    /// order.
    pub fn new(height: usize, width: usize, data: Vec<u8>) -> Self {
        Raster(Array::new((height, width), data))
    }

    /// Returns `(height, width)`.
    pub fn size(&self) -> Grid { self.0.size() }

    pub fn height(&self) -> usize { self.size().0 }

    pub fn width(&self) -> usize { self.size().1 }

    /// The values of row `y`, left to right.
    pub fn row(&self, y: usize) -> impl '_ + Iterator<Item=u8> {
        (0..self.width()).map(move |x| self.0[(y, x)])
    }

    /// Copies the values into one `Vec` per row, top to bottom.
    pub fn to_matrix(&self) -> Vec<Vec<u8>> {
        (0..self.height()).map(|y| self.row(y).collect()).collect()
    }

    /// Replaces every value `v` with `255 - v`.
    pub fn invert(&self) -> Self {
        Raster((&self.0).map(|v| u8::MAX - v).collect())
    }

    /// Replaces every value with `1` if it is at least [`THRESHOLD`], else
    /// `0`.
    pub fn threshold(&self) -> Self {
        Raster((&self.0).map(|v| u8::from(v >= THRESHOLD)).collect())
    }

    /// Like `threshold()`, but diffuses the error of each pixel onto its
    /// unvisited neighbours (Floyd-Steinberg). Rows are scanned top to bottom,
    /// each left to right.
    pub fn dither(&self) -> Self {
        let (height, width) = self.size();
        let mut work: Vec<i32> = Vec::with_capacity(height * width);
        for y in 0..height {
            work.extend(self.row(y).map(i32::from));
        }
        let mut out = vec![0u8; height * width];
        for y in 0..height {
            for x in 0..width {
                let i = y * width + x;
                let old = work[i].clamp(0, 255);
                let bit = old >= i32::from(THRESHOLD);
                out[i] = u8::from(bit);
                let error = old - if bit { 255 } else { 0 };
                let mut spread = |j: usize, weight: i32| { work[j] += error * weight / 16; };
                if x + 1 < width { spread(i + 1, 7); }
                if y + 1 < height {
                    if x > 0 { spread(i + width - 1, 3); }
                    spread(i + width, 5);
                    if x + 1 < width { spread(i + width + 1, 1); }
                }
            }
        }
        Raster::new(height, width, out)
    }

    /// Reduces luminances to the range of `mode`. `dither` selects
    /// `dither()` over `threshold()`, and is ignored for
    /// [`Mode::Grayscale`].
    pub fn quantize(&self, mode: Mode, dither: bool) -> Self {
        match mode {
            Mode::Grayscale => self.clone(),
            Mode::Binary if dither => self.dither(),
            Mode::Binary => self.threshold(),
        }
    }
}

// ----------------------------------------------------------------------------
