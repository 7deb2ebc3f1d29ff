/// A catch-all error type.
#[derive(Debug, Copy, Clone)]
pub struct Error(pub &'static str);

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for Error {}

// ----------------------------------------------------------------------------

/// A general `Result` type.
pub type Result<T=()> = std::result::Result<T, Box<dyn std::error::Error>>;

// ----------------------------------------------------------------------------

/// Pixel coordinates, with `(0, 0)` at the top left. The coordinates are
/// listed in the order `(row, column)`, i.e. y-coordinate first.
pub type Grid = (usize, usize);

// ----------------------------------------------------------------------------

pub mod io;

mod raster;
pub use raster::{Raster, Mode, THRESHOLD};

pub mod texture;
pub use texture::{Texture, write_texture};

mod convert;
pub use convert::{Options, convert, img2texture};
