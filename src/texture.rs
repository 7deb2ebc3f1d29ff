//! Formatting a [`Raster`] as an OpenSCAD array assignment:
//!
//! ```text
//! texture =
//! [[0,1],
//! [1,1]];
//! ```
//!
//! Every value is written out, however large the matrix is.

use std::fmt;
use std::io::{Write};

use super::{Raster};

/// An assignment of `raster` to the identifier `name`.
///
/// `name` is written verbatim; nothing is escaped.
#[derive(Clone, Copy)]
pub struct Texture<'a> {
    pub name: &'a str,
    pub raster: &'a Raster,
}

impl<'a> Texture<'a> {
    pub fn new(name: &'a str, raster: &'a Raster) -> Self {
        Self {name, raster}
    }
}

impl fmt::Display for Texture<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{} =", self.name)?;
        f.write_str("[")?;
        for y in 0..self.raster.height() {
            if y > 0 { f.write_str(",\n")?; }
            f.write_str("[")?;
            for (x, v) in self.raster.row(y).enumerate() {
                if x > 0 { f.write_str(",")?; }
                write!(f, "{}", v)?;
            }
            f.write_str("]")?;
        }
        f.write_str("];\n")
    }
}

/// Writes `raster` to `out` as an assignment to `name`, then flushes `out`.
pub fn write_texture(out: &mut impl Write, name: &str, raster: &Raster) -> std::io::Result<()> {
    write!(out, "{}", Texture::new(name, raster))?;
    out.flush()
}

// ----------------------------------------------------------------------------
