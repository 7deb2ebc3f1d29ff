use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageBuffer, ImageError, Primitive};
use log::{debug};

use super::{Error, Raster};

pub mod cli;

// ----------------------------------------------------------------------------

/// ITU-R BT.601 luma weights for red, green and blue.
pub const BT601: [f32; 3] = [0.299, 0.587, 0.114];

/// An image file that could not be opened or decoded.
#[derive(Debug)]
pub struct LoadError {
    pub path: PathBuf,
    pub source: ImageError,
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "cannot load image {}: {}", self.path.display(), self.source)
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

// ----------------------------------------------------------------------------

fn to_unit<T: Primitive>(x: T) -> f32 {
    let x = x.to_f32().unwrap_or(0.0);
    let max = T::DEFAULT_MAX_VALUE.to_f32().unwrap_or(1.0);
    (x / max).clamp(0.0, 1.0)
}

/// The part of `load_image()` which is generic in the pixel format.
///
/// Colour channels are weighted by [`BT601`]; alpha is discarded.
fn to_raster<P: image::Pixel>(img: ImageBuffer<P, Vec<P::Subpixel>>) -> Raster {
    let (height, width) = (img.height() as usize, img.width() as usize);
    let luma: Vec<u8> = img.pixels().map(|p| {
        let c = p.channels();
        let y = match P::CHANNEL_COUNT {
            1 | 2 => to_unit(c[0]),
            _ => BT601.iter().zip(c).map(|(&w, &x)| w * to_unit(x)).sum::<f32>(),
        };
        (y.clamp(0.0, 1.0) * 255.0).round() as u8
    }).collect();
    Raster::new(height, width, luma)
}

fn decode(path: &Path) -> image::ImageResult<DynamicImage> {
    image::io::Reader::open(path)?.with_guessed_format()?.decode()
}

/// Load the specified file and convert it to luminance.
///
/// The file is closed before this returns, whether or not it decoded.
pub fn load_image(path: impl AsRef<Path>) -> crate::Result<Raster> {
    let path = path.as_ref();
    let img = decode(path).map_err(|source| LoadError {path: path.to_owned(), source})?;
    debug!("Decoded {} ({}x{}, {:?})", path.display(), img.width(), img.height(), img.color());
    Ok(match img {
        DynamicImage::ImageLuma8(img) => to_raster(img),
        DynamicImage::ImageLumaA8(img) => to_raster(img),
        DynamicImage::ImageRgb8(img) => to_raster(img),
        DynamicImage::ImageRgba8(img) => to_raster(img),
        DynamicImage::ImageLuma16(img) => to_raster(img),
        DynamicImage::ImageLumaA16(img) => to_raster(img),
        DynamicImage::ImageRgb16(img) => to_raster(img),
        DynamicImage::ImageRgba16(img) => to_raster(img),
        DynamicImage::ImageRgb32F(img) => to_raster(img),
        DynamicImage::ImageRgba32F(img) => to_raster(img),
        _ => Err(Error("Unsupported pixel format"))?,
    })
}

// ----------------------------------------------------------------------------

/// Save `raster` to the specified file as an 8-bit grayscale image.
#[cfg(test)]
pub(crate) fn save_image(raster: &Raster, path: impl AsRef<Path>) -> crate::Result<()> {
    let (height, width) = raster.size();
    let data: Vec<u8> = raster.to_matrix().into_iter().flatten().collect();
    let img = image::GrayImage::from_raw(width as u32, height as u32, data)
        .ok_or(Error("Raster does not fit in an image"))?;
    Ok(img.save(path)?)
}

// ----------------------------------------------------------------------------
