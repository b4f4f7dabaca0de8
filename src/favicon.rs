// src/favicon.rs
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::ico::{IcoEncoder, IcoFrame};
use image::imageops::{self, FilterType};
use image::{ExtendedColorType, Rgba, RgbaImage};
use tracing::info;

use crate::config::consts::OPAQUE_THRESHOLD;
use crate::error::Result;
use crate::file::ensure_parent;

/// Near-white, (nearly) opaque pixels become fully transparent white.
/// Returns how many pixels were cleared.
pub fn remove_white_background(img: &mut RgbaImage, threshold: u8) -> usize {
    let mut cleared = 0;
    for px in img.pixels_mut() {
        let Rgba([r, g, b, a]) = *px;
        if r > threshold && g > threshold && b > threshold && a > OPAQUE_THRESHOLD {
            *px = Rgba([255, 255, 255, 0]);
            cleared += 1;
        }
    }
    cleared
}

/// One PNG-compressed frame per size, each a square resize of `img`.
pub fn write_ico(img: &RgbaImage, path: &Path, sizes: &[u32]) -> Result<()> {
    let mut frames = Vec::with_capacity(sizes.len());
    for &size in sizes {
        let scaled = imageops::resize(img, size, size, FilterType::Lanczos3);
        frames.push(IcoFrame::as_png(scaled.as_raw(), size, size, ExtendedColorType::Rgba8)?);
    }
    ensure_parent(path)?;
    let out = BufWriter::new(File::create(path)?);
    IcoEncoder::new(out).encode_images(&frames)?;
    Ok(())
}

/// `png_in` → transparent `png_out` → multi-size `ico_out`.
pub fn run(png_in: &Path, png_out: &Path, ico_out: &Path, threshold: u8, sizes: &[u32]) -> Result<()> {
    if !png_in.is_file() {
        return Err(crate::Error::MissingInput(png_in.to_path_buf()));
    }
    let mut img = image::open(png_in)?.to_rgba8();
    let cleared = remove_white_background(&mut img, threshold);
    ensure_parent(png_out)?;
    img.save(png_out)?;
    info!("Saved transparent PNG: {} ({} pixel(s) cleared)", png_out.display(), cleared);

    write_ico(&img, ico_out, sizes)?;
    info!("Saved ICO: {}", ico_out.display());
    Ok(())
}
