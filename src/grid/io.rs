//! I/O helpers for grids, masks and JSON reports.
//!
//! - `load_grid_json`: read an array-of-arrays grid of `0/1/2` codes.
//! - `load_grid_image`: read a grayscale image; dark (`0`) pixels are
//!   background, everything else is a prime cell.
//! - `load_grid`: dispatch on the file extension.
//! - `save_mask_png`: dump a mask as a black/white PNG.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{GridView, SegmentMask, UlamGrid, BACKGROUND, PRIME};
use crate::error::{DetectError, Result};
use image::{GrayImage, Luma};
use serde::Serialize;
use std::fs;
use std::path::Path;

pub fn load_grid_json(path: &Path) -> Result<UlamGrid> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

pub fn load_grid_image(path: &Path) -> Result<UlamGrid> {
    let img = image::open(path)?.into_luma8();
    let rows = img.height() as usize;
    let cols = img.width() as usize;
    let data = img
        .into_raw()
        .into_iter()
        .map(|px| if px == 0 { BACKGROUND } else { PRIME })
        .collect();
    UlamGrid::new(rows, cols, data)
}

/// JSON for `.json` files, grayscale image decoding for everything else.
pub fn load_grid(path: &Path) -> Result<UlamGrid> {
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        load_grid_json(path)
    } else {
        load_grid_image(path)
    }
}

/// Save a mask as a grayscale PNG: marked cells white, the rest black.
pub fn save_mask_png(mask: &SegmentMask, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    let (rows, cols) = mask.shape();
    let width = u32::try_from(cols)
        .map_err(|_| DetectError::invalid_input(format!("mask width {cols} too large")))?;
    let height = u32::try_from(rows)
        .map_err(|_| DetectError::invalid_input(format!("mask height {rows} too large")))?;
    let mut out = GrayImage::new(width, height);
    for (r, c) in mask.marked_cells() {
        out.put_pixel(c as u32, r as u32, Luma([255u8]));
    }
    out.save(path)?;
    Ok(())
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    Ok(())
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
