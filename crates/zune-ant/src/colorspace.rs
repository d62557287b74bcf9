/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! RGB to YUV (BT.601 analog coefficients) and back.
//!
//! Chroma is stored offset by 128 so all three components fit a byte.
//! Both directions round to nearest and clamp to `0..=255`, so a
//! saturated pixel whose `v` lands above 255 loses precision instead
//! of wrapping around.
use crate::constants::CHROMA_OFFSET;

/// Limit values to 0 and 255
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn clamp(a: f64) -> u8 {
    a.round().clamp(0.0, 255.0) as u8
}

/// Convert a single RGB pixel to YUV with chroma offset by 128
#[inline]
pub fn rgb_to_yuv(r: u8, g: u8, b: u8) -> [u8; 3] {
    let (r, g, b) = (f64::from(r), f64::from(g), f64::from(b));

    let y = 0.299 * r + 0.587 * g + 0.114 * b;
    let u = -0.14713 * r - 0.28886 * g + 0.436 * b;
    let v = 0.615 * r - 0.51499 * g - 0.10001 * b;

    [clamp(y), clamp(u + CHROMA_OFFSET), clamp(v + CHROMA_OFFSET)]
}

/// Convert a single YUV pixel (chroma offset by 128) to RGB
#[inline]
pub fn yuv_to_rgb(y: u8, u: u8, v: u8) -> [u8; 3] {
    let y = f64::from(y);
    let u = f64::from(u) - CHROMA_OFFSET;
    let v = f64::from(v) - CHROMA_OFFSET;

    let r = y + 1.13983 * v;
    let g = y - 0.39465 * u - 0.58060 * v;
    let b = y + 2.03211 * u;

    [clamp(r), clamp(g), clamp(b)]
}

/// Convert interleaved RGB or RGBA pixels into a YUV buffer
///
/// # Arguments
/// - pixels: Interleaved pixels, `components` bytes per pixel, alpha if present is dropped
/// - components: 3 or 4
/// - out: Output with three bytes per pixel
pub fn rgb_to_yuv_buffer(pixels: &[u8], components: usize, out: &mut [u8]) {
    debug_assert!(components == 3 || components == 4);

    for (pix, yuv) in pixels
        .chunks_exact(components)
        .zip(out.chunks_exact_mut(3))
    {
        yuv.copy_from_slice(&rgb_to_yuv(pix[0], pix[1], pix[2]));
    }
}

/// Convert a YUV buffer back into interleaved RGB or RGBA pixels
///
/// When `components` is 4, alpha is written as fully opaque
pub fn yuv_to_rgb_buffer(yuv: &[u8], components: usize, out: &mut [u8]) {
    debug_assert!(components == 3 || components == 4);

    for (pix, rgb) in yuv.chunks_exact(3).zip(out.chunks_exact_mut(components)) {
        rgb[0..3].copy_from_slice(&yuv_to_rgb(pix[0], pix[1], pix[2]));

        if components == 4 {
            rgb[3] = 255;
        }
    }
}
