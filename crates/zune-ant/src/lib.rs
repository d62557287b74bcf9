/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Decoding and encoding ANT images
//!
//! ANT is a small lossless-ish container for 8 bit RGB images.
//! Encoding runs the pixels through three stages
//!
//! 1. RGB to YUV, chroma offset by 128 ([`colorspace`])
//! 2. Vertical delta prediction, each byte minus the byte directly above it ([`predictor`])
//! 3. A generic byte-stream compressor, zlib by default ([`compressor`])
//!
//! and frames the result behind a fixed header ([`container`]).
//!
//! # Layout
//!
//! | Bytes     | Description                                 |
//! |-----------|---------------------------------------------|
//! | 4         | `ANT\0` magic                               |
//! | 4         | width, 32 bit big endian                    |
//! | 4         | height, 32 bit big endian                   |
//! | 1         | bit depth, always 24 (residual variant only)|
//! | remainder | compressed residuals                        |
//!
//! The residuals are `width*height*3` bytes, row major, `Y U V` interleaved.
//!
//! # Precision
//! The color transform rounds to whole bytes, so decoded pixels can differ
//! from the source by a few levels. Gray pixels (`r == g == b`) survive
//! exactly, and everything after the color transform is lossless.
//!
//! Alpha is never stored, RGBA input is accepted and its alpha dropped.
//!
//! # Example
//! ```
//! use zune_core::bit_depth::BitDepth;
//! use zune_core::bytestream::ZCursor;
//! use zune_core::colorspace::ColorSpace;
//! use zune_core::options::EncoderOptions;
//! use zune_ant::{AntDecoder, AntEncoder};
//!
//! let pixels = [128_u8; 4 * 4 * 3];
//! let options = EncoderOptions::new(4, 4, ColorSpace::RGB, BitDepth::Eight);
//!
//! let encoded = AntEncoder::new(&pixels, options).encode_to_vec().unwrap();
//! let decoded = AntDecoder::new(ZCursor::new(&encoded)).decode().unwrap();
//!
//! assert_eq!(decoded, pixels);
//! ```
pub use compressor::{Compressor, ZlibCompressor};
pub use container::{AntFile, AntHeader, ContainerVariant};
pub use decoder::*;
pub use encoder::*;
pub use errors::*;
pub use zune_core;

pub mod colorspace;
pub mod compressor;
pub mod constants;
pub mod container;
mod decoder;
mod encoder;
mod errors;
pub mod predictor;
