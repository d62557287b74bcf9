/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The final, generic compression stage
//!
//! The codec only needs a lossless byte-stream compressor, anything that
//! implements [`Compressor`] can be plugged into [`AntEncoder`] and
//! [`AntDecoder`]. [`ZlibCompressor`] is the default.
//!
//! [`AntEncoder`]: crate::AntEncoder
//! [`AntDecoder`]: crate::AntDecoder
use std::io::Write;

use flate2::write::ZlibEncoder;
use flate2::{Compression, Decompress, FlushDecompress, Status};
use log::trace;

use crate::errors::CompressorErrors;

/// A lossless byte-stream compressor
///
/// Implementations must be deterministic and `decompress` must be the
/// exact inverse of `compress`. A stream that cannot be fully decoded
/// must be reported as [`CompressorErrors::MalformedPayload`], never as a
/// short output.
pub trait Compressor {
    /// Compress `data`
    ///
    /// # Arguments
    /// - data: Bytes to compress
    /// - level: Effort knob from 0 (fastest) to 9 (smallest output),
    ///   implementations may clamp it to what they support
    fn compress(&self, data: &[u8], level: u8) -> Result<Vec<u8>, CompressorErrors>;

    /// Decompress `data`, refusing to produce more than `limit` bytes
    fn decompress(&self, data: &[u8], limit: usize) -> Result<Vec<u8>, CompressorErrors>;
}

/// zlib (deflate + adler32 trailer) compressor
///
/// The adler32 trailer makes truncation and corruption detectable.
#[derive(Copy, Clone, Debug, Default)]
pub struct ZlibCompressor;

impl Compressor for ZlibCompressor {
    fn compress(&self, data: &[u8], level: u8) -> Result<Vec<u8>, CompressorErrors> {
        let level = Compression::new(u32::from(level.min(9)));

        let mut encoder = ZlibEncoder::new(Vec::with_capacity(data.len() / 2), level);
        encoder.write_all(data)?;

        let output = encoder.finish()?;
        trace!("zlib: {} bytes -> {} bytes", data.len(), output.len());

        Ok(output)
    }

    fn decompress(&self, data: &[u8], limit: usize) -> Result<Vec<u8>, CompressorErrors> {
        let mut inflater = Decompress::new(true);
        // the limit is usually the exact output size, but don't trust it
        // for the initial allocation
        let mut output = Vec::with_capacity(limit.min(data.len().saturating_mul(4)).max(64));

        loop {
            if output.len() == output.capacity() {
                if output.len() > limit {
                    return Err(CompressorErrors::OutputLimitExceeded(limit, output.len()));
                }
                // allow one byte past the limit so that we can tell
                // "exactly at the limit" apart from "over the limit"
                let room = limit.saturating_add(1) - output.len();
                output.reserve_exact(output.capacity().max(1024).min(room));
            }
            let in_before = inflater.total_in();
            let out_before = inflater.total_out();

            // total_in never exceeds data.len()
            let input = &data[in_before as usize..];

            // not Finish, the rust backend treats a first Finish call as
            // one-shot and fails for good if the output doesn't fit
            let status = inflater
                .decompress_vec(input, &mut output, FlushDecompress::None)
                .map_err(|e| CompressorErrors::MalformedPayload(e.to_string()))?;

            match status {
                Status::StreamEnd => break,
                Status::Ok | Status::BufError => {
                    let progressed =
                        inflater.total_in() != in_before || inflater.total_out() != out_before;

                    if !progressed && output.len() < output.capacity() {
                        // output has space but the decompressor wants more input
                        return Err(CompressorErrors::MalformedPayload(format!(
                            "zlib stream ended early after {} of {} bytes",
                            inflater.total_in(),
                            data.len()
                        )));
                    }
                }
            }
        }
        if output.len() > limit {
            return Err(CompressorErrors::OutputLimitExceeded(limit, output.len()));
        }
        if (inflater.total_in() as usize) != data.len() {
            return Err(CompressorErrors::MalformedPayload(format!(
                "{} trailing bytes after the zlib stream",
                data.len() - inflater.total_in() as usize
            )));
        }
        Ok(output)
    }
}
