/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Vertical delta prediction over YUV scanlines
//!
//! Every channel of a pixel is predicted from the pixel at the same column
//! in the previous row, the first row is predicted from zero. This is PNG's
//! `Up` filter without the filter byte.
//!
//! Residuals are stored modulo 256, `current.wrapping_sub(predicted)`,
//! and reconstructed with `residual.wrapping_add(predicted)`.
//!
//! The context remembers the previously *reconstructed* row, so rows must be
//! visited strictly in order; [`PredictionContext`] tracks the next row it
//! expects and rejects anything else.
use crate::constants::ANT_CHANNELS;
use crate::errors::PredictorErrors;

/// Per column history for one image
///
/// Each encode or decode call owns its context, sized to the image width.
pub struct PredictionContext {
    previous_row: Vec<u8>,
    next_row:     usize
}

impl PredictionContext {
    /// Create a context for an image `width` pixels wide
    ///
    /// The initial prediction for every column is `(0,0,0)`
    pub fn new(width: usize) -> Result<PredictionContext, PredictorErrors> {
        if width == 0 {
            return Err(PredictorErrors::ZeroWidth);
        }
        Ok(PredictionContext {
            previous_row: vec![0; width * ANT_CHANNELS],
            next_row:     0
        })
    }

    /// Number of bytes in a single row
    pub fn stride(&self) -> usize {
        self.previous_row.len()
    }

    /// Index of the row the context expects next
    pub const fn next_row(&self) -> usize {
        self.next_row
    }

    fn check_row(&self, row_index: usize, row: &[u8]) -> Result<(), PredictorErrors> {
        if row_index != self.next_row {
            return Err(PredictorErrors::RowOutOfOrder {
                expected: self.next_row,
                found:    row_index
            });
        }
        if row.len() != self.stride() {
            return Err(PredictorErrors::DimensionMismatch {
                expected: self.stride(),
                found:    row.len()
            });
        }
        Ok(())
    }

    /// Replace a row of values with their residuals
    pub fn encode_row(&mut self, row_index: usize, row: &mut [u8]) -> Result<(), PredictorErrors> {
        self.check_row(row_index, row)?;

        for (value, prediction) in row.iter_mut().zip(self.previous_row.iter_mut()) {
            let current = *value;
            *value = current.wrapping_sub(*prediction);
            *prediction = current;
        }
        self.next_row += 1;
        Ok(())
    }

    /// Replace a row of residuals with the reconstructed values
    pub fn decode_row(&mut self, row_index: usize, row: &mut [u8]) -> Result<(), PredictorErrors> {
        self.check_row(row_index, row)?;

        for (value, prediction) in row.iter_mut().zip(self.previous_row.iter_mut()) {
            *value = value.wrapping_add(*prediction);
            *prediction = *value;
        }
        self.next_row += 1;
        Ok(())
    }
}

fn check_buffer(buffer: &[u8], width: usize) -> Result<usize, PredictorErrors> {
    if buffer.is_empty() {
        return Err(PredictorErrors::EmptyInput);
    }
    if width == 0 {
        return Err(PredictorErrors::ZeroWidth);
    }
    let stride = width * ANT_CHANNELS;

    if buffer.len() % stride != 0 {
        return Err(PredictorErrors::DimensionMismatch {
            expected: stride,
            found:    buffer.len()
        });
    }
    Ok(stride)
}

/// Delta encode a whole YUV buffer in place
pub fn delta_encode_in_place(buffer: &mut [u8], width: usize) -> Result<(), PredictorErrors> {
    let stride = check_buffer(buffer, width)?;
    let mut context = PredictionContext::new(width)?;

    for (row_index, row) in buffer.chunks_exact_mut(stride).enumerate() {
        context.encode_row(row_index, row)?;
    }
    Ok(())
}

/// Delta decode a whole residual buffer in place
pub fn delta_decode_in_place(buffer: &mut [u8], width: usize) -> Result<(), PredictorErrors> {
    let stride = check_buffer(buffer, width)?;
    let mut context = PredictionContext::new(width)?;

    for (row_index, row) in buffer.chunks_exact_mut(stride).enumerate() {
        context.decode_row(row_index, row)?;
    }
    Ok(())
}

/// Delta encode a YUV buffer returning the residuals
pub fn delta_encode(yuv: &[u8], width: usize) -> Result<Vec<u8>, PredictorErrors> {
    let mut residuals = yuv.to_vec();
    delta_encode_in_place(&mut residuals, width)?;
    Ok(residuals)
}

/// Delta decode a residual buffer returning the YUV values
pub fn delta_decode(residuals: &[u8], width: usize) -> Result<Vec<u8>, PredictorErrors> {
    let mut yuv = residuals.to_vec();
    delta_decode_in_place(&mut yuv, width)?;
    Ok(yuv)
}
