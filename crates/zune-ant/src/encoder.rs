/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use log::{debug, trace};
use zune_core::bit_depth::BitDepth;
use zune_core::bytestream::{ZByteWriterTrait, ZWriter};
use zune_core::colorspace::ColorSpace;
use zune_core::options::EncoderOptions;

use crate::colorspace::rgb_to_yuv_buffer;
use crate::compressor::{Compressor, ZlibCompressor};
use crate::constants::{ANT_CHANNELS, ANT_RESIDUAL_HEADER_SIZE, DEFAULT_COMPRESSION_LEVEL};
use crate::container::AntHeader;
use crate::errors::AntEncodeErrors;
use crate::predictor::delta_encode_in_place;

const SUPPORTED_COLORSPACES: [ColorSpace; 2] = [ColorSpace::RGB, ColorSpace::RGBA];

/// ANT encoder
///
/// Pixels go through YUV conversion, vertical delta prediction and
/// compression, then get framed behind a 13 byte header.
///
/// # Example
/// - Encode a 100 by 100 RGB image
///
/// ```
/// use zune_core::bit_depth::BitDepth;
/// use zune_core::colorspace::ColorSpace;
/// use zune_core::options::EncoderOptions;
/// use zune_ant::AntEncoder;
/// use zune_ant::AntEncodeErrors;
///
/// const W:usize=100;
/// const H:usize=100;
///
/// fn main()->Result<(), AntEncodeErrors>{
///     let pixels = std::array::from_fn::<u8,{W * H * 3},_>(|i| (i%256) as u8);
///     let mut encoder = AntEncoder::new(&pixels,EncoderOptions::new(W,H,ColorSpace::RGB,BitDepth::Eight));
///     let mut sink = vec![];
///     let written = encoder.encode(&mut sink)?;
///     assert_eq!(written, sink.len());
///     Ok(())
///}
/// ```
pub struct AntEncoder<'a, C: Compressor = ZlibCompressor> {
    // raw pixels, in RGB or RGBA
    pixel_data:        &'a [u8],
    options:           EncoderOptions,
    compressor:        C,
    compression_level: u8
}

impl<'a> AntEncoder<'a, ZlibCompressor> {
    /// Create a new encoder which will encode the pixels with zlib
    ///
    /// # Arguments
    /// - data: Pixel data, size must be equal to `width*height*colorspace channels`
    /// - options: Encoder details for data, this contains width, height and the colorspace
    pub fn new(data: &'a [u8], options: EncoderOptions) -> AntEncoder<'a, ZlibCompressor> {
        AntEncoder::new_with_compressor(data, options, ZlibCompressor)
    }
}

impl<'a, C: Compressor> AntEncoder<'a, C> {
    /// Create a new encoder with a custom compression stage
    ///
    /// The decoder must be given a compressor that can invert it.
    #[allow(clippy::redundant_field_names)]
    pub fn new_with_compressor(
        data: &'a [u8], options: EncoderOptions, compressor: C
    ) -> AntEncoder<'a, C> {
        AntEncoder {
            pixel_data:        data,
            options:           options,
            compressor:        compressor,
            compression_level: DEFAULT_COMPRESSION_LEVEL
        }
    }

    /// Set the compression effort, 0 to 9
    ///
    /// Defaults to 9, the smallest output
    pub fn set_compression_level(&mut self, level: u8) {
        self.compression_level = level.min(9);
    }

    pub const fn compression_level(&self) -> u8 {
        self.compression_level
    }

    fn validate(&self) -> Result<AntHeader, AntEncodeErrors> {
        if self.pixel_data.is_empty() {
            return Err(AntEncodeErrors::EmptyInput);
        }
        let options = &self.options;

        if !SUPPORTED_COLORSPACES.contains(&options.colorspace()) {
            return Err(AntEncodeErrors::UnsupportedColorspace(
                options.colorspace(),
                &SUPPORTED_COLORSPACES
            ));
        }
        if options.depth() != BitDepth::Eight {
            return Err(AntEncodeErrors::UnsupportedBitDepth(options.depth()));
        }
        if options.width() == 0 || options.height() == 0 {
            return Err(AntEncodeErrors::ZeroDimensions);
        }
        let width = u32::try_from(options.width())
            .map_err(|_| AntEncodeErrors::TooLargeDimensions(options.width()))?;
        let height = u32::try_from(options.height())
            .map_err(|_| AntEncodeErrors::TooLargeDimensions(options.height()))?;

        let expected_len = options
            .width()
            .checked_mul(options.height())
            .and_then(|x| x.checked_mul(options.colorspace().num_components()))
            .ok_or(AntEncodeErrors::TooLargeDimensions(options.width()))?;

        if self.pixel_data.len() != expected_len {
            return Err(AntEncodeErrors::DimensionMismatch {
                expected: expected_len,
                found:    self.pixel_data.len()
            });
        }
        Ok(AntHeader::new(width, height))
    }

    /// Encode the image into `sink`
    ///
    /// # Returns
    /// - Ok(size): Actual bytes used for encoding
    /// - Err: The error encountered during encoding
    pub fn encode<T: ZByteWriterTrait>(&mut self, sink: T) -> Result<usize, AntEncodeErrors> {
        let header = self.validate()?;

        let width = self.options.width();
        let components = self.options.colorspace().num_components();

        trace!("Image width: {:?}", width);
        trace!("Image height: {:?}", self.options.height());
        trace!("Image colorspace: {:?}", self.options.colorspace());

        let mut residuals = vec![0_u8; width * self.options.height() * ANT_CHANNELS];

        rgb_to_yuv_buffer(self.pixel_data, components, &mut residuals);
        delta_encode_in_place(&mut residuals, width)?;

        let payload = self
            .compressor
            .compress(&residuals, self.compression_level)?;

        debug!(
            "Compressed {} residual bytes to {} bytes",
            residuals.len(),
            payload.len()
        );

        let mut stream = ZWriter::new(sink);
        header.write(&mut stream)?;
        stream.write_all(&payload)?;

        Ok(stream.bytes_written())
    }

    /// Encode the image into a new vector
    pub fn encode_to_vec(&mut self) -> Result<Vec<u8>, AntEncodeErrors> {
        let mut output = Vec::with_capacity(ANT_RESIDUAL_HEADER_SIZE + self.pixel_data.len() / 2);
        self.encode(&mut output)?;
        Ok(output)
    }
}
