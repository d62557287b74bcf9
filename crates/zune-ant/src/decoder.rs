/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use log::{debug, trace, warn};
use zune_core::bit_depth::BitDepth;
use zune_core::bytestream::{ZByteReaderTrait, ZReader};
use zune_core::colorspace::ColorSpace;
use zune_core::options::DecoderOptions;

use crate::colorspace::yuv_to_rgb_buffer;
use crate::compressor::{Compressor, ZlibCompressor};
use crate::constants::{ANT_BIT_DEPTH, ANT_CHANNELS};
use crate::container::{AntHeader, ContainerVariant};
use crate::errors::AntDecodeErrors;
use crate::predictor::delta_decode_in_place;

/// An ANT decoder
///
/// The decoder is initialized by calling `new`
/// and either of [`decode_headers`] to decode headers
/// or [`decode`] to return uncompressed pixels
///
/// Additional methods are provided that give more
/// details of the compressed image like width and height
/// are accessible after decoding headers
///
/// [`decode_headers`]:AntDecoder::decode_headers
/// [`decode`]:AntDecoder::decode
pub struct AntDecoder<T, C = ZlibCompressor>
where
    T: ZByteReaderTrait,
    C: Compressor
{
    header:          AntHeader,
    out_colorspace:  ColorSpace,
    decoded_headers: bool,
    decoded_payload: bool,
    stream:          ZReader<T>,
    options:         DecoderOptions,
    compressor:      C
}

impl<T> AntDecoder<T, ZlibCompressor>
where
    T: ZByteReaderTrait
{
    /// Create a new ANT decoder with the default options
    ///
    /// # Arguments
    /// - `data`: The compressed ant data
    ///
    /// # Example
    ///
    /// ```no_run
    /// use zune_core::bytestream::ZCursor;
    /// let data: &[u8] = &[];
    /// let mut decoder = zune_ant::AntDecoder::new(ZCursor::new(data));
    /// // additional code
    /// ```
    pub fn new(data: T) -> AntDecoder<T, ZlibCompressor> {
        AntDecoder::new_with_options(data, DecoderOptions::default())
    }

    /// Create a new ANT decoder that obeys specified restrictions
    ///
    /// E.g can be used to set width and height limits to prevent OOM attacks
    ///
    /// # Example
    /// ```
    /// use zune_core::bytestream::ZCursor;
    /// use zune_core::options::DecoderOptions;
    /// use zune_ant::AntDecoder;
    /// // only decode images less than 10 in both width and height
    ///
    /// let options = DecoderOptions::default().set_max_width(10).set_max_height(10);
    ///
    /// let data: &[u8] = &[];
    /// let mut decoder = AntDecoder::new_with_options(ZCursor::new(data), options);
    /// ```
    pub fn new_with_options(data: T, options: DecoderOptions) -> AntDecoder<T, ZlibCompressor> {
        AntDecoder::new_with_compressor(data, options, ZlibCompressor)
    }
}

impl<T, C> AntDecoder<T, C>
where
    T: ZByteReaderTrait,
    C: Compressor
{
    /// Create a decoder whose payload was produced by a custom compressor
    #[allow(clippy::redundant_field_names)]
    pub fn new_with_compressor(data: T, options: DecoderOptions, compressor: C) -> AntDecoder<T, C> {
        AntDecoder {
            header:          AntHeader::new(0, 0),
            out_colorspace:  ColorSpace::RGB,
            decoded_headers: false,
            decoded_payload: false,
            stream:          ZReader::new(data),
            options:         options,
            compressor:      compressor
        }
    }

    /// Choose the layout of decoded pixels
    ///
    /// `ColorSpace::RGB` (default) or `ColorSpace::RGBA`, the alpha
    /// channel is always fully opaque since the format doesn't store it
    pub fn set_output_colorspace(&mut self, colorspace: ColorSpace) -> Result<(), AntDecodeErrors> {
        match colorspace {
            ColorSpace::RGB | ColorSpace::RGBA => {
                self.out_colorspace = colorspace;
                Ok(())
            }
            _ => Err(AntDecodeErrors::UnsupportedColorspace(colorspace))
        }
    }

    /// Decode the ANT header storing needed information into
    /// the decoder instance
    ///
    /// # Returns
    ///
    /// - On success: Nothing
    /// - On error: The error encountered when decoding headers,
    ///   a wrong signature is reported as [`AntDecodeErrors::InvalidSignature`]
    pub fn decode_headers(&mut self) -> Result<(), AntDecodeErrors> {
        if self.decoded_headers {
            return Ok(());
        }
        let header = AntHeader::read(&mut self.stream, ContainerVariant::Residual)?;

        let width = header.width as usize;
        let height = header.height as usize;

        if width == 0 || height == 0 {
            return Err(AntDecodeErrors::ZeroDimensions);
        }

        if width > self.options.max_width() || height > self.options.max_height() {
            return Err(AntDecodeErrors::TooLargeDimensions {
                width,
                height,
                max_width: self.options.max_width(),
                max_height: self.options.max_height()
            });
        }

        if let Some(depth) = header.bit_depth {
            if depth != ANT_BIT_DEPTH {
                if self.options.strict_mode() {
                    return Err(AntDecodeErrors::UnsupportedBitDepth(depth));
                }
                warn!("Unknown bit depth {depth}, expected {ANT_BIT_DEPTH}, treating as 24");
            }
        }
        self.header = header;

        trace!("Image width: {:?}", width);
        trace!("Image height: {:?}", height);
        trace!("Image bit depth: {:?}", header.bit_depth);

        self.decoded_headers = true;

        Ok(())
    }

    fn residual_size(&self) -> Option<usize> {
        (self.header.width as usize)
            .checked_mul(self.header.height as usize)?
            .checked_mul(ANT_CHANNELS)
    }

    /// Return the number of bytes required to hold a decoded image frame
    /// in the configured output colorspace
    ///
    /// # Returns
    ///  - `Some(usize)`: Minimum size for a buffer needed to decode the image
    ///  - `None`: Indicates the image headers were not decoded or the size overflows.
    pub fn output_buffer_size(&self) -> Option<usize> {
        if self.decoded_headers {
            (self.header.width as usize)
                .checked_mul(self.header.height as usize)?
                .checked_mul(self.out_colorspace.num_components())
        } else {
            None
        }
    }

    /// Decode the bytes of an ANT image, returning the
    /// uncompressed pixels or the error encountered during decoding
    ///
    /// # Returns
    /// - On success: The decoded pixels, `width*height*3` bytes of RGB
    ///   or `width*height*4` for RGBA output
    /// - On error: An instance of [AntDecodeErrors] which gives a reason why the image could not
    ///   be decoded
    pub fn decode(&mut self) -> Result<Vec<u8>, AntDecodeErrors> {
        self.decode_headers()?;

        let size = self.output_buffer_size().ok_or(AntDecodeErrors::TooLargeDimensions {
            width:      self.header.width as usize,
            height:     self.header.height as usize,
            max_width:  self.options.max_width(),
            max_height: self.options.max_height()
        })?;
        let mut output = vec![0; size];

        self.decode_into(&mut output)?;

        Ok(output)
    }

    /// Decode a compressed ANT image and store the contents
    /// into the output buffer
    ///
    /// Returns an error if the buffer cannot hold the contents
    /// of the image.
    ///
    /// The payload is consumed by the first call, decoding again
    /// with the same decoder is an error
    pub fn decode_into(&mut self, pixels: &mut [u8]) -> Result<(), AntDecodeErrors> {
        self.decode_headers()?;

        let output_size = self
            .output_buffer_size()
            .ok_or(AntDecodeErrors::Generic("Image size overflows usize".to_string()))?;

        if pixels.len() < output_size {
            return Err(AntDecodeErrors::TooSmallOutput(output_size, pixels.len()));
        }

        let expected = self
            .residual_size()
            .ok_or(AntDecodeErrors::Generic("Image size overflows usize".to_string()))?;

        if self.decoded_payload {
            return Err(AntDecodeErrors::Generic(
                "Payload was already consumed by an earlier decode".to_string()
            ));
        }
        self.decoded_payload = true;

        let mut payload_buf = Vec::new();
        self.stream.read_all(&mut payload_buf)?;
        let payload = &payload_buf[..];

        if payload.is_empty() {
            return Err(AntDecodeErrors::MalformedPayload(
                "No payload after header".to_string()
            ));
        }
        debug!("Payload size: {} bytes", payload.len());

        let mut residuals = self.compressor.decompress(payload, expected)?;

        if residuals.len() != expected {
            return Err(AntDecodeErrors::DimensionMismatch {
                expected,
                found: residuals.len()
            });
        }

        delta_decode_in_place(&mut residuals, self.header.width as usize)?;

        yuv_to_rgb_buffer(
            &residuals,
            self.out_colorspace.num_components(),
            &mut pixels[..output_size]
        );

        trace!("Finished decoding image");

        Ok(())
    }

    /// Returns the output colorspace or none if the headers haven't been decoded
    pub const fn colorspace(&self) -> Option<ColorSpace> {
        if self.decoded_headers {
            Some(self.out_colorspace)
        } else {
            None
        }
    }

    /// Return ANT bit depth per channel
    ///
    /// This is always 8
    pub const fn bit_depth(&self) -> BitDepth {
        BitDepth::Eight
    }

    /// Return the width and height of the image
    ///
    /// Or none if the headers haven't been decoded
    pub const fn dimensions(&self) -> Option<(usize, usize)> {
        if self.decoded_headers {
            return Some((self.header.width as usize, self.header.height as usize));
        }
        None
    }

    /// Return the decoded header
    ///
    /// Or none if the headers haven't been decoded
    pub const fn header(&self) -> Option<AntHeader> {
        if self.decoded_headers {
            return Some(self.header);
        }
        None
    }
}
