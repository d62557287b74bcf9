/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible during decoding and encoding.
use core::fmt::{Debug, Display, Formatter};

use zune_core::bit_depth::BitDepth;
use zune_core::bytestream::ZByteIoError;
use zune_core::colorspace::ColorSpace;

/// Possible Errors that may occur during decoding
pub enum AntDecodeErrors {
    /// The image does not start with the `ANT\0` magic bytes
    ///
    /// Indicates that the input is not an ANT file, this is
    /// reported before any dimension is parsed
    InvalidSignature,
    /// The compressor rejected the payload, it is either truncated
    /// or corrupt
    MalformedPayload(String),
    /// The decompressed payload does not match the dimensions
    /// declared in the header
    ///
    /// - `expected`: Number of bytes the header implies
    /// - `found`: Number of bytes actually present
    DimensionMismatch { expected: usize, found: usize },
    /// A zero length buffer was handed to the decoder
    EmptyInput,
    /// Image dimensions are larger than the configured limits
    TooLargeDimensions {
        width:      usize,
        height:     usize,
        max_width:  usize,
        max_height: usize
    },
    /// Width or height is zero
    ZeroDimensions,
    /// The header carries a bit depth other than 24
    UnsupportedBitDepth(u8),
    /// The requested output colorspace cannot be produced
    UnsupportedColorspace(ColorSpace),
    /// To small output size
    ///
    /// - 1st argument is the number of bytes we expected
    /// - 2nd argument is the size of the buffer provided
    TooSmallOutput(usize, usize),
    /// Generic message
    Generic(String),
    IoErrors(ZByteIoError)
}

impl Debug for AntDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            AntDecodeErrors::InvalidSignature => {
                writeln!(f, "Invalid signature, expected `ANT\\0` as file start")
            }
            AntDecodeErrors::MalformedPayload(reason) => {
                writeln!(f, "Malformed payload, could not decompress: {reason}")
            }
            AntDecodeErrors::DimensionMismatch { expected, found } => {
                writeln!(
                    f,
                    "Dimension mismatch, header implies {expected} bytes but payload has {found}"
                )
            }
            AntDecodeErrors::EmptyInput => {
                writeln!(f, "Empty input, no bytes to decode")
            }
            AntDecodeErrors::TooLargeDimensions {
                width,
                height,
                max_width,
                max_height
            } => {
                writeln!(
                    f,
                    "Image dimensions {width}x{height} exceed configured limits {max_width}x{max_height}"
                )
            }
            AntDecodeErrors::ZeroDimensions => {
                writeln!(f, "Image width or height is zero")
            }
            AntDecodeErrors::UnsupportedBitDepth(depth) => {
                writeln!(f, "Unsupported bit depth {depth}, expected 24")
            }
            AntDecodeErrors::UnsupportedColorspace(colorspace) => {
                writeln!(
                    f,
                    "Cannot decode into {colorspace:?}, supported ones are RGB and RGBA"
                )
            }
            AntDecodeErrors::TooSmallOutput(expected, found) => {
                writeln!(
                    f,
                    "Too small output size, expected {expected}, but found {found}"
                )
            }
            AntDecodeErrors::Generic(val) => {
                writeln!(f, "{val}")
            }
            AntDecodeErrors::IoErrors(value) => {
                writeln!(f, "I/O error {:?}", value)
            }
        }
    }
}

impl Display for AntDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl std::error::Error for AntDecodeErrors {}

impl From<ZByteIoError> for AntDecodeErrors {
    fn from(value: ZByteIoError) -> Self {
        AntDecodeErrors::IoErrors(value)
    }
}

impl From<PredictorErrors> for AntDecodeErrors {
    fn from(value: PredictorErrors) -> Self {
        match value {
            PredictorErrors::EmptyInput => AntDecodeErrors::EmptyInput,
            PredictorErrors::ZeroWidth => AntDecodeErrors::ZeroDimensions,
            PredictorErrors::DimensionMismatch { expected, found } => {
                AntDecodeErrors::DimensionMismatch { expected, found }
            }
            err @ PredictorErrors::RowOutOfOrder { .. } => {
                AntDecodeErrors::Generic(format!("{err:?}"))
            }
        }
    }
}

impl From<CompressorErrors> for AntDecodeErrors {
    fn from(value: CompressorErrors) -> Self {
        match value {
            CompressorErrors::MalformedPayload(reason) => AntDecodeErrors::MalformedPayload(reason),
            CompressorErrors::OutputLimitExceeded(limit, found) => {
                AntDecodeErrors::DimensionMismatch {
                    expected: limit,
                    found
                }
            }
            CompressorErrors::Io(err) => AntDecodeErrors::MalformedPayload(err.to_string())
        }
    }
}

/// Errors encountered during encoding
pub enum AntEncodeErrors {
    /// No pixels were provided
    EmptyInput,
    /// Width or height is zero
    ZeroDimensions,
    /// Too large dimensions
    ///
    /// The dimension cannot be stored in the 32 bit header fields
    TooLargeDimensions(usize),
    /// Pixel length doesn't match `width*height*components`
    DimensionMismatch { expected: usize, found: usize },
    /// Unsupported colorspace
    ///
    /// The first argument is the colorspace encountered
    /// The second argument is list of supported colorspaces
    UnsupportedColorspace(ColorSpace, &'static [ColorSpace]),
    /// Only 8 bit images can be stored
    UnsupportedBitDepth(BitDepth),
    /// The compressor failed
    Compression(String),
    IoError(ZByteIoError)
}

impl Debug for AntEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            AntEncodeErrors::EmptyInput => {
                writeln!(f, "Empty input, no pixels to encode")
            }
            AntEncodeErrors::ZeroDimensions => {
                writeln!(f, "Image width or height is zero")
            }
            AntEncodeErrors::TooLargeDimensions(found) => {
                writeln!(
                    f,
                    "Too large image dimensions {found}, ANT can only encode images less than {}",
                    u32::MAX
                )
            }
            AntEncodeErrors::DimensionMismatch { expected, found } => {
                writeln!(
                    f,
                    "Expected {expected} bytes of pixels but found {found}"
                )
            }
            AntEncodeErrors::UnsupportedColorspace(found, supported) => {
                writeln!(f, "Cannot encode image with colorspace {found:?} into ANT, supported ones are {supported:?}")
            }
            AntEncodeErrors::UnsupportedBitDepth(depth) => {
                writeln!(f, "Cannot encode image with depth {depth:?}, only 8 bit images are supported")
            }
            AntEncodeErrors::Compression(reason) => {
                writeln!(f, "Compression failed: {reason}")
            }
            AntEncodeErrors::IoError(v) => {
                writeln!(f, "I/O error {:?}", v)
            }
        }
    }
}

impl Display for AntEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl std::error::Error for AntEncodeErrors {}

impl From<ZByteIoError> for AntEncodeErrors {
    fn from(value: ZByteIoError) -> Self {
        Self::IoError(value)
    }
}

impl From<CompressorErrors> for AntEncodeErrors {
    fn from(value: CompressorErrors) -> Self {
        Self::Compression(format!("{value:?}"))
    }
}

impl From<PredictorErrors> for AntEncodeErrors {
    fn from(value: PredictorErrors) -> Self {
        match value {
            PredictorErrors::EmptyInput => AntEncodeErrors::EmptyInput,
            PredictorErrors::ZeroWidth => AntEncodeErrors::ZeroDimensions,
            PredictorErrors::DimensionMismatch { expected, found } => {
                AntEncodeErrors::DimensionMismatch { expected, found }
            }
            err @ PredictorErrors::RowOutOfOrder { .. } => {
                AntEncodeErrors::Compression(format!("{err:?}"))
            }
        }
    }
}

/// Errors from the delta predictor
#[derive(Copy, Clone, Eq, PartialEq)]
pub enum PredictorErrors {
    /// Zero length buffer
    EmptyInput,
    /// Prediction needs at least one column
    ZeroWidth,
    /// Buffer is not a whole number of rows
    ///
    /// - `expected`: the row stride, `width*3`
    /// - `found`: the buffer length
    DimensionMismatch { expected: usize, found: usize },
    /// A row was handed in out of order, the context only
    /// holds the immediately preceding row
    RowOutOfOrder { expected: usize, found: usize }
}

impl Debug for PredictorErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            PredictorErrors::EmptyInput => writeln!(f, "Empty buffer"),
            PredictorErrors::ZeroWidth => writeln!(f, "Width must be at least 1"),
            PredictorErrors::DimensionMismatch { expected, found } => {
                writeln!(
                    f,
                    "Buffer of {found} bytes is not a multiple of the row stride {expected}"
                )
            }
            PredictorErrors::RowOutOfOrder { expected, found } => {
                writeln!(f, "Row {found} given but row {expected} is next")
            }
        }
    }
}

impl Display for PredictorErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl std::error::Error for PredictorErrors {}

/// Errors from a [`Compressor`](crate::Compressor)
pub enum CompressorErrors {
    /// The compressed stream is truncated or corrupt
    MalformedPayload(String),
    /// Decompressed output grew past the allowed limit
    ///
    /// - 1st argument is the limit
    /// - 2nd argument is how many bytes were produced when we stopped
    OutputLimitExceeded(usize, usize),
    Io(std::io::Error)
}

impl Debug for CompressorErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            CompressorErrors::MalformedPayload(reason) => {
                writeln!(f, "Malformed payload: {reason}")
            }
            CompressorErrors::OutputLimitExceeded(limit, current) => writeln!(
                f,
                "Output limit exceeded, set limit was {limit} and output size is {current}"
            ),
            CompressorErrors::Io(err) => writeln!(f, "I/O error {err}")
        }
    }
}

impl Display for CompressorErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl std::error::Error for CompressorErrors {}

impl From<std::io::Error> for CompressorErrors {
    fn from(value: std::io::Error) -> Self {
        CompressorErrors::Io(value)
    }
}
