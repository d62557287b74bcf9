/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Container framing, header plus an unframed payload
use zune_core::bytestream::{
    ZByteIoError, ZByteReaderTrait, ZByteWriterTrait, ZCursor, ZReader, ZWriter
};

use crate::constants::{ANT_BIT_DEPTH, ANT_MAGIC, ANT_PLAIN_HEADER_SIZE, ANT_RESIDUAL_HEADER_SIZE};
use crate::errors::AntDecodeErrors;

/// Header layouts
///
/// The two layouts are not distinguishable from the bytes alone, the
/// reader has to be told which one to expect.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ContainerVariant {
    /// Signature, width and height, the payload is an externally
    /// encoded image
    Plain,
    /// Signature, width, height and bit depth, the payload is a
    /// compressed residual stream. This is what [`AntEncoder`](crate::AntEncoder) writes
    Residual
}

impl ContainerVariant {
    /// Size of the header in bytes, including the signature
    pub const fn header_size(self) -> usize {
        match self {
            ContainerVariant::Plain => ANT_PLAIN_HEADER_SIZE,
            ContainerVariant::Residual => ANT_RESIDUAL_HEADER_SIZE
        }
    }
}

/// Fixed size ANT header
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct AntHeader {
    pub width:     u32,
    pub height:    u32,
    /// Present only in the residual variant
    pub bit_depth: Option<u8>
}

impl AntHeader {
    /// Header for the residual variant, bit depth 24
    pub const fn new(width: u32, height: u32) -> AntHeader {
        AntHeader {
            width,
            height,
            bit_depth: Some(ANT_BIT_DEPTH)
        }
    }

    /// Header for the plain variant
    pub const fn new_plain(width: u32, height: u32) -> AntHeader {
        AntHeader {
            width,
            height,
            bit_depth: None
        }
    }

    pub const fn variant(&self) -> ContainerVariant {
        match self.bit_depth {
            Some(_) => ContainerVariant::Residual,
            None => ContainerVariant::Plain
        }
    }

    /// Read a header from the start of `reader`
    ///
    /// The signature is validated before anything else is parsed.
    /// On success the reader is positioned at the first payload byte.
    pub fn read<T: ZByteReaderTrait>(
        reader: &mut ZReader<T>, variant: ContainerVariant
    ) -> Result<AntHeader, AntDecodeErrors> {
        if reader.eof()? {
            return Err(AntDecodeErrors::EmptyInput);
        }
        // fewer than four bytes can't hold a signature either
        let magic = reader
            .read_fixed_bytes_or_error::<4>()
            .map_err(|_| AntDecodeErrors::InvalidSignature)?;

        if magic != ANT_MAGIC {
            return Err(AntDecodeErrors::InvalidSignature);
        }

        let width = reader.get_u32_be_err()?;
        let height = reader.get_u32_be_err()?;

        let bit_depth = match variant {
            ContainerVariant::Plain => None,
            ContainerVariant::Residual => Some(reader.read_u8_err()?)
        };

        Ok(AntHeader {
            width,
            height,
            bit_depth
        })
    }

    /// Write the header, signature first
    pub fn write<T: ZByteWriterTrait>(&self, writer: &mut ZWriter<T>) -> Result<(), ZByteIoError> {
        writer.write_all(&ANT_MAGIC)?;
        writer.write_u32_be_err(self.width)?;
        writer.write_u32_be_err(self.height)?;

        if let Some(depth) = self.bit_depth {
            writer.write_u8_err(depth)?;
        }
        Ok(())
    }
}

/// A framed ANT file, header and the still compressed payload
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AntFile {
    pub header:  AntHeader,
    pub payload: Vec<u8>
}

impl AntFile {
    pub fn new(header: AntHeader, payload: Vec<u8>) -> AntFile {
        AntFile { header, payload }
    }

    /// Split `bytes` into header and payload
    ///
    /// Everything after the header, unsliced, is the payload.
    ///
    /// # Example
    /// ```
    /// use zune_ant::{AntFile, AntHeader, ContainerVariant};
    ///
    /// let file = AntFile::new(AntHeader::new(2, 3), vec![1, 2, 3]);
    /// let bytes = file.to_bytes().unwrap();
    ///
    /// assert_eq!(&bytes[..4], b"ANT\0");
    /// assert_eq!(AntFile::read(&bytes, ContainerVariant::Residual).unwrap(), file);
    /// ```
    pub fn read(bytes: &[u8], variant: ContainerVariant) -> Result<AntFile, AntDecodeErrors> {
        let mut reader = ZReader::new(ZCursor::new(bytes));

        let header = AntHeader::read(&mut reader, variant)?;
        let mut payload = Vec::new();
        reader.read_all(&mut payload)?;

        Ok(AntFile { header, payload })
    }

    /// Write header and payload to `sink` returning the number of bytes written
    pub fn write<T: ZByteWriterTrait>(&self, sink: T) -> Result<usize, ZByteIoError> {
        let mut writer = ZWriter::new(sink);

        self.header.write(&mut writer)?;
        writer.write_all(&self.payload)?;

        Ok(writer.bytes_written())
    }

    /// Serialize into a new vector
    pub fn to_bytes(&self) -> Result<Vec<u8>, ZByteIoError> {
        let mut output =
            Vec::with_capacity(self.header.variant().header_size() + self.payload.len());
        self.write(&mut output)?;
        Ok(output)
    }
}
