/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

/// `ANT\0`
pub const ANT_MAGIC: [u8; 4] = *b"ANT\0";

/// Signature + width + height
pub const ANT_PLAIN_HEADER_SIZE: usize = 4 + 4 + 4;

/// Signature + width + height + bit depth
pub const ANT_RESIDUAL_HEADER_SIZE: usize = ANT_PLAIN_HEADER_SIZE + 1;

/// Bits per pixel stored in the residual header, three 8 bit channels
pub const ANT_BIT_DEPTH: u8 = 24;

/// Channels kept by the codec, alpha is never stored
pub const ANT_CHANNELS: usize = 3;

/// Offset added to the chroma channels so they fit an unsigned byte
pub const CHROMA_OFFSET: f64 = 128.0;

/// Default deflate level used when encoding, the maximum zlib supports
pub const DEFAULT_COMPRESSION_LEVEL: u8 = 9;
