/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use zune_ant::colorspace::{rgb_to_yuv_buffer, yuv_to_rgb_buffer};
use zune_ant::predictor::delta_decode;
use zune_ant::{
    AntDecodeErrors, AntDecoder, AntEncoder, AntFile, Compressor, CompressorErrors,
    ContainerVariant, ZlibCompressor
};
use zune_core::bit_depth::BitDepth;
use zune_core::bytestream::ZCursor;
use zune_core::colorspace::ColorSpace;
use zune_core::options::{DecoderOptions, EncoderOptions};

use crate::{hash, load_entries, TestEntry};

fn encode(entry: &TestEntry, pixels: &[u8]) -> Vec<u8> {
    let options = EncoderOptions::new(
        entry.width,
        entry.height,
        entry.colorspace.to_colorspace(),
        BitDepth::Eight
    );
    AntEncoder::new(pixels, options).encode_to_vec().unwrap()
}

fn decode(data: &[u8], colorspace: ColorSpace) -> Vec<u8> {
    let mut decoder = AntDecoder::new(ZCursor::new(data));
    decoder.set_output_colorspace(colorspace).unwrap();
    decoder.decode().unwrap()
}

/// What the decoder must produce for these pixels, the color transform
/// applied forwards then backwards
fn expected_pixels(pixels: &[u8], components: usize) -> Vec<u8> {
    let mut yuv = vec![0; pixels.len() / components * 3];
    rgb_to_yuv_buffer(pixels, components, &mut yuv);

    let mut rgb = vec![0; pixels.len()];
    yuv_to_rgb_buffer(&yuv, components, &mut rgb);
    rgb
}

#[test]
#[allow(clippy::uninlined_format_args)]
fn test_ant_scenarios() {
    let entries = load_entries("ant.json");

    let mut error = false;
    let mut failed = Vec::new();

    for entry in &entries {
        let colorspace = entry.colorspace.to_colorspace();
        let components = colorspace.num_components();
        let pixels = entry.pixels();

        let encoded = encode(entry, &pixels);
        let decoded = decode(&encoded, colorspace);

        let file = AntFile::read(&encoded, ContainerVariant::Residual).unwrap();
        assert_eq!(file.header.width as usize, entry.width, "{}", entry.name);
        assert_eq!(file.header.height as usize, entry.height, "{}", entry.name);
        assert_eq!(file.header.bit_depth, Some(24), "{}", entry.name);

        // the residual stream is lossless regardless of the input
        let residuals = ZlibCompressor
            .decompress(&file.payload, entry.width * entry.height * 3)
            .unwrap();
        let mut yuv = vec![0; entry.width * entry.height * 3];
        rgb_to_yuv_buffer(&pixels, components, &mut yuv);
        assert_eq!(delta_decode(&residuals, entry.width).unwrap(), yuv, "{}", entry.name);

        let expected = if entry.exact {
            pixels.clone()
        } else {
            expected_pixels(&pixels, components)
        };

        let matches = if components == 4 {
            // alpha is never stored
            decoded
                .chunks_exact(4)
                .zip(expected.chunks_exact(4))
                .all(|(a, b)| a[..3] == b[..3] && a[3] == 255)
        } else {
            decoded == expected
        };

        if !matches {
            error = true;
            failed.push(entry.to_owned());
            eprintln!(
                "Pixel mismatch for {:?}\nExpected hash {} but found {}\nConfig:{:#?}\n",
                entry.name,
                hash(&expected),
                hash(&decoded),
                entry
            );
        }
    }
    if error {
        panic!("Errors found during test decoding\n {:#?}", failed);
    }
}

#[test]
fn test_black_2x2_residuals() {
    let pixels = [0_u8; 12];
    let options = EncoderOptions::new(2, 2, ColorSpace::RGB, BitDepth::Eight);
    let encoded = AntEncoder::new(&pixels, options).encode_to_vec().unwrap();

    assert_eq!(
        &encoded[..13],
        &[b'A', b'N', b'T', 0, 0, 0, 0, 2, 0, 0, 0, 2, 24]
    );
    let residuals = ZlibCompressor.decompress(&encoded[13..], 12).unwrap();
    // row 0 against zero, row 1 against row 0
    assert_eq!(residuals, [0, 128, 128, 0, 128, 128, 0, 0, 0, 0, 0, 0]);

    assert_eq!(decode(&encoded, ColorSpace::RGB), [0; 12]);
}

#[test]
fn test_luma_column_residuals() {
    let pixels = [10, 10, 10, 20, 20, 20, 30, 30, 30];
    let options = EncoderOptions::new(1, 3, ColorSpace::RGB, BitDepth::Eight);
    let encoded = AntEncoder::new(&pixels, options).encode_to_vec().unwrap();

    let residuals = ZlibCompressor.decompress(&encoded[13..], 9).unwrap();
    let luma: Vec<u8> = residuals.chunks_exact(3).map(|x| x[0]).collect();
    assert_eq!(luma, [10, 10, 10]);

    assert_eq!(decode(&encoded, ColorSpace::RGB), pixels);
}

#[test]
fn test_encoding_is_deterministic() {
    for entry in load_entries("ant.json") {
        let pixels = entry.pixels();
        assert_eq!(
            hash(&encode(&entry, &pixels)),
            hash(&encode(&entry, &pixels)),
            "{}",
            entry.name
        );
    }
}

#[test]
fn test_compressible_round_trip() {
    for (value, ratio) in [(128_u8, 100), (0, 100)] {
        let pixels = vec![value; 64 * 64 * 3];
        let options = EncoderOptions::new(64, 64, ColorSpace::RGB, BitDepth::Eight);
        let encoded = AntEncoder::new(&pixels, options).encode_to_vec().unwrap();

        assert!(encoded.len() * ratio < pixels.len(), "{} bytes", encoded.len());
        assert_eq!(decode(&encoded, ColorSpace::RGB), pixels);
    }

    // a gray ramp repeated on every row, only the first row carries data
    let pixels: Vec<u8> = (0..64 * 48)
        .flat_map(|i| {
            let v = (i % 64 * 4) as u8;
            [v, v, v]
        })
        .collect();
    let options = EncoderOptions::new(64, 48, ColorSpace::RGB, BitDepth::Eight);
    let encoded = AntEncoder::new(&pixels, options).encode_to_vec().unwrap();

    assert!(encoded.len() * 10 < pixels.len(), "{} bytes", encoded.len());
    assert_eq!(decode(&encoded, ColorSpace::RGB), pixels);
}

#[test]
fn test_truncated_files() {
    let entry = load_entries("ant.json")
        .into_iter()
        .find(|e| e.name == "gradient")
        .unwrap();
    let encoded = encode(&entry, &entry.pixels());

    // one byte short of the payload
    let result = AntDecoder::new(ZCursor::new(&encoded[..encoded.len() - 1])).decode();
    assert!(matches!(result, Err(AntDecodeErrors::MalformedPayload(_))));

    // header only
    let result = AntDecoder::new(ZCursor::new(&encoded[..13])).decode();
    assert!(matches!(result, Err(AntDecodeErrors::MalformedPayload(_))));

    // not even a header
    let result = AntDecoder::new(ZCursor::new(&encoded[..10])).decode();
    assert!(matches!(result, Err(AntDecodeErrors::IoErrors(_))));
}

#[test]
fn test_foreign_signature() {
    let mut png_like = vec![0x89, b'P', b'N', b'G'];
    png_like.extend_from_slice(&[0xFF; 64]);

    let mut decoder = AntDecoder::new(ZCursor::new(&png_like));
    assert!(matches!(
        decoder.decode_headers(),
        Err(AntDecodeErrors::InvalidSignature)
    ));
    assert_eq!(decoder.dimensions(), None);
    assert_eq!(decoder.output_buffer_size(), None);
}

#[test]
fn test_headers_without_payload_decoding() {
    let pixels = vec![77_u8; 40 * 30 * 3];
    let options = EncoderOptions::new(40, 30, ColorSpace::RGB, BitDepth::Eight);
    let encoded = AntEncoder::new(&pixels, options).encode_to_vec().unwrap();

    let mut decoder = AntDecoder::new(ZCursor::new(&encoded));
    decoder.decode_headers().unwrap();

    assert_eq!(decoder.dimensions(), Some((40, 30)));
    assert_eq!(decoder.colorspace(), Some(ColorSpace::RGB));
    assert_eq!(decoder.bit_depth(), BitDepth::Eight);
    assert_eq!(decoder.output_buffer_size(), Some(40 * 30 * 3));

    decoder.set_output_colorspace(ColorSpace::RGBA).unwrap();
    assert_eq!(decoder.output_buffer_size(), Some(40 * 30 * 4));
}

#[test]
fn test_decode_limits() {
    let pixels = vec![0_u8; 100 * 3];
    let options = EncoderOptions::new(100, 1, ColorSpace::RGB, BitDepth::Eight);
    let encoded = AntEncoder::new(&pixels, options).encode_to_vec().unwrap();

    let options = DecoderOptions::default().set_max_width(99);
    let result = AntDecoder::new_with_options(ZCursor::new(&encoded), options).decode();
    assert!(matches!(
        result,
        Err(AntDecodeErrors::TooLargeDimensions { width: 100, .. })
    ));

    let options = DecoderOptions::default().set_max_width(100);
    let result = AntDecoder::new_with_options(ZCursor::new(&encoded), options).decode();
    assert_eq!(result.unwrap(), pixels);
}

/// Stores data as is, no compression
struct StoreCompressor;

impl Compressor for StoreCompressor {
    fn compress(&self, data: &[u8], _level: u8) -> Result<Vec<u8>, CompressorErrors> {
        Ok(data.to_vec())
    }

    fn decompress(&self, data: &[u8], limit: usize) -> Result<Vec<u8>, CompressorErrors> {
        if data.len() > limit {
            return Err(CompressorErrors::OutputLimitExceeded(limit, data.len()));
        }
        Ok(data.to_vec())
    }
}

#[test]
fn test_custom_compressor() {
    let pixels = [0_u8; 12];
    let options = EncoderOptions::new(2, 2, ColorSpace::RGB, BitDepth::Eight);

    let encoded = AntEncoder::new_with_compressor(&pixels, options, StoreCompressor)
        .encode_to_vec()
        .unwrap();

    // header followed by the raw residuals
    assert_eq!(encoded.len(), 13 + 12);
    assert_eq!(&encoded[13..], &[0, 128, 128, 0, 128, 128, 0, 0, 0, 0, 0, 0]);

    let mut decoder = AntDecoder::new_with_compressor(
        ZCursor::new(&encoded),
        DecoderOptions::default(),
        StoreCompressor
    );
    assert_eq!(decoder.decode().unwrap(), pixels);

    // the default compressor can't read it
    let result = AntDecoder::new(ZCursor::new(&encoded)).decode();
    assert!(matches!(result, Err(AntDecodeErrors::MalformedPayload(_))));
}

#[test]
fn test_concurrent_calls() {
    let entries = load_entries("ant.json");

    let serial: Vec<(u128, u128)> = entries
        .iter()
        .map(|entry| {
            let encoded = encode(entry, &entry.pixels());
            let decoded = decode(&encoded, entry.colorspace.to_colorspace());
            (hash(&encoded), hash(&decoded))
        })
        .collect();

    let parallel: Vec<(u128, u128)> = std::thread::scope(|s| {
        let handles: Vec<_> = entries
            .iter()
            .map(|entry| {
                s.spawn(move || {
                    let encoded = encode(entry, &entry.pixels());
                    let decoded = decode(&encoded, entry.colorspace.to_colorspace());
                    (hash(&encoded), hash(&decoded))
                })
            })
            .collect();

        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(serial, parallel);
}
