/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![allow(unused_imports, unused)]

use std::fs::read;
use std::path::{Path, PathBuf};

use nanorand::{Rng, WyRand};
use serde::Deserialize;
use xxhash_rust::xxh3::xxh3_128;
use zune_core::colorspace::ColorSpace;

mod ant;

#[derive(Copy, Clone, Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonColorspace {
    RGB,
    RGBA
}

impl JsonColorspace {
    pub fn to_colorspace(self) -> ColorSpace {
        match self {
            Self::RGB => ColorSpace::RGB,
            Self::RGBA => ColorSpace::RGBA
        }
    }
}

#[derive(Copy, Clone, Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pattern {
    Black,
    Flat,
    GrayRamp,
    Checker,
    Gradient,
    Noise
}

#[derive(Clone, Deserialize, Debug)]
pub struct TestEntry {
    pub name:       String,
    pub width:      usize,
    pub height:     usize,
    pub pattern:    Pattern,
    pub colorspace: JsonColorspace,
    /// Whether the whole pipeline must give back the exact input
    pub exact:      bool,
    pub comment:    Option<String>
}

impl TestEntry {
    /// Build the pixels this entry describes
    ///
    /// Alpha, when present, is opaque except for noise
    pub fn pixels(&self) -> Vec<u8> {
        let components = self.colorspace.to_colorspace().num_components();
        let mut pixels = vec![0_u8; self.width * self.height * components];
        let mut rand = WyRand::new_seed(self.width as u64 * 31 + self.height as u64);

        for (i, pix) in pixels.chunks_exact_mut(components).enumerate() {
            let (x, y) = (i % self.width, i / self.width);

            let rgb = match self.pattern {
                Pattern::Black => [0, 0, 0],
                Pattern::Flat => [128, 128, 128],
                Pattern::GrayRamp => {
                    let v = (i % 256) as u8;
                    [v, v, v]
                }
                Pattern::Checker => {
                    let v = if (x + y) % 2 == 0 { 30 } else { 220 };
                    [v, v, v]
                }
                Pattern::Gradient => [(x * 4) as u8, (y * 5) as u8, ((x + y) * 2) as u8],
                Pattern::Noise => {
                    let mut rgb = [0; 3];
                    rand.fill(&mut rgb);
                    rgb
                }
            };
            pix[..3].copy_from_slice(&rgb);

            if components == 4 {
                pix[3] = match self.pattern {
                    Pattern::Noise => rand.generate(),
                    _ => 255
                };
            }
        }
        pixels
    }
}

pub fn sample_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests")
}

pub fn load_entries(name: &str) -> Vec<TestEntry> {
    let json_file = read(sample_path().join(name)).unwrap();

    serde_json::from_slice(&json_file).unwrap()
}

fn hash(contents: &[u8]) -> u128 {
    xxh3_128(contents)
}
