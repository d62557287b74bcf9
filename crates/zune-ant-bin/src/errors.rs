/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Formatter};

use zune_ant::{AntDecodeErrors, AntEncodeErrors};

/// Anything that can stop a command from completing
pub enum AntBinErrors {
    DecodeErrors(AntDecodeErrors),
    EncodeErrors(AntEncodeErrors),
    IoErrors(std::io::Error),
    GenericString(String)
}

impl Debug for AntBinErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            AntBinErrors::DecodeErrors(err) => writeln!(f, "Decode error: {err:?}"),
            AntBinErrors::EncodeErrors(err) => writeln!(f, "Encode error: {err:?}"),
            AntBinErrors::IoErrors(err) => writeln!(f, "I/O error: {err}"),
            AntBinErrors::GenericString(err) => writeln!(f, "{err}")
        }
    }
}

impl From<AntDecodeErrors> for AntBinErrors {
    fn from(value: AntDecodeErrors) -> Self {
        AntBinErrors::DecodeErrors(value)
    }
}

impl From<AntEncodeErrors> for AntBinErrors {
    fn from(value: AntEncodeErrors) -> Self {
        AntBinErrors::EncodeErrors(value)
    }
}

impl From<std::io::Error> for AntBinErrors {
    fn from(value: std::io::Error) -> Self {
        AntBinErrors::IoErrors(value)
    }
}
