/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::{Path, PathBuf};

use clap::ArgMatches;
use log::warn;
use zune_ant::{AntDecodeErrors, AntHeader, ContainerVariant};
use zune_core::bytestream::{ZCursor, ZReader};

use crate::errors::AntBinErrors;
use crate::serde::Metadata;

/// Read the header of an in memory ANT file
///
/// Only the header is parsed so no dimension limits apply
fn file_metadata(file: &Path, data: &[u8]) -> Result<Metadata, AntDecodeErrors> {
    let mut reader = ZReader::new(ZCursor::new(data));
    let header = AntHeader::read(&mut reader, ContainerVariant::Residual)?;

    Ok(Metadata::new(
        file.as_os_str().to_os_string(),
        data.len() as u64,
        header
    ))
}

/// Probe input files, extract metadata, and print to standard output.
pub fn probe_input_files(args: &ArgMatches) -> Result<(), AntBinErrors> {
    let Some(files) = args.get_many::<PathBuf>("in") else {
        return Ok(());
    };

    for in_file in files {
        if !in_file.exists() {
            warn!("Path {:?} does not exist, skipping", in_file);
            continue;
        }
        let data = std::fs::read(in_file)?;

        match file_metadata(in_file, &data) {
            Ok(metadata) => {
                let json = serde_json::to_string_pretty(&metadata)
                    .map_err(|e| AntBinErrors::GenericString(e.to_string()))?;
                println!("{json}");
            }
            Err(err) => warn!("Could not probe {:?}: {:?}", in_file, err)
        }
    }
    Ok(())
}
