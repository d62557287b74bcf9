/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::{File, OpenOptions};
use std::io::{stdin, BufRead, BufWriter};
use std::path::Path;

use log::info;

use crate::cmd_parsers::global_options::CmdOptions;
use crate::errors::AntBinErrors;

pub fn verify_file_paths(
    in_path: &Path, out_path: &Path, cmd_opts: &CmdOptions
) -> Result<(), AntBinErrors> {
    if in_path == out_path {
        return Err(AntBinErrors::GenericString(format!(
            "Cannot use {:?} as both input and output",
            in_path
        )));
    }

    if !in_path.exists() {
        return Err(AntBinErrors::GenericString(format!(
            "Path {:?}, does not exist",
            in_path
        )));
    }

    if !in_path.is_file() {
        return Err(AntBinErrors::GenericString(format!(
            "Path {:?} is not a file",
            in_path
        )));
    }

    if out_path.exists() {
        if cmd_opts.override_files {
            info!("Overwriting path {:?} ", out_path);
        } else {
            println!("File {:?} exists, overwrite [y/N]", out_path);
            let mut result = String::new();

            stdin().lock().read_line(&mut result)?;

            if result.trim() != "y" {
                return Err(AntBinErrors::GenericString(format!(
                    "Not overwriting file {:?}",
                    out_path
                )));
            }
        }
    }
    Ok(())
}

pub fn create_output(out_path: &Path) -> Result<BufWriter<File>, AntBinErrors> {
    let file = OpenOptions::new()
        .write(true)
        .truncate(true)
        .create(true)
        .open(out_path)?;

    Ok(BufWriter::new(file))
}
