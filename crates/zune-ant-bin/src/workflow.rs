/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::Write;
use std::path::PathBuf;

use clap::ArgMatches;
use log::{debug, info};
use zune_ant::{AntDecoder, AntEncoder};
use zune_core::bit_depth::BitDepth;
use zune_core::bytestream::ZCursor;
use zune_core::colorspace::ColorSpace;
use zune_core::options::EncoderOptions;

use crate::cmd_parsers::get_decoder_options;
use crate::cmd_parsers::global_options::CmdOptions;
use crate::errors::AntBinErrors;
use crate::file_io::{create_output, verify_file_paths};
use crate::probe_files::probe_input_files;

fn in_out_paths(args: &ArgMatches) -> Result<(&PathBuf, &PathBuf), AntBinErrors> {
    let in_file = args
        .get_one::<PathBuf>("in")
        .ok_or(AntBinErrors::GenericString("No input file".to_string()))?;
    let out_file = args
        .get_one::<PathBuf>("out")
        .ok_or(AntBinErrors::GenericString("No output file".to_string()))?;

    Ok((in_file, out_file))
}

fn colorspace(args: &ArgMatches) -> ColorSpace {
    if args.get_flag("rgba") {
        ColorSpace::RGBA
    } else {
        ColorSpace::RGB
    }
}

fn encode_file(args: &ArgMatches, cmd_opts: &CmdOptions) -> Result<(), AntBinErrors> {
    let (in_file, out_file) = in_out_paths(args)?;
    verify_file_paths(in_file, out_file, cmd_opts)?;

    let (width, height) = match (args.get_one::<u32>("width"), args.get_one::<u32>("height")) {
        (Some(w), Some(h)) => (*w as usize, *h as usize),
        _ => {
            return Err(AntBinErrors::GenericString(
                "Width and height are required for encoding".to_string()
            ))
        }
    };
    let colorspace = colorspace(args);

    info!("Reading file to memory");
    let pixels = std::fs::read(in_file)?;
    debug!("Treating {:?} as raw {:?} pixels", in_file, colorspace);

    let options = EncoderOptions::new(width, height, colorspace, BitDepth::Eight);
    let mut encoder = AntEncoder::new(&pixels, options);

    if let Some(level) = args.get_one::<u8>("level") {
        encoder.set_compression_level(*level);
    }

    let encoded = encoder.encode_to_vec()?;

    let mut writer = create_output(out_file)?;
    writer.write_all(&encoded)?;
    writer.flush()?;

    info!("Wrote {} bytes to {:?}", encoded.len(), out_file);
    Ok(())
}

fn decode_file(args: &ArgMatches, cmd_opts: &CmdOptions) -> Result<(), AntBinErrors> {
    let (in_file, out_file) = in_out_paths(args)?;
    verify_file_paths(in_file, out_file, cmd_opts)?;

    info!("Reading file to memory");
    let data = std::fs::read(in_file)?;

    let options = get_decoder_options(args);
    let mut decoder = AntDecoder::new_with_options(ZCursor::new(&data), options);
    decoder.set_output_colorspace(colorspace(args))?;

    let pixels = decoder.decode()?;

    if let Some((width, height)) = decoder.dimensions() {
        info!("Decoded {width}x{height} image");
    }

    let mut writer = create_output(out_file)?;
    writer.write_all(&pixels)?;
    writer.flush()?;

    info!("Wrote {} bytes to {:?}", pixels.len(), out_file);
    Ok(())
}

pub(crate) fn create_and_exec_workflow_from_cmd(
    args: &ArgMatches, cmd_opts: &CmdOptions
) -> Result<(), AntBinErrors> {
    info!("Creating workflows from input");

    match args.subcommand() {
        Some(("encode", sub_args)) => encode_file(sub_args, cmd_opts),
        Some(("decode", sub_args)) => decode_file(sub_args, cmd_opts),
        Some(("probe", sub_args)) => probe_input_files(sub_args),
        Some((name, _)) => Err(AntBinErrors::GenericString(format!(
            "Unknown command {name}"
        ))),
        None => Err(AntBinErrors::GenericString("No command given".to_string()))
    }
}
