/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, Command};

use crate::cmd_args::help_strings::{DECODE_HELP, ENCODE_HELP, PROBE_HELP};

pub(crate) mod help_strings;

#[rustfmt::skip]
fn input_arg() -> Arg {
    Arg::new("in")
        .short('i')
        .long("input")
        .help("Input file to read data from")
        .value_parser(value_parser!(PathBuf))
        .required(true)
}

#[rustfmt::skip]
fn output_arg() -> Arg {
    Arg::new("out")
        .short('o')
        .long("output")
        .help("Output to write the data to")
        .value_parser(value_parser!(PathBuf))
        .required(true)
}

#[rustfmt::skip]
fn rgba_arg(help: &'static str) -> Arg {
    Arg::new("rgba")
        .long("rgba")
        .action(ArgAction::SetTrue)
        .help(help)
}

#[rustfmt::skip]
fn encode_cmd() -> Command {
    Command::new("encode")
        .about("Encode raw interleaved pixels into an ANT file")
        .long_about(ENCODE_HELP)
        .arg(input_arg())
        .arg(output_arg())
        .arg(Arg::new("width")
            .long("width")
            .help("Image width in pixels")
            .value_parser(value_parser!(u32).range(1..))
            .required(true))
        .arg(Arg::new("height")
            .long("height")
            .help("Image height in pixels")
            .value_parser(value_parser!(u32).range(1..))
            .required(true))
        .arg(rgba_arg("Input has four channels per pixel, alpha is dropped"))
        .arg(Arg::new("level")
            .long("level")
            .help_heading("ADVANCED")
            .help("Compression level, 0 is fastest and 9 the smallest")
            .value_parser(value_parser!(u8).range(0..=9))
            .default_value("9"))
}

#[rustfmt::skip]
fn decode_cmd() -> Command {
    Command::new("decode")
        .about("Decode an ANT file into raw interleaved pixels")
        .long_about(DECODE_HELP)
        .arg(input_arg())
        .arg(output_arg())
        .arg(rgba_arg("Write four channels per pixel, alpha is fully opaque"))
        .arg(Arg::new("max-width")
            .long("max-width")
            .help_heading("ADVANCED")
            .help("Maximum width of images allowed, 16384 if not given")
            .value_parser(value_parser!(usize)))
        .arg(Arg::new("max-height")
            .long("max-height")
            .help_heading("ADVANCED")
            .help("Maximum height of images allowed, 16384 if not given")
            .value_parser(value_parser!(usize)))
        .arg(Arg::new("strict")
            .long("strict")
            .help_heading("ADVANCED")
            .action(ArgAction::SetTrue)
            .help("Treat most warnings as errors"))
}

#[rustfmt::skip]
fn probe_cmd() -> Command {
    Command::new("probe")
        .about("Print header information of ANT files as json")
        .long_about(PROBE_HELP)
        .arg(Arg::new("in")
            .short('i')
            .long("input")
            .help("Input files to probe")
            .value_parser(value_parser!(PathBuf))
            .action(ArgAction::Append)
            .required(true))
}

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("zune-ant")
        .about("Encode and decode ANT images")
        .subcommand(encode_cmd())
        .subcommand(decode_cmd())
        .subcommand(probe_cmd())
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(Arg::new("debug")
            .long("debug")
            .global(true)
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .global(true)
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .global(true)
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .global(true)
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display information about the coding options"))
        .arg(Arg::new("all-yes")
            .long("yes")
            .short('y')
            .global(true)
            .action(ArgAction::SetTrue)
            .help("Overwrite existing output files without asking"))
}
