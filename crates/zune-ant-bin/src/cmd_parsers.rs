use clap::ArgMatches;
use zune_core::options::DecoderOptions;

pub mod global_options;

/// Decoder options from the decode subcommand, limits that weren't
/// given keep the library defaults
pub fn get_decoder_options(options: &ArgMatches) -> DecoderOptions {
    let mut decoder_options = DecoderOptions::default().set_strict_mode(options.get_flag("strict"));

    if let Some(max_width) = options.get_one::<usize>("max-width") {
        decoder_options = decoder_options.set_max_width(*max_width);
    }
    if let Some(max_height) = options.get_one::<usize>("max-height") {
        decoder_options = decoder_options.set_max_height(*max_height);
    }
    decoder_options
}
