pub static ENCODE_HELP: &str = "Encode raw interleaved pixels into an ANT file

The input carries no header, so width and height must be given.
Its size must be exactly width*height*3 bytes, or width*height*4
with --rgba, in which case the alpha channel is discarded.";

pub static DECODE_HELP: &str = "Decode an ANT file into raw interleaved pixels

The output is width*height*3 bytes of RGB, or width*height*4
with --rgba. Use probe to find out the dimensions.";

pub static PROBE_HELP: &str = "Print header information of ANT files

Only headers are read, the payload is not decompressed.";
