use std::path::PathBuf;

use clap::Parser;
use clap::error::ErrorKind;

use sixbit::codec::{EncodeOptions, encode_file};
use sixbit::common::{exit_with, options_before_operands, reset_sigpipe, tool_name};
use sixbit::error::Error;

const USAGE: &str = "usage: encode [-b] [-p] <input-file> <output-file>";

#[derive(Parser)]
#[command(
    name = "encode",
    about = "Encode a binary file as 6-bit symbol text.",
    after_help = "Output lines are broken every 76 symbols and the last group is\n\
        padded with '=' unless -b / -p say otherwise. Use - for stdin or stdout.",
    override_usage = "encode [-b] [-p] <input-file> <output-file>",
    args_override_self = true,
    version
)]
struct Cli {
    /// Do not insert line breaks
    #[arg(short = 'b')]
    no_line_breaks: bool,

    /// Do not pad the final group with '='
    #[arg(short = 'p')]
    no_padding: bool,

    /// File to encode
    input: PathBuf,

    /// File to write the text to
    output: PathBuf,
}

fn main() {
    reset_sigpipe();
    let tool = tool_name(env!("CARGO_BIN_NAME"));

    // -b / -p are only recognized ahead of the two file operands
    if !options_before_operands(std::env::args_os().skip(1)) {
        exit_with(tool, &Error::Usage(USAGE.to_string()));
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(_) => exit_with(tool, &Error::Usage(USAGE.to_string())),
    };

    let opts = EncodeOptions {
        line_breaks: !cli.no_line_breaks,
        padding: !cli.no_padding,
        ..EncodeOptions::default()
    };

    if let Err(e) = encode_file(&cli.input, &cli.output, &opts) {
        exit_with(tool, &e);
    }
}
