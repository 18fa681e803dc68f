use std::path::PathBuf;

use clap::Parser;
use clap::error::ErrorKind;

use sixbit::codec::decode_file;
use sixbit::common::{exit_with, reset_sigpipe, tool_name};
use sixbit::error::Error;

const USAGE: &str = "usage: decode <input-file> <output-file>";

#[derive(Parser)]
#[command(
    name = "decode",
    about = "Decode 6-bit symbol text back into the original bytes.",
    after_help = "The input may be wrapped or not, padded or not. Any character other\n\
        than the 64 symbols, '=' and newline is an error. Use - for stdin or stdout.",
    override_usage = "decode <input-file> <output-file>",
    version
)]
struct Cli {
    /// Text file to decode
    input: PathBuf,

    /// File to write the bytes to
    output: PathBuf,
}

fn main() {
    reset_sigpipe();
    let tool = tool_name(env!("CARGO_BIN_NAME"));

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(_) => exit_with(tool, &Error::Usage(USAGE.to_string())),
    };

    if let Err(e) = decode_file(&cli.input, &cli.output) {
        exit_with(tool, &e);
    }
}
