use std::ffi::OsStr;
use std::process;

use crate::error::Error;

pub mod io;

/// The path that stands for stdin (input side) or stdout (output side).
pub const STDIO_PATH: &str = "-";

/// Get the user-facing tool name by stripping the 'f' prefix.
/// e.g., "fencode" -> "encode", "fdecode" -> "decode"
#[inline]
pub fn tool_name(binary_name: &str) -> &str {
    binary_name.strip_prefix('f').unwrap_or(binary_name)
}

/// Reset SIGPIPE to default behavior (SIG_DFL).
/// Rust sets SIGPIPE to SIG_IGN by default, so writing to a closed pipe
/// would surface as an EPIPE error instead of a quiet exit.
/// This must be called at the start of main().
#[inline]
pub fn reset_sigpipe() {
    #[cfg(unix)]
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}

/// Format an IO error message without the "(os error N)" suffix,
/// so diagnostics read "No such file or directory" like perror(3).
pub fn io_error_msg(e: &std::io::Error) -> String {
    if let Some(raw) = e.raw_os_error() {
        let os_err = std::io::Error::from_raw_os_error(raw);
        let msg = format!("{}", os_err);
        msg.replace(&format!(" (os error {})", raw), "")
    } else {
        format!("{}", e)
    }
}

/// One-line stderr diagnostic for `err`. Usage errors are the bare usage
/// line; everything else is prefixed with the tool name.
pub fn diagnostic(tool: &str, err: &Error) -> String {
    match err {
        Error::Usage(usage) => usage.clone(),
        _ => format!("{}: {}", tool, err),
    }
}

/// Report `err` on stderr and terminate the process with its exit code.
pub fn exit_with(tool: &str, err: &Error) -> ! {
    eprintln!("{}", diagnostic(tool, err));
    process::exit(err.exit_code())
}

/// True if no option follows the first operand, so the command line has
/// the `tool [-x]... <operand>...` shape. A lone "-" is an operand (stdio).
pub fn options_before_operands<I, S>(args: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut seen_operand = false;
    for arg in args {
        let bytes = arg.as_ref().as_encoded_bytes();
        let is_option = bytes.len() > 1 && bytes[0] == b'-';
        if is_option && seen_operand {
            return false;
        }
        seen_operand |= !is_option;
    }
    true
}

#[cfg(test)]
mod tests;
