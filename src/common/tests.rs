use super::*;

use std::io;

#[test]
fn test_tool_name() {
    assert_eq!(tool_name("fencode"), "encode");
    assert_eq!(tool_name("fdecode"), "decode");
    assert_eq!(tool_name("decode"), "decode");
}

#[test]
fn test_options_before_operands_accepted() {
    assert!(options_before_operands(["in", "out"]));
    assert!(options_before_operands(["-b", "in", "out"]));
    assert!(options_before_operands(["-p", "-b", "in", "out"]));
    assert!(options_before_operands(["-bp", "in", "out"]));
    assert!(options_before_operands(["-", "-"]));
    assert!(options_before_operands(["-b", "-", "out"]));
    assert!(options_before_operands(Vec::<&str>::new()));
}

#[test]
fn test_options_after_operand_rejected() {
    assert!(!options_before_operands(["in", "out", "-p"]));
    assert!(!options_before_operands(["in", "-b", "out"]));
    assert!(!options_before_operands(["-b", "in", "-p", "out"]));
    assert!(!options_before_operands(["-", "-b", "out"]));
}

#[test]
fn test_io_error_msg_strips_os_suffix() {
    let e = io::Error::from_raw_os_error(libc::ENOENT);
    assert_eq!(io_error_msg(&e), "No such file or directory");
}

#[test]
fn test_diagnostic_shapes() {
    let usage = Error::Usage("usage: decode <input-file> <output-file>".to_string());
    assert_eq!(diagnostic("decode", &usage), "usage: decode <input-file> <output-file>");

    let invalid = Error::InvalidInput { offset: 2, byte: Some(b'!') };
    assert_eq!(diagnostic("decode", &invalid), "decode: Invalid input file");
}

#[test]
fn test_broken_pipe_is_a_failure() {
    let err = Error::io("-", io::Error::from(io::ErrorKind::BrokenPipe));
    assert_eq!(err.exit_code(), 1);
    assert!(diagnostic("encode", &err).starts_with("encode: -: "));
}
