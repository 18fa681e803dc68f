use super::*;

use crate::error::Error;

#[test]
fn test_new_is_empty() {
    let buf = ByteBuffer::new();
    assert!(buf.is_empty());
    assert_eq!(buf.len(), 0);
    assert_eq!(buf.capacity(), INITIAL_CAPACITY);
}

#[test]
fn test_append_keeps_order() {
    let mut buf = ByteBuffer::new();
    for b in b"Hello, world" {
        buf.append(*b);
    }
    assert_eq!(buf.as_slice(), b"Hello, world");
}

#[test]
fn test_append_doubles_when_full() {
    let mut buf = ByteBuffer::new();
    for i in 0..4 {
        buf.append(i);
    }
    assert_eq!(buf.capacity(), 5);
    buf.append(4);
    assert_eq!(buf.len(), 5);
    assert_eq!(buf.capacity(), 10);
    for i in 5..10 {
        buf.append(i);
    }
    assert_eq!(buf.capacity(), 20);
}

#[test]
fn test_len_never_exceeds_capacity() {
    let mut buf = ByteBuffer::new();
    for i in 0..1000u32 {
        buf.append(i as u8);
        assert!(buf.len() < buf.capacity());
    }
    assert_eq!(buf.len(), 1000);
}

#[test]
fn test_extend_matches_repeated_append() {
    let bytes: Vec<u8> = (0..=255).collect();
    let mut a = ByteBuffer::new();
    for b in &bytes {
        a.append(*b);
    }
    let mut b = ByteBuffer::new();
    b.extend_from_slice(&bytes);
    assert_eq!(a, b);
    assert_eq!(ByteBuffer::from_vec(bytes), a);
}

#[test]
fn test_from_vec_takes_storage_without_copy() {
    let data: Vec<u8> = (0..100).collect();
    let ptr = data.as_ptr();
    let mut buf = ByteBuffer::from_vec(data);
    assert_eq!(buf.as_slice().as_ptr(), ptr);
    assert_eq!(buf.capacity(), 160);
    buf.append(100);
    assert_eq!(buf.len(), 101);
    assert!(buf.len() < buf.capacity());
}

#[test]
fn test_extend_empty_slice() {
    let mut buf = ByteBuffer::new();
    buf.extend_from_slice(b"");
    assert!(buf.is_empty());
    assert_eq!(buf.capacity(), INITIAL_CAPACITY);
}

#[test]
fn test_load_and_save_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.bin");
    let output = dir.path().join("out.bin");
    let content: Vec<u8> = (0..3000).map(|i| (i * 7 % 256) as u8).collect();
    std::fs::write(&input, &content).unwrap();

    let buf = ByteBuffer::load_from_file(&input).unwrap();
    assert_eq!(buf.as_slice(), &content[..]);
    assert_eq!(buf.capacity(), 5120);
    buf.save_to_file(&output).unwrap();
    assert_eq!(std::fs::read(&output).unwrap(), content);
}

#[test]
fn test_load_binary_with_nul_and_newlines() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("bin");
    std::fs::write(&input, b"\0\r\n\xff\0").unwrap();
    let buf = ByteBuffer::load_from_file(&input).unwrap();
    assert_eq!(buf.as_slice(), b"\0\r\n\xff\0");
}

#[test]
fn test_load_missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.bin");
    let err = ByteBuffer::load_from_file(&missing).unwrap_err();
    match &err {
        Error::Io { path, source } => {
            assert_eq!(path, &missing);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    let msg = err.to_string();
    assert!(msg.contains("missing.bin"));
    assert!(msg.ends_with("No such file or directory"));
}

#[test]
fn test_save_into_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("no_such_dir").join("out.bin");
    let buf = ByteBuffer::from_vec(b"data".to_vec());
    assert!(matches!(
        buf.save_to_file(&target),
        Err(Error::Io { .. })
    ));
}
