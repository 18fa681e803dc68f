use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

/// Chunk size for reading inputs of unknown length (pipes, ttys).
const READ_CHUNK: usize = 64 * 1024;

/// Read a whole file in binary mode into an owned Vec.
/// Regular files are read into an exact-size allocation from fstat;
/// special files (/dev/stdin, procfs) are drained until EOF.
pub fn read_file(path: &Path) -> io::Result<Vec<u8>> {
    let mut file = File::open(path)?;
    let metadata = file.metadata()?;
    let len = metadata.len() as usize;

    if len > 0 && metadata.file_type().is_file() {
        let mut buf = vec![0u8; len];
        let n = read_full(&mut file, &mut buf)?;
        buf.truncate(n);
        // File grew between fstat and read: pick up the rest
        if n == len {
            file.read_to_end(&mut buf)?;
        }
        return Ok(buf);
    }
    read_to_eof(&mut file)
}

/// Read all of stdin into memory.
pub fn read_stdin() -> io::Result<Vec<u8>> {
    let mut stdin = io::stdin().lock();
    read_to_eof(&mut stdin)
}

fn read_to_eof(reader: &mut impl Read) -> io::Result<Vec<u8>> {
    let mut buf: Vec<u8> = Vec::with_capacity(READ_CHUNK);
    loop {
        if buf.capacity() - buf.len() < READ_CHUNK {
            buf.reserve(buf.capacity().max(READ_CHUNK));
        }
        let start = buf.len();
        buf.resize(buf.capacity(), 0);
        match reader.read(&mut buf[start..]) {
            Ok(0) => {
                buf.truncate(start);
                break;
            }
            Ok(n) => buf.truncate(start + n),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => buf.truncate(start),
            Err(e) => return Err(e),
        }
    }
    Ok(buf)
}

/// Create (or truncate) `path` and write `data` verbatim.
pub fn write_file(path: &Path, data: &[u8]) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(data)?;
    file.flush()
}

/// Write `data` to stdout in one call.
pub fn write_stdout(data: &[u8]) -> io::Result<()> {
    let mut out = io::stdout().lock();
    out.write_all(data)?;
    out.flush()
}

/// Read as many bytes as possible into buf, retrying on partial reads.
#[inline]
fn read_full(reader: &mut impl Read, buf: &mut [u8]) -> io::Result<usize> {
    let mut total = 0;
    while total < buf.len() {
        match reader.read(&mut buf[total..]) {
            Ok(0) => break,
            Ok(n) => total += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(total)
}
