//! Location input - one raw location per line
//!
//! `sysLocation` is an OCTET STRING and is often not UTF-8 (Latin-1 is
//! common). Invalid bytes become U+FFFD, which the sanitizer then replaces.

use anyhow::Context;
use std::io::BufRead;

/// Feed each line of `reader` to `handle`, returning the number of lines read
///
/// Trailing `\n` / `\r\n` is stripped. Only I/O errors and errors from
/// `handle` stop the loop.
pub fn read_locations<R, F>(mut reader: R, mut handle: F) -> anyhow::Result<usize>
where
    R: BufRead,
    F: FnMut(&str) -> anyhow::Result<()>,
{
    let mut buf = Vec::new();
    let mut count = 0;

    loop {
        buf.clear();
        let read = reader.read_until(b'\n', &mut buf).context("Failed to read location input")?;
        if read == 0 {
            break;
        }

        let mut line: &[u8] = &buf;
        if let Some(rest) = line.strip_suffix(b"\n") {
            line = rest;
            if let Some(rest) = line.strip_suffix(b"\r") {
                line = rest;
            }
        }

        handle(&String::from_utf8_lossy(line))?;
        count += 1;
    }

    Ok(count)
}
