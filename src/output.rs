use crate::permutation::Sequence;
use log::trace;
use std::fmt::Write as _;
use std::io::{self, Write};

pub const OUTPUT_BUFFER_SIZE: usize = 4096;

// usize::MAX, its separator and room for the final newline.
const MAX_TOKEN_LEN: usize = 22;

/// Writes `sequence` as one newline-terminated line of space-separated
/// tokens. Formatting goes through a fixed-size buffer that is handed to
/// `writer` whenever it fills up, so large sequences never materialize as a
/// single string.
pub fn write_sequence<W: Write>(writer: &mut W, sequence: &Sequence) -> io::Result<()> {
    let mut buffer = String::with_capacity(OUTPUT_BUFFER_SIZE);
    let mut flushes = 0usize;

    for (index, value) in sequence.as_slice().iter().enumerate() {
        if buffer.len() > OUTPUT_BUFFER_SIZE - MAX_TOKEN_LEN {
            writer.write_all(buffer.as_bytes())?;
            buffer.clear();
            flushes += 1;
        }
        if index > 0 {
            buffer.push(' ');
        }
        write!(buffer, "{value}").map_err(|err| {
            io::Error::new(io::ErrorKind::Other, format!("format value {value}: {err}"))
        })?;
    }
    buffer.push('\n');
    writer.write_all(buffer.as_bytes())?;
    trace!("wrote {} values in {} chunks", sequence.len(), flushes + 1);
    writer.flush()
}

/// Prints `sequence` to a locked stdout.
pub fn print_sequence(sequence: &Sequence) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_sequence(&mut handle, sequence)
}
