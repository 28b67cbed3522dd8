use std::io::{self, Write};

/// Print the shifted note map as a single line.
pub fn write_shifted<W: Write>(writer: &mut W, line: &str) -> io::Result<()> {
    writeln!(writer, "{}", line)?;
    writer.flush()
}
