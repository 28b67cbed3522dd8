use std::io::{self, BufRead, Write};

pub const OCTAVE_PROMPT: &str = "Enter current octave: ";
pub const NOTES_PROMPT: &str = "Enter current map of notes: ";

/// Write `prompt`, flush, and read one line without its line ending.
/// End of input reads as an empty line.
pub fn prompt_line<R: BufRead, W: Write>(reader: &mut R, writer: &mut W, prompt: &str) -> io::Result<String> {
    write!(writer, "{}", prompt)?;
    writer.flush()?;
    let mut line = String::new();
    reader.read_line(&mut line)?;
    let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(trimmed_len);
    Ok(line)
}

/// Ask for the octave the note map is currently written in (e.g. `5`).
pub fn read_octave<R: BufRead, W: Write>(reader: &mut R, writer: &mut W) -> io::Result<String> {
    prompt_line(reader, writer, OCTAVE_PROMPT)
}

/// Ask for the note map itself, e.g. `c5 60 c#5 61 d5 62`.
pub fn read_note_map<R: BufRead, W: Write>(reader: &mut R, writer: &mut W) -> io::Result<String> {
    prompt_line(reader, writer, NOTES_PROMPT)
}
