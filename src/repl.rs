use std::io::{self, BufRead, Write};

use crate::{evaluator::evaluate, parser::parse};

pub const PROMPT: &str = ">> ";

pub fn start<R: BufRead, W: Write>(reader: R, mut writer: W) -> io::Result<()> {
    let mut lines = reader.lines();
    loop {
        write!(writer, "{}", PROMPT)?;
        writer.flush()?;

        let Some(line) = lines.next() else {
            return Ok(());
        };
        let (document, _) = parse(&line?);
        writer.write_all(evaluate(&document).inspect().as_bytes())?;
    }
}
