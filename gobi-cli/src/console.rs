use std::fmt::Display;
use std::io::{self, BufRead, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConsoleError {
    /// End of input or an interrupted read.
    #[error("input closed")]
    Closed,
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Line-oriented prompt over any reader/writer pair.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn say(&mut self, line: impl Display) -> Result<(), ConsoleError> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// Show `> ` and read one trimmed line.
    pub fn ask(&mut self) -> Result<String, ConsoleError> {
        write!(self.output, "> ")?;
        self.output.flush()?;

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => Err(ConsoleError::Closed),
            Ok(_) => Ok(line.trim().to_string()),
            Err(err) if err.kind() == io::ErrorKind::Interrupted => Err(ConsoleError::Closed),
            Err(err) => Err(err.into()),
        }
    }

    /// Ask a `(y/N)` question; anything but `y` means no.
    pub fn confirm(&mut self, question: &str) -> Result<bool, ConsoleError> {
        self.say(format!("{question} (y/N)"))?;
        Ok(self.ask()?.eq_ignore_ascii_case("y"))
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn ask_trims_and_prompts() {
        let mut console = console("  b  \n");
        assert_eq!(console.ask().unwrap(), "b");
        let written = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(written, "> ");
    }

    #[test]
    fn end_of_input_is_closed() {
        let mut console = console("");
        assert!(matches!(console.ask(), Err(ConsoleError::Closed)));
    }

    #[test]
    fn confirm_only_accepts_y() {
        let mut console = console("Y\nyes\n\n");
        assert!(console.confirm("Load it?").unwrap());
        assert!(!console.confirm("Load it?").unwrap());
        assert!(!console.confirm("Load it?").unwrap());
        let written = String::from_utf8(console.into_output()).unwrap();
        assert!(written.starts_with("Load it? (y/N)\n> "));
    }
}
