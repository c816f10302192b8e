use std::io::{self, BufRead, Write};

/// Line-oriented terminal: prompts on `output`, reads answers from `input`.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Prints `label: ` (or `Input: `) and reads one line without its terminator.
    ///
    /// A closed input stream is reported as [`io::ErrorKind::UnexpectedEof`].
    pub fn prompt(&mut self, label: Option<&str>) -> io::Result<String> {
        write!(self.output, "{}: ", label.unwrap_or("Input"))?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "console input closed",
            ));
        }

        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    /// Waits for the user to press enter.
    pub fn pause(&mut self) -> io::Result<()> {
        self.prompt(None).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn prompt_strips_line_endings_and_labels_output() {
        let mut console = Console::new(Cursor::new("first\r\n second \n"), Vec::new());
        assert_eq!(console.prompt(Some("Email")).expect("line"), "first");
        assert_eq!(console.prompt(None).expect("line"), " second ");
        let printed = String::from_utf8(console.into_output()).expect("utf8");
        assert_eq!(printed, "Email: Input: ");
    }

    #[test]
    fn closed_input_is_unexpected_eof() {
        let mut console = Console::new(Cursor::new(""), Vec::new());
        let err = console.prompt(None).expect_err("eof");
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
