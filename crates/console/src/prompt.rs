//! Line-oriented prompts with re-prompting on bad numeric input.
//!
//! End of input surfaces as [`io::ErrorKind::UnexpectedEof`] so callers
//! can unwind out of any nested prompt and exit.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

pub const INVALID_WHOLE_NUMBER: &str = "Invalid input. Please enter a whole number.";
pub const INVALID_NUMBER: &str = "Invalid input. Please enter a number (e.g., 45.99).";

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `prompt` and return the trimmed answer.
    pub fn line(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "end of input"));
        }
        Ok(buf.trim().to_string())
    }

    pub fn int<T: FromStr>(&mut self, prompt: &str) -> io::Result<T> {
        self.required(prompt, INVALID_WHOLE_NUMBER)
    }

    pub fn float<T: FromStr>(&mut self, prompt: &str) -> io::Result<T> {
        self.required(prompt, INVALID_NUMBER)
    }

    /// Like [`Prompter::int`], but a blank answer is `None`.
    pub fn optional_int<T: FromStr>(&mut self, prompt: &str) -> io::Result<Option<T>> {
        self.optional(prompt, INVALID_WHOLE_NUMBER)
    }

    pub fn optional_float<T: FromStr>(&mut self, prompt: &str) -> io::Result<Option<T>> {
        self.optional(prompt, INVALID_NUMBER)
    }

    fn required<T: FromStr>(&mut self, prompt: &str, invalid: &str) -> io::Result<T> {
        loop {
            match self.line(prompt)?.parse() {
                Ok(value) => return Ok(value),
                Err(_) => writeln!(self.output, "{invalid}")?,
            }
        }
    }

    fn optional<T: FromStr>(&mut self, prompt: &str, invalid: &str) -> io::Result<Option<T>> {
        loop {
            let answer = self.line(prompt)?;
            if answer.is_empty() {
                return Ok(None);
            }
            match answer.parse() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => writeln!(self.output, "{invalid}")?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn printed(p: Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(p.into_output()).unwrap()
    }

    #[test]
    fn int_reprompts_until_whole_number() {
        let mut p = prompter("abc\n4.5\n 12 \n");
        let value: i64 = p.int("Enter Product ID: ").unwrap();

        assert_eq!(value, 12);
        let out = printed(p);
        assert_eq!(out.matches(INVALID_WHOLE_NUMBER).count(), 2);
        assert_eq!(out.matches("Enter Product ID: ").count(), 3);
    }

    #[test]
    fn float_reprompts_with_example() {
        let mut p = prompter("cheap\n45.99\n");
        let value: f64 = p.float("Enter Price: ").unwrap();

        assert_eq!(value, 45.99);
        assert!(printed(p).contains(INVALID_NUMBER));
    }

    #[test]
    fn blank_optional_is_none() {
        let mut p = prompter("\n   \n");
        assert_eq!(p.optional_int::<i32>("New Quantity: ").unwrap(), None);
        assert_eq!(p.optional_float::<f64>("New Price: ").unwrap(), None);
    }

    #[test]
    fn optional_still_rejects_garbage() {
        let mut p = prompter("x\n8\n");
        assert_eq!(p.optional_int::<i32>("New Quantity: ").unwrap(), Some(8));
        assert!(printed(p).contains(INVALID_WHOLE_NUMBER));
    }

    #[test]
    fn end_of_input_is_unexpected_eof() {
        let mut p = prompter("nope\n");
        let err = p.int::<i32>("Enter Quantity: ").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
