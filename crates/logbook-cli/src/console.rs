//! Line-oriented prompting over any reader/writer pair.
//!
//! The apps never touch stdin/stdout directly, so tests can drive a whole
//! session from an in-memory script.

use std::{
  fmt::Display,
  io::{BufRead, Write},
};

use anyhow::Result;

/// Returned when the input stream ends. The apps treat it as a quit.
#[derive(Debug, thiserror::Error)]
#[error("input closed")]
pub struct InputClosed;

/// Whether `err` means the user's input ran out.
pub fn is_input_closed(err: &anyhow::Error) -> bool { err.is::<InputClosed>() }

pub struct Console<R, W> {
  input:  R,
  output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
  pub fn new(input: R, output: W) -> Self { Self { input, output } }

  /// Print one line.
  pub fn say(&mut self, message: impl Display) -> Result<()> {
    writeln!(self.output, "{message}")?;
    Ok(())
  }

  /// Print `prompt` and read one line, without its terminator.
  pub fn ask(&mut self, prompt: &str) -> Result<String> {
    write!(self.output, "{prompt}")?;
    self.output.flush()?;

    let mut line = String::new();
    if self.input.read_line(&mut line)? == 0 {
      return Err(InputClosed.into());
    }
    let line = line.strip_suffix('\n').unwrap_or(&line);
    Ok(line.strip_suffix('\r').unwrap_or(line).to_string())
  }

  /// [`Console::ask`], trimmed.
  pub fn ask_trimmed(&mut self, prompt: &str) -> Result<String> {
    Ok(self.ask(prompt)?.trim().to_string())
  }

  /// Keep asking until `parse` accepts the trimmed answer, printing `retry`
  /// after each rejection.
  pub fn ask_until<T, F>(&mut self, prompt: &str, retry: &str, parse: F) -> Result<T>
  where
    F: Fn(&str) -> Option<T>,
  {
    loop {
      let answer = self.ask_trimmed(prompt)?;
      if let Some(value) = parse(&answer) {
        return Ok(value);
      }
      self.say(retry)?;
    }
  }

  pub fn output(&self) -> &W { &self.output }
}

#[cfg(test)]
mod tests {
  use std::io::Cursor;

  use super::*;

  fn console(script: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
    Console::new(Cursor::new(script.as_bytes().to_vec()), Vec::new())
  }

  #[test]
  fn ask_strips_line_endings() {
    let mut c = console("hello\r\n  spaced  \n");
    assert_eq!(c.ask("> ").unwrap(), "hello");
    assert_eq!(c.ask_trimmed("> ").unwrap(), "spaced");
    assert_eq!(String::from_utf8_lossy(c.output()), "> > ");
  }

  #[test]
  fn ask_until_retries_bad_answers() {
    let mut c = console("x\n-1\n42\n");
    let n: u32 = c
      .ask_until("n: ", "Invalid number. Please try again.", |s| s.parse().ok())
      .unwrap();
    assert_eq!(n, 42);
    let out = String::from_utf8_lossy(c.output()).into_owned();
    assert_eq!(out.matches("Invalid number").count(), 2);
  }

  #[test]
  fn end_of_input_is_reported() {
    let mut c = console("");
    let err = c.ask("> ").unwrap_err();
    assert!(is_input_closed(&err));
  }
}
