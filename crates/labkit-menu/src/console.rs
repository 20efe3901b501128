//! Line-oriented console over any `BufRead` / `Write` pair.
//!
//! Numeric prompts never fail on bad input: a line that does not start with
//! a number reads as zero, the way C's `atoi`/`atof` behave. End of input
//! also reads as zero; the session loop treats it as exit.

use std::io::{self, BufRead, Write};

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn write(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()
    }

    /// Next line without its line terminator, or `None` at end of input.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    pub fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        self.write(message)?;
        self.read_line()
    }

    pub fn prompt_int(&mut self, message: &str) -> io::Result<i64> {
        Ok(self
            .prompt(message)?
            .map_or(0, |line| parse_leading_int(&line)))
    }

    pub fn prompt_float(&mut self, message: &str) -> io::Result<f64> {
        Ok(self
            .prompt(message)?
            .map_or(0.0, |line| parse_leading_float(&line)))
    }

    /// Read `count` whitespace-separated integers from one line. Missing
    /// values read as zero.
    pub fn prompt_ints(&mut self, message: &str, count: usize) -> io::Result<Vec<i64>> {
        let line = self.prompt(message)?.unwrap_or_default();
        let mut values: Vec<i64> = line
            .split_whitespace()
            .take(count)
            .map(parse_leading_int)
            .collect();
        values.resize(count, 0);
        Ok(values)
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

/// Optional sign followed by digits; anything else ends the number.
pub fn parse_leading_int(text: &str) -> i64 {
    let text = text.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let mut value: i64 = 0;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        value = value
            .saturating_mul(10)
            .saturating_add(i64::from(b - b'0'));
    }
    if negative {
        -value
    } else {
        value
    }
}

/// Longest leading prefix that parses as a float, else 0.0.
pub fn parse_leading_float(text: &str) -> f64 {
    let text = text.trim();
    let mut ends: Vec<usize> = text.char_indices().map(|(i, _)| i).skip(1).collect();
    ends.push(text.len());
    ends.iter()
        .rev()
        .find_map(|&end| text[..end].parse::<f64>().ok())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int("42"), 42);
        assert_eq!(parse_leading_int("  -7 apples"), -7);
        assert_eq!(parse_leading_int("+3"), 3);
        assert_eq!(parse_leading_int("12abc"), 12);
        assert_eq!(parse_leading_int("abc"), 0);
        assert_eq!(parse_leading_int(""), 0);
        assert_eq!(parse_leading_int("-"), 0);
    }

    #[test]
    fn test_parse_leading_float() {
        assert_eq!(parse_leading_float("3.5"), 3.5);
        assert_eq!(parse_leading_float(" -2.25xyz"), -2.25);
        assert_eq!(parse_leading_float("1e2"), 100.0);
        assert_eq!(parse_leading_float("hello"), 0.0);
        assert_eq!(parse_leading_float(""), 0.0);
    }

    #[test]
    fn test_read_line_strips_terminator() {
        let mut c = console("first\r\nsecond\n");
        assert_eq!(c.read_line().unwrap().as_deref(), Some("first"));
        assert_eq!(c.read_line().unwrap().as_deref(), Some("second"));
        assert_eq!(c.read_line().unwrap(), None);
    }

    #[test]
    fn test_prompt_writes_message() {
        let mut c = console("5\n");
        assert_eq!(c.prompt_int("Number: ").unwrap(), 5);
        assert_eq!(c.into_output(), b"Number: ".to_vec());
    }

    #[test]
    fn test_prompt_at_eof_reads_zero() {
        let mut c = console("");
        assert_eq!(c.prompt_int("n: ").unwrap(), 0);
        assert_eq!(c.prompt_float("x: ").unwrap(), 0.0);
    }

    #[test]
    fn test_prompt_ints_pads_missing() {
        let mut c = console("3 4 5\n7\n");
        assert_eq!(c.prompt_ints("dims: ", 2).unwrap(), vec![3, 4]);
        assert_eq!(c.prompt_ints("dims: ", 2).unwrap(), vec![7, 0]);
    }
}
