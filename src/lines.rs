//! Reassembly of physical lines into logical MT940 fields.
//!
//! A logical field is a tag line (starting with `:`) or a statement
//! separator (starting with `-`) together with every following line that
//! starts with neither. Continuation lines are kept, joined with `\n`,
//! because fields such as `:61:` and `:86:` are re-split later on their
//! own rules.

use crate::error::Result;

/// Lazy iterator of logical fields over a source of physical lines.
#[derive(Debug)]
pub struct LogicalFields<I> {
    lines: I,
    buffer: Vec<String>,
    done: bool,
}

impl<I> LogicalFields<I>
where
    I: Iterator<Item = Result<String>>,
{
    /// Wrap a line source. Line source errors are yielded as items.
    pub fn new(lines: I) -> Self {
        Self {
            lines,
            buffer: Vec::new(),
            done: false,
        }
    }

    fn flush(&mut self) -> String {
        let field = self.buffer.join("\n");
        self.buffer.clear();
        field
    }
}

impl<I> Iterator for LogicalFields<I>
where
    I: Iterator<Item = Result<String>>,
{
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            match self.lines.next() {
                Some(Ok(line)) => {
                    let line = strip_line_ending(line);
                    let starts_field = line.starts_with(':') || line.starts_with('-');
                    if starts_field && !self.buffer.is_empty() {
                        let field = self.flush();
                        self.buffer.push(line);
                        return Some(Ok(field));
                    }
                    self.buffer.push(line);
                }
                Some(Err(err)) => {
                    self.done = true;
                    return Some(Err(err));
                }
                None => {
                    self.done = true;
                    if self.buffer.is_empty() {
                        return None;
                    }
                    return Some(Ok(self.flush()));
                }
            }
        }
    }
}

fn strip_line_ending(mut line: String) -> String {
    let len = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(len);
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn fields(text: &str) -> Vec<String> {
        LogicalFields::new(text.lines().map(|l| Ok(l.to_string())))
            .collect::<Result<Vec<_>>>()
            .unwrap()
    }

    #[test]
    fn test_continuation_lines_are_joined() {
        let got = fields(":20:STMT\n:86:/EREF/foo\n/NAME/bar\nbaz\n:62F:C120514EUR1,00");
        assert_eq!(
            got,
            vec![
                ":20:STMT".to_string(),
                ":86:/EREF/foo\n/NAME/bar\nbaz".to_string(),
                ":62F:C120514EUR1,00".to_string(),
            ]
        );
    }

    #[test]
    fn test_separator_starts_a_field() {
        let got = fields(":62F:C120514EUR1,00\n-\n:20:NEXT");
        assert_eq!(got, vec![":62F:C120514EUR1,00", "-", ":20:NEXT"]);
    }

    #[test]
    fn test_last_field_flushed_without_separator() {
        assert_eq!(
            fields(":61:1205120514C1,00NTRFREF\nextra"),
            vec![":61:1205120514C1,00NTRFREF\nextra"]
        );
    }

    #[test]
    fn test_leading_untagged_lines_are_kept() {
        assert_eq!(fields("header\n:20:X"), vec!["header", ":20:X"]);
    }

    #[test]
    fn test_empty_continuation_line_is_preserved() {
        let lines = vec![Ok(":61:A\r\n".to_string()), Ok("\r\n".to_string())];
        let got: Vec<String> = LogicalFields::new(lines.into_iter())
            .collect::<Result<Vec<_>>>()
            .unwrap();
        assert_eq!(got, vec![":61:A\n"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(fields("").is_empty());
    }
}
