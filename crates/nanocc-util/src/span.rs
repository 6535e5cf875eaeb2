use std::fmt;

/// A single point in the source text: a byte offset plus the 0-based
/// line/column pair used throughout the lexer.
///
/// Lines and columns are 0-based, matching the counters described for
/// the lexer: the first character of the file sits at line 0, column
/// 0, a newline increments `line` and resets `column` to 0.
///
/// Spans in this compiler are points, not ranges: every diagnostic is
/// anchored to "the position of its first character", never a
/// start/end pair, so there is no need for an `end` field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Span {
    pub offset: usize,
    pub line: u32,
    pub column: u32,
}

impl Span {
    pub const fn new(offset: usize, line: u32, column: u32) -> Self {
        Self { offset, line, column }
    }

    /// The start of a fresh source buffer: line 0, column 0.
    pub const START: Span = Span::new(0, 0, 0);
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_line_colon_column() {
        assert_eq!(Span::new(0, 3, 4).to_string(), "3:4");
    }
}
