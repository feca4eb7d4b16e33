//! Caret-annotated source snippets.

/// A single source line with a highlighted column range.
///
/// # Examples
///
/// ```
/// use cartc_util::diagnostic::SourceSnippet;
///
/// let snippet = SourceSnippet::point("123 @ 456", 1, 5);
/// assert_eq!(snippet.format(), "  1 | 123 @ 456\n    |     ^");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceSnippet {
    /// The source line content, without its terminator
    pub line: String,
    /// Line number (1-based)
    pub line_number: usize,
    /// Column where the issue starts (1-based)
    pub start_column: usize,
    /// Column where the issue ends (1-based, inclusive)
    pub end_column: usize,
    /// Optional label to display after the carets
    pub label: Option<String>,
}

impl SourceSnippet {
    /// Create a snippet underlining `start_column..=end_column`
    pub fn range(
        line: impl Into<String>,
        line_number: usize,
        start_column: usize,
        end_column: usize,
    ) -> Self {
        Self {
            line: trim_terminator(line.into()),
            line_number,
            start_column,
            end_column: end_column.max(start_column),
            label: None,
        }
    }

    /// Create a snippet pointing at a single column
    pub fn point(line: impl Into<String>, line_number: usize, column: usize) -> Self {
        Self::range(line, line_number, column, column)
    }

    /// Set the label for this snippet
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Format the snippet for display
    ///
    /// Returns the source line under a line-number gutter, followed by a
    /// caret line. Tabs before the caret are kept as tabs so the caret lines
    /// up with the character it points at.
    pub fn format(&self) -> String {
        let width = self.line_number.to_string().len().max(3);
        let mut result = format!("{:>width$} | {}\n", self.line_number, self.line);
        result.push_str(&format!("{:>width$} | ", ""));

        let underline_start = self.start_column.saturating_sub(1);
        let underline_len = (self.end_column.saturating_sub(self.start_column) + 1).max(1);

        let mut chars = self.line.chars();
        for _ in 0..underline_start {
            match chars.next() {
                Some('\t') => result.push('\t'),
                _ => result.push(' '),
            }
        }
        for _ in 0..underline_len {
            result.push('^');
        }

        if let Some(ref label) = self.label {
            result.push(' ');
            result.push_str(label);
        }

        result
    }
}

fn trim_terminator(mut line: String) -> String {
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    line
}
