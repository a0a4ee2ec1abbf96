/// One rendered row of the terminal pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// The user's input, shown after the prompt.
    Echo(String),
    Output(String),
}

impl Line {
    pub fn text(&self) -> &str {
        match self {
            Line::Echo(s) | Line::Output(s) => s,
        }
    }
}

/// Append-only log of echoed commands and their output.
#[derive(Debug, Clone, Default)]
pub struct Scrollback {
    lines: Vec<Line>,
}

impl Scrollback {
    pub fn echo(&mut self, input: &str) {
        self.lines.push(Line::Echo(input.to_string()));
    }

    /// Append `text`, one row per line so embedded breaks survive rendering.
    pub fn output(&mut self, text: &str) {
        self.lines
            .extend(text.split('\n').map(|l| Line::Output(l.to_string())));
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_keeps_line_breaks() {
        let mut sb = Scrollback::default();
        sb.output("a\nb\n\nc");
        let texts: Vec<_> = sb.lines().iter().map(Line::text).collect();
        assert_eq!(texts, ["a", "b", "", "c"]);
    }

    #[test]
    fn clear_empties_the_log() {
        let mut sb = Scrollback::default();
        sb.echo("help");
        sb.output("x");
        assert_eq!(sb.len(), 2);
        sb.clear();
        assert!(sb.is_empty());
    }
}
