use owo_colors::OwoColorize;

/// A range of bytes in the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn dummy() -> Self {
        Self { start: 0, end: 0 }
    }

    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Moves the span forward by `offset` bytes
    pub fn shift(self, offset: usize) -> Span {
        Span {
            start: self.start + offset,
            end: self.end + offset,
        }
    }
}

impl From<chumsky::span::SimpleSpan> for Span {
    fn from(span: chumsky::span::SimpleSpan) -> Self {
        Span::new(span.start, span.end)
    }
}

/// A message attached to a span of the source
#[derive(Debug, Clone)]
pub struct Label {
    pub span: Span,
    pub message: String,
}

impl Label {
    pub fn new(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub code: Option<String>,
    pub message: String,
    pub labels: Vec<Label>,
    pub notes: Vec<String>,
}

impl Diagnostic {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
            labels: Vec::new(),
            notes: Vec::new(),
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn with_label(mut self, label: Label) -> Self {
        self.labels.push(label);
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.notes.push(format!("help: {}", help.into()));
        self
    }
}

/// Computes the 1-based line and column of a byte offset
pub fn line_col(source: &str, offset: usize) -> (usize, usize) {
    let mut line = 1;
    let mut col = 1;
    for (i, ch) in source.char_indices() {
        if i >= offset {
            break;
        }
        if ch == '\n' {
            line += 1;
            col = 1;
        } else {
            col += 1;
        }
    }
    (line, col)
}

/// Returns the text of a 1-based line without its line terminator
fn source_line(source: &str, line_num: usize) -> Option<&str> {
    source
        .split('\n')
        .nth(line_num.checked_sub(1)?)
        .map(|line| line.trim_end_matches('\r'))
}

/// Renders diagnostics in the style of rustc against a named source
pub struct DiagnosticRenderer<'a> {
    source: &'a str,
    file_name: &'a str,
    use_color: bool,
}

impl<'a> DiagnosticRenderer<'a> {
    pub fn new(source: &'a str, file_name: &'a str, use_color: bool) -> Self {
        Self {
            source,
            file_name,
            use_color,
        }
    }

    pub fn render(&self, diagnostic: &Diagnostic) -> String {
        let mut output = String::new();
        self.render_header(&mut output, diagnostic);

        if let Some(first) = diagnostic.labels.first() {
            let (line, col) = line_col(self.source, first.span.start);
            let width = diagnostic
                .labels
                .iter()
                .map(|label| line_col(self.source, label.span.start).0)
                .max()
                .unwrap_or(line)
                .to_string()
                .len();
            let gutter = " ".repeat(width + 1);

            output.push_str(&format!(
                "{}{} {}:{}:{}\n",
                " ".repeat(width),
                self.blue("-->"),
                self.file_name,
                line,
                col
            ));
            output.push_str(&format!("{}{}\n", gutter, self.blue("|")));
            for label in &diagnostic.labels {
                self.render_label(&mut output, label, width);
            }
            output.push_str(&format!("{}{}\n", gutter, self.blue("|")));
        }

        for note in &diagnostic.notes {
            output.push_str(&format!("{}{} {}\n", " ".repeat(2), self.blue("="), note));
        }

        output
    }

    fn render_header(&self, output: &mut String, diagnostic: &Diagnostic) {
        let severity = self.red_bold("error");
        let message = self.bold(&diagnostic.message);
        match &diagnostic.code {
            Some(code) => output.push_str(&format!("{}[{}]: {}\n", severity, code, message)),
            None => output.push_str(&format!("{}: {}\n", severity, message)),
        }
    }

    fn render_label(&self, output: &mut String, label: &Label, width: usize) {
        let (line_num, start_col) = line_col(self.source, label.span.start);
        let Some(content) = source_line(self.source, line_num) else {
            return;
        };

        output.push_str(&format!(
            "{:>width$} {} {}\n",
            line_num,
            self.blue("|"),
            content,
            width = width
        ));

        // Underlines never run past the end of the line they start on
        let line_len = content.chars().count();
        let span_len = self.source[label.span.start.min(self.source.len())
            ..label.span.end.min(self.source.len())]
            .chars()
            .take_while(|c| *c != '\n')
            .count();
        let carets = span_len.clamp(1, (line_len + 1).saturating_sub(start_col).max(1));

        let mut underline = " ".repeat(start_col.saturating_sub(1));
        underline.push_str(&self.red(&"^".repeat(carets)));
        if !label.message.is_empty() {
            underline.push(' ');
            underline.push_str(&self.red(&label.message));
        }
        output.push_str(&format!("{} {} {}\n", " ".repeat(width), self.blue("|"), underline));
    }

    fn red(&self, s: &str) -> String {
        if self.use_color {
            s.red().to_string()
        } else {
            s.to_string()
        }
    }

    fn red_bold(&self, s: &str) -> String {
        if self.use_color {
            s.red().bold().to_string()
        } else {
            s.to_string()
        }
    }

    fn blue(&self, s: &str) -> String {
        if self.use_color {
            s.blue().to_string()
        } else {
            s.to_string()
        }
    }

    fn bold(&self, s: &str) -> String {
        if self.use_color {
            s.bold().to_string()
        } else {
            s.to_string()
        }
    }
}

/// Render a batch of diagnostics followed by an abort summary
pub fn render_diagnostics(
    source: &str,
    file_name: &str,
    diagnostics: &[Diagnostic],
    use_color: bool,
) -> String {
    let renderer = DiagnosticRenderer::new(source, file_name, use_color);
    let mut output = String::new();

    for diagnostic in diagnostics {
        output.push_str(&renderer.render(diagnostic));
        output.push('\n');
    }

    let error_count = diagnostics.len();
    if error_count > 0 {
        output.push_str(&format!(
            "error: aborting due to {} error{}\n",
            error_count,
            if error_count == 1 { "" } else { "s" }
        ));
    }

    output
}
