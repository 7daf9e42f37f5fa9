use std::fmt::Display;

pub use annotate_snippets::Renderer;
use annotate_snippets::{Level, Snippet};
pub use text_size::TextRange;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Severity {
    Error,
    Warning,
}

#[salsa::accumulator]
pub struct Diagnostic {
    severity: Severity,
    message: String,
    range: TextRange,
}

impl Diagnostic {
    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn range(&self) -> TextRange {
        self.range
    }

    pub fn error(message: impl Into<String>, range: TextRange) -> Self {
        Self { severity: Severity::Error, message: message.into(), range }
    }

    pub fn warning(message: impl Into<String>, range: TextRange) -> Self {
        Self { severity: Severity::Warning, message: message.into(), range }
    }

    pub fn render<'a>(
        &'a self,
        renderer: &'a Renderer,
        path: &'a str,
        text: &'a str,
    ) -> impl Display + 'a {
        let level = match self.severity {
            Severity::Error => Level::Error,
            Severity::Warning => Level::Warning,
        };

        let message = level.title(&self.message).snippet(
            Snippet::source(text)
                .origin(path)
                .annotation(level.span(self.range.into()).label("here"))
                .fold(true),
        );
        renderer.render(message)
    }
}
