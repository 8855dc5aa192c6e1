//! Markdown → ratatui `Text` renderer for the help screen.
//!
//! Thin wrapper around `pulldown_cmark` that converts markdown events into
//! styled `Line`/`Span` values. Headings, bold, italic, inline code, and
//! lists — the subset the embedded help content uses.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};

/// Parse markdown content into styled `Text`.
///
/// Returns owned text (`'static`) so callers aren't constrained by input
/// lifetime.
pub fn render(content: &str, base_fg: Color) -> Text<'static> {
    let events: Vec<Event<'_>> = Parser::new_ext(content, Options::empty()).collect();
    let mut w = Writer::new(base_fg);
    for event in events {
        w.handle(event);
    }
    w.text
}

struct Writer {
    text: Text<'static>,
    base_fg: Color,
    /// Inline style stack (bold, italic, heading text). Styles compose via
    /// `patch` so nested bold+italic works.
    styles: Vec<Style>,
    /// List nesting: None = unordered, Some(n) = ordered at index n.
    list_indices: Vec<Option<u64>>,
    /// Whether the next block element should be preceded by a blank line.
    needs_newline: bool,
}

impl Writer {
    fn new(base_fg: Color) -> Self {
        Self {
            text: Text::default(),
            base_fg,
            styles: vec![],
            list_indices: vec![],
            needs_newline: false,
        }
    }

    /// Current effective style: top of stack, or base foreground color.
    fn style(&self) -> Style {
        self.styles
            .last()
            .copied()
            .unwrap_or_else(|| Style::default().fg(self.base_fg))
    }

    fn push_style(&mut self, overlay: Style) {
        self.styles.push(self.style().patch(overlay));
    }

    fn pop_style(&mut self) {
        self.styles.pop();
    }

    fn push_span(&mut self, span: Span<'static>) {
        if let Some(line) = self.text.lines.last_mut() {
            line.push_span(span);
        } else {
            self.text.lines.push(Line::from(vec![span]));
        }
    }

    fn start_line(&mut self) {
        self.text.lines.push(Line::default());
    }

    fn blank_line_if_needed(&mut self) {
        if self.needs_newline {
            self.text.lines.push(Line::default());
            self.needs_newline = false;
        }
    }

    fn handle(&mut self, event: Event<'_>) {
        match event {
            Event::Start(Tag::Heading { .. }) => {
                self.blank_line_if_needed();
                self.start_line();
                self.push_style(
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                );
            }
            Event::End(TagEnd::Heading(_)) => {
                self.pop_style();
                self.needs_newline = true;
            }
            Event::Start(Tag::Paragraph) => {
                self.blank_line_if_needed();
                self.start_line();
            }
            Event::End(TagEnd::Paragraph) => {
                self.needs_newline = true;
            }
            Event::Start(Tag::List(start)) => {
                self.blank_line_if_needed();
                self.list_indices.push(start);
            }
            Event::End(TagEnd::List(_)) => {
                self.list_indices.pop();
                self.needs_newline = true;
            }
            Event::Start(Tag::Item) => {
                let indent = "  ".repeat(self.list_indices.len().saturating_sub(1));
                let bullet = match self.list_indices.last_mut() {
                    Some(Some(index)) => {
                        let marker = format!("{indent}{index}. ");
                        *index += 1;
                        marker
                    }
                    _ => format!("{indent}• "),
                };
                self.start_line();
                let style = self.style();
                self.push_span(Span::styled(bullet, style));
            }
            Event::End(TagEnd::Item) => {}
            Event::Start(Tag::Emphasis) => {
                self.push_style(Style::default().add_modifier(Modifier::ITALIC));
            }
            Event::End(TagEnd::Emphasis) => self.pop_style(),
            Event::Start(Tag::Strong) => {
                self.push_style(Style::default().add_modifier(Modifier::BOLD));
            }
            Event::End(TagEnd::Strong) => self.pop_style(),
            Event::Text(text) => {
                let style = self.style();
                self.push_span(Span::styled(text.into_string(), style));
            }
            Event::Code(code) => {
                let style = self
                    .style()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD);
                self.push_span(Span::styled(code.into_string(), style));
            }
            Event::SoftBreak | Event::HardBreak => {
                self.start_line();
            }
            Event::Rule => {
                self.blank_line_if_needed();
                self.text.lines.push(Line::from(Span::styled(
                    "────────",
                    Style::default().fg(Color::DarkGray),
                )));
                self.needs_newline = true;
            }
            _ => {}
        }
    }
}
