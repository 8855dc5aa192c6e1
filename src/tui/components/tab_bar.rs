//! # Tab Bar Component
//!
//! The bottom navigation drawer: four screen tabs plus the share and trash
//! controls, with the status message on the right. Stateless — created
//! fresh each frame from props.
//!
//! On narrow terminals the control labels degrade progressively (first
//! Share/Clear shrink to bare keys, then Quit) so the controls never get
//! clipped off the right edge.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

use crate::core::state::Screen;
use crate::tui::component::Component;

/// Drawer order: feelings, needs, selection, help.
const TABS: [(&str, &str, Screen); 4] = [
    ("1", "Feelings", Screen::Feelings),
    ("2", "Needs", Screen::Needs),
    ("3", "Selection", Screen::Selection),
    ("4", "Help", Screen::Help),
];

/// How much of the control area to spell out, widest first.
#[derive(Clone, Copy)]
enum ControlLabels {
    Full,
    /// Share/Clear as bare keys, Quit keeps its label.
    Short,
    /// All three controls as bare keys.
    KeysOnly,
}

pub struct TabBar<'a> {
    pub active: Screen,
    /// Disables the share and trash controls.
    pub selection_empty: bool,
    pub status: &'a str,
}

impl<'a> TabBar<'a> {
    fn line(&self, width: u16) -> Line<'a> {
        // Widest variant that fits; KeysOnly is the floor either way.
        let mut spans = self.spans(ControlLabels::Full);
        for labels in [ControlLabels::Short, ControlLabels::KeysOnly] {
            if spans_width(&spans) <= width as usize {
                break;
            }
            spans = self.spans(labels);
        }

        // Right-align the status message in whatever room is left.
        if !self.status.is_empty() {
            let used = spans_width(&spans);
            let available = (width as usize).saturating_sub(used + 2);
            let status = truncate_to_width(self.status, available);
            let pad = available.saturating_sub(status.width());
            spans.push(Span::raw(" ".repeat(pad + 1)));
            spans.push(Span::styled(
                status,
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ));
        }

        Line::from(spans)
    }

    fn spans(&self, labels: ControlLabels) -> Vec<Span<'a>> {
        let key_style = Style::default().fg(Color::Yellow);
        let label_style = Style::default().fg(Color::Gray);
        let active_style = Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED);
        let disabled_style = Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::DIM);

        let mut spans: Vec<Span> = Vec::new();
        for (key, label, screen) in TABS {
            spans.push(Span::raw(" "));
            if screen == self.active {
                // The active tab's key is a no-op, so no key hint either.
                spans.push(Span::styled(format!(" {label} "), active_style));
            } else {
                spans.push(Span::styled(key, key_style));
                spans.push(Span::styled(format!(" {label} "), label_style));
            }
        }

        spans.push(Span::raw("  "));
        let share_clear_labels = matches!(labels, ControlLabels::Full);
        for (key, label) in [("s", "Share"), ("c", "Clear")] {
            let text = if share_clear_labels {
                format!("{key} {label}  ")
            } else {
                format!("{key}  ")
            };
            if self.selection_empty {
                spans.push(Span::styled(text, disabled_style));
            } else if share_clear_labels {
                spans.push(Span::styled(key, key_style));
                spans.push(Span::styled(format!(" {label}  "), label_style));
            } else {
                spans.push(Span::styled(text, key_style));
            }
        }
        spans.push(Span::styled("q", key_style));
        if !matches!(labels, ControlLabels::KeysOnly) {
            spans.push(Span::styled(" Quit", label_style));
        }
        spans
    }
}

impl<'a> Component for TabBar<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(self.line(area.width), area);
    }
}

fn spans_width(spans: &[Span]) -> usize {
    spans.iter().map(|span| span.content.width()).sum()
}

/// Truncate a string to at most `max_width` terminal columns, appending an
/// ellipsis when anything was cut.
fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 1 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered_at(bar: &TabBar, width: u16) -> String {
        bar.line(width)
            .spans
            .iter()
            .map(|span| span.content.as_ref())
            .collect()
    }

    fn rendered(bar: &TabBar) -> String {
        rendered_at(bar, 120)
    }

    fn bar() -> TabBar<'static> {
        TabBar {
            active: Screen::Needs,
            selection_empty: true,
            status: "",
        }
    }

    #[test]
    fn active_tab_loses_its_key_hint() {
        let text = rendered(&bar());
        assert!(text.contains("1 Feelings"));
        assert!(!text.contains("2 Needs"));
        assert!(text.contains(" Needs "));
    }

    #[test]
    fn share_and_clear_render_for_both_states() {
        for empty in [true, false] {
            let bar = TabBar {
                selection_empty: empty,
                ..bar()
            };
            let text = rendered(&bar);
            assert!(text.contains("Share"));
            assert!(text.contains("Clear"));
        }
    }

    #[test]
    fn narrow_bar_keeps_quit_by_shortening_share_and_clear() {
        // 60 columns is too narrow for the full labels; the bar must fit
        // without clipping rather than losing the quit hint.
        let text = rendered_at(&bar(), 60);
        assert!(text.width() <= 60, "bar overflows: {:?}", text);
        assert!(text.contains("Quit"));
        assert!(!text.contains("Share"));
        assert!(!text.contains("Clear"));
        assert!(text.contains("s  c  q"));
    }

    #[test]
    fn very_narrow_bar_degrades_to_bare_keys() {
        let text = rendered_at(&bar(), 52);
        assert!(text.width() <= 52, "bar overflows: {:?}", text);
        assert!(!text.contains("Quit"));
        assert!(text.ends_with("q"));
    }

    #[test]
    fn wide_bar_keeps_all_labels() {
        let text = rendered(&bar());
        assert!(text.width() <= 120);
        for label in ["Share", "Clear", "Quit"] {
            assert!(text.contains(label));
        }
    }

    #[test]
    fn status_appears_at_the_end() {
        let bar = TabBar {
            active: Screen::Help,
            selection_empty: true,
            status: "restored",
        };
        assert!(rendered(&bar).ends_with("restored"));
    }

    #[test]
    fn truncate_keeps_short_strings_verbatim() {
        assert_eq!(truncate_to_width("hello", 10), "hello");
    }

    #[test]
    fn truncate_cuts_with_ellipsis() {
        assert_eq!(truncate_to_width("hello world", 6), "hello…");
    }

    #[test]
    fn truncate_to_nothing() {
        assert_eq!(truncate_to_width("hello", 1), "");
    }
}
