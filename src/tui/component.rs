use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Components follow a props-plus-state pattern:
/// - They receive data via props (struct fields).
/// - They may hold internal state (cursor, scroll offset, drag order).
/// - They render to a `Frame` within a given `Rect`.
///
/// # Mutability
///
/// `render` takes `&mut self` so components can manage presentation state
/// (scroll offsets, cached row models) during the render pass. This aligns
/// with Ratatui's `StatefulWidget` pattern.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that handles terminal events.
pub trait EventHandler {
    /// The type of high-level event this component emits.
    type Event;

    /// Handle a low-level `TuiEvent` and optionally return a high-level event.
    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}
