//! Pure state model for the search widget.
//!
//! The crate does not touch the DOM; the rendering layer owns the input box
//! and the results panel and drives this model with [`WidgetEvent`]s
//! (focus → `Activate`, keystroke → `QueryChange`, Escape or outside-click
//! → `Dismiss`). Two independent machines:
//!
//! - index phase: `Idle → Loading → Ready`, one-way;
//! - display: hidden / results / no-results, with `Dismiss` hiding the
//!   panel regardless of its content.

/// Lifecycle of the index load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexPhase {
    /// No load attempted yet.
    Idle,
    /// Fetch in flight. With no fetch timeout, a hung request stays here.
    Loading,
    /// Load settled (possibly with an empty index).
    Ready,
}

/// What the results panel is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Display {
    /// Panel closed (empty query, or dismissed).
    Hidden,
    /// Panel open with at least one result.
    Results,
    /// Panel open showing the no-results state.
    NoResults,
}

/// Events the rendering layer feeds into the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetEvent {
    /// Search box gained focus; warms the index.
    Activate,
    /// Input changed and a ranking pass completed.
    QueryChange {
        /// Whether the input parsed to any tokens.
        has_tokens: bool,
        /// Number of results the ranking pass produced.
        result_count: usize,
    },
    /// Escape key or a click outside the widget.
    Dismiss,
}

/// Combined widget state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetState {
    pub phase: IndexPhase,
    pub display: Display,
}

impl WidgetState {
    pub fn new() -> Self {
        Self {
            phase: IndexPhase::Idle,
            display: Display::Hidden,
        }
    }

    /// Apply one event. `Activate` and `QueryChange` both kick the index
    /// load when it has not started.
    pub fn apply(&mut self, event: WidgetEvent) {
        match event {
            WidgetEvent::Activate => {
                if self.phase == IndexPhase::Idle {
                    self.phase = IndexPhase::Loading;
                }
            }
            WidgetEvent::QueryChange {
                has_tokens,
                result_count,
            } => {
                if self.phase == IndexPhase::Idle {
                    self.phase = IndexPhase::Loading;
                }
                self.display = if !has_tokens {
                    Display::Hidden
                } else if result_count > 0 {
                    Display::Results
                } else {
                    Display::NoResults
                };
            }
            WidgetEvent::Dismiss => {
                self.display = Display::Hidden;
            }
        }
    }

    /// Mark the index load settled.
    pub fn index_ready(&mut self) {
        self.phase = IndexPhase::Ready;
    }
}

impl Default for WidgetState {
    fn default() -> Self {
        Self::new()
    }
}
