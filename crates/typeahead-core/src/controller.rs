//! Interaction state machine for the suggestion panel.
//!
//! The browser adapters translate raw keyboard/mouse events into
//! [`WidgetEvent`]s and apply the returned [`Command`]s to the DOM. The
//! controller itself never touches the DOM, so every transition is testable
//! without a live UI.
//!
//! Two concerns are tracked: where keyboard focus is, and whether the
//! suggestion panel is visible. Result emptiness never hides the panel by
//! itself; only Escape and outside clicks do. Rendering a non-empty result
//! set shows it.

/// Keys the controller reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// The focus-search shortcut (`/`).
    FocusSearch,
    /// Escape.
    Escape,
    /// Arrow up.
    ArrowUp,
    /// Arrow down.
    ArrowDown,
}

impl Key {
    /// Map a DOM `KeyboardEvent::key` name to a controller key.
    pub fn from_dom_key(name: &str) -> Option<Key> {
        match name {
            "/" => Some(Key::FocusSearch),
            "Escape" => Some(Key::Escape),
            "ArrowUp" => Some(Key::ArrowUp),
            "ArrowDown" => Some(Key::ArrowDown),
            _ => None,
        }
    }
}

/// An input event, already mapped from the host UI runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetEvent {
    /// A global key press.
    Key {
        /// Which key.
        key: Key,
        /// Whether the platform command/meta modifier was held.
        meta: bool,
        /// Whether the event target is already a text-entry element.
        in_text_input: bool,
    },

    /// A click outside the suggestion panel subtree.
    OutsideClick,

    /// A click on a suggestion entry (acceptance).
    SuggestionClick,

    /// A query finished rendering with this many suggestion entries.
    QueryResolved {
        /// Number of entries now in the panel.
        entry_count: usize,
    },
}

/// A side effect the adapter must apply to the DOM.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Suppress the event's default action.
    PreventDefault,
    /// Move keyboard focus to the search input.
    FocusInput,
    /// Remove keyboard focus from the search input.
    BlurInput,
    /// Make the suggestion panel visible.
    ShowPanel,
    /// Hide the suggestion panel, whatever its content.
    HidePanel,
    /// Remove all suggestion entries without changing visibility.
    ClearPanel,
    /// Move focus to the suggestion entry at this index.
    FocusEntry(usize),
    /// Scroll the page to the top.
    ScrollToTop,
    /// Scroll the page to the bottom.
    ScrollToBottom,
}

/// Named interaction states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WidgetState {
    /// Nothing search-related has focus.
    #[default]
    Idle,
    /// The search input has focus.
    InputFocused,
    /// The panel is showing rendered suggestions.
    PanelVisible,
    /// Focus is inside the suggestion list.
    Navigating,
}

/// The interaction controller.
#[derive(Debug, Default)]
pub struct Controller {
    state: WidgetState,
    panel_visible: bool,
    entry_count: usize,
    focused_entry: Option<usize>,
}

impl Controller {
    /// Create a controller in the idle state with a hidden, empty panel.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current named state.
    pub fn state(&self) -> WidgetState {
        self.state
    }

    /// Whether the panel is currently visible.
    pub fn panel_visible(&self) -> bool {
        self.panel_visible
    }

    /// Index of the focused suggestion entry, if focus is in the list.
    pub fn focused_entry(&self) -> Option<usize> {
        self.focused_entry
    }

    /// Apply one event and return the commands for the adapter, in order.
    pub fn handle(&mut self, event: WidgetEvent) -> Vec<Command> {
        match event {
            WidgetEvent::Key {
                key, meta, ..
            } if meta && matches!(key, Key::ArrowUp | Key::ArrowDown) => {
                // Command+arrow scrolls the whole page and suppresses all
                // other handling for the event.
                match key {
                    Key::ArrowUp => vec![Command::ScrollToTop],
                    _ => vec![Command::ScrollToBottom],
                }
            }

            WidgetEvent::Key {
                key: Key::FocusSearch,
                in_text_input,
                ..
            } => {
                if in_text_input {
                    // Typing '/' into a text field stays a plain keystroke.
                    return Vec::new();
                }
                self.state = WidgetState::InputFocused;
                vec![Command::PreventDefault, Command::FocusInput]
            }

            WidgetEvent::Key { key: Key::Escape, .. } => {
                self.state = WidgetState::Idle;
                self.panel_visible = false;
                self.focused_entry = None;
                vec![Command::BlurInput, Command::HidePanel]
            }

            WidgetEvent::Key { key: Key::ArrowUp, .. } => self.navigate(Direction::Up),

            WidgetEvent::Key { key: Key::ArrowDown, .. } => self.navigate(Direction::Down),

            WidgetEvent::OutsideClick => {
                self.state = WidgetState::Idle;
                self.panel_visible = false;
                self.focused_entry = None;
                vec![Command::HidePanel]
            }

            WidgetEvent::SuggestionClick => {
                // Acceptance teardown: drop the entries and let the anchor's
                // default navigation proceed.
                self.state = WidgetState::Idle;
                self.entry_count = 0;
                self.focused_entry = None;
                vec![Command::ClearPanel]
            }

            WidgetEvent::QueryResolved { entry_count } => {
                self.entry_count = entry_count;
                self.focused_entry = None;
                if entry_count > 0 {
                    self.state = WidgetState::PanelVisible;
                    self.panel_visible = true;
                    vec![Command::ShowPanel]
                } else {
                    // Empty results clear content but never hide the panel.
                    if self.state == WidgetState::Navigating {
                        self.state = WidgetState::PanelVisible;
                    }
                    vec![Command::ClearPanel]
                }
            }
        }
    }

    fn navigate(&mut self, direction: Direction) -> Vec<Command> {
        if self.entry_count == 0 {
            return Vec::new();
        }

        // Focus outside the list starts at the first entry for both arrows;
        // inside the list the index clamps at the ends, it never wraps.
        let next = match (self.focused_entry, direction) {
            (None, _) => 0,
            (Some(i), Direction::Up) => i.saturating_sub(1),
            (Some(i), Direction::Down) => (i + 1).min(self.entry_count - 1),
        };

        self.state = WidgetState::Navigating;
        self.focused_entry = Some(next);
        vec![Command::PreventDefault, Command::FocusEntry(next)]
    }
}

#[derive(Clone, Copy)]
enum Direction {
    Up,
    Down,
}
