//! Core component trait - the foundation of the UI system
//!
//! Every focusable UI element implements `Component` so App can route
//! keys and the view layer can ask whether it has focus.

use crate::tui::theme::Theme;

/// Unique identifier for a component
///
/// Used for focus tracking and event routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentId {
    /// Name search input
    Search,
    /// Launch year tags
    Years,
    /// Successful Launch True/False buttons
    LaunchFilter,
    /// Successful Landing True/False buttons
    LandFilter,
    /// Launch cards list
    Cards,
    /// System logs panel
    Logs,
}

impl ComponentId {
    /// Focus order, top to bottom as drawn
    pub const FOCUS_ORDER: [ComponentId; 6] = [
        ComponentId::Search,
        ComponentId::Years,
        ComponentId::LaunchFilter,
        ComponentId::LandFilter,
        ComponentId::Cards,
        ComponentId::Logs,
    ];

    fn position(self) -> usize {
        Self::FOCUS_ORDER
            .iter()
            .position(|id| *id == self)
            .unwrap_or(0)
    }

    /// Cycle to next focusable component (Tab behavior)
    pub fn next_focus(self) -> Self {
        Self::FOCUS_ORDER[(self.position() + 1) % Self::FOCUS_ORDER.len()]
    }

    /// Cycle to previous focusable component (Shift+Tab behavior)
    pub fn prev_focus(self) -> Self {
        let len = Self::FOCUS_ORDER.len();
        Self::FOCUS_ORDER[(self.position() + len - 1) % len]
    }

    /// Short name for the status bar
    pub fn label(self) -> &'static str {
        match self {
            ComponentId::Search => "Search",
            ComponentId::Years => "Launch Year",
            ComponentId::LaunchFilter => "Successful Launch",
            ComponentId::LandFilter => "Successful Landing",
            ComponentId::Cards => "Launches",
            ComponentId::Logs => "Logs",
        }
    }
}

/// Immutable context passed to components during rendering
///
/// Components only see what they need - no access to mutable app state.
#[derive(Debug, Clone)]
pub struct RenderContext<'a> {
    /// Color theme for styling
    pub theme: &'a Theme,

    /// Which component currently has focus
    pub focus: ComponentId,

    /// Animation frame counter (for the loading spinner)
    pub animation_frame: usize,
}

impl<'a> RenderContext<'a> {
    pub fn new(theme: &'a Theme, focus: ComponentId, animation_frame: usize) -> Self {
        Self {
            theme,
            focus,
            animation_frame,
        }
    }

    /// Check if a component is currently focused
    pub fn is_focused(&self, id: ComponentId) -> bool {
        self.focus == id
    }

    /// Get spinner character for current animation frame
    pub fn spinner_char(&self) -> char {
        const SPINNER: [char; 4] = ['◐', '◓', '◑', '◒'];
        SPINNER[self.animation_frame % SPINNER.len()]
    }
}

/// Base trait for focusable UI components
pub trait Component {
    /// Unique identifier for this component
    fn id(&self) -> ComponentId;
}
