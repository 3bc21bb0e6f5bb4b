//! Hover / focus state machine for interactive triangles

use tracing::debug;

use crate::facet::FacetName;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    Hovering(FacetName),
    Focused(FacetName),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    Home,
    End,
    Enter,
    Space,
}

/// Input delivered to a band or to the triangle as a whole
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    PointerEnter(FacetName),
    PointerLeave,
    Click(FacetName),
    FocusIn(FacetName),
    FocusOut,
    Key(Key),
}

/// Presentation emphasis of a band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Emphasis {
    #[default]
    None,
    Hovered,
    Focused,
}

impl Emphasis {
    pub fn stroke_width(self) -> f64 {
        match self {
            Emphasis::None => 1.0,
            Emphasis::Hovered => 2.0,
            Emphasis::Focused => 3.0,
        }
    }

    pub fn stroke_opacity(self) -> f64 {
        match self {
            Emphasis::None => 0.35,
            Emphasis::Hovered => 0.75,
            Emphasis::Focused => 1.0,
        }
    }
}

/// Local interaction state of one triangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Interaction {
    state: InteractionState,
}

impl Interaction {
    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn emphasis(&self, facet: FacetName) -> Emphasis {
        match self.state {
            InteractionState::Hovering(f) if f == facet => Emphasis::Hovered,
            InteractionState::Focused(f) if f == facet => Emphasis::Focused,
            _ => Emphasis::None,
        }
    }

    /// Apply one event. Selection is reported through `on_band_select`.
    /// Returns true when the state changed.
    pub fn handle<F>(&mut self, event: InputEvent, mut on_band_select: F) -> bool
    where
        F: FnMut(FacetName),
    {
        let next = match (self.state, event) {
            // the pointer takes over from keyboard focus
            (_, InputEvent::PointerEnter(f)) => InteractionState::Hovering(f),
            (InteractionState::Hovering(_), InputEvent::PointerLeave) => InteractionState::Idle,
            (_, InputEvent::FocusIn(f)) => InteractionState::Focused(f),
            (InteractionState::Focused(_), InputEvent::FocusOut) => InteractionState::Idle,
            (_, InputEvent::Click(f)) => {
                on_band_select(f);
                self.state
            }
            (InteractionState::Focused(f), InputEvent::Key(key)) => match key {
                Key::ArrowUp => InteractionState::Focused(f.prev()),
                Key::ArrowDown => InteractionState::Focused(f.next()),
                Key::Home => InteractionState::Focused(FacetName::first()),
                Key::End => InteractionState::Focused(FacetName::last()),
                Key::Enter | Key::Space => {
                    on_band_select(f);
                    self.state
                }
            },
            (state, _) => state,
        };

        let changed = next != self.state;
        if changed {
            debug!(from = ?self.state, to = ?next, "interaction state");
            self.state = next;
        }
        changed
    }
}
