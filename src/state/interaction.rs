use serde::{Deserialize, Serialize};

/// Pointer signals forwarded by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    Entered,
    Left,
}

/// Hover state of the chart area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InteractionState {
    #[default]
    Idle,
    Hovered,
}

impl InteractionState {
    pub fn is_hovered(&self) -> bool {
        matches!(self, InteractionState::Hovered)
    }

    /// Apply a pointer event. Returns `true` if the state changed.
    pub fn handle(&mut self, event: PointerEvent) -> bool {
        let next = match event {
            PointerEvent::Entered => InteractionState::Hovered,
            PointerEvent::Left => InteractionState::Idle,
        };
        let changed = *self != next;
        *self = next;
        changed
    }

    pub fn pointer_entered(&mut self) -> bool {
        self.handle(PointerEvent::Entered)
    }

    pub fn pointer_left(&mut self) -> bool {
        self.handle(PointerEvent::Left)
    }

    pub fn label(&self) -> &'static str {
        match self {
            InteractionState::Idle => "Idle",
            InteractionState::Hovered => "Hovered",
        }
    }
}
