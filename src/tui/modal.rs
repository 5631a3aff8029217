// Modal system for TUI overlays
//
// Self-contained modal dialogs that handle their own input and return actions.
// App just holds Option<Modal>, input routing acts on the returned ModalAction.

use crossterm::event::KeyCode;

/// Actions returned by modal input handling
#[derive(Debug, Clone)]
pub enum ModalAction {
    /// Input consumed, no state change needed
    None,
    /// Close the modal
    Close,
}

/// Available modal types
#[derive(Debug, Clone)]
pub enum Modal {
    /// Help overlay - shows keyboard shortcuts
    Help,
}

impl Modal {
    /// Create a help modal
    pub fn help() -> Self {
        Modal::Help
    }

    /// Handle keyboard input, return action for caller to execute
    pub fn handle_input(&mut self, key: KeyCode) -> ModalAction {
        match self {
            Modal::Help => match key {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => ModalAction::Close,
                _ => ModalAction::None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_closes_on_esc_q_or_question_mark() {
        for key in [KeyCode::Esc, KeyCode::Char('q'), KeyCode::Char('?')] {
            let mut modal = Modal::help();
            assert!(matches!(modal.handle_input(key), ModalAction::Close));
        }

        let mut modal = Modal::help();
        assert!(matches!(
            modal.handle_input(KeyCode::Char('x')),
            ModalAction::None
        ));
    }
}
