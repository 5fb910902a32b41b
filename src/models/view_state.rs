use super::Mode;

/// Everything the surfaces display, owned by [`crate::App`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    /// User-edited input, source of the rendered symbol
    pub text: String,
    /// Last successfully decoded payload
    pub scan_result: String,
    /// Mounted surface
    pub mode: Mode,
    /// Export in progress
    pub loading: bool,
    /// Banner text, cleared on the next edit or action
    pub error: Option<String>,
}

impl ViewState {
    /// A symbol (and its export/share actions) is shown for any non-empty text
    pub fn shows_symbol(&self) -> bool {
        !self.text.is_empty()
    }

    /// The clear action is enabled when there is something to clear
    pub fn can_clear(&self) -> bool {
        !self.text.is_empty() || !self.scan_result.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = ViewState::default();
        assert_eq!(state.mode, Mode::Home);
        assert!(!state.shows_symbol());
        assert!(!state.can_clear());
        assert!(!state.loading);
        assert!(state.error.is_none());
    }

    #[test]
    fn test_can_clear_with_only_result() {
        let state = ViewState {
            scan_result: "x".into(),
            ..ViewState::default()
        };
        assert!(state.can_clear());
        assert!(!state.shows_symbol());
    }
}
