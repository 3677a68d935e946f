use super::Step;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    Me,
    Other,
    Ai,
    System,
}

impl Sender {
    pub fn css_class(self) -> &'static str {
        match self {
            Sender::Me => "me",
            Sender::Other => "other",
            Sender::Ai => "ai",
            Sender::System => "system",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Sequence number within the current loop, used as the render key.
    pub id: u64,
    pub sender: Sender,
    pub text: String,
    pub display_name: Option<String>,
}

/// Cells shared by every mock chat surface.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerState {
    pub messages: Vec<Message>,
    pub typing: Option<Sender>,
    pub input: String,
    pub zoomed: bool,
    pub panel_visible: bool,
    pub highlighted: Vec<String>,
    next_id: u64,
}

impl PlayerState {
    /// Applies one of the common steps. Returns `false` for `Cue`, `Delay`
    /// and `ResetAll`, which the owning demo has to deal with.
    pub fn apply<C>(&mut self, step: &Step<C>) -> bool {
        match step {
            Step::AppendMessage {
                sender,
                text,
                display_name,
            } => {
                self.push_message(*sender, text, display_name.clone());
            }
            Step::SetTyping { who, visible } => {
                self.typing = if *visible { Some(*who) } else { None };
            }
            Step::SetZoom(zoomed) => self.zoomed = *zoomed,
            Step::SetInput(text) => self.input = text.clone(),
            Step::SetPanel(visible) => self.panel_visible = *visible,
            Step::SetHighlight(ids) => self.highlighted = ids.clone(),
            Step::Delay(_) | Step::ResetAll | Step::Cue(_) => return false,
        }
        true
    }

    pub fn push_message(&mut self, sender: Sender, text: &str, display_name: Option<String>) {
        self.messages.push(Message {
            id: self.next_id,
            sender,
            text: text.to_string(),
            display_name,
        });
        self.next_id += 1;
    }

    pub fn clear_messages(&mut self) {
        self.messages.clear();
    }

    pub fn is_highlighted(&self, id: &str) -> bool {
        self.highlighted.iter().any(|h| h == id)
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;

    fn apply(state: &mut PlayerState, step: Step<Infallible>) -> bool {
        state.apply(&step)
    }

    #[test]
    fn messages_get_increasing_ids() {
        let mut state = PlayerState::default();
        apply(
            &mut state,
            Step::AppendMessage {
                sender: Sender::Other,
                text: "hey".into(),
                display_name: Some("Alex".into()),
            },
        );
        state.push_message(Sender::Me, "yo", None);

        let ids: Vec<u64> = state.messages.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![0, 1]);
        assert_eq!(state.messages[0].display_name.as_deref(), Some("Alex"));
    }

    #[test]
    fn hiding_typing_clears_any_actor() {
        let mut state = PlayerState::default();
        apply(&mut state, Step::SetTyping { who: Sender::Ai, visible: true });
        assert_eq!(state.typing, Some(Sender::Ai));

        apply(&mut state, Step::SetTyping { who: Sender::Other, visible: false });
        assert_eq!(state.typing, None);
    }

    #[test]
    fn cue_and_reset_are_left_to_the_caller() {
        let mut state = PlayerState::default();
        assert!(!apply(&mut state, Step::ResetAll));
        assert!(!apply(&mut state, Step::Delay(10)));
        assert!(apply(&mut state, Step::SetZoom(true)));
        assert!(state.zoomed);
    }

    #[test]
    fn highlight_replaces_previous_ids() {
        let mut state = PlayerState::default();
        apply(&mut state, Step::SetHighlight(vec!["gmail".into()]));
        apply(&mut state, Step::SetHighlight(vec!["docs".into()]));
        assert!(state.is_highlighted("docs"));
        assert!(!state.is_highlighted("gmail"));
        assert!(!state.is_empty());
    }
}
