use std::rc::Rc;

use yew::prelude::*;

use crate::components::message_list::MessageList;
use crate::config::TYPED_SEND_LEAD_MS;
use crate::hooks::use_scripted_demo;
use crate::timeline::{PlayerState, Sender, Step, Timeline, TimelineError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatTab {
    Friends,
    Groups,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatCue {
    /// Opens another conversation; the thread starts empty.
    SwitchChat { tab: ChatTab, name: &'static str },
}

const DM_NAME: &str = "Shivaraj Kolekar";
const GROUP_NAME: &str = "F1 Group";

const FRIENDS: [(&str, &str); 4] = [
    (DM_NAME, "online"),
    ("Alex Chen", "online"),
    ("Sarah Miles", "idle"),
    ("Priya Nair", "online"),
];

const GROUPS: [(&str, &str); 3] = [
    (GROUP_NAME, "4 members"),
    ("Design Crew", "6 members"),
    ("Weekend Ride", "3 members"),
];

pub fn script() -> Result<Timeline<ChatCue>, TimelineError> {
    let lead = TYPED_SEND_LEAD_MS;
    Timeline::builder()
        .cue(ChatCue::SwitchChat {
            tab: ChatTab::Friends,
            name: DM_NAME,
        })
        .delay(600)
        .typed_send("Yo, check out this latency! ⚡️", lead)
        .delay(700)
        .typing(Sender::Other, true)
        .delay(1000)
        .typing(Sender::Other, false)
        .message_from("Shivaraj", "Wait, did that send already?")
        .delay(600)
        .typed_send("Instant. 14ms global avg.", lead)
        .delay(800)
        .typing(Sender::Other, true)
        .delay(900)
        .typing(Sender::Other, false)
        .message_from("Shivaraj", "That's insane 🔥 faster than Discord")
        .delay(1200)
        .cue(ChatCue::SwitchChat {
            tab: ChatTab::Groups,
            name: GROUP_NAME,
        })
        .delay(400)
        .system("Shivaraj added you to the group")
        .delay(700)
        .message_from("Alex", "Guys, the new socket engine is live.")
        .delay(500)
        .message_from("Sarah", "Finally! 🚀")
        .delay(600)
        .typed_send("Handling 10k concurrents easy.", lead)
        .delay(800)
        .typing(Sender::Other, true)
        .delay(1000)
        .typing(Sender::Other, false)
        .message_from("Alex", "Zero message drops. This is production ready.")
        .delay(700)
        .typed_send("E2E encrypted too. Ship it. 🛡️", lead)
        .delay(2000)
        .build()
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatState {
    pub player: PlayerState,
    pub tab: ChatTab,
    pub chat_name: &'static str,
}

impl Default for ChatState {
    fn default() -> Self {
        Self {
            player: PlayerState::default(),
            tab: ChatTab::Friends,
            chat_name: DM_NAME,
        }
    }
}

impl Reducible for ChatState {
    type Action = Step<ChatCue>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            Step::ResetAll => next = Self::default(),
            Step::Cue(ChatCue::SwitchChat { tab, name }) => {
                next.tab = tab;
                next.chat_name = name;
                next.player.clear_messages();
            }
            step => {
                next.player.apply(&step);
            }
        }
        Rc::new(next)
    }
}

#[function_component(ChatDemo)]
pub fn chat_demo() -> Html {
    let state = use_scripted_demo::<ChatState, ChatCue>("chat", script, true);
    let player = &state.player;

    let contacts: &[(&str, &str)] = match state.tab {
        ChatTab::Friends => &FRIENDS,
        ChatTab::Groups => &GROUPS,
    };

    html! {
        <div class="mock-chat">
            <aside class="mock-sidebar">
                <div class="mock-brand">{"BetterChat"}</div>
                <div class="mock-tabs">
                    <span class={classes!("mock-tab", (state.tab == ChatTab::Friends).then_some("active"))}>{"Friends"}</span>
                    <span class={classes!("mock-tab", (state.tab == ChatTab::Groups).then_some("active"))}>{"Groups"}</span>
                </div>
                <div class="mock-section-label">
                    {if state.tab == ChatTab::Friends { "Online - 4" } else { "Your Groups" }}
                </div>
                <ul class="mock-contacts">
                    {for contacts.iter().map(|(name, status)| html! {
                        <li class={classes!("mock-contact", (*name == state.chat_name).then_some("selected"))}>
                            <span class="contact-name">{*name}</span>
                            <span class="contact-status">{*status}</span>
                        </li>
                    })}
                </ul>
            </aside>
            <section class="mock-thread">
                <header class="chat-header">
                    <span class="contact-name">{state.chat_name}</span>
                </header>
                <MessageList messages={player.messages.clone()} typing={player.typing} />
                <div class={classes!("mock-composer", (!player.input.is_empty()).then_some("has-text"))}>
                    {if player.input.is_empty() {
                        html! { <span class="placeholder">{format!("Message {}", state.chat_name)}</span> }
                    } else {
                        html! { <span class="draft">{&player.input}</span> }
                    }}
                </div>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demos::test_support::play_for;

    fn texts(state: &ChatState) -> Vec<&str> {
        state.player.messages.iter().map(|m| m.text.as_str()).collect()
    }

    #[test]
    fn script_builds() {
        let timeline = script().unwrap();
        assert_eq!(timeline.duration_ms(), 12_500);
    }

    #[test]
    fn switching_chats_clears_the_thread() {
        let mut state = Rc::new(ChatState::default());
        state = state.reduce(Step::AppendMessage {
            sender: Sender::Me,
            text: "hi".into(),
            display_name: None,
        });
        state = state.reduce(Step::Cue(ChatCue::SwitchChat {
            tab: ChatTab::Groups,
            name: GROUP_NAME,
        }));
        assert!(state.player.messages.is_empty());
        assert_eq!(state.tab, ChatTab::Groups);
        assert_eq!(state.chat_name, GROUP_NAME);

        state = state.reduce(Step::ResetAll);
        assert_eq!(*state, ChatState::default());
    }

    #[test]
    fn own_messages_are_typed_before_they_are_sent() {
        let state: Rc<ChatState> = play_for(script().unwrap(), 3_000);
        assert_eq!(state.player.input, "Instant. 14ms global avg.");
        assert_eq!(
            texts(&state),
            vec!["Yo, check out this latency! ⚡️", "Wait, did that send already?"]
        );
        assert_eq!(state.player.messages[0].sender, Sender::Me);
    }

    #[test]
    fn direct_message_part_ends_with_four_messages() {
        let state: Rc<ChatState> = play_for(script().unwrap(), 5_000);
        assert_eq!(state.tab, ChatTab::Friends);
        assert_eq!(state.player.messages.len(), 4);
        assert_eq!(state.player.typing, None);
        assert!(state.player.input.is_empty());
    }

    #[test]
    fn group_part_starts_from_an_empty_thread() {
        let state: Rc<ChatState> = play_for(script().unwrap(), 12_000);
        assert_eq!(state.tab, ChatTab::Groups);
        assert_eq!(
            texts(&state),
            vec![
                "Shivaraj added you to the group",
                "Guys, the new socket engine is live.",
                "Finally! 🚀",
                "Handling 10k concurrents easy.",
                "Zero message drops. This is production ready.",
                "E2E encrypted too. Ship it. 🛡️",
            ]
        );
        assert_eq!(state.player.messages[0].sender, Sender::System);
        assert_eq!(state.player.messages[2].display_name.as_deref(), Some("Sarah"));
    }

    #[test]
    fn loop_restart_returns_to_the_direct_message() {
        // 12.5s of script plus the loop pause, then the opening switch
        let state: Rc<ChatState> = play_for(script().unwrap(), 13_400);
        assert_eq!(state.tab, ChatTab::Friends);
        assert!(state.player.messages.is_empty());
    }
}
