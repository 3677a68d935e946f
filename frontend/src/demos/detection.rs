use std::rc::Rc;

use yew::prelude::*;

use crate::components::message_list::MessageList;
use crate::config::CONTEXT_CHIP_MS;
use crate::hooks::use_scripted_demo;
use crate::timeline::{PlayerState, Sender, Step, Timeline, TimelineError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetectionCue {
    /// The "AI detected" badge on the composer.
    Detect(bool),
    /// Wipes the conversation and its context chips.
    ClearThread,
}

const DOCKER_ANSWER: &str = "Docker is an open-source platform that automates the deployment of applications inside lightweight, portable containers. Containers package code and dependencies together, ensuring consistent behavior across different environments.\n\nKey benefits:\n• Isolation — Apps run independently\n• Portability — Works anywhere Docker runs\n• Efficiency — Shares OS kernel, uses less resources than VMs";

const NODE_ANSWER: &str = "Building on our Docker discussion, here's how to containerize your Node.js app:\n\n1. Create a Dockerfile:\n```dockerfile\nFROM node:18-alpine\nWORKDIR /app\nCOPY package*.json ./\nRUN npm install\nCOPY . .\nEXPOSE 3000\nCMD [\"npm\", \"start\"]\n```\n\n2. Build: `docker build -t myapp .`\n3. Run: `docker run -p 3000:3000 myapp`\n\nThis keeps your app consistent with what we discussed about containers.";

const MODELS: [(&str, &str, &str); 3] = [
    ("GPT-4o", "Reasoning", "Fast"),
    ("Claude 3.5", "Analysis", "Balanced"),
    ("Gemini Pro", "Research", "Deep"),
];

pub fn script() -> Result<Timeline<DetectionCue>, TimelineError> {
    Timeline::builder()
        // plain conversation
        .message_from("Alex", "Hey, I need help understanding containers for our project")
        .delay(1000)
        .message(Sender::Me, "Sure! Let me ask the AI assistant")
        .delay(800)
        // mention typed into a focused composer
        .zoom(true)
        .delay(500)
        .input("@")
        .delay(200)
        .input("@a")
        .delay(150)
        .input("@ai")
        .delay(300)
        .cue(DetectionCue::Detect(true))
        .delay(400)
        .input("@ai ")
        .delay(150)
        .input("@ai tell")
        .delay(100)
        .input("@ai tell me")
        .delay(100)
        .input("@ai tell me what")
        .delay(100)
        .input("@ai tell me what is")
        .delay(100)
        .input("@ai tell me what is docker")
        .delay(500)
        .input("")
        .cue(DetectionCue::Detect(false))
        .message(Sender::Me, "@ai tell me what is docker")
        .delay(300)
        .zoom(false)
        .delay(400)
        // assistant answers with context
        .system("AI Assistant activated")
        .delay(300)
        .highlight(&["docker", "containers", "project context"])
        .panel(true)
        .delay(500)
        .typing(Sender::Ai, true)
        .delay(CONTEXT_CHIP_MS - 500)
        .panel(false)
        .delay(500)
        .typing(Sender::Ai, false)
        .message(Sender::Ai, DOCKER_ANSWER)
        .delay(1500)
        // follow-up that relies on memory
        .typing(Sender::Other, true)
        .delay(800)
        .typing(Sender::Other, false)
        .message_from("Alex", "Can you ask it how we use this for our Node.js app?")
        .delay(800)
        .zoom(true)
        .delay(400)
        .input("@ai how do I containerize a Node.js app?")
        .delay(600)
        .cue(DetectionCue::Detect(true))
        .delay(400)
        .input("")
        .cue(DetectionCue::Detect(false))
        .message(Sender::Me, "@ai how do I containerize a Node.js app?")
        .delay(300)
        .zoom(false)
        .delay(300)
        .highlight(&["docker", "Node.js", "containerize", "previous context"])
        .panel(true)
        .delay(400)
        .typing(Sender::Ai, true)
        .delay(CONTEXT_CHIP_MS - 400)
        .panel(false)
        .delay(600)
        .typing(Sender::Ai, false)
        .message(Sender::Ai, NODE_ANSWER)
        .delay(1500)
        .typing(Sender::Other, true)
        .delay(600)
        .typing(Sender::Other, false)
        .message_from("Alex", "Perfect! It remembered the context 🔥")
        .delay(800)
        .message(Sender::Me, "That's the magic — full conversation memory ✨")
        .delay(2500)
        .cue(DetectionCue::ClearThread)
        .build()
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetectionState {
    pub player: PlayerState,
    pub detecting: bool,
}

impl DetectionState {
    pub fn mentions_ai(&self) -> bool {
        self.player.input.to_lowercase().contains("@ai")
    }
}

impl Reducible for DetectionState {
    type Action = Step<DetectionCue>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            Step::ResetAll => next = Self::default(),
            Step::Cue(DetectionCue::Detect(on)) => next.detecting = on,
            Step::Cue(DetectionCue::ClearThread) => {
                next.player.clear_messages();
                next.player.highlighted.clear();
                next.player.panel_visible = false;
            }
            step => {
                next.player.apply(&step);
            }
        }
        Rc::new(next)
    }
}

#[function_component(DetectionDemo)]
pub fn detection_demo() -> Html {
    let state = use_scripted_demo::<DetectionState, DetectionCue>("detection", script, true);
    let player = &state.player;
    let ai_typing = player.typing == Some(Sender::Ai);

    html! {
        <div class={classes!("mock-chat", "detection", player.zoomed.then_some("zoomed"))}>
            <section class="mock-thread">
                <header class="chat-header">
                    <span class="contact-name">{"Project Team"}</span>
                    {if ai_typing {
                        html! { <span class="ai-status">{"AI is thinking…"}</span> }
                    } else {
                        html! {}
                    }}
                </header>
                <MessageList messages={player.messages.clone()} typing={player.typing} />
                {if player.panel_visible {
                    html! {
                        <div class="context-chips">
                            <span class="chips-label">{"Context"}</span>
                            {for player.highlighted.iter().map(|item| html! {
                                <span class="chip">{item}</span>
                            })}
                        </div>
                    }
                } else {
                    html! {}
                }}
                <div class={classes!(
                    "mock-composer",
                    (!player.input.is_empty()).then_some("has-text"),
                    state.mentions_ai().then_some("ai-mention")
                )}>
                    {if player.input.is_empty() {
                        html! { <span class="placeholder">{"Type a message…"}</span> }
                    } else {
                        html! { <span class="draft">{&player.input}</span> }
                    }}
                    {if state.detecting {
                        html! { <span class="detect-badge">{"AI detected"}</span> }
                    } else {
                        html! {}
                    }}
                </div>
            </section>
            <aside class="model-list">
                {for MODELS.iter().enumerate().map(|(i, (name, kind, speed))| html! {
                    <div class={classes!("model-card", (i == 0).then_some("active"))}>
                        <span class="model-name">{*name}</span>
                        <span class="model-kind">{*kind}</span>
                        <span class="model-speed">{*speed}</span>
                    </div>
                })}
            </aside>
        </div>
    }
}
