use std::convert::Infallible;
use std::rc::Rc;

use yew::prelude::*;

use crate::components::message_list::MessageList;
use crate::config::TYPED_SEND_LEAD_MS;
use crate::hooks::use_scripted_demo;
use crate::timeline::{PlayerState, Sender, Step, Timeline, TimelineError};

pub struct Integration {
    pub id: &'static str,
    pub name: &'static str,
    pub title: &'static str,
    pub details: &'static [&'static str],
    pub outcome: &'static str,
}

pub static INTEGRATIONS: [Integration; 4] = [
    Integration {
        id: "gmail",
        name: "Gmail",
        title: "Project Update: Q4 Progress",
        details: &["To: team@company.com", "Attached: progress-report.pdf"],
        outcome: "Sent to 12 members",
    },
    Integration {
        id: "docs",
        name: "Google Docs",
        title: "Sprint Planning Notes",
        details: &["Last edited just now"],
        outcome: "Shared with edit access",
    },
    Integration {
        id: "notion",
        name: "Notion",
        title: "Engineering Roadmap",
        details: &["Status: Active", "Sprint 14"],
        outcome: "Linked & auto-syncing",
    },
    Integration {
        id: "calendar",
        name: "Calendar",
        title: "Daily Standup",
        details: &["Tomorrow · 10:00 AM", "5 participants"],
        outcome: "Invites sent",
    },
];

pub fn script() -> Result<Timeline<Infallible>, TimelineError> {
    let lead = TYPED_SEND_LEAD_MS;
    let mut builder = Timeline::builder()
        .message_from("Sarah", "Can you email the project update and set up tomorrow's standup?")
        .delay(1000)
        .typed_send("On it — let me pull up integrations real quick", lead)
        .delay(800)
        .typing(Sender::Other, true)
        .delay(900)
        .typing(Sender::Other, false)
        .message_from("Sarah", "Use the + button, it's insanely fast ⚡")
        .delay(1200)
        .zoom(true)
        .delay(900)
        .panel(true)
        .delay(700);

    for integration in &INTEGRATIONS {
        builder = builder.highlight(&[integration.id]).delay(2200);
    }

    builder
        .highlight(&[])
        .delay(300)
        .panel(false)
        .delay(300)
        .zoom(false)
        .delay(600)
        .typed_send("✓ Done! Email sent, docs shared, standup scheduled 🎯", lead)
        .delay(900)
        .typing(Sender::Other, true)
        .delay(700)
        .typing(Sender::Other, false)
        .message_from("Sarah", "All from one chat bar. This is the future 🔥")
        .delay(2500)
        .build()
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntegrationsState {
    pub player: PlayerState,
}

impl IntegrationsState {
    pub fn active(&self) -> Option<&'static Integration> {
        let id = self.player.highlighted.first()?;
        INTEGRATIONS.iter().find(|integration| integration.id == id.as_str())
    }
}

impl Reducible for IntegrationsState {
    type Action = Step<Infallible>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            Step::ResetAll => next = Self::default(),
            Step::Cue(never) => match never {},
            step => {
                next.player.apply(&step);
            }
        }
        Rc::new(next)
    }
}

#[function_component(IntegrationsDemo)]
pub fn integrations_demo() -> Html {
    let state = use_scripted_demo::<IntegrationsState, Infallible>("integrations", script, true);
    let player = &state.player;
    let active = state.active();

    html! {
        <div class={classes!("mock-chat", "integrations", player.zoomed.then_some("zoomed"))}>
            <section class="mock-thread">
                <header class="chat-header">
                    <span class="contact-name">{"Sarah Miles"}</span>
                </header>
                <MessageList messages={player.messages.clone()} typing={player.typing} />
                {if player.panel_visible {
                    html! {
                        <div class="integration-panel">
                            <div class="integration-grid">
                                {for INTEGRATIONS.iter().map(|integration| html! {
                                    <div class={classes!(
                                        "integration-tile",
                                        player.is_highlighted(integration.id).then_some("active")
                                    )}>
                                        {integration.name}
                                    </div>
                                })}
                            </div>
                            {match active {
                                Some(integration) => html! {
                                    <div class="integration-preview" key={integration.id}>
                                        <div class="preview-title">{integration.title}</div>
                                        {for integration.details.iter().map(|line| html! {
                                            <div class="preview-line">{*line}</div>
                                        })}
                                        <div class="preview-outcome">{"✓ "}{integration.outcome}</div>
                                    </div>
                                },
                                None => html! {},
                            }}
                        </div>
                    }
                } else {
                    html! {}
                }}
                <div class={classes!("mock-composer", (!player.input.is_empty()).then_some("has-text"))}>
                    <span class={classes!("plus-button", player.panel_visible.then_some("open"))}>{"+"}</span>
                    {if player.input.is_empty() {
                        html! { <span class="placeholder">{"Message Sarah"}</span> }
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

    #[test]
    fn script_builds() {
        assert_eq!(script().unwrap().duration_ms(), 19_600);
    }

    #[test]
    fn panel_opens_after_zoom() {
        let zoomed: Rc<IntegrationsState> = play_for(script().unwrap(), 4_000);
        assert!(zoomed.player.zoomed);
        assert!(!zoomed.player.panel_visible);

        let open: Rc<IntegrationsState> = play_for(script().unwrap(), 5_000);
        assert!(open.player.panel_visible);
        assert!(open.active().is_none());
    }

    #[test]
    fn integrations_are_cycled_in_order() {
        let expected = [(5_600, "gmail"), (7_800, "docs"), (10_000, "notion"), (12_200, "calendar")];
        for (at, id) in expected {
            let state: Rc<IntegrationsState> = play_for(script().unwrap(), at);
            assert_eq!(state.active().map(|i| i.id), Some(id), "at {}ms", at);
        }
    }

    #[test]
    fn panel_and_zoom_close_before_confirmation() {
        let state: Rc<IntegrationsState> = play_for(script().unwrap(), 15_000);
        assert!(state.active().is_none());
        assert!(!state.player.panel_visible);
        assert!(!state.player.zoomed);

        let done: Rc<IntegrationsState> = play_for(script().unwrap(), 17_200);
        let texts: Vec<&str> = done.player.messages.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts.len(), 5);
        assert_eq!(texts[3], "✓ Done! Email sent, docs shared, standup scheduled 🎯");
        assert_eq!(texts[4], "All from one chat bar. This is the future 🔥");
    }
}
