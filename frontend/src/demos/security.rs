use std::rc::Rc;

use yew::prelude::*;

use crate::config::IN_VIEW_THRESHOLD;
use crate::hooks::{use_in_view, use_scripted_demo};
use crate::timeline::{PlayerState, Step, Timeline, TimelineError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Checking,
    Passed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredItem {
    pub label: &'static str,
    pub sealed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Check {
    pub name: &'static str,
    pub status: CheckStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecurityCue {
    Phase(u8),
    Compose(&'static str),
    Key(&'static str),
    Encrypt(&'static str),
    /// Percent of the tunnel the ciphertext has travelled.
    Tunnel(u8),
    /// Lists the stored parts, none sealed yet.
    Store(Vec<&'static str>),
    Seal(usize),
    /// Updates the named check in place, or appends it.
    Verify { check: &'static str, status: CheckStatus },
    Decrypt(&'static str),
    Shield(bool),
    Confirmed,
}

pub const PHASES: [&str; 4] = ["COMPOSE", "ENCRYPT", "STORE", "DELIVER"];

const MESSAGE: &str = "Hey team, the API keys are ready 🔑";

const STORED: [&str; 4] = ["Message body", "Sender identity", "Attachments", "Metadata"];

const CHECKS: [(&str, u32); 3] = [
    ("Signature verification", 700),
    ("Integrity check", 600),
    ("Recipient auth", 500),
];

pub fn script() -> Result<Timeline<SecurityCue>, TimelineError> {
    let mut builder = Timeline::builder()
        .cue(SecurityCue::Phase(1))
        .delay(500)
        .cue(SecurityCue::Compose(MESSAGE))
        .delay(1200)
        // encryption
        .cue(SecurityCue::Phase(2))
        .delay(400)
        .cue(SecurityCue::Key("AES-256-GCM"))
        .delay(600)
        .cue(SecurityCue::Encrypt("0x7f3a...9bc2e1d4"))
        .delay(800);
    for percent in [25, 50, 75] {
        builder = builder.cue(SecurityCue::Tunnel(percent)).delay(300);
    }
    builder = builder
        .cue(SecurityCue::Tunnel(100))
        .delay(600)
        // storage, items seal 350ms apart
        .cue(SecurityCue::Phase(3))
        .delay(400)
        .cue(SecurityCue::Store(STORED.to_vec()))
        .delay(300);
    for index in 0..STORED.len() {
        let gap = if index + 1 == STORED.len() { 450 } else { 350 };
        builder = builder.cue(SecurityCue::Seal(index)).delay(gap);
    }

    // delivery
    builder = builder.cue(SecurityCue::Phase(4)).delay(400);
    for (i, (check, takes)) in CHECKS.into_iter().enumerate() {
        let settle = if i + 1 == CHECKS.len() { 500 } else { 300 };
        builder = builder
            .cue(SecurityCue::Verify {
                check,
                status: CheckStatus::Checking,
            })
            .delay(takes)
            .cue(SecurityCue::Verify {
                check,
                status: CheckStatus::Passed,
            })
            .delay(settle);
    }

    builder
        .cue(SecurityCue::Decrypt(MESSAGE))
        .delay(600)
        .cue(SecurityCue::Shield(true))
        .delay(400)
        .cue(SecurityCue::Confirmed)
        .delay(3000)
        .build()
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SecurityState {
    pub player: PlayerState,
    pub phase: u8,
    pub message: Option<&'static str>,
    pub key: Option<&'static str>,
    pub cipher: Option<&'static str>,
    pub tunnel: u8,
    pub stored: Vec<StoredItem>,
    pub checks: Vec<Check>,
    pub decrypted: Option<&'static str>,
    pub shield: bool,
    pub confirmed: bool,
}

impl SecurityState {
    fn verify(&mut self, name: &'static str, status: CheckStatus) {
        match self.checks.iter_mut().find(|c| c.name == name) {
            Some(check) => check.status = status,
            None => self.checks.push(Check { name, status }),
        }
    }
}

impl Reducible for SecurityState {
    type Action = Step<SecurityCue>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            Step::ResetAll => next = Self::default(),
            Step::Cue(cue) => match cue {
                SecurityCue::Phase(phase) => next.phase = phase,
                SecurityCue::Compose(text) => next.message = Some(text),
                SecurityCue::Key(label) => next.key = Some(label),
                SecurityCue::Encrypt(cipher) => next.cipher = Some(cipher),
                SecurityCue::Tunnel(percent) => next.tunnel = percent.min(100),
                SecurityCue::Store(labels) => {
                    next.stored = labels
                        .into_iter()
                        .map(|label| StoredItem { label, sealed: false })
                        .collect();
                }
                SecurityCue::Seal(index) => {
                    if let Some(item) = next.stored.get_mut(index) {
                        item.sealed = true;
                    }
                }
                SecurityCue::Verify { check, status } => next.verify(check, status),
                SecurityCue::Decrypt(text) => next.decrypted = Some(text),
                SecurityCue::Shield(on) => next.shield = on,
                SecurityCue::Confirmed => next.confirmed = true,
            },
            step => {
                next.player.apply(&step);
            }
        }
        Rc::new(next)
    }
}

#[function_component(SecurityDemo)]
pub fn security_demo() -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), IN_VIEW_THRESHOLD);
    let state = use_scripted_demo::<SecurityState, SecurityCue>("security", script, in_view);

    html! {
        <div class={classes!("security-demo", state.shield.then_some("shielded"))} ref={node}>
            <div class="phase-bar">
                {for PHASES.iter().enumerate().map(|(i, label)| {
                    let step = i as u8 + 1;
                    html! {
                        <span class={classes!(
                            "phase",
                            (state.phase == step).then_some("active"),
                            (state.phase > step).then_some("passed")
                        )}>
                            {*label}
                        </span>
                    }
                })}
            </div>
            <div class="sender-card">
                <span class="card-label">{"Outgoing"}</span>
                <p class="plaintext">{state.message.unwrap_or("")}</p>
                {for state.key.map(|key| html! { <span class="key-badge">{key}</span> })}
                {for state.cipher.map(|cipher| html! { <code class="ciphertext">{cipher}</code> })}
            </div>
            <div class="tunnel">
                <div class="tunnel-fill" style={format!("width: {}%", state.tunnel)}></div>
            </div>
            <ul class="vault">
                {for state.stored.iter().map(|item| html! {
                    <li class={classes!("vault-item", item.sealed.then_some("sealed"))}>
                        <span>{item.label}</span>
                        <span class="lock">{if item.sealed { "encrypted" } else { "…" }}</span>
                    </li>
                })}
            </ul>
            <ul class="checks">
                {for state.checks.iter().map(|check| {
                    let passed = check.status == CheckStatus::Passed;
                    html! {
                        <li class={classes!("check", passed.then_some("passed"))}>
                            {if passed { "✓ " } else { "… " }}{check.name}
                        </li>
                    }
                })}
            </ul>
            <div class="receiver-card">
                <span class="card-label">{"Delivered"}</span>
                <p class="plaintext">{state.decrypted.unwrap_or("")}</p>
                {if state.confirmed {
                    html! { <span class="confirm-badge">{"End-to-end verified"}</span> }
                } else {
                    html! {}
                }}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demos::test_support::play_for;

    fn sealed(state: &SecurityState) -> Vec<bool> {
        state.stored.iter().map(|item| item.sealed).collect()
    }

    #[test]
    fn script_builds() {
        assert_eq!(script().unwrap().duration_ms(), 14_500);
    }

    #[test]
    fn message_is_encrypted_before_tunnelling() {
        let state: Rc<SecurityState> = play_for(script().unwrap(), 3_000);
        assert_eq!(state.phase, 2);
        assert_eq!(state.message, Some(MESSAGE));
        assert_eq!(state.key, Some("AES-256-GCM"));
        assert_eq!(state.cipher, Some("0x7f3a...9bc2e1d4"));
        assert_eq!(state.tunnel, 0);

        let halfway: Rc<SecurityState> = play_for(script().unwrap(), 3_900);
        assert_eq!(halfway.tunnel, 50);
    }

    #[test]
    fn stored_items_seal_one_by_one() {
        let listed: Rc<SecurityState> = play_for(script().unwrap(), 5_500);
        assert_eq!(listed.phase, 3);
        assert_eq!(sealed(&listed), vec![false; 4]);

        let two: Rc<SecurityState> = play_for(script().unwrap(), 6_100);
        assert_eq!(sealed(&two), vec![true, true, false, false]);

        let all: Rc<SecurityState> = play_for(script().unwrap(), 6_800);
        assert_eq!(sealed(&all), vec![true; 4]);
    }

    #[test]
    fn checks_update_in_place() {
        let state: Rc<SecurityState> = play_for(script().unwrap(), 8_700);
        assert_eq!(
            state.checks,
            vec![
                Check {
                    name: "Signature verification",
                    status: CheckStatus::Passed,
                },
                Check {
                    name: "Integrity check",
                    status: CheckStatus::Checking,
                },
            ]
        );
    }

    #[test]
    fn delivery_ends_shielded_and_confirmed() {
        let state: Rc<SecurityState> = play_for(script().unwrap(), 11_600);
        assert_eq!(state.checks.len(), 3);
        assert!(state.checks.iter().all(|c| c.status == CheckStatus::Passed));
        assert_eq!(state.decrypted, Some(MESSAGE));
        assert!(state.shield);
        assert!(state.confirmed);
    }

    #[test]
    fn loop_starts_from_a_blank_pipeline() {
        let state: Rc<SecurityState> = play_for(script().unwrap(), 15_400);
        assert_eq!(state.phase, 1);
        assert_eq!(state.message, None);
        assert!(state.stored.is_empty());
        assert!(state.checks.is_empty());
        assert!(!state.confirmed);
    }
}
