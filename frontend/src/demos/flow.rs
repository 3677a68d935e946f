use std::rc::Rc;

use yew::prelude::*;

use crate::config::IN_VIEW_THRESHOLD;
use crate::hooks::{use_in_view, use_scripted_demo};
use crate::timeline::{PlayerState, Step, Timeline, TimelineError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    Pending,
    Running,
    Done,
}

impl TaskStatus {
    fn css_class(self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::Running => "running",
            TaskStatus::Done => "done",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub name: &'static str,
    pub status: TaskStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowCue {
    /// 1 to 4, 0 before the first pass starts.
    Phase(u8),
    Cursor(bool),
    /// The typed command leaves the terminal.
    Send,
    Tokens(Vec<&'static str>),
    Intent(&'static str),
    Route(&'static str),
    /// Replaces the task list, every task pending.
    Exec(Vec<&'static str>),
    ExecUpdate { index: usize, status: TaskStatus },
    Result(Vec<&'static str>),
    Confirm,
}

pub const PHASES: [&str; 4] = ["COMMAND", "PROCESS", "EXECUTE", "CONFIRM"];

const COMMAND: &str = "@ai send a project update to the team";

const TASKS: [&str; 4] = [
    "Fetch project data",
    "Generate email draft",
    "Resolve recipients",
    "Send via Gmail API",
];

pub fn script() -> Result<Timeline<FlowCue>, TimelineError> {
    let typed = [
        (120, "@"),
        (100, "@a"),
        (200, "@ai"),
        (100, "@ai "),
        (80, "@ai send"),
        (80, "@ai send a"),
        (80, "@ai send a project"),
        (80, "@ai send a project update"),
        (80, "@ai send a project update to"),
        (80, "@ai send a project update to the"),
        (500, COMMAND),
    ];

    let mut builder = Timeline::builder()
        .cue(FlowCue::Phase(1))
        .cue(FlowCue::Cursor(true))
        .delay(600);
    for (pause, text) in typed {
        builder = builder.input(text).delay(pause);
    }

    let run = |index, status| FlowCue::ExecUpdate { index, status };

    builder
        .cue(FlowCue::Send)
        .cue(FlowCue::Cursor(false))
        .delay(800)
        // processing
        .cue(FlowCue::Phase(2))
        .delay(400)
        .cue(FlowCue::Tokens(vec!["@ai", "send", "project", "update", "team"]))
        .delay(800)
        .cue(FlowCue::Intent("ACTION: email.compose"))
        .delay(600)
        .cue(FlowCue::Route("Gmail Integration → Team Channel"))
        .delay(1000)
        // execution
        .cue(FlowCue::Phase(3))
        .delay(400)
        .cue(FlowCue::Exec(TASKS.to_vec()))
        .delay(500)
        .cue(run(0, TaskStatus::Running))
        .delay(600)
        .cue(run(0, TaskStatus::Done))
        .cue(run(1, TaskStatus::Running))
        .delay(800)
        .cue(run(1, TaskStatus::Done))
        .cue(run(2, TaskStatus::Running))
        .delay(500)
        .cue(run(2, TaskStatus::Done))
        .cue(run(3, TaskStatus::Running))
        .delay(700)
        .cue(run(3, TaskStatus::Done))
        .delay(600)
        // confirmation
        .cue(FlowCue::Phase(4))
        .delay(400)
        .cue(FlowCue::Result(vec![
            "✓ Email sent to 8 team members",
            "✓ Subject: Q4 Project Update",
            "✓ Attachments: progress-report.pdf",
            "✓ Delivery confirmed — 14ms",
        ]))
        .delay(800)
        .cue(FlowCue::Confirm)
        .delay(3000)
        .build()
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlowState {
    pub player: PlayerState,
    pub phase: u8,
    pub cursor: bool,
    pub sent: bool,
    pub tokens: Vec<&'static str>,
    pub intent: Option<&'static str>,
    pub route: Option<&'static str>,
    pub tasks: Vec<Task>,
    pub result: Vec<&'static str>,
    pub confirmed: bool,
}

impl Reducible for FlowState {
    type Action = Step<FlowCue>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            Step::ResetAll => next = Self::default(),
            Step::Cue(cue) => match cue {
                FlowCue::Phase(phase) => next.phase = phase,
                FlowCue::Cursor(visible) => next.cursor = visible,
                FlowCue::Send => next.sent = true,
                FlowCue::Tokens(tokens) => next.tokens = tokens,
                FlowCue::Intent(label) => next.intent = Some(label),
                FlowCue::Route(route) => next.route = Some(route),
                FlowCue::Exec(names) => {
                    next.tasks = names
                        .into_iter()
                        .map(|name| Task {
                            name,
                            status: TaskStatus::Pending,
                        })
                        .collect();
                }
                FlowCue::ExecUpdate { index, status } => {
                    if let Some(task) = next.tasks.get_mut(index) {
                        task.status = status;
                    }
                }
                FlowCue::Result(lines) => next.result = lines,
                FlowCue::Confirm => next.confirmed = true,
            },
            step => {
                next.player.apply(&step);
            }
        }
        Rc::new(next)
    }
}

#[function_component(FlowDemo)]
pub fn flow_demo() -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), IN_VIEW_THRESHOLD);
    let state = use_scripted_demo::<FlowState, FlowCue>("flow", script, in_view);

    html! {
        <div class="flow-demo" ref={node}>
            <div class="phase-bar">
                {for PHASES.iter().enumerate().map(|(i, label)| {
                    let step = i as u8 + 1;
                    html! {
                        <span class={classes!(
                            "phase",
                            (state.phase == step).then_some("active"),
                            (state.phase > step).then_some("passed")
                        )}>
                            {format!("0{} {}", step, label)}
                        </span>
                    }
                })}
            </div>
            <div class={classes!("terminal", state.sent.then_some("sent"))}>
                <span class="prompt">{"> "}</span>
                <span class="command">{&state.player.input}</span>
                {if state.cursor {
                    html! { <span class="cursor">{"▋"}</span> }
                } else {
                    html! {}
                }}
            </div>
            {if state.tokens.is_empty() {
                html! {}
            } else {
                html! {
                    <div class="process-panel">
                        <div class="tokens">
                            {for state.tokens.iter().map(|token| html! {
                                <span class="token">{*token}</span>
                            })}
                        </div>
                        {for state.intent.map(|label| html! { <div class="intent">{label}</div> })}
                        {for state.route.map(|route| html! { <div class="route">{route}</div> })}
                    </div>
                }
            }}
            <ul class="task-list">
                {for state.tasks.iter().map(|task| html! {
                    <li class={classes!("task", task.status.css_class())}>
                        <span class="task-name">{task.name}</span>
                        <span class="task-status">{task.status.css_class()}</span>
                    </li>
                })}
            </ul>
            <div class="result-lines">
                {for state.result.iter().map(|line| html! { <div class="result-line">{*line}</div> })}
            </div>
            {if state.confirmed {
                html! { <div class="confirm-badge">{"Action complete"}</div> }
            } else {
                html! {}
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demos::test_support::play_for;

    fn statuses(state: &FlowState) -> Vec<TaskStatus> {
        state.tasks.iter().map(|t| t.status).collect()
    }

    #[test]
    fn script_builds() {
        assert_eq!(script().unwrap().duration_ms(), 14_000);
    }

    #[test]
    fn command_is_typed_then_sent() {
        let typing: Rc<FlowState> = play_for(script().unwrap(), 1_150);
        assert_eq!(typing.phase, 1);
        assert!(typing.cursor);
        assert_eq!(typing.player.input, "@ai send");

        let sent: Rc<FlowState> = play_for(script().unwrap(), 2_100);
        assert_eq!(sent.player.input, COMMAND);
        assert!(sent.sent);
        assert!(!sent.cursor);
    }

    #[test]
    fn processing_reveals_tokens_intent_and_route() {
        let state: Rc<FlowState> = play_for(script().unwrap(), 4_100);
        assert_eq!(state.phase, 2);
        assert_eq!(state.tokens.len(), 5);
        assert_eq!(state.intent, Some("ACTION: email.compose"));
        assert_eq!(state.route, None);

        let routed: Rc<FlowState> = play_for(script().unwrap(), 4_700);
        assert_eq!(routed.route, Some("Gmail Integration → Team Channel"));
    }

    #[test]
    fn tasks_run_one_after_another() {
        use TaskStatus::*;

        let queued: Rc<FlowState> = play_for(script().unwrap(), 6_100);
        assert_eq!(queued.phase, 3);
        assert_eq!(statuses(&queued), vec![Pending; 4]);

        let second: Rc<FlowState> = play_for(script().unwrap(), 7_200);
        assert_eq!(statuses(&second), vec![Done, Running, Pending, Pending]);

        let finished: Rc<FlowState> = play_for(script().unwrap(), 9_200);
        assert_eq!(statuses(&finished), vec![Done; 4]);
    }

    #[test]
    fn out_of_range_update_is_ignored() {
        let mut state = Rc::new(FlowState::default());
        state = state.reduce(Step::Cue(FlowCue::Exec(vec!["only"])));
        state = state.reduce(Step::Cue(FlowCue::ExecUpdate {
            index: 3,
            status: TaskStatus::Done,
        }));
        assert_eq!(statuses(&state), vec![TaskStatus::Pending]);
    }

    #[test]
    fn confirmation_then_reset_on_loop() {
        let done: Rc<FlowState> = play_for(script().unwrap(), 11_000);
        assert_eq!(done.phase, 4);
        assert_eq!(done.result.len(), 4);
        assert!(done.confirmed);

        // 14s of script plus the loop pause
        let restarted: Rc<FlowState> = play_for(script().unwrap(), 14_900);
        assert_eq!(restarted.phase, 1);
        assert!(restarted.cursor);
        assert!(restarted.tasks.is_empty());
        assert!(!restarted.confirmed);
        assert!(restarted.player.input.is_empty());
    }
}
