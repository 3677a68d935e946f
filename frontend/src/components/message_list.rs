use yew::prelude::*;

use crate::timeline::{Message, Sender};

#[derive(Properties, PartialEq)]
pub struct MessageListProps {
    pub messages: Vec<Message>,
    pub typing: Option<Sender>,
}

#[function_component(MessageList)]
pub fn message_list(props: &MessageListProps) -> Html {
    let scroll_ref = use_node_ref();

    // Keep the newest message in view, inside the mock only.
    {
        let scroll_ref = scroll_ref.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(element) = scroll_ref.cast::<web_sys::Element>() {
                    element.set_scroll_top(element.scroll_height());
                }
                || ()
            },
            (props.messages.len(), props.typing),
        );
    }

    html! {
        <div class="chat-messages" ref={scroll_ref}>
            {for props.messages.iter().map(|msg| html! {
                <MessageBubble key={msg.id} message={msg.clone()} />
            })}
            {match props.typing {
                Some(who) => html! { <TypingIndicator who={who} /> },
                None => html! {},
            }}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct MessageBubbleProps {
    message: Message,
}

#[function_component(MessageBubble)]
fn message_bubble(props: &MessageBubbleProps) -> Html {
    let msg = &props.message;
    if msg.sender == Sender::System {
        return html! {
            <div class="system-message">{&msg.text}</div>
        };
    }
    html! {
        <div class={format!("{}-message", msg.sender.css_class())}>
            {match (&msg.display_name, msg.sender) {
                (Some(name), _) => html! { <span class="sender-name">{name}</span> },
                (None, Sender::Ai) => html! { <span class="sender-name">{"AI Assistant"}</span> },
                _ => html! {},
            }}
            <div class={classes!("message-bubble", msg.sender.css_class())}>
                {for msg.text.lines().map(|line| html! { <p>{line}</p> })}
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct TypingIndicatorProps {
    who: Sender,
}

#[function_component(TypingIndicator)]
fn typing_indicator(props: &TypingIndicatorProps) -> Html {
    html! {
        <div class={format!("{}-message", props.who.css_class())}>
            <div class="message-bubble typing">
                <div class="typing-indicator">
                    <span></span>
                    <span></span>
                    <span></span>
                </div>
            </div>
        </div>
    }
}
