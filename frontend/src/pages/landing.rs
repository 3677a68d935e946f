use yew::prelude::*;

use crate::demos::{ChatDemo, DetectionDemo, FlowDemo, IntegrationsDemo, SecurityDemo};

const HERO_NODES: [(&str, &str); 4] = [
    ("Core Messaging", "REAL-TIME & GROUPS"),
    ("Intent Detection", "CONTEXT AWARE"),
    ("Integrations", "APP ECOSYSTEM"),
    ("Security", "END-TO-END ENCRYPTED"),
];

const OVERVIEW: [(&str, &str, &str); 4] = [
    ("01", "Command", "User inputs natural language request."),
    ("02", "Process", "AI extracts intent and plans actions."),
    ("03", "Execute", "Agent connects to APIs (Notion, Cal)."),
    ("04", "Confirm", "Summary report generated in chat."),
];

const CHAT_POINTS: &[(&str, &str)] = &[
    ("Groups that scale", "Thousands of concurrent members without a dropped message."),
    ("End-to-end encrypted.", "Every thread is sealed on your device."),
    ("Developer-first SDK", "Wire BetterChat into your own product in minutes."),
];

const DETECTION_POINTS: &[(&str, &str)] = &[
    ("Instant Detection", "Mentions are picked up as you type."),
    ("Contextual Memory", "Follow-ups build on what was said before."),
    ("Multi-Model Support", "Route each question to the model that fits."),
];

const INTEGRATION_POINTS: &[(&str, &str)] = &[
    ("Gmail Integration", "Draft and send from the thread."),
    ("Document Hub", "Share files with the right access."),
    ("Smart Calendar", "Schedule with everyone's availability."),
];

const FLOW_POINTS: &[(&str, &str)] = &[
    ("You speak.", "Type your request in plain English."),
    ("We understand.", "Intent is extracted and matched against context."),
    ("It happens.", "Integrations fire in parallel."),
    ("You see results.", "Every action is confirmed in real time."),
];

const SECURITY_POINTS: &[(&str, &str)] = &[
    ("End-to-End Encryption", "AES-256-GCM on every message."),
    ("Zero-Knowledge Storage", "We store ciphertext and nothing else."),
    ("Profile Protection", "Identity and metadata are sealed too."),
];

#[derive(Properties, PartialEq)]
struct DemoSectionProps {
    id: &'static str,
    title: &'static str,
    blurb: &'static str,
    points: &'static [(&'static str, &'static str)],
    children: Children,
}

#[function_component(DemoSection)]
fn demo_section(props: &DemoSectionProps) -> Html {
    html! {
        <section class="demo-section" id={props.id}>
            <div class="demo-copy">
                <h2>{props.title}</h2>
                <p class="demo-blurb">{props.blurb}</p>
            </div>
            <div class="demo-stage">
                { for props.children.iter() }
            </div>
            <div class="demo-points">
                {for props.points.iter().map(|(title, desc)| html! {
                    <div class="demo-point">
                        <h3>{*title}</h3>
                        <p>{*desc}</p>
                    </div>
                })}
            </div>
        </section>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="landing-page">
            <header class="hero">
                <nav class="top-nav">
                    <span class="brand">{"BetterChat"}</span>
                    <div class="nav-links">
                        <a href="#product">{"Product"}</a>
                        <a href="#flow">{"Flow"}</a>
                        <a href="#integrations">{"Integrations"}</a>
                        <span class="system-badge">{"System Active"}<span class="pulse-dot"></span></span>
                    </div>
                    <span class="sign-in">{"Sign In"}</span>
                </nav>
                <div class="hero-nodes">
                    {for HERO_NODES.iter().enumerate().map(|(i, (label, sub))| html! {
                        <div class={classes!("hero-node", if i < 2 { "left" } else { "right" })}>
                            <span class="node-label">{*label}</span>
                            <span class="node-sub">{*sub}</span>
                        </div>
                    })}
                </div>
                <div class="hero-content">
                    <span class="latency-badge">{"Latency: 14ms"}</span>
                    <h1 class="hero-title">{"From Prompt"}<br/><span class="fade-text">{"to Reality."}</span></h1>
                    <p class="hero-subtitle">
                        {"The first chat interface that doesn't just talk. It executes complex workflows in real-time."}
                    </p>
                    <a class="cta-button" href="#flow">{"Start Flow →"}</a>
                </div>
            </header>

            <main class="features">
                <DemoSection
                    id="product"
                    title="Messages delivered before you blink."
                    blurb="Direct messages and group chats on a socket engine tuned for single-digit latency."
                    points={CHAT_POINTS}
                >
                    <ChatDemo />
                </DemoSection>
                <DemoSection
                    id="detection"
                    title="Mention the AI. It already knows the context."
                    blurb="Type @ai anywhere in a conversation and the assistant answers with the whole thread in mind."
                    points={DETECTION_POINTS}
                >
                    <DetectionDemo />
                </DemoSection>
                <DemoSection
                    id="integrations"
                    title="Every app, one chat bar."
                    blurb="Send mail, share docs and book meetings without leaving the conversation."
                    points={INTEGRATION_POINTS}
                >
                    <IntegrationsDemo />
                </DemoSection>
                <DemoSection
                    id="flow"
                    title="You speak. It happens."
                    blurb="A plain-language command is tokenized, routed and executed across your tools."
                    points={FLOW_POINTS}
                >
                    <FlowDemo />
                </DemoSection>
                <DemoSection
                    id="security"
                    title="Private by construction."
                    blurb="Messages are encrypted before they leave your device and only decrypted by the recipient."
                    points={SECURITY_POINTS}
                >
                    <SecurityDemo />
                </DemoSection>
            </main>

            <section class="overview">
                <h2>{"System Overview"}</h2>
                <p class="overview-sub">{"From text input to automated action."}</p>
                <ol class="overview-steps">
                    {for OVERVIEW.iter().map(|(num, title, desc)| html! {
                        <li class="overview-step">
                            <span class="step-num">{*num}</span>
                            <div>
                                <h3>{*title}</h3>
                                <p>{*desc}</p>
                            </div>
                        </li>
                    })}
                </ol>
            </section>

            <footer class="footer">
                <p>{"© 2026 BetterChat. All systems nominal."}</p>
            </footer>
            <style>{LANDING_CSS}</style>
        </div>
    }
}

const LANDING_CSS: &str = r#"
    .landing-page {
        background: #000;
        color: #fff;
        min-height: 100vh;
    }
    .hero {
        position: relative;
        height: 100vh;
        display: flex;
        align-items: center;
        justify-content: center;
        overflow: hidden;
    }
    .top-nav {
        position: fixed;
        top: 0;
        width: 100%;
        display: flex;
        justify-content: space-between;
        align-items: center;
        padding: 1.5rem;
        z-index: 50;
    }
    .nav-links {
        display: flex;
        gap: 1.5rem;
        padding: 0.5rem 1.5rem;
        border: 1px solid rgba(255, 255, 255, 0.1);
        border-radius: 999px;
        font-size: 0.75rem;
    }
    .nav-links a {
        color: #fff;
        text-decoration: none;
    }
    .pulse-dot {
        display: inline-block;
        width: 6px;
        height: 6px;
        margin-left: 6px;
        border-radius: 50%;
        background: #10b981;
    }
    .hero-nodes {
        position: absolute;
        inset: 0;
        display: grid;
        grid-template-columns: 1fr 1fr;
        align-content: center;
        gap: 6rem 40rem;
        padding: 0 3rem;
    }
    .hero-node {
        display: flex;
        flex-direction: column;
        padding: 1rem;
        width: 16rem;
        background: #0a0a0a;
        border: 1px solid rgba(255, 255, 255, 0.1);
        border-radius: 1rem;
    }
    .hero-node.right {
        justify-self: end;
        text-align: right;
    }
    .node-sub {
        font-size: 0.65rem;
        letter-spacing: 0.08em;
        color: #6b7280;
    }
    .hero-content {
        position: relative;
        z-index: 2;
        text-align: center;
        max-width: 42rem;
    }
    .hero-title {
        font-size: 5rem;
        line-height: 0.95;
        margin: 2rem 0 1.5rem;
    }
    .fade-text {
        background: linear-gradient(#fff, rgba(255, 255, 255, 0.4));
        -webkit-background-clip: text;
        -webkit-text-fill-color: transparent;
    }
    .latency-badge {
        font-size: 0.7rem;
        text-transform: uppercase;
        color: #fde68a;
        border: 1px solid rgba(234, 179, 8, 0.2);
        border-radius: 999px;
        padding: 0.25rem 0.75rem;
    }
    .cta-button {
        display: inline-block;
        padding: 0.75rem 2rem;
        border-radius: 999px;
        background: #fff;
        color: #000;
        font-weight: 700;
        text-decoration: none;
    }
    .demo-section {
        max-width: 1100px;
        margin: 0 auto;
        padding: 6rem 2rem;
    }
    .demo-section h2 {
        font-size: 2.5rem;
    }
    .demo-stage {
        margin: 2rem 0;
        min-height: 420px;
        border: 1px solid rgba(255, 255, 255, 0.1);
        border-radius: 1rem;
        background: #0a0a0a;
        overflow: hidden;
    }
    .demo-points {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
        gap: 1.5rem;
        color: #9ca3af;
    }
    .mock-chat {
        display: flex;
        height: 420px;
        transition: transform 0.4s ease;
    }
    .mock-chat.zoomed {
        transform: scale(1.04);
    }
    .mock-sidebar {
        width: 220px;
        border-right: 1px solid rgba(255, 255, 255, 0.08);
        padding: 1rem;
    }
    .mock-tab.active,
    .mock-contact.selected,
    .model-card.active,
    .integration-tile.active,
    .phase.active {
        color: #fff;
        background: rgba(255, 255, 255, 0.08);
    }
    .mock-thread {
        flex: 1;
        display: flex;
        flex-direction: column;
    }
    .chat-messages {
        flex: 1;
        overflow-y: auto;
        padding: 1rem;
    }
    .me-message {
        text-align: right;
    }
    .message-bubble {
        display: inline-block;
        padding: 0.5rem 0.75rem;
        margin: 0.25rem 0;
        border-radius: 1rem;
        background: rgba(255, 255, 255, 0.06);
    }
    .message-bubble.me {
        background: #fff;
        color: #000;
    }
    .message-bubble p {
        margin: 0;
    }
    .system-message {
        text-align: center;
        font-size: 0.75rem;
        color: #6b7280;
    }
    .typing-indicator span {
        display: inline-block;
        width: 6px;
        height: 6px;
        margin: 0 2px;
        border-radius: 50%;
        background: #9ca3af;
        animation: blink 1.2s infinite;
    }
    .typing-indicator span:nth-child(2) { animation-delay: 0.2s; }
    .typing-indicator span:nth-child(3) { animation-delay: 0.4s; }
    @keyframes blink {
        50% { opacity: 0.2; }
    }
    .mock-composer {
        margin: 0.75rem;
        padding: 0.75rem 1rem;
        border-radius: 0.75rem;
        border: 1px solid rgba(255, 255, 255, 0.1);
    }
    .mock-composer.ai-mention {
        border-color: #a78bfa;
    }
    .placeholder {
        color: #6b7280;
    }
    .chip,
    .token {
        display: inline-block;
        margin: 0.2rem;
        padding: 0.15rem 0.5rem;
        border-radius: 999px;
        font-size: 0.75rem;
        background: rgba(167, 139, 250, 0.15);
    }
    .integration-grid {
        display: grid;
        grid-template-columns: repeat(4, 1fr);
        gap: 0.5rem;
        padding: 0.5rem 0.75rem;
    }
    .flow-demo,
    .security-demo {
        padding: 1.5rem;
        font-family: ui-monospace, monospace;
        font-size: 0.85rem;
    }
    .phase-bar {
        display: flex;
        gap: 0.5rem;
        margin-bottom: 1rem;
    }
    .phase {
        padding: 0.25rem 0.6rem;
        border-radius: 999px;
        color: #6b7280;
    }
    .phase.passed {
        color: #10b981;
    }
    .terminal {
        padding: 0.75rem;
        border-radius: 0.5rem;
        background: #111;
    }
    .task.running { color: #fde68a; }
    .task.done,
    .check.passed,
    .vault-item.sealed,
    .result-line { color: #10b981; }
    .tunnel {
        height: 4px;
        margin: 1rem 0;
        background: rgba(255, 255, 255, 0.08);
    }
    .tunnel-fill {
        height: 100%;
        background: #10b981;
        transition: width 0.3s ease;
    }
    .security-demo.shielded {
        box-shadow: inset 0 0 40px rgba(16, 185, 129, 0.15);
    }
    .overview {
        max-width: 900px;
        margin: 0 auto;
        padding: 8rem 2rem;
        text-align: center;
        border-top: 1px solid rgba(255, 255, 255, 0.05);
    }
    .overview-steps {
        list-style: none;
        padding: 0;
        text-align: left;
    }
    .overview-step {
        display: flex;
        gap: 2rem;
        align-items: center;
        margin-bottom: 3rem;
    }
    .step-num {
        display: flex;
        align-items: center;
        justify-content: center;
        width: 2.5rem;
        height: 2.5rem;
        border-radius: 50%;
        background: #fff;
        color: #000;
        font-weight: 700;
    }
    .footer {
        padding: 3rem 0;
        text-align: center;
        font-size: 0.85rem;
        color: #9ca3af;
        border-top: 1px solid rgba(255, 255, 255, 0.05);
    }
    @media (max-width: 768px) {
        .hero-title {
            font-size: 3rem;
        }
        .hero-nodes,
        .nav-links,
        .mock-sidebar,
        .model-list {
            display: none;
        }
        .demo-section {
            padding: 3rem 1rem;
        }
    }
"#;
