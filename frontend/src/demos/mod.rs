//! The looping product mockups shown on the landing page. Each module owns
//! its script, the state its steps drive, and the component that draws it.

pub mod chat;
pub mod detection;
pub mod flow;
pub mod integrations;
pub mod security;

pub use chat::ChatDemo;
pub use detection::DetectionDemo;
pub use flow::FlowDemo;
pub use integrations::IntegrationsDemo;
pub use security::SecurityDemo;
