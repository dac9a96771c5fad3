pub mod pointer;
pub mod triggers;

pub use pointer::{wire_input_handlers, InputWiring};
pub use triggers::{wire_triggers, TriggerWiring};
