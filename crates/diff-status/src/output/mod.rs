mod logging;
mod workflow;

pub(crate) use logging::init_tracing;
pub(crate) use workflow::error_command;
