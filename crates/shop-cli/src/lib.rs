//! shop-cli library
//!
//! Presentation layer over the storefront client: command dispatch, user
//! notifications and the fallbacks applied to failed calls.

pub(crate) mod app;
pub(crate) mod cart_commands;
pub(crate) mod cli;
pub(crate) mod commands;
pub(crate) mod error;
pub(crate) mod feedback;
pub(crate) mod home_commands;
pub(crate) mod logger;
pub(crate) mod notification_commands;
pub(crate) mod profile_commands;
pub(crate) mod question_commands;

#[cfg(test)]
mod tests;

pub use app::App;
pub use cart_commands::CartCommands;
pub use cli::Cli;
pub use commands::Commands;
pub use error::{CliError, Result as CliResult};
pub use feedback::{
    ANSWER_FAILED_MESSAGE, Notifier, QUESTION_FAILED_MESSAGE, StderrNotifier, notify_on_failure,
    questions_or_empty,
};
pub use home_commands::HomeCommands;
pub use logger::initialize as initialize_logger;
pub use notification_commands::NotificationCommands;
pub use profile_commands::ProfileCommands;
pub use question_commands::QuestionCommands;
