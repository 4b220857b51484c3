use crate::{
    cart_commands::CartCommands, home_commands::HomeCommands,
    notification_commands::NotificationCommands, profile_commands::ProfileCommands,
    question_commands::QuestionCommands,
};

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Log in and remember the session
    Login {
        #[arg(long)]
        username: String,

        #[arg(long, env = "SHOP_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Forget the stored session
    Logout,

    /// Create an account (does not log in)
    Register {
        #[arg(long)]
        username: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        first_name: String,

        #[arg(long)]
        last_name: String,

        #[arg(long, env = "SHOP_PASSWORD", hide_env_values = true)]
        password: String,

        /// Must match --password; checked by the server
        #[arg(long, env = "SHOP_CONFIRM_PASSWORD", hide_env_values = true)]
        confirm_password: String,
    },

    /// Show the signed-in user's profile
    Whoami,

    /// Replace the stored access token (after a refresh)
    SetToken { token: String },

    /// Profile operations
    Profile {
        #[command(subcommand)]
        action: ProfileCommands,
    },

    /// Cart operations
    Cart {
        #[command(subcommand)]
        action: CartCommands,
    },

    /// Home page feeds
    Home {
        #[command(subcommand)]
        action: HomeCommands,
    },

    /// Order notifications
    Notifications {
        #[command(subcommand)]
        action: NotificationCommands,
    },

    /// Product questions and answers
    Question {
        #[command(subcommand)]
        action: QuestionCommands,
    },
}
