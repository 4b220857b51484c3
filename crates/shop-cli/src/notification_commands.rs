use clap::Subcommand;

#[derive(Subcommand)]
pub enum NotificationCommands {
    /// List unread order notifications
    List {
        /// User ID (defaults to the signed-in user)
        #[arg(long)]
        user_id: Option<i64>,
    },

    /// Mark all order notifications as read
    MarkRead {
        /// User ID (defaults to the signed-in user)
        #[arg(long)]
        user_id: Option<i64>,
    },
}
