use clap::Subcommand;

#[derive(Subcommand)]
pub enum HomeCommands {
    /// New arrivals
    New,

    /// Popular products
    Hot,

    /// Random product picks
    Products,

    /// Banner recommendations
    Banner,

    /// Unread message count
    Messages {
        /// User ID (defaults to the signed-in user)
        #[arg(long)]
        user_id: Option<i64>,
    },
}
