use clap::Subcommand;

#[derive(Subcommand)]
pub enum CartCommands {
    /// Show the cart
    Get,

    /// Save cart data
    Save {
        /// Cart payload as JSON
        data: String,
    },

    /// Add to a user's cart
    Add {
        /// User ID (defaults to the signed-in user)
        #[arg(long)]
        user_id: Option<i64>,
    },
}
