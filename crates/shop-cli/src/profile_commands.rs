use clap::Subcommand;

#[derive(Subcommand)]
pub enum ProfileCommands {
    /// Update profile fields; unset flags are left alone
    Update {
        /// User ID (defaults to the signed-in user)
        #[arg(long)]
        id: Option<i64>,

        #[arg(long)]
        username: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        /// Profile picture reference
        #[arg(long)]
        picture: Option<String>,
    },
}
