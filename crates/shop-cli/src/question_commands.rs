use clap::Subcommand;

#[derive(Subcommand)]
pub enum QuestionCommands {
    /// List questions about a product (empty if unavailable)
    List { product_id: String },

    /// Ask a question about a product
    Ask {
        product_id: String,

        #[arg(long)]
        content: String,
    },

    /// Answer a question
    Answer {
        question_id: String,

        #[arg(long)]
        content: String,
    },
}
