mod cli;
mod feedback;
