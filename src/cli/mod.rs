use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "repolist")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Base URL of the catalog API (overrides REPOLIST_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Use an in-memory catalog instead of the HTTP API
    #[arg(long, global = true)]
    pub mock: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the current repository list
    List,

    /// Create a repository entry
    Add {
        title: String,

        #[arg(short, long, default_value = "https://github.com/new/repository")]
        url: String,

        /// Comma-separated technology tags
        #[arg(short, long, default_value = "Rust", value_delimiter = ',')]
        techs: Vec<String>,
    },

    /// Like a repository by id
    Like {
        id: String,
    },

    /// Remove a repository by id
    Remove {
        id: String,
    },
}
