use clap::{Parser, Subcommand, ValueEnum};

/// Returns the version string, with the git hash appended for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "goblin", bin_name = "goblin", version = get_version())]
#[command(about = "A shopping list that shares links and listens", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logs on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum CopyTarget {
    Link,
    Text,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add an item to the list
    #[command(alias = "a")]
    Add {
        /// Item text (words are joined with spaces)
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,
    },

    /// Show the list (default)
    #[command(alias = "ls")]
    List,

    /// Mark items as bagged, or put them back on the hunt
    #[command(alias = "t")]
    Toggle {
        /// Positions (1 3) or a piece of the item's text
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,
    },

    /// Remove items from the list
    #[command(alias = "rm")]
    Delete {
        /// Positions (1 3) or a piece of the item's text
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,
    },

    /// Forget every item
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Print a share link and a plain-text copy of the list
    Share {
        /// Copy the link or the plain text to the clipboard
        #[arg(long, value_enum)]
        copy: Option<CopyTarget>,

        /// Also print an SMS compose link
        #[arg(long)]
        sms: bool,
    },

    /// Import the list carried by a share link
    Open {
        /// The share link
        url: String,

        /// Import without asking
        #[arg(short, long)]
        yes: bool,
    },

    /// Run a voice command, or listen for one line on stdin
    Voice {
        /// Transcript, e.g. `add bread` or `remove milk`
        #[arg(trailing_var_arg = true)]
        transcript: Vec<String>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (share-base-url, storage-key, voice)
        key: Option<String>,

        /// Value to set
        value: Option<String>,
    },
}
