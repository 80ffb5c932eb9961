use clap::{Parser, Subcommand};

/// Command-line interface definition for tokenstore
#[derive(Parser)]
#[command(
    name = "tokenstore",
    version = env!("CARGO_PKG_VERSION"),
    about = "Generate, store and list opaque tokens in a SQLite table",
    long_about = None
)]
pub struct Cli {
    /// Override the connection URI (sqlite://PATH, file:URI or a plain path)
    #[arg(global = true, long = "db", value_name = "URI")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and the database schema
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Store a token
    Add {
        /// Token value, stored verbatim
        #[arg(allow_hyphen_values = true)]
        token: String,

        #[arg(long = "list", help = "List all tokens after inserting")]
        list: bool,
    },

    /// Generate a random URL-safe token and store it
    Generate {
        #[arg(
            long = "bytes",
            value_name = "N",
            help = "Random bytes of entropy (16 to 1024, default from config)"
        )]
        bytes: Option<usize>,

        #[arg(long = "list", help = "List all tokens after inserting")]
        list: bool,
    },

    /// List stored tokens
    List {
        #[arg(long = "json", help = "Print tokens as a JSON array")]
        json: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Inspect the database
    Db {
        #[arg(long = "info", help = "Show database information")]
        info: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,
    },
}
