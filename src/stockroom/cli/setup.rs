use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, with the git hash appended for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("STOCKROOM_GIT_HASH");
    const IS_RELEASE: &str = env!("STOCKROOM_IS_RELEASE");

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
#[command(name = "stockroom", bin_name = "stockroom", version = get_version())]
#[command(about = "Menu-driven inventory manager for a small store", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding config.json and the inventory file
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Inventory file to use instead of the configured one
    #[arg(short, long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the interactive menu (default)
    Menu,

    /// Print the inventory table and exit
    #[command(alias = "ls")]
    List,

    /// Print products matching a name fragment or exact SKU
    Search {
        /// Search term (several words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        term: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_args_means_menu() {
        let cli = Cli::try_parse_from(["stockroom"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn search_joins_words() {
        let cli = Cli::try_parse_from(["stockroom", "search", "mouse", "pad", "-v"]).unwrap();
        match cli.command {
            Some(Commands::Search { term }) => assert_eq!(term.join(" "), "mouse pad"),
            other => panic!("unexpected: {:?}", other),
        }
        assert!(cli.verbose);
    }

    #[test]
    fn global_paths_parse_after_subcommand() {
        let cli =
            Cli::try_parse_from(["stockroom", "ls", "--data-dir", "/tmp/s", "-f", "x.json"])
                .unwrap();
        assert!(matches!(cli.command, Some(Commands::List)));
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/s")));
        assert_eq!(cli.file, Some(PathBuf::from("x.json")));
    }
}
