use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including the git hash for non-release builds.
/// Format for releases: "v0.1.0"
/// Format for dev builds: "v0.1.0 (dev abc1234)"
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            format!("v{}", VERSION)
        } else {
            format!("v{} (dev {})", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(
    name = "wordbook",
    bin_name = "wordbook",
    version = get_version(),
    disable_help_subcommand = true
)]
#[command(about = "Look words up and keep the ones worth remembering", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding saved words (overrides config)
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Look a word up in the dictionary
    #[command(alias = "l")]
    Lookup {
        word: String,

        /// Also save the entry
        #[arg(short, long)]
        save: bool,
    },

    /// Look a word up and save it
    Save { word: String },

    /// List saved words (default)
    #[command(alias = "ls")]
    List,

    /// Show a saved word in full
    Show { word: String },

    /// Change the word of a saved entry
    Rename { old: String, new: String },

    /// Remove a saved word
    #[command(alias = "rm")]
    Remove { word: String },

    /// Re-read saved words from storage
    Reload,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn naked_invocation_has_no_command() {
        let cli = Cli::try_parse_from(["wordbook"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn parses_lookup_with_save() {
        let cli = Cli::try_parse_from(["wordbook", "lookup", "hello", "--save"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Lookup {
                word: "hello".to_string(),
                save: true
            })
        );
    }

    #[test]
    fn parses_rename_and_global_flags() {
        let cli =
            Cli::try_parse_from(["wordbook", "rename", "cat", "dog", "--data", "/tmp/w", "-v"])
                .unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Rename {
                old: "cat".to_string(),
                new: "dog".to_string()
            })
        );
        assert_eq!(cli.data, Some(PathBuf::from("/tmp/w")));
        assert!(cli.verbose);
    }

    #[test]
    fn aliases_resolve() {
        let cli = Cli::try_parse_from(["wordbook", "rm", "cat"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Remove {
                word: "cat".to_string()
            })
        );
        let cli = Cli::try_parse_from(["wordbook", "ls"]).unwrap();
        assert_eq!(cli.command, Some(Commands::List));
    }

    #[test]
    fn rename_requires_both_words() {
        assert!(Cli::try_parse_from(["wordbook", "rename", "cat"]).is_err());
    }
}
