use clap::{CommandFactory, Parser};

#[derive(Debug, Parser)]
#[command(name = "portfolio_tui", version, about = "Portfolio skills radar and project gallery")]
pub struct CliArgs {
    /// Print portfolio stats and exit
    #[arg(long)]
    pub headless: bool,

    /// Print headless stats as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Override database path
    #[arg(long, value_name = "PATH")]
    pub db: Option<String>,

    /// Open the gallery with this project highlighted
    #[arg(long, value_name = "ID")]
    pub highlight: Option<String>,

    /// Load the sample portfolio when the database is empty
    #[arg(long = "seed-sample")]
    pub seed_sample: bool,

    /// Replace the stored portfolio with a portfolio.json document
    #[arg(long, value_name = "PATH")]
    pub import: Option<String>,

    /// Write the stored portfolio to a portfolio.json document and exit
    #[arg(long, value_name = "PATH", num_args = 0..=1, default_missing_value = "")]
    pub export: Option<String>,
}

impl CliArgs {
    pub fn apply_env_overrides(&self) {
        if let Some(db) = &self.db {
            std::env::set_var("DATABASE_NAME", db);
        }
        if let Some(path) = self.export.as_deref().filter(|path| !path.is_empty()) {
            std::env::set_var("PORTFOLIO_EXPORT", path);
        }
        if self.debug {
            std::env::set_var("DEBUG", "1");
        }
    }

    /// Location the app starts at: the gallery deep link when `--highlight` is given.
    pub fn initial_location(&self) -> String {
        self.highlight.as_ref().map_or_else(
            || portfolio_core::SKILLS_PATH.to_string(),
            |id| portfolio_core::gallery_link(&portfolio_core::ProjectId::new(id.as_str())),
        )
    }

    pub fn help_text() -> String {
        let mut command = Self::command();
        let mut buffer = Vec::new();
        command.write_help(&mut buffer).ok();
        String::from_utf8_lossy(&buffer).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highlight_becomes_gallery_deep_link() {
        let args = CliArgs::parse_from(["portfolio_tui", "--highlight", "2"]);
        assert_eq!(args.initial_location(), "/projects?highlight=2");

        let args = CliArgs::parse_from(["portfolio_tui"]);
        assert_eq!(args.initial_location(), "/skills");
    }

    #[test]
    fn bare_export_flag_uses_configured_path() {
        let args = CliArgs::parse_from(["portfolio_tui", "--export"]);
        assert_eq!(args.export.as_deref(), Some(""));

        let args = CliArgs::parse_from(["portfolio_tui", "--export", "out.json"]);
        assert_eq!(args.export.as_deref(), Some("out.json"));
    }

    #[test]
    fn help_mentions_flags() {
        let help = CliArgs::help_text();
        assert!(help.contains("--seed-sample"));
        assert!(help.contains("--highlight"));
    }
}
