use color_eyre::eyre::eyre;
use dotenv::dotenv;
use std::env;
use std::path::{Path, PathBuf};

const DEFAULT_DATABASE_NAME: &str = "portfolio.db";
const DEFAULT_EXPORT_PATH: &str = "portfolio.json";
const DEFAULT_LOG_DIR: &str = "logs";

/// Runtime settings resolved from `.env`, the environment and CLI overrides.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_path: PathBuf,
    pub database_url: String,
    pub export_path: PathBuf,
    pub log_dir: PathBuf,
    pub debug: bool,
}

/// Initializes the application configuration
pub fn init_app_config() -> color_eyre::eyre::Result<AppConfig> {
    // Load environment variables from .env file
    dotenv().ok();

    let base_dir: PathBuf = env::current_dir()?;

    let db_name = env::var("DATABASE_NAME").unwrap_or_else(|_| DEFAULT_DATABASE_NAME.to_string());
    let database_path = base_dir.join(&db_name);

    if let Some(parent) = database_path.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let database_url = database_url_for(&database_path)?;

    Ok(AppConfig {
        database_path,
        database_url,
        export_path: get_export_path(),
        log_dir: base_dir.join(get_log_dir()),
        debug: debug_enabled(),
    })
}

/// Formats a SQLite path the way SQLx expects it:
/// `sqlite:///abs/path.db` for absolute paths, `sqlite://rel/path.db` otherwise.
pub fn database_url_for(database_path: &Path) -> color_eyre::eyre::Result<String> {
    let path_str = database_path
        .to_str()
        .ok_or_else(|| eyre!("Invalid database path"))?;

    // Strip any leading slashes from the path to avoid double slashes
    let clean_path = path_str.trim_start_matches('/');

    if database_path.is_absolute() {
        Ok(format!("sqlite:///{clean_path}"))
    } else {
        Ok(format!("sqlite://{clean_path}"))
    }
}

pub fn get_export_path() -> PathBuf {
    env::var("PORTFOLIO_EXPORT").map_or_else(|_| PathBuf::from(DEFAULT_EXPORT_PATH), PathBuf::from)
}

pub fn get_log_dir() -> PathBuf {
    env::var("PORTFOLIO_LOG_DIR").map_or_else(|_| PathBuf::from(DEFAULT_LOG_DIR), PathBuf::from)
}

pub fn debug_enabled() -> bool {
    env::var("DEBUG").is_ok_and(|value| !value.is_empty() && value != "0")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn absolute_paths_get_three_slashes() -> color_eyre::eyre::Result<()> {
        let url = database_url_for(Path::new("/tmp/portfolio/portfolio.db"))?;
        assert_eq!(url, "sqlite:///tmp/portfolio/portfolio.db");
        Ok(())
    }

    #[test]
    fn relative_paths_get_two_slashes() -> color_eyre::eyre::Result<()> {
        let url = database_url_for(Path::new("data/portfolio.db"))?;
        assert_eq!(url, "sqlite://data/portfolio.db");
        Ok(())
    }
}
