use std::path::{Path, PathBuf};

use color_eyre::eyre::{eyre, Result};
use portfolio_core::{Portfolio, PortfolioExport};
use sqlx::SqlitePool;

use crate::config::AppConfig;
use crate::db::{
    count_projects, count_skills, create_database_pool, load_portfolio, replace_portfolio,
    seed_sample_portfolio,
};

/// Storage-backed operations: start-up loading, seeding, import and export.
#[derive(Debug)]
pub struct AppActions {
    pub config: AppConfig,
    pub db_pool: Option<SqlitePool>,
}

impl AppActions {
    pub const fn new(config: AppConfig) -> Self {
        Self {
            config,
            db_pool: None,
        }
    }

    pub const fn with_pool(config: AppConfig, pool: SqlitePool) -> Self {
        Self {
            config,
            db_pool: Some(pool),
        }
    }

    pub async fn initialize(&mut self) -> Result<()> {
        self.db_pool = Some(create_database_pool(&self.config).await?);
        Ok(())
    }

    fn pool(&self) -> Result<&SqlitePool> {
        self.db_pool
            .as_ref()
            .ok_or_else(|| eyre!("Database not initialized"))
    }

    pub async fn load_portfolio(&self) -> Result<Portfolio> {
        Ok(load_portfolio(self.pool()?).await?)
    }

    pub async fn seed_sample(&self) -> Result<bool> {
        Ok(seed_sample_portfolio(self.pool()?).await?)
    }

    pub async fn count_projects(&self) -> Result<i64> {
        Ok(count_projects(self.pool()?).await?)
    }

    pub async fn count_skills(&self) -> Result<i64> {
        Ok(count_skills(self.pool()?).await?)
    }

    /// Replaces the stored portfolio with a `portfolio.json` document.
    pub async fn import(&self, path: &Path) -> Result<Portfolio> {
        let json = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| eyre!("Failed to read {}: {e}", path.display()))?;
        let portfolio = PortfolioExport::from_json(&json)?.into_portfolio()?;

        replace_portfolio(self.pool()?, &portfolio.catalog, &portfolio.skill_groups).await?;
        log::info!(
            "imported {} projects from {}",
            portfolio.catalog.len(),
            path.display()
        );
        Ok(portfolio)
    }

    /// Writes the stored portfolio as `portfolio.json`; `None` uses the configured path.
    pub async fn export(&self, path: Option<&Path>) -> Result<PathBuf> {
        let path = path.map_or_else(|| self.config.export_path.clone(), Path::to_path_buf);
        let portfolio = self.load_portfolio().await?;
        let generated_at = chrono::Utc::now().to_rfc3339();
        let document =
            PortfolioExport::new(&portfolio.catalog, &portfolio.skill_groups, Some(generated_at));

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&path, document.to_json_pretty()?)
            .await
            .map_err(|e| eyre!("Failed to write {}: {e}", path.display()))?;

        log::info!("exported portfolio to {}", path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::migrations::memory_pool;

    fn test_config(dir: &Path) -> AppConfig {
        AppConfig {
            database_path: dir.join("portfolio.db"),
            database_url: "sqlite::memory:".to_string(),
            export_path: dir.join("portfolio.json"),
            log_dir: dir.join("logs"),
            debug: false,
        }
    }

    #[tokio::test]
    async fn export_then_import_into_fresh_store() -> Result<()> {
        let dir = tempfile::tempdir()?;

        let source = AppActions::with_pool(test_config(dir.path()), memory_pool().await?);
        source.seed_sample().await?;
        let path = source.export(None).await?;
        assert_eq!(path, dir.path().join("portfolio.json"));

        let written = std::fs::read_to_string(&path)?;
        assert!(written.contains("\"generatedAt\""));

        let target = AppActions::with_pool(test_config(dir.path()), memory_pool().await?);
        let imported = target.import(&path).await?;
        assert_eq!(imported.catalog.len(), 3);
        assert_eq!(target.count_projects().await?, 3);
        assert_eq!(target.count_skills().await?, 12);
        Ok(())
    }

    #[tokio::test]
    async fn import_rejects_invalid_document() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("bad.json");
        std::fs::write(
            &path,
            r#"{"projects":[
                {"id":"1","title":"a","description":"","role":"","problem":"","solution":""},
                {"id":"1","title":"b","description":"","role":"","problem":"","solution":""}
            ]}"#,
        )?;

        let actions = AppActions::with_pool(test_config(dir.path()), memory_pool().await?);
        assert!(actions.import(&path).await.is_err());
        assert_eq!(actions.count_projects().await?, 0);
        Ok(())
    }

    #[tokio::test]
    async fn uninitialized_store_reports_error() {
        let actions = AppActions::new(test_config(Path::new("/tmp")));
        assert!(actions.load_portfolio().await.is_err());
    }
}
