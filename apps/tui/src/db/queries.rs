use std::collections::BTreeMap;

use portfolio_core::sample::{sample_catalog, sample_skill_groups};
use portfolio_core::{
    enrich_groups, Catalog, CatalogError, Portfolio, Project, SkillError, SkillGroup, SkillStat,
};
use sqlx::{query, query_as, query_scalar, SqliteConnection, SqlitePool};

use crate::db::models::{encode_list, ProjectRecord, RecordError, SkillRecord};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
    #[error("failed to encode list column: {0}")]
    Encode(#[from] serde_json::Error),
    #[error(transparent)]
    Record(#[from] RecordError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Skill(#[from] SkillError),
}

/// Retrieves all project rows in catalog order
pub async fn get_projects(pool: &SqlitePool) -> Result<Vec<ProjectRecord>, sqlx::Error> {
    query_as::<_, ProjectRecord>(
        "SELECT id, position, title, description, thumbnail, role, problem, solution, \
         tools, challenges, results, demo_link, github_link, images \
         FROM project ORDER BY position, id",
    )
    .fetch_all(pool)
    .await
}

/// Retrieves all skill rows, grouped by chart and ordered by axis position
pub async fn get_skills(pool: &SqlitePool) -> Result<Vec<SkillRecord>, sqlx::Error> {
    query_as::<_, SkillRecord>(
        "SELECT id, chart, chart_position, name, value, position, project_ids \
         FROM skill ORDER BY chart_position, position",
    )
    .fetch_all(pool)
    .await
}

pub async fn count_projects(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    query_scalar("SELECT COUNT(*) FROM project")
        .fetch_one(pool)
        .await
}

pub async fn count_skills(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    query_scalar("SELECT COUNT(*) FROM skill")
        .fetch_one(pool)
        .await
}

pub async fn insert_project(
    conn: &mut SqliteConnection,
    project: &Project,
    position: i64,
) -> Result<(), StoreError> {
    query(
        "INSERT INTO project (id, position, title, description, thumbnail, role, problem, \
         solution, tools, challenges, results, demo_link, github_link, images) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(project.id.as_str())
    .bind(position)
    .bind(&project.title)
    .bind(&project.description)
    .bind(&project.thumbnail)
    .bind(&project.role)
    .bind(&project.problem)
    .bind(&project.solution)
    .bind(encode_list(&project.tools)?)
    .bind(encode_list(&project.challenges)?)
    .bind(encode_list(&project.results)?)
    .bind(project.demo_link.as_deref())
    .bind(project.github_link.as_deref())
    .bind(encode_list(&project.images)?)
    .execute(&mut *conn)
    .await?;

    Ok(())
}

pub async fn insert_skill(
    conn: &mut SqliteConnection,
    chart: &str,
    chart_position: i64,
    skill: &SkillStat,
    position: i64,
) -> Result<(), StoreError> {
    let project_ids: Vec<String> = skill
        .project_ids()
        .iter()
        .map(|id| id.as_str().to_string())
        .collect();

    query(
        "INSERT INTO skill (chart, chart_position, name, value, position, project_ids) \
         VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(chart)
    .bind(chart_position)
    .bind(skill.name())
    .bind(i64::from(skill.value()))
    .bind(position)
    .bind(encode_list(&project_ids)?)
    .execute(&mut *conn)
    .await?;

    Ok(())
}

/// Replaces every stored project and skill in one transaction
#[allow(clippy::cast_possible_wrap)]
pub async fn replace_portfolio(
    pool: &SqlitePool,
    catalog: &Catalog,
    skill_groups: &[SkillGroup],
) -> Result<(), StoreError> {
    let mut tx = pool.begin().await?;

    query("DELETE FROM skill").execute(&mut *tx).await?;
    query("DELETE FROM project").execute(&mut *tx).await?;

    for (position, project) in catalog.iter().enumerate() {
        insert_project(&mut *tx, project, position as i64).await?;
    }

    for (chart_position, group) in skill_groups.iter().enumerate() {
        for (position, skill) in group.skills.iter().enumerate() {
            insert_skill(
                &mut *tx,
                &group.title,
                chart_position as i64,
                skill,
                position as i64,
            )
            .await?;
        }
    }

    tx.commit().await?;
    log::info!(
        "stored {} projects and {} skill groups",
        catalog.len(),
        skill_groups.len()
    );
    Ok(())
}

/// Loads the stored catalog and skill groups, merging stored and tool-derived project ids
pub async fn load_portfolio(pool: &SqlitePool) -> Result<Portfolio, StoreError> {
    let projects = get_projects(pool)
        .await?
        .into_iter()
        .map(Project::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    let catalog = Catalog::new(projects)?;

    let mut charts: BTreeMap<i64, SkillGroup> = BTreeMap::new();
    for record in get_skills(pool).await? {
        let chart_position = record.chart_position;
        let title = record.chart.clone();
        let project_ids = record.project_ids()?;
        let skill = SkillStat::try_from(record)?.with_project_ids(project_ids, &catalog)?;
        charts
            .entry(chart_position)
            .or_insert_with(|| SkillGroup {
                title,
                skills: Vec::new(),
            })
            .skills
            .push(skill);
    }

    let groups: Vec<SkillGroup> = charts.into_values().collect();
    let skill_groups = enrich_groups(&groups, &catalog);
    Ok(Portfolio {
        catalog,
        skill_groups,
    })
}

/// Stores the sample portfolio if no projects exist yet. Returns whether it seeded.
pub async fn seed_sample_portfolio(pool: &SqlitePool) -> Result<bool, StoreError> {
    if count_projects(pool).await? > 0 {
        log::debug!("database already has projects, skipping sample seed");
        return Ok(false);
    }

    let catalog = sample_catalog()?;
    let groups = sample_skill_groups()?;
    replace_portfolio(pool, &catalog, &groups).await?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::migrations::memory_pool;
    use portfolio_core::ProjectId;

    #[tokio::test]
    async fn seeding_only_happens_once() -> Result<(), Box<dyn std::error::Error>> {
        let pool = memory_pool().await?;

        assert!(seed_sample_portfolio(&pool).await?);
        assert!(!seed_sample_portfolio(&pool).await?);
        assert_eq!(count_projects(&pool).await?, 3);
        assert_eq!(count_skills(&pool).await?, 12);
        Ok(())
    }

    #[tokio::test]
    async fn stored_portfolio_loads_with_derived_project_ids(
    ) -> Result<(), Box<dyn std::error::Error>> {
        let pool = memory_pool().await?;
        seed_sample_portfolio(&pool).await?;

        let portfolio = load_portfolio(&pool).await?;

        assert_eq!(portfolio.catalog, sample_catalog()?);
        let titles: Vec<&str> = portfolio
            .skill_groups
            .iter()
            .map(|group| group.title.as_str())
            .collect();
        assert_eq!(titles, ["Development Skills", "Tooling"]);

        let react = portfolio.skill_groups[0]
            .skills
            .iter()
            .find(|skill| skill.name() == "React")
            .ok_or("React missing")?;
        assert_eq!(react.project_ids(), [ProjectId::new("2"), ProjectId::new("3")]);
        Ok(())
    }

    #[tokio::test]
    async fn replace_discards_previous_rows() -> Result<(), Box<dyn std::error::Error>> {
        let pool = memory_pool().await?;
        seed_sample_portfolio(&pool).await?;

        let catalog = sample_catalog()?;
        let single = Catalog::new(catalog.iter().take(1).cloned().collect())?;
        let group = SkillGroup {
            title: "Engines".to_string(),
            skills: vec![SkillStat::new("Unity3D", 95)?],
        };
        replace_portfolio(&pool, &single, std::slice::from_ref(&group)).await?;

        let portfolio = load_portfolio(&pool).await?;
        assert_eq!(portfolio.catalog.len(), 1);
        assert_eq!(portfolio.skill_groups.len(), 1);
        assert_eq!(
            portfolio.skill_groups[0].skills[0].project_ids(),
            [ProjectId::new("1")]
        );
        Ok(())
    }

    #[tokio::test]
    async fn curated_project_ids_survive_storage() -> Result<(), Box<dyn std::error::Error>> {
        let pool = memory_pool().await?;
        let catalog = sample_catalog()?;
        let group = SkillGroup {
            title: "Audio".to_string(),
            skills: vec![SkillStat::new("Spatial Audio", 70)?
                .with_project_ids(vec![ProjectId::new("1")], &catalog)?],
        };
        replace_portfolio(&pool, &catalog, std::slice::from_ref(&group)).await?;

        let portfolio = load_portfolio(&pool).await?;
        assert_eq!(
            portfolio.skill_groups[0].skills[0].project_ids(),
            [ProjectId::new("1")]
        );
        Ok(())
    }

    #[tokio::test]
    async fn stored_id_missing_from_catalog_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
        let pool = memory_pool().await?;
        query(
            "INSERT INTO skill (chart, chart_position, name, value, position, project_ids) \
             VALUES ('Audio', 0, 'Spatial Audio', 70, 0, '[\"9\"]')",
        )
        .execute(&pool)
        .await?;

        let result = load_portfolio(&pool).await;
        assert!(matches!(result, Err(StoreError::Skill(SkillError::UnknownProject { .. }))));
        Ok(())
    }

    #[tokio::test]
    async fn corrupt_row_surfaces_record_error() -> Result<(), Box<dyn std::error::Error>> {
        let pool = memory_pool().await?;
        query(
            "INSERT INTO project (id, position, title, description, role, problem, solution, tools) \
             VALUES ('1', 0, 't', 'd', 'r', 'p', 's', 'not json')",
        )
        .execute(&pool)
        .await?;

        let result = load_portfolio(&pool).await;
        assert!(matches!(result, Err(StoreError::Record(RecordError::List { .. }))));
        Ok(())
    }
}
