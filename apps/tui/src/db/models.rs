use portfolio_core::{Project, ProjectId, SkillError, SkillStat};
use sqlx::FromRow;

/// Represents a row of the `project` table
#[derive(Debug, FromRow, Clone)]
pub struct ProjectRecord {
    pub id: String,
    pub position: i64,
    pub title: String,
    pub description: String,
    pub thumbnail: String,
    pub role: String,
    pub problem: String,
    pub solution: String,
    pub tools: String,
    pub challenges: String,
    pub results: String,
    pub demo_link: Option<String>,
    pub github_link: Option<String>,
    pub images: String,
}

/// Represents a row of the `skill` table
#[derive(Debug, FromRow, Clone)]
pub struct SkillRecord {
    pub id: i64,
    pub chart: String,
    pub chart_position: i64,
    pub name: String,
    pub value: i64,
    pub position: i64,
    pub project_ids: String,
}

#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("row {id}: column `{column}` is not a JSON string list: {source}")]
    List {
        id: String,
        column: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Skill(#[from] SkillError),
}

fn decode_list(id: &str, column: &'static str, raw: &str) -> Result<Vec<String>, RecordError> {
    serde_json::from_str(raw).map_err(|source| RecordError::List {
        id: id.to_string(),
        column,
        source,
    })
}

pub fn encode_list(items: &[String]) -> Result<String, serde_json::Error> {
    serde_json::to_string(items)
}

impl TryFrom<ProjectRecord> for Project {
    type Error = RecordError;

    fn try_from(record: ProjectRecord) -> Result<Self, Self::Error> {
        let tools = decode_list(&record.id, "tools", &record.tools)?;
        let challenges = decode_list(&record.id, "challenges", &record.challenges)?;
        let results = decode_list(&record.id, "results", &record.results)?;
        let images = decode_list(&record.id, "images", &record.images)?;

        Ok(Self {
            id: ProjectId::new(record.id),
            title: record.title,
            description: record.description,
            thumbnail: record.thumbnail,
            role: record.role,
            problem: record.problem,
            solution: record.solution,
            tools,
            challenges,
            results,
            demo_link: record.demo_link,
            github_link: record.github_link,
            images,
        })
    }
}

impl SkillRecord {
    /// Stored project ids; checked against the catalog by the caller.
    pub fn project_ids(&self) -> Result<Vec<ProjectId>, RecordError> {
        let ids = decode_list(&self.name, "project_ids", &self.project_ids)?;
        Ok(ids.into_iter().map(ProjectId::new).collect())
    }
}

impl TryFrom<SkillRecord> for SkillStat {
    type Error = RecordError;

    fn try_from(record: SkillRecord) -> Result<Self, Self::Error> {
        Ok(Self::new(record.name, record.value)?)
    }
}
