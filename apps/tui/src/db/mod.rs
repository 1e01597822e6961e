pub mod migrations;
pub mod models;
pub mod queries;

pub use migrations::create_database_pool;
pub use queries::{
    count_projects, count_skills, load_portfolio, replace_portfolio, seed_sample_portfolio,
    StoreError,
};
