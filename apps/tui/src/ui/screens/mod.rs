pub mod detail;
pub mod gallery;
pub mod help;
pub mod skills;
