pub mod manage;
pub mod report;
