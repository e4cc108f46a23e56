// Library for tests to access modules

pub mod aggregation;
pub mod cli;
pub mod config;
pub mod inventory_repo;
pub mod models;
pub mod pipeline;
pub mod report_writer;
pub mod version;
