pub mod app_config;
pub mod database;
pub mod webinar_repo;

pub use database::DbClient;
pub use webinar_repo::StoreWebinarRepository;
