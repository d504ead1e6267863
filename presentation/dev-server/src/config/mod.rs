pub mod app_config;
pub mod env_file_config;
pub mod server_config;
