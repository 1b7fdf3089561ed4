pub mod toml;
pub mod yaml;
