pub mod add;
pub mod config;
pub mod db;
pub mod generate;
pub mod init;
pub mod list;
pub mod log;
