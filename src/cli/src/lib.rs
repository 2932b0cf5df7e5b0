pub mod command;
pub mod config;
pub mod http_client;
pub mod shell;
pub mod storage;
pub mod view;
