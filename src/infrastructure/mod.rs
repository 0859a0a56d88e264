pub mod config;
pub mod network;
pub mod providers;
pub mod storage;
