pub mod attendance;
pub mod backup;
pub mod config;
pub mod db;
pub mod diary;
pub mod export;
pub mod finance;
pub mod fuel;
pub mod init;
pub mod log;
pub mod material;
pub mod org;
pub mod site;
pub mod task;
pub mod tx;
pub mod worker;
