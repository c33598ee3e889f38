pub mod attendance;
pub mod day_stats;
pub mod diary;
pub mod fuel;
pub mod ledger;
pub mod material;
pub mod organization;
pub mod site;
pub mod task;
pub mod transaction;
pub mod worker;
