pub mod backup;
pub mod diary;
pub mod filter;
pub mod ledger;
pub mod period;
pub mod summary;
pub mod wages;
