pub mod chart;
pub mod investment;
pub mod ledger;
pub mod quote;
pub mod settings;
pub mod summary;
pub mod transaction;
