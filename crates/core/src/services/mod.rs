pub mod analytics_service;
pub mod chart_service;
pub mod ledger_service;
pub mod projection_service;
pub mod quote_service;
pub mod refresh_scheduler;
