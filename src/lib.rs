pub mod auth;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod ledger;
pub mod models;
pub mod pricing;
