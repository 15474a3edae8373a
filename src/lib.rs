pub mod breaker;
pub mod clients;
pub mod composition;
pub mod config;
pub mod controllers;
pub mod error;
pub mod models;
pub mod retry;
pub mod saga;
