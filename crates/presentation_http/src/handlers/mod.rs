//! HTTP request handlers

pub mod common;
pub mod forecast;
pub mod health;
pub mod weather;
