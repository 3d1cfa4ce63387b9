//! Fitness Coach Backend Library
//!
//! HTTP surface, Postgres storage and report service around the shared
//! aggregation core. Exposed as a library for integration tests.

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
