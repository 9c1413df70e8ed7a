//! Core library exports for the Stockroom inventory manager.
//!
//! This crate exposes the domain model, forms, repositories and service
//! layers that presentation front ends (web routes, CLI or API) call into.

pub mod db;
pub mod domain;
pub mod forms;
pub mod models;
pub mod pagination;
pub mod repository;
pub mod schema;
pub mod services;
