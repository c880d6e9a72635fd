//! A small layered web service for a book catalogue: an axum route layer
//! dispatching to a repository over a local libsql store.

pub mod config;
pub mod db;
pub mod handler;
pub mod model;
pub mod repo;
pub mod routes;
