//! Infrastructure layer: storage, auth and services

pub mod auth;
pub mod db;
pub mod logging;
pub mod reference;
pub mod team;
pub mod user;
pub mod user_data;
