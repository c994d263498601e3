//! Deliberately vulnerable web service for security training.
//!
//! Every flaw here is intentional: interpolated login SQL, plaintext
//! passwords, an unguarded admin listing, unescaped profile text, an
//! unrestricted fetch proxy and a settings page that prints the secret key.

pub mod app;
pub mod auth;
pub mod config;
pub mod db;
pub mod fetch;
pub mod pages;
pub mod routes;
pub mod session;
pub mod state;
pub mod users;
