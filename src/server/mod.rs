//! Server application core modules.
//!
//! This module contains the server side of Mia Club: HTTP routing, session based
//! authentication with backoffice roles, content and configuration persistence, and the local
//! object storage that serves uploaded images.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
