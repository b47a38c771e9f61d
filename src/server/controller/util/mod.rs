//! Helpers shared by controllers.

pub mod access;
