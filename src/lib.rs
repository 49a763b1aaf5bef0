//! TPRJ - Terminal Projects Client Library
//!
//! A terminal client for a project-hosting service: browse your
//! projects, create new ones from a modal dialog, and jump to each
//! project's dashboard by its subdomain.

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;

pub use domain::*;
pub use application::*;
