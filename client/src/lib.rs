//! Client-side controllers for an HR service's leave application screens.
//!
//! The crate is headless: [`DetailsViewModel`] drives the view/edit/cancel
//! flow for a single application and [`MyApplicationsViewModel`] feeds the
//! per-employee list, while rendering, routing, and alert dismissal stay
//! with the embedding presentation layer. Transport is behind the
//! [`api::LeaveApi`] trait, with [`api::ApiClient`] as the HTTP
//! implementation.

pub mod alert;
pub mod api;
pub mod config;
pub mod details;
pub mod list;
pub mod session;
pub mod utils;

pub use alert::{Alert, AlertKind};
pub use api::{ApiClient, ApiError, LeaveApi};
pub use config::RuntimeConfig;
pub use details::DetailsViewModel;
pub use list::MyApplicationsViewModel;
pub use session::Session;
