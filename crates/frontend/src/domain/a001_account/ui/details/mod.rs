//! Account Details UI Module
//!
//! MVVM split:
//! - model.rs: presentation of fetched data (history table, formatted balance)
//! - controller.rs: open/close/submit flow over injected ports
//! - view_model.rs: signals implementing the view port
//! - view.rs: Leptos component (pure UI)

pub mod controller;
pub mod dom_ids;
pub mod model;
mod view;
mod view_model;

use super::rows::DomAccountRows;
use crate::domain::a001_account::api::HttpAccountsApi;
use controller::DetailsModalController;

pub use view::AccountDetailsModal;
pub use view_model::AccountDetailsViewModel;

/// Controller wired to the browser
pub type AccountDetailsController =
    DetailsModalController<HttpAccountsApi, AccountDetailsViewModel, DomAccountRows>;
