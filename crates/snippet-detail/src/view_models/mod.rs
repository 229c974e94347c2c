//! View models
//!
//! Pre-computed presentation data derived from [`AppState`](crate::state::AppState).

pub mod controls_view_model;
pub mod snippet_view_model;

pub use controls_view_model::ControlsViewModel;
pub use snippet_view_model::SnippetViewModel;
