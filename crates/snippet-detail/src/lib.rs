//! # snippet-detail
//!
//! Detail view controller of the snippet manager: shows one snippet
//! read-only, edits it, deletes it after confirmation and compares it
//! side by side against another snippet.
//!
//! The page is a small Redux loop. User operations and service responses
//! are [`actions::Action`]s; [`middleware`] performs service calls on a
//! background runtime and reports failures as notifications or redirects;
//! [`reducers`] apply state changes one action at a time.
//!
//! ```rust,ignore
//! use snippet_detail::DetailPage;
//!
//! let mut page = DetailPage::new(config, client)?;
//! page.load(SnippetId(42));
//! page.wait_idle(Duration::from_secs(5));
//! println!("{}", page.render());
//! ```

pub mod actions;
pub mod dispatcher;
pub mod middleware;
pub mod page;
pub mod reducers;
pub mod state;
pub mod store;
pub mod view_models;
pub mod views;

#[cfg(test)]
mod test_support;

pub use page::DetailPage;
pub use state::{AppState, EditField, NotificationKind, Redirect, ViewMode};
