pub mod app_reducer;
pub mod confirmation_reducer;
pub mod mode_reducer;
pub mod notification_reducer;
pub mod picker_reducer;
pub mod scroll_reducer;
pub mod session_reducer;
