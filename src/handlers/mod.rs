pub mod api_handlers;
pub mod event_handlers;
