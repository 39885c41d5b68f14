mod auth_context;
mod error;
mod upsert_request;
