//! # API crate: typed client for the task-management REST API
//!
//! Every screen of the dashboard talks to the backend through this crate. It
//! holds no state beyond its configuration: the server is the single source of
//! truth and the client only issues calls and decodes answers.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`], the [`HttpTransport`] seam, and the global 401 interceptor |
//! | [`config`] | [`ClientConfig`]: base URL, fixed timeout, login route |
//! | [`error`] | [`ApiError`] and the server-message-or-fallback rule |
//! | [`models`] | Entities, request drafts, list filters, pagination |
//! | [`query`] | Query-string encoding and [`ListQuery`] |
//!
//! ## Endpoints
//!
//! Each resource module adds methods to [`ApiClient`]:
//!
//! - **Auth**: `current_user`, `login`, `logout`
//! - **Projects**: listing per role, CRUD, pick/release, payments, milestones,
//!   time entries, client status, team, details, groups, recalculation
//! - **Tasks**: listing, detail, CRUD, status, responses, time logs
//! - **Reports**: listing per role, CRUD, feedback, completion, submit, eligibility
//! - **Notifications**: inbox, send, read/unread (single, bulk, all), delete,
//!   stats, recipients
//! - **Assets**: listing, CRUD, assign/return/force-return, history, stats,
//!   overdue/returned, return requests
//! - **Users**: employees, my team, assign/remove members

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod query;

mod assets;
mod auth;
mod memory;
mod notifications;
mod projects;
mod reports;
mod tasks;
mod transport;
mod users;

pub use client::{ApiClient, ApiRequest, ApiResponse, HttpTransport, Method, UnauthorizedHook};
pub use config::ClientConfig;
pub use error::{ApiError, ApiResult};
pub use memory::MemoryTransport;
pub use models::*;
pub use query::{ListQuery, Params, QueryParams, DEFAULT_PAGE_SIZE};
pub use transport::ReqwestTransport;

/// The client as used by the web front-end.
pub type Client = ApiClient<ReqwestTransport>;
