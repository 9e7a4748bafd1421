//! Headless dashboard state.
//!
//! Everything here is plain data plus transitions; no module performs I/O
//! except the thin async helpers in [`session`], which delegate to
//! [`api::ApiClient`]. The `ui` crate keeps these values in signals and drives
//! them from event handlers.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`session`] | Who is signed in, one-shot restore, role gates. |
//! | [`resource`] | Paginated/filterable list controller with fetch sequencing. |
//! | [`form`] | Create/edit modal state and the [`Validate`] trait. |
//! | [`banner`] | Auto-dismissing success/error banners. |
//! | [`debounce`] | Search debouncing. |
//! | [`tabs`] | Per-role dashboard tabs. |
//! | [`inputs`] | HTML input value parsing and display formatting. |

pub mod banner;
pub mod debounce;
pub mod form;
pub mod inputs;
pub mod resource;
pub mod session;
pub mod tabs;

mod timer;
mod validation;

pub use banner::{Banner, BannerKind, BannerSlot};
pub use debounce::{Debounce, DebounceToken, SEARCH_DEBOUNCE};
pub use form::{FormMode, FormModal, Submission, Validate, ValidationError};
pub use resource::{page_window, FetchOutcome, FetchTicket, PendingDelete, ResourceView};
pub use session::{Session, SessionState};
pub use tabs::{home_route, initial_tab, resolve_tab, tabs_for, Tab};
pub use timer::sleep;
