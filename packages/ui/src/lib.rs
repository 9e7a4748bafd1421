//! This crate contains all shared UI for the workspace: the session context,
//! list and form plumbing, and the role dashboards.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod banner;
pub use banner::BannerView;

pub mod fields;
pub mod form;

pub mod list;
pub use list::{use_resource_view, ListController};

pub mod modal;
pub use modal::{ConfirmDialog, FormModalFrame, ModalOverlay};

mod pagination;
pub use pagination::PaginationBar;

mod session;
pub use session::{
    expire_session, login_redirect, use_api, use_session, LogoutButton, RequireRole,
    SessionProvider, UserBadge,
};

pub mod views;
pub use views::{AdminDashboard, EmployeeDashboard, LoginForm, TeamLeadDashboard};

/// Stylesheet for every class the views use. The web shell inlines it once.
pub const STYLES: &str = r#"
*, *::before, *::after { box-sizing: border-box; }
body { margin: 0; font-family: system-ui, -apple-system, "Segoe UI", sans-serif; color: #262626; background: #f5f5f5; }

.fixed { position: fixed; }
.inset-0 { inset: 0; }
.flex { display: flex; }
.flex-col { flex-direction: column; }
.flex-1 { flex: 1; }
.items-center { align-items: center; }
.justify-center { justify-content: center; }
.gap-2 { gap: 0.5rem; }
.w-full { width: 100%; }
.min-h-screen { min-height: 100vh; }
.max-h-\[90vh\] { max-height: 90vh; }
.overflow-y-auto { overflow-y: auto; }
.m-0 { margin: 0; }
.mx-4 { margin-left: 1rem; margin-right: 1rem; }
.mb-3 { margin-bottom: 0.75rem; }
.mb-5 { margin-bottom: 1.25rem; }
.mt-5 { margin-top: 1.25rem; }
.p-6 { padding: 1.5rem; }
.bg-white { background: #fff; }
.bg-black\/30 { background: rgba(0, 0, 0, 0.3); z-index: 50; }
.rounded-lg { border-radius: 0.5rem; }
.shadow-lg { box-shadow: 0 10px 25px rgba(0, 0, 0, 0.15); }
.text-xs { font-size: 0.75rem; }
.text-sm { font-size: 0.875rem; }
.text-lg { font-size: 1.125rem; }
.font-medium { font-weight: 500; }
.font-semibold { font-weight: 600; }
.text-neutral-500 { color: #737373; }
.text-neutral-600 { color: #525252; }
.text-neutral-800 { color: #262626; }
.whitespace-pre-wrap { white-space: pre-wrap; }
.max-w-md { max-width: 28rem; }
.max-w-lg { max-width: 32rem; }
.max-w-2xl { max-width: 42rem; }
.max-w-3xl { max-width: 48rem; }

.dashboard { min-height: 100vh; display: flex; flex-direction: column; }
.dashboard-header { display: flex; align-items: center; justify-content: space-between; padding: 0.75rem 1.5rem; background: #fff; border-bottom: 1px solid #e5e5e5; }
.dashboard-header h1 { margin: 0; font-size: 1.25rem; }
.dashboard-user { display: flex; align-items: center; gap: 1rem; }
.dashboard-main { padding: 1.5rem; flex: 1; }
.tab-bar { display: flex; gap: 0.25rem; padding: 0 1.5rem; background: #fff; border-bottom: 1px solid #e5e5e5; overflow-x: auto; }
.tab { padding: 0.75rem 1rem; border: none; background: none; cursor: pointer; color: #525252; border-bottom: 2px solid transparent; white-space: nowrap; }
.tab--active { color: #1d4ed8; border-bottom-color: #1d4ed8; font-weight: 600; }

.panel { background: #fff; border-radius: 0.5rem; padding: 1.25rem; box-shadow: 0 1px 3px rgba(0, 0, 0, 0.08); }
.panel-header { display: flex; flex-wrap: wrap; align-items: flex-end; justify-content: space-between; gap: 1rem; margin-bottom: 1rem; }
.panel-header h2 { margin: 0; font-size: 1.125rem; }
.panel-filters { display: flex; flex-wrap: wrap; align-items: flex-end; gap: 0.5rem; }
.stats-row { display: flex; gap: 0.75rem; }
.stat { font-size: 0.875rem; color: #525252; }
.stat--accent { color: #1d4ed8; font-weight: 600; }
.empty-state { padding: 2rem; text-align: center; color: #737373; }
.hint { font-size: 0.8125rem; color: #737373; }

.data-table { width: 100%; border-collapse: collapse; font-size: 0.875rem; }
.data-table th, .data-table td { text-align: left; padding: 0.5rem 0.75rem; border-bottom: 1px solid #f0f0f0; }
.data-table th { color: #525252; font-weight: 600; background: #fafafa; }
.row-actions { display: flex; flex-wrap: wrap; gap: 0.25rem; align-items: center; }

.badge { display: inline-block; padding: 0.125rem 0.5rem; border-radius: 9999px; font-size: 0.75rem; font-weight: 500; }
.badge--gray { background: #f5f5f5; color: #525252; }
.badge--green { background: #dcfce7; color: #166534; }
.badge--amber { background: #fef3c7; color: #92400e; }
.badge--blue { background: #dbeafe; color: #1e40af; }
.badge--red { background: #fee2e2; color: #991b1b; }

.btn { display: inline-flex; align-items: center; justify-content: center; gap: 0.375rem; padding: 0.5rem 0.875rem; border-radius: 0.375rem; border: 1px solid transparent; font-size: 0.875rem; cursor: pointer; }
.btn:disabled { opacity: 0.5; cursor: not-allowed; }
.btn-primary { background: #1d4ed8; color: #fff; }
.btn-outline { background: #fff; border-color: #d4d4d4; color: #262626; }
.btn-danger { background: #dc2626; color: #fff; }
.btn-link { background: none; border: none; padding: 0.25rem 0.375rem; color: #1d4ed8; }
.btn-danger-text { color: #dc2626; }
.btn-block { width: 100%; }

.banner { display: flex; align-items: center; gap: 0.5rem; padding: 0.625rem 0.875rem; border-radius: 0.375rem; margin-bottom: 1rem; font-size: 0.875rem; }
.banner--success { background: #dcfce7; color: #166534; }
.banner--error { background: #fee2e2; color: #991b1b; }
.banner-close { background: none; border: none; cursor: pointer; color: inherit; }

.field { display: flex; flex-direction: column; gap: 0.25rem; margin-bottom: 0.75rem; }
.field--inline { flex-direction: row; align-items: center; gap: 0.5rem; }
.field-label { font-size: 0.8125rem; font-weight: 500; color: #404040; }
.field-input { padding: 0.5rem 0.625rem; border: 1px solid #d4d4d4; border-radius: 0.375rem; font-size: 0.875rem; }
.field-row { display: grid; grid-template-columns: repeat(auto-fit, minmax(12rem, 1fr)); gap: 0.75rem; }
.form-error { color: #dc2626; font-size: 0.875rem; margin: 0 0 0.75rem; }
.search-box { min-width: 14rem; }
.recipient-list { border: 1px solid #e5e5e5; border-radius: 0.375rem; padding: 0.75rem; max-height: 14rem; overflow-y: auto; }

.pagination { display: flex; align-items: center; gap: 0.25rem; margin-top: 1rem; }
.pagination-btn { min-width: 2rem; padding: 0.25rem 0.5rem; border: 1px solid #d4d4d4; border-radius: 0.25rem; background: #fff; cursor: pointer; }
.pagination-btn--active { background: #1d4ed8; border-color: #1d4ed8; color: #fff; }
.pagination-btn:disabled { opacity: 0.4; cursor: not-allowed; }
.pagination-summary { margin-left: auto; font-size: 0.8125rem; color: #737373; }

.card-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(18rem, 1fr)); gap: 1rem; }
.card { border: 1px solid #e5e5e5; border-radius: 0.5rem; padding: 1rem; background: #fff; }
.card-header { display: flex; justify-content: space-between; align-items: flex-start; gap: 0.5rem; margin-bottom: 0.5rem; }
.card-actions { display: flex; flex-wrap: wrap; gap: 0.5rem; margin-top: 0.75rem; }

.detail { display: flex; flex-direction: column; gap: 1rem; }
.detail-header { display: flex; justify-content: space-between; align-items: center; }
.detail-grid { display: grid; grid-template-columns: max-content 1fr; gap: 0.375rem 1rem; font-size: 0.875rem; margin: 0; }
.detail-grid dt { color: #737373; }
.detail-grid dd { margin: 0; }
.detail-section { border-top: 1px solid #f0f0f0; padding-top: 0.75rem; }
.detail-section h3 { margin: 0 0 0.5rem; font-size: 0.9375rem; }
.comment { border-left: 3px solid #dbeafe; padding: 0.25rem 0.75rem; margin-bottom: 0.5rem; }

.notification-list { list-style: none; margin: 0; padding: 0; }
.notification { display: flex; gap: 0.75rem; align-items: flex-start; padding: 0.75rem; border-bottom: 1px solid #f0f0f0; }
.notification--unread { background: #eff6ff; }
.notification-body { flex: 1; }
.notification-body p { margin: 0.25rem 0; font-size: 0.875rem; }
.notification-title { font-weight: 600; }

.login-container { min-height: 100vh; display: flex; align-items: center; justify-content: center; padding: 1rem; }
.login-card { width: 100%; max-width: 24rem; background: #fff; padding: 2rem; border-radius: 0.5rem; box-shadow: 0 10px 25px rgba(0, 0, 0, 0.08); }
.login-card h1 { margin: 0 0 0.25rem; font-size: 1.5rem; }
.login-subtitle { margin: 0 0 1.5rem; color: #737373; font-size: 0.875rem; }
"#;
