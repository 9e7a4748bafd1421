pub mod assets;
pub mod dashboard;
pub mod login;
pub mod notifications;
pub mod projects;
pub mod reports;
pub mod tasks;
pub mod users;

pub use assets::{AssetsTab, MyAssetsTab, ReturnRequestsTab};
pub use dashboard::{AdminDashboard, DashboardShell, EmployeeDashboard, TeamLeadDashboard};
pub use login::LoginForm;
pub use notifications::NotificationsTab;
pub use projects::{ProjectScope, ProjectsTab};
pub use reports::{ReportScope, ReportsTab};
pub use tasks::{MyTasksTab, TasksTab};
pub use users::{EmployeesTab, TeamTab};
