mod login;
pub use login::Login;

mod dashboards;
pub use dashboards::{Admin, Employee, TeamLead};
