//! Dashboard tabs available to each role.

use api::Role;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tab {
    Projects,
    AvailableProjects,
    MyProjects,
    AssignedProjects,
    Tasks,
    MyTasks,
    Reports,
    TeamReports,
    MyReports,
    Assets,
    MyAssets,
    ReturnRequests,
    Employees,
    Team,
    Notifications,
}

const ADMIN_TABS: &[Tab] = &[
    Tab::Projects,
    Tab::Tasks,
    Tab::Reports,
    Tab::Assets,
    Tab::ReturnRequests,
    Tab::Employees,
    Tab::Notifications,
];

const TEAM_LEAD_TABS: &[Tab] = &[
    Tab::AvailableProjects,
    Tab::MyProjects,
    Tab::Tasks,
    Tab::TeamReports,
    Tab::MyReports,
    Tab::Team,
    Tab::MyAssets,
    Tab::Notifications,
];

const EMPLOYEE_TABS: &[Tab] = &[
    Tab::AssignedProjects,
    Tab::MyTasks,
    Tab::MyReports,
    Tab::MyAssets,
    Tab::Notifications,
];

impl Tab {
    pub fn key(&self) -> &'static str {
        match self {
            Tab::Projects => "projects",
            Tab::AvailableProjects => "available-projects",
            Tab::MyProjects => "my-projects",
            Tab::AssignedProjects => "assigned-projects",
            Tab::Tasks => "tasks",
            Tab::MyTasks => "my-tasks",
            Tab::Reports => "reports",
            Tab::TeamReports => "team-reports",
            Tab::MyReports => "my-reports",
            Tab::Assets => "assets",
            Tab::MyAssets => "my-assets",
            Tab::ReturnRequests => "return-requests",
            Tab::Employees => "employees",
            Tab::Team => "team",
            Tab::Notifications => "notifications",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Projects => "Projects",
            Tab::AvailableProjects => "Available Projects",
            Tab::MyProjects | Tab::AssignedProjects => "My Projects",
            Tab::Tasks => "Tasks",
            Tab::MyTasks => "My Tasks",
            Tab::Reports => "Reports",
            Tab::TeamReports => "Team Reports",
            Tab::MyReports => "My Reports",
            Tab::Assets => "Assets",
            Tab::MyAssets => "My Assets",
            Tab::ReturnRequests => "Return Requests",
            Tab::Employees => "Employees",
            Tab::Team => "My Team",
            Tab::Notifications => "Notifications",
        }
    }
}

pub fn tabs_for(role: Role) -> &'static [Tab] {
    match role {
        Role::Admin => ADMIN_TABS,
        Role::TeamLead => TEAM_LEAD_TABS,
        Role::Employee => EMPLOYEE_TABS,
    }
}

pub fn initial_tab(role: Role) -> Tab {
    tabs_for(role)[0]
}

/// `tab` if the role may see it, otherwise the role's initial tab.
pub fn resolve_tab(role: Role, tab: Tab) -> Tab {
    if tabs_for(role).contains(&tab) {
        tab
    } else {
        initial_tab(role)
    }
}

/// Landing route of each role's dashboard.
pub fn home_route(role: Role) -> &'static str {
    match role {
        Role::Admin => "/admin",
        Role::TeamLead => "/teamlead",
        Role::Employee => "/employee",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_role_lands_somewhere() {
        assert_eq!(initial_tab(Role::Admin), Tab::Projects);
        assert_eq!(initial_tab(Role::TeamLead), Tab::AvailableProjects);
        assert_eq!(initial_tab(Role::Employee), Tab::AssignedProjects);
    }

    #[test]
    fn test_foreign_tab_falls_back() {
        assert_eq!(resolve_tab(Role::Employee, Tab::Employees), Tab::AssignedProjects);
        assert_eq!(resolve_tab(Role::TeamLead, Tab::Team), Tab::Team);
    }

    #[test]
    fn test_keys_unique_per_role() {
        for role in Role::ALL {
            let mut keys: Vec<_> = tabs_for(role).iter().map(|t| t.key()).collect();
            let count = keys.len();
            keys.sort_unstable();
            keys.dedup();
            assert_eq!(keys.len(), count, "{role}");
        }
    }
}
