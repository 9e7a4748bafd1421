//! Wire models for every resource the dashboard consumes.

mod asset;
pub(crate) mod dates;
mod notification;
mod page;
mod project;
mod report;
mod task;
mod user;

pub use asset::{
    Asset, AssetDraft, AssetFilter, AssetHistoryEntry, AssetRef, AssetStats, AssetStatus,
    AssignAssetDraft, ResolveReturnDraft, ReturnRequest, ReturnRequestDraft, ReturnRequestStatus,
};
pub use notification::{
    BulkReadDraft, Notification, NotificationDraft, NotificationFilter, NotificationKind,
    NotificationStats, ReadState, Recipient, RecipientMode,
};
pub use page::{Page, Pagination};
pub use project::{
    ClientStatusDraft, Milestone, MilestoneDraft, Payment, PaymentDraft, Project, ProjectDetail,
    ProjectDetailsDraft, ProjectDraft, ProjectFilter, ProjectGroup, ProjectGroupDraft,
    ProjectGroupRef, ProjectRef, ProjectStatus, TeamAssignmentDraft, TimeEntry, TimeLogDraft,
};
pub use report::{
    CompletionDraft, CompletionStatus, Feedback, FeedbackDraft, Report, ReportDraft,
    ReportEligibility, ReportFilter, ReportStatus, ReportType,
};
pub use task::{
    Task, TaskDetail, TaskDraft, TaskFilter, TaskPriority, TaskResponse, TaskResponseDraft,
    TaskStatus, TaskStatusDraft, TimeLog,
};
pub use user::{Employee, LoginDraft, Role, UserFilter, UserInfo, UserRef};
