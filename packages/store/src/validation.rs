//! Local validation for every draft the dashboard submits.

use api::{
    AssetDraft, AssignAssetDraft, ClientStatusDraft, FeedbackDraft, LoginDraft, MilestoneDraft,
    NotificationDraft, PaymentDraft, ProjectDetailsDraft, ProjectDraft, ProjectGroupDraft,
    RecipientMode, ReportDraft, ResolveReturnDraft, ReturnRequestDraft, TaskDraft,
    TaskResponseDraft, TeamAssignmentDraft, TimeLogDraft,
};

use crate::form::{Validate, ValidationError};

fn required(value: &str, field: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required(field));
    }
    Ok(())
}

fn positive(value: f64, field: &'static str) -> Result<(), ValidationError> {
    if value.is_finite() && value > 0.0 {
        return Ok(());
    }
    Err(ValidationError::NotPositive(field))
}

impl Validate for LoginDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        required(&self.email, "Email")?;
        required(&self.password, "Password")
    }
}

impl Validate for ProjectDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        required(&self.name, "Name")?;
        positive(self.budget, "Budget")
    }
}

impl Validate for PaymentDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        positive(self.amount, "Amount")
    }
}

impl Validate for MilestoneDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        required(&self.title, "Title")?;
        if let Some(amount) = self.amount {
            positive(amount, "Amount")?;
        }
        Ok(())
    }
}

impl Validate for TimeLogDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        required(&self.task_id, "Task")?;
        let start = self.start_time.ok_or(ValidationError::Required("Start time"))?;
        let end = self.end_time.ok_or(ValidationError::Required("End time"))?;
        if end <= start {
            return Err(ValidationError::EndBeforeStart);
        }
        Ok(())
    }
}

impl Validate for ClientStatusDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        required(&self.client_status, "Client status")
    }
}

impl Validate for ProjectDetailsDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

impl Validate for TeamAssignmentDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

impl Validate for ProjectGroupDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        required(&self.name, "Name")
    }
}

impl Validate for TaskDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        required(&self.title, "Title")
    }
}

impl Validate for TaskResponseDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        required(&self.message, "Response")
    }
}

impl Validate for ReportDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        required(&self.title, "Title")?;
        required(&self.content, "Content")
    }
}

impl Validate for FeedbackDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        required(&self.message, "Feedback")
    }
}

impl Validate for NotificationDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        required(&self.title, "Title")?;
        required(&self.message, "Message")?;
        match self.recipient_mode {
            RecipientMode::Specific if self.receivers.is_empty() => {
                Err(ValidationError::NoRecipients)
            }
            RecipientMode::Role if self.target_role.is_none() => {
                Err(ValidationError::Required("Role"))
            }
            _ => Ok(()),
        }
    }
}

impl Validate for AssetDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        required(&self.name, "Name")?;
        required(&self.asset_type, "Type")?;
        required(&self.serial_number, "Serial number")?;
        if let Some(cost) = self.purchase_cost {
            positive(cost, "Purchase cost")?;
        }
        Ok(())
    }
}

impl Validate for AssignAssetDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        required(&self.user_id, "Employee")
    }
}

impl Validate for ReturnRequestDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        required(&self.reason, "Reason")
    }
}

impl Validate for ResolveReturnDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::Role;
    use chrono::NaiveDate;

    fn at(hour: u32, min: u32) -> Option<chrono::NaiveDateTime> {
        NaiveDate::from_ymd_opt(2024, 6, 3).and_then(|d| d.and_hms_opt(hour, min, 0))
    }

    #[test]
    fn test_time_log_end_must_follow_start() {
        let mut draft = TimeLogDraft {
            task_id: "t1".into(),
            start_time: at(9, 30),
            end_time: at(9, 30),
            description: String::new(),
        };
        let err = draft.validate().unwrap_err();
        assert_eq!(err.to_string(), "End time must be after start time");

        draft.end_time = at(9, 0);
        assert_eq!(draft.validate(), Err(ValidationError::EndBeforeStart));

        draft.end_time = at(11, 0);
        assert_eq!(draft.validate(), Ok(()));
    }

    #[test]
    fn test_time_log_needs_both_ends() {
        let draft = TimeLogDraft {
            task_id: "t1".into(),
            start_time: at(9, 0),
            ..Default::default()
        };
        assert_eq!(draft.validate(), Err(ValidationError::Required("End time")));
    }

    #[test]
    fn test_notification_recipients() {
        let mut draft = NotificationDraft {
            title: "Standup".into(),
            message: "Moved to 10am".into(),
            ..Default::default()
        };
        assert_eq!(
            draft.validate().unwrap_err().to_string(),
            "Please select at least one user"
        );

        draft.recipient_mode = RecipientMode::Role;
        assert_eq!(draft.validate(), Err(ValidationError::Required("Role")));
        draft.target_role = Some(Role::Employee);
        assert_eq!(draft.validate(), Ok(()));

        draft.recipient_mode = RecipientMode::All;
        draft.target_role = None;
        assert_eq!(draft.validate(), Ok(()));
    }

    #[test]
    fn test_asset_required_fields_in_order() {
        let mut draft = AssetDraft {
            name: "Monitor".into(),
            ..Default::default()
        };
        assert_eq!(draft.validate().unwrap_err().to_string(), "Type is required");
        draft.asset_type = "display".into();
        assert_eq!(
            draft.validate().unwrap_err().to_string(),
            "Serial number is required"
        );
        draft.serial_number = "MN-9".into();
        draft.purchase_cost = Some(0.0);
        assert_eq!(
            draft.validate().unwrap_err().to_string(),
            "Purchase cost must be greater than zero"
        );
        draft.purchase_cost = Some(199.0);
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_amounts_must_be_positive() {
        assert!(PaymentDraft::default().validate().is_err());
        let nan = PaymentDraft {
            amount: f64::NAN,
            ..Default::default()
        };
        assert!(nan.validate().is_err());

        let project = ProjectDraft {
            name: "Atlas".into(),
            budget: -5.0,
            ..Default::default()
        };
        assert_eq!(project.validate(), Err(ValidationError::NotPositive("Budget")));
    }

    #[test]
    fn test_blank_text_counts_as_missing() {
        let draft = ReportDraft {
            title: "   ".into(),
            content: "Shipped login".into(),
            ..Default::default()
        };
        assert_eq!(draft.validate(), Err(ValidationError::Required("Title")));
    }
}
