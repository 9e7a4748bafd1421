//! Company assets, their assignment lifecycle, and return requests.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::dates::option_date;
use super::user::UserRef;
use crate::query::{Params, QueryParams};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetStatus {
    #[default]
    Available,
    Assigned,
    Maintenance,
    Retired,
    #[serde(other)]
    Unknown,
}

impl AssetStatus {
    pub const SELECTABLE: [AssetStatus; 4] = [
        AssetStatus::Available,
        AssetStatus::Assigned,
        AssetStatus::Maintenance,
        AssetStatus::Retired,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AssetStatus::Available => "Available",
            AssetStatus::Assigned => "Assigned",
            AssetStatus::Maintenance => "Maintenance",
            AssetStatus::Retired => "Retired",
            AssetStatus::Unknown => "Unknown",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default, alias = "type")]
    pub asset_type: String,
    #[serde(default)]
    pub serial_number: String,
    #[serde(default)]
    pub status: AssetStatus,
    #[serde(default)]
    pub condition: Option<String>,
    #[serde(default)]
    pub assigned_to: Option<UserRef>,
    #[serde(default, deserialize_with = "option_date")]
    pub assigned_on: Option<NaiveDate>,
    #[serde(default, deserialize_with = "option_date")]
    pub due_back: Option<NaiveDate>,
    #[serde(default)]
    pub return_requested: bool,
}

impl Asset {
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.status == AssetStatus::Assigned && self.due_back.is_some_and(|due| due < today)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetHistoryEntry {
    #[serde(alias = "_id")]
    pub id: String,
    pub action: String,
    #[serde(default)]
    pub user: Option<UserRef>,
    #[serde(default)]
    pub performed_by: Option<UserRef>,
    #[serde(default)]
    pub at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub note: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetStats {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub available: u64,
    #[serde(default)]
    pub assigned: u64,
    #[serde(default)]
    pub maintenance: u64,
    #[serde(default)]
    pub overdue: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReturnRequestStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnRequest {
    #[serde(alias = "_id")]
    pub id: String,
    pub asset: AssetRef,
    #[serde(default)]
    pub requested_by: Option<UserRef>,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub status: ReturnRequestStatus,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetRef {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub serial_number: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetDraft {
    pub name: String,
    pub asset_type: String,
    pub serial_number: String,
    pub condition: String,
    pub purchase_cost: Option<f64>,
}

impl From<&Asset> for AssetDraft {
    fn from(asset: &Asset) -> Self {
        Self {
            name: asset.name.clone(),
            asset_type: asset.asset_type.clone(),
            serial_number: asset.serial_number.clone(),
            condition: asset.condition.clone().unwrap_or_default(),
            purchase_cost: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignAssetDraft {
    pub user_id: String,
    pub due_back: Option<NaiveDate>,
    pub note: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReturnRequestDraft {
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResolveReturnDraft {
    pub approve: bool,
    pub note: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssetFilter {
    pub status: Option<AssetStatus>,
    pub asset_type: Option<String>,
}

impl QueryParams for AssetFilter {
    fn query_params(&self) -> Vec<(String, String)> {
        Params::new()
            .wire("status", self.status.as_ref())
            .opt("type", self.asset_type.as_deref().filter(|t| !t.is_empty()))
            .into_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asset(status: AssetStatus, due_back: Option<NaiveDate>) -> Asset {
        Asset {
            id: "a1".into(),
            name: "Laptop".into(),
            asset_type: "laptop".into(),
            serial_number: "SN-1".into(),
            status,
            condition: None,
            assigned_to: None,
            assigned_on: None,
            due_back,
            return_requested: false,
        }
    }

    #[test]
    fn test_overdue_only_when_assigned_and_past_due() {
        let today = NaiveDate::from_ymd_opt(2024, 4, 10).unwrap();
        let past = NaiveDate::from_ymd_opt(2024, 4, 1);
        assert!(asset(AssetStatus::Assigned, past).is_overdue(today));
        assert!(!asset(AssetStatus::Available, past).is_overdue(today));
        assert!(!asset(AssetStatus::Assigned, None).is_overdue(today));
        assert!(!asset(AssetStatus::Assigned, Some(today)).is_overdue(today));
    }

    #[test]
    fn test_type_alias_accepted() {
        let a: Asset =
            serde_json::from_str(r#"{"_id": "a", "name": "Phone", "type": "mobile"}"#).unwrap();
        assert_eq!(a.asset_type, "mobile");
        assert_eq!(a.status, AssetStatus::Available);
    }

    #[test]
    fn test_blank_type_filter_skipped() {
        let filter = AssetFilter {
            status: None,
            asset_type: Some(String::new()),
        };
        assert!(filter.query_params().is_empty());
    }
}
