use crate::policy::{DayKind, MonthSummary};
use crate::series::SeriesPoint;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Holidays and attendance marks for one month, as canonical date strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MonthRecord {
    #[serde(default)]
    pub holidays: BTreeSet<String>,
    #[serde(default)]
    pub attendance: BTreeSet<String>,
}

impl MonthRecord {
    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty() && self.attendance.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub join_date: String,
    pub days_per_week: u8,
    #[serde(default)]
    pub months: BTreeMap<String, MonthRecord>,
}

/// Every profile, keyed by id. This is the persisted blob.
pub type ProfileMap = BTreeMap<String, Profile>;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSettings {
    pub name: String,
    pub join_date: String,
    pub days_per_week: u8,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileListEntry {
    pub id: String,
    pub name: String,
    pub join_date: String,
    pub days_per_week: u8,
}

impl From<&Profile> for ProfileListEntry {
    fn from(profile: &Profile) -> Self {
        Self {
            id: profile.id.clone(),
            name: profile.name.clone(),
            join_date: profile.join_date.clone(),
            days_per_week: profile.days_per_week,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProfilesResponse {
    pub active: Option<String>,
    pub profiles: Vec<ProfileListEntry>,
}

#[derive(Debug, Deserialize)]
pub struct HolidaysRequest {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct AttendanceRequest {
    pub date: String,
}

#[derive(Debug, Deserialize)]
pub struct ShareQuery {
    pub share: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ShareResponse {
    pub param: String,
    pub path: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CalendarDay {
    pub date: String,
    pub kind: DayKind,
    pub attended: bool,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthView {
    pub profile_id: String,
    pub month: String,
    pub holidays: Vec<String>,
    pub attendance: Vec<String>,
    pub summary: MonthSummary,
    pub days: Vec<CalendarDay>,
    pub series: Vec<SeriesPoint>,
}
