use crate::dates::{self, Month};
use crate::errors::ProfileError;
use crate::models::{MonthRecord, Profile, ProfileMap, ProfileSettings};
use crate::policy::WORKING_DAYS_PER_WEEK;
use chrono::NaiveDate;
use uuid::Uuid;

pub const DEFAULT_PROFILE_NAME: &str = "Me";
pub const DEFAULT_DAYS_PER_WEEK: u8 = 3;

/// All local profiles plus which one is active.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileStore {
    profiles: ProfileMap,
    active: Option<String>,
}

impl ProfileStore {
    /// Rebuilds a store from persisted parts. An active id that no longer
    /// names a profile is dropped.
    pub fn from_parts(profiles: ProfileMap, active: Option<String>) -> Self {
        let active = active.filter(|id| profiles.contains_key(id));
        Self { profiles, active }
    }

    pub fn profiles(&self) -> &ProfileMap {
        &self.profiles
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn get(&self, id: &str) -> Result<&Profile, ProfileError> {
        self.profiles
            .get(id)
            .ok_or_else(|| ProfileError::NotFound(id.to_string()))
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut Profile, ProfileError> {
        self.profiles
            .get_mut(id)
            .ok_or_else(|| ProfileError::NotFound(id.to_string()))
    }

    /// Returns the active profile, creating a default one on first use.
    ///
    /// The boolean is true when the store changed and needs persisting.
    pub fn ensure_active(&mut self, today: NaiveDate) -> (String, bool) {
        if let Some(id) = &self.active {
            return (id.clone(), false);
        }
        if let Some(id) = self.profiles.keys().next().cloned() {
            self.active = Some(id.clone());
            return (id, true);
        }

        let profile = Profile {
            id: new_id(),
            name: DEFAULT_PROFILE_NAME.to_string(),
            join_date: dates::date_key(Month::containing(today).first_day()),
            days_per_week: DEFAULT_DAYS_PER_WEEK,
            months: Default::default(),
        };
        let id = profile.id.clone();
        self.profiles.insert(id.clone(), profile);
        self.active = Some(id.clone());
        (id, true)
    }

    /// Creates a profile and makes it active.
    pub fn create(&mut self, settings: ProfileSettings) -> Result<&Profile, ProfileError> {
        let settings = validate_settings(settings)?;
        let id = new_id();
        self.profiles.insert(
            id.clone(),
            Profile {
                id: id.clone(),
                name: settings.name,
                join_date: settings.join_date,
                days_per_week: settings.days_per_week,
                months: Default::default(),
            },
        );
        self.active = Some(id.clone());
        self.get(&id)
    }

    pub fn update(&mut self, id: &str, settings: ProfileSettings) -> Result<&Profile, ProfileError> {
        let settings = validate_settings(settings)?;
        let profile = self.get_mut(id)?;
        profile.name = settings.name;
        profile.join_date = settings.join_date;
        profile.days_per_week = settings.days_per_week;
        Ok(&*profile)
    }

    /// Removes a profile. If it was active, the first remaining profile
    /// becomes active.
    pub fn delete(&mut self, id: &str) -> Result<Profile, ProfileError> {
        let removed = self
            .profiles
            .remove(id)
            .ok_or_else(|| ProfileError::NotFound(id.to_string()))?;
        if self.active.as_deref() == Some(id) {
            self.active = self.profiles.keys().next().cloned();
        }
        Ok(removed)
    }

    pub fn select(&mut self, id: &str) -> Result<(), ProfileError> {
        self.get(id)?;
        self.active = Some(id.to_string());
        Ok(())
    }

    /// Replaces a month's holidays with the valid dates found in `text`.
    pub fn set_holidays(&mut self, id: &str, month: Month, text: &str) -> Result<&MonthRecord, ProfileError> {
        let holidays = dates::parse_holidays(text, month)
            .into_iter()
            .map(dates::date_key)
            .collect();
        let profile = self.get_mut(id)?;
        let record = profile.months.entry(month.key()).or_default();
        record.holidays = holidays;
        Ok(&*record)
    }

    /// Flips the attendance mark for `date`; returns whether it is now marked.
    pub fn toggle_attendance(&mut self, id: &str, date: NaiveDate) -> Result<bool, ProfileError> {
        let profile = self.get_mut(id)?;
        let key = Month::containing(date).key();
        let record = profile.months.entry(key.clone()).or_default();

        let day = dates::date_key(date);
        let attended = if record.attendance.remove(&day) {
            false
        } else {
            record.attendance.insert(day);
            true
        };
        if record.is_empty() {
            profile.months.remove(&key);
        }
        Ok(attended)
    }

    /// Imports a profile and makes it active, assigning a fresh id when the
    /// incoming one is missing. A profile with the same id is replaced.
    pub fn import(&mut self, mut profile: Profile) -> Result<&Profile, ProfileError> {
        if profile.name.trim().is_empty() {
            return Err(ProfileError::InvalidImport(ProfileError::EmptyName.to_string()));
        }
        if profile.days_per_week > WORKING_DAYS_PER_WEEK {
            return Err(ProfileError::InvalidImport(
                ProfileError::InvalidPolicy(profile.days_per_week).to_string(),
            ));
        }
        if profile.id.trim().is_empty() {
            profile.id = new_id();
        }

        let id = profile.id.clone();
        self.profiles.insert(id.clone(), profile);
        self.active = Some(id.clone());
        self.get(&id)
    }

    pub fn import_json(&mut self, json: &str) -> Result<&Profile, ProfileError> {
        self.import(parse_profile(json)?)
    }
}

/// Parses a profile document. Nothing is stored on failure.
pub fn parse_profile(json: &str) -> Result<Profile, ProfileError> {
    serde_json::from_str(json).map_err(|err| ProfileError::InvalidImport(err.to_string()))
}

pub fn export_profile(profile: &Profile) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(profile)
}

fn validate_settings(settings: ProfileSettings) -> Result<ProfileSettings, ProfileError> {
    let name = settings.name.trim().to_string();
    if name.is_empty() {
        return Err(ProfileError::EmptyName);
    }
    if settings.days_per_week > WORKING_DAYS_PER_WEEK {
        return Err(ProfileError::InvalidPolicy(settings.days_per_week));
    }
    let join_date = dates::parse_date(&settings.join_date)
        .map(dates::date_key)
        .ok_or_else(|| ProfileError::InvalidDate(settings.join_date.clone()))?;

    Ok(ProfileSettings {
        name,
        join_date,
        days_per_week: settings.days_per_week,
    })
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}
