//! # Activity Registry
//!
//! In-memory roster of every activity for one running process.
//!
//! ## Rules
//!
//! - Activities are fixed at startup, only their participants change
//! - Participants keep signup order and never repeat
//! - Both signup and unregister check, in order: activity exists, email is on
//!   the school domain, then roster membership
//! - Capacity is only checked when `enforce_capacity` is set
//!
//! The registry itself does no locking. [`crate::state::AppState`] wraps it in
//! a lock so a whole check-then-mutate sequence runs under one write guard.
use indexmap::IndexMap;
use serde::Serialize;

use crate::{error::AppError, seed::seed_activities, utils::validate_email};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Activity {
    /// Also the registry key, so it is left out of the JSON body.
    #[serde(skip)]
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl Activity {
    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants as usize
    }
}

#[derive(Debug, Clone)]
pub struct Registry {
    activities: IndexMap<String, Activity>,
    school_domain: String,
    enforce_capacity: bool,
}

impl Registry {
    pub fn new(
        activities: IndexMap<String, Activity>,
        school_domain: impl Into<String>,
        enforce_capacity: bool,
    ) -> Self {
        Self {
            activities,
            school_domain: school_domain.into(),
            enforce_capacity,
        }
    }

    pub fn seeded(school_domain: impl Into<String>, enforce_capacity: bool) -> Self {
        Self::new(seed_activities(), school_domain, enforce_capacity)
    }

    pub fn list(&self) -> &IndexMap<String, Activity> {
        &self.activities
    }

    pub fn get(&self, activity_name: &str) -> Option<&Activity> {
        self.activities.get(activity_name)
    }

    pub fn signup(&mut self, activity_name: &str, email: &str) -> Result<String, AppError> {
        let enforce_capacity = self.enforce_capacity;
        let activity = self.checked_activity(activity_name, email)?;

        if activity.participants.iter().any(|p| p == email) {
            return Err(AppError::AlreadyRegistered);
        }

        if enforce_capacity && activity.is_full() {
            return Err(AppError::ActivityFull);
        }

        activity.participants.push(email.to_string());

        Ok(format!("Signed up {email} for {activity_name}"))
    }

    pub fn unregister(&mut self, activity_name: &str, email: &str) -> Result<String, AppError> {
        let activity = self.checked_activity(activity_name, email)?;

        let position = activity
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or(AppError::NotRegistered)?;

        activity.participants.remove(position);

        Ok(format!("Unregistered {email} from {activity_name}"))
    }

    fn checked_activity(
        &mut self,
        activity_name: &str,
        email: &str,
    ) -> Result<&mut Activity, AppError> {
        let activity = self
            .activities
            .get_mut(activity_name)
            .ok_or(AppError::ActivityNotFound)?;

        validate_email(email, &self.school_domain)?;

        Ok(activity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_SCHOOL_DOMAIN;

    const CHESS: &str = "Chess Club";
    const NEW_STUDENT: &str = "testuser@mergington.edu";

    fn registry() -> Registry {
        Registry::seeded(DEFAULT_SCHOOL_DOMAIN, false)
    }

    fn roster(registry: &Registry, name: &str) -> Vec<String> {
        registry.get(name).unwrap().participants.clone()
    }

    #[test]
    fn test_signup_appends_in_last_position() {
        let mut registry = registry();

        for name in registry.list().keys().cloned().collect::<Vec<_>>() {
            let message = registry.signup(&name, NEW_STUDENT).unwrap();

            assert_eq!(message, format!("Signed up {NEW_STUDENT} for {name}"));
            assert_eq!(roster(&registry, &name).last().map(String::as_str), Some(NEW_STUDENT));
        }
    }

    #[test]
    fn test_signup_wrong_domain_leaves_registry_unchanged() {
        let mut registry = registry();
        let before = registry.list().clone();

        let err = registry.signup(CHESS, "baduser@example.com").unwrap_err();

        assert_eq!(err.to_string(), "Email must be a mergington.edu address");
        assert_eq!(registry.list(), &before);
    }

    #[test]
    fn test_signup_unknown_activity() {
        let mut registry = registry();
        let before = registry.list().clone();

        assert_eq!(
            registry.signup("Underwater Basket Weaving", NEW_STUDENT),
            Err(AppError::ActivityNotFound)
        );
        assert_eq!(registry.list(), &before);
    }

    #[test]
    fn test_unknown_activity_reported_before_bad_email() {
        let mut registry = registry();

        assert_eq!(
            registry.signup("Nope", "baduser@example.com"),
            Err(AppError::ActivityNotFound)
        );
        assert_eq!(
            registry.unregister("Nope", "baduser@example.com"),
            Err(AppError::ActivityNotFound)
        );
    }

    #[test]
    fn test_duplicate_signup_rejected() {
        let mut registry = registry();

        registry.signup(CHESS, NEW_STUDENT).unwrap();
        let after_first = roster(&registry, CHESS);

        assert_eq!(
            registry.signup(CHESS, NEW_STUDENT),
            Err(AppError::AlreadyRegistered)
        );
        assert_eq!(roster(&registry, CHESS), after_first);
    }

    #[test]
    fn test_signup_then_unregister_restores_roster() {
        let mut registry = registry();
        let before = roster(&registry, CHESS);

        registry.signup(CHESS, NEW_STUDENT).unwrap();
        let message = registry.unregister(CHESS, NEW_STUDENT).unwrap();

        assert_eq!(message, format!("Unregistered {NEW_STUDENT} from {CHESS}"));
        assert_eq!(roster(&registry, CHESS), before);
    }

    #[test]
    fn test_unregister_keeps_remaining_order() {
        let mut registry = registry();

        registry.signup(CHESS, "a@mergington.edu").unwrap();
        registry.signup(CHESS, "b@mergington.edu").unwrap();
        registry.unregister(CHESS, "daniel@mergington.edu").unwrap();

        assert_eq!(
            roster(&registry, CHESS),
            vec!["michael@mergington.edu", "a@mergington.edu", "b@mergington.edu"]
        );
    }

    #[test]
    fn test_unregister_wrong_domain_leaves_registry_unchanged() {
        let mut registry = registry();
        let before = registry.list().clone();

        assert!(matches!(
            registry.unregister(CHESS, "baduser@example.com"),
            Err(AppError::InvalidEmail { .. })
        ));
        assert_eq!(registry.list(), &before);
    }

    #[test]
    fn test_signup_rejects_markup_in_local_part() {
        let mut registry = registry();
        let before = registry.list().clone();

        for email in [
            "<img src=x onerror=alert(1)>@mergington.edu",
            "a b\"c@mergington.edu",
        ] {
            assert!(matches!(
                registry.signup(CHESS, email),
                Err(AppError::InvalidEmail { .. })
            ));
        }
        assert_eq!(registry.list(), &before);
    }

    #[test]
    fn test_unregister_non_participant() {
        let mut registry = registry();
        let before = registry.list().clone();

        assert_eq!(
            registry.unregister(CHESS, NEW_STUDENT),
            Err(AppError::NotRegistered)
        );
        assert_eq!(registry.list(), &before);
    }

    #[test]
    fn test_capacity_ignored_by_default() {
        let mut registry = registry();

        for i in 0..20 {
            registry.signup(CHESS, &format!("student{i}@mergington.edu")).unwrap();
        }

        assert_eq!(roster(&registry, CHESS).len(), 22);
    }

    #[test]
    fn test_capacity_enforced_when_enabled() {
        let mut registry = Registry::seeded(DEFAULT_SCHOOL_DOMAIN, true);

        // Chess Club seats 12 and starts with 2.
        for i in 0..10 {
            registry.signup(CHESS, &format!("student{i}@mergington.edu")).unwrap();
        }

        assert_eq!(
            registry.signup(CHESS, NEW_STUDENT),
            Err(AppError::ActivityFull)
        );
        assert_eq!(
            registry.signup(CHESS, "student0@mergington.edu"),
            Err(AppError::AlreadyRegistered)
        );

        registry.unregister(CHESS, "student0@mergington.edu").unwrap();
        assert!(registry.signup(CHESS, NEW_STUDENT).is_ok());
    }
}
