//! Local session state: current user, active role, worker availability,
//! notifications, saved workers and recent searches.
//!
//! Owned object, passed by reference to whatever layer needs it — there is
//! no ambient global. Mutation goes through the narrow API below; the whole
//! session round-trips through serde for the device key-value slot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use ulid::Ulid;

/// Most recent searches kept, newest first.
pub const RECENT_SEARCH_CAP: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Customer,
    Worker,
    Admin,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AvailabilityStatus {
    #[default]
    Available,
    Busy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BusyReason {
    Vacation,
    Busy,
    Personal,
    Other,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkerAvailability {
    pub status: AvailabilityStatus,
    pub busy_reason: Option<BusyReason>,
    pub busy_until: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: String,
    pub phone: String,
    pub name: String,
    pub roles: Vec<Role>,
    pub active_role: Role,
    pub referral_code: Option<String>,
    pub availability: Option<WorkerAvailability>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub body: String,
    pub kind: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("no user is logged in")]
    NotLoggedIn,
    #[error("role not granted to this user: {0:?}")]
    RoleNotGranted(Role),
    #[error("availability applies only to users with the worker role")]
    NotAWorker,
    #[error("notification not found: {0}")]
    NotificationNotFound(String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    user: Option<UserAccount>,
    notifications: Vec<Notification>,
    saved_workers: Vec<String>,
    recent_searches: Vec<String>,
}

impl Session {
    /// Fresh session with the product's welcome notification.
    pub fn new() -> Self {
        let mut session = Self::default();
        session.push_notification(
            "Welcome to ConnectO!",
            "Find skilled workers near you in seconds.",
            "WELCOME",
        );
        session
    }

    pub fn user(&self) -> Option<&UserAccount> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn active_role(&self) -> Option<Role> {
        self.user.as_ref().map(|user| user.active_role)
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.user
            .as_ref()
            .map(|user| user.roles.contains(&role))
            .unwrap_or(false)
    }

    pub fn login(&mut self, user: UserAccount) {
        tracing::info!(user_id = %user.id, role = ?user.active_role, "session login");
        self.user = Some(user);
    }

    /// Drops the authenticated user. Saved workers, notifications and
    /// recent searches belong to the device, not the account, and survive.
    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            tracing::info!(user_id = %user.id, "session logout");
        }
    }

    pub fn switch_role(&mut self, role: Role) -> Result<(), SessionError> {
        let user = self.user.as_mut().ok_or(SessionError::NotLoggedIn)?;
        if !user.roles.contains(&role) {
            return Err(SessionError::RoleNotGranted(role));
        }
        user.active_role = role;
        Ok(())
    }

    /// Flips between customer and worker when both roles are granted.
    pub fn toggle_role(&mut self) -> Result<(), SessionError> {
        let active = self.active_role().ok_or(SessionError::NotLoggedIn)?;
        let target = match active {
            Role::Customer => Role::Worker,
            Role::Worker => Role::Customer,
            Role::Admin => return Ok(()),
        };
        self.switch_role(target)
    }

    pub fn set_availability(
        &mut self,
        status: AvailabilityStatus,
        reason: Option<BusyReason>,
        busy_until: Option<DateTime<Utc>>,
    ) -> Result<(), SessionError> {
        if !self.has_role(Role::Worker) {
            return Err(if self.user.is_none() {
                SessionError::NotLoggedIn
            } else {
                SessionError::NotAWorker
            });
        }

        let busy = status == AvailabilityStatus::Busy;
        let availability = WorkerAvailability {
            status,
            busy_reason: if busy { reason } else { None },
            busy_until: if busy { busy_until } else { None },
        };

        // has_role above guarantees the user exists.
        if let Some(user) = self.user.as_mut() {
            user.availability = Some(availability);
        }
        Ok(())
    }

    pub fn toggle_availability(&mut self) -> Result<(), SessionError> {
        let current = self
            .user
            .as_ref()
            .and_then(|user| user.availability.as_ref())
            .map(|a| a.status)
            .unwrap_or_default();
        let next = match current {
            AvailabilityStatus::Available => AvailabilityStatus::Busy,
            AvailabilityStatus::Busy => AvailabilityStatus::Available,
        };
        self.set_availability(next, None, None)
    }

    /// Non-workers are always "available"; workers default to available
    /// until they set themselves busy.
    pub fn is_worker_available(&self) -> bool {
        if !self.has_role(Role::Worker) {
            return true;
        }
        self.user
            .as_ref()
            .and_then(|user| user.availability.as_ref())
            .map(|a| a.status == AvailabilityStatus::Available)
            .unwrap_or(true)
    }

    /// Records a query, newest first, deduplicated, capped at
    /// [`RECENT_SEARCH_CAP`]. Blank queries are ignored.
    pub fn add_recent_search(&mut self, query: &str) {
        let query = query.trim();
        if query.is_empty() {
            return;
        }
        self.recent_searches.retain(|existing| existing != query);
        self.recent_searches.insert(0, query.to_string());
        self.recent_searches.truncate(RECENT_SEARCH_CAP);
    }

    pub fn recent_searches(&self) -> &[String] {
        &self.recent_searches
    }

    /// Saves the worker, or removes it when already saved. Returns whether
    /// the worker is saved afterwards.
    pub fn toggle_saved_worker(&mut self, worker_id: &str) -> bool {
        if let Some(pos) = self.saved_workers.iter().position(|id| id == worker_id) {
            self.saved_workers.remove(pos);
            false
        } else {
            self.saved_workers.push(worker_id.to_string());
            true
        }
    }

    pub fn is_worker_saved(&self, worker_id: &str) -> bool {
        self.saved_workers.iter().any(|id| id == worker_id)
    }

    pub fn saved_workers(&self) -> &[String] {
        &self.saved_workers
    }

    /// Prepends a notification and returns its generated id.
    pub fn push_notification(&mut self, title: &str, body: &str, kind: &str) -> String {
        let id = Ulid::new().to_string();
        self.notifications.insert(
            0,
            Notification {
                id: id.clone(),
                title: title.to_string(),
                body: body.to_string(),
                kind: kind.to_string(),
                is_read: false,
                created_at: Utc::now(),
            },
        );
        id
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.is_read).count()
    }

    pub fn mark_notification_read(&mut self, id: &str) -> Result<(), SessionError> {
        let notification = self
            .notifications
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| SessionError::NotificationNotFound(id.to_string()))?;
        notification.is_read = true;
        Ok(())
    }

    pub fn mark_all_notifications_read(&mut self) {
        for notification in &mut self.notifications {
            notification.is_read = true;
        }
    }

    /// Serializes the whole session for the device key-value slot.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }
}
