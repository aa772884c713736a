//! Catalogue of the console's table screens.
//!
//! Each screen declares once which backend collection it reads, which fields
//! free-text search looks at, which fields may be filtered on, which field
//! feeds its stats cards and which columns a CSV export contains.
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown screen: {0}")]
pub struct UnknownScreen(pub String);

/// Table screens available to staff.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Screen {
    Members,
    MemberStatus,
    Tasks,
    Bookings,
    Attendance,
    Lockers,
    Announcements,
    Rewards,
    WebhookLogs,
    AuditLogs,
}

/// Static description of how a screen queries its collection.
#[derive(Debug, PartialEq, Eq)]
pub struct ScreenSpec {
    pub slug: &'static str,
    pub title: &'static str,
    /// Backend path returning the screen's collection as a JSON array.
    pub endpoint: &'static str,
    pub searchable_fields: &'static [&'static str],
    pub filterable_fields: &'static [&'static str],
    /// Field summarised by the stats cards over the whole collection.
    pub stats_field: &'static str,
    pub export_columns: &'static [&'static str],
}

impl ScreenSpec {
    pub fn is_filterable(&self, field: &str) -> bool {
        self.filterable_fields.contains(&field)
    }
}

static MEMBERS: ScreenSpec = ScreenSpec {
    slug: "members",
    title: "Member Lookup",
    endpoint: "/staff/members",
    searchable_fields: &["name", "id", "phone"],
    filterable_fields: &["status", "plan"],
    stats_field: "status",
    export_columns: &["id", "name", "phone", "plan", "status", "expiry"],
};

static MEMBER_STATUS: ScreenSpec = ScreenSpec {
    slug: "member-status",
    title: "Member Status",
    endpoint: "/staff/members",
    searchable_fields: &["name", "id"],
    filterable_fields: &["status"],
    stats_field: "status",
    export_columns: &["id", "name", "plan", "status", "expiry"],
};

static TASKS: ScreenSpec = ScreenSpec {
    slug: "tasks",
    title: "Tasks",
    endpoint: "/staff/tasks",
    searchable_fields: &["title", "assignedBy"],
    filterable_fields: &["status", "priority"],
    stats_field: "status",
    export_columns: &["id", "title", "assignedBy", "priority", "due", "status"],
};

static BOOKINGS: ScreenSpec = ScreenSpec {
    slug: "bookings",
    title: "Booking Report",
    endpoint: "/staff/reports/bookings",
    searchable_fields: &["member", "trainer", "type"],
    filterable_fields: &["type", "status"],
    stats_field: "status",
    export_columns: &["id", "member", "type", "trainer", "time", "status"],
};

static ATTENDANCE: ScreenSpec = ScreenSpec {
    slug: "attendance",
    title: "Daily Attendance",
    endpoint: "/staff/reports/attendance",
    searchable_fields: &["member", "id"],
    filterable_fields: &["status"],
    stats_field: "status",
    export_columns: &["id", "member", "date", "checkIn", "checkOut", "status"],
};

static LOCKERS: ScreenSpec = ScreenSpec {
    slug: "lockers",
    title: "Lockers",
    endpoint: "/staff/lockers",
    searchable_fields: &["number", "member"],
    filterable_fields: &["status"],
    stats_field: "status",
    export_columns: &["number", "member", "status", "assignedAt"],
};

static ANNOUNCEMENTS: ScreenSpec = ScreenSpec {
    slug: "announcements",
    title: "Announcements",
    endpoint: "/staff/announcements",
    searchable_fields: &["title", "message"],
    filterable_fields: &["audience", "status"],
    stats_field: "status",
    export_columns: &["id", "title", "audience", "status", "publishedAt"],
};

static REWARDS: ScreenSpec = ScreenSpec {
    slug: "rewards",
    title: "Rewards",
    endpoint: "/staff/rewards",
    searchable_fields: &["name", "description"],
    filterable_fields: &["type", "status"],
    stats_field: "type",
    export_columns: &["id", "name", "type", "points", "status"],
};

static WEBHOOK_LOGS: ScreenSpec = ScreenSpec {
    slug: "webhook-logs",
    title: "Webhook Logs",
    endpoint: "/staff/webhooks/logs",
    searchable_fields: &["event", "url", "id"],
    filterable_fields: &["status", "event"],
    stats_field: "status",
    export_columns: &["id", "event", "url", "status", "responseCode", "time"],
};

static AUDIT_LOGS: ScreenSpec = ScreenSpec {
    slug: "audit-logs",
    title: "Audit Logs",
    endpoint: "/staff/audit-logs",
    searchable_fields: &["actor", "action", "target"],
    filterable_fields: &["action"],
    stats_field: "action",
    export_columns: &["id", "actor", "action", "target", "time"],
};

impl Screen {
    pub const ALL: [Screen; 10] = [
        Screen::Members,
        Screen::MemberStatus,
        Screen::Tasks,
        Screen::Bookings,
        Screen::Attendance,
        Screen::Lockers,
        Screen::Announcements,
        Screen::Rewards,
        Screen::WebhookLogs,
        Screen::AuditLogs,
    ];

    pub fn spec(self) -> &'static ScreenSpec {
        match self {
            Screen::Members => &MEMBERS,
            Screen::MemberStatus => &MEMBER_STATUS,
            Screen::Tasks => &TASKS,
            Screen::Bookings => &BOOKINGS,
            Screen::Attendance => &ATTENDANCE,
            Screen::Lockers => &LOCKERS,
            Screen::Announcements => &ANNOUNCEMENTS,
            Screen::Rewards => &REWARDS,
            Screen::WebhookLogs => &WEBHOOK_LOGS,
            Screen::AuditLogs => &AUDIT_LOGS,
        }
    }

    pub fn slug(self) -> &'static str {
        self.spec().slug
    }
}

impl Display for Screen {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.slug())
    }
}

impl FromStr for Screen {
    type Err = UnknownScreen;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Screen::ALL
            .into_iter()
            .find(|screen| screen.slug() == s)
            .ok_or_else(|| UnknownScreen(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_round_trip_through_from_str() {
        for screen in Screen::ALL {
            assert_eq!(screen.slug().parse::<Screen>(), Ok(screen));
        }
        assert_eq!(
            "lockerz".parse::<Screen>(),
            Err(UnknownScreen("lockerz".to_string()))
        );
    }

    #[test]
    fn serde_names_match_slugs() {
        for screen in Screen::ALL {
            let encoded = serde_json::to_string(&screen).expect("serializable");
            assert_eq!(encoded, format!("\"{}\"", screen.slug()));
        }
    }

    #[test]
    fn stats_field_is_filterable_everywhere() {
        for screen in Screen::ALL {
            let spec = screen.spec();
            assert!(!spec.searchable_fields.is_empty(), "{screen}");
            assert!(spec.is_filterable(spec.stats_field), "{screen}");
        }
    }

    #[test]
    fn member_screens_share_an_endpoint() {
        assert_eq!(
            Screen::Members.spec().endpoint,
            Screen::MemberStatus.spec().endpoint
        );
        assert_eq!(Screen::Members.spec().searchable_fields, &["name", "id", "phone"]);
    }
}
