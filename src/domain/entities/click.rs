//! Click entity representing a single redirect event.

use chrono::{DateTime, Utc};

/// A click recorded when a short link resolves.
///
/// Created exactly once per successful resolution, never mutated, and
/// destroyed only when its owning Url is destroyed (cascade). Client
/// metadata is optional because headers may be missing.
#[derive(Debug, Clone, PartialEq)]
pub struct Click {
    pub id: i64,
    pub url_id: i64,
    pub created_at: DateTime<Utc>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

impl Click {
    /// Creates a new Click instance.
    pub fn new(
        id: i64,
        url_id: i64,
        created_at: DateTime<Utc>,
        ip_address: Option<String>,
        user_agent: Option<String>,
    ) -> Self {
        Self {
            id,
            url_id,
            created_at,
            ip_address,
            user_agent,
        }
    }
}

/// Input data for recording a new click event.
#[derive(Debug, Clone)]
pub struct NewClick {
    pub url_id: i64,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_click_creation_with_all_fields() {
        let now = Utc::now();
        let click = Click::new(
            1,
            42,
            now,
            Some("192.168.1.1".to_string()),
            Some("Mozilla/5.0".to_string()),
        );

        assert_eq!(click.id, 1);
        assert_eq!(click.url_id, 42);
        assert_eq!(click.created_at, now);
        assert_eq!(click.ip_address, Some("192.168.1.1".to_string()));
        assert_eq!(click.user_agent, Some("Mozilla/5.0".to_string()));
    }

    #[test]
    fn test_click_creation_minimal() {
        let click = Click::new(1, 10, Utc::now(), None, None);

        assert_eq!(click.url_id, 10);
        assert!(click.ip_address.is_none());
        assert!(click.user_agent.is_none());
    }
}
