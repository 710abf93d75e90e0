//! Workout session entity.
//!
//! A session is a named workout on a calendar date. Its id is assigned by
//! storage on insert, so an unsaved session is a separate type.

use chrono::NaiveDate;

use crate::domain::foundation::SessionId;

/// A session that has not been persisted yet.
///
/// Name and date are stored as given; nothing is trimmed or checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSession {
    pub name: String,
    pub date: NaiveDate,
}

impl NewSession {
    pub fn new(name: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            date,
        }
    }
}

/// A persisted workout session.
///
/// The table puts no constraints on `name` or `date`, so rows written
/// outside this service may hold NULL in either column.
///
/// # Invariants
///
/// - `id` was assigned by storage and never changes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    id: SessionId,
    name: Option<String>,
    date: Option<NaiveDate>,
}

impl Session {
    /// Rebuild a session from a stored row.
    pub fn reconstitute(id: SessionId, name: Option<String>, date: Option<NaiveDate>) -> Self {
        Self { id, name, date }
    }

    /// Attach a freshly assigned id to an unsaved session.
    pub fn from_new(id: SessionId, new: NewSession) -> Self {
        Self {
            id,
            name: Some(new.name),
            date: Some(new.date),
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leg_day() -> NewSession {
        NewSession::new("Leg Day", NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
    }

    #[test]
    fn from_new_keeps_name_and_date() {
        let session = Session::from_new(SessionId::from_i64(7), leg_day());
        assert_eq!(session.id(), SessionId::from_i64(7));
        assert_eq!(session.name(), Some("Leg Day"));
        assert_eq!(session.date(), NaiveDate::from_ymd_opt(2024, 1, 1));
    }

    #[test]
    fn names_are_stored_verbatim() {
        let new = NewSession::new("  ", NaiveDate::from_ymd_opt(1999, 12, 31).unwrap());
        let session = Session::from_new(SessionId::from_i64(1), new);
        assert_eq!(session.name(), Some("  "));
    }

    #[test]
    fn reconstitute_accepts_empty_columns() {
        let session = Session::reconstitute(SessionId::from_i64(3), None, None);
        assert_eq!(session.name(), None);
        assert_eq!(session.date(), None);
    }
}
