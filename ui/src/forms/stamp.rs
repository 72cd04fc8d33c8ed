//! Timestamps written into a form at the moment it is submitted.

use time::OffsetDateTime;

use super::{CSRF_FIELD, ROUND_ENDS, ROUND_STARTS, TIME_ELAPSED};
use crate::core::{format, timing};

/// One submitted value. `id` names the hidden input on the page, if any;
/// `name` is the POST field the server reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub id: Option<&'static str>,
    pub name: &'static str,
    pub value: String,
}

impl FormField {
    pub fn hidden((id, name): (&'static str, &'static str), value: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            name,
            value: value.into(),
        }
    }

    pub fn unbound(name: &'static str, value: impl Into<String>) -> Self {
        Self {
            id: None,
            name,
            value: value.into(),
        }
    }
}

/// Start/end of the decision window for one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundStamp {
    pub started_at: OffsetDateTime,
    pub ended_at: OffsetDateTime,
}

impl RoundStamp {
    /// Close the window now.
    pub fn capture(started_at: OffsetDateTime) -> Self {
        Self::between(started_at, timing::now())
    }

    pub fn between(started_at: OffsetDateTime, ended_at: OffsetDateTime) -> Self {
        Self {
            started_at,
            ended_at,
        }
    }

    pub fn elapsed(&self) -> timing::TimeInterval {
        timing::compute_interval(self.started_at, self.ended_at)
    }

    pub fn elapsed_label(&self) -> String {
        format::format_elapsed(&self.elapsed())
    }

    /// Hidden fields for the start, end and elapsed time, plus the CSRF token
    /// when the page was given one.
    pub fn fields(&self, csrf_token: Option<&str>) -> Vec<FormField> {
        let mut fields = vec![
            FormField::hidden(ROUND_STARTS, format::iso_timestamp(self.started_at)),
            FormField::hidden(ROUND_ENDS, format::iso_timestamp(self.ended_at)),
            FormField::hidden(TIME_ELAPSED, self.elapsed_label()),
        ];
        if let Some(token) = csrf_token {
            fields.push(FormField::unbound(CSRF_FIELD, token));
        }
        fields
    }
}
