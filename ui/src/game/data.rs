use dioxus::logger::tracing::{info, warn};
use serde::{Deserialize, Serialize};

use crate::core::{error::UiError, format::format_optional};

/// Columns of the session table, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Id,
    PlayerId,
    GroupId,
    Round,
    Action,
    PrivateAccount,
    PublicAccount,
    PredictionQuestion,
    TimeElapsed,
    TimeQuestionElapsed,
    SessionId,
}

impl Column {
    pub const ALL: [Column; 11] = [
        Column::Id,
        Column::PlayerId,
        Column::GroupId,
        Column::Round,
        Column::Action,
        Column::PrivateAccount,
        Column::PublicAccount,
        Column::PredictionQuestion,
        Column::TimeElapsed,
        Column::TimeQuestionElapsed,
        Column::SessionId,
    ];

    /// Key in the JSON rows, also used as the header label.
    pub fn key(&self) -> &'static str {
        match self {
            Column::Id => "id",
            Column::PlayerId => "player_id",
            Column::GroupId => "group_id",
            Column::Round => "round",
            Column::Action => "action",
            Column::PrivateAccount => "private_account",
            Column::PublicAccount => "public_account",
            Column::PredictionQuestion => "prediction_question",
            Column::TimeElapsed => "time_elapsed",
            Column::TimeQuestionElapsed => "time_question_elapsed",
            Column::SessionId => "session_id",
        }
    }
}

/// One player's record for one round, as returned by the monitor endpoint.
/// Extra keys in the payload (opponent, raw timestamps) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameDataRow {
    pub id: i64,
    pub player_id: i64,
    #[serde(default)]
    pub group_id: Option<i64>,
    pub round: i64,
    #[serde(default)]
    pub action: Option<i64>,
    #[serde(default)]
    pub private_account: Option<i64>,
    #[serde(default)]
    pub public_account: Option<i64>,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub prediction_question: String,
    #[serde(default)]
    pub time_elapsed: Option<String>,
    #[serde(default)]
    pub time_question_elapsed: Option<String>,
    pub session_id: i64,
}

fn empty_if_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl GameDataRow {
    /// Text shown in the table cell. Rendered as text, never as markup.
    pub fn cell(&self, column: Column) -> String {
        match column {
            Column::Id => self.id.to_string(),
            Column::PlayerId => self.player_id.to_string(),
            Column::GroupId => format_optional(self.group_id),
            Column::Round => self.round.to_string(),
            Column::Action => format_optional(self.action),
            Column::PrivateAccount => format_optional(self.private_account),
            Column::PublicAccount => format_optional(self.public_account),
            Column::PredictionQuestion => self.prediction_question.clone(),
            Column::TimeElapsed => self.time_elapsed.clone().unwrap_or_default(),
            Column::TimeQuestionElapsed => self.time_question_elapsed.clone().unwrap_or_default(),
            Column::SessionId => self.session_id.to_string(),
        }
    }

    /// Numeric sort key. Durations (`H:M:S[.f]`) count in seconds; text is
    /// parsed as a number. `None` when the value is missing or not numeric.
    pub fn numeric(&self, column: Column) -> Option<f64> {
        let int = |v: i64| Some(v as f64);
        match column {
            Column::Id => int(self.id),
            Column::PlayerId => int(self.player_id),
            Column::GroupId => self.group_id.and_then(int),
            Column::Round => int(self.round),
            Column::Action => self.action.and_then(int),
            Column::PrivateAccount => self.private_account.and_then(int),
            Column::PublicAccount => self.public_account.and_then(int),
            Column::PredictionQuestion => parse_number(&self.prediction_question),
            Column::TimeElapsed => self.time_elapsed.as_deref().and_then(parse_duration_secs),
            Column::TimeQuestionElapsed => self
                .time_question_elapsed
                .as_deref()
                .and_then(parse_duration_secs),
            Column::SessionId => int(self.session_id),
        }
    }
}

fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn parse_duration_secs(raw: &str) -> Option<f64> {
    let mut parts = raw.trim().split(':');
    let (h, m, s) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }
    let hours: u32 = h.parse().ok()?;
    let minutes: u32 = m.parse().ok()?;
    let seconds = parse_number(s)?;
    Some(f64::from(hours) * 3600.0 + f64::from(minutes) * 60.0 + seconds)
}

/// Body of the monitor endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GamePayload {
    pub game_data: Vec<GameDataRow>,
}

impl GamePayload {
    pub fn from_json(raw: &str) -> Result<Self, UiError> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// `GET url` and decode `{ "game_data": [...] }`.
pub async fn fetch_game_data(url: &str) -> Result<Vec<GameDataRow>, UiError> {
    info!(url, "fetching session game data");
    let response = reqwest::get(url).await.map_err(|err| UiError::http(url, err))?;

    let status = response.status();
    if !status.is_success() {
        warn!(url, %status, "session data request rejected");
        return Err(UiError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response.text().await.map_err(|err| UiError::http(url, err))?;
    let payload = GamePayload::from_json(&body).inspect_err(|err| {
        warn!(url, %err, "session data could not be decoded");
    })?;
    info!(rows = payload.game_data.len(), "session game data loaded");
    Ok(payload.game_data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_django_values_rows_and_ignores_extra_keys() {
        let body = json!({
            "game_data": [{
                "id": 7,
                "player_id": 3,
                "session_id": 1,
                "opponent_id": 4,
                "group_id": 2,
                "round": 5,
                "action": 4,
                "private_account": 20,
                "public_account": 60,
                "time_round_start": "2017-01-10T12:00:00Z",
                "time_round_ends": "2017-01-10T12:00:41Z",
                "time_elapsed": "00:00:41.120000",
                "prediction_question": "55",
                "time_question_start": null,
                "time_question_end": null,
                "time_question_elapsed": null
            }]
        })
        .to_string();

        let payload = GamePayload::from_json(&body).unwrap();
        let row = &payload.game_data[0];
        assert_eq!(row.player_id, 3);
        assert_eq!(row.action, Some(4));
        assert_eq!(row.time_question_elapsed, None);
        assert_eq!(row.cell(Column::TimeElapsed), "00:00:41.120000");
        assert_eq!(row.numeric(Column::TimeElapsed), Some(41.12));
        assert_eq!(row.numeric(Column::PredictionQuestion), Some(55.0));
    }

    #[test]
    fn nullable_fields_render_empty() {
        let body = json!({
            "game_data": [{
                "id": 1, "player_id": 1, "session_id": 1, "round": 1,
                "group_id": null, "action": null, "prediction_question": null
            }]
        })
        .to_string();
        let row = &GamePayload::from_json(&body).unwrap().game_data[0];
        assert_eq!(row.cell(Column::Action), "");
        assert_eq!(row.cell(Column::GroupId), "");
        assert_eq!(row.cell(Column::PredictionQuestion), "");
        assert_eq!(row.numeric(Column::Action), None);
        assert_eq!(row.numeric(Column::PredictionQuestion), None);
    }

    #[test]
    fn wrong_shapes_are_rejected() {
        for body in [
            r#"{}"#,
            r#"{ "game_data": {} }"#,
            r#"{ "game_data": [{ "id": "x", "player_id": 1, "session_id": 1, "round": 1 }] }"#,
            "<html>500</html>",
        ] {
            assert!(matches!(GamePayload::from_json(body), Err(UiError::Decode(_))), "{body}");
        }
    }

    #[test]
    fn empty_game_data_is_fine() {
        let payload = GamePayload::from_json(r#"{ "game_data": [] }"#).unwrap();
        assert!(payload.game_data.is_empty());
    }

    #[test]
    fn columns_follow_the_fixed_order() {
        let keys: Vec<_> = Column::ALL.iter().map(Column::key).collect();
        assert_eq!(
            keys,
            [
                "id", "player_id", "group_id", "round", "action", "private_account",
                "public_account", "prediction_question", "time_elapsed",
                "time_question_elapsed", "session_id",
            ]
        );
    }

    #[test]
    fn durations_need_three_parts() {
        assert_eq!(parse_duration_secs("1:02:03"), Some(3723.0));
        assert_eq!(parse_duration_secs("0:1:5.5"), Some(65.5));
        assert_eq!(parse_duration_secs("12:30"), None);
        assert_eq!(parse_duration_secs("a:b:c"), None);
    }
}
