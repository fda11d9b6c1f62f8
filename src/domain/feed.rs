use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

/// Entry discriminator for an activity group.
pub const ACTIVITY_GROUP: i64 = 7;
/// Activity discriminator for a finished game.
pub const COMPLETED_GAME: i64 = 1;

pub const STANDARD_MODE: &str = "Standard";

/// One page of the private feed, newest entries first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedPage {
    #[serde(deserialize_with = "drop_malformed_entries")]
    pub entries: Vec<FeedEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination_token: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeedEntry {
    #[serde(rename = "type", default)]
    pub kind: i64,
    /// JSON text holding one activity or an array of them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,
    /// ISO-8601 text or epoch milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<Value>,
}

/// Entries that do not have the entry shape are dropped so one bad entry
/// cannot fail the whole page.
fn drop_malformed_entries<'de, D>(deserializer: D) -> Result<Vec<FeedEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<Value>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .filter_map(|value| match serde_json::from_value(value) {
            Ok(entry) => Some(entry),
            Err(e) => {
                debug!("Dropping malformed feed entry: {}", e);
                None
            }
        })
        .collect())
}

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("entry has no payload")]
    MissingPayload,
    #[error("payload is not a JSON string")]
    NotText,
    #[error("payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameDetails {
    pub game_mode: Option<String>,
    pub map_slug: Option<String>,
    pub map_name: Option<String>,
}

impl GameDetails {
    fn from_body(body: &Value) -> Self {
        let field = |name: &str| body.get(name).and_then(Value::as_str).map(str::to_owned);
        Self {
            game_mode: field("gameMode"),
            map_slug: field("mapSlug"),
            map_name: field("mapName"),
        }
    }

    /// Slug and name of a standard-mode game that names its map.
    pub fn countable(&self) -> Option<(&str, &str)> {
        if self.game_mode.as_deref() != Some(STANDARD_MODE) {
            return None;
        }
        let slug = self.map_slug.as_deref().filter(|s| !s.is_empty())?;
        let name = self.map_name.as_deref().filter(|s| !s.is_empty())?;
        Some((slug, name))
    }
}

/// A decoded activity inside an activity group.
#[derive(Debug, Clone, PartialEq)]
pub enum Activity {
    CompletedGame {
        time: Option<Value>,
        game: GameDetails,
    },
    Ignored,
}

impl Activity {
    fn from_value(value: &Value) -> Self {
        let Some(object) = value.as_object() else {
            return Activity::Ignored;
        };
        if object.get("type").and_then(Value::as_i64) != Some(COMPLETED_GAME) {
            return Activity::Ignored;
        }
        let Some(body) = object.get("payload").filter(|body| is_truthy(body)) else {
            return Activity::Ignored;
        };

        Activity::CompletedGame {
            time: object.get("time").cloned(),
            game: GameDetails::from_body(body),
        }
    }
}

impl FeedEntry {
    /// Decodes the payload text and fans it out into activities, in order.
    pub fn activities(&self) -> Result<Vec<Activity>, DecodeError> {
        let text = match &self.payload {
            None | Some(Value::Null) => return Err(DecodeError::MissingPayload),
            Some(Value::String(text)) => text,
            Some(_) => return Err(DecodeError::NotText),
        };

        Ok(match serde_json::from_str::<Value>(text)? {
            Value::Array(items) => items.iter().map(Activity::from_value).collect(),
            single => vec![Activity::from_value(&single)],
        })
    }
}

pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
