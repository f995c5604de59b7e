//! Workspace database connection: the adapter trait plus the Notion HTTP
//! backend.
//!
//! The watchlist lives in a Notion-style workspace: records are pages in a
//! database, fields are page properties, and the cover image is the page
//! cover. This module keeps the wire shape local; the rest of the crate only
//! sees `Record` and `RecordUpdate`.

use serde_json::{json, Value};

use crate::error::WorkspaceError;
use crate::mapping::{PropertyValue, RecordUpdate};
use crate::record::{Record, PROP_MEDIA_TYPE, PROP_SKIP, PROP_TITLE};

/// Connection to the destination store. Implement for the real workspace API
/// or any in-memory stand-in.
pub trait Workspace {
    /// Fetch one page of records. Pagination past the first page is not
    /// attempted; see the driver's page size note.
    fn query(&self, page_size: u32) -> Result<Vec<Record>, WorkspaceError>;

    /// Apply a partial update plus cover image to one record.
    fn update(&self, id: &str, update: &RecordUpdate) -> Result<(), WorkspaceError>;
}

const DEFAULT_BASE_URL: &str = "https://api.notion.com";
const NOTION_VERSION: &str = "2022-06-28";

pub struct NotionWorkspace {
    client: reqwest::blocking::Client,
    base_url: String,
    token: String,
    database_id: String,
}

impl NotionWorkspace {
    pub fn new(token: impl Into<String>, database_id: impl Into<String>) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, token, database_id)
    }

    /// Point the client at a different host (used by tests).
    pub fn with_base_url(
        base_url: impl Into<String>,
        token: impl Into<String>,
        database_id: impl Into<String>,
    ) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            base_url: base_url.into(),
            token: token.into(),
            database_id: database_id.into(),
        }
    }

    fn send(&self, req: reqwest::blocking::RequestBuilder) -> Result<Value, WorkspaceError> {
        let resp = req
            .bearer_auth(&self.token)
            .header("Notion-Version", NOTION_VERSION)
            .send()
            .map_err(|e| WorkspaceError::Network(e.to_string()))?;
        let status = resp.status();
        let body = resp
            .text()
            .map_err(|e| WorkspaceError::Network(e.to_string()))?;
        if !status.is_success() {
            return Err(WorkspaceError::Api {
                status: status.as_u16(),
                message: body,
            });
        }
        serde_json::from_str(&body).map_err(|e| WorkspaceError::Malformed(e.to_string()))
    }
}

impl Workspace for NotionWorkspace {
    fn query(&self, page_size: u32) -> Result<Vec<Record>, WorkspaceError> {
        let url = format!("{}/v1/databases/{}/query", self.base_url, self.database_id);
        let body = self.send(self.client.post(&url).json(&json!({ "page_size": page_size })))?;
        parse_query_response(&body)
    }

    fn update(&self, id: &str, update: &RecordUpdate) -> Result<(), WorkspaceError> {
        let url = format!("{}/v1/pages/{}", self.base_url, id);
        self.send(self.client.patch(&url).json(&update_request_body(update)))?;
        Ok(())
    }
}

/// Translate one query response into records. A row missing the skip
/// checkbox logs a warning and is kept with skip = false; the field is
/// expected on every row but its absence must not poison the batch.
pub fn parse_query_response(body: &Value) -> Result<Vec<Record>, WorkspaceError> {
    let results = body
        .get("results")
        .and_then(|r| r.as_array())
        .ok_or_else(|| WorkspaceError::Malformed("query response without results".to_string()))?;
    let mut records = Vec::new();
    for row in results {
        let id = row
            .get("id")
            .and_then(|i| i.as_str())
            .ok_or_else(|| WorkspaceError::Malformed("row without id".to_string()))?
            .to_string();
        let object = row
            .get("object")
            .and_then(|o| o.as_str())
            .unwrap_or("")
            .to_string();
        let props = row.get("properties").cloned().unwrap_or_else(|| json!({}));
        let titles = props
            .get(PROP_TITLE)
            .and_then(|t| t.get("title"))
            .and_then(|t| t.as_array())
            .map(|a| a.iter().filter_map(title_text).collect())
            .unwrap_or_default();
        let media_type = props
            .get(PROP_MEDIA_TYPE)
            .and_then(|p| p.get("select"))
            .and_then(|s| s.get("name"))
            .and_then(|n| n.as_str())
            .map(String::from);
        let skip = match props
            .get(PROP_SKIP)
            .and_then(|p| p.get("checkbox"))
            .and_then(|c| c.as_bool())
        {
            Some(b) => b,
            None => {
                tracing::warn!(record = %id, "`{}` field not found", PROP_SKIP);
                false
            }
        };
        records.push(Record {
            id,
            object,
            titles,
            media_type,
            skip,
        });
    }
    Ok(records)
}

fn title_text(element: &Value) -> Option<String> {
    element
        .get("text")
        .and_then(|t| t.get("content"))
        .and_then(|c| c.as_str())
        .or_else(|| element.get("plain_text").and_then(|p| p.as_str()))
        .map(String::from)
}

/// Notion-shaped JSON body for a page update. The cover is always present,
/// even when the URL is empty.
pub fn update_request_body(update: &RecordUpdate) -> Value {
    let mut properties = serde_json::Map::new();
    for (name, value) in &update.properties {
        let v = match value {
            PropertyValue::Text(s) => json!({ "rich_text": [{ "text": { "content": s } }] }),
            PropertyValue::MultiSelect(tags) => json!({
                "multi_select": tags.iter().map(|t| json!({ "name": t })).collect::<Vec<_>>()
            }),
            PropertyValue::Select(label) => json!({ "select": { "name": label } }),
            PropertyValue::Number(n) => json!({ "number": n }),
        };
        properties.insert(name.clone(), v);
    }
    json!({
        "properties": properties,
        "cover": { "type": "external", "external": { "url": update.cover_url } },
    })
}
