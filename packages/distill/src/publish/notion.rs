//! Notion publisher.
//!
//! For a meeting bundle it creates:
//!
//! ```text
//! Parent Page
//!   └── Meeting: <title>      (summary page)
//!         └── Tasks: <title>  (tasks database, one row per record)
//! ```
//!
//! Video bundles get an insights page (with a bookmark back to the
//! source) and the same child database when tasks accompany them.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::{info, warn};

use crate::config::SecretString;
use crate::error::{DistillError, Result};
use crate::publish::blocks;
use crate::traits::publisher::Publisher;
use crate::types::{
    bundle::{Artifact, ResultBundle},
    insights::VideoInsights,
    summary::MeetingSummary,
    task::{TaskList, TaskRecord, UNSET_DUE_DATE},
};

const NOTION_BASE_URL: &str = "https://api.notion.com/v1";
const NOTION_VERSION: &str = "2022-06-28";

/// Publish calls are small writes; a hung call should fail fast.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Normalize a page reference to a bare id.
///
/// Accepts full workspace URLs or raw ids; strips the path, query, and
/// dashes, keeping the trailing 32 hex characters.
pub fn clean_page_id(page_ref: &str) -> String {
    let mut id = page_ref;
    if id.contains('/') {
        id = id.rsplit('/').next().unwrap_or(id);
    }
    let id = id.split('?').next().unwrap_or(id);
    let undashed: Vec<char> = id.chars().filter(|c| *c != '-').collect();
    let skip = undashed.len().saturating_sub(32);
    undashed[skip..].iter().collect()
}

/// Notion-backed [`Publisher`].
pub struct NotionPublisher {
    client: Client,
    token: SecretString,
    base_url: String,
}

impl NotionPublisher {
    pub fn new(token: SecretString) -> Self {
        Self {
            client: Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_default(),
            token,
            base_url: NOTION_BASE_URL.to_string(),
        }
    }

    /// Override the base URL (tests).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    async fn post(&self, path: &str, payload: &Value) -> Result<Value> {
        let response = self
            .client
            .post(format!("{}/{path}", self.base_url))
            .header("Authorization", format!("Bearer {}", self.token.expose()))
            .header("Notion-Version", NOTION_VERSION)
            .json(payload)
            .send()
            .await
            .map_err(|e| DistillError::publish(e.to_string()))?;

        let status = response.status();
        let body: Value = response
            .json()
            .await
            .map_err(|e| DistillError::publish(e.to_string()))?;

        if !status.is_success() {
            let message = body["message"].as_str().unwrap_or("unknown error");
            return Err(DistillError::publish(format!("{status}: {message}")));
        }
        Ok(body)
    }

    async fn create_page(&self, payload: &Value) -> Result<String> {
        let body = self.post("pages", payload).await?;
        body["id"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| DistillError::publish("page created without an id"))
    }

    /// Create a tasks database inside a page, returning its id.
    async fn create_tasks_database(&self, title: &str, parent_page_id: &str) -> Result<String> {
        let payload = json!({
            "parent": {"type": "page_id", "page_id": parent_page_id},
            "icon": {"type": "emoji", "emoji": "✅"},
            "title": [{"type": "text", "text": {"content": format!("Tasks: {title}")}}],
            "properties": {
                "Task":     {"title": {}},
                "Assignee": {"rich_text": {}},
                "Due Date": {"date": {}},
                "Priority": {
                    "select": {
                        "options": [
                            {"name": "High",   "color": "red"},
                            {"name": "Medium", "color": "yellow"},
                            {"name": "Low",    "color": "green"},
                        ]
                    }
                },
                "Status": {
                    "select": {
                        "options": [
                            {"name": "Not Started", "color": "gray"},
                            {"name": "In Progress", "color": "blue"},
                            {"name": "Done",        "color": "green"},
                        ]
                    }
                }
            }
        });

        let body = self.post("databases", &payload).await?;
        body["id"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| DistillError::publish("database created without an id"))
    }

    /// Push each task as a row. Row failures are counted and logged but
    /// do not abort the remaining rows.
    async fn push_tasks(&self, tasks: &TaskList, database_id: &str) -> Result<usize> {
        let mut pushed = 0;
        for record in &tasks.items {
            match self.create_page(&task_row_payload(record, database_id)).await {
                Ok(_) => pushed += 1,
                Err(e) => warn!(task = %record.task, error = %e, "task row failed"),
            }
        }
        info!(pushed, total = tasks.len(), "task rows published");
        Ok(pushed)
    }

    async fn publish_meeting(
        &self,
        summary: &MeetingSummary,
        tasks: Option<&TaskList>,
        parent: &str,
    ) -> Result<String> {
        let page_id = self
            .create_page(&meeting_page_payload(summary, &clean_page_id(parent)))
            .await?;
        info!(title = %summary.title, "meeting notes page created");

        if let Some(tasks) = tasks.filter(|t| !t.is_empty()) {
            let db_id = self.create_tasks_database(&summary.title, &page_id).await?;
            self.push_tasks(tasks, &db_id).await?;
        }
        Ok(page_id)
    }

    async fn publish_video(
        &self,
        insights: &VideoInsights,
        source: &str,
        tasks: Option<&TaskList>,
        parent: &str,
    ) -> Result<String> {
        let page_id = self
            .create_page(&video_page_payload(insights, source, &clean_page_id(parent)))
            .await?;
        info!(title = %insights.title, "video notes page created");

        if let Some(tasks) = tasks.filter(|t| !t.is_empty()) {
            let db_id = self.create_tasks_database(&insights.title, &page_id).await?;
            self.push_tasks(tasks, &db_id).await?;
        }
        Ok(page_id)
    }
}

#[async_trait]
impl Publisher for NotionPublisher {
    async fn publish(&self, bundle: &ResultBundle, parent: &str) -> Result<String> {
        match &bundle.artifact {
            Artifact::Meeting(summary) => {
                self.publish_meeting(summary, bundle.tasks.as_ref(), parent).await
            }
            Artifact::Video(insights) => {
                self.publish_video(insights, &bundle.source, bundle.tasks.as_ref(), parent)
                    .await
            }
        }
    }
}

/// Page payload for a meeting summary.
fn meeting_page_payload(summary: &MeetingSummary, parent_page_id: &str) -> Value {
    let mut children = vec![
        blocks::callout(&summary.summary, "💡", "blue_background"),
        blocks::divider(),
        blocks::heading("✅ Key Decisions"),
    ];
    children.extend(summary.key_decisions.iter().map(|d| blocks::bullet(d)));
    children.push(blocks::divider());
    children.push(blocks::heading("🚀 Next Steps"));
    children.extend(summary.next_steps.iter().map(|s| blocks::bullet(s)));
    children.push(blocks::divider());
    children.push(blocks::heading("📌 Action Items ↓"));

    json!({
        "parent": {"type": "page_id", "page_id": parent_page_id},
        "icon": {"type": "emoji", "emoji": "📋"},
        "properties": {
            "title": {"title": [{"text": {"content": format!("Meeting: {}", summary.title)}}]}
        },
        "children": children
    })
}

/// Page payload for video insights.
fn video_page_payload(insights: &VideoInsights, source: &str, parent_page_id: &str) -> Value {
    let mut children = vec![
        blocks::bookmark(source),
        blocks::divider(),
        blocks::callout(&insights.summary, "🎬", "yellow_background"),
        blocks::divider(),
        blocks::heading("💡 Key Takeaways"),
    ];
    children.extend(insights.key_takeaways.iter().map(|t| blocks::bullet(t)));
    children.push(blocks::divider());
    children.push(blocks::heading("📚 Topics Covered"));
    children.extend(insights.topics_covered.iter().map(|t| blocks::bullet(t)));
    children.push(blocks::divider());
    children.push(blocks::heading("✅ Action Items"));
    children.extend(insights.action_items.iter().map(|a| blocks::bullet(a)));

    json!({
        "parent": {"type": "page_id", "page_id": parent_page_id},
        "icon": {"type": "emoji", "emoji": "🎬"},
        "properties": {
            "title": {"title": [{"text": {"content": format!("YouTube: {}", insights.title)}}]}
        },
        "children": children
    })
}

/// Row payload for one task record.
fn task_row_payload(record: &TaskRecord, database_id: &str) -> Value {
    let mut payload = json!({
        "parent": {"database_id": database_id},
        "properties": {
            "Task":     {"title": [{"text": {"content": record.task.as_str()}}]},
            "Assignee": {"rich_text": [{"text": {"content": record.assignee.as_str()}}]},
            "Priority": {"select": {"name": record.priority.as_str()}},
            "Status":   {"select": {"name": "Not Started"}},
        }
    });

    // Notion rejects a date property with a non-date literal
    if !record.due_date.is_empty() && record.due_date != UNSET_DUE_DATE {
        payload["properties"]["Due Date"] = json!({"date": {"start": record.due_date.as_str()}});
    }
    payload
}
