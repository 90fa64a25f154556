use super::deep_link::job_deep_link;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const CHANNEL_ID: &str = "job_alerts_channel";
pub const CHANNEL_NAME: &str = "Job Alerts";
pub const DEFAULT_TITLE: &str = "New Job Alert";
pub const DEFAULT_BODY: &str = "Check out new opportunities";
pub const VIEW_JOB_ACTION: &str = "View Job";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct NotificationPayload {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
}

/// Inbound push message: optional display block plus a string data map.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PushMessage {
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub notification: Option<NotificationPayload>,
    #[serde(default)]
    pub data: HashMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationAction {
    pub label: String,
    pub deep_link: String,
}

/// What gets shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobNotification {
    pub id: i64,
    pub channel: &'static str,
    pub title: String,
    pub body: String,
    pub job_id: Option<i64>,
    pub deep_link: Option<String>,
    pub actions: Vec<NotificationAction>,
}

impl PushMessage {
    /// `data.jobId` as an integer; anything unparsable counts as absent.
    pub fn job_id(&self) -> Option<i64> {
        self.data.get("jobId").and_then(|v| v.trim().parse().ok())
    }

    /// At most one notification per message: the display block wins, and a
    /// data-only message is shown only when it names a job.
    pub fn to_notification(&self) -> Option<JobNotification> {
        let job_id = self.job_id();

        let (title, body) = match &self.notification {
            Some(n) => (n.title.clone(), n.body.clone()),
            None if self.data.contains_key("jobId") => {
                (self.data.get("title").cloned(), self.data.get("body").cloned())
            }
            None => {
                tracing::debug!(from = ?self.from, "data-only message without jobId ignored");
                return None;
            }
        };

        Some(JobNotification::new(
            title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            body.unwrap_or_else(|| DEFAULT_BODY.to_string()),
            job_id,
        ))
    }
}

impl JobNotification {
    pub fn new(title: String, body: String, job_id: Option<i64>) -> Self {
        let deep_link = job_id.map(job_deep_link);
        let actions = deep_link
            .iter()
            .map(|link| NotificationAction {
                label: VIEW_JOB_ACTION.to_string(),
                deep_link: link.clone(),
            })
            .collect();

        Self {
            // the job id doubles as notification id so repeats replace each other
            id: job_id.unwrap_or_else(|| Utc::now().timestamp_millis() & i64::from(i32::MAX)),
            channel: CHANNEL_ID,
            title,
            body,
            job_id,
            deep_link,
            actions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn display_block_with_job_id_links_to_details() {
        let msg = PushMessage {
            from: Some("alerts".into()),
            notification: Some(NotificationPayload {
                title: Some("Rust job".into()),
                body: None,
            }),
            data: data(&[("jobId", "42")]),
        };

        let n = msg.to_notification().unwrap();
        assert_eq!(n.id, 42);
        assert_eq!(n.title, "Rust job");
        assert_eq!(n.body, DEFAULT_BODY);
        assert_eq!(n.deep_link.as_deref(), Some("jobfinder://job/42"));
        assert_eq!(n.actions.len(), 1);
        assert_eq!(n.actions[0].label, VIEW_JOB_ACTION);
    }

    #[test]
    fn data_only_message_needs_job_id() {
        let without = PushMessage {
            data: data(&[("title", "x")]),
            ..PushMessage::default()
        };
        assert!(without.to_notification().is_none());

        let with_bad_id = PushMessage {
            data: data(&[("jobId", "nope"), ("body", "b")]),
            ..PushMessage::default()
        };
        let n = with_bad_id.to_notification().unwrap();
        assert_eq!(n.title, DEFAULT_TITLE);
        assert_eq!(n.body, "b");
        assert_eq!(n.job_id, None);
        assert!(n.actions.is_empty());
    }

    #[test]
    fn parses_wire_json() {
        let msg: PushMessage = serde_json::from_str(
            r#"{"notification":{"title":"T","body":"B"},"data":{"jobId":"7"}}"#,
        )
        .unwrap();
        assert_eq!(msg.job_id(), Some(7));
        assert_eq!(msg.to_notification().unwrap().title, "T");
    }
}
