// src/notify/alert.rs
use serde::Serialize;
use thiserror::Error;
use tracing::{error, info, warn};
use url::Url;

use crate::config::consts::{ALERT_TITLE_MAX, MAX_ALERT_CARDS};
use crate::core::sanitize::truncate_chars;
use crate::engine::types::Job;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AlertField {
    pub name: String,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AlertCard {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub fields: Vec<AlertField>,
}

/// One notification: a summary line plus at most `MAX_ALERT_CARDS` cards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Alert {
    pub summary: String,
    pub cards: Vec<AlertCard>,
    pub total: usize,
    pub overflow: usize,
}

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("webhook request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("webhook rejected the message: {0}")]
    Rejected(String),
}

/// Delivers an alert. Called at most once per cycle; no retries.
pub trait Notifier {
    fn send(&self, alert: &Alert) -> Result<(), NotifyError>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason { NoNewJobs, NoDestination }

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AlertOutcome {
    Sent { jobs: usize },
    Skipped(SkipReason),
    Failed(String),
}

impl AlertOutcome {
    pub fn was_sent(&self) -> bool {
        matches!(self, AlertOutcome::Sent { .. })
    }
}

/// "London, Leeds", or "all areas" when none are configured.
pub fn area_label<S: AsRef<str>>(areas: &[S]) -> String {
    if areas.is_empty() {
        return s!("all areas");
    }
    areas.iter().map(|a| a.as_ref()).collect::<Vec<_>>().join(", ")
}

/// Absolute URLs pass through; anything else is joined onto `origin`.
pub fn resolve_url(url: &str, origin: &str) -> String {
    if url.starts_with("http") {
        return s!(url);
    }
    Url::parse(origin)
        .and_then(|base| base.join(url))
        .map(String::from)
        .unwrap_or_else(|_| join!(origin, url))
}

fn card_for(job: &Job, origin: &str) -> AlertCard {
    let fields = [("Location", &job.location), ("Pay", &job.pay), ("Schedule", &job.schedule)]
        .into_iter()
        .filter(|(_, v)| !v.is_empty())
        .map(|(name, value)| AlertField { name: s!(name), value: value.clone() })
        .collect();

    AlertCard {
        title: truncate_chars(&job.title, ALERT_TITLE_MAX),
        url: (!job.url.is_empty()).then(|| resolve_url(&job.url, origin)),
        fields,
    }
}

/// Batch the cycle's new jobs into one alert. `None` when there is nothing new.
pub fn compose_alert<S: AsRef<str>>(jobs: &[Job], areas: &[S], origin: &str) -> Option<Alert> {
    if jobs.is_empty() {
        return None;
    }
    let overflow = jobs.len().saturating_sub(MAX_ALERT_CARDS);
    let mut summary = format!("{} job(s) found near {}", jobs.len(), area_label(areas));
    if overflow > 0 {
        summary.push_str(&format!(
            " (showing first {MAX_ALERT_CARDS}, {overflow} more not shown)"
        ));
    }

    Some(Alert {
        summary,
        cards: jobs.iter().take(MAX_ALERT_CARDS).map(|j| card_for(j, origin)).collect(),
        total: jobs.len(),
        overflow,
    })
}

/// Compose and send, unless there is nothing new or nowhere to send it.
pub fn dispatch<N: Notifier, S: AsRef<str>>(
    notifier: Option<&N>,
    jobs: &[Job],
    areas: &[S],
    origin: &str,
) -> AlertOutcome {
    let Some(alert) = compose_alert(jobs, areas, origin) else {
        return AlertOutcome::Skipped(SkipReason::NoNewJobs);
    };
    let Some(notifier) = notifier else {
        warn!("no notification destination configured, skipping alert");
        return AlertOutcome::Skipped(SkipReason::NoDestination);
    };

    match notifier.send(&alert) {
        Ok(()) => {
            info!(jobs = alert.total, "notification sent");
            AlertOutcome::Sent { jobs: alert.total }
        }
        Err(e) => {
            error!(error = %e, "failed to send notification");
            AlertOutcome::Failed(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: &str = "https://www.jobsatamazon.co.uk";

    #[test]
    fn label_joins_areas() {
        assert_eq!(area_label(&["London", "Leeds"]), "London, Leeds");
        assert_eq!(area_label(&[] as &[&str]), "all areas");
    }

    #[test]
    fn relative_urls_resolve_against_origin() {
        assert_eq!(
            resolve_url("/app#/jobDetail?jobId=JOB-UK-1", ORIGIN),
            "https://www.jobsatamazon.co.uk/app#/jobDetail?jobId=JOB-UK-1"
        );
        assert_eq!(resolve_url("jobs/7", ORIGIN), "https://www.jobsatamazon.co.uk/jobs/7");
        assert_eq!(resolve_url("https://elsewhere.test/j/1", ORIGIN), "https://elsewhere.test/j/1");
    }

    #[test]
    fn empty_fields_are_left_out() {
        let mut job = Job::new("Packer", "London");
        job.schedule = s!("Nights");
        let card = card_for(&job, ORIGIN);
        let names: Vec<&str> = card.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["Location", "Schedule"]);
        assert_eq!(card.url, None);
    }

    #[test]
    fn long_titles_are_capped() {
        let job = Job::new("x".repeat(300), "");
        assert_eq!(card_for(&job, ORIGIN).title.chars().count(), 256);
    }

    #[test]
    fn no_overflow_notice_at_or_below_cap() {
        let jobs: Vec<Job> = (0..10).map(|i| Job::new(format!("Job {i}"), "London")).collect();
        let alert = compose_alert(&jobs, &["London"], ORIGIN).unwrap();
        assert_eq!(alert.overflow, 0);
        assert_eq!(alert.summary, "10 job(s) found near London");
    }
}
