// src/scrape/areas.rs
use tracing::{info, warn};

use crate::engine::types::Job;

/// Case-insensitive substring match of the job's location against any area.
/// An empty location never matches.
pub fn matches_area<S: AsRef<str>>(job: &Job, areas: &[S]) -> bool {
    if job.location.is_empty() {
        return false;
    }
    let location = job.location.to_lowercase();
    areas.iter().any(|a| location.contains(&a.as_ref().to_lowercase()))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AreaOutcome {
    /// No areas configured.
    Unfiltered,
    Matched,
    /// Areas configured, nothing matched, raw list returned as-is.
    FellBack,
}

#[derive(Clone, Debug)]
pub struct AreaFilter {
    pub jobs: Vec<Job>,
    pub outcome: AreaOutcome,
}

/// Filter `raw` to the configured areas.
///
/// If areas are set but nothing matches while `raw` is non-empty, every raw
/// job is returned: missing location data must not silence all results.
/// This can surface jobs outside the areas when the site drops locations.
pub fn filter_by_areas<S: AsRef<str>>(raw: Vec<Job>, areas: &[S]) -> AreaFilter {
    if areas.is_empty() {
        return AreaFilter { jobs: raw, outcome: AreaOutcome::Unfiltered };
    }

    let matched: Vec<Job> = raw.iter().filter(|j| matches_area(j, areas)).cloned().collect();
    info!(matched = matched.len(), raw = raw.len(), "area filter applied");

    if matched.is_empty() && !raw.is_empty() {
        warn!(raw = raw.len(), "no jobs matched the areas, returning all jobs");
        return AreaFilter { jobs: raw, outcome: AreaOutcome::FellBack };
    }
    AreaFilter { jobs: matched, outcome: AreaOutcome::Matched }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substring_match_ignores_case() {
        let job = Job::new("Picker", "East London");
        assert!(matches_area(&job, &["london"]));
        assert!(matches_area(&job, &["Leeds", "LONDON"]));
        assert!(!matches_area(&job, &["Leeds"]));
    }

    #[test]
    fn empty_location_never_matches() {
        assert!(!matches_area(&Job::new("Picker", ""), &["london"]));
    }

    #[test]
    fn no_areas_means_no_filtering() {
        let raw = vec![Job::new("A", "Leeds"), Job::new("B", "")];
        let out = filter_by_areas(raw, &[] as &[&str]);
        assert_eq!(out.outcome, AreaOutcome::Unfiltered);
        assert_eq!(out.jobs.len(), 2);
    }

    #[test]
    fn keeps_only_matching_jobs_in_order() {
        let raw = vec![
            Job::new("Packer", "London"),
            Job::new("Driver", "Manchester"),
            Job::new("Sorter", "North London"),
        ];
        let out = filter_by_areas(raw, &["London"]);
        assert_eq!(out.outcome, AreaOutcome::Matched);
        let titles: Vec<&str> = out.jobs.iter().map(|j| j.title.as_str()).collect();
        assert_eq!(titles, vec!["Packer", "Sorter"]);
    }

    #[test]
    fn falls_back_to_raw_when_nothing_has_a_location() {
        let raw = vec![Job::new("Warehouse Associate", ""), Job::new("Driver role", "")];
        let out = filter_by_areas(raw, &["London"]);
        assert_eq!(out.outcome, AreaOutcome::FellBack);
        assert_eq!(out.jobs.len(), 2);
    }

    #[test]
    fn empty_raw_stays_empty() {
        let out = filter_by_areas(Vec::new(), &["London"]);
        assert_eq!(out.outcome, AreaOutcome::Matched);
        assert!(out.jobs.is_empty());
    }
}
