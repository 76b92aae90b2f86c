// src/store.rs
//! In-memory record of postings already alerted on.
//! Lives for the process only; a restart forgets everything.

use std::collections::HashSet;

use crate::engine::types::{Job, JobKey};

#[derive(Debug, Default)]
pub struct SeenJobs {
    keys: HashSet<JobKey>,
}

impl SeenJobs {
    pub fn new() -> Self { Self::default() }

    pub fn len(&self) -> usize { self.keys.len() }
    pub fn is_empty(&self) -> bool { self.keys.is_empty() }

    pub fn contains(&self, job: &Job) -> bool {
        self.keys.contains(&job.key())
    }

    /// Candidates not seen yet, in their original order. Does not record anything.
    pub fn unseen(&self, candidates: &[Job]) -> Vec<Job> {
        candidates.iter().filter(|j| !self.contains(j)).cloned().collect()
    }

    pub fn record<'a, I>(&mut self, jobs: I)
    where
        I: IntoIterator<Item = &'a Job>,
    {
        self.keys.extend(jobs.into_iter().map(Job::key));
    }

    /// New jobs for this cycle. Every candidate is recorded afterwards,
    /// whether or not it ends up being alerted.
    pub fn delta(&mut self, candidates: &[Job]) -> Vec<Job> {
        let fresh = self.unseen(candidates);
        self.record(candidates);
        fresh
    }
}
