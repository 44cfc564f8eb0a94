//! Tracking of submitted scheme applications

use std::fmt;

use chrono::NaiveDate;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SchemeError};

/// Number of steps an application goes through from submission to decision
pub const TOTAL_STEPS: u32 = 4;

/// Where an application stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApplicationStatus {
    Submitted,
    #[serde(rename = "Under Review")]
    UnderReview,
    Verified,
    Approved,
    Rejected,
}

impl ApplicationStatus {
    /// Display label
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Submitted => "Submitted",
            Self::UnderReview => "Under Review",
            Self::Verified => "Verified",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }

    /// Whether a decision has been made
    #[must_use]
    pub const fn is_final(self) -> bool {
        matches!(self, Self::Approved | Self::Rejected)
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single application to a scheme
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: String,
    pub scheme_id: String,
    pub scheme_name: String,
    pub status: ApplicationStatus,
    /// Submission date
    pub date: NaiveDate,
    /// Current step, counted from 1
    pub step: u32,
    pub total_steps: u32,
}

/// A citizen's applications, newest first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Applications {
    applications: Vec<Application>,
    #[serde(default)]
    next_number: u64,
}

impl Applications {
    /// Create an empty tracker
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new submission on `date` and return it
    ///
    /// The application starts `Submitted` at step 1 and is placed ahead of
    /// every earlier one.
    pub fn add_application(
        &mut self,
        scheme_id: impl Into<String>,
        scheme_name: impl Into<String>,
        date: NaiveDate,
    ) -> &Application {
        self.next_number += 1;
        let application = Application {
            id: format!("APP-{:06}", self.next_number),
            scheme_id: scheme_id.into(),
            scheme_name: scheme_name.into(),
            status: ApplicationStatus::Submitted,
            date,
            step: 1,
            total_steps: TOTAL_STEPS,
        };
        info!(
            "Application {} submitted for '{}'",
            application.id, application.scheme_id
        );
        self.applications.insert(0, application);
        &self.applications[0]
    }

    /// Move an application to `status` at `step`
    pub fn update_status(&mut self, id: &str, status: ApplicationStatus, step: u32) -> Result<()> {
        let application = self
            .applications
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| SchemeError::UnknownApplication(id.to_string()))?;
        if step == 0 || step > application.total_steps {
            return Err(SchemeError::validation(
                "step",
                format!("must be between 1 and {}", application.total_steps),
            ));
        }
        debug!(
            "Application {id}: {} (step {}) -> {status} (step {step})",
            application.status, application.step
        );
        application.status = status;
        application.step = step;
        Ok(())
    }

    /// Drop an application; returns whether it was tracked
    pub fn remove_application(&mut self, id: &str) -> bool {
        let before = self.applications.len();
        self.applications.retain(|a| a.id != id);
        self.applications.len() != before
    }

    /// The most recent application to `scheme_id`
    #[must_use]
    pub fn application_for_scheme(&self, scheme_id: &str) -> Option<&Application> {
        self.applications.iter().find(|a| a.scheme_id == scheme_id)
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Application> {
        self.applications.iter().find(|a| a.id == id)
    }

    /// All applications, newest first
    #[must_use]
    pub fn applications(&self) -> &[Application] {
        &self.applications
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.applications.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.applications.is_empty()
    }
}
