use std::fmt;
use serde::{Deserialize, Serialize};
use crate::prize::Prize;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BreadcrumbLevel {
    Debug,
    Info,
    Warning,
    Error,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Breadcrumb {
    pub message: String,
    pub category: String,
    pub level: BreadcrumbLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl Breadcrumb {
    pub fn draw(username: &str, prize: &Prize) -> Self {
        Self {
            message: format!("User {} won {}: {}", username, prize.name, prize.value),
            category: "lottery".to_string(),
            level: BreadcrumbLevel::Info,
            data: None,
        }
    }

    pub fn app_loaded(load_time_ms: f64) -> Self {
        Self {
            message: "App loaded".to_string(),
            category: "performance".to_string(),
            level: BreadcrumbLevel::Info,
            data: Some(serde_json::json!({ "loadTime": load_time_ms })),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TelemetryError {
    Unavailable,
    Rejected(String),
}

impl fmt::Display for TelemetryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TelemetryError::Unavailable => write!(f, "telemetry reporter unavailable"),
            TelemetryError::Rejected(reason) => write!(f, "telemetry rejected breadcrumb: {}", reason),
        }
    }
}

impl std::error::Error for TelemetryError {}

pub trait TelemetryReporter {
    fn add_breadcrumb(&self, crumb: &Breadcrumb) -> Result<(), TelemetryError>;
}

/// Fire-and-forget: failures and a missing reporter never reach the caller.
pub fn report_best_effort(reporter: Option<&dyn TelemetryReporter>, crumb: &Breadcrumb) {
    let Some(reporter) = reporter else {
        return;
    };
    if let Err(e) = reporter.add_breadcrumb(crumb) {
        log::debug!("Dropped breadcrumb '{}': {}", crumb.message, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder(RefCell<Vec<Breadcrumb>>);

    impl TelemetryReporter for Recorder {
        fn add_breadcrumb(&self, crumb: &Breadcrumb) -> Result<(), TelemetryError> {
            self.0.borrow_mut().push(crumb.clone());
            Ok(())
        }
    }

    struct Broken;

    impl TelemetryReporter for Broken {
        fn add_breadcrumb(&self, _crumb: &Breadcrumb) -> Result<(), TelemetryError> {
            Err(TelemetryError::Rejected("offline".into()))
        }
    }

    #[test]
    fn test_draw_breadcrumb_format() {
        let prize = Prize::new(2, "Second Prize", "AirPods Pro", 2.0);
        let crumb = Breadcrumb::draw("demo", &prize);
        assert_eq!(crumb.message, "User demo won Second Prize: AirPods Pro");
        assert_eq!(crumb.category, "lottery");
        assert_eq!(crumb.level, BreadcrumbLevel::Info);
    }

    #[test]
    fn test_reporter_receives_breadcrumb() {
        let recorder = Recorder::default();
        let crumb = Breadcrumb::app_loaded(1200.0);
        report_best_effort(Some(&recorder), &crumb);
        assert_eq!(recorder.0.borrow().as_slice(), &[crumb]);
    }

    #[test]
    fn test_failures_and_absence_are_swallowed() {
        let crumb = Breadcrumb::app_loaded(10.0);
        report_best_effort(Some(&Broken), &crumb);
        report_best_effort(None, &crumb);
    }

    #[test]
    fn test_serializes_lowercase_level() {
        let prize = Prize::new(1, "First Prize", "iPhone 15", 0.5);
        let json = serde_json::to_value(Breadcrumb::draw("demo", &prize)).unwrap();
        assert_eq!(json["level"], "info");
        assert!(json.get("data").is_none());
    }
}
