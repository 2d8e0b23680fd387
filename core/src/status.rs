use serde::{Deserialize, Serialize};

/// Badge colour bucket for a percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressStatus {
    NoData,
    Critical,
    Attention,
    OnTrack,
}

impl ProgressStatus {
    pub fn label(self) -> &'static str {
        match self {
            ProgressStatus::NoData => "no data",
            ProgressStatus::Critical => "critical",
            ProgressStatus::Attention => "attention",
            ProgressStatus::OnTrack => "on track",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusThresholds {
    /// Anything below this is critical.
    pub critical_below: f64,
    /// At or above this the KR is on track; in between is attention.
    pub on_track_from: f64,
}

impl Default for StatusThresholds {
    fn default() -> Self {
        Self {
            critical_below: 70.0,
            on_track_from: 100.0,
        }
    }
}

pub fn classify(percentage: Option<f64>, thresholds: &StatusThresholds) -> ProgressStatus {
    match percentage {
        None => ProgressStatus::NoData,
        Some(p) if p < thresholds.critical_below => ProgressStatus::Critical,
        Some(p) if p < thresholds.on_track_from => ProgressStatus::Attention,
        Some(_) => ProgressStatus::OnTrack,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buckets_follow_default_thresholds() {
        let t = StatusThresholds::default();
        assert_eq!(classify(None, &t), ProgressStatus::NoData);
        assert_eq!(classify(Some(0.0), &t), ProgressStatus::Critical);
        assert_eq!(classify(Some(69.9), &t), ProgressStatus::Critical);
        assert_eq!(classify(Some(70.0), &t), ProgressStatus::Attention);
        assert_eq!(classify(Some(99.99), &t), ProgressStatus::Attention);
        assert_eq!(classify(Some(100.0), &t), ProgressStatus::OnTrack);
        assert_eq!(classify(Some(180.0), &t), ProgressStatus::OnTrack);
    }
}
