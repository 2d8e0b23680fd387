use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::status::StatusThresholds;

static SHARED: Lazy<ProgressConfig> = Lazy::new(ProgressConfig::default);

/// Calculation knobs. Loaded from JSON by [`crate::storage::load_config`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ProgressConfig {
    /// `average` KRs normally drop months whose recorded actual is exactly 0
    /// from both means. Setting this keeps them, treating a measured zero as
    /// data like every other aggregation does.
    pub average_includes_zero_actuals: bool,
    pub status: StatusThresholds,
}

impl ProgressConfig {
    /// Process-wide default used by the free-function entry points.
    pub fn shared() -> &'static ProgressConfig {
        &SHARED
    }
}
