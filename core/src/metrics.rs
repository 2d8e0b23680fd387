use prometheus::{Encoder, IntCounter, Registry, TextEncoder};

/// Report counters on a private registry, handed to the report builder by
/// the caller. The calculators themselves never count.
#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    pub kr_evaluated: IntCounter,
    pub kr_no_data: IntCounter,
    pub kr_out_of_window: IntCounter,
    pub objective_reports: IntCounter,
}

impl Metrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let kr_evaluated = counter(&registry, "okr_kr_evaluated_total", "Key results scored for a period")?;
        let kr_no_data = counter(&registry, "okr_kr_no_data_total", "Key results with no actuals in the period")?;
        let kr_out_of_window = counter(
            &registry,
            "okr_kr_out_of_window_total",
            "Key results left out because their validity window misses the period",
        )?;
        let objective_reports = counter(&registry, "okr_objective_reports_total", "Objective reports built")?;

        Ok(Self {
            registry,
            kr_evaluated,
            kr_no_data,
            kr_out_of_window,
            objective_reports,
        })
    }

    /// Prometheus text exposition of all counters.
    pub fn render(&self) -> Result<String, prometheus::Error> {
        let mut buf = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buf)?;
        String::from_utf8(buf).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}

fn counter(registry: &Registry, name: &str, help: &str) -> Result<IntCounter, prometheus::Error> {
    let c = IntCounter::new(name, help)?;
    registry.register(Box::new(c.clone()))?;
    Ok(c)
}
