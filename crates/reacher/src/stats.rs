//! Telemetry side channel.
//!
//! Agents push named samples into a [`StatsRecorder`]; the driving loop owns
//! the concrete collector and reads it back for logging or export.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use serde::Serialize;

/// How repeated samples for one key are summarised.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub enum StatAggregation {
    /// Mean of all samples.
    #[default]
    Average,
    /// Only the latest sample.
    MostRecent,
    /// Running sum.
    Sum,
}

pub trait StatsRecorder {
    fn add(&mut self, key: &str, value: f32, aggregation: StatAggregation);
}

/// Recorder shared between the agent and the loop that drives it.
pub type SharedStats = Rc<RefCell<dyn StatsRecorder>>;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StatSummary {
    pub aggregation: StatAggregation,
    pub count: u64,
    pub sum: f64,
    pub min: f32,
    pub max: f32,
    pub last: f32,
}

impl StatSummary {
    fn new(aggregation: StatAggregation, value: f32) -> Self {
        Self {
            aggregation,
            count: 1,
            sum: f64::from(value),
            min: value,
            max: value,
            last: value,
        }
    }

    fn push(&mut self, value: f32) {
        self.count += 1;
        self.sum += f64::from(value);
        self.min = self.min.min(value);
        self.max = self.max.max(value);
        self.last = value;
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn mean(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.sum / self.count as f64
        }
    }

    /// The value this key reports under its aggregation.
    #[must_use]
    pub fn value(&self) -> f64 {
        match self.aggregation {
            StatAggregation::Average => self.mean(),
            StatAggregation::MostRecent => f64::from(self.last),
            StatAggregation::Sum => self.sum,
        }
    }
}

/// Keeps a running summary per key.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(transparent)]
pub struct StatsCollector {
    entries: BTreeMap<String, StatSummary>,
}

impl StatsCollector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Collector wrapped for sharing with an agent.
    #[must_use]
    pub fn shared() -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self::new()))
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&StatSummary> {
        self.entries.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StatSummary)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// # Errors
    ///
    /// Propagates serialization failures from `serde_json`.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl StatsRecorder for StatsCollector {
    fn add(&mut self, key: &str, value: f32, aggregation: StatAggregation) {
        match self.entries.get_mut(key) {
            Some(summary) => {
                if summary.aggregation != aggregation {
                    tracing::warn!(key, "stat recorded with a different aggregation, keeping the first");
                }
                summary.push(value);
            }
            None => {
                self.entries.insert(key.to_owned(), StatSummary::new(aggregation, value));
            }
        }
    }
}
