//! Usage-frequency ranking for accepted completions.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

const DECAY_FACTOR: f64 = 0.95;
const MAX_ENTRIES: usize = 512;
const MIN_SCORE: f64 = 0.001;
const CLEANUP_INTERVAL: u32 = 32;
const MIN_SCALE: f64 = 1e-6;

/// Decaying frequency table. Each accepted completion bumps its own score
/// and fades every other entry; recent picks outrank old ones.
///
/// Serializes to a stable, sorted item list; the in-memory scale and
/// cleanup bookkeeping never hit the wire.
#[derive(Debug, Clone)]
pub struct FrequencyRanker {
    // name -> raw score
    // actual score = raw score * scale
    scores: FxHashMap<String, f64>,
    scale: f64,
    updates_since_cleanup: u32,
    dirty: bool,
}

impl Default for FrequencyRanker {
    fn default() -> Self {
        Self {
            scores: FxHashMap::default(),
            scale: 1.0,
            updates_since_cleanup: 0,
            dirty: false,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct FrequencyRankerData {
    #[serde(default)]
    items: Vec<FrequencyEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct FrequencyEntry {
    name: String,
    score: f64,
}

impl FrequencyRanker {
    fn from_data(data: FrequencyRankerData) -> Self {
        let mut scores = FxHashMap::default();
        for item in data.items {
            if item.score < MIN_SCORE {
                continue;
            }
            scores.insert(item.name, item.score);
        }

        Self {
            scores,
            ..Self::default()
        }
    }

    fn snapshot_data(&self) -> FrequencyRankerData {
        let mut items: Vec<FrequencyEntry> = self
            .scores
            .iter()
            .map(|(name, &raw_score)| FrequencyEntry {
                name: name.clone(),
                score: raw_score * self.scale,
            })
            .collect();
        items.sort_by(|a, b| a.name.cmp(&b.name));
        FrequencyRankerData { items }
    }

    pub fn record(&mut self, name: &str) {
        // Decaying the shared scale fades every existing entry in O(1).
        self.scale *= DECAY_FACTOR;
        if self.scale < MIN_SCALE {
            self.normalize_scale();
        }

        let add = 1.0 / self.scale;
        if let Some(score) = self.scores.get_mut(name) {
            *score += add;
        } else {
            self.scores.insert(name.to_string(), add);
        }

        self.updates_since_cleanup = self.updates_since_cleanup.saturating_add(1);
        if self.scores.len() > MAX_ENTRIES || self.updates_since_cleanup >= CLEANUP_INTERVAL {
            self.cleanup();
            self.updates_since_cleanup = 0;
        }

        self.dirty = true;
    }

    pub fn score(&self, name: &str) -> f64 {
        self.scores.get(name).copied().unwrap_or(0.0) * self.scale
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    fn normalize_scale(&mut self) {
        if (self.scale - 1.0).abs() <= f64::EPSILON {
            return;
        }
        let scale = self.scale;
        for score in self.scores.values_mut() {
            *score *= scale;
        }
        self.scale = 1.0;
    }

    fn cleanup(&mut self) {
        let threshold = MIN_SCORE / self.scale;
        self.scores.retain(|_, score| *score >= threshold);

        if self.scores.len() <= MAX_ENTRIES {
            return;
        }

        let mut ranked: Vec<(String, f64)> = self.scores.drain().collect();
        ranked.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });
        ranked.truncate(MAX_ENTRIES);
        self.scores = ranked.into_iter().collect();
    }
}

impl Serialize for FrequencyRanker {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.snapshot_data().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for FrequencyRanker {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let data = FrequencyRankerData::deserialize(deserializer)?;
        Ok(Self::from_data(data))
    }
}
