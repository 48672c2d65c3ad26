use std::sync::Arc;

use crate::models::AnalysisSnapshot;

use super::{KvStore, StoreError, ANALYSIS_KEY};

/// Single-slot persistence for the completed analysis snapshot.
///
/// The results view reads the slot once on load; each completed
/// conversation overwrites it. No history is kept and there is no
/// schema versioning.
#[derive(Clone)]
pub struct ResultStore {
    store: Arc<dyn KvStore>,
}

impl ResultStore {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self { store }
    }

    /// Overwrite the slot with a new snapshot.
    pub fn save(&self, snapshot: &AnalysisSnapshot) -> Result<(), StoreError> {
        let json = serde_json::to_string(snapshot)?;
        self.store.set(ANALYSIS_KEY, &json)
    }

    /// Read the latest snapshot back, if any conversation has completed.
    pub fn load(&self) -> Result<Option<AnalysisSnapshot>, StoreError> {
        match self.store.get(ANALYSIS_KEY)? {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::enums::{Severity, Urgency};
    use crate::models::{AnalysisResult, Condition, MedicalHistory};
    use crate::store::MemoryStore;

    fn sample_snapshot() -> AnalysisSnapshot {
        AnalysisSnapshot {
            analysis: AnalysisResult {
                conditions: vec![Condition {
                    name: "Migraine".into(),
                    probability: 61.0,
                    description: "Recurrent moderate-to-severe headache".into(),
                    recommendations: vec!["Rest in a dark room".into()],
                    severity: Severity::Medium,
                    urgency: Urgency::Routine,
                }],
                overall_severity: Severity::Medium,
                recommendations: vec!["Track triggers".into()],
                preventive_measures: vec!["Regular sleep".into()],
                follow_up_actions: vec!["GP visit if frequency increases".into()],
            },
            preventive_recommendations: vec!["Limit screen time".into()],
            date: "2026-03-01T09:30:00+00:00".into(),
            symptoms: vec!["headache".into(), "light sensitivity".into()],
            medical_history: MedicalHistory {
                age: Some(34),
                gender: Some("female".into()),
                ..Default::default()
            },
        }
    }

    #[test]
    fn round_trip_is_deep_equal() {
        let results = ResultStore::new(Arc::new(MemoryStore::new()));
        let snapshot = sample_snapshot();

        results.save(&snapshot).unwrap();
        let loaded = results.load().unwrap().unwrap();
        assert_eq!(loaded, snapshot);
    }

    #[test]
    fn load_before_any_save_is_none() {
        let results = ResultStore::new(Arc::new(MemoryStore::new()));
        assert!(results.load().unwrap().is_none());
    }

    #[test]
    fn new_analysis_overwrites_prior() {
        let results = ResultStore::new(Arc::new(MemoryStore::new()));

        let first = sample_snapshot();
        results.save(&first).unwrap();

        let mut second = sample_snapshot();
        second.symptoms = vec!["fever".into()];
        results.save(&second).unwrap();

        let loaded = results.load().unwrap().unwrap();
        assert_eq!(loaded.symptoms, vec!["fever".to_string()]);
    }
}
