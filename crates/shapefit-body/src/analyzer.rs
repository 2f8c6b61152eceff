//! Complete body analyzer running extraction and classification.

use serde::{Deserialize, Serialize};
use shapefit_core::{Keypoint, LandmarkSet};

use crate::classifier::{ClassificationRule, ClassificationThresholds, ShapeClassifier};
use crate::measurements::BodyMeasurements;
use crate::shape::BodyShape;

/// Analyzer configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Landmarks at or below this confidence are reported as unreliable.
    /// They are still used for measurement.
    pub min_confidence: f32,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self { min_confidence: 0.3 }
    }
}

/// Output of one completed analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub measurements: BodyMeasurements,
    pub body_type: BodyShape,
}

impl AnalysisResult {
    pub fn styling_tips(&self) -> &'static [&'static str] {
        self.body_type.styling_tips()
    }
}

/// Landmark quality summary for one set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandmarkQuality {
    /// Required keypoints that are absent
    pub missing: Vec<Keypoint>,
    /// Known keypoints whose confidence is at or below the threshold
    pub low_confidence: Vec<Keypoint>,
    pub average_confidence: Option<f32>,
}

impl LandmarkQuality {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Landmark set → measurements → body shape
#[derive(Debug, Clone, Default)]
pub struct BodyAnalyzer {
    config: AnalysisConfig,
    classifier: ShapeClassifier,
}

impl BodyAnalyzer {
    pub fn new(config: AnalysisConfig, thresholds: ClassificationThresholds) -> Self {
        Self {
            config,
            classifier: ShapeClassifier::new(thresholds),
        }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn classifier(&self) -> &ShapeClassifier {
        &self.classifier
    }

    /// Run the full analysis. Never fails; degenerate input classifies as Rectangle.
    pub fn analyze(&self, landmarks: &LandmarkSet) -> AnalysisResult {
        let quality = self.quality(landmarks);
        if !quality.missing.is_empty() {
            tracing::warn!(
                "Missing landmarks {:?}, affected measurements degrade to zero",
                quality.missing
            );
        }
        if !quality.low_confidence.is_empty() {
            tracing::warn!(
                "Measuring with {} low-confidence landmarks: {:?}",
                quality.low_confidence.len(),
                quality.low_confidence
            );
        }

        let measurements = BodyMeasurements::from_landmarks(landmarks);
        tracing::debug!(
            "Measurements: shoulder={:.1} waist={:.1} hip={:.1} height={:.1}",
            measurements.shoulder_width,
            measurements.waist_width,
            measurements.hip_width,
            measurements.height
        );

        let rule = self.classifier.classify_with_rule(&measurements);
        if rule == ClassificationRule::Fallback {
            tracing::warn!(
                "No shape rule matched ratios {:?}, defaulting to Rectangle",
                measurements.ratios()
            );
        } else {
            tracing::debug!("Matched rule {:?}", rule);
        }

        AnalysisResult {
            measurements,
            body_type: rule.shape(),
        }
    }

    /// Summarize missing and unreliable landmarks
    pub fn quality(&self, landmarks: &LandmarkSet) -> LandmarkQuality {
        let mut low_confidence: Vec<Keypoint> = landmarks
            .low_confidence(self.config.min_confidence)
            .into_iter()
            .filter_map(|l| l.keypoint())
            .collect();
        low_confidence.sort();

        LandmarkQuality {
            missing: landmarks.missing_required(),
            low_confidence,
            average_confidence: landmarks.average_confidence(),
        }
    }
}
