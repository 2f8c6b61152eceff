//! Ordered threshold rules mapping body ratios to a body shape.
//!
//! Rules are evaluated top to bottom and the first match wins:
//!
//! | # | Condition | Shape |
//! |---|-----------|-------|
//! | 1 | balanced shoulders/hips, waist/hip ≤ 0.8 | Hourglass |
//! | 2 | balanced shoulders/hips, waist/hip ≥ 0.8 | Rectangle |
//! | 3 | shoulder/hip < 0.9 | Triangle (Pear) |
//! | 4 | shoulder/hip > 1.1, shoulder/waist < 1.3 | Inverted Triangle |
//! | 5 | balanced shoulders/hips, waist/hip ≥ 0.9 | Apple |
//! | - | otherwise | Rectangle |
//!
//! "Balanced" means 0.9 ≤ shoulder/hip ≤ 1.1. Rules 1 and 2 together cover the
//! whole balanced band, so rule 5 never fires for finite ratios. Comparisons
//! with NaN are false, so degenerate measurements fall through to Rectangle.

use serde::{Deserialize, Serialize};

use crate::measurements::BodyMeasurements;
use crate::shape::BodyShape;

/// Ratio thresholds used by the rule table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassificationThresholds {
    /// Lower bound of the balanced shoulder/hip band
    pub balanced_min: f64,
    /// Upper bound of the balanced shoulder/hip band
    pub balanced_max: f64,
    /// Waist/hip at or below this is a defined waist
    pub defined_waist_max: f64,
    /// Waist/hip at or above this is a full midsection
    pub full_waist_min: f64,
    /// Shoulder/waist must stay below this for an inverted triangle
    pub inverted_shoulder_to_waist_max: f64,
}

impl Default for ClassificationThresholds {
    fn default() -> Self {
        Self {
            balanced_min: 0.9,
            balanced_max: 1.1,
            defined_waist_max: 0.8,
            full_waist_min: 0.9,
            inverted_shoulder_to_waist_max: 1.3,
        }
    }
}

/// Which rule produced a classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClassificationRule {
    Hourglass,
    Rectangle,
    Pear,
    InvertedTriangle,
    Apple,
    /// No rule matched
    Fallback,
}

impl ClassificationRule {
    pub fn shape(&self) -> BodyShape {
        match self {
            ClassificationRule::Hourglass => BodyShape::Hourglass,
            ClassificationRule::Rectangle => BodyShape::Rectangle,
            ClassificationRule::Pear => BodyShape::Triangle,
            ClassificationRule::InvertedTriangle => BodyShape::InvertedTriangle,
            ClassificationRule::Apple => BodyShape::Apple,
            ClassificationRule::Fallback => BodyShape::Rectangle,
        }
    }
}

/// Stateless body-shape classifier
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ShapeClassifier {
    thresholds: ClassificationThresholds,
}

impl ShapeClassifier {
    pub fn new(thresholds: ClassificationThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &ClassificationThresholds {
        &self.thresholds
    }

    pub fn classify(&self, measurements: &BodyMeasurements) -> BodyShape {
        self.classify_with_rule(measurements).shape()
    }

    /// Classify and report the matching rule
    pub fn classify_with_rule(&self, measurements: &BodyMeasurements) -> ClassificationRule {
        let t = &self.thresholds;
        let s = measurements.shoulder_to_hip_ratio;
        let w = measurements.waist_to_hip_ratio;
        let v = measurements.shoulder_to_waist_ratio;

        let balanced = s >= t.balanced_min && s <= t.balanced_max;

        if balanced && w <= t.defined_waist_max {
            return ClassificationRule::Hourglass;
        }

        if balanced && w >= t.defined_waist_max {
            return ClassificationRule::Rectangle;
        }

        if s < t.balanced_min {
            return ClassificationRule::Pear;
        }

        if s > t.balanced_max && v < t.inverted_shoulder_to_waist_max {
            return ClassificationRule::InvertedTriangle;
        }

        if balanced && w >= t.full_waist_min {
            return ClassificationRule::Apple;
        }

        ClassificationRule::Fallback
    }
}

/// Classify with the default thresholds
pub fn classify(measurements: &BodyMeasurements) -> BodyShape {
    ShapeClassifier::default().classify(measurements)
}
