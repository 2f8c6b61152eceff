//! Body measurements derived from a single landmark set.

use serde::{Deserialize, Serialize};
use shapefit_core::{distance_between, Keypoint, LandmarkSet, Point2D};

/// Fraction of the shoulder-to-hip vector at which the waist is placed
pub const WAIST_INTERPOLATION: f64 = 0.5;

/// Widths and height in pixel units plus the three shape ratios.
///
/// Ratios are plain quotients: a zero denominator yields an infinite or NaN
/// ratio, which the classifier treats as "no rule matched".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyMeasurements {
    pub shoulder_width: f64,
    pub waist_width: f64,
    pub hip_width: f64,
    pub height: f64,
    pub shoulder_to_hip_ratio: f64,
    pub waist_to_hip_ratio: f64,
    pub shoulder_to_waist_ratio: f64,
}

impl BodyMeasurements {
    /// Build measurements from widths and height, deriving the ratios
    pub fn from_widths(shoulder_width: f64, waist_width: f64, hip_width: f64, height: f64) -> Self {
        Self {
            shoulder_width,
            waist_width,
            hip_width,
            height,
            shoulder_to_hip_ratio: shoulder_width / hip_width,
            waist_to_hip_ratio: waist_width / hip_width,
            shoulder_to_waist_ratio: shoulder_width / waist_width,
        }
    }

    /// Extract measurements from raw landmark coordinates.
    ///
    /// Confidence is not consulted. Any distance with a missing endpoint is 0.
    pub fn from_landmarks(landmarks: &LandmarkSet) -> Self {
        let pos = |k: Keypoint| landmarks.position(k);

        let shoulder_width = distance_between(
            pos(Keypoint::LeftShoulder).as_ref(),
            pos(Keypoint::RightShoulder).as_ref(),
        );
        let hip_width = distance_between(
            pos(Keypoint::LeftHip).as_ref(),
            pos(Keypoint::RightHip).as_ref(),
        );

        let left_waist = waist_point(pos(Keypoint::LeftShoulder), pos(Keypoint::LeftHip));
        let right_waist = waist_point(pos(Keypoint::RightShoulder), pos(Keypoint::RightHip));
        let waist_width = distance_between(left_waist.as_ref(), right_waist.as_ref());

        // Larger of the two so one occluded leg does not shrink the height
        let nose = pos(Keypoint::Nose);
        let height = distance_between(nose.as_ref(), pos(Keypoint::LeftAnkle).as_ref())
            .max(distance_between(nose.as_ref(), pos(Keypoint::RightAnkle).as_ref()));

        Self::from_widths(shoulder_width, waist_width, hip_width, height)
    }

    /// True when all three ratios are finite numbers
    pub fn has_finite_ratios(&self) -> bool {
        self.shoulder_to_hip_ratio.is_finite()
            && self.waist_to_hip_ratio.is_finite()
            && self.shoulder_to_waist_ratio.is_finite()
    }

    /// Ratio triple (shoulder/hip, waist/hip, shoulder/waist)
    pub fn ratios(&self) -> [f64; 3] {
        [
            self.shoulder_to_hip_ratio,
            self.waist_to_hip_ratio,
            self.shoulder_to_waist_ratio,
        ]
    }
}

/// Waist point on one side of the body, halfway from shoulder to hip
pub fn waist_point(shoulder: Option<Point2D>, hip: Option<Point2D>) -> Option<Point2D> {
    Some(shoulder?.lerp(&hip?, WAIST_INTERPOLATION))
}

/// Convenience wrapper around [`BodyMeasurements::from_landmarks`]
pub fn extract_measurements(landmarks: &LandmarkSet) -> BodyMeasurements {
    BodyMeasurements::from_landmarks(landmarks)
}
