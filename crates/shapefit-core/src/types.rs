//! Fundamental types for the shapefit system.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::geometry::Point2D;

/// Session identifier linking one analysis to its recommendations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

/// Timestamp wrapper with nanosecond precision
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(pub i64);

impl Timestamp {
    pub fn now() -> Self {
        Self(Utc::now().timestamp_nanos_opt().unwrap_or(0))
    }
}

/// 17-joint skeletal keypoint definition (COCO / MoveNet format)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Keypoint {
    Nose = 0,
    LeftEye = 1,
    RightEye = 2,
    LeftEar = 3,
    RightEar = 4,
    LeftShoulder = 5,
    RightShoulder = 6,
    LeftElbow = 7,
    RightElbow = 8,
    LeftWrist = 9,
    RightWrist = 10,
    LeftHip = 11,
    RightHip = 12,
    LeftKnee = 13,
    RightKnee = 14,
    LeftAnkle = 15,
    RightAnkle = 16,
}

impl Keypoint {
    pub const COUNT: usize = 17;

    pub const ALL: [Keypoint; Keypoint::COUNT] = [
        Keypoint::Nose,
        Keypoint::LeftEye,
        Keypoint::RightEye,
        Keypoint::LeftEar,
        Keypoint::RightEar,
        Keypoint::LeftShoulder,
        Keypoint::RightShoulder,
        Keypoint::LeftElbow,
        Keypoint::RightElbow,
        Keypoint::LeftWrist,
        Keypoint::RightWrist,
        Keypoint::LeftHip,
        Keypoint::RightHip,
        Keypoint::LeftKnee,
        Keypoint::RightKnee,
        Keypoint::LeftAnkle,
        Keypoint::RightAnkle,
    ];

    /// Points every measurable landmark set must contain (plus one ankle)
    pub const REQUIRED: [Keypoint; 5] = [
        Keypoint::Nose,
        Keypoint::LeftShoulder,
        Keypoint::RightShoulder,
        Keypoint::LeftHip,
        Keypoint::RightHip,
    ];

    /// Landmark name as emitted by the pose detector
    pub fn name(&self) -> &'static str {
        match self {
            Keypoint::Nose => "nose",
            Keypoint::LeftEye => "left_eye",
            Keypoint::RightEye => "right_eye",
            Keypoint::LeftEar => "left_ear",
            Keypoint::RightEar => "right_ear",
            Keypoint::LeftShoulder => "left_shoulder",
            Keypoint::RightShoulder => "right_shoulder",
            Keypoint::LeftElbow => "left_elbow",
            Keypoint::RightElbow => "right_elbow",
            Keypoint::LeftWrist => "left_wrist",
            Keypoint::RightWrist => "right_wrist",
            Keypoint::LeftHip => "left_hip",
            Keypoint::RightHip => "right_hip",
            Keypoint::LeftKnee => "left_knee",
            Keypoint::RightKnee => "right_knee",
            Keypoint::LeftAnkle => "left_ankle",
            Keypoint::RightAnkle => "right_ankle",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.name() == name)
    }

    /// Returns skeleton connectivity pairs for visualization
    pub fn skeleton_pairs() -> &'static [(Keypoint, Keypoint)] {
        &[
            (Keypoint::Nose, Keypoint::LeftEye),
            (Keypoint::Nose, Keypoint::RightEye),
            (Keypoint::LeftEye, Keypoint::LeftEar),
            (Keypoint::RightEye, Keypoint::RightEar),
            (Keypoint::LeftShoulder, Keypoint::RightShoulder),
            (Keypoint::LeftShoulder, Keypoint::LeftElbow),
            (Keypoint::RightShoulder, Keypoint::RightElbow),
            (Keypoint::LeftElbow, Keypoint::LeftWrist),
            (Keypoint::RightElbow, Keypoint::RightWrist),
            (Keypoint::LeftShoulder, Keypoint::LeftHip),
            (Keypoint::RightShoulder, Keypoint::RightHip),
            (Keypoint::LeftHip, Keypoint::RightHip),
            (Keypoint::LeftHip, Keypoint::LeftKnee),
            (Keypoint::RightHip, Keypoint::RightKnee),
            (Keypoint::LeftKnee, Keypoint::LeftAnkle),
            (Keypoint::RightKnee, Keypoint::RightAnkle),
        ]
    }
}

/// Named landmark with image-space position and detector confidence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub name: String,
    pub x: f64,
    pub y: f64,
    /// Detector confidence in [0, 1]
    #[serde(alias = "score")]
    pub confidence: f32,
}

impl Landmark {
    pub fn new(name: impl Into<String>, x: f64, y: f64, confidence: f32) -> Self {
        Self {
            name: name.into(),
            x,
            y,
            confidence,
        }
    }

    pub fn at(keypoint: Keypoint, x: f64, y: f64, confidence: f32) -> Self {
        Self::new(keypoint.name(), x, y, confidence)
    }

    pub fn position(&self) -> Point2D {
        Point2D::new(self.x, self.y)
    }

    pub fn keypoint(&self) -> Option<Keypoint> {
        Keypoint::from_name(&self.name)
    }

    /// Strictly above the threshold, matching how the skeleton overlay is drawn
    pub fn is_reliable(&self, threshold: f32) -> bool {
        self.confidence > threshold
    }
}

/// Landmarks from one analyzed image, keyed by name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Landmark>", into = "Vec<Landmark>")]
pub struct LandmarkSet {
    landmarks: BTreeMap<String, Landmark>,
}

impl LandmarkSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set, rejecting repeated names
    pub fn from_landmarks<I>(landmarks: I) -> Result<Self>
    where
        I: IntoIterator<Item = Landmark>,
    {
        let mut set = Self::new();
        for landmark in landmarks {
            if set.landmarks.contains_key(&landmark.name) {
                return Err(Error::DuplicateLandmark(landmark.name));
            }
            set.insert(landmark);
        }
        Ok(set)
    }

    /// Insert a landmark, returning any previous landmark with the same name
    pub fn insert(&mut self, landmark: Landmark) -> Option<Landmark> {
        self.landmarks.insert(landmark.name.clone(), landmark)
    }

    pub fn get(&self, name: &str) -> Option<&Landmark> {
        self.landmarks.get(name)
    }

    pub fn keypoint(&self, keypoint: Keypoint) -> Option<&Landmark> {
        self.get(keypoint.name())
    }

    pub fn position(&self, keypoint: Keypoint) -> Option<Point2D> {
        self.keypoint(keypoint).map(Landmark::position)
    }

    pub fn contains(&self, keypoint: Keypoint) -> bool {
        self.landmarks.contains_key(keypoint.name())
    }

    pub fn len(&self) -> usize {
        self.landmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.landmarks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Landmark> {
        self.landmarks.values()
    }

    /// Required keypoints absent from this set.
    ///
    /// Both ankles are reported when neither is present.
    pub fn missing_required(&self) -> Vec<Keypoint> {
        let mut missing: Vec<Keypoint> = Keypoint::REQUIRED
            .iter()
            .copied()
            .filter(|k| !self.contains(*k))
            .collect();

        if !self.contains(Keypoint::LeftAnkle) && !self.contains(Keypoint::RightAnkle) {
            missing.push(Keypoint::LeftAnkle);
            missing.push(Keypoint::RightAnkle);
        }

        missing
    }

    pub fn is_measurable(&self) -> bool {
        self.missing_required().is_empty()
    }

    /// Landmarks at or below the confidence threshold
    pub fn low_confidence(&self, threshold: f32) -> Vec<&Landmark> {
        self.iter().filter(|l| !l.is_reliable(threshold)).collect()
    }

    pub fn average_confidence(&self) -> Option<f32> {
        if self.is_empty() {
            return None;
        }
        let sum: f32 = self.iter().map(|l| l.confidence).sum();
        Some(sum / self.len() as f32)
    }

    /// Skeleton connections whose endpoints are both reliable
    pub fn visible_connections(&self, threshold: f32) -> Vec<(Keypoint, Keypoint)> {
        Keypoint::skeleton_pairs()
            .iter()
            .copied()
            .filter(|(a, b)| {
                let reliable = |k: Keypoint| self.keypoint(k).is_some_and(|l| l.is_reliable(threshold));
                reliable(*a) && reliable(*b)
            })
            .collect()
    }
}

impl From<Vec<Landmark>> for LandmarkSet {
    /// Later landmarks replace earlier ones with the same name.
    fn from(landmarks: Vec<Landmark>) -> Self {
        let mut set = Self::new();
        for landmark in landmarks {
            set.insert(landmark);
        }
        set
    }
}

impl From<LandmarkSet> for Vec<Landmark> {
    fn from(set: LandmarkSet) -> Self {
        set.landmarks.into_values().collect()
    }
}

impl FromIterator<Landmark> for LandmarkSet {
    fn from_iter<I: IntoIterator<Item = Landmark>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}
