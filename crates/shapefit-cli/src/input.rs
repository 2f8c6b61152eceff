//! Landmark file parsing.

use serde::Deserialize;
use shapefit_core::{Error, LandmarkSet, Result};

/// Accepted landmark file layouts
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum LandmarkFile {
    /// A single pose as returned by a MoveNet-style detector
    Pose { keypoints: LandmarkSet },
    /// A bare landmark array
    Landmarks(LandmarkSet),
}

/// Parse a landmark JSON document, rejecting documents with no landmarks
pub fn parse_landmarks(text: &str) -> Result<LandmarkSet> {
    let landmarks = match serde_json::from_str::<LandmarkFile>(text)? {
        LandmarkFile::Pose { keypoints } => keypoints,
        LandmarkFile::Landmarks(landmarks) => landmarks,
    };

    if landmarks.is_empty() {
        return Err(Error::InvalidInput("No landmarks in input".to_string()));
    }

    Ok(landmarks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shapefit_core::Keypoint;

    #[test]
    fn test_parse_pose_object() {
        let text = r#"{"score": 0.7, "keypoints": [
            {"name": "nose", "x": 10.0, "y": 20.0, "score": 0.9}
        ]}"#;
        let set = parse_landmarks(text).unwrap();
        assert_eq!(set.keypoint(Keypoint::Nose).unwrap().y, 20.0);
    }

    #[test]
    fn test_parse_bare_array() {
        let text = r#"[{"name": "left_hip", "x": 1.0, "y": 2.0, "confidence": 0.5}]"#;
        assert_eq!(parse_landmarks(text).unwrap().len(), 1);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(parse_landmarks("[]"), Err(Error::InvalidInput(_))));
        assert!(matches!(parse_landmarks("not json"), Err(Error::Serialization(_))));
    }
}
