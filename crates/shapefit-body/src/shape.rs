//! Body-shape archetypes and their static descriptor table.

use serde::{Deserialize, Serialize};
use shapefit_core::Error;
use std::fmt;

/// One of the five body-shape archetypes.
///
/// Serializes as its descriptor record `{ type, description, features }`,
/// which is the form handed to the recommendation prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "ShapeDescriptor", try_from = "ShapeDescriptor")]
pub enum BodyShape {
    Hourglass,
    Rectangle,
    /// Also called Pear
    Triangle,
    InvertedTriangle,
    Apple,
}

impl BodyShape {
    pub const ALL: [BodyShape; 5] = [
        BodyShape::Hourglass,
        BodyShape::Rectangle,
        BodyShape::Triangle,
        BodyShape::InvertedTriangle,
        BodyShape::Apple,
    ];

    /// Display name, also the lookup key for styling tips
    pub fn name(&self) -> &'static str {
        match self {
            BodyShape::Hourglass => "Hourglass",
            BodyShape::Rectangle => "Rectangle",
            BodyShape::Triangle => "Triangle (Pear)",
            BodyShape::InvertedTriangle => "Inverted Triangle",
            BodyShape::Apple => "Apple",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.name() == name)
    }

    pub fn description(&self) -> &'static str {
        match self {
            BodyShape::Hourglass => {
                "Your shoulders and hips are similar in width with a defined waistline."
            }
            BodyShape::Rectangle => {
                "Your shoulders, waist, and hips are similar in width with minimal waist definition."
            }
            BodyShape::Triangle => "Your hips are wider than your shoulders with a defined waist.",
            BodyShape::InvertedTriangle => {
                "Your shoulders are wider than your hips with an athletic upper body."
            }
            BodyShape::Apple => {
                "Your midsection is fuller with slimmer legs and similar shoulder/hip width."
            }
        }
    }

    pub fn features(&self) -> &'static [&'static str] {
        match self {
            BodyShape::Hourglass => &[
                "Balanced proportions",
                "Defined waistline",
                "Curved hip line",
                "Similar shoulder and hip width",
            ],
            BodyShape::Rectangle => &[
                "Straight up and down figure",
                "Athletic build",
                "Minimal waist definition",
                "Similar measurements throughout torso",
            ],
            BodyShape::Triangle => &[
                "Narrower shoulders",
                "Defined waistline",
                "Fuller hips and thighs",
                "Gradual slope from waist to hips",
            ],
            BodyShape::InvertedTriangle => &[
                "Broader shoulders or bustline",
                "Narrower hips",
                "Athletic upper body",
                "Straight hip line",
            ],
            BodyShape::Apple => &[
                "Fuller midsection",
                "Similar shoulder and hip width",
                "Less defined waistline",
                "Often slimmer legs",
            ],
        }
    }

    pub fn descriptor(&self) -> ShapeDescriptor {
        ShapeDescriptor::from(*self)
    }
}

impl fmt::Display for BodyShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Owned form of an archetype record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeDescriptor {
    #[serde(rename = "type")]
    pub shape_type: String,
    pub description: String,
    pub features: Vec<String>,
}

impl From<BodyShape> for ShapeDescriptor {
    fn from(shape: BodyShape) -> Self {
        Self {
            shape_type: shape.name().to_string(),
            description: shape.description().to_string(),
            features: shape.features().iter().map(|f| f.to_string()).collect(),
        }
    }
}

impl TryFrom<ShapeDescriptor> for BodyShape {
    type Error = Error;

    /// Resolves by type name only; description and features come from the table.
    fn try_from(descriptor: ShapeDescriptor) -> Result<Self, Self::Error> {
        BodyShape::from_name(&descriptor.shape_type)
            .ok_or(Error::UnknownShape(descriptor.shape_type))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_roundtrip() {
        for shape in BodyShape::ALL {
            assert_eq!(BodyShape::from_name(shape.name()), Some(shape));
        }
        assert_eq!(BodyShape::from_name("Triangle"), None);
    }

    #[test]
    fn test_every_shape_has_four_features() {
        for shape in BodyShape::ALL {
            assert_eq!(shape.features().len(), 4, "{}", shape);
            assert!(!shape.description().is_empty());
        }
    }

    #[test]
    fn test_serializes_as_descriptor() {
        let json = serde_json::to_value(BodyShape::Triangle).unwrap();
        assert_eq!(json["type"], "Triangle (Pear)");
        assert_eq!(
            json["description"],
            "Your hips are wider than your shoulders with a defined waist."
        );
        assert_eq!(json["features"][2], "Fuller hips and thighs");
    }

    #[test]
    fn test_deserialize_by_type_name() {
        let json = r#"{"type": "Inverted Triangle", "description": "", "features": []}"#;
        let shape: BodyShape = serde_json::from_str(json).unwrap();
        assert_eq!(shape, BodyShape::InvertedTriangle);

        let unknown = r#"{"type": "Spoon", "description": "", "features": []}"#;
        assert!(serde_json::from_str::<BodyShape>(unknown).is_err());
    }
}
