//! Styling tips per body shape.

use crate::shape::BodyShape;

impl BodyShape {
    pub fn styling_tips(&self) -> &'static [&'static str] {
        match self {
            BodyShape::Hourglass => &[
                "Highlight your waist with belted styles",
                "Fitted clothes that follow your natural curves",
                "Wrap dresses and tops",
                "High-waisted bottoms",
            ],
            BodyShape::Rectangle => &[
                "Create curves with peplum tops and dresses",
                "Belted styles to define the waist",
                "Jackets that cinch at the waist",
                "Details at the bust or hips to create dimension",
            ],
            BodyShape::Triangle => &[
                "Structured tops to balance proportions",
                "A-line skirts and dresses",
                "Dark colors on bottom, brighter colors on top",
                "Boot cut or wide-leg pants",
            ],
            BodyShape::InvertedTriangle => &[
                "V-necks and scoop necklines",
                "Full or A-line skirts",
                "Wide-leg pants",
                "Details on lower half to create balance",
            ],
            BodyShape::Apple => &[
                "Empire waistlines",
                "Styles that highlight your legs",
                "V-necks and vertical details",
                "Structured jackets that create shape",
            ],
        }
    }
}

/// Tips for a shape type name; unknown names get the Rectangle tips
pub fn styling_tips_for(shape_type: &str) -> &'static [&'static str] {
    BodyShape::from_name(shape_type)
        .unwrap_or(BodyShape::Rectangle)
        .styling_tips()
}
