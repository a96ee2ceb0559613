//! Feature catalog for the marketing features page.
//!
//! The catalog is a `const` slice: defined once, never mutated, never
//! fetched. Section presentation (background shading, layout direction) is
//! derived here so the page component stays a plain mapping.

#[cfg(test)]
#[path = "features_test.rs"]
mod features_test;

use std::collections::HashSet;

/// Glyphs available to feature sections.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeatureIcon {
    Square,
    Pencil,
    Type,
    Layers,
    Users,
    Zap,
    /// Prefix for benefit rows; not used as a section icon.
    ArrowRight,
}

impl FeatureIcon {
    /// SVG path data on a 24x24 stroked canvas.
    #[must_use]
    pub fn paths(self) -> &'static [&'static str] {
        match self {
            Self::Square => &["M5 3h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2z"],
            Self::Pencil => &["M17 3a2.85 2.83 0 1 1 4 4L7.5 20.5 2 22l1.5-5.5Z", "m15 5 4 4"],
            Self::Type => &["M4 7V4h16v3", "M9 20h6", "M12 4v16"],
            Self::Layers => &[
                "m12.83 2.18a2 2 0 0 0-1.66 0L2.6 6.08a1 1 0 0 0 0 1.83l8.58 3.91a2 2 0 0 0 1.66 0l8.58-3.9a1 1 0 0 0 0-1.83Z",
                "m22 17.65-9.17 4.16a2 2 0 0 1-1.66 0L2 17.65",
                "m22 12.65-9.17 4.16a2 2 0 0 1-1.66 0L2 12.65",
            ],
            Self::Users => &[
                "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
                "M5 7a4 4 0 1 0 8 0a4 4 0 1 0-8 0",
                "M22 21v-2a4 4 0 0 0-3-3.87",
                "M16 3.13a4 4 0 0 1 0 7.75",
            ],
            Self::Zap => &[
                "M4 14a1 1 0 0 1-.78-1.63l9.9-10.2a.5.5 0 0 1 .86.46l-1.92 6.02A1 1 0 0 0 13 10h7a1 1 0 0 1 .78 1.63l-9.9 10.2a.5.5 0 0 1-.86-.46l1.92-6.02A1 1 0 0 0 11 14z",
            ],
            Self::ArrowRight => &["M5 12h14", "m12 5 7 7-7 7"],
        }
    }
}

/// One marketing section describing a product capability.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeatureSection {
    /// Unique within the catalog; used as the render key.
    pub title: &'static str,
    pub description: &'static str,
    pub icon: FeatureIcon,
    /// Demo asset path. Not rendered yet; the page shows a gradient placeholder.
    pub image_url: &'static str,
    pub benefits: &'static [&'static str],
    /// Mirror the text/visual columns on wide screens.
    pub reverse: bool,
}

pub const FEATURES: &[FeatureSection] = &[
    FeatureSection {
        title: "Shape Tools",
        description: "Create perfect shapes with our intuitive tools. Drag to resize, hold shift for perfect proportions, and easily adjust properties like fill, stroke, and opacity.",
        icon: FeatureIcon::Square,
        image_url: "/features/shapes-demo.gif",
        benefits: &[
            "Perfect rectangles, ellipses, and polygons",
            "Smart snapping and alignment",
            "Customizable styles and properties",
            "Copy and paste with preserved attributes",
        ],
        reverse: false,
    },
    FeatureSection {
        title: "Freehand Drawing",
        description: "Express your ideas naturally with our responsive drawing tools. Multiple brush types, pressure sensitivity, and smoothing controls give you the perfect drawing experience.",
        icon: FeatureIcon::Pencil,
        image_url: "/features/drawing-demo.gif",
        benefits: &[
            "Pressure-sensitive brushes",
            "Customizable stroke smoothing",
            "Multiple brush types and sizes",
            "Quick color selection and opacity control",
        ],
        reverse: true,
    },
    FeatureSection {
        title: "Text & Notes",
        description: "Add context to your designs with rich text editing and sticky notes. Format text, create lists, and organize information effectively.",
        icon: FeatureIcon::Type,
        image_url: "/features/text-demo.gif",
        benefits: &["Rich text formatting", "Multiple font styles", "Sticky notes and callouts", "Auto-resizing text boxes"],
        reverse: false,
    },
    FeatureSection {
        title: "Layer Management",
        description: "Keep your work organized with powerful layer controls. Group elements, adjust opacity, and manage complex designs with ease.",
        icon: FeatureIcon::Layers,
        image_url: "/features/layers-demo.gif",
        benefits: &[
            "Unlimited layers and groups",
            "Drag and drop reorganization",
            "Lock and hide layers",
            "Layer effects and blending modes",
        ],
        reverse: true,
    },
    FeatureSection {
        title: "Team Collaboration",
        description: "Work together in real-time with your team. See cursors, changes, and updates instantly as team members contribute to the board.",
        icon: FeatureIcon::Users,
        image_url: "/features/collaboration-demo.gif",
        benefits: &[
            "Real-time cursor presence",
            "Live changes and updates",
            "Team member avatars",
            "Collaborative selection and editing",
        ],
        reverse: false,
    },
    FeatureSection {
        title: "Real-time Updates",
        description: "Experience seamless synchronization across all users. Changes are instantly reflected for all team members, ensuring everyone stays in sync.",
        icon: FeatureIcon::Zap,
        image_url: "/features/sync-demo.gif",
        benefits: &["Instant synchronization", "Conflict resolution", "Offline support", "Change history and undo/redo"],
        reverse: true,
    },
];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContentError {
    #[error("duplicate feature title: {0}")]
    DuplicateTitle(&'static str),
    #[error("feature {0} has no benefits")]
    NoBenefits(&'static str),
}

/// Check catalog invariants: unique titles and at least one benefit each.
///
/// # Errors
///
/// Returns the first violation found, in catalog order.
pub fn validate_features(features: &[FeatureSection]) -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    for feature in features {
        if !seen.insert(feature.title) {
            return Err(ContentError::DuplicateTitle(feature.title));
        }
        if feature.benefits.is_empty() {
            return Err(ContentError::NoBenefits(feature.title));
        }
    }
    Ok(())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionBackground {
    Plain,
    Shaded,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionDirection {
    Normal,
    Mirrored,
}

/// Presentation of one feature section.
///
/// Shading follows position parity; mirroring follows the record's own
/// flag. The two are independent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SectionStyle {
    pub background: SectionBackground,
    pub direction: SectionDirection,
}

impl SectionStyle {
    #[must_use]
    pub fn for_position(index: usize, reverse: bool) -> Self {
        let background = if index % 2 == 1 { SectionBackground::Shaded } else { SectionBackground::Plain };
        let direction = if reverse { SectionDirection::Mirrored } else { SectionDirection::Normal };
        Self { background, direction }
    }

    #[must_use]
    pub fn section_class(self) -> &'static str {
        match self.background {
            SectionBackground::Plain => "feature-section feature-section--plain",
            SectionBackground::Shaded => "feature-section feature-section--shaded",
        }
    }

    #[must_use]
    pub fn row_class(self) -> &'static str {
        match self.direction {
            SectionDirection::Normal => "feature-section__row",
            SectionDirection::Mirrored => "feature-section__row feature-section__row--mirrored",
        }
    }
}

/// Benefit rows in catalog order, each paired with its prefix glyph.
pub fn benefit_rows(section: &FeatureSection) -> impl Iterator<Item = (FeatureIcon, &'static str)> + '_ {
    section.benefits.iter().map(|benefit| (FeatureIcon::ArrowRight, *benefit))
}
