//! Styling overrides for the identity widgets.
//!
//! Mirrors the provider SDK's `appearance.elements` object: a small set of
//! recognized element keys, each carrying inline CSS declarations.

#[cfg(test)]
#[path = "appearance_test.rs"]
mod appearance_test;

/// Widget parts that accept overrides.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppearanceElement {
    /// Outer container of the organization switcher.
    RootBox,
    /// Clickable trigger of the organization switcher.
    OrganizationSwitcherTrigger,
    /// Avatar box of the user button.
    UserButtonAvatarBox,
}

/// One CSS declaration, e.g. `("padding", "6px")`.
pub type StyleDecl = (&'static str, &'static str);

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Appearance {
    elements: Vec<(AppearanceElement, Vec<StyleDecl>)>,
}

impl Appearance {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append declarations for an element. Later declarations win in CSS order.
    #[must_use]
    pub fn with(mut self, element: AppearanceElement, decls: &[StyleDecl]) -> Self {
        match self.elements.iter_mut().find(|(el, _)| *el == element) {
            Some((_, existing)) => existing.extend_from_slice(decls),
            None => self.elements.push((element, decls.to_vec())),
        }
        self
    }

    /// Inline `style` attribute for an element; empty when it has no overrides.
    #[must_use]
    pub fn style_for(&self, element: AppearanceElement) -> String {
        self.elements
            .iter()
            .find(|(el, _)| *el == element)
            .map(|(_, decls)| {
                decls
                    .iter()
                    .map(|(prop, value)| format!("{prop}: {value};"))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .unwrap_or_default()
    }
}

/// Overrides used by the dashboard navbar.
#[must_use]
pub fn navbar_appearance() -> Appearance {
    Appearance::new()
        .with(
            AppearanceElement::RootBox,
            &[("display", "flex"), ("justify-content", "center"), ("align-content", "center"), ("width", "100%")],
        )
        .with(
            AppearanceElement::OrganizationSwitcherTrigger,
            &[
                ("padding", "6px"),
                ("width", "100%"),
                ("border-radius", "8px"),
                ("border", "1px solid #E5E7EB"),
                ("justify-content", "space-between"),
                ("background-color", "white"),
            ],
        )
        .with(AppearanceElement::UserButtonAvatarBox, &[("width", "40px"), ("height", "40px")])
}
