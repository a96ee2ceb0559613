use super::*;
use crate::content::features::{SectionBackground, SectionDirection};

#[test]
fn cta_targets_dashboard_route() {
    assert_eq!(CTA_ROUTE, "/dashboard");
}

#[test]
fn page_sections_follow_catalog_order_and_styles() {
    let styles: Vec<_> = FEATURES
        .iter()
        .enumerate()
        .map(|(i, f)| (f.title, SectionStyle::for_position(i, f.reverse)))
        .collect();
    assert_eq!(styles.len(), FEATURES.len());
    assert_eq!(styles[0].0, "Shape Tools");
    assert_eq!(styles[0].1.background, SectionBackground::Plain);
    assert_eq!(styles[0].1.direction, SectionDirection::Normal);
    assert_eq!(styles[1].0, "Freehand Drawing");
    assert_eq!(styles[1].1.background, SectionBackground::Shaded);
    assert_eq!(styles[1].1.direction, SectionDirection::Mirrored);
}
