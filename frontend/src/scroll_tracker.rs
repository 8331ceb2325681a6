//! Picks the navigation entry to highlight for a given scroll position.
//!
//! The computation is pure: the navbar measures the page and passes the
//! numbers in, so the same inputs always give the same label.

use std::fmt;

use crate::config::ScrollThresholds;

/// Navigation entries, in the order they appear in the navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavLabel {
    Home,
    Services,
    Amc,
    Gallery,
    About,
    Contact,
}

impl NavLabel {
    pub const ALL: [NavLabel; 6] = [
        NavLabel::Home,
        NavLabel::Services,
        NavLabel::Amc,
        NavLabel::Gallery,
        NavLabel::About,
        NavLabel::Contact,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            NavLabel::Home => "home",
            NavLabel::Services => "services",
            NavLabel::Amc => "amc",
            NavLabel::Gallery => "gallery",
            NavLabel::About => "about",
            NavLabel::Contact => "contact",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            NavLabel::Home => "Home",
            NavLabel::Services => "Services",
            NavLabel::Amc => "AMC Plans",
            NavLabel::Gallery => "Gallery",
            NavLabel::About => "About",
            NavLabel::Contact => "Contact",
        }
    }

    /// Section the entry scrolls to when clicked.
    pub fn target(self) -> SectionId {
        match self {
            NavLabel::Home => SectionId::Home,
            NavLabel::Services => SectionId::Services,
            NavLabel::Amc => SectionId::Amc,
            NavLabel::Gallery => SectionId::Gallery,
            NavLabel::About => SectionId::About,
            NavLabel::Contact => SectionId::Contact,
        }
    }
}

impl fmt::Display for NavLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Page sections that take part in highlighting, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    Services,
    ServiceDetails,
    Amc,
    Gallery,
    About,
    Faq,
    Contact,
}

impl SectionId {
    pub const DOCUMENT_ORDER: [SectionId; 8] = [
        SectionId::Home,
        SectionId::Services,
        SectionId::ServiceDetails,
        SectionId::Amc,
        SectionId::Gallery,
        SectionId::About,
        SectionId::Faq,
        SectionId::Contact,
    ];

    /// The element id carried by the section in the DOM.
    pub fn dom_id(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::Services => "services",
            SectionId::ServiceDetails => "service-details",
            SectionId::Amc => "amc",
            SectionId::Gallery => "gallery",
            SectionId::About => "about",
            SectionId::Faq => "faq",
            SectionId::Contact => "contact",
        }
    }

    /// Sub-sections light up their parent's entry.
    pub fn nav_label(self) -> NavLabel {
        match self {
            SectionId::Home => NavLabel::Home,
            SectionId::Services | SectionId::ServiceDetails => NavLabel::Services,
            SectionId::Amc => NavLabel::Amc,
            SectionId::Gallery => NavLabel::Gallery,
            SectionId::About | SectionId::Faq => NavLabel::About,
            SectionId::Contact => NavLabel::Contact,
        }
    }
}

/// Document-level measurements taken on a scroll tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub viewport_height: f64,
}

impl ScrollMetrics {
    fn distance_to_bottom(&self) -> f64 {
        self.scroll_height - self.scroll_top - self.viewport_height
    }
}

/// Computes the highlighted entry. `section_top` returns a section's top edge
/// relative to the viewport, or `None` when the section is not on the page;
/// missing sections are skipped.
pub fn active_label<F>(metrics: ScrollMetrics, thresholds: &ScrollThresholds, mut section_top: F) -> NavLabel
where
    F: FnMut(SectionId) -> Option<f64>,
{
    if metrics.scroll_top < thresholds.top {
        return NavLabel::Home;
    }
    if metrics.distance_to_bottom() < thresholds.bottom {
        return NavLabel::Contact;
    }

    // Later sections win ties: the one owning the strip under the header is
    // the last whose top has passed it.
    SectionId::DOCUMENT_ORDER
        .iter()
        .filter_map(|section| section_top(*section).map(|top| (*section, top)))
        .filter(|(_, top)| top - thresholds.header_offset <= thresholds.activation)
        .last()
        .map(|(section, _)| section.nav_label())
        .unwrap_or(NavLabel::Home)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const VIEWPORT: f64 = 800.0;
    const DOCUMENT: f64 = 8000.0;

    /// A page whose sections start at fixed document offsets.
    fn page(layout: &[(SectionId, f64)]) -> HashMap<SectionId, f64> {
        layout.iter().copied().collect()
    }

    fn standard_page() -> HashMap<SectionId, f64> {
        page(&[
            (SectionId::Home, 0.0),
            (SectionId::Services, 900.0),
            (SectionId::ServiceDetails, 1800.0),
            (SectionId::Amc, 3000.0),
            (SectionId::Gallery, 3800.0),
            (SectionId::About, 4900.0),
            (SectionId::Faq, 6000.0),
            (SectionId::Contact, 7400.0),
        ])
    }

    fn label_at(layout: &HashMap<SectionId, f64>, scroll_top: f64) -> NavLabel {
        let metrics = ScrollMetrics {
            scroll_top,
            scroll_height: DOCUMENT,
            viewport_height: VIEWPORT,
        };
        active_label(metrics, &ScrollThresholds::default(), |section| {
            layout.get(&section).map(|offset| offset - scroll_top)
        })
    }

    #[test]
    fn top_of_page_is_home_regardless_of_sections() {
        // Even a layout where everything claims to be above the header.
        let weird = page(&[(SectionId::Contact, -5000.0), (SectionId::Gallery, -100.0)]);
        assert_eq!(label_at(&weird, 0.0), NavLabel::Home);
        assert_eq!(label_at(&standard_page(), 99.0), NavLabel::Home);
    }

    #[test]
    fn end_of_document_is_contact() {
        let layout = standard_page();
        assert_eq!(label_at(&layout, DOCUMENT - VIEWPORT), NavLabel::Contact);
        assert_eq!(label_at(&layout, DOCUMENT - VIEWPORT - 99.0), NavLabel::Contact);
    }

    #[test]
    fn section_under_the_header_wins() {
        let layout = standard_page();
        // Services top sits exactly at the header line.
        assert_eq!(label_at(&layout, 900.0 - 56.0), NavLabel::Services);
        // Amc top still 40px below the header: within activation.
        assert_eq!(label_at(&layout, 3000.0 - 96.0), NavLabel::Amc);
        // Amc top 60px below the header: service details still owns it.
        assert_eq!(label_at(&layout, 3000.0 - 116.0), NavLabel::Services);
        assert_eq!(label_at(&layout, 4200.0), NavLabel::Gallery);
    }

    #[test]
    fn aliased_sections_share_their_parent_label() {
        let layout = standard_page();
        assert_eq!(label_at(&layout, 2000.0), NavLabel::Services);
        assert_eq!(label_at(&layout, 1000.0), label_at(&layout, 2000.0));
        assert_eq!(label_at(&layout, 5000.0), NavLabel::About);
        assert_eq!(label_at(&layout, 6200.0), NavLabel::About);
        assert_eq!(SectionId::Faq.nav_label(), SectionId::About.nav_label());
        assert_eq!(
            SectionId::ServiceDetails.nav_label(),
            SectionId::Services.nav_label()
        );
    }

    #[test]
    fn missing_sections_are_skipped() {
        let mut layout = standard_page();
        layout.remove(&SectionId::Gallery);
        layout.remove(&SectionId::Faq);
        assert_eq!(label_at(&layout, 4200.0), NavLabel::Amc);
        assert_eq!(label_at(&layout, 6200.0), NavLabel::About);
    }

    #[test]
    fn nothing_reached_falls_back_to_home() {
        let layout = page(&[(SectionId::Services, 2000.0)]);
        assert_eq!(label_at(&layout, 500.0), NavLabel::Home);
    }

    #[test]
    fn recomputation_is_idempotent() {
        let layout = standard_page();
        for scroll_top in [0.0, 850.0, 2500.0, 4800.0, 7100.0, 7200.0] {
            assert_eq!(label_at(&layout, scroll_top), label_at(&layout, scroll_top));
        }
    }

    #[test]
    fn every_nav_target_maps_back_to_its_label() {
        for label in NavLabel::ALL {
            assert_eq!(label.target().nav_label(), label);
        }
    }
}
