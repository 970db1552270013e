/// Identity of one page section, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    About,
    Services,
    Work,
    Testimonials,
    Cta,
    Contact,
    Footer,
}

impl SectionId {
    /// Page order, top to bottom.
    pub const ALL: [SectionId; 8] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Services,
        SectionId::Work,
        SectionId::Testimonials,
        SectionId::Cta,
        SectionId::Contact,
        SectionId::Footer,
    ];

    /// Externally addressable anchor name, if the section has one.
    ///
    /// Only these five names exist as navigation targets; the remaining
    /// sections are reachable by scrolling only.
    pub fn anchor(self) -> Option<&'static str> {
        match self {
            SectionId::Home => Some("home"),
            SectionId::About => Some("about"),
            SectionId::Services => Some("services"),
            SectionId::Work => Some("work"),
            SectionId::Contact => Some("contact"),
            SectionId::Testimonials | SectionId::Cta | SectionId::Footer => None,
        }
    }

    /// Intersection-ratio threshold for the reveal trigger.
    ///
    /// `None` means the section reveals on first observation regardless of
    /// how much of it is visible (the hero animates on mount; the footer
    /// does not animate at all).
    pub fn reveal_threshold(self) -> Option<f32> {
        match self {
            SectionId::Home | SectionId::Footer => None,
            SectionId::About | SectionId::Testimonials | SectionId::Cta => Some(0.2),
            SectionId::Services | SectionId::Work | SectionId::Contact => Some(0.1),
        }
    }

    pub fn from_anchor(anchor: &str) -> Option<SectionId> {
        SectionId::ALL
            .into_iter()
            .find(|section| section.anchor() == Some(anchor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_five_anchors() {
        let anchors: Vec<_> = SectionId::ALL
            .into_iter()
            .filter_map(SectionId::anchor)
            .collect();
        assert_eq!(anchors, ["home", "about", "services", "work", "contact"]);
    }

    #[test]
    fn from_anchor_round_trips() {
        for section in SectionId::ALL {
            if let Some(anchor) = section.anchor() {
                assert_eq!(SectionId::from_anchor(anchor), Some(section));
            }
        }
        assert_eq!(SectionId::from_anchor("testimonials"), None);
    }
}
