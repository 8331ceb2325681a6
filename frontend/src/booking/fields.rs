use std::fmt;

/// Declares a closed set of form options together with the exact label each
/// one is shown and submitted as.
macro_rules! labelled_options {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            /// Looks an option up by its label, as submitted by a `<select>`.
            pub fn from_label(label: &str) -> Option<Self> {
                Self::ALL.iter().copied().find(|option| option.label() == label)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

labelled_options!(
    /// The six offerings a booking can be made for.
    Service {
        Servicing => "AC Servicing",
        DeepCleaning => "Deep Cleaning",
        GasRefill => "Gas Refill",
        Repair => "AC Repair",
        Installation => "AC Installation",
        AmcPlans => "AMC Plans",
    }
);

labelled_options!(
    AcType {
        Split => "Split AC",
        Window => "Window AC",
        Cassette => "Cassette AC",
        Tower => "Tower AC",
        Other => "Other",
    }
);

labelled_options!(
    TimeSlot {
        Morning => "Morning (9-12)",
        Afternoon => "Afternoon (12-3)",
        Evening => "Evening (3-7)",
        Flexible => "Flexible",
    }
);

labelled_options!(
    /// Localities in Pune & PCMC. `Other` is the catch-all for unlisted areas.
    Area {
        Aundh => "Aundh",
        Wakad => "Wakad",
        Hinjewadi => "Hinjewadi",
        PimpleSaudagar => "Pimple Saudagar",
        Pimpri => "Pimpri",
        Chinchwad => "Chinchwad",
        Kharadi => "Kharadi",
        VimanNagar => "Viman Nagar",
        Baner => "Baner",
        PimpleNilakh => "Pimple Nilakh",
        Rahatani => "Rahatani",
        Thergaon => "Thergaon",
        Kasarwadi => "Kasarwadi",
        Akurdi => "Akurdi",
        Nigdi => "Nigdi",
        Bhosari => "Bhosari",
        Other => "Other",
    }
);

impl Service {
    /// Anchor id of the service's detail block on the page.
    pub fn slug(self) -> &'static str {
        match self {
            Service::Servicing => "ac-servicing",
            Service::DeepCleaning => "deep-cleaning",
            Service::GasRefill => "gas-refill",
            Service::Repair => "ac-repair",
            Service::Installation => "ac-installation",
            Service::AmcPlans => "amc-plans",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Service::Servicing => "🔧",
            Service::DeepCleaning => "✨",
            Service::GasRefill => "❄️",
            Service::Repair => "🔨",
            Service::Installation => "⚙️",
            Service::AmcPlans => "📋",
        }
    }
}

impl Area {
    /// Named localities, without the `Other` fallback.
    pub fn covered() -> impl Iterator<Item = Area> {
        Area::ALL.iter().copied().filter(|area| *area != Area::Other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_sets_have_expected_sizes() {
        assert_eq!(Service::ALL.len(), 6);
        assert_eq!(AcType::ALL.len(), 5);
        assert_eq!(TimeSlot::ALL.len(), 4);
        assert_eq!(Area::ALL.len(), 17);
        assert_eq!(Area::covered().count(), 16);
    }

    #[test]
    fn labels_resolve_back_to_options() {
        assert_eq!(Service::from_label("Gas Refill"), Some(Service::GasRefill));
        assert_eq!(TimeSlot::from_label("Evening (3-7)"), Some(TimeSlot::Evening));
        assert_eq!(Area::from_label("Pimple Nilakh"), Some(Area::PimpleNilakh));
        assert_eq!(AcType::from_label("split ac"), None);
        assert_eq!(Service::from_label(""), None);
    }
}
