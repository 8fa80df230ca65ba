use hsm_core::models::{Apartment, Feature, Person, Preferences};

/// A person's valuation of one apartment.
#[derive(Debug, Clone, PartialEq)]
pub struct Appraisal {
    /// The base bid less the worth of every unmet requirement; negative
    /// means the apartment is unacceptable to the person
    pub bid: f64,
    /// The requirements the apartment fails to meet
    pub unmet: Vec<Feature>,
}

impl Appraisal {
    /// Whether the person would take the apartment at all
    pub fn is_acceptable(&self) -> bool {
        self.bid >= 0.0
    }
}

/// Whether `apartment` meets the person's requirement on `feature`
pub fn meets(preferences: &Preferences, apartment: &Apartment, feature: Feature) -> bool {
    match feature {
        Feature::Size => preferences.size.contains(apartment.size),
        Feature::Windows => preferences.windows.contains(apartment.windows as f64),
        Feature::Directions => preferences.directions.accepts(&apartment.directions),
        Feature::WindowArea => preferences.window_area.contains(apartment.window_area),
        Feature::Bedrooms => preferences.bedrooms.contains(apartment.bedrooms as f64),
        Feature::Bathrooms => preferences.bathrooms.contains(apartment.bathrooms),
        Feature::Dishwasher => preferences.dishwasher.accepts(apartment.dishwasher),
        Feature::Washer => preferences.washer.accepts(apartment.washer),
        Feature::Dryer => preferences.dryer.accepts(apartment.dryer),
    }
}

/// Compute what `person` would bid for `apartment` as part of a group of
/// `group_size` people.
///
/// Every requirement the apartment fails to meet costs its stated worth.
/// The group size does not currently change the valuation; requirements are
/// stated for the whole unit, not per occupant.
pub fn appraise(person: &Person, apartment: &Apartment, _group_size: usize) -> Appraisal {
    let preferences = &person.preferences;

    let unmet = Feature::ALL
        .into_iter()
        .filter(|&feature| !meets(preferences, apartment, feature))
        .collect::<Vec<_>>();

    let deduction = unmet
        .iter()
        .map(|&feature| preferences.worth(feature))
        .sum::<f64>();

    Appraisal {
        bid: person.base_bid() - deduction,
        unmet,
    }
}
