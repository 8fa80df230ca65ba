use super::{ApartmentId, Set, ValidationError, measure};

/// A housing unit on offer.
#[derive(Debug, Clone, PartialEq)]
pub struct Apartment {
    /// Position of the apartment in its listing
    pub id: ApartmentId,
    /// Display name
    pub name: String,
    /// Floor area, in square meters
    pub size: f64,
    /// Number of windows
    pub windows: u32,
    /// Directions the windows face, e.g. "North"
    pub directions: Set<String>,
    /// Total window area, in square meters
    pub window_area: f64,
    /// Number of bedrooms; also the most people the unit can house
    pub bedrooms: u32,
    /// Number of bathrooms (half bathrooms count as 0.5)
    pub bathrooms: f64,
    #[allow(missing_docs)]
    pub dishwasher: bool,
    #[allow(missing_docs)]
    pub washer: bool,
    #[allow(missing_docs)]
    pub dryer: bool,
    /// Whether the landlord lets the unit to more than one person
    pub allows_roommates: bool,
}

impl Apartment {
    /// Check the measured quantities are finite and non-negative
    pub fn validate(self) -> Result<Self, ValidationError> {
        measure("Sq. Meters", self.size)?;
        measure("Total Window Size", self.window_area)?;
        measure("Number of Bathrooms", self.bathrooms)?;
        Ok(self)
    }

    /// Whether a group of `size` people may take this apartment
    pub fn admits(&self, size: usize) -> bool {
        size <= self.bedrooms as usize && (size <= 1 || self.allows_roommates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[fixture]
    fn studio() -> Apartment {
        Apartment {
            id: ApartmentId(0),
            name: "Studio".to_owned(),
            size: 30.0,
            windows: 2,
            directions: Set::default(),
            window_area: 3.0,
            bedrooms: 1,
            bathrooms: 1.0,
            dishwasher: false,
            washer: false,
            dryer: false,
            allows_roommates: false,
        }
    }

    #[rstest]
    #[case::single(1, true)]
    #[case::pair(2, false)]
    fn test_admits_studio(studio: Apartment, #[case] size: usize, #[case] expected: bool) {
        assert_eq!(studio.admits(size), expected);
    }

    #[rstest]
    #[case::within_capacity(3, true)]
    #[case::over_capacity(4, false)]
    fn test_admits_shared(studio: Apartment, #[case] size: usize, #[case] expected: bool) {
        let shared = Apartment {
            bedrooms: 3,
            allows_roommates: true,
            ..studio
        };
        assert_eq!(shared.admits(size), expected);
    }

    #[rstest]
    fn test_roommates_need_bedrooms_too(studio: Apartment) {
        let apartment = Apartment {
            bedrooms: 1,
            allows_roommates: true,
            ..studio
        };
        assert!(!apartment.admits(2));
    }

    #[rstest]
    fn test_validate(studio: Apartment) {
        assert!(studio.clone().validate().is_ok());
        assert_eq!(
            Apartment { size: f64::NAN, ..studio.clone() }.validate(),
            Err(ValidationError::NotFinite("Sq. Meters"))
        );
        assert_eq!(
            Apartment { bathrooms: -1.0, ..studio }.validate(),
            Err(ValidationError::Negative("Number of Bathrooms"))
        );
    }
}
