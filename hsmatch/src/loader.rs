//! Reading the applicant and apartment tables.
//!
//! All coercion of text into typed values happens here; the engine only ever
//! sees validated `Person` and `Apartment` records.

use hsm_core::models::{Apartment, ApartmentId, Person, Preferences, Set, ValidationError};
use serde::{Deserialize, Serialize};
use std::io::Read;
use tracing::{Level, event};

/// The columns every applicant table must have
pub const PERSON_COLUMNS: [&str; 4] = ["ID", "Name", "AllowRoommates", "Preferences"];

/// The columns every apartment listing must have
pub const APARTMENT_COLUMNS: [&str; 11] = [
    "Name of Apartment",
    "Sq. Meters",
    "Number of Windows",
    "Window Directions",
    "Total Window Size (sq. meters)",
    "Number of Bedrooms",
    "Number of Bathrooms",
    "Includes Dishwasher",
    "Includes Washer",
    "Includes Dryer",
    "Allow Roommates",
];

/// The ways in which an input table cannot be loaded
#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    #[error("the {table} table is missing the required column {column:?}")]
    MissingColumn {
        table: &'static str,
        column: &'static str,
    },
    #[error("could not read the {table} table: {source}")]
    Csv {
        table: &'static str,
        #[source]
        source: csv::Error,
    },
    #[error("invalid {table} on row {row}: {source}")]
    Invalid {
        table: &'static str,
        row: usize,
        #[source]
        source: ValidationError,
    },
}

/// One row of the applicant table
#[derive(Debug, Serialize, Deserialize)]
pub struct PersonRow {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "AllowRoommates")]
    pub allow_roommates: String,
    #[serde(rename = "Preferences")]
    pub preferences: String,
}

/// One row of the apartment listing
#[derive(Debug, Serialize, Deserialize)]
pub struct ApartmentRow {
    #[serde(rename = "Name of Apartment")]
    pub name: String,
    #[serde(rename = "Sq. Meters")]
    pub size: f64,
    #[serde(rename = "Number of Windows")]
    pub windows: u32,
    #[serde(rename = "Window Directions")]
    pub directions: Option<String>,
    #[serde(rename = "Total Window Size (sq. meters)")]
    pub window_area: f64,
    #[serde(rename = "Number of Bedrooms")]
    pub bedrooms: u32,
    #[serde(rename = "Number of Bathrooms")]
    pub bathrooms: f64,
    #[serde(rename = "Includes Dishwasher")]
    pub dishwasher: String,
    #[serde(rename = "Includes Washer")]
    pub washer: String,
    #[serde(rename = "Includes Dryer")]
    pub dryer: String,
    #[serde(rename = "Allow Roommates")]
    pub allow_roommates: String,
}

/// A boolean cell is true iff it reads "true", ignoring case and whitespace
pub fn flag(text: &str) -> bool {
    text.trim().eq_ignore_ascii_case("true")
}

/// Render a boolean the way spreadsheets tend to
pub fn unflag(value: bool) -> String {
    if value { "True" } else { "False" }.to_owned()
}

fn check_columns<R: Read>(
    reader: &mut csv::Reader<R>,
    table: &'static str,
    required: &[&'static str],
) -> Result<(), LoadError> {
    let headers = reader
        .headers()
        .map_err(|source| LoadError::Csv { table, source })?;

    for &column in required {
        if !headers.iter().any(|header| header.trim() == column) {
            return Err(LoadError::MissingColumn { table, column });
        }
    }
    Ok(())
}

/// Read the applicant table.
///
/// A preference payload that is not valid JSON, or that has the wrong shape,
/// is replaced by empty preferences; a warning is logged and loading carries
/// on. Missing columns and unreadable rows are fatal.
pub fn read_people<R: Read>(input: R) -> Result<Vec<Person>, LoadError> {
    const TABLE: &str = "people";
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(input);
    check_columns(&mut reader, TABLE, &PERSON_COLUMNS)?;

    let mut people = Vec::new();
    for (row, record) in reader.deserialize::<PersonRow>().enumerate() {
        let record = record.map_err(|source| LoadError::Csv { table: TABLE, source })?;

        let preferences = match serde_json::from_str::<Preferences>(&record.preferences) {
            Ok(preferences) => preferences,
            Err(error) => {
                event!(
                    Level::WARN,
                    person = %record.id,
                    %error,
                    "could not decode preferences, continuing with none"
                );
                Preferences::default()
            }
        };

        let person = Person::new(
            record.id,
            record.name,
            flag(&record.allow_roommates),
            preferences,
        )
        .map_err(|source| LoadError::Invalid {
            table: TABLE,
            row,
            source,
        })?;
        people.push(person);
    }

    event!(Level::INFO, count = people.len(), "loaded people");
    Ok(people)
}

/// Read the apartment listing; apartments are identified by row index.
pub fn read_apartments<R: Read>(input: R, delimiter: &str) -> Result<Vec<Apartment>, LoadError> {
    const TABLE: &str = "apartment";
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(input);
    check_columns(&mut reader, TABLE, &APARTMENT_COLUMNS)?;

    let mut apartments = Vec::new();
    for (row, record) in reader.deserialize::<ApartmentRow>().enumerate() {
        let record = record.map_err(|source| LoadError::Csv { table: TABLE, source })?;

        let directions = record
            .directions
            .as_deref()
            .unwrap_or_default()
            .split(delimiter)
            .map(str::trim)
            .filter(|direction| !direction.is_empty())
            .map(str::to_owned)
            .collect::<Set<_>>();

        let apartment = Apartment {
            id: ApartmentId(row),
            name: record.name,
            size: record.size,
            windows: record.windows,
            directions,
            window_area: record.window_area,
            bedrooms: record.bedrooms,
            bathrooms: record.bathrooms,
            dishwasher: flag(&record.dishwasher),
            washer: flag(&record.washer),
            dryer: flag(&record.dryer),
            allows_roommates: flag(&record.allow_roommates),
        }
        .validate()
        .map_err(|source| LoadError::Invalid {
            table: TABLE,
            row,
            source,
        })?;
        apartments.push(apartment);
    }

    event!(Level::INFO, count = apartments.len(), "loaded apartments");
    Ok(apartments)
}

impl From<&Person> for PersonRow {
    fn from(person: &Person) -> Self {
        Self {
            id: person.id.to_string(),
            name: person.name.clone(),
            allow_roommates: unflag(person.allows_roommates),
            // Preferences are plain data; serializing them cannot fail
            preferences: serde_json::to_string(&person.preferences).unwrap_or_default(),
        }
    }
}

impl ApartmentRow {
    /// The row for `apartment`, joining its directions with `delimiter`
    pub fn new(apartment: &Apartment, delimiter: &str) -> Self {
        let directions = apartment
            .directions
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(delimiter);

        Self {
            name: apartment.name.clone(),
            size: apartment.size,
            windows: apartment.windows,
            directions: (!directions.is_empty()).then_some(directions),
            window_area: apartment.window_area,
            bedrooms: apartment.bedrooms,
            bathrooms: apartment.bathrooms,
            dishwasher: unflag(apartment.dishwasher),
            washer: unflag(apartment.washer),
            dryer: unflag(apartment.dryer),
            allow_roommates: unflag(apartment.allows_roommates),
        }
    }
}
