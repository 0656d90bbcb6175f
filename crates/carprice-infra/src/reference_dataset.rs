//! Reference dataset loader (Cardetails.csv)
//!
//! Only the categorical columns are read; they populate the choice lists a
//! form offers. Other columns (selling_price, torque, ...) are ignored.

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use carprice_domain::model::{
    Brand, Categorical, Fuel, OwnerHistory, SellerType, Transmission,
};
use carprice_types::{DatasetError, StartupError};

const REQUIRED_COLUMNS: [&str; 5] = ["name", "fuel", "seller_type", "transmission", "owner"];

#[derive(Debug, Deserialize)]
struct ListingRow {
    name: String,
    fuel: String,
    seller_type: String,
    transmission: String,
    owner: String,
}

/// A dataset label with no model code, plus the labels that field accepts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnencodableLabel {
    pub field: &'static str,
    pub label: String,
    pub accepted: Vec<&'static str>,
}

/// Distinct labels per categorical field, in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceChoices {
    pub brands: Vec<String>,
    pub fuels: Vec<String>,
    pub seller_types: Vec<String>,
    pub transmissions: Vec<String>,
    pub owner_histories: Vec<String>,
    /// Number of data rows read
    pub row_count: usize,
}

impl ReferenceChoices {
    /// Load choices from a CSV file on disk
    pub fn load_from_file(path: &Path) -> Result<Self, StartupError> {
        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => StartupError::DatasetMissing(path.to_path_buf()),
            _ => StartupError::DatasetUnreadable {
                path: path.to_path_buf(),
                source: e,
            },
        })?;

        let choices = Self::from_reader(file).map_err(|source| StartupError::DatasetInvalid {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(
            path = %path.display(),
            rows = choices.row_count,
            brands = choices.brands.len(),
            "loaded reference dataset"
        );
        Ok(choices)
    }

    /// Load choices from CSV text
    pub fn load_from_str(content: &str) -> Result<Self, DatasetError> {
        Self::from_reader(content.as_bytes())
    }

    /// Load choices from any CSV reader with a header row
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::Headers)
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        validate_headers(&headers)?;

        let mut choices = ReferenceChoices::default();
        for result in reader.deserialize::<ListingRow>() {
            let row = result?;
            push_unique(&mut choices.brands, brand_from_name(&row.name));
            push_unique(&mut choices.fuels, &row.fuel);
            push_unique(&mut choices.seller_types, &row.seller_type);
            push_unique(&mut choices.transmissions, &row.transmission);
            push_unique(&mut choices.owner_histories, &row.owner);
            choices.row_count += 1;
        }

        if choices.row_count == 0 {
            return Err(DatasetError::Empty);
        }

        Ok(choices)
    }

    /// Dataset labels the encoder has no code for
    pub fn unencodable(&self) -> Vec<UnencodableLabel> {
        let mut out = Vec::new();
        collect_unknown::<Brand>(&self.brands, &mut out);
        collect_unknown::<Fuel>(&self.fuels, &mut out);
        collect_unknown::<SellerType>(&self.seller_types, &mut out);
        collect_unknown::<Transmission>(&self.transmissions, &mut out);
        collect_unknown::<OwnerHistory>(&self.owner_histories, &mut out);
        out
    }
}

/// First word of a listing name ("Maruti Swift Dzire VDI" -> "Maruti")
pub fn brand_from_name(name: &str) -> &str {
    name.split(' ').next().unwrap_or("").trim()
}

fn validate_headers(headers: &csv::StringRecord) -> Result<(), DatasetError> {
    for col in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == col) {
            return Err(DatasetError::MissingColumn(col.to_string()));
        }
    }
    Ok(())
}

fn push_unique(values: &mut Vec<String>, value: &str) {
    if !values.iter().any(|v| v == value) {
        values.push(value.to_string());
    }
}

fn collect_unknown<T: Categorical>(labels: &[String], out: &mut Vec<UnencodableLabel>) {
    for label in labels {
        if T::parse(label).is_err() {
            out.push(UnencodableLabel {
                field: T::FIELD,
                label: label.clone(),
                accepted: T::labels(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE_CSV: &str = "\
name,year,selling_price,km_driven,fuel,seller_type,transmission,owner,mileage,engine,max_power,torque,seats
Maruti Swift Dzire VDI,2014,450000,145500,Diesel,Individual,Manual,First Owner,23.4 kmpl,1248 CC,74 bhp,190Nm@ 2000rpm,5
Skoda Rapid 1.5 TDI Ambition,2014,370000,120000,Diesel,Individual,Manual,Second Owner,21.14 kmpl,1498 CC,103.52 bhp,250Nm@ 1500-2500rpm,5
Honda City 2017-2020 EXi,2006,158000,140000,Petrol,Individual,Manual,Third Owner,17.7 kmpl,1497 CC,78 bhp,\"12.7@ 2,700(kgm@ rpm)\",5
Maruti Wagon R LXI,2010,225000,127000,Petrol,Dealer,Automatic,First Owner,16.1 kmpl,1298 CC,88.2 bhp,11.5@ 4500(kgm@ rpm),5
";

    #[test]
    fn test_brand_from_name() {
        assert_eq!(brand_from_name("Maruti Swift Dzire VDI"), "Maruti");
        assert_eq!(brand_from_name("Land Rover Discovery"), "Land");
        assert_eq!(brand_from_name("Mercedes-Benz B Class"), "Mercedes-Benz");
        assert_eq!(brand_from_name("Tata"), "Tata");
    }

    #[test]
    fn test_load_distinct_in_first_seen_order() {
        let choices = ReferenceChoices::load_from_str(SAMPLE_CSV).unwrap();
        assert_eq!(choices.row_count, 4);
        assert_eq!(choices.brands, vec!["Maruti", "Skoda", "Honda"]);
        assert_eq!(choices.fuels, vec!["Diesel", "Petrol"]);
        assert_eq!(choices.seller_types, vec!["Individual", "Dealer"]);
        assert_eq!(choices.transmissions, vec!["Manual", "Automatic"]);
        assert_eq!(
            choices.owner_histories,
            vec!["First Owner", "Second Owner", "Third Owner"]
        );
        assert!(choices.unencodable().is_empty());
    }

    #[test]
    fn test_missing_column() {
        let csv = "name,fuel,seller_type,transmission\nMaruti Alto,Petrol,Individual,Manual\n";
        match ReferenceChoices::load_from_str(csv) {
            Err(DatasetError::MissingColumn(col)) => assert_eq!(col, "owner"),
            other => panic!("expected MissingColumn, got {:?}", other),
        }
    }

    #[test]
    fn test_header_only_is_empty() {
        let csv = "name,fuel,seller_type,transmission,owner\n";
        assert!(matches!(
            ReferenceChoices::load_from_str(csv),
            Err(DatasetError::Empty)
        ));
    }

    #[test]
    fn test_unencodable_labels_are_reported() {
        let csv = "\
name,fuel,seller_type,transmission,owner
Tesla Model 3,Electric,Individual,Automatic,First Owner
Maruti Alto,Petrol,Individual,Manual,First Owner
";
        let choices = ReferenceChoices::load_from_str(csv).unwrap();
        let unknown = choices.unencodable();
        assert_eq!(unknown.len(), 2);

        assert_eq!(unknown[0].field, "brand");
        assert_eq!(unknown[0].label, "Tesla");
        assert_eq!(unknown[0].accepted.len(), 31);
        assert_eq!(unknown[0].accepted[0], "Maruti");

        assert_eq!(unknown[1].field, "fuel");
        assert_eq!(unknown[1].label, "Electric");
        assert_eq!(unknown[1].accepted, vec!["Diesel", "Petrol", "LPG", "CNG"]);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE_CSV.as_bytes()).unwrap();

        let choices = ReferenceChoices::load_from_file(file.path()).unwrap();
        assert_eq!(choices.brands.len(), 3);
    }

    #[test]
    fn test_missing_file_is_startup_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Cardetails.csv");
        match ReferenceChoices::load_from_file(&path) {
            Err(StartupError::DatasetMissing(p)) => assert_eq!(p, path),
            other => panic!("expected DatasetMissing, got {:?}", other),
        }
    }

    #[test]
    fn test_short_row_is_csv_error() {
        let csv = "name,fuel,seller_type,transmission,owner\nMaruti Alto,Petrol,Individual\n";
        assert!(matches!(
            ReferenceChoices::load_from_str(csv),
            Err(DatasetError::Csv(_))
        ));
    }

    #[test]
    fn test_malformed_file_is_dataset_invalid() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"name,fuel,seller_type,transmission,owner\nMaruti Alto,Petrol\n")
            .unwrap();

        match ReferenceChoices::load_from_file(file.path()) {
            Err(StartupError::DatasetInvalid { path, source }) => {
                assert_eq!(path, file.path());
                assert!(matches!(source, DatasetError::Csv(_)));
            }
            other => panic!("expected DatasetInvalid, got {:?}", other),
        }
    }
}
