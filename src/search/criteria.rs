use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Property type selection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeFilter {
    #[default]
    Any,
    /// Exact, case-sensitive match on the listing type
    Only(String),
}

impl TypeFilter {
    /// Read a type selector value. Blank and "any" (any case) mean no
    /// restriction.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() || raw.eq_ignore_ascii_case("any") {
            TypeFilter::Any
        } else {
            TypeFilter::Only(raw.to_string())
        }
    }

    pub fn matches(&self, property_type: &str) -> bool {
        match self {
            TypeFilter::Any => true,
            TypeFilter::Only(wanted) => wanted == property_type,
        }
    }
}

/// Search criteria for filtering the catalog
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub property_type: TypeFilter,
    /// Minimum price (GBP)
    pub min_price: Option<f64>,
    /// Maximum price (GBP)
    pub max_price: Option<f64>,
    /// Minimum number of bedrooms
    pub min_beds: Option<f64>,
    /// Outward code prefix, e.g. "BR5" or "NW"
    pub postcode_area: Option<String>,
    /// Earliest added date, `YYYY-MM-DD`
    pub date_from: Option<String>,
    /// Latest added date, `YYYY-MM-DD`
    pub date_to: Option<String>,
}

impl FilterCriteria {
    pub fn with_type(mut self, property_type: TypeFilter) -> Self {
        self.property_type = property_type;
        self
    }

    pub fn with_price_range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.min_price = min;
        self.max_price = max;
        self
    }

    pub fn with_min_beds(mut self, min_beds: Option<f64>) -> Self {
        self.min_beds = min_beds;
        self
    }

    pub fn with_postcode_area(mut self, area: impl Into<String>) -> Self {
        self.postcode_area = non_blank(&area.into());
        self
    }

    /// Set the date range; bounds that are not `YYYY-MM-DD` are dropped.
    pub fn with_date_range(mut self, from: Option<&str>, to: Option<&str>) -> Self {
        self.date_from = from.and_then(iso_date);
        self.date_to = to.and_then(iso_date);
        self
    }

    pub fn has_date_bounds(&self) -> bool {
        self.date_from.is_some() || self.date_to.is_some()
    }
}

/// Filter fields as the user typed them.
///
/// Nothing here is validated; [`FilterInputs::parse`] decides what each
/// field means and never fails.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterInputs {
    pub property_type: String,
    pub min_price: String,
    pub max_price: String,
    pub min_beds: String,
    pub postcode_area: String,
    pub date_from: String,
    pub date_to: String,
}

impl FilterInputs {
    pub fn parse(&self) -> FilterCriteria {
        FilterCriteria {
            property_type: TypeFilter::parse(&self.property_type),
            min_price: number(&self.min_price),
            max_price: number(&self.max_price),
            min_beds: number(&self.min_beds),
            postcode_area: non_blank(&self.postcode_area),
            date_from: iso_date(&self.date_from),
            date_to: iso_date(&self.date_to),
        }
    }
}

/// Blank or non-numeric text is "no bound", never zero.
pub fn number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

fn non_blank(raw: &str) -> Option<String> {
    let raw = raw.trim();
    (!raw.is_empty()).then(|| raw.to_string())
}

/// Accept only real calendar dates written as `YYYY-MM-DD`.
fn iso_date(raw: &str) -> Option<String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .ok()
        .map(|date| date.format("%Y-%m-%d").to_string())
}
