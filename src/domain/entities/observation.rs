//! Raw listing observation as it arrives from the database.

/// Price value in the shape the source table stores it.
///
/// The listings table was bulk-imported from spreadsheets, so a price is
/// either a clean numeric value or formatted text such as `"₹1,00,000"`
/// with currency symbols and digit-group separators.
#[derive(Debug, Clone, PartialEq)]
pub enum PriceValue {
    Number(f64),
    Text(String),
}

impl PriceValue {
    /// Resolves the raw value to a finite numeric price.
    ///
    /// Numeric values pass through untouched. Text values are stripped of
    /// every character other than digits, `.` and `-` before parsing, which
    /// handles currency symbols and thousand separators in one pass.
    ///
    /// Returns `None` for unparseable or non-finite values.
    pub fn resolve(&self) -> Option<f64> {
        let value = match self {
            PriceValue::Number(n) => *n,
            PriceValue::Text(s) => {
                let cleaned: String = s
                    .chars()
                    .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
                    .collect();
                cleaned.parse().ok()?
            }
        };

        value.is_finite().then_some(value)
    }
}

/// One source record pairing a location label with a possibly-unnormalized
/// price value. Either side may be missing.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub location: Option<String>,
    pub price: Option<PriceValue>,
}

impl Observation {
    pub fn new(location: Option<String>, price: Option<PriceValue>) -> Self {
        Self { location, price }
    }

    /// Returns the location label if it is present and non-blank.
    pub fn valid_location(&self) -> Option<&str> {
        self.location
            .as_deref()
            .map(str::trim)
            .filter(|l| !l.is_empty())
    }

    /// Returns the numeric price if one can be resolved.
    pub fn resolved_price(&self) -> Option<f64> {
        self.price.as_ref().and_then(PriceValue::resolve)
    }
}
