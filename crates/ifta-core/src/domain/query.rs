use crate::domain::country::Country;

/// A filter value that can appear in the rates query string.
///
/// Booleans stringify to the literal `"true"` / `"false"`; everything else
/// uses its natural string form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    Text(String),
    Flag(bool),
}

impl FilterValue {
    pub fn render(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Flag(flag) => flag.to_string(),
        }
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for FilterValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<Country> for FilterValue {
    fn from(value: Country) -> Self {
        Self::Text(value.as_str().to_owned())
    }
}

/// Filter record for `list_rates`.
///
/// The named fields cover the keys the API documents today; `param` is the
/// escape hatch for keys not yet modeled, which are passed through to the
/// query string verbatim. An absent (`None`) field produces no query
/// parameter at all.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RatesQuery {
    pub quarter: Option<String>,
    pub country: Option<Country>,
    pub jurisdiction: Option<String>,
    pub fuel_type: Option<String>,
    pub changed: Option<bool>,
    extra: Vec<(String, FilterValue)>,
}

impl RatesQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quarter(mut self, quarter: impl Into<String>) -> Self {
        self.quarter = Some(quarter.into());
        self
    }

    pub fn country(mut self, country: Country) -> Self {
        self.country = Some(country);
        self
    }

    pub fn jurisdiction(mut self, code: impl Into<String>) -> Self {
        self.jurisdiction = Some(code.into());
        self
    }

    pub fn fuel_type(mut self, fuel_type: impl Into<String>) -> Self {
        self.fuel_type = Some(fuel_type.into());
        self
    }

    pub fn changed(mut self, changed: bool) -> Self {
        self.changed = Some(changed);
        self
    }

    /// Adds an arbitrary key not yet modeled as a named field.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        self.extra.push((key.into(), value.into()));
        self
    }

    /// Renders the filter record as `(key, value)` pairs: named fields in
    /// declaration order, then escape-hatch entries. A later entry for an
    /// already-present key overwrites the earlier value in place, matching
    /// set-semantics on the query string.
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params: Vec<(String, String)> = Vec::new();

        let mut set = |key: &str, value: String| {
            if let Some(slot) = params.iter_mut().find(|(k, _)| k == key) {
                slot.1 = value;
            } else {
                params.push((key.to_owned(), value));
            }
        };

        if let Some(quarter) = &self.quarter {
            set("quarter", quarter.clone());
        }
        if let Some(country) = self.country {
            set("country", country.as_str().to_owned());
        }
        if let Some(jurisdiction) = &self.jurisdiction {
            set("jurisdiction", jurisdiction.clone());
        }
        if let Some(fuel_type) = &self.fuel_type {
            set("fuel_type", fuel_type.clone());
        }
        if let Some(changed) = self.changed {
            set("changed", changed.to_string());
        }
        for (key, value) in &self.extra {
            set(key, value.render());
        }

        params
    }

    pub fn is_empty(&self) -> bool {
        self.to_params().is_empty()
    }
}
