use serde::{Deserialize, Serialize};

/// Title used when none is configured.
pub const DEFAULT_ESTIMATE_TITLE: &str = "Construction Estimate";

/// Postal address of the contractor or the client. Every part is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    pub street: String,
    pub town: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

impl Address {
    /// Printable lines: the street, then `town, city, state zip` with blank
    /// parts left out. Empty when nothing is filled in.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(2);
        if !self.street.trim().is_empty() {
            lines.push(self.street.trim().to_string());
        }

        let mut locality = [&self.town, &self.city, &self.state]
            .into_iter()
            .map(|part| part.trim())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(", ");
        let zip = self.zip.trim();
        if !zip.is_empty() {
            if !locality.is_empty() {
                locality.push(' ');
            }
            locality.push_str(zip);
        }
        if !locality.is_empty() {
            lines.push(locality);
        }
        lines
    }
}

/// The contractor or the client named on an estimate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Party {
    pub name: String,
    pub address: Address,
    pub phone: String,
}

impl Party {
    pub fn is_empty(&self) -> bool {
        self.lines().is_empty()
    }

    /// Name, address lines and formatted phone, skipping blanks.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if !self.name.trim().is_empty() {
            lines.push(self.name.trim().to_string());
        }
        lines.extend(self.address.lines());
        let phone = format_phone(&self.phone);
        if !phone.is_empty() {
            lines.push(phone);
        }
        lines
    }
}

/// Formats a ten-digit number as `(XXX) XXX-XXXX`, ignoring punctuation.
///
/// Anything that is not exactly ten digits is returned trimmed, as entered.
pub fn format_phone(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.len() != 10 {
        return raw.trim().to_string();
    }
    format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..])
}

/// Identifying information printed above the line items of an estimate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimateHeader {
    pub title: String,
    pub project_title: String,
    /// The contractor issuing the estimate.
    pub company: Party,
    pub client: Party,
}

impl Default for EstimateHeader {
    fn default() -> Self {
        Self {
            title: DEFAULT_ESTIMATE_TITLE.to_string(),
            project_title: String::new(),
            company: Party::default(),
            client: Party::default(),
        }
    }
}
