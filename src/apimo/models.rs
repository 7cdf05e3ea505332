use serde::de::{DeserializeOwned, IgnoredAny};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

// property (only the fields the site uses)
//  ├── id, reference
//  ├── type, category, status
//  ├── price      { value } | scalar
//  ├── area       { total } | scalar
//  ├── rooms, bedrooms
//  ├── floor      { value } | scalar
//  ├── city       { name }  | string
//  ├── address
//  │    └── city
//  ├── images[]
//  │    ├── rank
//  │    └── url | thumb_url | src
//  ├── description { fr } | string
//  ├── dpe, ges   { letter } | string
//  ├── construction_year, orientation
//  └── created_at, updated_at

// Every field decodes on its own: a value of the wrong shape is dropped
// (`None`) instead of rejecting the whole record.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawListing {
    #[serde(deserialize_with = "lenient")]
    pub id: Option<Scalar>,
    #[serde(deserialize_with = "lenient")]
    pub reference: Option<Scalar>,

    #[serde(rename = "type", deserialize_with = "lenient")]
    pub type_code: Option<Scalar>,
    #[serde(deserialize_with = "lenient")]
    pub category: Option<Scalar>,
    #[serde(deserialize_with = "lenient")]
    pub status: Option<Scalar>,

    #[serde(deserialize_with = "lenient")]
    pub price: Option<PriceField>,
    #[serde(deserialize_with = "lenient")]
    pub area: Option<AreaField>,
    #[serde(deserialize_with = "lenient")]
    pub rooms: Option<Scalar>,
    #[serde(deserialize_with = "lenient")]
    pub bedrooms: Option<Scalar>,
    #[serde(deserialize_with = "lenient")]
    pub floor: Option<FloorField>,

    #[serde(deserialize_with = "lenient")]
    pub city: Option<CityField>,
    #[serde(deserialize_with = "lenient")]
    pub address: Option<Address>,

    #[serde(deserialize_with = "lenient_list")]
    pub images: Option<Vec<RawImage>>,
    #[serde(deserialize_with = "lenient")]
    pub description: Option<DescriptionField>,

    #[serde(deserialize_with = "lenient")]
    pub dpe: Option<EnergyRating>,
    #[serde(deserialize_with = "lenient")]
    pub ges: Option<EnergyRating>,

    pub construction_year: Option<Value>,
    pub orientation: Option<Value>,

    pub created_at: Option<Value>,
    pub updated_at: Option<Value>,
}

/// Decode `T` if the value has its shape, `None` otherwise.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Keep the entries of a list that decode as `T`, skip the rest.
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let Value::Array(entries) = Value::deserialize(deserializer)? else {
        return Ok(None);
    };

    Ok(Some(
        entries
            .into_iter()
            .filter_map(|entry| serde_json::from_value(entry).ok())
            .collect(),
    ))
}

/// A loosely typed JSON scalar. The provider is not consistent about
/// sending numbers as numbers.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    Int(i64),
    Float(f64),
    Text(String),
    Bool(bool),
}

impl Scalar {
    /// Falsy values are `0`, `""` and `false`.
    pub fn is_truthy(&self) -> bool {
        match self {
            Scalar::Int(n) => *n != 0,
            Scalar::Float(n) => *n != 0.0 && !n.is_nan(),
            Scalar::Text(s) => !s.is_empty(),
            Scalar::Bool(b) => *b,
        }
    }

    /// Leading-integer parse: floats truncate, strings keep their leading
    /// digits (`"950.50 EUR"` -> 950), anything else is `None`.
    pub fn parse_int(&self) -> Option<i64> {
        match self {
            Scalar::Int(n) => Some(*n),
            Scalar::Float(n) if n.is_finite() => Some(n.trunc() as i64),
            Scalar::Float(_) => None,
            Scalar::Text(s) => parse_leading_int(s),
            Scalar::Bool(_) => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Scalar::Int(n) => Some(*n as f64),
            Scalar::Float(n) => Some(*n),
            Scalar::Text(s) => s.trim().parse().ok(),
            Scalar::Bool(_) => None,
        }
    }

    /// Lookup key for the code tables. Accepts `2`, `2.0` and `"2"`.
    pub fn as_code(&self) -> Option<i64> {
        match self {
            Scalar::Int(n) => Some(*n),
            Scalar::Float(n) if n.fract() == 0.0 => Some(*n as i64),
            Scalar::Text(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn is_one(&self) -> bool {
        match self {
            Scalar::Int(n) => *n == 1,
            Scalar::Float(n) => *n == 1.0,
            _ => false,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Int(n) => write!(f, "{n}"),
            Scalar::Float(n) if n.fract() == 0.0 && n.abs() < 1e15 => write!(f, "{}", *n as i64),
            Scalar::Float(n) => write!(f, "{n}"),
            Scalar::Text(s) => write!(f, "{s}"),
            Scalar::Bool(b) => write!(f, "{b}"),
        }
    }
}

fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (sign, digits) = match s.as_bytes().first() {
        Some(b'-') => (-1, &s[1..]),
        Some(b'+') => (1, &s[1..]),
        _ => (1, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum PriceField {
    Detailed { value: Option<Scalar> },
    Plain(Scalar),
    Unknown(IgnoredAny),
}

impl PriceField {
    pub fn value(&self) -> Option<&Scalar> {
        match self {
            PriceField::Detailed { value } => value.as_ref(),
            PriceField::Plain(v) => Some(v),
            PriceField::Unknown(_) => None,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum AreaField {
    Detailed { total: Option<Scalar> },
    Plain(Scalar),
    Unknown(IgnoredAny),
}

impl AreaField {
    pub fn total(&self) -> Option<&Scalar> {
        match self {
            AreaField::Detailed { total } => total.as_ref(),
            AreaField::Plain(v) => Some(v),
            AreaField::Unknown(_) => None,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum CityField {
    Named { name: Option<String> },
    Plain(String),
    Unknown(IgnoredAny),
}

/// `floor` comes either bare or as `{ type, value }`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum FloorField {
    Detailed { value: Option<Scalar> },
    Plain(Scalar),
}

impl FloorField {
    pub fn value(&self) -> Option<&Scalar> {
        match self {
            FloorField::Detailed { value } => value.as_ref(),
            FloorField::Plain(v) => Some(v),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Address {
    #[serde(deserialize_with = "lenient")]
    pub city: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawImage {
    #[serde(deserialize_with = "lenient")]
    pub rank: Option<Scalar>,
    #[serde(deserialize_with = "lenient")]
    pub url: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub thumb_url: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub src: Option<String>,
}

impl RawImage {
    pub fn rank(&self) -> f64 {
        self.rank.as_ref().and_then(Scalar::as_f64).unwrap_or(0.0)
    }

    /// First non-empty of `url`, `thumb_url`, `src`.
    pub fn best_url(&self) -> Option<&str> {
        [&self.url, &self.thumb_url, &self.src]
            .into_iter()
            .filter_map(|u| u.as_deref())
            .find(|u| !u.is_empty())
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum DescriptionField {
    Localized { fr: Option<String> },
    Plain(String),
    Unknown(IgnoredAny),
}

impl DescriptionField {
    pub fn text(&self) -> Option<&str> {
        match self {
            DescriptionField::Localized { fr } => fr.as_deref(),
            DescriptionField::Plain(s) => Some(s),
            DescriptionField::Unknown(_) => None,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum EnergyRating {
    Graded { letter: Option<String> },
    Plain(String),
    Unknown(IgnoredAny),
}

impl EnergyRating {
    pub fn letter(&self) -> Option<&str> {
        let letter = match self {
            EnergyRating::Graded { letter } => letter.as_deref(),
            EnergyRating::Plain(s) => Some(s.as_str()),
            EnergyRating::Unknown(_) => None,
        };
        letter.filter(|l| !l.is_empty())
    }
}

/// Top-level shapes the property list endpoint has been seen to return,
/// tried in this order.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum PropertiesEnvelope {
    Bare(Vec<Value>),
    Properties { properties: Vec<Value> },
    Items { items: Vec<Value> },
}

impl PropertiesEnvelope {
    pub fn into_entries(self) -> Vec<Value> {
        match self {
            PropertiesEnvelope::Bare(v) => v,
            PropertiesEnvelope::Properties { properties } => properties,
            PropertiesEnvelope::Items { items } => items,
        }
    }
}
