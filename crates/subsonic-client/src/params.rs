//! Parameter canonicalization.
//!
//! Subsonic methods take flat query parameters. Lists are sent as repeated
//! keys (`songId=1&songId=2`), and anything left unset is omitted entirely
//! rather than sent empty.

use tracing::warn;

/// Protocol version parameter.
pub const PARAM_VERSION: &str = "v";
/// Client identifier parameter.
pub const PARAM_CLIENT: &str = "c";
/// Response format parameter.
pub const PARAM_FORMAT: &str = "f";
/// Username parameter (password auth).
pub const PARAM_USERNAME: &str = "u";
/// Token parameter (password auth).
pub const PARAM_TOKEN: &str = "t";
/// Salt parameter (password auth).
pub const PARAM_SALT: &str = "s";
/// Clear-text or hex password parameter. Never sent by this client.
pub const PARAM_PASSWORD: &str = "p";
/// API key parameter (OpenSubsonic `apiKeyAuthentication`).
pub const PARAM_API_KEY: &str = "apiKey";

/// Keys owned by the client. User-supplied values for these are dropped.
pub const RESERVED_KEYS: [&str; 8] = [
    PARAM_VERSION,
    PARAM_CLIENT,
    PARAM_FORMAT,
    PARAM_USERNAME,
    PARAM_TOKEN,
    PARAM_SALT,
    PARAM_PASSWORD,
    PARAM_API_KEY,
];

/// A single parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    /// Absent; the key is skipped during canonicalization.
    Null,
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    /// Emitted as one pair per element, in order.
    List(Vec<ParamValue>),
}

impl ParamValue {
    /// Returns true if this value produces no pairs.
    pub fn is_null(&self) -> bool {
        matches!(self, ParamValue::Null)
    }

    fn push_pairs(&self, key: &str, out: &mut Vec<(String, String)>) {
        match self {
            ParamValue::Null => {}
            ParamValue::Text(s) => out.push((key.to_string(), s.clone())),
            ParamValue::Int(n) => out.push((key.to_string(), n.to_string())),
            ParamValue::Float(n) => out.push((key.to_string(), n.to_string())),
            ParamValue::Bool(b) => out.push((key.to_string(), b.to_string())),
            ParamValue::List(items) => {
                for item in items {
                    item.push_pairs(key, out);
                }
            }
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Text(value)
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        ParamValue::Text(value.clone())
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

impl From<f32> for ParamValue {
    fn from(value: f32) -> Self {
        ParamValue::Float(f64::from(value))
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Float(value)
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ParamValue {
                fn from(value: $ty) -> Self {
                    ParamValue::Int(i64::from(value))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for ParamValue {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(n) => ParamValue::Int(n),
            Err(_) => ParamValue::Text(value.to_string()),
        }
    }
}

impl From<usize> for ParamValue {
    fn from(value: usize) -> Self {
        ParamValue::from(value as u64)
    }
}

impl<T: Into<ParamValue>> From<Option<T>> for ParamValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(ParamValue::Null, Into::into)
    }
}

impl<T: Into<ParamValue>> From<Vec<T>> for ParamValue {
    fn from(values: Vec<T>) -> Self {
        ParamValue::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Clone + Into<ParamValue>> From<&[T]> for ParamValue {
    fn from(values: &[T]) -> Self {
        ParamValue::List(values.iter().cloned().map(Into::into).collect())
    }
}

/// Ordered method arguments.
///
/// Keys keep their first insertion position; inserting an existing key
/// replaces its value in place.
///
/// ```rust
/// use opensubsonic_client::Params;
///
/// let params = Params::new()
///     .with("a", None::<String>)
///     .with("b", vec![1, 2])
///     .with("c", false);
///
/// let pairs = params.to_pairs();
/// assert_eq!(
///     pairs,
///     vec![
///         ("b".to_string(), "1".to_string()),
///         ("b".to_string(), "2".to_string()),
///         ("c".to_string(), "false".to_string()),
///     ]
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    entries: Vec<(String, ParamValue)>,
}

impl Params {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert or replace a value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Look up a value by key.
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Number of keys, including keys holding `Null`.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no keys were inserted.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over keys and values in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Flatten into ordered `(key, value)` pairs, skipping absent values.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut out = Vec::with_capacity(self.entries.len());
        for (key, value) in &self.entries {
            value.push_pairs(key, &mut out);
        }
        out
    }
}

impl<K: Into<String>, V: Into<ParamValue>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

/// Returns true if the key is owned by the client.
pub fn is_reserved_key(key: &str) -> bool {
    RESERVED_KEYS.contains(&key)
}

/// Build the full ordered parameter list for one request.
///
/// Fixed parameters come first, caller parameters next, auth parameters
/// last. Caller parameters using a reserved key are dropped.
pub(crate) fn canonicalize(
    method: &str,
    version: &str,
    client_name: &str,
    params: &Params,
    auth: Vec<(String, String)>,
) -> Vec<(String, String)> {
    let mut pairs = vec![
        (PARAM_VERSION.to_string(), version.to_string()),
        (PARAM_CLIENT.to_string(), client_name.to_string()),
        (PARAM_FORMAT.to_string(), "json".to_string()),
    ];

    for (key, value) in params.to_pairs() {
        if is_reserved_key(&key) {
            warn!(method, key = %key, "Dropping caller parameter that shadows a reserved key");
            continue;
        }
        pairs.push((key, value));
    }

    pairs.extend(auth);
    pairs
}
