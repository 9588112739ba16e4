use std::collections::BTreeMap;
use std::collections::btree_map::Iter;
use std::fmt;
use std::str::FromStr;
use errors::*;

/// Value of a single property
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Count(usize),
    Text(String),
    Real(f64),
    Bool(bool),
    Nested(PropertySet),
}

/// Named options of an inference algorithm, kept in ascending key order.
///
/// The textual form is `[key1=value1,key2=value2,...]`, where a value may itself be a bracketed
/// property set. Parsing keeps every value as `PropertyValue::Text`; typed getters convert it
/// on demand.
///
/// ```
/// extern crate dgm;
/// use dgm::properties::PropertySet;
///
/// let opts: PropertySet = "[maxiter=100,inner=[verbose=1]]".parse().unwrap();
/// assert_eq!(opts.get_as::<usize>("maxiter").unwrap(), 100);
/// assert_eq!(opts.get_as::<PropertySet>("inner").unwrap().get_as::<usize>("verbose").unwrap(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PropertySet {
    props: BTreeMap<String, PropertyValue>
}

impl PropertySet {
    pub fn new() -> PropertySet {
        PropertySet { props: BTreeMap::new() }
    }

    pub fn set<K: Into<String>, V: Into<PropertyValue>>(&mut self, key: K, value: V) -> &mut PropertySet {
        self.props.insert(key.into(), value.into());
        self
    }

    pub fn with<K: Into<String>, V: Into<PropertyValue>>(mut self, key: K, value: V) -> PropertySet {
        self.set(key, value);
        self
    }

    pub fn has_key(&self, key: &str) -> bool {
        self.props.contains_key(key)
    }

    pub fn keys(&self) -> Vec<&str> {
        self.props.keys().map(|k| k.as_str()).collect()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.props.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    pub fn iter(&self) -> Iter<String, PropertyValue> {
        self.props.iter()
    }

    pub fn get(&self, key: &str) -> Result<&PropertyValue> {
        self.props.get(key).ok_or_else(|| ErrorKind::UnknownProperty(key.to_owned()).into())
    }

    /// Typed retrieval; text values are parsed into the requested type
    pub fn get_as<T: FromProperty>(&self, key: &str) -> Result<T> {
        T::from_property(key, self.get(key)?)
    }
}

/// Conversion from a property value into a concrete type
pub trait FromProperty: Sized {
    fn from_property(key: &str, value: &PropertyValue) -> Result<Self>;
}

fn mismatch(key: &str, value: &PropertyValue, expected: &str) -> Error {
    ErrorKind::UnknownProperty(format!("{} (cannot read `{}` as {})", key, value, expected)).into()
}

impl FromProperty for usize {
    fn from_property(key: &str, value: &PropertyValue) -> Result<usize> {
        match *value {
            PropertyValue::Count(n) => Ok(n),
            PropertyValue::Text(ref s) => s.trim().parse().map_err(|_| mismatch(key, value, "a count")),
            _ => Err(mismatch(key, value, "a count"))
        }
    }
}

impl FromProperty for f64 {
    fn from_property(key: &str, value: &PropertyValue) -> Result<f64> {
        match *value {
            PropertyValue::Real(x) => Ok(x),
            PropertyValue::Count(n) => Ok(n as f64),
            PropertyValue::Text(ref s) => s.trim().parse().map_err(|_| mismatch(key, value, "a real")),
            _ => Err(mismatch(key, value, "a real"))
        }
    }
}

impl FromProperty for bool {
    fn from_property(key: &str, value: &PropertyValue) -> Result<bool> {
        match *value {
            PropertyValue::Bool(b) => Ok(b),
            PropertyValue::Text(ref s) => match s.trim() {
                "1" | "true" => Ok(true),
                "0" | "false" => Ok(false),
                _ => Err(mismatch(key, value, "a boolean"))
            },
            _ => Err(mismatch(key, value, "a boolean"))
        }
    }
}

impl FromProperty for String {
    fn from_property(_key: &str, value: &PropertyValue) -> Result<String> {
        match *value {
            PropertyValue::Text(ref s) => Ok(s.clone()),
            ref other => Ok(other.to_string())
        }
    }
}

impl FromProperty for PropertySet {
    fn from_property(key: &str, value: &PropertyValue) -> Result<PropertySet> {
        match *value {
            PropertyValue::Nested(ref ps) => Ok(ps.clone()),
            PropertyValue::Text(ref s) => s.parse(),
            _ => Err(mismatch(key, value, "a property set"))
        }
    }
}

impl From<usize> for PropertyValue {
    fn from(n: usize) -> PropertyValue {
        PropertyValue::Count(n)
    }
}

impl From<f64> for PropertyValue {
    fn from(x: f64) -> PropertyValue {
        PropertyValue::Real(x)
    }
}

impl From<bool> for PropertyValue {
    fn from(b: bool) -> PropertyValue {
        PropertyValue::Bool(b)
    }
}

impl From<String> for PropertyValue {
    fn from(s: String) -> PropertyValue {
        PropertyValue::Text(s)
    }
}

impl<'a> From<&'a str> for PropertyValue {
    fn from(s: &'a str) -> PropertyValue {
        PropertyValue::Text(s.to_owned())
    }
}

impl From<PropertySet> for PropertyValue {
    fn from(ps: PropertySet) -> PropertyValue {
        PropertyValue::Nested(ps)
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            PropertyValue::Count(n) => write!(f, "{}", n),
            PropertyValue::Text(ref s) => write!(f, "{}", s),
            PropertyValue::Real(x) => write!(f, "{}", x),
            PropertyValue::Bool(b) => write!(f, "{}", if b { 1 } else { 0 }),
            PropertyValue::Nested(ref ps) => write!(f, "{}", ps),
        }
    }
}

impl fmt::Display for PropertySet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[")?;
        for (i, (key, value)) in self.props.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}={}", key, value)?;
        }
        write!(f, "]")
    }
}

impl FromStr for PropertySet {
    type Err = Error;

    fn from_str(text: &str) -> Result<PropertySet> {
        let s = text.trim();
        let bytes = s.as_bytes();
        if bytes.len() < 2 || bytes[0] != b'[' || bytes[bytes.len() - 1] != b']' {
            bail!(ErrorKind::MalformedProperty(s.to_owned()));
        }

        let mut ps = PropertySet::new();
        let n = bytes.len() - 1;
        let mut token_start = 1;
        while token_start < n {
            // key runs until '='
            let mut token_end = token_start;
            while token_end < n && bytes[token_end] != b'=' {
                token_end += 1;
            }
            if token_end == n || token_end == token_start {
                bail!(ErrorKind::MalformedProperty(s.to_owned()));
            }
            let key = &s[token_start..token_end];

            // value runs until the next ',' outside of nested brackets
            token_start = token_end + 1;
            let mut level: i64 = 0;
            token_end = token_start;
            while token_end < n {
                match bytes[token_end] {
                    b'[' => level += 1,
                    b']' => level -= 1,
                    b',' if level == 0 => break,
                    _ => {}
                }
                token_end += 1;
            }
            if level != 0 {
                bail!(ErrorKind::MalformedProperty(s.to_owned()));
            }
            ps.set(key, &s[token_start..token_end]);

            token_start = token_end + 1;
        }

        Ok(ps)
    }
}
