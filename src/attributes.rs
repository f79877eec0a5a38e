use indexmap::IndexMap;
use std::fmt;

/// Map an internal attribute identifier to its HTML spelling.
///
/// The table is closed: `clazz`, `xml_lang` and `http_equiv` are the only
/// identifiers that need translating because their HTML names are either
/// reserved words or not valid identifiers.
pub fn translate_attribute_name(name: &str) -> &str {
    match name {
        "clazz" => "class",
        "xml_lang" => "xml:lang",
        "http_equiv" => "http-equiv",
        other => other,
    }
}

/// Value stored under an attribute key
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Bool(bool),
    Int(i64),
    Text(String),
    List(Vec<String>),
    Null,
}

impl AttrValue {
    /// Falsy values (empty text, zero, `false`, empty list, `Null`) are
    /// omitted from rendered markup, key included.
    pub fn is_truthy(&self) -> bool {
        match self {
            AttrValue::Bool(b) => *b,
            AttrValue::Int(i) => *i != 0,
            AttrValue::Text(s) => !s.is_empty(),
            AttrValue::List(items) => !items.is_empty(),
            AttrValue::Null => false,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttrValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            AttrValue::List(items) => Some(items),
            _ => None,
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Bool(b) => write!(f, "{}", b),
            AttrValue::Int(i) => write!(f, "{}", i),
            AttrValue::Text(s) => f.write_str(s),
            AttrValue::List(items) => f.write_str(&items.join(" ")),
            AttrValue::Null => Ok(()),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Text(value)
    }
}

impl From<&String> for AttrValue {
    fn from(value: &String) -> Self {
        AttrValue::Text(value.clone())
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Bool(value)
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        AttrValue::Int(value)
    }
}

impl From<i32> for AttrValue {
    fn from(value: i32) -> Self {
        AttrValue::Int(i64::from(value))
    }
}

impl From<u32> for AttrValue {
    fn from(value: u32) -> Self {
        AttrValue::Int(i64::from(value))
    }
}

impl From<Vec<String>> for AttrValue {
    fn from(value: Vec<String>) -> Self {
        AttrValue::List(value)
    }
}

impl From<Vec<&str>> for AttrValue {
    fn from(value: Vec<&str>) -> Self {
        AttrValue::List(value.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for AttrValue {
    fn from(value: &[&str]) -> Self {
        AttrValue::List(value.iter().map(|s| s.to_string()).collect())
    }
}

impl<T: Into<AttrValue>> From<Option<T>> for AttrValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(AttrValue::Null)
    }
}

/// Attribute mapping of a component. Iteration follows insertion order;
/// overwriting a key keeps its original position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes(IndexMap<String, AttrValue>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.0.get(key)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<AttrValue>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Attributes::new();
        for (key, value) in iter {
            attrs.set(key, value);
        }
        attrs
    }
}

impl<K: Into<String>, V: Into<AttrValue>, const N: usize> From<[(K, V); N]> for Attributes {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_reserved_names() {
        assert_eq!(translate_attribute_name("clazz"), "class");
        assert_eq!(translate_attribute_name("xml_lang"), "xml:lang");
        assert_eq!(translate_attribute_name("http_equiv"), "http-equiv");
        assert_eq!(translate_attribute_name("href"), "href");
        assert_eq!(translate_attribute_name("class"), "class");
    }

    #[test]
    fn test_truthiness() {
        assert!(AttrValue::from("x").is_truthy());
        assert!(!AttrValue::from("").is_truthy());
        assert!(!AttrValue::from(0).is_truthy());
        assert!(AttrValue::from(100).is_truthy());
        assert!(!AttrValue::from(false).is_truthy());
        assert!(!AttrValue::Null.is_truthy());
        assert!(!AttrValue::from(Vec::<String>::new()).is_truthy());
        assert!(!AttrValue::from(None::<&str>).is_truthy());
    }

    #[test]
    fn test_display() {
        assert_eq!(AttrValue::from(42).to_string(), "42");
        assert_eq!(AttrValue::from(true).to_string(), "true");
        assert_eq!(AttrValue::from(vec!["a", "b"]).to_string(), "a b");
    }

    #[test]
    fn test_overwrite_keeps_position() {
        let mut attrs = Attributes::from([("a", "1"), ("b", "2")]);
        attrs.set("a", "3");
        let keys: Vec<&str> = attrs.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(attrs.get("a"), Some(&AttrValue::from("3")));
        assert!(!attrs.contains("c"));
    }
}
