use std::collections::HashMap;

/// Name set keyed by upper-cased spelling that remembers the first original spelling.
#[derive(Debug, Clone)]
pub struct CaseInsensitiveSet {
    map: HashMap<String, String>,
}

impl CaseInsensitiveSet {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut map = HashMap::new();
        for name in names {
            let name = name.as_ref();
            let key = name.trim().trim_matches('\u{feff}').to_uppercase();
            map.entry(key).or_insert_with(|| name.to_string());
        }
        Self { map }
    }

    /// Original spelling for `name` (byte order mark included), if present.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.map.get(&name.trim().to_uppercase()).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_first_spelling() {
        let set = CaseInsensitiveSet::new(["Stars", "STARS", "name"]);
        assert_eq!(set.get("stars"), Some("Stars"));
        assert_eq!(set.get(" NAME "), Some("name"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn ignores_byte_order_mark_in_keys() {
        let set = CaseInsensitiveSet::new(["\u{feff}business_id"]);
        assert_eq!(set.get("business_id"), Some("\u{feff}business_id"));
        assert!(!set.contains("latitude"));
    }
}
