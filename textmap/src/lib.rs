//! Persistent ordered maps, and the two helpers that the rest of the residency project uses to
//! combine text-keyed maps: [`merge`] and [`add`].
//!
//! Every operation that would normally modify a map returns a new one instead. The maps are
//! backed by `rpds` red-black trees, so the old and new versions share most of their structure
//! and cloning is cheap.

use {
    rpds::RedBlackTreeMap,
    serde::{Deserialize, Serialize},
    std::{borrow::Borrow, fmt},
};

/// A persistent map, ordered by key.
#[derive(Deserialize, Serialize)]
#[serde(
    transparent,
    bound(
        serialize = "K: Ord + Serialize, V: Serialize",
        deserialize = "K: Ord + Deserialize<'de>, V: Deserialize<'de>"
    )
)]
pub struct Map<K, V> {
    map: RedBlackTreeMap<K, V>,
}

/// A map from text to text.
pub type TextMap = Map<String, String>;

/// Returns a map containing every entry of `a` and every entry of `b`.
///
/// If a key is present in both, the value from `a` is kept.
pub fn merge(a: &TextMap, b: &TextMap) -> TextMap {
    a.union(b)
}

/// Returns a copy of `map` with `key` bound to `value`, unless `key` was already bound (in which
/// case the result is identical to `map`).
pub fn add(map: &TextMap, key: impl Into<String>, value: impl Into<String>) -> TextMap {
    map.insert_if_absent(key.into(), value.into())
}

impl<K: Ord, V> Map<K, V> {
    /// Creates an empty map.
    pub fn new() -> Map<K, V> {
        Map {
            map: RedBlackTreeMap::new(),
        }
    }

    /// Returns the value bound to `key`, if there is one.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.map.get(key)
    }

    /// Is there a binding for `key`?
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.map.contains_key(key)
    }

    /// The number of bindings.
    pub fn len(&self) -> usize {
        self.map.size()
    }

    /// Returns true if there are no bindings.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterates over the entries in increasing order of keys.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.map.iter()
    }

    /// Iterates over the keys in increasing order.
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.map.keys()
    }

    /// Iterates over the values, in increasing order of their keys.
    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.map.values()
    }

    /// Returns a new map in which `key` is bound to `val`, replacing any previous binding.
    pub fn insert(&self, key: K, val: V) -> Map<K, V> {
        Map {
            map: self.map.insert(key, val),
        }
    }

    /// Returns a new map in which `key` is bound to `val`, unless `key` is already bound.
    pub fn insert_if_absent(&self, key: K, val: V) -> Map<K, V> {
        if self.map.contains_key(&key) {
            self.clone()
        } else {
            self.insert(key, val)
        }
    }

    /// Returns a new map without any binding for `key`.
    pub fn remove<Q>(&self, key: &Q) -> Map<K, V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        Map {
            map: self.map.remove(key),
        }
    }

    /// Returns the union of `self` and `other`. Where both have a binding for the same key,
    /// the one in `self` wins.
    pub fn union(&self, other: &Map<K, V>) -> Map<K, V>
    where
        K: Clone,
        V: Clone,
    {
        let mut map = self.map.clone();
        for (k, v) in other.map.iter() {
            if !map.contains_key(k) {
                map.insert_mut(k.clone(), v.clone());
            }
        }
        Map { map }
    }
}

impl<K: Ord, V> Clone for Map<K, V> {
    fn clone(&self) -> Map<K, V> {
        Map {
            map: self.map.clone(),
        }
    }
}

impl<K: Ord, V> Default for Map<K, V> {
    fn default() -> Map<K, V> {
        Map::new()
    }
}

impl<K: Ord, V: PartialEq> PartialEq for Map<K, V> {
    fn eq(&self, other: &Map<K, V>) -> bool {
        self.map == other.map
    }
}

impl<K: Ord, V: Eq> Eq for Map<K, V> {}

impl<K: Ord + fmt::Debug, V: fmt::Debug> fmt::Debug for Map<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_map().entries(self.map.iter()).finish()
    }
}

// Later duplicates overwrite earlier ones, the same as collecting into a `BTreeMap`.
impl<K: Ord, V> FromIterator<(K, V)> for Map<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Map<K, V> {
        Map {
            map: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        pretty_assertions::assert_eq,
        proptest::{collection::btree_map, prelude::*},
        std::collections::BTreeMap,
    };

    fn text_map(entries: &[(&str, &str)]) -> TextMap {
        entries
            .iter()
            .map(|&(k, v)| (k.to_owned(), v.to_owned()))
            .collect()
    }

    fn arb_text_map(max_size: usize) -> impl Strategy<Value = TextMap> {
        // A small key alphabet, so that two random maps are likely to collide.
        btree_map("[a-e]{1,2}", "[0-9]{1,3}", 0..max_size)
            .prop_map(|m: BTreeMap<String, String>| m.into_iter().collect())
    }

    #[test]
    fn merge_disjoint() {
        let a = text_map(&[("x", "1")]);
        let b = text_map(&[("y", "2")]);
        assert_eq!(merge(&a, &b), text_map(&[("x", "1"), ("y", "2")]));
    }

    #[test]
    fn merge_collision_keeps_first() {
        let a = text_map(&[("x", "1")]);
        let b = text_map(&[("x", "9"), ("y", "2")]);
        assert_eq!(merge(&a, &b), text_map(&[("x", "1"), ("y", "2")]));
    }

    #[test]
    fn merge_with_empty() {
        let a = text_map(&[("x", "1")]);
        assert_eq!(merge(&a, &TextMap::new()), a);
        assert_eq!(merge(&TextMap::new(), &a), a);
    }

    #[test]
    fn add_to_empty() {
        assert_eq!(add(&TextMap::new(), "h1", "s1"), text_map(&[("h1", "s1")]));
    }

    #[test]
    fn add_existing_is_noop() {
        let a = text_map(&[("h1", "s1")]);
        let b = add(&a, "h1", "s2");
        assert_eq!(b.get("h1").map(String::as_str), Some("s1"));
        assert_eq!(b, a);
    }

    #[test]
    fn insert_overwrites() {
        let a = text_map(&[("h1", "s1")]);
        let b = a.insert("h1".to_owned(), "s2".to_owned());
        assert_eq!(b.get("h1").map(String::as_str), Some("s2"));
        assert_eq!(a.get("h1").map(String::as_str), Some("s1"));
    }

    #[test]
    fn remove_leaves_original() {
        let a = text_map(&[("x", "1"), ("y", "2")]);
        let b = a.remove("x");
        assert_eq!(b, text_map(&[("y", "2")]));
        assert_eq!(a.len(), 2);
        assert_eq!(a.remove("missing"), a);
    }

    #[test]
    fn iterates_in_key_order() {
        let a = text_map(&[("c", "3"), ("a", "1"), ("b", "2")]);
        let keys = a.keys().map(String::as_str).collect::<Vec<_>>();
        assert_eq!(keys, vec!["a", "b", "c"]);
        let values = a.values().map(String::as_str).collect::<Vec<_>>();
        assert_eq!(values, vec!["1", "2", "3"]);
    }

    #[test]
    fn debug_looks_like_a_map() {
        let a = text_map(&[("x", "1")]);
        assert_eq!(format!("{a:?}"), r#"{"x": "1"}"#);
    }

    #[test]
    fn serializes_as_plain_mapping() {
        let a = text_map(&[("h1", "s1"), ("h2", "s2")]);
        let yaml = serde_yaml::to_string(&a).unwrap();
        assert_eq!(yaml, "h1: s1\nh2: s2\n");
        let back: TextMap = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back, a);
    }

    proptest! {
        #[test]
        fn merge_contains_all_keys(ref a in arb_text_map(8), ref b in arb_text_map(8)) {
            let m = merge(a, b);
            for k in a.keys().chain(b.keys()) {
                prop_assert!(m.contains_key(k));
            }
            for k in m.keys() {
                prop_assert!(a.contains_key(k) || b.contains_key(k));
            }
        }

        #[test]
        fn merge_prefers_first(ref a in arb_text_map(8), ref b in arb_text_map(8)) {
            let m = merge(a, b);
            for (k, v) in b.iter() {
                let expected = a.get(k).unwrap_or(v);
                prop_assert_eq!(m.get(k), Some(expected));
            }
        }

        #[test]
        fn merge_does_not_mutate(ref a in arb_text_map(8), ref b in arb_text_map(8)) {
            let a_before = a.iter().map(|(k, v)| (k.clone(), v.clone())).collect::<Vec<_>>();
            let b_before = b.iter().map(|(k, v)| (k.clone(), v.clone())).collect::<Vec<_>>();
            let _ = merge(a, b);
            let a_after = a.iter().map(|(k, v)| (k.clone(), v.clone())).collect::<Vec<_>>();
            let b_after = b.iter().map(|(k, v)| (k.clone(), v.clone())).collect::<Vec<_>>();
            prop_assert_eq!(a_before, a_after);
            prop_assert_eq!(b_before, b_after);
        }

        #[test]
        fn add_absent_grows(ref a in arb_text_map(8), k in "[f-h]{1,2}", v in "[0-9]{1,3}") {
            let b = add(a, k.clone(), v.clone());
            prop_assert_eq!(b.get(&k), Some(&v));
            prop_assert_eq!(b.len(), a.len() + 1);
            prop_assert!(!a.contains_key(&k));
        }

        #[test]
        fn add_present_is_identity(ref a in arb_text_map(8), v in "[0-9]{1,3}") {
            let before = a.clone();
            for k in a.keys() {
                prop_assert_eq!(&add(a, k.clone(), v.clone()), a);
            }
            prop_assert_eq!(a, &before);
        }
    }
}
