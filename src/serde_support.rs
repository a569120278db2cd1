//! Serde implementations for the public containers.
//!
//! Associative containers serialize as maps, everything else as sequences.
//! Deserialization rebuilds through the ordinary insertion paths, so tree
//! shape and hash layout come out canonical rather than mirrored.

use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

use serde::de::{MapAccess, Visitor};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::deque::Deque;
use crate::hash::{HashSet, HashTable, LinkedHashTable};
use crate::heap::BinaryHeap;
use crate::list::{DoublyLinkedList, SinglyLinkedList};
use crate::tree::{TreeMap, TreeSet};
use crate::trie::Trie;

impl<K: Serialize, V: Serialize> Serialize for TreeMap<K, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (k, v) in self.iter() {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

struct TreeMapVisitor<K, V>(PhantomData<(K, V)>);

impl<'de, K, V> Visitor<'de> for TreeMapVisitor<K, V>
where
    K: Deserialize<'de> + Ord,
    V: Deserialize<'de>,
{
    type Value = TreeMap<K, V>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map with ordered keys")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut map = TreeMap::new();
        while let Some((k, v)) = access.next_entry()? {
            map.insert(k, v).map_err(serde::de::Error::custom)?;
        }
        Ok(map)
    }
}

impl<'de, K, V> Deserialize<'de> for TreeMap<K, V>
where
    K: Deserialize<'de> + Ord,
    V: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(TreeMapVisitor(PhantomData))
    }
}

impl<T: Serialize> Serialize for TreeSet<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for x in self.iter() {
            seq.serialize_element(x)?;
        }
        seq.end()
    }
}

impl<'de, T: Deserialize<'de> + Ord> Deserialize<'de> for TreeSet<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let values = Vec::<T>::deserialize(deserializer)?;
        TreeSet::from_elements(values).map_err(serde::de::Error::custom)
    }
}

impl<K: Serialize, V: Serialize> Serialize for HashTable<K, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (k, v) in self.iter() {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

struct HashTableVisitor<K, V>(PhantomData<(K, V)>);

impl<'de, K, V> Visitor<'de> for HashTableVisitor<K, V>
where
    K: Deserialize<'de> + Hash + Eq,
    V: Deserialize<'de>,
{
    type Value = HashTable<K, V>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map with hashable keys")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut table = HashTable::new();
        while let Some((k, v)) = access.next_entry()? {
            table.set(k, v);
        }
        Ok(table)
    }
}

impl<'de, K, V> Deserialize<'de> for HashTable<K, V>
where
    K: Deserialize<'de> + Hash + Eq,
    V: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(HashTableVisitor(PhantomData))
    }
}

impl<K: Serialize, V: Serialize> Serialize for LinkedHashTable<K, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (k, v) in self.iter() {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

struct LinkedHashTableVisitor<K, V>(PhantomData<(K, V)>);

impl<'de, K, V> Visitor<'de> for LinkedHashTableVisitor<K, V>
where
    K: Deserialize<'de> + Hash + Eq,
    V: Deserialize<'de>,
{
    type Value = LinkedHashTable<K, V>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map with hashable keys")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut table = LinkedHashTable::new();
        while let Some((k, v)) = access.next_entry()? {
            table.set(k, v);
        }
        Ok(table)
    }
}

impl<'de, K, V> Deserialize<'de> for LinkedHashTable<K, V>
where
    K: Deserialize<'de> + Hash + Eq,
    V: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(LinkedHashTableVisitor(PhantomData))
    }
}

impl<T: Serialize> Serialize for HashSet<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for x in self.iter() {
            seq.serialize_element(x)?;
        }
        seq.end()
    }
}

impl<'de, T: Deserialize<'de> + Hash + Eq> Deserialize<'de> for HashSet<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(HashSet::from_elements(Vec::<T>::deserialize(deserializer)?))
    }
}

impl<T: Serialize> Serialize for Deque<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for x in self.iter() {
            seq.serialize_element(x)?;
        }
        seq.end()
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Deque<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Deque::from_elements(Vec::<T>::deserialize(deserializer)?))
    }
}

impl<T: Serialize> Serialize for SinglyLinkedList<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for x in self.iter() {
            seq.serialize_element(x)?;
        }
        seq.end()
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for SinglyLinkedList<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(SinglyLinkedList::from_elements(Vec::<T>::deserialize(deserializer)?))
    }
}

impl<T: Serialize> Serialize for DoublyLinkedList<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for x in self.iter() {
            seq.serialize_element(x)?;
        }
        seq.end()
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for DoublyLinkedList<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(DoublyLinkedList::from_elements(Vec::<T>::deserialize(deserializer)?))
    }
}

impl<T: Serialize> Serialize for BinaryHeap<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for x in self.iter() {
            seq.serialize_element(x)?;
        }
        seq.end()
    }
}

impl<'de, T: Deserialize<'de> + Ord> Deserialize<'de> for BinaryHeap<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(BinaryHeap::from_vec(Vec::<T>::deserialize(deserializer)?))
    }
}

impl Serialize for Trie {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let words = self.words();
        let mut seq = serializer.serialize_seq(Some(words.len()))?;
        for word in &words {
            seq.serialize_element(word)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for Trie {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Trie::from_words(Vec::<String>::deserialize(deserializer)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tree_map_round_trip() {
        let mut map = TreeMap::new();
        map.insert("b".to_string(), 2).unwrap();
        map.insert("a".to_string(), 1).unwrap();
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"a":1,"b":2}"#);

        let back: TreeMap<String, i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back.get(&"a".to_string()), Some(&1));
        assert_eq!(back.len(), 2);
    }

    #[test]
    fn test_linked_table_keeps_order() {
        let mut table = LinkedHashTable::new();
        table.set("z".to_string(), 26);
        table.set("a".to_string(), 1);
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(json, r#"{"z":26,"a":1}"#);

        let back: LinkedHashTable<String, i32> = serde_json::from_str(&json).unwrap();
        let keys: Vec<String> = back.keys().cloned().collect();
        assert_eq!(keys, vec!["z".to_string(), "a".to_string()]);
    }

    #[test]
    fn test_sequence_round_trips() {
        let deque = Deque::from_elements([1, 2, 3]);
        let json = serde_json::to_string(&deque).unwrap();
        assert_eq!(json, "[1,2,3]");
        let back: Deque<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back.to_vec(), vec![1, 2, 3]);

        let set = TreeSet::from_elements([3, 1, 2]).unwrap();
        assert_eq!(serde_json::to_string(&set).unwrap(), "[1,2,3]");

        let trie = Trie::from_words(["b", "a"]);
        let back: Trie = serde_json::from_str(&serde_json::to_string(&trie).unwrap()).unwrap();
        assert!(back.has("a") && back.has("b"));
    }
}
