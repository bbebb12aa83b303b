use indexmap::IndexMap;
use serde::de::{DeserializeOwned, Error as _};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// Name-to-anchor lookup, in first-insertion order of names.
pub type AnchorIds = IndexMap<String, String>;

/// Key order of a JSON object as it was read.
///
/// Typed fields are written back at the position they were read from, and
/// keys that were not in the input are appended after the rest. Key order
/// never takes part in equality.
#[derive(Debug, Default, Clone)]
struct KeyOrder(Vec<String>);

impl KeyOrder {
    fn of(fields: &Map<String, Value>) -> Self {
        Self(fields.keys().cloned().collect())
    }

    fn contains(&self, key: &str) -> bool {
        self.0.iter().any(|known| known == key)
    }
}

impl PartialEq for KeyOrder {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

/// Removes `key` from `fields` and decodes it. `null` stays in `fields` so it
/// is written back as-is.
fn take_field<T: DeserializeOwned>(
    fields: &mut Map<String, Value>,
    key: &str,
) -> serde_json::Result<Option<T>> {
    match fields.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(_) => fields.remove(key).map(serde_json::from_value).transpose(),
    }
}

fn write_some<M, T>(map: &mut M, key: &str, value: Option<&T>) -> Result<bool, M::Error>
where
    M: SerializeMap,
    T: Serialize + ?Sized,
{
    match value {
        Some(value) => map.serialize_entry(key, value).map(|_| true),
        None => Ok(false),
    }
}

/// Writes an object whose `typed` keys live in struct fields and whose other
/// keys live in `extra`, following `order`.
fn serialize_ordered<S, F>(
    serializer: S,
    order: &KeyOrder,
    typed: &[&str],
    extra: &Map<String, Value>,
    mut write_typed: F,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    F: FnMut(&str, &mut S::SerializeMap) -> Result<bool, S::Error>,
{
    let mut map = serializer.serialize_map(None)?;
    for key in &order.0 {
        let written = typed.contains(&key.as_str()) && write_typed(key, &mut map)?;
        if !written {
            if let Some(value) = extra.get(key) {
                map.serialize_entry(key, value)?;
            }
        }
    }
    for key in typed.iter().filter(|key| !order.contains(key)) {
        write_typed(key, &mut map)?;
    }
    for (key, value) in extra.iter().filter(|(key, _)| !order.contains(key)) {
        map.serialize_entry(key, value)?;
    }
    map.end()
}

/// Symbol tree emitted by the extraction collaborator.
///
/// Only the fields this crate reads are typed; everything else the
/// collaborator emits is carried through untouched in `extra`, in the
/// order it was read.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DocTree {
    pub children: Vec<DocEntry>,
    pub extra: Map<String, Value>,
    order: KeyOrder,
}

impl DocTree {
    const TYPED: &'static [&'static str] = &["children"];

    pub fn new(children: Vec<DocEntry>) -> Self {
        Self {
            children,
            ..Self::default()
        }
    }
}

impl Serialize for DocTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_ordered(serializer, &self.order, Self::TYPED, &self.extra, |key, map| {
            match key {
                "children" => write_some(map, key, Some(&self.children)),
                _ => Ok(false),
            }
        })
    }
}

impl<'de> Deserialize<'de> for DocTree {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Self::from_fields(Map::deserialize(deserializer)?).map_err(D::Error::custom)
    }
}

impl DocTree {
    fn from_fields(mut extra: Map<String, Value>) -> serde_json::Result<Self> {
        let order = KeyOrder::of(&extra);
        Ok(Self {
            children: take_field(&mut extra, "children")?.unwrap_or_default(),
            extra,
            order,
        })
    }
}

/// One documented symbol.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DocEntry {
    pub name: Option<String>,

    /// Human-readable kind label such as `Class` or `Variable`.
    pub kind: Option<String>,

    pub children: Option<Vec<DocEntry>>,

    /// Originating source locations; the first one decides provenance.
    pub sources: Option<Vec<SourceRef>>,

    pub anchor_id: Option<String>,

    pub extra: Map<String, Value>,
    order: KeyOrder,
}

impl DocEntry {
    const TYPED: &'static [&'static str] = &["name", "kindString", "children", "sources", "anchorId"];

    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            kind: Some(kind.into()),
            ..Self::default()
        }
    }

    pub fn with_source(mut self, file_name: impl Into<String>) -> Self {
        self.sources
            .get_or_insert_with(Vec::new)
            .push(SourceRef::new(file_name));
        self
    }

    pub fn with_children(mut self, children: Vec<DocEntry>) -> Self {
        self.children = Some(children);
        self
    }

    /// Path of the first listed source file, if any.
    pub fn primary_source(&self) -> Option<&str> {
        self.sources
            .as_deref()
            .and_then(|sources| sources.first())
            .and_then(|source| source.file_name.as_deref())
    }

    pub fn is_variable(&self) -> bool {
        self.kind
            .as_deref()
            .is_some_and(|kind| kind.to_lowercase() == "variable")
    }
}

impl Serialize for DocEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_ordered(serializer, &self.order, Self::TYPED, &self.extra, |key, map| {
            match key {
                "name" => write_some(map, key, self.name.as_ref()),
                "kindString" => write_some(map, key, self.kind.as_ref()),
                "children" => write_some(map, key, self.children.as_ref()),
                "sources" => write_some(map, key, self.sources.as_ref()),
                "anchorId" => write_some(map, key, self.anchor_id.as_ref()),
                _ => Ok(false),
            }
        })
    }
}

impl<'de> Deserialize<'de> for DocEntry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Self::from_fields(Map::deserialize(deserializer)?).map_err(D::Error::custom)
    }
}

impl DocEntry {
    fn from_fields(mut extra: Map<String, Value>) -> serde_json::Result<Self> {
        let order = KeyOrder::of(&extra);
        Ok(Self {
            name: take_field(&mut extra, "name")?,
            kind: take_field(&mut extra, "kindString")?,
            children: take_field(&mut extra, "children")?,
            sources: take_field(&mut extra, "sources")?,
            anchor_id: take_field(&mut extra, "anchorId")?,
            extra,
            order,
        })
    }
}

/// Source location reported by the extraction collaborator.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SourceRef {
    pub file_name: Option<String>,
    pub extra: Map<String, Value>,
    order: KeyOrder,
}

impl SourceRef {
    const TYPED: &'static [&'static str] = &["fileName"];

    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: Some(file_name.into()),
            ..Self::default()
        }
    }
}

impl Serialize for SourceRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_ordered(serializer, &self.order, Self::TYPED, &self.extra, |key, map| {
            match key {
                "fileName" => write_some(map, key, self.file_name.as_ref()),
                _ => Ok(false),
            }
        })
    }
}

impl<'de> Deserialize<'de> for SourceRef {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Self::from_fields(Map::deserialize(deserializer)?).map_err(D::Error::custom)
    }
}

impl SourceRef {
    fn from_fields(mut extra: Map<String, Value>) -> serde_json::Result<Self> {
        let order = KeyOrder::of(&extra);
        Ok(Self {
            file_name: take_field(&mut extra, "fileName")?,
            extra,
            order,
        })
    }
}

/// Persisted documentation artifact: the sanitized, annotated tree plus the
/// anchor lookup table, written after the tree's own keys.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DocumentationArtifact {
    pub children: Vec<DocEntry>,
    pub anchor_ids: AnchorIds,
    pub extra: Map<String, Value>,
    order: KeyOrder,
}

impl DocumentationArtifact {
    const TYPED: &'static [&'static str] = &["children", "anchorIds"];

    pub fn from_tree(tree: DocTree, anchor_ids: AnchorIds) -> Self {
        Self {
            children: tree.children,
            anchor_ids,
            extra: tree.extra,
            order: tree.order,
        }
    }
}

impl Serialize for DocumentationArtifact {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_ordered(serializer, &self.order, Self::TYPED, &self.extra, |key, map| {
            match key {
                "children" => write_some(map, key, Some(&self.children)),
                "anchorIds" => write_some(map, key, Some(&self.anchor_ids)),
                _ => Ok(false),
            }
        })
    }
}

impl<'de> Deserialize<'de> for DocumentationArtifact {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Self::from_fields(Map::deserialize(deserializer)?).map_err(D::Error::custom)
    }
}

impl DocumentationArtifact {
    fn from_fields(mut extra: Map<String, Value>) -> serde_json::Result<Self> {
        let order = KeyOrder::of(&extra);
        Ok(Self {
            children: take_field(&mut extra, "children")?.unwrap_or_default(),
            anchor_ids: take_field(&mut extra, "anchorIds")?.unwrap_or_default(),
            extra,
            order,
        })
    }
}
