use indexmap::IndexMap;
use std::sync::OnceLock;

/// Entries that learn their own name when a [`LazyMap`] is materialized.
pub(crate) trait NamedEntry {
    fn set_name(&mut self, name: &str);
}

pub(crate) type Thunk<T> = Box<dyn Fn() -> IndexMap<String, T> + Send + Sync>;

enum Definition<T> {
    Entries(Vec<(String, T)>),
    Thunk(Thunk<T>),
}

/// A name-keyed map of fields or input fields, materialized on first access.
///
/// The map is defined either by entries added one at a time or by a thunk,
/// so that types can refer to each other (or themselves) before every type
/// of a schema exists. Materializing stamps each entry with its key and
/// records keys that were defined more than once.
pub(crate) struct LazyMap<T> {
    definition: Definition<T>,
    resolved: OnceLock<Resolved<T>>,
}

struct Resolved<T> {
    entries: IndexMap<String, T>,
    duplicates: Vec<String>,
}

impl<T: Clone + NamedEntry> LazyMap<T> {
    pub(crate) fn from_entries(entries: Vec<(String, T)>) -> Self {
        Self {
            definition: Definition::Entries(entries),
            resolved: OnceLock::new(),
        }
    }

    pub(crate) fn from_thunk(thunk: Thunk<T>) -> Self {
        Self {
            definition: Definition::Thunk(thunk),
            resolved: OnceLock::new(),
        }
    }

    pub(crate) fn get(&self) -> &IndexMap<String, T> {
        &self.resolve().entries
    }

    /// Keys defined more than once, in definition order.
    pub(crate) fn duplicates(&self) -> &[String] {
        &self.resolve().duplicates
    }

    fn resolve(&self) -> &Resolved<T> {
        self.resolved.get_or_init(|| {
            let pairs = match &self.definition {
                Definition::Entries(entries) => entries.clone(),
                Definition::Thunk(thunk) => thunk().into_iter().collect(),
            };
            let mut entries = IndexMap::with_capacity(pairs.len());
            let mut duplicates = vec![];
            for (name, mut entry) in pairs {
                if entries.contains_key(&name) {
                    duplicates.push(name);
                    continue;
                }
                entry.set_name(&name);
                entries.insert(name, entry);
            }
            Resolved { entries, duplicates }
        })
    }
}

impl<T> std::fmt::Debug for LazyMap<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.resolved.get() {
            Some(resolved) => f.debug_list().entries(resolved.entries.keys()).finish(),
            None => f.write_str("<unresolved>"),
        }
    }
}
