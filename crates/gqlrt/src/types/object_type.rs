use crate::execution::FieldValue;
use crate::execution::ResolveInfo;
use crate::types::Field;
use crate::types::lazy_map::LazyMap;
use crate::types::lazy_map::Thunk;
use indexmap::IndexMap;
use std::sync::Arc;

pub type IsTypeOfFn = Arc<dyn Fn(&FieldValue, &ResolveInfo<'_>) -> bool + Send + Sync>;

/// An object type: a named set of fields, optionally implementing
/// interfaces.
pub struct ObjectType {
    pub(crate) name: String,
    pub(crate) description: Option<String>,
    pub(crate) fields: LazyMap<Field>,
    pub(crate) interfaces: Vec<String>,
    pub(crate) is_type_of: Option<IsTypeOfFn>,
}

impl ObjectType {
    pub fn builder(name: impl Into<String>) -> ObjectTypeBuilder {
        ObjectTypeBuilder {
            name: name.into(),
            description: None,
            fields: FieldsDef::Entries(vec![]),
            interfaces: vec![],
            is_type_of: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The field map, materialized on first call.
    pub fn fields(&self) -> &IndexMap<String, Field> {
        self.fields.get()
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields().get(name)
    }

    /// Names of the interfaces this type declares, in declaration order.
    pub fn interfaces(&self) -> &[String] {
        &self.interfaces
    }

    pub fn is_type_of(&self) -> Option<&IsTypeOfFn> {
        self.is_type_of.as_ref()
    }
}

impl std::fmt::Debug for ObjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObjectType")
            .field("name", &self.name)
            .field("fields", &self.fields)
            .field("interfaces", &self.interfaces)
            .finish_non_exhaustive()
    }
}

pub(crate) enum FieldsDef {
    Entries(Vec<(String, Field)>),
    Thunk(Thunk<Field>),
}

impl FieldsDef {
    pub(crate) fn push(&mut self, name: String, field: Field) {
        match self {
            FieldsDef::Entries(entries) => entries.push((name, field)),
            FieldsDef::Thunk(_) => *self = FieldsDef::Entries(vec![(name, field)]),
        }
    }

    pub(crate) fn into_lazy_map(self) -> LazyMap<Field> {
        match self {
            FieldsDef::Entries(entries) => LazyMap::from_entries(entries),
            FieldsDef::Thunk(thunk) => LazyMap::from_thunk(thunk),
        }
    }
}

pub struct ObjectTypeBuilder {
    name: String,
    description: Option<String>,
    fields: FieldsDef,
    interfaces: Vec<String>,
    is_type_of: Option<IsTypeOfFn>,
}

impl ObjectTypeBuilder {
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn field(mut self, name: impl Into<String>, field: Field) -> Self {
        self.fields.push(name.into(), field);
        self
    }

    /// Defines the whole field map with a thunk that runs when the fields are
    /// first needed. Replaces any fields added with [`field`](Self::field).
    pub fn fields_thunk(
        mut self,
        thunk: impl Fn() -> IndexMap<String, Field> + Send + Sync + 'static,
    ) -> Self {
        self.fields = FieldsDef::Thunk(Box::new(thunk));
        self
    }

    pub fn interface(mut self, name: impl Into<String>) -> Self {
        self.interfaces.push(name.into());
        self
    }

    pub fn is_type_of(
        mut self,
        f: impl Fn(&FieldValue, &ResolveInfo<'_>) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.is_type_of = Some(Arc::new(f));
        self
    }

    pub fn build(self) -> ObjectType {
        ObjectType {
            name: self.name,
            description: self.description,
            fields: self.fields.into_lazy_map(),
            interfaces: self.interfaces,
            is_type_of: self.is_type_of,
        }
    }
}
