use crate::execution::FieldValue;
use crate::execution::ResolveInfo;
use crate::types::Field;
use crate::types::lazy_map::LazyMap;
use crate::types::object_type::FieldsDef;
use indexmap::IndexMap;
use std::sync::Arc;

/// Picks the name of the concrete object type for a value of an abstract
/// (interface or union) type.
pub type ResolveTypeFn =
    Arc<dyn Fn(&FieldValue, &ResolveInfo<'_>) -> Option<String> + Send + Sync>;

/// An interface type. The object types implementing it are discovered when
/// a [`Schema`](crate::Schema) is built.
pub struct InterfaceType {
    pub(crate) name: String,
    pub(crate) description: Option<String>,
    pub(crate) fields: LazyMap<Field>,
    pub(crate) resolve_type: Option<ResolveTypeFn>,
}

impl InterfaceType {
    pub fn builder(name: impl Into<String>) -> InterfaceTypeBuilder {
        InterfaceTypeBuilder {
            name: name.into(),
            description: None,
            fields: FieldsDef::Entries(vec![]),
            resolve_type: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn fields(&self) -> &IndexMap<String, Field> {
        self.fields.get()
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields().get(name)
    }

    pub fn resolve_type(&self) -> Option<&ResolveTypeFn> {
        self.resolve_type.as_ref()
    }
}

impl std::fmt::Debug for InterfaceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InterfaceType")
            .field("name", &self.name)
            .field("fields", &self.fields)
            .finish_non_exhaustive()
    }
}

pub struct InterfaceTypeBuilder {
    name: String,
    description: Option<String>,
    fields: FieldsDef,
    resolve_type: Option<ResolveTypeFn>,
}

impl InterfaceTypeBuilder {
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn field(mut self, name: impl Into<String>, field: Field) -> Self {
        self.fields.push(name.into(), field);
        self
    }

    pub fn fields_thunk(
        mut self,
        thunk: impl Fn() -> IndexMap<String, Field> + Send + Sync + 'static,
    ) -> Self {
        self.fields = FieldsDef::Thunk(Box::new(thunk));
        self
    }

    /// Without a `resolve_type`, the runtime type is the first possible type
    /// whose `is_type_of` accepts the value.
    pub fn resolve_type(
        mut self,
        f: impl Fn(&FieldValue, &ResolveInfo<'_>) -> Option<String> + Send + Sync + 'static,
    ) -> Self {
        self.resolve_type = Some(Arc::new(f));
        self
    }

    pub fn build(self) -> InterfaceType {
        InterfaceType {
            name: self.name,
            description: self.description,
            fields: self.fields.into_lazy_map(),
            resolve_type: self.resolve_type,
        }
    }
}
