use crate::types::InputValue;
use crate::types::lazy_map::LazyMap;
use indexmap::IndexMap;

/// An input object type: a named set of input fields.
pub struct InputObjectType {
    pub(crate) name: String,
    pub(crate) description: Option<String>,
    pub(crate) fields: LazyMap<InputValue>,
}

impl InputObjectType {
    pub fn builder(name: impl Into<String>) -> InputObjectTypeBuilder {
        InputObjectTypeBuilder {
            name: name.into(),
            description: None,
            fields: vec![],
            thunk: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn fields(&self) -> &IndexMap<String, InputValue> {
        self.fields.get()
    }
}

impl std::fmt::Debug for InputObjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InputObjectType")
            .field("name", &self.name)
            .field("fields", &self.fields)
            .finish_non_exhaustive()
    }
}

type InputFieldsThunk = Box<dyn Fn() -> IndexMap<String, InputValue> + Send + Sync>;

pub struct InputObjectTypeBuilder {
    name: String,
    description: Option<String>,
    fields: Vec<(String, InputValue)>,
    thunk: Option<InputFieldsThunk>,
}

impl InputObjectTypeBuilder {
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn field(mut self, name: impl Into<String>, field: InputValue) -> Self {
        self.fields.push((name.into(), field));
        self
    }

    /// Defines the field map lazily, for input types that refer to
    /// themselves. Takes precedence over [`field`](Self::field).
    pub fn fields_thunk(
        mut self,
        thunk: impl Fn() -> IndexMap<String, InputValue> + Send + Sync + 'static,
    ) -> Self {
        self.thunk = Some(Box::new(thunk));
        self
    }

    pub fn build(self) -> InputObjectType {
        let fields = match self.thunk {
            Some(thunk) => LazyMap::from_thunk(thunk),
            None => LazyMap::from_entries(self.fields),
        };
        InputObjectType {
            name: self.name,
            description: self.description,
            fields,
        }
    }
}
