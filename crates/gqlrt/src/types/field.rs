use crate::Value;
use crate::execution::Arguments;
use crate::execution::FieldResult;
use crate::execution::FieldValue;
use crate::execution::ResolveInfo;
use crate::types::TypeRef;
use crate::types::lazy_map::NamedEntry;
use indexmap::IndexMap;
use std::sync::Arc;

/// A field resolver: `(source, args, info) -> result`.
pub type Resolver =
    Arc<dyn Fn(&FieldValue, &Arguments, &ResolveInfo<'_>) -> FieldResult + Send + Sync>;

/// A field of an object or interface type.
#[derive(Clone)]
pub struct Field {
    pub(crate) name: String,
    pub(crate) ty: TypeRef,
    pub(crate) description: Option<String>,
    pub(crate) args: IndexMap<String, InputValue>,
    pub(crate) duplicate_args: Vec<String>,
    pub(crate) resolver: Option<Resolver>,
    pub(crate) deprecation_reason: Option<String>,
}

impl Field {
    pub fn new(ty: impl Into<TypeRef>) -> Self {
        Self {
            name: String::new(),
            ty: ty.into(),
            description: None,
            args: IndexMap::new(),
            duplicate_args: vec![],
            resolver: None,
            deprecation_reason: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn argument(mut self, name: impl Into<String>, mut arg: InputValue) -> Self {
        let name = name.into();
        if self.args.contains_key(&name) {
            self.duplicate_args.push(name);
            return self;
        }
        arg.name = name.clone();
        self.args.insert(name, arg);
        self
    }

    /// Sets the resolver. Fields without one use the default resolver, which
    /// reads the field's name from the source value.
    pub fn resolve(
        mut self,
        resolver: impl Fn(&FieldValue, &Arguments, &ResolveInfo<'_>) -> FieldResult
            + Send
            + Sync
            + 'static,
    ) -> Self {
        self.resolver = Some(Arc::new(resolver));
        self
    }

    pub fn deprecated(mut self, reason: impl Into<String>) -> Self {
        self.deprecation_reason = Some(reason.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> &TypeRef {
        &self.ty
    }

    pub fn get_description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn args(&self) -> &IndexMap<String, InputValue> {
        &self.args
    }

    pub fn resolver(&self) -> Option<&Resolver> {
        self.resolver.as_ref()
    }

    pub fn deprecation_reason(&self) -> Option<&str> {
        self.deprecation_reason.as_deref()
    }

    pub fn is_deprecated(&self) -> bool {
        self.deprecation_reason.is_some()
    }
}

impl NamedEntry for Field {
    fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }
}

impl std::fmt::Debug for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("ty", &self.ty)
            .field("args", &self.args)
            .field("has_resolver", &self.resolver.is_some())
            .field("deprecation_reason", &self.deprecation_reason)
            .finish()
    }
}

/// An argument of a field or directive, or a field of an input object type.
#[derive(Clone, Debug, PartialEq)]
pub struct InputValue {
    pub(crate) name: String,
    pub(crate) ty: TypeRef,
    pub(crate) description: Option<String>,
    pub(crate) default_value: Option<Value>,
}

impl InputValue {
    pub fn new(ty: impl Into<TypeRef>) -> Self {
        Self {
            name: String::new(),
            ty: ty.into(),
            description: None,
            default_value: None,
        }
    }

    /// The value used when the input is omitted. This is an internal
    /// (already coerced) value.
    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> &TypeRef {
        &self.ty
    }

    pub fn get_description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn get_default_value(&self) -> Option<&Value> {
        self.default_value.as_ref()
    }

    pub(crate) fn named(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }
}

impl NamedEntry for InputValue {
    fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }
}
