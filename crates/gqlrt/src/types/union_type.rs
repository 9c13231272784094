use crate::execution::FieldValue;
use crate::execution::ResolveInfo;
use crate::types::ResolveTypeFn;
use std::sync::Arc;

/// A union of object types, referenced by name.
pub struct UnionType {
    pub(crate) name: String,
    pub(crate) description: Option<String>,
    pub(crate) types: Vec<String>,
    pub(crate) resolve_type: Option<ResolveTypeFn>,
}

impl UnionType {
    pub fn builder(name: impl Into<String>) -> UnionTypeBuilder {
        UnionTypeBuilder {
            ty: UnionType {
                name: name.into(),
                description: None,
                types: vec![],
                resolve_type: None,
            },
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn types(&self) -> &[String] {
        &self.types
    }

    pub fn resolve_type(&self) -> Option<&ResolveTypeFn> {
        self.resolve_type.as_ref()
    }
}

impl std::fmt::Debug for UnionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UnionType")
            .field("name", &self.name)
            .field("types", &self.types)
            .finish_non_exhaustive()
    }
}

pub struct UnionTypeBuilder {
    ty: UnionType,
}

impl UnionTypeBuilder {
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.ty.description = Some(description.into());
        self
    }

    pub fn member(mut self, name: impl Into<String>) -> Self {
        self.ty.types.push(name.into());
        self
    }

    pub fn resolve_type(
        mut self,
        f: impl Fn(&FieldValue, &ResolveInfo<'_>) -> Option<String> + Send + Sync + 'static,
    ) -> Self {
        self.ty.resolve_type = Some(Arc::new(f));
        self
    }

    pub fn build(self) -> UnionType {
        self.ty
    }
}
