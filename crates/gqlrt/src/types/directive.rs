use crate::Value;
use crate::types::InputValue;
use crate::types::TypeRef;
use indexmap::IndexMap;
use std::sync::Arc;
use std::sync::LazyLock;

/// Where a directive may appear.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DirectiveLocation {
    Query,
    Mutation,
    Subscription,
    Field,
    FragmentDefinition,
    FragmentSpread,
    InlineFragment,
    Schema,
    Scalar,
    Object,
    FieldDefinition,
    ArgumentDefinition,
    Interface,
    Union,
    Enum,
    EnumValue,
    InputObject,
    InputFieldDefinition,
}

impl DirectiveLocation {
    pub const ALL: [DirectiveLocation; 18] = [
        DirectiveLocation::Query,
        DirectiveLocation::Mutation,
        DirectiveLocation::Subscription,
        DirectiveLocation::Field,
        DirectiveLocation::FragmentDefinition,
        DirectiveLocation::FragmentSpread,
        DirectiveLocation::InlineFragment,
        DirectiveLocation::Schema,
        DirectiveLocation::Scalar,
        DirectiveLocation::Object,
        DirectiveLocation::FieldDefinition,
        DirectiveLocation::ArgumentDefinition,
        DirectiveLocation::Interface,
        DirectiveLocation::Union,
        DirectiveLocation::Enum,
        DirectiveLocation::EnumValue,
        DirectiveLocation::InputObject,
        DirectiveLocation::InputFieldDefinition,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DirectiveLocation::Query => "QUERY",
            DirectiveLocation::Mutation => "MUTATION",
            DirectiveLocation::Subscription => "SUBSCRIPTION",
            DirectiveLocation::Field => "FIELD",
            DirectiveLocation::FragmentDefinition => "FRAGMENT_DEFINITION",
            DirectiveLocation::FragmentSpread => "FRAGMENT_SPREAD",
            DirectiveLocation::InlineFragment => "INLINE_FRAGMENT",
            DirectiveLocation::Schema => "SCHEMA",
            DirectiveLocation::Scalar => "SCALAR",
            DirectiveLocation::Object => "OBJECT",
            DirectiveLocation::FieldDefinition => "FIELD_DEFINITION",
            DirectiveLocation::ArgumentDefinition => "ARGUMENT_DEFINITION",
            DirectiveLocation::Interface => "INTERFACE",
            DirectiveLocation::Union => "UNION",
            DirectiveLocation::Enum => "ENUM",
            DirectiveLocation::EnumValue => "ENUM_VALUE",
            DirectiveLocation::InputObject => "INPUT_OBJECT",
            DirectiveLocation::InputFieldDefinition => "INPUT_FIELD_DEFINITION",
        }
    }
}

impl std::fmt::Display for DirectiveLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveDefinition {
    pub(crate) name: String,
    pub(crate) description: Option<String>,
    pub(crate) locations: Vec<DirectiveLocation>,
    pub(crate) args: IndexMap<String, InputValue>,
}

impl DirectiveDefinition {
    pub fn new(
        name: impl Into<String>,
        locations: impl IntoIterator<Item = DirectiveLocation>,
    ) -> Self {
        Self {
            name: name.into(),
            description: None,
            locations: locations.into_iter().collect(),
            args: IndexMap::new(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn argument(mut self, name: impl Into<String>, arg: InputValue) -> Self {
        let name = name.into();
        self.args.insert(name.clone(), arg.named(&name));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get_description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn locations(&self) -> &[DirectiveLocation] {
        &self.locations
    }

    pub fn args(&self) -> &IndexMap<String, InputValue> {
        &self.args
    }
}

pub const DEFAULT_DEPRECATION_REASON: &str = "No longer supported";

pub static SKIP: LazyLock<Arc<DirectiveDefinition>> = LazyLock::new(|| {
    Arc::new(
        DirectiveDefinition::new(
            "skip",
            [
                DirectiveLocation::Field,
                DirectiveLocation::FragmentSpread,
                DirectiveLocation::InlineFragment,
            ],
        )
        .description(
            "Directs the executor to skip this field or fragment when the `if` argument is true.",
        )
        .argument(
            "if",
            InputValue::new(TypeRef::named("Boolean").non_null()).description("Skipped when true."),
        ),
    )
});

pub static INCLUDE: LazyLock<Arc<DirectiveDefinition>> = LazyLock::new(|| {
    Arc::new(
        DirectiveDefinition::new(
            "include",
            [
                DirectiveLocation::Field,
                DirectiveLocation::FragmentSpread,
                DirectiveLocation::InlineFragment,
            ],
        )
        .description(
            "Directs the executor to include this field or fragment only when the `if` \
            argument is true.",
        )
        .argument(
            "if",
            InputValue::new(TypeRef::named("Boolean").non_null()).description("Included when true."),
        ),
    )
});

pub static DEPRECATED: LazyLock<Arc<DirectiveDefinition>> = LazyLock::new(|| {
    Arc::new(
        DirectiveDefinition::new(
            "deprecated",
            [DirectiveLocation::FieldDefinition, DirectiveLocation::EnumValue],
        )
        .description("Marks an element of a GraphQL schema as no longer supported.")
        .argument(
            "reason",
            InputValue::new("String")
                .description(
                    "Explains why this element was deprecated, usually also including a \
                    suggestion for how to access supported similar data.",
                )
                .default_value(Value::String(DEFAULT_DEPRECATION_REASON.to_string())),
        ),
    )
});

/// `@skip`, `@include`, and `@deprecated`.
pub fn specified_directives() -> [Arc<DirectiveDefinition>; 3] {
    [SKIP.clone(), INCLUDE.clone(), DEPRECATED.clone()]
}
