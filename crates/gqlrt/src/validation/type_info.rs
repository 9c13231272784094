use crate::Schema;
use crate::introspection::get_field_def;
use crate::types::DirectiveDefinition;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::InputValue;
use crate::types::TypeRef;
use crate::utilities::type_from_ast;
use gqlrt_parser::ast;
use gqlrt_parser::visit::Node;

/// Tracks the schema types in scope while a document is walked.
///
/// [`TypeInfo::enter`] must be called before a node's children are visited
/// and [`TypeInfo::leave`] after, for every node of the walk.
pub struct TypeInfo<'a> {
    schema: &'a Schema,
    type_stack: Vec<Option<TypeRef>>,
    parent_type_stack: Vec<Option<&'a GraphQLType>>,
    input_type_stack: Vec<Option<TypeRef>>,
    field_def_stack: Vec<Option<&'a Field>>,
    directive: Option<&'a DirectiveDefinition>,
    argument: Option<&'a InputValue>,
}

impl<'a> TypeInfo<'a> {
    pub fn new(schema: &'a Schema) -> Self {
        Self {
            schema,
            type_stack: vec![],
            parent_type_stack: vec![],
            input_type_stack: vec![],
            field_def_stack: vec![],
            directive: None,
            argument: None,
        }
    }

    /// The output type of the innermost field, fragment, or operation.
    pub fn type_ref(&self) -> Option<&TypeRef> {
        self.type_stack.last()?.as_ref()
    }

    /// The composite type whose selection set is being walked.
    pub fn parent_type(&self) -> Option<&'a GraphQLType> {
        self.parent_type_stack.last().copied().flatten()
    }

    /// The input type expected at the current argument, list item, object
    /// field, or variable definition.
    pub fn input_type(&self) -> Option<&TypeRef> {
        self.input_type_stack.last()?.as_ref()
    }

    pub fn field_def(&self) -> Option<&'a Field> {
        self.field_def_stack.last().copied().flatten()
    }

    pub fn directive(&self) -> Option<&'a DirectiveDefinition> {
        self.directive
    }

    pub fn argument(&self) -> Option<&'a InputValue> {
        self.argument
    }

    pub fn enter(&mut self, node: Node<'a>) {
        let schema = self.schema;
        match node {
            Node::SelectionSet(_) => {
                let named = self
                    .type_ref()
                    .and_then(|ty| schema.named_type(ty))
                    .filter(|ty| ty.is_composite());
                self.parent_type_stack.push(named);
            },

            Node::Field(field) => {
                let field_def = self
                    .parent_type()
                    .and_then(|parent| get_field_def(schema, parent, field.name.as_str()));
                self.field_def_stack.push(field_def);
                self.type_stack.push(field_def.map(|def| def.ty().clone()));
            },

            Node::Directive(directive) => {
                self.directive = schema.get_directive(directive.name.as_str()).map(|d| &**d);
            },

            Node::OperationDefinition(operation) => {
                let root = match operation.operation {
                    ast::OperationType::Query => Some(schema.query_type()),
                    ast::OperationType::Mutation => schema.mutation_type(),
                    ast::OperationType::Subscription => schema.subscription_type(),
                };
                self.type_stack.push(root.map(|ty| TypeRef::named(ty.name())));
            },

            Node::InlineFragment(inline) => {
                let ty = match &inline.type_condition {
                    Some(condition) => self.named_output_type(condition),
                    None => self
                        .type_ref()
                        .map(|ty| TypeRef::named(ty.named_type())),
                };
                self.type_stack.push(ty);
            },

            Node::FragmentDefinition(fragment) => {
                let ty = self.named_output_type(&fragment.type_condition);
                self.type_stack.push(ty);
            },

            Node::VariableDefinition(definition) => {
                let ty = type_from_ast(schema, &definition.ty).filter(|ty| {
                    schema.named_type(ty).is_some_and(GraphQLType::is_input_type)
                });
                self.input_type_stack.push(ty);
            },

            Node::Argument(argument) => {
                let name = argument.name.as_str();
                let arg_def = match (self.directive, self.field_def()) {
                    (Some(directive), _) => directive.args().get(name),
                    (None, Some(field)) => field.args().get(name),
                    (None, None) => None,
                };
                self.argument = arg_def;
                self.input_type_stack.push(arg_def.map(|arg| arg.ty().clone()));
            },

            Node::Value(ast::Value::List(_)) => {
                let item_type = self.input_type().map(|ty| {
                    let nullable = ty.nullable();
                    nullable.list_item().unwrap_or(nullable).clone()
                });
                self.input_type_stack.push(item_type);
            },

            Node::ObjectField(object_field) => {
                let field_type = self
                    .input_type()
                    .and_then(|ty| schema.named_type(ty))
                    .and_then(GraphQLType::as_input_object)
                    .and_then(|input| input.fields().get(object_field.name.as_str()))
                    .map(|field| field.ty().clone());
                self.input_type_stack.push(field_type);
            },

            _ => {},
        }
    }

    pub fn leave(&mut self, node: Node<'a>) {
        match node {
            Node::SelectionSet(_) => {
                self.parent_type_stack.pop();
            },
            Node::Field(_) => {
                self.field_def_stack.pop();
                self.type_stack.pop();
            },
            Node::Directive(_) => {
                self.directive = None;
            },
            Node::OperationDefinition(_) | Node::InlineFragment(_) | Node::FragmentDefinition(_) => {
                self.type_stack.pop();
            },
            Node::VariableDefinition(_) | Node::Value(ast::Value::List(_)) | Node::ObjectField(_) => {
                self.input_type_stack.pop();
            },
            Node::Argument(_) => {
                self.argument = None;
                self.input_type_stack.pop();
            },
            _ => {},
        }
    }

    fn named_output_type(&self, named: &ast::NamedType) -> Option<TypeRef> {
        self.schema
            .get_type(named.name.as_str())
            .filter(|ty| ty.is_output_type())
            .map(|ty| TypeRef::named(ty.name()))
    }
}
