//! A depth-first AST walker.
//!
//! [`visit`] calls [`Visitor::enter`] on each node before its children and
//! [`Visitor::leave`] after them, in document order. Returning
//! [`VisitorAction::Skip`] from `enter` prunes that node's subtree (and its
//! `leave` call), while [`VisitorAction::Break`] stops the walk entirely.
//!
//! Type-system definitions are visited as opaque leaves.

use crate::ast;
use smallvec::SmallVec;
use smallvec::smallvec;

/// A borrowed reference to any walkable AST node.
#[derive(Clone, Copy, Debug)]
pub enum Node<'a> {
    Document(&'a ast::Document),
    OperationDefinition(&'a ast::OperationDefinition),
    VariableDefinition(&'a ast::VariableDefinition),
    /// The `$name` of a variable definition. Variable *usages* are visited as
    /// [`Node::Value`] holding [`ast::Value::Variable`].
    Variable(&'a ast::Variable),
    SelectionSet(&'a ast::SelectionSet),
    Field(&'a ast::Field),
    Argument(&'a ast::Argument),
    FragmentSpread(&'a ast::FragmentSpread),
    InlineFragment(&'a ast::InlineFragment),
    FragmentDefinition(&'a ast::FragmentDefinition),
    Value(&'a ast::Value),
    ObjectField(&'a ast::ObjectField),
    Directive(&'a ast::Directive),
    NamedType(&'a ast::NamedType),
    ListType(&'a ast::ListType),
    NonNullType(&'a ast::NonNullType),
    TypeSystemDefinition(&'a ast::TypeSystemDefinition),
}

impl<'a> Node<'a> {
    pub fn loc(&self) -> Option<&'a ast::Loc> {
        match *self {
            Node::Document(n) => n.loc.as_ref(),
            Node::OperationDefinition(n) => n.loc.as_ref(),
            Node::VariableDefinition(n) => n.loc.as_ref(),
            Node::Variable(n) => n.loc.as_ref(),
            Node::SelectionSet(n) => n.loc.as_ref(),
            Node::Field(n) => n.loc.as_ref(),
            Node::Argument(n) => n.loc.as_ref(),
            Node::FragmentSpread(n) => n.loc.as_ref(),
            Node::InlineFragment(n) => n.loc.as_ref(),
            Node::FragmentDefinition(n) => n.loc.as_ref(),
            Node::Value(n) => n.loc(),
            Node::ObjectField(n) => n.loc.as_ref(),
            Node::Directive(n) => n.loc.as_ref(),
            Node::NamedType(n) => n.loc.as_ref(),
            Node::ListType(n) => n.loc.as_ref(),
            Node::NonNullType(n) => n.loc.as_ref(),
            Node::TypeSystemDefinition(n) => n.loc(),
        }
    }

    /// The direct children of this node, in visiting order.
    pub fn children(&self) -> SmallVec<[Node<'a>; 4]> {
        let mut children: SmallVec<[Node<'a>; 4]> = smallvec![];
        match *self {
            Node::Document(doc) => {
                children.extend(doc.definitions.iter().map(Node::from_definition));
            },
            Node::OperationDefinition(op) => {
                children.extend(op.variable_definitions.iter().map(Node::VariableDefinition));
                children.extend(op.directives.iter().map(Node::Directive));
                children.push(Node::SelectionSet(&op.selection_set));
            },
            Node::VariableDefinition(var_def) => {
                children.push(Node::Variable(&var_def.variable));
                children.push(Node::from_type(&var_def.ty));
                children.extend(var_def.default_value.iter().map(Node::Value));
            },
            Node::SelectionSet(set) => {
                children.extend(set.selections.iter().map(Node::from_selection));
            },
            Node::Field(field) => {
                children.extend(field.arguments.iter().map(Node::Argument));
                children.extend(field.directives.iter().map(Node::Directive));
                children.extend(field.selection_set.iter().map(Node::SelectionSet));
            },
            Node::Argument(arg) => children.push(Node::Value(&arg.value)),
            Node::FragmentSpread(spread) => {
                children.extend(spread.directives.iter().map(Node::Directive));
            },
            Node::InlineFragment(inline) => {
                children.extend(inline.type_condition.iter().map(Node::NamedType));
                children.extend(inline.directives.iter().map(Node::Directive));
                children.push(Node::SelectionSet(&inline.selection_set));
            },
            Node::FragmentDefinition(frag) => {
                children.push(Node::NamedType(&frag.type_condition));
                children.extend(frag.directives.iter().map(Node::Directive));
                children.push(Node::SelectionSet(&frag.selection_set));
            },
            Node::Value(ast::Value::List(list)) => {
                children.extend(list.values.iter().map(Node::Value));
            },
            Node::Value(ast::Value::Object(obj)) => {
                children.extend(obj.fields.iter().map(Node::ObjectField));
            },
            Node::ObjectField(field) => children.push(Node::Value(&field.value)),
            Node::Directive(directive) => {
                children.extend(directive.arguments.iter().map(Node::Argument));
            },
            Node::ListType(list) => children.push(Node::from_type(&list.ty)),
            Node::NonNullType(non_null) => children.push(Node::from_type(&non_null.ty)),
            Node::Variable(_)
            | Node::Value(_)
            | Node::NamedType(_)
            | Node::TypeSystemDefinition(_) => (),
        }
        children
    }

    pub fn from_definition(definition: &'a ast::Definition) -> Self {
        match definition {
            ast::Definition::Operation(op) => Node::OperationDefinition(op),
            ast::Definition::Fragment(frag) => Node::FragmentDefinition(frag),
            ast::Definition::TypeSystem(def) => Node::TypeSystemDefinition(def),
        }
    }

    pub fn from_selection(selection: &'a ast::Selection) -> Self {
        match selection {
            ast::Selection::Field(field) => Node::Field(field),
            ast::Selection::FragmentSpread(spread) => Node::FragmentSpread(spread),
            ast::Selection::InlineFragment(inline) => Node::InlineFragment(inline),
        }
    }

    pub fn from_type(ty: &'a ast::Type) -> Self {
        match ty {
            ast::Type::Named(named) => Node::NamedType(named),
            ast::Type::List(list) => Node::ListType(list),
            ast::Type::NonNull(non_null) => Node::NonNullType(non_null),
        }
    }
}

/// What the walker should do after a [`Visitor`] callback.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum VisitorAction {
    #[default]
    Continue,
    /// Do not descend into this node's children. Only meaningful from
    /// [`Visitor::enter`].
    Skip,
    /// Stop walking immediately.
    Break,
}

pub trait Visitor<'a> {
    fn enter(&mut self, _node: Node<'a>, _ancestors: &[Node<'a>]) -> VisitorAction {
        VisitorAction::Continue
    }

    fn leave(&mut self, _node: Node<'a>, _ancestors: &[Node<'a>]) -> VisitorAction {
        VisitorAction::Continue
    }
}

/// Walks `root` and everything beneath it with `visitor`.
///
/// Returns `false` if the walk was stopped by [`VisitorAction::Break`].
pub fn visit<'a, V: Visitor<'a> + ?Sized>(root: Node<'a>, visitor: &mut V) -> bool {
    let mut ancestors = vec![];
    walk(root, visitor, &mut ancestors)
}

fn walk<'a, V: Visitor<'a> + ?Sized>(
    node: Node<'a>,
    visitor: &mut V,
    ancestors: &mut Vec<Node<'a>>,
) -> bool {
    match visitor.enter(node, ancestors) {
        VisitorAction::Break => return false,
        VisitorAction::Skip => return true,
        VisitorAction::Continue => (),
    }

    ancestors.push(node);
    let completed = node.children()
        .into_iter()
        .all(|child| walk(child, visitor, ancestors));
    ancestors.pop();

    completed && visitor.leave(node, ancestors) != VisitorAction::Break
}
