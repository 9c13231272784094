use crate::Schema;
use crate::types::TypeRef;
use gqlrt_parser::ast;

/// The [`TypeRef`] written in a document, or `None` if its named type is not
/// in `schema`.
pub fn type_from_ast(schema: &Schema, ty: &ast::Type) -> Option<TypeRef> {
    match ty {
        ast::Type::Named(named) => {
            schema.get_type(named.name.as_str())?;
            Some(TypeRef::named(named.name.as_str()))
        },
        ast::Type::List(list) => type_from_ast(schema, &list.ty).map(TypeRef::list),
        ast::Type::NonNull(non_null) => type_from_ast(schema, &non_null.ty).map(TypeRef::non_null),
    }
}
