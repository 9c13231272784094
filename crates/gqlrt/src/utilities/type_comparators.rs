use crate::Schema;
use crate::types::GraphQLType;
use crate::types::TypeRef;

/// Whether a value of type `maybe_subtype` may be used where
/// `super_type` is expected.
///
/// Non-null is a subtype of nullable, lists are covariant, and an object
/// type is a subtype of every abstract type it belongs to.
pub fn is_type_sub_type_of(schema: &Schema, maybe_subtype: &TypeRef, super_type: &TypeRef) -> bool {
    if maybe_subtype == super_type {
        return true;
    }
    match (maybe_subtype, super_type) {
        (TypeRef::NonNull(sub), TypeRef::NonNull(sup)) => is_type_sub_type_of(schema, sub, sup),
        (_, TypeRef::NonNull(_)) => false,
        (TypeRef::NonNull(sub), _) => is_type_sub_type_of(schema, sub, super_type),
        (TypeRef::List(sub), TypeRef::List(sup)) => is_type_sub_type_of(schema, sub, sup),
        (_, TypeRef::List(_)) | (TypeRef::List(_), _) => false,
        (TypeRef::Named(sub), TypeRef::Named(sup)) => {
            matches!(schema.get_type(sup), Some(ty) if ty.is_abstract())
                && schema.is_possible_type(sup, sub)
        },
    }
}

/// Whether some object type could be of both composite types `a` and `b`.
pub fn do_types_overlap(schema: &Schema, a: &GraphQLType, b: &GraphQLType) -> bool {
    if a.name() == b.name() {
        return true;
    }
    match (a.is_abstract(), b.is_abstract()) {
        (true, true) => schema
            .possible_types(a.name())
            .iter()
            .any(|possible| schema.is_possible_type(b.name(), possible.name())),
        (true, false) => schema.is_possible_type(a.name(), b.name()),
        (false, true) => schema.is_possible_type(b.name(), a.name()),
        (false, false) => false,
    }
}
