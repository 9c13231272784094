//! Helpers for digging into parsed documents.

use crate::ParseOptions;
use crate::SyntaxError;
use crate::ast;

pub const KITCHEN_SINK: &str = r#"query queryName($foo: ComplexType, $site: Site = MOBILE) {
  whoever123is: node(id: [123, 456]) {
    id ,
    ... on User @defer {
      field2 {
        id ,
        alias: field1(first:10, after:$foo,) @include(if: $foo) {
          id,
          ...frag
        }
      }
    }
    ... @skip(unless: $foo) {
      id
    }
    ... {
      id
    }
  }
}

mutation likeStory {
  like(story: 123) @defer {
    story {
      id
    }
  }
}

subscription StoryLikeSubscription($input: StoryLikeSubscribeInput) {
  storyLikeSubscribe(input: $input) {
    story {
      likers {
        count
      }
      likeSentence {
        text
      }
    }
  }
}

fragment frag on Friend {
  foo(size: $size, bar: $b, obj: {key: "value"})
}

{
  unnamed(truthy: true, falsey: false, nullish: null),
  query
}
"#;

pub const SCHEMA_KITCHEN_SINK: &str = r#"schema {
  query: QueryType
  mutation: MutationType
}

type Foo implements Bar {
  one: Type
  two(argument: InputType!): Type
  three(argument: InputType, other: String): Int
  four(argument: String = "string"): String
  five(argument: [String] = ["string", "string"]): String
  six(argument: InputType = {key: "value"}): Type
}

type AnnotatedObject @onObject(arg: "value") {
  annotatedField(arg: Type = "default" @onArg): Type @onField
}

interface Bar {
  one: Type
  four(argument: String = "string"): String
}

interface AnnotatedInterface @onInterface {
  annotatedField(arg: Type @onArg): Type @onField
}

union Feed = Story | Article | Advert

union AnnotatedUnion @onUnion = A | B

scalar CustomScalar

scalar AnnotatedScalar @onScalar

enum Site {
  DESKTOP
  MOBILE
}

enum AnnotatedEnum @onEnum {
  ANNOTATED_VALUE @onEnumValue
  OTHER_VALUE
}

input InputType {
  key: String!
  answer: Int = 42
}

input AnnotatedInput @onInputObjectType {
  annotatedField: Type @onField
}

extend type Foo {
  seven(argument: [String]): Type
}

directive @skip(if: Boolean!) on FIELD | FRAGMENT_SPREAD | INLINE_FRAGMENT

directive @include(if: Boolean!) on FIELD | FRAGMENT_SPREAD | INLINE_FRAGMENT
"#;

pub fn parse_no_loc(source: &str) -> Result<ast::Document, SyntaxError> {
    crate::parse(source, ParseOptions::no_location())
}

pub fn parse_err(source: &str) -> SyntaxError {
    match crate::parse(source, ParseOptions::default()) {
        Ok(doc) => panic!("Expected a syntax error, parsed: {doc:?}"),
        Err(err) => err,
    }
}

pub fn first_operation(doc: &ast::Document) -> &ast::OperationDefinition {
    doc.operations().next().expect("no operation in document")
}

pub fn first_field(selection_set: &ast::SelectionSet) -> &ast::Field {
    match selection_set.selections.first() {
        Some(ast::Selection::Field(field)) => field,
        other => panic!("Expected a field selection, got: {other:?}"),
    }
}

pub fn first_arg_value(field: &ast::Field) -> &ast::Value {
    &field.arguments.first().expect("field has no arguments").value
}
