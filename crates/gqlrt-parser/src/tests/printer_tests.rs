//! Tests for [`crate::print`].

use crate::ParseOptions;
use crate::parse_value;
use crate::print;
use crate::print_value;
use crate::tests::ast_utils::KITCHEN_SINK;
use crate::tests::ast_utils::SCHEMA_KITCHEN_SINK;
use crate::tests::ast_utils::parse_no_loc;

type Result<T> = std::result::Result<T, crate::SyntaxError>;

const PRINTED_KITCHEN_SINK: &str = r#"query queryName($foo: ComplexType, $site: Site = MOBILE) {
  whoever123is: node(id: [123, 456]) {
    id
    ... on User @defer {
      field2 {
        id
        alias: field1(first: 10, after: $foo) @include(if: $foo) {
          id
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
  unnamed(truthy: true, falsey: false, nullish: null)
  query
}
"#;

#[test]
fn prints_kitchen_sink() -> Result<()> {
    let doc = parse_no_loc(KITCHEN_SINK)?;
    assert_eq!(print(&doc), PRINTED_KITCHEN_SINK);
    Ok(())
}

#[test]
fn prints_schema_kitchen_sink_verbatim() -> Result<()> {
    let doc = parse_no_loc(SCHEMA_KITCHEN_SINK)?;
    assert_eq!(print(&doc), SCHEMA_KITCHEN_SINK);
    Ok(())
}

#[test]
fn print_then_parse_round_trips() -> Result<()> {
    for source in [KITCHEN_SINK, SCHEMA_KITCHEN_SINK] {
        let doc = parse_no_loc(source)?;
        let reparsed = parse_no_loc(&print(&doc))?;
        assert_eq!(reparsed, doc);
    }
    Ok(())
}

#[test]
fn anonymous_query_with_variables_keeps_keyword() -> Result<()> {
    let doc = parse_no_loc("query ($id: ID!) { node(id: $id) { id } }")?;
    assert_eq!(
        print(&doc),
        "query ($id: ID!) {\n  node(id: $id) {\n    id\n  }\n}\n",
    );
    Ok(())
}

#[test]
fn named_query_without_shorthand() -> Result<()> {
    let doc = parse_no_loc("query Q @live { a }")?;
    assert_eq!(print(&doc), "query Q @live {\n  a\n}\n");
    Ok(())
}

#[test]
fn strings_are_escaped() -> Result<()> {
    let value = parse_value(r#""quote \" newline \n tab \t unicode é""#, ParseOptions::no_location())?;
    assert_eq!(print_value(&value), r#""quote \" newline \n tab \t unicode é""#);
    Ok(())
}

#[test]
fn escaped_strings_round_trip() -> Result<()> {
    let source = r#"{ f(a: "back\\slash \"q\" \u0001 \/") }"#;
    let doc = parse_no_loc(source)?;
    assert_eq!(parse_no_loc(&print(&doc))?, doc);
    Ok(())
}
