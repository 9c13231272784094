use crate::GraphQLError;
use crate::validation::RuleFactory;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use crate::validation::rules::test_harness::test_schema;
use crate::validation::specified_rules;
use crate::validation::validate;
use crate::validation::validate_with_rules;
use gqlrt_parser::ParseOptions;
use gqlrt_parser::parse;
use gqlrt_parser::visit::Node;
use gqlrt_parser::visit::VisitorAction;

fn messages(rules: &[RuleFactory], query: &str) -> Vec<String> {
    let schema = test_schema();
    let document = parse(query, ParseOptions::default()).unwrap();
    validate_with_rules(&schema, &document, rules)
        .into_iter()
        .map(|err| err.message)
        .collect()
}

// =============================================================================
// Full rule set
// =============================================================================

#[test]
fn specified_rules_count() {
    assert_eq!(specified_rules().len(), 26);
}

#[test]
fn valid_document_produces_no_errors() {
    let schema = test_schema();
    let document = parse(
        r#"
        query Q($id: ID, $atOtherHomes: Boolean = true) {
          human(id: $id) {
            name
            pets { ...petFields ... on Dog { isHousetrained(atOtherHomes: $atOtherHomes) } }
          }
          catOrDog { __typename ... on Cat { meows furColor } }
        }

        mutation M @onMutation { renameDog(name: "Rex") { name } }

        subscription S { dogEvents { barkVolume } }

        fragment petFields on Pet { name nickname: name }
        "#,
        ParseOptions::default(),
    )
    .unwrap();
    let errors = validate(&schema, &document);
    assert!(errors.is_empty(), "{errors:#?}");
}

#[test]
fn unknown_field_on_concrete_type() {
    let schema = test_schema();
    let document = parse("{ dog { meowVolume } }", ParseOptions::default()).unwrap();
    let errors = validate(&schema, &document);
    assert_eq!(errors.len(), 1, "{errors:#?}");
    assert!(errors[0].message.starts_with("Cannot query field 'meowVolume' on type 'Dog'."));
    assert_eq!(errors[0].locations.len(), 1);
    assert_eq!((errors[0].locations[0].line, errors[0].locations[0].column), (1, 9));
}

#[test]
fn errors_follow_document_order() {
    let schema = test_schema();
    let document = parse(
        "query A { dog { unknownField } } query A { dog { name } }",
        ParseOptions::default(),
    )
    .unwrap();
    let errors: Vec<GraphQLError> = validate(&schema, &document);
    assert_eq!(errors.len(), 2, "{errors:#?}");
    assert!(errors[0].message.starts_with("Cannot query field 'unknownField' on type 'Dog'."));
    assert_eq!(errors[1].message, "There can only be one operation named 'A'.");
}

#[test]
fn validation_errors_serialize_with_locations() {
    let schema = test_schema();
    let document = parse("{ dog { name(surname: 1) } }", ParseOptions::default()).unwrap();
    let errors = validate(&schema, &document);
    let json = serde_json::to_value(&errors).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{
            "message": "Argument 'surname' has invalid value 1.\nExpected type \"Boolean\", found 1.",
            "locations": [{"line": 1, "column": 23}],
        }]),
    );
}

// =============================================================================
// Walk control
// =============================================================================

fn field_name<'a>(node: Node<'a>) -> Option<&'a str> {
    match node {
        Node::Field(field) => Some(field.name.as_str()),
        _ => None,
    }
}

struct SkipFields;

fn skip_fields<'a>(_ctx: &ValidationContext<'a>) -> Box<dyn ValidationRule<'a> + 'a> {
    Box::new(SkipFields)
}

impl<'a> ValidationRule<'a> for SkipFields {
    fn enter(&mut self, ctx: &mut ValidationContext<'a>, node: Node<'a>, _ancestors: &[Node<'a>]) -> VisitorAction {
        match field_name(node) {
            Some(name) => {
                ctx.report_error(GraphQLError::new(format!("skip enter {name}")));
                VisitorAction::Skip
            },
            None => VisitorAction::Continue,
        }
    }

    fn leave(&mut self, ctx: &mut ValidationContext<'a>, node: Node<'a>, _ancestors: &[Node<'a>]) -> VisitorAction {
        if let Some(name) = field_name(node) {
            ctx.report_error(GraphQLError::new(format!("skip leave {name}")));
        }
        VisitorAction::Continue
    }
}

struct CountFields;

fn count_fields<'a>(_ctx: &ValidationContext<'a>) -> Box<dyn ValidationRule<'a> + 'a> {
    Box::new(CountFields)
}

impl<'a> ValidationRule<'a> for CountFields {
    fn enter(&mut self, ctx: &mut ValidationContext<'a>, node: Node<'a>, _ancestors: &[Node<'a>]) -> VisitorAction {
        if let Some(name) = field_name(node) {
            ctx.report_error(GraphQLError::new(format!("count {name}")));
        }
        VisitorAction::Continue
    }
}

struct BreakOnFirstField;

fn break_on_first_field<'a>(_ctx: &ValidationContext<'a>) -> Box<dyn ValidationRule<'a> + 'a> {
    Box::new(BreakOnFirstField)
}

impl<'a> ValidationRule<'a> for BreakOnFirstField {
    fn enter(&mut self, ctx: &mut ValidationContext<'a>, node: Node<'a>, _ancestors: &[Node<'a>]) -> VisitorAction {
        match field_name(node) {
            Some(name) => {
                ctx.report_error(GraphQLError::new(format!("break {name}")));
                VisitorAction::Break
            },
            None => VisitorAction::Continue,
        }
    }
}

#[test]
fn skipping_a_subtree_hides_it_from_that_rule_only() {
    let rules: [RuleFactory; 2] = [skip_fields, count_fields];
    assert_eq!(
        messages(&rules, "{ dog { name } cat { name } }"),
        ["skip enter dog", "count dog", "count name", "skip enter cat", "count cat", "count name"],
    );
}

#[test]
fn breaking_stops_only_that_rule() {
    let rules: [RuleFactory; 2] = [break_on_first_field, count_fields];
    assert_eq!(
        messages(&rules, "{ dog { name } cat { name } }"),
        ["break dog", "count dog", "count name", "count cat", "count name"],
    );
}

#[test]
fn no_rules_no_errors() {
    assert!(messages(&[], "{ dog { unknownField } }").is_empty());
}
