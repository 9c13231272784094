use crate::Schema;
use crate::types::DirectiveDefinition;
use crate::types::DirectiveLocation;
use crate::types::EnumType;
use crate::types::Field;
use crate::types::InputObjectType;
use crate::types::InputValue;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::TypeRef;
use crate::types::UnionType;
use crate::validation::RuleFactory;
use crate::validation::validate_with_rules;
use gqlrt_parser::ParseOptions;
use gqlrt_parser::ast;

fn named_field() -> Field {
    Field::new("String").argument("surname", InputValue::new("Boolean"))
}

fn list_of(name: &str) -> TypeRef {
    TypeRef::named(name).list()
}

/// The schema the rule tests validate against.
pub(crate) fn test_schema() -> Schema {
    let being = InterfaceType::builder("Being").field("name", named_field()).build();
    let pet = InterfaceType::builder("Pet").field("name", named_field()).build();
    let canine = InterfaceType::builder("Canine").field("name", named_field()).build();
    let intelligent = InterfaceType::builder("Intelligent").field("iq", Field::new("Int")).build();

    let dog_command = EnumType::builder("DogCommand")
        .simple_value("SIT")
        .simple_value("HEEL")
        .simple_value("DOWN")
        .build();
    let fur_color = EnumType::builder("FurColor")
        .simple_value("BROWN")
        .simple_value("BLACK")
        .simple_value("TAN")
        .simple_value("SPOTTED")
        .build();

    let dog = ObjectType::builder("Dog")
        .interface("Being")
        .interface("Pet")
        .interface("Canine")
        .field("name", named_field())
        .field("nickname", Field::new("String"))
        .field("barkVolume", Field::new("Int"))
        .field("barks", Field::new("Boolean"))
        .field(
            "doesKnowCommand",
            Field::new("Boolean").argument("dogCommand", InputValue::new("DogCommand")),
        )
        .field(
            "isHousetrained",
            Field::new("Boolean")
                .argument("atOtherHomes", InputValue::new("Boolean").default_value(true)),
        )
        .field(
            "isAtLocation",
            Field::new("Boolean")
                .argument("x", InputValue::new("Int"))
                .argument("y", InputValue::new("Int")),
        )
        .build();

    let cat = ObjectType::builder("Cat")
        .interface("Being")
        .interface("Pet")
        .field("name", named_field())
        .field("nickname", Field::new("String"))
        .field("meows", Field::new("Boolean"))
        .field("meowVolume", Field::new("Int"))
        .field("furColor", Field::new("FurColor"))
        .build();

    let human = ObjectType::builder("Human")
        .interface("Being")
        .interface("Intelligent")
        .field("name", named_field())
        .field("pets", Field::new(list_of("Pet")))
        .field("relatives", Field::new(list_of("Human")))
        .field("iq", Field::new("Int"))
        .build();

    let alien = ObjectType::builder("Alien")
        .interface("Being")
        .interface("Intelligent")
        .field("iq", Field::new("Int"))
        .field("name", named_field())
        .field("numEyes", Field::new("Int"))
        .build();

    let cat_or_dog = UnionType::builder("CatOrDog").member("Cat").member("Dog").build();
    let dog_or_human = UnionType::builder("DogOrHuman").member("Dog").member("Human").build();
    let human_or_alien = UnionType::builder("HumanOrAlien").member("Human").member("Alien").build();

    let complex_input = InputObjectType::builder("ComplexInput")
        .field("requiredField", InputValue::new(TypeRef::named("Boolean").non_null()))
        .field("intField", InputValue::new("Int"))
        .field("stringField", InputValue::new("String"))
        .field("booleanField", InputValue::new("Boolean"))
        .field("stringListField", InputValue::new(list_of("String")))
        .build();

    let int_arg = |name: &str| Field::new("String").argument(name, InputValue::new("Int"));
    let required_int = || InputValue::new(TypeRef::named("Int").non_null());
    let optional_int = || InputValue::new("Int").default_value(0);
    let complicated_args = ObjectType::builder("ComplicatedArgs")
        .field("intArgField", int_arg("intArg"))
        .field(
            "nonNullIntArgField",
            Field::new("String").argument("nonNullIntArg", required_int()),
        )
        .field(
            "stringArgField",
            Field::new("String").argument("stringArg", InputValue::new("String")),
        )
        .field(
            "booleanArgField",
            Field::new("String").argument("booleanArg", InputValue::new("Boolean")),
        )
        .field(
            "enumArgField",
            Field::new("String").argument("enumArg", InputValue::new("FurColor")),
        )
        .field(
            "floatArgField",
            Field::new("String").argument("floatArg", InputValue::new("Float")),
        )
        .field("idArgField", Field::new("String").argument("idArg", InputValue::new("ID")))
        .field(
            "stringListArgField",
            Field::new("String").argument("stringListArg", InputValue::new(list_of("String"))),
        )
        .field(
            "complexArgField",
            Field::new("String").argument("complexArg", InputValue::new("ComplexInput")),
        )
        .field(
            "multipleReqs",
            Field::new("String")
                .argument("req1", required_int())
                .argument("req2", required_int()),
        )
        .field(
            "multipleOpts",
            Field::new("String")
                .argument("opt1", optional_int())
                .argument("opt2", optional_int()),
        )
        .field(
            "multipleOptAndReq",
            Field::new("String")
                .argument("req1", required_int())
                .argument("req2", required_int())
                .argument("opt1", optional_int())
                .argument("opt2", optional_int()),
        )
        .build();

    let query = ObjectType::builder("QueryRoot")
        .field("human", Field::new("Human").argument("id", InputValue::new("ID")))
        .field("alien", Field::new("Alien"))
        .field("dog", Field::new("Dog"))
        .field("cat", Field::new("Cat"))
        .field("pet", Field::new("Pet"))
        .field("catOrDog", Field::new("CatOrDog"))
        .field("dogOrHuman", Field::new("DogOrHuman"))
        .field("humanOrAlien", Field::new("HumanOrAlien"))
        .field("complicatedArgs", Field::new("ComplicatedArgs"))
        .build();

    let mutation = ObjectType::builder("MutationRoot")
        .field("renameDog", Field::new("Dog").argument("name", InputValue::new("String")))
        .build();

    let subscription = ObjectType::builder("SubscriptionRoot")
        .field("catEvents", Field::new("Cat"))
        .field("dogEvents", Field::new("Dog"))
        .build();

    let result = Schema::builder()
        .query(query)
        .mutation(mutation)
        .subscription(subscription)
        .add_type(being)
        .add_type(pet)
        .add_type(canine)
        .add_type(intelligent)
        .add_type(dog_command)
        .add_type(fur_color)
        .add_type(dog)
        .add_type(cat)
        .add_type(human)
        .add_type(alien)
        .add_type(cat_or_dog)
        .add_type(dog_or_human)
        .add_type(human_or_alien)
        .add_type(complex_input)
        .add_type(complicated_args)
        .add_directive(DirectiveDefinition::new("onQuery", [DirectiveLocation::Query]))
        .add_directive(DirectiveDefinition::new("onMutation", [DirectiveLocation::Mutation]))
        .build();
    match result {
        Ok(schema) => schema,
        Err(err) => panic!("test schema is invalid: {err}"),
    }
}

pub(crate) fn parse_query(query: &str) -> ast::Document {
    gqlrt_parser::parse(query, ParseOptions::default())
        .unwrap_or_else(|err| panic!("test query does not parse: {err}"))
}

fn run(factory: RuleFactory, query: &str) -> Vec<(String, Vec<(usize, usize)>)> {
    run_on_document(factory, &parse_query(query))
}

fn run_on_document(factory: RuleFactory, document: &ast::Document) -> Vec<(String, Vec<(usize, usize)>)> {
    let schema = test_schema();
    validate_with_rules(&schema, document, &[factory])
        .into_iter()
        .map(|err| {
            let locations = err.locations.iter().map(|loc| (loc.line, loc.column)).collect();
            (err.message, locations)
        })
        .collect()
}

pub(crate) fn expect_passes_rule(factory: RuleFactory, query: &str) {
    let errors = run(factory, query);
    assert!(errors.is_empty(), "expected no errors, got {errors:#?}");
}

/// Asserts that exactly `expected` errors (message and `(line, column)`
/// locations) are reported, in order.
pub(crate) fn expect_fails_rule(factory: RuleFactory, query: &str, expected: &[(&str, &[(usize, usize)])]) {
    assert_errors(run(factory, query), expected);
}

/// Like [`expect_fails_rule`], for documents the parser would not produce
/// on its own.
pub(crate) fn expect_fails_rule_on_document(
    factory: RuleFactory,
    document: &ast::Document,
    expected: &[(&str, &[(usize, usize)])],
) {
    assert_errors(run_on_document(factory, document), expected);
}

fn assert_errors(errors: Vec<(String, Vec<(usize, usize)>)>, expected: &[(&str, &[(usize, usize)])]) {
    let expected: Vec<(String, Vec<(usize, usize)>)> = expected
        .iter()
        .map(|(message, locations)| (message.to_string(), locations.to_vec()))
        .collect();
    assert_eq!(errors, expected);
}
