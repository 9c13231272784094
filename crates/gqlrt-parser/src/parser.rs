//! A recursive-descent parser over the [lexer](crate::lexer)'s token stream.
//!
//! The parser keeps exactly one token of lookahead. Every `parse_*` method
//! starts with the current token positioned at the first token of its
//! production and leaves it positioned just past the last one.

use crate::IntoSource;
use crate::Source;
use crate::SyntaxError;
use crate::SyntaxErrorKind;
use crate::ast;
use crate::lexer::Lexer;
use crate::token::Token;
use crate::token::TokenKind;
use std::borrow::Cow;
use std::collections::HashSet;
use std::sync::Arc;

type Result<T> = std::result::Result<T, SyntaxError>;

/// Options accepted by [`parse`], [`parse_value`], and [`parse_type`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ParseOptions {
    /// When `true`, every `loc` in the resulting AST is `None`. Mostly useful
    /// for comparing ASTs in tests.
    pub no_location: bool,
}

impl ParseOptions {
    pub fn no_location() -> Self {
        Self { no_location: true }
    }
}

/// Parses a full GraphQL document.
///
/// ```rust
/// # use gqlrt_parser::ParseOptions;
/// let doc = gqlrt_parser::parse("{ hero { name } }", ParseOptions::default()).unwrap();
/// assert_eq!(doc.definitions.len(), 1);
/// ```
pub fn parse(source: impl IntoSource, options: ParseOptions) -> Result<ast::Document> {
    let source = source.into_source();
    let mut parser = Parser::new(&source, options)?;
    parser.parse_document()
}

/// Parses a single (possibly non-constant) value literal such as
/// `[1, $two, { three: 3 }]`.
pub fn parse_value(source: impl IntoSource, options: ParseOptions) -> Result<ast::Value> {
    let source = source.into_source();
    let mut parser = Parser::new(&source, options)?;
    let value = parser.parse_value_literal(false)?;
    parser.expect(TokenKind::Eof)?;
    Ok(value)
}

/// Parses a single type reference such as `[String!]!`.
pub fn parse_type(source: impl IntoSource, options: ParseOptions) -> Result<ast::Type> {
    let source = source.into_source();
    let mut parser = Parser::new(&source, options)?;
    let ty = parser.parse_type_reference()?;
    parser.expect(TokenKind::Eof)?;
    Ok(ty)
}

pub struct Parser<'src> {
    lexer: Lexer<'src>,
    options: ParseOptions,

    /// The lookahead token.
    token: Token<'src>,

    /// End offset of the most recently consumed token. Node locations end
    /// here.
    prev_end: usize,

    recursion_depth: usize,
}

impl<'src> Parser<'src> {
    const MAX_RECURSION_DEPTH: usize = 128;

    /// Creates a parser and primes the lookahead with the first token.
    pub fn new(source: &'src Arc<Source>, options: ParseOptions) -> Result<Self> {
        let mut lexer = Lexer::new(source);
        let token = lexer.next_token()?;
        Ok(Self {
            lexer,
            options,
            token,
            prev_end: 0,
            recursion_depth: 0,
        })
    }

    // =========================================================================
    // Token helpers
    // =========================================================================

    /// Consumes the lookahead token and returns it.
    fn advance(&mut self) -> Result<Token<'src>> {
        let next = self.lexer.next_token()?;
        self.prev_end = self.token.end;
        Ok(std::mem::replace(&mut self.token, next))
    }

    fn peek(&self, kind: TokenKind) -> bool {
        self.token.kind == kind
    }

    /// Returns the lookahead's text if it is a [`Name`](TokenKind::Name).
    fn peek_name(&self) -> Option<&'src str> {
        match (&self.token.kind, &self.token.value) {
            (TokenKind::Name, Some(Cow::Borrowed(name))) => Some(*name),
            _ => None,
        }
    }

    fn peek_keyword(&self, keyword: &str) -> bool {
        self.peek_name() == Some(keyword)
    }

    /// Consumes the lookahead if it is of `kind`, reporting whether it did.
    fn skip(&mut self, kind: TokenKind) -> Result<bool> {
        if self.peek(kind) {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn expect(&mut self, kind: TokenKind) -> Result<Token<'src>> {
        if self.peek(kind) {
            return self.advance();
        }
        Err(self.error_at(
            self.token.start,
            format!("Expected {kind}, found {}", self.token.describe()),
            SyntaxErrorKind::ExpectedToken {
                expected: kind.description().to_string(),
                found: self.token.describe(),
            },
        ))
    }

    fn expect_keyword(&mut self, keyword: &str) -> Result<Token<'src>> {
        if self.peek_keyword(keyword) {
            return self.advance();
        }
        Err(self.error_at(
            self.token.start,
            format!("Expected \"{keyword}\", found {}", self.token.describe()),
            SyntaxErrorKind::ExpectedToken {
                expected: keyword.to_string(),
                found: self.token.describe(),
            },
        ))
    }

    fn unexpected(&self) -> SyntaxError {
        self.unexpected_token(&self.token)
    }

    fn unexpected_token(&self, token: &Token<'_>) -> SyntaxError {
        self.error_at(
            token.start,
            format!("Unexpected {}", token.describe()),
            SyntaxErrorKind::UnexpectedToken {
                found: token.describe(),
            },
        )
    }

    fn error_at(
        &self,
        position: usize,
        description: impl Into<String>,
        kind: SyntaxErrorKind,
    ) -> SyntaxError {
        SyntaxError::new(self.lexer.source().clone(), position, description, kind)
    }

    /// The location of a node that started at `start` and ended with the most
    /// recently consumed token.
    fn loc(&self, start: usize) -> Option<ast::Loc> {
        if self.options.no_location {
            return None;
        }
        Some(ast::Loc {
            start,
            end: self.prev_end,
            source: self.lexer.source().clone(),
        })
    }

    /// `open item+ close`
    fn many<T>(
        &mut self,
        open: TokenKind,
        mut parse_item: impl FnMut(&mut Self) -> Result<T>,
        close: TokenKind,
    ) -> Result<Vec<T>> {
        self.expect(open)?;
        let mut nodes = vec![parse_item(self)?];
        while !self.skip(close)? {
            nodes.push(parse_item(self)?);
        }
        Ok(nodes)
    }

    /// `open item* close`
    fn any<T>(
        &mut self,
        open: TokenKind,
        mut parse_item: impl FnMut(&mut Self) -> Result<T>,
        close: TokenKind,
    ) -> Result<Vec<T>> {
        self.expect(open)?;
        let mut nodes = vec![];
        while !self.skip(close)? {
            nodes.push(parse_item(self)?);
        }
        Ok(nodes)
    }

    /// Runs `parse` one recursion level deeper, failing once the document
    /// nests past [`Self::MAX_RECURSION_DEPTH`].
    fn nested<T>(&mut self, parse: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        if self.recursion_depth >= Self::MAX_RECURSION_DEPTH {
            return Err(self.error_at(
                self.token.start,
                "Document nesting too deep",
                SyntaxErrorKind::NestingTooDeep,
            ));
        }
        self.recursion_depth += 1;
        let result = parse(self);
        self.recursion_depth -= 1;
        result
    }

    // =========================================================================
    // Document
    // =========================================================================

    pub fn parse_document(&mut self) -> Result<ast::Document> {
        let start = self.token.start;
        let mut definitions = vec![];
        loop {
            definitions.push(self.parse_definition()?);
            if self.skip(TokenKind::Eof)? {
                break;
            }
        }
        Ok(ast::Document {
            definitions,
            loc: self.loc(start),
        })
    }

    fn parse_definition(&mut self) -> Result<ast::Definition> {
        if self.peek(TokenKind::BraceL) {
            return Ok(ast::Definition::Operation(self.parse_operation_definition()?));
        }
        match self.peek_name() {
            Some("query" | "mutation" | "subscription") => {
                Ok(ast::Definition::Operation(self.parse_operation_definition()?))
            },
            Some("fragment") => {
                Ok(ast::Definition::Fragment(self.parse_fragment_definition()?))
            },
            Some(
                "schema" | "scalar" | "type" | "interface" | "union" | "enum" | "input"
                | "extend" | "directive",
            ) => Ok(ast::Definition::TypeSystem(self.parse_type_system_definition()?)),
            _ => Err(self.unexpected()),
        }
    }

    // =========================================================================
    // Operations
    // =========================================================================

    fn parse_operation_definition(&mut self) -> Result<ast::OperationDefinition> {
        let start = self.token.start;
        if self.peek(TokenKind::BraceL) {
            let selection_set = self.parse_selection_set()?;
            return Ok(ast::OperationDefinition {
                operation: ast::OperationType::Query,
                name: None,
                variable_definitions: vec![],
                directives: vec![],
                selection_set,
                loc: self.loc(start),
            });
        }

        let operation = self.parse_operation_type()?;
        let name = if self.peek(TokenKind::Name) {
            Some(self.parse_name()?)
        } else {
            None
        };
        let variable_definitions = self.parse_variable_definitions()?;
        let directives = self.parse_directives(false)?;
        let selection_set = self.parse_selection_set()?;
        Ok(ast::OperationDefinition {
            operation,
            name,
            variable_definitions,
            directives,
            selection_set,
            loc: self.loc(start),
        })
    }

    fn parse_operation_type(&mut self) -> Result<ast::OperationType> {
        let token = self.expect(TokenKind::Name)?;
        match token.value() {
            Some("query") => Ok(ast::OperationType::Query),
            Some("mutation") => Ok(ast::OperationType::Mutation),
            Some("subscription") => Ok(ast::OperationType::Subscription),
            _ => Err(self.unexpected_token(&token)),
        }
    }

    fn parse_variable_definitions(&mut self) -> Result<Vec<ast::VariableDefinition>> {
        if !self.peek(TokenKind::ParenL) {
            return Ok(vec![]);
        }
        self.many(TokenKind::ParenL, Self::parse_variable_definition, TokenKind::ParenR)
    }

    fn parse_variable_definition(&mut self) -> Result<ast::VariableDefinition> {
        let start = self.token.start;
        let variable = self.parse_variable()?;
        self.expect(TokenKind::Colon)?;
        let ty = self.parse_type_reference()?;
        let default_value = if self.skip(TokenKind::Equals)? {
            Some(self.parse_value_literal(true)?)
        } else {
            None
        };
        Ok(ast::VariableDefinition {
            variable,
            ty,
            default_value,
            loc: self.loc(start),
        })
    }

    fn parse_variable(&mut self) -> Result<ast::Variable> {
        let start = self.token.start;
        self.expect(TokenKind::Dollar)?;
        let name = self.parse_name()?;
        Ok(ast::Variable {
            name,
            loc: self.loc(start),
        })
    }

    // =========================================================================
    // Selections
    // =========================================================================

    fn parse_selection_set(&mut self) -> Result<ast::SelectionSet> {
        self.nested(|parser| {
            let start = parser.token.start;
            let selections =
                parser.many(TokenKind::BraceL, Self::parse_selection, TokenKind::BraceR)?;
            Ok(ast::SelectionSet {
                selections,
                loc: parser.loc(start),
            })
        })
    }

    fn parse_selection(&mut self) -> Result<ast::Selection> {
        if self.peek(TokenKind::Spread) {
            self.parse_fragment()
        } else {
            Ok(ast::Selection::Field(self.parse_field()?))
        }
    }

    fn parse_field(&mut self) -> Result<ast::Field> {
        let start = self.token.start;
        let name_or_alias = self.parse_name()?;
        let (alias, name) = if self.skip(TokenKind::Colon)? {
            (Some(name_or_alias), self.parse_name()?)
        } else {
            (None, name_or_alias)
        };
        let arguments = self.parse_arguments(false)?;
        let directives = self.parse_directives(false)?;
        let selection_set = if self.peek(TokenKind::BraceL) {
            Some(self.parse_selection_set()?)
        } else {
            None
        };
        Ok(ast::Field {
            alias,
            name,
            arguments,
            directives,
            selection_set,
            loc: self.loc(start),
        })
    }

    fn parse_arguments(&mut self, is_const: bool) -> Result<Vec<ast::Argument>> {
        if !self.peek(TokenKind::ParenL) {
            return Ok(vec![]);
        }
        self.many(
            TokenKind::ParenL,
            |parser| parser.parse_argument(is_const),
            TokenKind::ParenR,
        )
    }

    fn parse_argument(&mut self, is_const: bool) -> Result<ast::Argument> {
        let start = self.token.start;
        let name = self.parse_name()?;
        self.expect(TokenKind::Colon)?;
        let value = self.parse_value_literal(is_const)?;
        Ok(ast::Argument {
            name,
            value,
            loc: self.loc(start),
        })
    }

    /// Parses whatever follows `...`: an inline fragment when the next token
    /// is `on`, `@`, or `{`, otherwise a named fragment spread.
    fn parse_fragment(&mut self) -> Result<ast::Selection> {
        let start = self.token.start;
        self.expect(TokenKind::Spread)?;

        if self.peek(TokenKind::Name) && !self.peek_keyword("on") {
            let name = self.parse_fragment_name()?;
            let directives = self.parse_directives(false)?;
            return Ok(ast::Selection::FragmentSpread(ast::FragmentSpread {
                name,
                directives,
                loc: self.loc(start),
            }));
        }

        let type_condition = if self.peek_keyword("on") {
            self.advance()?;
            Some(self.parse_named_type()?)
        } else {
            None
        };
        let directives = self.parse_directives(false)?;
        let selection_set = self.parse_selection_set()?;
        Ok(ast::Selection::InlineFragment(ast::InlineFragment {
            type_condition,
            directives,
            selection_set,
            loc: self.loc(start),
        }))
    }

    // =========================================================================
    // Fragments
    // =========================================================================

    fn parse_fragment_definition(&mut self) -> Result<ast::FragmentDefinition> {
        let start = self.token.start;
        self.expect_keyword("fragment")?;
        let name = self.parse_fragment_name()?;
        self.expect_keyword("on")?;
        let type_condition = self.parse_named_type()?;
        let directives = self.parse_directives(false)?;
        let selection_set = self.parse_selection_set()?;
        Ok(ast::FragmentDefinition {
            name,
            type_condition,
            directives,
            selection_set,
            loc: self.loc(start),
        })
    }

    /// A fragment name is any name except `on`.
    fn parse_fragment_name(&mut self) -> Result<ast::Name> {
        if self.peek_keyword("on") {
            return Err(self.unexpected());
        }
        self.parse_name()
    }

    // =========================================================================
    // Values
    // =========================================================================

    /// Parses a value literal. With `is_const`, variables are rejected.
    fn parse_value_literal(&mut self, is_const: bool) -> Result<ast::Value> {
        let start = self.token.start;
        match self.token.kind {
            TokenKind::BracketL => self.nested(|parser| parser.parse_list(is_const)),
            TokenKind::BraceL => self.nested(|parser| parser.parse_object(is_const)),
            TokenKind::Int => {
                let value = token_text(self.advance()?);
                Ok(ast::Value::Int(ast::IntValue {
                    value,
                    loc: self.loc(start),
                }))
            },
            TokenKind::Float => {
                let value = token_text(self.advance()?);
                Ok(ast::Value::Float(ast::FloatValue {
                    value,
                    loc: self.loc(start),
                }))
            },
            TokenKind::String => {
                let value = token_text(self.advance()?);
                Ok(ast::Value::String(ast::StringValue {
                    value,
                    loc: self.loc(start),
                }))
            },
            TokenKind::Name => {
                let token = self.advance()?;
                let loc = self.loc(start);
                Ok(match token.value() {
                    Some("true") => ast::Value::Boolean(ast::BooleanValue { value: true, loc }),
                    Some("false") => ast::Value::Boolean(ast::BooleanValue { value: false, loc }),
                    Some("null") => ast::Value::Null(ast::NullValue { loc }),
                    other => ast::Value::Enum(ast::EnumValue {
                        value: other.unwrap_or_default().to_string(),
                        loc,
                    }),
                })
            },
            TokenKind::Dollar if !is_const => Ok(ast::Value::Variable(self.parse_variable()?)),
            _ => Err(self.unexpected()),
        }
    }

    fn parse_list(&mut self, is_const: bool) -> Result<ast::Value> {
        let start = self.token.start;
        let values = self.any(
            TokenKind::BracketL,
            |parser| parser.parse_value_literal(is_const),
            TokenKind::BracketR,
        )?;
        Ok(ast::Value::List(ast::ListValue {
            values,
            loc: self.loc(start),
        }))
    }

    fn parse_object(&mut self, is_const: bool) -> Result<ast::Value> {
        let start = self.token.start;
        self.expect(TokenKind::BraceL)?;
        let mut field_names = HashSet::new();
        let mut fields = vec![];
        while !self.skip(TokenKind::BraceR)? {
            fields.push(self.parse_object_field(is_const, &mut field_names)?);
        }
        Ok(ast::Value::Object(ast::ObjectValue {
            fields,
            loc: self.loc(start),
        }))
    }

    fn parse_object_field(
        &mut self,
        is_const: bool,
        field_names: &mut HashSet<String>,
    ) -> Result<ast::ObjectField> {
        let start = self.token.start;
        let name = self.parse_name()?;
        if !field_names.insert(name.value.clone()) {
            return Err(self.error_at(
                start,
                format!("Duplicate input object field {}.", name.value),
                SyntaxErrorKind::DuplicateObjectField {
                    name: name.value,
                },
            ));
        }
        self.expect(TokenKind::Colon)?;
        let value = self.parse_value_literal(is_const)?;
        Ok(ast::ObjectField {
            name,
            value,
            loc: self.loc(start),
        })
    }

    // =========================================================================
    // Directives
    // =========================================================================

    fn parse_directives(&mut self, is_const: bool) -> Result<Vec<ast::Directive>> {
        let mut directives = vec![];
        while self.peek(TokenKind::At) {
            directives.push(self.parse_directive(is_const)?);
        }
        Ok(directives)
    }

    fn parse_directive(&mut self, is_const: bool) -> Result<ast::Directive> {
        let start = self.token.start;
        self.expect(TokenKind::At)?;
        let name = self.parse_name()?;
        let arguments = self.parse_arguments(is_const)?;
        Ok(ast::Directive {
            name,
            arguments,
            loc: self.loc(start),
        })
    }

    // =========================================================================
    // Types
    // =========================================================================

    /// `Name`, `[Type]`, each optionally followed by a single `!`.
    fn parse_type_reference(&mut self) -> Result<ast::Type> {
        let start = self.token.start;
        let ty = if self.skip(TokenKind::BracketL)? {
            let inner = self.nested(Self::parse_type_reference)?;
            self.expect(TokenKind::BracketR)?;
            ast::Type::List(Box::new(ast::ListType {
                ty: inner,
                loc: self.loc(start),
            }))
        } else {
            ast::Type::Named(self.parse_named_type()?)
        };

        if !self.skip(TokenKind::Bang)? {
            return Ok(ty);
        }
        if self.peek(TokenKind::Bang) {
            return Err(self.error_at(
                self.token.start,
                "Unexpected !",
                SyntaxErrorKind::NestedNonNull,
            ));
        }
        Ok(ast::Type::NonNull(Box::new(ast::NonNullType {
            ty,
            loc: self.loc(start),
        })))
    }

    fn parse_named_type(&mut self) -> Result<ast::NamedType> {
        let start = self.token.start;
        let name = self.parse_name()?;
        Ok(ast::NamedType {
            name,
            loc: self.loc(start),
        })
    }

    fn parse_name(&mut self) -> Result<ast::Name> {
        let token = self.expect(TokenKind::Name)?;
        let start = token.start;
        Ok(ast::Name {
            value: token_text(token),
            loc: self.loc(start),
        })
    }

    // =========================================================================
    // Type system definitions
    // =========================================================================

    fn parse_type_system_definition(&mut self) -> Result<ast::TypeSystemDefinition> {
        use ast::TypeDefinition as TD;
        use ast::TypeSystemDefinition as TSD;

        Ok(match self.peek_name() {
            Some("schema") => TSD::Schema(self.parse_schema_definition()?),
            Some("scalar") => TSD::Type(TD::Scalar(self.parse_scalar_type_definition()?)),
            Some("type") => TSD::Type(TD::Object(self.parse_object_type_definition()?)),
            Some("interface") => {
                TSD::Type(TD::Interface(self.parse_interface_type_definition()?))
            },
            Some("union") => TSD::Type(TD::Union(self.parse_union_type_definition()?)),
            Some("enum") => TSD::Type(TD::Enum(self.parse_enum_type_definition()?)),
            Some("input") => {
                TSD::Type(TD::InputObject(self.parse_input_object_type_definition()?))
            },
            Some("extend") => TSD::TypeExtension(self.parse_type_extension_definition()?),
            Some("directive") => TSD::Directive(self.parse_directive_definition()?),
            _ => return Err(self.unexpected()),
        })
    }

    fn parse_schema_definition(&mut self) -> Result<ast::SchemaDefinition> {
        let start = self.token.start;
        self.expect_keyword("schema")?;
        let directives = self.parse_directives(true)?;
        let operation_types = self.many(
            TokenKind::BraceL,
            Self::parse_operation_type_definition,
            TokenKind::BraceR,
        )?;
        Ok(ast::SchemaDefinition {
            directives,
            operation_types,
            loc: self.loc(start),
        })
    }

    fn parse_operation_type_definition(&mut self) -> Result<ast::OperationTypeDefinition> {
        let start = self.token.start;
        let operation = self.parse_operation_type()?;
        self.expect(TokenKind::Colon)?;
        let ty = self.parse_named_type()?;
        Ok(ast::OperationTypeDefinition {
            operation,
            ty,
            loc: self.loc(start),
        })
    }

    fn parse_scalar_type_definition(&mut self) -> Result<ast::ScalarTypeDefinition> {
        let start = self.token.start;
        self.expect_keyword("scalar")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives(true)?;
        Ok(ast::ScalarTypeDefinition {
            name,
            directives,
            loc: self.loc(start),
        })
    }

    fn parse_object_type_definition(&mut self) -> Result<ast::ObjectTypeDefinition> {
        let start = self.token.start;
        self.expect_keyword("type")?;
        let name = self.parse_name()?;
        let interfaces = self.parse_implements_interfaces()?;
        let directives = self.parse_directives(true)?;
        let fields = self.any(
            TokenKind::BraceL,
            Self::parse_field_definition,
            TokenKind::BraceR,
        )?;
        Ok(ast::ObjectTypeDefinition {
            name,
            interfaces,
            directives,
            fields,
            loc: self.loc(start),
        })
    }

    /// `implements A B` (commas between names are ignored like anywhere).
    fn parse_implements_interfaces(&mut self) -> Result<Vec<ast::NamedType>> {
        let mut interfaces = vec![];
        if self.peek_keyword("implements") {
            self.advance()?;
            loop {
                interfaces.push(self.parse_named_type()?);
                if !self.peek(TokenKind::Name) {
                    break;
                }
            }
        }
        Ok(interfaces)
    }

    fn parse_field_definition(&mut self) -> Result<ast::FieldDefinition> {
        let start = self.token.start;
        let name = self.parse_name()?;
        let arguments = self.parse_argument_definitions()?;
        self.expect(TokenKind::Colon)?;
        let ty = self.parse_type_reference()?;
        let directives = self.parse_directives(true)?;
        Ok(ast::FieldDefinition {
            name,
            arguments,
            ty,
            directives,
            loc: self.loc(start),
        })
    }

    fn parse_argument_definitions(&mut self) -> Result<Vec<ast::InputValueDefinition>> {
        if !self.peek(TokenKind::ParenL) {
            return Ok(vec![]);
        }
        self.many(
            TokenKind::ParenL,
            Self::parse_input_value_definition,
            TokenKind::ParenR,
        )
    }

    fn parse_input_value_definition(&mut self) -> Result<ast::InputValueDefinition> {
        let start = self.token.start;
        let name = self.parse_name()?;
        self.expect(TokenKind::Colon)?;
        let ty = self.parse_type_reference()?;
        let default_value = if self.skip(TokenKind::Equals)? {
            Some(self.parse_value_literal(true)?)
        } else {
            None
        };
        let directives = self.parse_directives(true)?;
        Ok(ast::InputValueDefinition {
            name,
            ty,
            default_value,
            directives,
            loc: self.loc(start),
        })
    }

    fn parse_interface_type_definition(&mut self) -> Result<ast::InterfaceTypeDefinition> {
        let start = self.token.start;
        self.expect_keyword("interface")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives(true)?;
        let fields = self.any(
            TokenKind::BraceL,
            Self::parse_field_definition,
            TokenKind::BraceR,
        )?;
        Ok(ast::InterfaceTypeDefinition {
            name,
            directives,
            fields,
            loc: self.loc(start),
        })
    }

    fn parse_union_type_definition(&mut self) -> Result<ast::UnionTypeDefinition> {
        let start = self.token.start;
        self.expect_keyword("union")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives(true)?;
        self.expect(TokenKind::Equals)?;
        self.skip(TokenKind::Pipe)?;
        let mut types = vec![self.parse_named_type()?];
        while self.skip(TokenKind::Pipe)? {
            types.push(self.parse_named_type()?);
        }
        Ok(ast::UnionTypeDefinition {
            name,
            directives,
            types,
            loc: self.loc(start),
        })
    }

    fn parse_enum_type_definition(&mut self) -> Result<ast::EnumTypeDefinition> {
        let start = self.token.start;
        self.expect_keyword("enum")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives(true)?;
        let values = self.many(
            TokenKind::BraceL,
            Self::parse_enum_value_definition,
            TokenKind::BraceR,
        )?;
        Ok(ast::EnumTypeDefinition {
            name,
            directives,
            values,
            loc: self.loc(start),
        })
    }

    fn parse_enum_value_definition(&mut self) -> Result<ast::EnumValueDefinition> {
        let start = self.token.start;
        let name = self.parse_name()?;
        let directives = self.parse_directives(true)?;
        Ok(ast::EnumValueDefinition {
            name,
            directives,
            loc: self.loc(start),
        })
    }

    fn parse_input_object_type_definition(
        &mut self,
    ) -> Result<ast::InputObjectTypeDefinition> {
        let start = self.token.start;
        self.expect_keyword("input")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives(true)?;
        let fields = self.any(
            TokenKind::BraceL,
            Self::parse_input_value_definition,
            TokenKind::BraceR,
        )?;
        Ok(ast::InputObjectTypeDefinition {
            name,
            directives,
            fields,
            loc: self.loc(start),
        })
    }

    fn parse_type_extension_definition(&mut self) -> Result<ast::TypeExtensionDefinition> {
        let start = self.token.start;
        self.expect_keyword("extend")?;
        let definition = self.parse_object_type_definition()?;
        Ok(ast::TypeExtensionDefinition {
            definition,
            loc: self.loc(start),
        })
    }

    fn parse_directive_definition(&mut self) -> Result<ast::DirectiveDefinition> {
        let start = self.token.start;
        self.expect_keyword("directive")?;
        self.expect(TokenKind::At)?;
        let name = self.parse_name()?;
        let arguments = self.parse_argument_definitions()?;
        self.expect_keyword("on")?;
        self.skip(TokenKind::Pipe)?;
        let mut locations = vec![self.parse_name()?];
        while self.skip(TokenKind::Pipe)? {
            locations.push(self.parse_name()?);
        }
        Ok(ast::DirectiveDefinition {
            name,
            arguments,
            locations,
            loc: self.loc(start),
        })
    }
}

fn token_text(token: Token<'_>) -> String {
    token.value.map(Cow::into_owned).unwrap_or_default()
}
