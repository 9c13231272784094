//! Tests for [`crate::visit`].

use crate::tests::ast_utils::parse_no_loc;
use crate::visit::Node;
use crate::visit::Visitor;
use crate::visit::VisitorAction;
use crate::visit::visit;

/// Records `enter`/`leave` events as short strings.
#[derive(Default)]
struct EventLog {
    events: Vec<String>,
    skip_field: Option<&'static str>,
    break_on_field: Option<&'static str>,
}

fn describe(node: &Node<'_>) -> String {
    match node {
        Node::Document(_) => "Document".to_string(),
        Node::OperationDefinition(_) => "OperationDefinition".to_string(),
        Node::SelectionSet(_) => "SelectionSet".to_string(),
        Node::Field(field) => format!("Field({})", field.name),
        Node::Argument(arg) => format!("Argument({})", arg.name),
        Node::Value(_) => "Value".to_string(),
        other => format!("{other:?}"),
    }
}

impl<'a> Visitor<'a> for EventLog {
    fn enter(&mut self, node: Node<'a>, _ancestors: &[Node<'a>]) -> VisitorAction {
        self.events.push(format!("enter {}", describe(&node)));
        if let Node::Field(field) = node {
            if Some(field.name.as_str()) == self.skip_field {
                return VisitorAction::Skip;
            }
            if Some(field.name.as_str()) == self.break_on_field {
                return VisitorAction::Break;
            }
        }
        VisitorAction::Continue
    }

    fn leave(&mut self, node: Node<'a>, _ancestors: &[Node<'a>]) -> VisitorAction {
        self.events.push(format!("leave {}", describe(&node)));
        VisitorAction::Continue
    }
}

#[test]
fn visits_in_document_order() {
    let doc = parse_no_loc("{ a(x: 1) { b } }").expect("parse error");
    let mut log = EventLog::default();
    assert!(visit(Node::Document(&doc), &mut log));
    assert_eq!(
        log.events,
        vec![
            "enter Document",
            "enter OperationDefinition",
            "enter SelectionSet",
            "enter Field(a)",
            "enter Argument(x)",
            "enter Value",
            "leave Value",
            "leave Argument(x)",
            "enter SelectionSet",
            "enter Field(b)",
            "leave Field(b)",
            "leave SelectionSet",
            "leave Field(a)",
            "leave SelectionSet",
            "leave OperationDefinition",
            "leave Document",
        ],
    );
}

#[test]
fn skip_prunes_subtree_and_leave() {
    let doc = parse_no_loc("{ a { b } c }").expect("parse error");
    let mut log = EventLog {
        skip_field: Some("a"),
        ..Default::default()
    };
    visit(Node::Document(&doc), &mut log);
    assert!(log.events.contains(&"enter Field(a)".to_string()));
    assert!(!log.events.contains(&"leave Field(a)".to_string()));
    assert!(!log.events.contains(&"enter Field(b)".to_string()));
    assert!(log.events.contains(&"enter Field(c)".to_string()));
}

#[test]
fn break_stops_everything() {
    let doc = parse_no_loc("{ a b c }").expect("parse error");
    let mut log = EventLog {
        break_on_field: Some("b"),
        ..Default::default()
    };
    assert!(!visit(Node::Document(&doc), &mut log));
    assert_eq!(log.events.last().map(String::as_str), Some("enter Field(b)"));
    assert!(!log.events.iter().any(|event| event.starts_with("leave Document")));
}

#[test]
fn ancestors_are_tracked() {
    struct DepthOfB(Option<usize>);
    impl<'a> Visitor<'a> for DepthOfB {
        fn enter(&mut self, node: Node<'a>, ancestors: &[Node<'a>]) -> VisitorAction {
            if let Node::Field(field) = node
                && field.name.as_str() == "b"
            {
                self.0 = Some(ancestors.len());
            }
            VisitorAction::Continue
        }
    }

    let doc = parse_no_loc("{ a { b } }").expect("parse error");
    let mut depth = DepthOfB(None);
    visit(Node::Document(&doc), &mut depth);
    // Document > OperationDefinition > SelectionSet > Field(a) > SelectionSet
    assert_eq!(depth.0, Some(5));
}
