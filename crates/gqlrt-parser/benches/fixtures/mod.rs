use std::fmt::Write;

pub const SIMPLE_QUERY: &str = "query Hero { hero { id name friends { name } } }";

/// A query touching every executable production: variables with defaults,
/// aliases, directives, fragments, inline fragments, and list/object
/// literals.
pub const COMPLEX_QUERY: &str = r#"
query Search($term: String!, $first: Int = 10, $filters: [Filter!] = [{field: "kind", eq: "user"}]) {
  search(term: $term, first: $first, filters: $filters) @include(if: true) {
    totalCount
    edges {
      cursor
      node {
        __typename
        ... on User { id login: name avatar(size: 64) ...Profile }
        ... on Repository { id fullName stars: stargazerCount owner { ...Profile } }
        ... @skip(if: false) { id }
      }
    }
    pageInfo { hasNextPage endCursor }
  }
}

fragment Profile on Actor {
  login
  url
  avatarUrl(size: 128)
}
"#;

/// Generates a query whose selection sets nest `depth` levels deep.
pub fn deeply_nested_query(depth: usize) -> String {
    let mut out = String::with_capacity(depth * 30);
    out.push_str("query DeeplyNested {\n");
    for level in 0..depth {
        let indent = "  ".repeat(level + 1);
        let field = if level == 0 { "root" } else { "child" };
        let _ = writeln!(out, "{indent}{field} {{");
        let _ = writeln!(out, "{indent}  id");
    }
    let _ = writeln!(out, "{}name", "  ".repeat(depth + 1));
    for level in (0..depth).rev() {
        let _ = writeln!(out, "{}}}", "  ".repeat(level + 1));
    }
    out.push_str("}\n");
    out
}

/// Generates a document containing `count` named query operations.
pub fn many_operations(count: usize) -> String {
    let mut out = String::with_capacity(count * 80);
    for i in 0..count {
        let _ = writeln!(out, "query Operation{i}($id: ID!) {{");
        let _ = writeln!(out, "  node(id: $id) {{ id name field{i}: description }}");
        let _ = writeln!(out, "}}\n");
    }
    out
}
