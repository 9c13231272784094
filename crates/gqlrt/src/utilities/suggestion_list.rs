/// The `options` close enough to `input` to be worth suggesting, closest
/// first.
///
/// Closeness is the optimal-string-alignment edit distance (insertions,
/// deletions, substitutions, and adjacent transpositions), ignoring case.
/// An option qualifies when its distance is at most half the length of the
/// longer of the two strings (and at least 1).
pub fn suggestion_list<'a>(input: &str, options: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
    let input_threshold = input.chars().count() / 2;
    let mut scored: Vec<(usize, &'a str)> = options
        .into_iter()
        .filter_map(|option| {
            let distance = lexical_distance(input, option);
            let threshold = input_threshold.max(option.chars().count() / 2).max(1);
            (distance <= threshold).then_some((distance, option))
        })
        .collect();
    scored.sort_by(|(d1, o1), (d2, o2)| d1.cmp(d2).then_with(|| o1.cmp(o2)));
    scored.into_iter().map(|(_, option)| option).collect()
}

fn lexical_distance(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }
    let a: Vec<char> = a.to_lowercase().chars().collect();
    let b: Vec<char> = b.to_lowercase().chars().collect();
    if a == b {
        return 1;
    }

    let mut d = vec![vec![0usize; b.len() + 1]; a.len() + 1];
    for (i, row) in d.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=b.len() {
        d[0][j] = j;
    }
    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            d[i][j] = (d[i - 1][j] + 1)
                .min(d[i][j - 1] + 1)
                .min(d[i - 1][j - 1] + cost);
            if i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                d[i][j] = d[i][j].min(d[i - 2][j - 2] + cost);
            }
        }
    }
    d[a.len()][b.len()]
}

/// `'A'`, `'A' or 'B'`, `'A', 'B', or 'C'`; at most five items.
pub fn quoted_or_list(items: &[&str]) -> String {
    let quoted: Vec<String> = items.iter().take(5).map(|item| format!("'{item}'")).collect();
    match quoted.as_slice() {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{first} or {second}"),
        [init @ .., last] => format!("{}, or {last}", init.join(", ")),
    }
}
