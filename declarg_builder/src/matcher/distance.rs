/// The closest candidate found by [`best_match`].
#[derive(Debug, Clone, PartialEq)]
pub struct BestMatch {
    /// The candidate with the smallest distance (the first one on ties).
    pub found: String,
    /// The distance between the typed string and `found`.
    pub distance: f64,
}

// (row, column) of each key on a qwerty keyboard.
// The digit row is row 0, followed by the three letter rows.
fn qwerty_position(key: char) -> Option<(u8, u8)> {
    let position = match key {
        '1' => (0, 0),
        '2' => (0, 1),
        '3' => (0, 2),
        '4' => (0, 3),
        '5' => (0, 4),
        '6' => (0, 5),
        '7' => (0, 6),
        '8' => (0, 7),
        '9' => (0, 8),
        '0' => (0, 9),
        'q' => (1, 0),
        'w' => (1, 1),
        'e' => (1, 2),
        'r' => (1, 3),
        't' => (1, 4),
        'y' => (1, 5),
        'u' => (1, 6),
        'i' => (1, 7),
        'o' => (1, 8),
        'p' => (1, 9),
        'a' => (2, 0),
        's' => (2, 1),
        'd' => (2, 2),
        'f' => (2, 3),
        'g' => (2, 4),
        'h' => (2, 5),
        'j' => (2, 6),
        'k' => (2, 7),
        'l' => (2, 8),
        'z' => (3, 0),
        'x' => (3, 1),
        'c' => (3, 2),
        'v' => (3, 3),
        'b' => (3, 4),
        'n' => (3, 5),
        'm' => (3, 6),
        _ => return None,
    };

    Some(position)
}

/// The cost of substituting `a` for `b`: half the distance between the two keys on a qwerty keyboard.
/// Keys off the keyboard cost `1` against anything but themselves.
fn substitution_cost(a: char, b: char) -> f64 {
    let a = a.to_ascii_lowercase();
    let b = b.to_ascii_lowercase();

    if a == b {
        return 0.0;
    }

    match (qwerty_position(a), qwerty_position(b)) {
        (Some((row_a, column_a)), Some((row_b, column_b))) => {
            let rows = f64::from(row_a) - f64::from(row_b);
            let columns = f64::from(column_a) - f64::from(column_b);
            (rows * rows + columns * columns).sqrt() / 2.0
        }
        _ => 1.0,
    }
}

fn min3(a: f64, b: f64, c: f64) -> f64 {
    a.min(b).min(c)
}

/// Levenshtein edit distance where substitutions are weighted by qwerty keyboard distance.
///
/// Insertions and deletions cost `1`.
pub fn levenshtein_distance(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len() as f64;
    }

    if b.is_empty() {
        return a.len() as f64;
    }

    let mut previous: Vec<f64> = (0..=b.len()).map(|j| j as f64).collect();
    let mut current = vec![0.0; b.len() + 1];

    for i in 1..=a.len() {
        current[0] = i as f64;

        for j in 1..=b.len() {
            current[j] = min3(
                previous[j] + 1.0,
                current[j - 1] + 1.0,
                previous[j - 1] + substitution_cost(a[i - 1], b[j - 1]),
            );
        }

        std::mem::swap(&mut previous, &mut current);
    }

    previous[b.len()]
}

/// Damerau-Levenshtein (optimal string alignment) edit distance where substitutions are weighted by qwerty keyboard distance.
///
/// Insertions, deletions, and transpositions of two adjacent characters cost `1`.
///
/// ### Example
/// ```
/// # use declarg_builder as declarg;
/// use declarg::damerau_levenshtein_distance;
///
/// assert_eq!(damerau_levenshtein_distance("cat", "cat"), 0.0);
/// assert_eq!(damerau_levenshtein_distance("hello", "hlelo"), 1.0);
/// // 'o' sits right next to 'p'.
/// assert_eq!(damerau_levenshtein_distance("heao", "heap"), 0.5);
/// ```
pub fn damerau_levenshtein_distance(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len() as f64;
    }

    if b.is_empty() {
        return a.len() as f64;
    }

    let mut before_previous = vec![0.0; b.len() + 1];
    let mut previous: Vec<f64> = (0..=b.len()).map(|j| j as f64).collect();
    let mut current = vec![0.0; b.len() + 1];

    for i in 1..=a.len() {
        current[0] = i as f64;

        for j in 1..=b.len() {
            current[j] = min3(
                previous[j] + 1.0,
                current[j - 1] + 1.0,
                previous[j - 1] + substitution_cost(a[i - 1], b[j - 1]),
            );

            if i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                current[j] = current[j].min(before_previous[j - 2] + 1.0);
            }
        }

        // Rotate the rows: current becomes previous, previous becomes before_previous.
        std::mem::swap(&mut before_previous, &mut previous);
        std::mem::swap(&mut previous, &mut current);
    }

    previous[b.len()]
}

/// Find the candidate most similar to `typed`, by [`damerau_levenshtein_distance`].
///
/// Returns `None` only when there are no candidates.
///
/// ### Example
/// ```
/// # use declarg_builder as declarg;
/// use declarg::best_match;
///
/// let best = best_match("--colr", ["--color", "--count", "-c"]).unwrap();
/// assert_eq!(best.found, "--color");
/// assert_eq!(best.distance, 1.0);
/// ```
pub fn best_match<I, S>(typed: &str, candidates: I) -> Option<BestMatch>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut best: Option<BestMatch> = None;

    for candidate in candidates {
        let candidate = candidate.as_ref();
        let distance = damerau_levenshtein_distance(typed, candidate);

        match &best {
            Some(current) if current.distance <= distance => {}
            _ => {
                best.replace(BestMatch {
                    found: candidate.to_string(),
                    distance,
                });
            }
        }
    }

    best
}
