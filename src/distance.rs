use crate::utils::str_to_char_vec;

/// Minimum number of single-character insertions, deletions, and
/// substitutions needed to transform one string into the other.
/// Unicode scalar values are the atomic unit, so `"café"` and `"cafe"`
/// are one substitution apart regardless of byte lengths.
pub fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    edit_distance(&str_to_char_vec(s1), &str_to_char_vec(s2))
}

pub(crate) fn edit_distance(a: &[char], b: &[char]) -> usize {
    // Distance is symmetric, so put the shorter operand on the column
    // axis and the rolling rows stay as small as possible.
    let (longer, shorter) = if a.len() < b.len() { (b, a) } else { (a, b) };

    if shorter.is_empty() {
        return longer.len();
    }

    // Only two rows of the full DP matrix are live at any time.
    // previous_row starts as the cost of building `shorter` from the
    // empty prefix: 0, 1, 2, ...
    let mut previous_row: Vec<usize> = (0..=shorter.len()).collect();
    let mut current_row: Vec<usize> = vec![0; shorter.len() + 1];

    for (i, c1) in longer.iter().enumerate() {
        current_row[0] = i + 1;
        for (j, c2) in shorter.iter().enumerate() {
            // Each cell considers a deletion, an insertion, or a
            // substitution, and takes whichever costs least.
            let insertions = previous_row[j + 1] + 1;
            let deletions = current_row[j] + 1;
            let substitutions = previous_row[j] + usize::from(c1 != c2);
            current_row[j + 1] = insertions.min(deletions).min(substitutions);
        }
        std::mem::swap(&mut previous_row, &mut current_row);
    }

    previous_row[shorter.len()]
}
