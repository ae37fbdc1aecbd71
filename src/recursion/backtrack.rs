// model = "claude-opus-4-5"
// created = "2026-10-17"
// modified = "2026-10-17"
// driver = "Isaac Clayton"

//! Depth-first generators with explore/undo on a single path buffer.

use smallvec::SmallVec;

/// Path buffer for `combine`. Most `k` seen in practice fit inline.
pub(crate) type Path = SmallVec<[u32; 16]>;

/// True if `c` has distinct lowercase and uppercase forms.
pub(crate) fn has_case(c: char) -> bool {
    return c.to_lowercase().ne(c.to_uppercase());
}

/// Every string reachable from `s` by choosing a case for each letter.
///
/// Characters without case (digits, punctuation) are kept as they are and
/// never branch, so `"a-"` yields two strings rather than a duplicated
/// pair for the `-`.
/// The lowercase branch is explored before the uppercase one, so results
/// come out in that depth-first order:
///
/// ```
/// use drills::recursion::letter_case_permutation;
///
/// assert_eq!(
///     letter_case_permutation("a1b2"),
///     vec!["a1b2", "a1B2", "A1b2", "A1B2"],
/// );
/// ```
pub fn letter_case_permutation(s: &str) -> Vec<String> {
    let chars: Vec<char> = s.chars().collect();
    let mut result = Vec::new();
    let mut path = String::with_capacity(s.len());
    permute_case(&chars, 0, &mut path, &mut result);
    return result;
}

fn permute_case(chars: &[char], index: usize, path: &mut String, result: &mut Vec<String>) {
    if index == chars.len() {
        result.push(path.clone());
        return;
    }

    let c = chars[index];
    let mark = path.len();
    if !has_case(c) {
        path.push(c);
        permute_case(chars, index + 1, path, result);
        path.truncate(mark);
        return;
    }

    path.extend(c.to_lowercase());
    permute_case(chars, index + 1, path, result);
    path.truncate(mark);

    path.extend(c.to_uppercase());
    permute_case(chars, index + 1, path, result);
    path.truncate(mark);
}

/// Every `k`-element increasing sequence drawn from `1..=n`, in
/// lexicographic order.
///
/// ```
/// use drills::recursion::combine;
///
/// assert_eq!(
///     combine(4, 2),
///     vec![vec![1, 2], vec![1, 3], vec![1, 4], vec![2, 3], vec![2, 4], vec![3, 4]],
/// );
/// ```
pub fn combine(n: u32, k: u32) -> Vec<Vec<u32>> {
    let mut result = Vec::new();
    let mut path = Path::new();
    choose(n, k as usize, 1, &mut path, &mut result);
    return result;
}

fn choose(n: u32, k: usize, start: u32, path: &mut Path, result: &mut Vec<Vec<u32>>) {
    if path.len() == k {
        result.push(path.to_vec());
        return;
    }

    for i in start..=n {
        path.push(i);
        choose(n, k, i + 1, path, result);
        path.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_case_example_order() {
        assert_eq!(letter_case_permutation("a1b2"), vec!["a1b2", "a1B2", "A1b2", "A1B2"]);
    }

    #[test]
    fn letter_case_normalizes_input_case() {
        assert_eq!(letter_case_permutation("Ab"), vec!["ab", "aB", "Ab", "AB"]);
    }

    #[test]
    fn letter_case_digits_only() {
        assert_eq!(letter_case_permutation("12345"), vec!["12345"]);
    }

    #[test]
    fn letter_case_empty_string() {
        assert_eq!(letter_case_permutation(""), vec![""]);
    }

    #[test]
    fn letter_case_uncased_symbols_do_not_branch() {
        assert_eq!(letter_case_permutation("a-"), vec!["a-", "A-"]);
    }

    #[test]
    fn letter_case_count_is_power_of_two() {
        assert_eq!(letter_case_permutation("abcde").len(), 32);
        assert_eq!(letter_case_permutation("3z4").len(), 2);
    }

    #[test]
    fn combine_example() {
        assert_eq!(
            combine(4, 2),
            vec![vec![1, 2], vec![1, 3], vec![1, 4], vec![2, 3], vec![2, 4], vec![3, 4]]
        );
    }

    #[test]
    fn combine_edges() {
        assert_eq!(combine(1, 1), vec![vec![1]]);
        assert_eq!(combine(3, 0), vec![Vec::<u32>::new()]);
        assert!(combine(2, 3).is_empty());
        assert_eq!(combine(3, 3), vec![vec![1, 2, 3]]);
    }

    #[test]
    fn combine_count_is_binomial() {
        assert_eq!(combine(10, 3).len(), 120);
        assert_eq!(combine(20, 18).len(), 190);
    }

    #[test]
    fn has_case_distinguishes_letters() {
        assert!(has_case('a'));
        assert!(has_case('Z'));
        assert!(!has_case('7'));
        assert!(!has_case('_'));
    }
}
