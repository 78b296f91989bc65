//! String duplication helpers.

/// Concatenate two strings.
pub fn string_add(a: &str, b: &str) -> String {
    let mut out = String::with_capacity(a.len() + b.len());
    out.push_str(a);
    out.push_str(b);
    out
}

/// Pair every item with itself: `["aa"]` becomes `["aaaa"]`.
pub fn cat_vec<S: AsRef<str>>(items: &[S]) -> Vec<String> {
    items
        .iter()
        .map(|s| string_add(s.as_ref(), s.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_add_concatenates() {
        assert_eq!(string_add("ab", "cd"), "abcd");
        assert_eq!(string_add("", ""), "");
    }

    #[test]
    fn cat_vec_doubles_each_item() {
        assert_eq!(
            cat_vec(&["aa", "bb", "cc", "dd"]),
            vec!["aaaa", "bbbb", "cccc", "dddd"]
        );
    }

    #[test]
    fn cat_vec_accepts_owned_strings() {
        let items = vec![String::from("x"), String::new()];
        assert_eq!(cat_vec(&items), vec!["xx", ""]);
    }
}
