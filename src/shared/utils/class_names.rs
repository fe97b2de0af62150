/// Merge CSS class fragments into one `class` attribute value.
///
/// Fragments may hold several classes; empty fragments are skipped, repeated
/// classes keep their first position.
pub fn cn<'a>(fragments: impl IntoIterator<Item = &'a str>) -> String {
    let mut classes: Vec<&str> = Vec::new();

    for class in fragments.into_iter().flat_map(str::split_whitespace) {
        if !classes.contains(&class) {
            classes.push(class);
        }
    }

    classes.join(" ")
}

/// Pick the modifier for a boolean state
pub fn when<'a>(condition: bool, on: &'a str, off: &'a str) -> &'a str {
    if condition { on } else { off }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cn_joins_fragments() {
        assert_eq!(cn(["c-sidebar", "c-sidebar--expanded"]), "c-sidebar c-sidebar--expanded");
    }

    #[test]
    fn test_cn_skips_empty_and_normalizes_whitespace() {
        assert_eq!(cn(["  c-card ", "", "c-card--featured\tc-card--wide"]), "c-card c-card--featured c-card--wide");
        assert_eq!(cn([""]), "");
    }

    #[test]
    fn test_cn_removes_duplicates() {
        assert_eq!(cn(["a b", "b c", "a"]), "a b c");
    }

    #[test]
    fn test_when() {
        assert_eq!(when(true, "on", "off"), "on");
        assert_eq!(when(false, "on", "off"), "off");
    }
}
