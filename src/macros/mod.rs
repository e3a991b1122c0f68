/// Takes the owned value out of a `Cow`, or falls back to `$default` when the
/// `Cow` is borrowed.
///
/// `Regex::replacen` borrows its input when nothing was replaced; the
/// formatter then falls back to the rule's unmodified template.
macro_rules! owned_from_cow_or {
    ($getcow:expr, $default:expr) => {{
        if let std::borrow::Cow::Owned(s) = $getcow {
            s
        } else {
            $default
        }
    }};
}

pub(crate) use owned_from_cow_or;

#[cfg(test)]
mod tests {
    use regex::{NoExpand, Regex};

    #[test]
    fn template_without_group_reference_falls_back() {
        let first_group = Regex::new(r"(\$\d)").unwrap();

        let rule = owned_from_cow_or!(
            first_group.replacen("$1 $2", 1, NoExpand("($1)")),
            String::from("unchanged")
        );
        assert_eq!(rule, "($1) $2");

        let rule = owned_from_cow_or!(
            first_group.replacen("123", 1, NoExpand("($1)")),
            String::from("unchanged")
        );
        assert_eq!(rule, "unchanged");
    }
}
