/// Marker inserted where the middle of a branch name was dropped
pub(crate) const ELLIPSIS: char = '…';

/// Shorten `branch` to at most `max_len` characters, keeping both ends.
///
/// Names that already fit are returned unchanged. Longer names become
/// `<head>…<tail>` of exactly `max_len` characters; when the space left after
/// the marker is odd, the tail gets the extra character.
///
/// Counts `char`s, so multi-byte characters are never split. A budget of 0
/// yields an empty string and a budget of 1 yields the marker alone.
pub(crate) fn compact_branch(branch: &str, max_len: usize) -> String {
    let len = branch.chars().count();
    if len <= max_len {
        return branch.to_string();
    }
    if max_len == 0 {
        return String::new();
    }

    let budget = max_len - 1;
    let head_len = budget / 2;
    let tail_len = budget - head_len;

    let mut out = String::with_capacity(branch.len());
    out.extend(branch.chars().take(head_len));
    out.push(ELLIPSIS);
    out.extend(branch.chars().skip(len - tail_len));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn char_len(s: &str) -> usize {
        s.chars().count()
    }

    #[test]
    fn short_name_unchanged() {
        assert_eq!(compact_branch("main", 30), "main");
    }

    #[test]
    fn exactly_at_limit() {
        let name = "a".repeat(30);
        assert_eq!(compact_branch(&name, 30), name);
    }

    #[test]
    fn truncated_with_ellipsis() {
        let got = compact_branch("backup/feat-support-claudeline-progress-tracker", 30);
        assert_eq!(got, "backup/feat-su…rogress-tracker");
        assert_eq!(char_len(&got), 30);
        assert_eq!(got.matches(ELLIPSIS).count(), 1);
    }

    #[test]
    fn empty_string() {
        assert_eq!(compact_branch("", 30), "");
        assert_eq!(compact_branch("", 0), "");
    }

    #[test]
    fn one_over_limit() {
        assert_eq!(compact_branch("abcdef", 5), "ab…ef");
        assert_eq!(compact_branch("abcdefg", 6), "ab…efg");
    }

    #[test]
    fn degenerate_budgets() {
        assert_eq!(compact_branch("feature", 0), "");
        assert_eq!(compact_branch("feature", 1), "…");
        assert_eq!(compact_branch("feature", 2), "…e");
        assert_eq!(compact_branch("feature", 3), "f…e");
        assert_eq!(compact_branch("x", 1), "x");
    }

    #[test]
    fn multibyte_chars_not_split() {
        let branch = "功能/用户登录-界面-重构-第二阶段";
        let got = compact_branch(branch, 9);
        assert_eq!(char_len(&got), 9);
        assert_eq!(got, "功能/用…第二阶段");

        let emoji = "🚀-launch-🚀-rocket-🚀";
        let got = compact_branch(emoji, 7);
        assert_eq!(got, "🚀-l…t-🚀");
    }

    #[test]
    fn never_exceeds_budget() {
        let names = [
            "",
            "a",
            "main",
            "feature/x",
            "backup/feat-support-claudeline-progress-tracker",
            "ünïcödé/brånch-ñame",
        ];
        for name in names {
            for max_len in 0..=50 {
                let got = compact_branch(name, max_len);
                assert!(
                    char_len(&got) <= max_len,
                    "compact_branch({name:?}, {max_len}) = {got:?}"
                );
                if char_len(name) > max_len && max_len > 0 {
                    assert_eq!(char_len(&got), max_len);
                    assert_eq!(got.matches(ELLIPSIS).count(), 1);
                }
            }
        }
    }
}
