/// Splits a combination on whitespace and `+`, dropping empty tokens.
pub(crate) fn tokenize(combo: &str) -> Vec<&str> {
	combo
		.split(|ch: char| ch.is_whitespace() || ch == '+')
		.filter(|token| !token.is_empty())
		.collect()
}
