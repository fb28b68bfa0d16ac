//! "Did you mean" hints for names that resolve nowhere.

/// Names further than this many edits away are never suggested.
const MAX_DISTANCE: usize = 3;

/// Levenshtein distance between two names, counted in characters.
pub(super) fn edit_distance(a: &str, b: &str) -> usize {
	let b_len = b.chars().count();
	let mut previous: Vec<usize> = (0..=b_len).collect();
	let mut current = vec![0; b_len + 1];

	for (i, a_char) in a.chars().enumerate() {
		current[0] = i + 1;
		for (j, b_char) in b.chars().enumerate() {
			let substitution = previous[j] + usize::from(a_char != b_char);
			current[j + 1] = (previous[j + 1] + 1).min(current[j] + 1).min(substitution);
		}
		std::mem::swap(&mut previous, &mut current);
	}
	previous[b_len]
}

/// The candidate closest to `target`, if any is under [`MAX_DISTANCE`] edits.
/// Ties go to the alphabetically first name.
pub(super) fn closest<'a>(target: &str, candidates: impl IntoIterator<Item = &'a str>) -> Option<&'a str> {
	candidates
		.into_iter()
		.map(|candidate| (edit_distance(target, candidate), candidate))
		.filter(|&(distance, _)| distance < MAX_DISTANCE)
		.min()
		.map(|(_, candidate)| candidate)
}
