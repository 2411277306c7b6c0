//! Index and slice normalization shared by lists and strings

/// Resolves a possibly-negative index against a length.
///
/// Negative indices count from the end. Returns `None` when the index is
/// out of range either way.
#[must_use]
pub fn normalize_index(index: i64, len: i64) -> Option<i64> {
    let index = if index < 0 { index + len } else { index };

    if index < 0 || index >= len {
        None
    } else {
        Some(index)
    }
}

/// Fills slice defaults and clamps the bounds to the container.
///
/// Missing components default to a step of one and to the full container in
/// the direction of travel. Negative positions resolve from the end. For a
/// positive step the bounds clamp to `[0, len]`; for a negative step to
/// `[-1, len - 1]` so that iteration can run down to (and exclude) `-1`.
#[must_use]
pub fn normalize_slice(
    len: i64,
    start: Option<i64>,
    stop: Option<i64>,
    step: Option<i64>,
) -> (i64, i64, i64) {
    let step = step.unwrap_or(1);
    let mut start = start.unwrap_or(if step > 0 { 0 } else { len - 1 });
    let mut stop = stop.unwrap_or(if step > 0 { len } else { -len - 1 });

    if start < 0 {
        start += len;
    }
    if stop < 0 {
        stop += len;
    }

    if step > 0 {
        start = start.clamp(0, len);
        stop = stop.clamp(0, len);
    } else {
        start = start.clamp(-1, len - 1);
        stop = stop.clamp(-1, len - 1);
    }

    (start, stop, step)
}

/// The element indices a slice selects, in order. A step of zero selects
/// nothing.
#[must_use]
pub fn slice_indices(
    len: i64,
    start: Option<i64>,
    stop: Option<i64>,
    step: Option<i64>,
) -> Vec<usize> {
    let (start, stop, step) = normalize_slice(len, start, stop, step);
    let mut indices = Vec::new();

    if step > 0 {
        let mut i = start;
        while i < stop {
            indices.push(i as usize);
            i += step;
        }
    } else if step < 0 {
        let mut i = start;
        while i > stop {
            indices.push(i as usize);
            i += step;
        }
    }

    indices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_wrap_from_the_end() {
        assert_eq!(normalize_index(0, 3), Some(0));
        assert_eq!(normalize_index(2, 3), Some(2));
        assert_eq!(normalize_index(-1, 3), Some(2));
        assert_eq!(normalize_index(-3, 3), Some(0));
    }

    #[test]
    fn out_of_range_indices_are_rejected() {
        assert_eq!(normalize_index(3, 3), None);
        assert_eq!(normalize_index(-4, 3), None);
        assert_eq!(normalize_index(0, 0), None);
    }

    #[test]
    fn slice_defaults_cover_the_container() {
        assert_eq!(normalize_slice(6, None, None, None), (0, 6, 1));
        assert_eq!(normalize_slice(6, None, None, Some(-1)), (5, -1, -1));
    }

    #[test]
    fn slice_bounds_resolve_negatives_and_clamp() {
        assert_eq!(normalize_slice(6, Some(-2), None, None), (4, 6, 1));
        assert_eq!(normalize_slice(6, Some(-10), Some(100), None), (0, 6, 1));
        assert_eq!(normalize_slice(6, Some(100), Some(-10), Some(-1)), (5, -1, -1));
    }

    #[test]
    fn forward_slices_select_half_open_ranges() {
        assert_eq!(slice_indices(6, Some(1), Some(4), None), vec![1, 2, 3]);
        assert_eq!(slice_indices(6, Some(1), Some(4), Some(2)), vec![1, 3]);
        assert_eq!(slice_indices(6, Some(4), Some(1), None), Vec::<usize>::new());
    }

    #[test]
    fn reverse_slices_walk_backwards() {
        assert_eq!(
            slice_indices(6, None, None, Some(-1)),
            vec![5, 4, 3, 2, 1, 0]
        );
        assert_eq!(slice_indices(6, Some(4), Some(1), Some(-1)), vec![4, 3, 2]);
    }

    #[test]
    fn zero_step_selects_nothing() {
        assert_eq!(
            slice_indices(6, None, None, Some(0)),
            Vec::<usize>::new()
        );
    }
}
