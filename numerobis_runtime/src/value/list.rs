//! List operations
//!
//! Lists are shared, interior-mutable vectors of values. The mutating
//! builtins below back the corresponding language-level methods.

use crate::value::error::{codes, RuntimeError};
use crate::value::util::{normalize_index, slice_indices};
use crate::value::{ListRef, Value};

/// Fetches an element, resolving negative indices.
///
/// # Errors
///
/// Returns an error with code 901 when the index is out of range.
pub fn checked_get(list: &ListRef, index: i64) -> Result<Value, RuntimeError> {
    let items = list.borrow();
    let index = normalize_index(index, items.len() as i64)
        .ok_or(RuntimeError::new(codes::LIST_INDEX))?;
    Ok(items[index as usize].clone())
}

/// Extracts a sub-list. Out-of-range bounds clamp; a zero step selects
/// nothing.
#[must_use]
pub fn slice(list: &ListRef, start: Option<i64>, stop: Option<i64>, step: Option<i64>) -> Value {
    let items = list.borrow();
    let selected = slice_indices(items.len() as i64, start, stop, step)
        .into_iter()
        .map(|i| items[i].clone())
        .collect();
    Value::list(selected)
}

/// Appends a value in place.
pub fn append(list: &ListRef, value: Value) {
    list.borrow_mut().push(value);
}

/// Appends every element of `other` in place.
pub fn extend(list: &ListRef, other: &ListRef) {
    let other_items = other.borrow().clone();
    list.borrow_mut().extend(other_items);
}

/// Inserts a value before the given position. Out-of-range positions clamp
/// to the ends, negative positions resolve from the end first.
pub fn insert(list: &ListRef, index: i64, value: Value) {
    let mut items = list.borrow_mut();
    let len = items.len() as i64;

    let index = if index < 0 { index + len } else { index };
    let index = index.clamp(0, len) as usize;
    items.insert(index, value);
}

/// Replaces the element at the given index, resolving negative indices.
///
/// # Errors
///
/// Returns an error with code 901 when the index is out of range.
pub fn checked_set(list: &ListRef, index: i64, value: Value) -> Result<(), RuntimeError> {
    let mut items = list.borrow_mut();
    let index = normalize_index(index, items.len() as i64)
        .ok_or(RuntimeError::new(codes::LIST_INDEX))?;
    items[index as usize] = value;
    Ok(())
}

/// Removes and returns the element at the given index.
///
/// # Errors
///
/// Returns an error with code 901 when the index is out of range.
pub fn checked_pop(list: &ListRef, index: i64) -> Result<Value, RuntimeError> {
    let mut items = list.borrow_mut();
    let index = normalize_index(index, items.len() as i64)
        .ok_or(RuntimeError::new(codes::LIST_INDEX))?;
    Ok(items.remove(index as usize))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn as_list(value: &Value) -> &ListRef {
        match value {
            Value::List(items) => items,
            _ => panic!("expected a list"),
        }
    }

    fn string_list(values: &[&str]) -> Value {
        Value::list(values.iter().map(|s| Value::str(s)).collect())
    }

    fn rendered(value: &Value) -> Vec<String> {
        as_list(value)
            .borrow()
            .iter()
            .map(|v| v.as_str().expect("string element").to_string())
            .collect()
    }

    #[test]
    fn negative_indices_read_from_the_end() {
        let list = string_list(&["a", "b", "c"]);
        let last = checked_get(as_list(&list), -1).unwrap();
        assert_eq!(last.as_str(), Some("c"));
    }

    #[test]
    fn out_of_range_reads_report_901() {
        let list = string_list(&["a"]);
        let error = checked_get(as_list(&list), 1).unwrap_err();
        assert_eq!(error.code(), codes::LIST_INDEX);
    }

    #[test]
    fn slices_copy_the_selected_elements() {
        let list = string_list(&["a", "b", "c", "d"]);
        let reversed = slice(as_list(&list), None, None, Some(-1));
        assert_eq!(rendered(&reversed), ["d", "c", "b", "a"]);

        let middle = slice(as_list(&list), Some(1), Some(3), None);
        assert_eq!(rendered(&middle), ["b", "c"]);
    }

    #[test]
    fn append_and_extend_mutate_in_place() {
        let list = string_list(&["a"]);
        append(as_list(&list), Value::str("b"));

        let other = string_list(&["c", "d"]);
        extend(as_list(&list), as_list(&other));

        assert_eq!(rendered(&list), ["a", "b", "c", "d"]);
    }

    #[test]
    fn insert_clamps_out_of_range_positions() {
        let list = string_list(&["b", "c"]);
        insert(as_list(&list), 0, Value::str("a"));
        insert(as_list(&list), 100, Value::str("e"));
        insert(as_list(&list), -1, Value::str("d"));

        assert_eq!(rendered(&list), ["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn set_replaces_in_place() {
        let list = string_list(&["a", "b", "c"]);
        checked_set(as_list(&list), -1, Value::str("z")).unwrap();
        assert_eq!(rendered(&list), ["a", "b", "z"]);

        let error = checked_set(as_list(&list), 3, Value::str("w")).unwrap_err();
        assert_eq!(error.code(), codes::LIST_INDEX);
    }

    #[test]
    fn pop_removes_and_returns() {
        let list = string_list(&["a", "b", "c"]);
        let popped = checked_pop(as_list(&list), -1).unwrap();

        assert_eq!(popped.as_str(), Some("c"));
        assert_eq!(rendered(&list), ["a", "b"]);

        let error = checked_pop(as_list(&list), 5).unwrap_err();
        assert_eq!(error.code(), codes::LIST_INDEX);
    }
}
