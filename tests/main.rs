use pivot_quicksort::instantiate_sort_tests;
use pivot_quicksort::{FirstElement, LastElement, QuickSorter, RandomElement, SortError};

instantiate_sort_tests!(FirstElement, first_element);
instantiate_sort_tests!(LastElement, last_element);
instantiate_sort_tests!(RandomElement, random_element);

// --- Concrete scenarios with the default sorter ---

#[test]
fn empty_array_stays_empty() {
    let mut array: [i32; 0] = [];
    let result = QuickSorter::new().sort(Some(&mut array)).unwrap();

    assert!(result.is_empty());
}

#[test]
fn single_element_stays_put() {
    let mut array = [5];
    let result = QuickSorter::new().sort(Some(&mut array)).unwrap();

    assert_eq!(result, &mut [5]);
}

#[test]
fn sorted_pair_stays_sorted() {
    let mut array = [1, 2];
    let result = QuickSorter::new().sort(Some(&mut array)).unwrap();

    assert_eq!(result, &mut [1, 2]);
}

#[test]
fn unsorted_pair_gets_swapped() {
    let mut array = [28, 13];
    let result = QuickSorter::new().sort(Some(&mut array)).unwrap();

    assert_eq!(result, &mut [13, 28]);
}

#[test]
fn unsorted_array_gets_sorted() {
    let mut array = [5, 3, 8, 1, 2];
    let result = QuickSorter::new().sort(Some(&mut array)).unwrap();

    assert_eq!(result, &mut [1, 2, 3, 5, 8]);
}

#[test]
fn duplicates_are_kept() {
    let mut array = [5, 1, 4, 1, 5, 9, 2, 6];
    let result = QuickSorter::new().sort(Some(&mut array)).unwrap();

    assert_eq!(result, &mut [1, 1, 2, 4, 5, 5, 6, 9]);
}

#[test]
fn null_array_is_rejected() {
    let err = QuickSorter::new().sort(None).unwrap_err();

    assert_eq!(err, SortError::InvalidArgument);
    assert_eq!(err.to_string(), "Input array cannot be null");
}

#[test]
fn injected_strategy_sorts_correctly() {
    let sorter = QuickSorter::with_strategy(LastElement);

    let mut array = [3, 1, 4, 1, 5, 9, 2, 6];
    let result = sorter.sort(Some(&mut array)).unwrap();

    assert_eq!(result, &mut [1, 1, 2, 3, 4, 5, 6, 9]);
}

#[test]
fn strategy_choice_does_not_change_result() {
    let input = [800, 3, -801, 5, -801, -3, 60, 200, 50, 7, 10];
    let expected = [-801, -801, -3, 3, 5, 7, 10, 50, 60, 200, 800];

    let mut via_first = input;
    let mut via_last = input;
    let mut via_random = input;

    QuickSorter::with_strategy(FirstElement)
        .sort(Some(&mut via_first))
        .unwrap();
    QuickSorter::with_strategy(LastElement)
        .sort(Some(&mut via_last))
        .unwrap();
    QuickSorter::with_strategy(RandomElement)
        .sort(Some(&mut via_random))
        .unwrap();

    assert_eq!(via_first, expected);
    assert_eq!(via_last, expected);
    assert_eq!(via_random, expected);
}
