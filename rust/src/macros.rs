//! Test-generation macros.
//!
//! `sorted_extraction_tests!` stamps out the insert-then-drain property test
//! for a list of key types, so the heap's ordering behavior is exercised
//! uniformly across integers, floats, and owned strings.

macro_rules! sorted_extraction_tests {
    ($($ty:ty => $name:ident [$($key:expr),+ $(,)?]),+ $(,)?) => {
        paste::paste! {
            $(
                #[test]
                fn [<test_sorted_extraction_ $name>]() {
                    let mut queue = $crate::HeapPriorityQueue::<$ty, usize>::new();
                    let keys: Vec<$ty> = vec![$($key),+];
                    for (i, k) in keys.iter().enumerate() {
                        queue.insert(k.clone(), i).unwrap();
                    }
                    assert_eq!(queue.len(), keys.len());

                    let mut drained: Vec<$ty> = Vec::new();
                    while let Some(entry) = queue.remove_min() {
                        drained.push(entry.key().clone());
                    }

                    let mut expected = keys.clone();
                    expected.sort_by(|a, b| a.partial_cmp(b).unwrap());
                    assert_eq!(drained, expected);
                    assert!(queue.is_empty());
                }
            )+
        }
    };
}

pub(crate) use sorted_extraction_tests;
