use heaptree::SortedTableMap;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;
use std::ops::Bound;

#[test]
fn test_random_workload_vs_btreemap() {
    const STEPS: usize = 2_000;

    let mut rng = StdRng::seed_from_u64(0xDEAD);
    let mut table: SortedTableMap<i32, usize> = SortedTableMap::new();
    let mut model: BTreeMap<i32, usize> = BTreeMap::new();

    for step in 0..STEPS {
        let key = rng.gen_range(0..200);
        match rng.gen_range(0..3) {
            0 => {
                assert_eq!(table.put(key, step).unwrap(), model.insert(key, step));
            }
            1 => {
                assert_eq!(table.remove(&key), model.remove(&key));
            }
            _ => {
                assert_eq!(table.get(&key), model.get(&key));
            }
        }
        assert_eq!(table.len(), model.len());
    }

    // Final contents and ordering must agree
    let table_items: Vec<(i32, usize)> = table.entries().map(|e| (*e.key(), *e.value())).collect();
    let model_items: Vec<(i32, usize)> = model.iter().map(|(k, v)| (*k, *v)).collect();
    assert_eq!(table_items, model_items);
}

#[test]
fn test_neighbor_queries_vs_btreemap_ranges() {
    let mut rng = StdRng::seed_from_u64(31);
    let mut table: SortedTableMap<i32, i32> = SortedTableMap::new();
    let mut model: BTreeMap<i32, i32> = BTreeMap::new();

    for _ in 0..300 {
        let key = rng.gen_range(0..500);
        table.put(key, key).unwrap();
        model.insert(key, key);
    }

    for probe in -10..510 {
        let floor = model.range(..=probe).next_back().map(|(k, _)| *k);
        let ceiling = model.range(probe..).next().map(|(k, _)| *k);
        let lower = model.range(..probe).next_back().map(|(k, _)| *k);
        let higher = model
            .range((Bound::Excluded(probe), Bound::Unbounded))
            .next()
            .map(|(k, _)| *k);

        assert_eq!(table.floor_entry(&probe).map(|e| *e.key()), floor);
        assert_eq!(table.ceiling_entry(&probe).map(|e| *e.key()), ceiling);
        assert_eq!(table.lower_entry(&probe).map(|e| *e.key()), lower);
        assert_eq!(table.higher_entry(&probe).map(|e| *e.key()), higher);
    }
}

#[test]
fn test_sub_map_vs_btreemap_range() {
    let mut table: SortedTableMap<i32, i32> = SortedTableMap::new();
    let mut model: BTreeMap<i32, i32> = BTreeMap::new();

    for k in (0..100).step_by(3) {
        table.put(k, k * 2).unwrap();
        model.insert(k, k * 2);
    }

    for (from, to) in [(0, 100), (5, 50), (7, 8), (60, 60)] {
        let expected: Vec<i32> = model.range(from..to).map(|(k, _)| *k).collect();
        let actual: Vec<i32> = table.sub_map(&from, &to).iter().map(|e| *e.key()).collect();
        assert_eq!(actual, expected, "sub_map [{}, {})", from, to);
    }

    // A reversed range is empty rather than a panic
    assert!(table.sub_map(&90, &10).is_empty());
}
