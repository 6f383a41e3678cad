use pretty_assertions::assert_eq;
use searchtable::{Key, Record, SearchTable, TableError, TableState};

const EXAMPLE_KEYS: [Key; 10] = [56, 19, 80, 5, 21, 64, 88, 13, 37, 75];

fn record(key: Key) -> Record {
    Record::new(key, format!("Student{}", key), if key % 2 == 0 { "F" } else { "M" }, 18 + key % 5)
}

fn example_table() -> SearchTable {
    let mut table = SearchTable::new();
    for key in EXAMPLE_KEYS {
        table.insert(record(key)).unwrap();
    }
    table
}

#[test]
fn in_order_traversal_is_sorted() {
    let table = example_table();
    assert_eq!(table.keys(), vec![5, 13, 19, 21, 37, 56, 64, 75, 80, 88]);
    assert_eq!(table.len(), 10);
    assert!(table.is_ordered());
}

#[test]
fn search_counts_comparisons_down_to_the_node() {
    let table = example_table();

    let search = table.search(19);
    assert_eq!(search.record, Some(&record(19)));
    assert_eq!(search.comparisons, 2);

    assert_eq!(table.search(56).comparisons, 1);
    assert_eq!(table.search(13).comparisons, 4);
    assert_eq!(table.search(75).comparisons, 4);
    assert_eq!(table.depth_of(37), Some(4));
    assert_eq!(table.height(), 4);
}

#[test]
fn search_miss_reports_path_length() {
    let table = example_table();
    let miss = table.search(100);
    assert!(!miss.is_found());
    assert_eq!(miss.comparisons, 3);
    assert_eq!(table.search(1).comparisons, 3);
    assert_eq!(table.depth_of(1), None);

    let empty = SearchTable::new();
    assert_eq!(empty.search(1).comparisons, 0);
}

#[test]
fn duplicate_insert_keeps_first_record() {
    let mut table = example_table();
    let result = table.insert(Record::new(19, "Impostor", "M", 99));
    assert_eq!(result, Err(TableError::DuplicateKey(19)));
    assert_eq!(table.get(19), Some(&record(19)));
    assert_eq!(table.len(), 10);
    assert!(table.is_ordered());
}

#[test]
fn remove_root_with_two_children() {
    let mut table = example_table();
    let removed = table.remove(56).unwrap();
    assert_eq!(removed, record(56));
    assert!(table.get(56).is_none());
    assert_eq!(table.keys(), vec![5, 13, 19, 21, 37, 64, 75, 80, 88]);
    assert_eq!(table.len(), 9);
    // The successor took the root's place and its right child moved up one level.
    assert_eq!(table.depth_of(64), Some(1));
    assert_eq!(table.depth_of(75), Some(3));
    for key in [5, 13, 19, 21, 37, 64, 75, 80, 88] {
        assert_eq!(table.get(key), Some(&record(key)));
    }
}

#[test]
fn remove_leaf_and_single_child_nodes() {
    let mut table = example_table();
    // 37 is a leaf, then 21 is left with no children, 5 has only a right child.
    table.remove(37).unwrap();
    table.remove(5).unwrap();
    assert_eq!(table.depth_of(13), Some(3));
    table.remove(21).unwrap();
    assert_eq!(table.keys(), vec![13, 19, 56, 64, 75, 80, 88]);
    assert!(table.is_ordered());
}

#[test]
fn remove_missing_key_changes_nothing() {
    let mut table = example_table();
    let before = table.in_order();
    let comparisons_before = table.search(75).comparisons;

    assert_eq!(table.remove(42), Err(TableError::KeyNotFound(42)));
    assert_eq!(table.in_order(), before);
    assert_eq!(table.search(75).comparisons, comparisons_before);
    assert_eq!(table.len(), 10);

    let mut empty = SearchTable::new();
    assert_eq!(empty.remove(1).unwrap_err().key(), 1);
}

#[test]
fn state_follows_contents() {
    let mut table = SearchTable::new();
    assert_eq!(table.state(), TableState::Empty);
    table.insert(record(1)).unwrap();
    table.insert(record(2)).unwrap();
    assert_eq!(table.state(), TableState::Populated);
    table.remove(1).unwrap();
    assert_eq!(table.state(), TableState::Populated);
    table.remove(2).unwrap();
    assert_eq!(table.state(), TableState::Empty);
    assert!(table.is_empty());
}

#[test]
fn bulk_load_replaces_contents_and_skips_duplicates() {
    let mut table = example_table();
    let inserted = table.bulk_load(vec![
        Record::new(3, "First", "F", 20),
        Record::new(1, "Other", "M", 21),
        Record::new(3, "Second", "M", 22),
    ]);
    assert_eq!(inserted, 2);
    assert_eq!(table.keys(), vec![1, 3]);
    assert_eq!(table.get(3).map(|r| r.name.as_str()), Some("First"));
}

#[test]
fn iteration_is_restartable_after_mutation() {
    let mut table = example_table();
    let first: Vec<Key> = table.iter().map(|r| r.key).collect();
    let again: Vec<Key> = (&table).into_iter().map(|r| r.key).collect();
    assert_eq!(first, again);

    table.insert(record(50)).unwrap();
    table.remove(88).unwrap();
    let after: Vec<Key> = table.iter().map(|r| r.key).collect();
    assert_eq!(after, vec![5, 13, 19, 21, 37, 50, 56, 64, 75, 80]);
}

#[test]
fn collect_and_extend() {
    let mut table: SearchTable = [4, 2, 6, 2].into_iter().map(record).collect();
    assert_eq!(table.keys(), vec![2, 4, 6]);
    table.extend([5, 6, 1].into_iter().map(record));
    assert_eq!(table.keys(), vec![1, 2, 4, 5, 6]);
    assert_eq!(table.len(), 5);
}

#[test]
fn sorted_input_builds_a_deep_tree() {
    let count = 10_000;
    let mut table = SearchTable::new();
    for key in 0..count {
        table.insert(record(key)).unwrap();
    }
    assert_eq!(table.height(), count as usize);
    assert_eq!(table.search(count - 1).comparisons, count as usize);
    assert_eq!(table.iter().count(), count as usize);
    table.remove(0).unwrap();
    assert_eq!(table.len(), count as usize - 1);
    drop(table);
}

#[test]
fn remove_with_successor_deep_on_a_left_spine() {
    let count: Key = 20_000;
    let mut table = SearchTable::new();
    table.insert(record(0)).unwrap();
    table.insert(record(-1)).unwrap();
    // The right subtree of 0 is a single left-leaning chain, so its minimum sits at the bottom.
    for key in (1..=count).rev() {
        table.insert(record(key)).unwrap();
    }
    assert_eq!(table.height(), count as usize + 1);

    let removed = table.remove(0).unwrap();
    assert_eq!(removed, record(0));
    assert_eq!(table.len(), count as usize + 1);
    assert!(table.is_ordered());
    assert_eq!(table.depth_of(1), Some(1));
    assert_eq!(table.depth_of(-1), Some(2));
    assert_eq!(table.depth_of(count), Some(2));
    assert_eq!(table.depth_of(2), Some(count as usize));
    assert_eq!(table.get(1), Some(&record(1)));

    table.remove(1).unwrap();
    assert_eq!(table.depth_of(2), Some(1));
    assert!(table.is_ordered());
}

#[test]
fn render_lists_records_in_key_order() {
    let mut table = SearchTable::new();
    table.insert(Record::new(19, "Wang", "F", 20)).unwrap();
    table.insert(Record::new(5, "Huang", "M", 20)).unwrap();
    let expected = "Key Name  Sex Age\n--- ----- --- ---\n5   Huang M   20\n19  Wang  F   20";
    assert_eq!(table.render(), expected);

    assert_eq!(
        SearchTable::new().render(),
        "Key Name Sex Age\n--- ---- --- ---\n(no records)"
    );
}

#[test]
fn render_shape_marks_branches() {
    let mut table = SearchTable::new();
    for (key, name) in [(56, "Zhang"), (19, "Wang"), (80, "Zhou"), (5, "Huang")] {
        table.insert(Record::new(key, name, "F", 19)).unwrap();
    }
    let expected = [
        "*- [56 Zhang F 19]",
        "   L- [19 Wang F 19]",
        "   |  L- [5 Huang F 19]",
        "   R- [80 Zhou F 19]",
    ]
    .join("\n");
    assert_eq!(table.render_shape(), expected);
    assert_eq!(SearchTable::new().render_shape(), "(empty tree)");
}
