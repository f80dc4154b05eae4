use rollback::Rollback;

fn main() {
    let mut counter = Rollback::new(0);

    counter.increment();
    counter.increment();
    counter += 10;
    assert_eq!(counter, 12);

    counter.undo();
    assert_eq!(counter, 2);
    assert!(counter.can_redo());

    // Committing after an undo discards the redo entries.
    counter *= 3;
    assert_eq!(counter.entries().copied().collect::<Vec<_>>(), [0, 1, 2, 6]);

    let doubled = &counter * 2;
    println!("counter: {counter}, doubled: {doubled}, entries: {}", counter.size());

    counter.compress();
    println!("after compress: {counter}, entries: {}", counter.size());
}
