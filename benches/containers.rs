//! Criterion benchmarks for the core container operations.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use holdall::{BinaryHeap, Deque, HashTable, LinkedHashTable, RedBlackTree, Trie};

fn bench_red_black_tree(c: &mut Criterion) {
    c.bench_function("red_black_insert_1k", |b| {
        b.iter(|| {
            let mut tree = RedBlackTree::new();
            for i in 0..1000 {
                tree.insert(black_box((i * 37) % 1000), i).unwrap();
            }
            tree
        })
    });

    let mut tree = RedBlackTree::new();
    for i in 0..1000 {
        tree.insert((i * 37) % 1000, i).unwrap();
    }
    c.bench_function("red_black_get_1k", |b| {
        b.iter(|| {
            for i in 0..1000 {
                black_box(tree.get(&black_box(i)));
            }
        })
    });
}

fn bench_hash_tables(c: &mut Criterion) {
    c.bench_function("hash_table_set_1k", |b| {
        b.iter(|| {
            let mut table = HashTable::new();
            for i in 0..1000 {
                table.set(black_box(i), i);
            }
            table
        })
    });

    c.bench_function("linked_hash_table_set_1k", |b| {
        b.iter(|| {
            let mut table = LinkedHashTable::new();
            for i in 0..1000 {
                table.set(black_box(i), i);
            }
            table
        })
    });
}

fn bench_heap(c: &mut Criterion) {
    c.bench_function("binary_heap_push_poll_1k", |b| {
        b.iter(|| {
            let mut heap = BinaryHeap::new();
            for i in 0..1000 {
                heap.push(black_box((i * 37) % 1000));
            }
            while let Some(x) = heap.poll() {
                black_box(x);
            }
        })
    });
}

fn bench_deque(c: &mut Criterion) {
    c.bench_function("deque_mixed_ends_1k", |b| {
        b.iter(|| {
            let mut deque = Deque::new();
            for i in 0..1000 {
                if i % 2 == 0 {
                    deque.push_back(black_box(i));
                } else {
                    deque.push_front(black_box(i));
                }
            }
            for i in 0..1000 {
                black_box(deque.at(i));
            }
            deque
        })
    });
}

fn bench_trie(c: &mut Criterion) {
    let words: Vec<String> = (0..500).map(|i| format!("word{i:04}")).collect();
    c.bench_function("trie_add_lookup_500", |b| {
        b.iter(|| {
            let mut trie = Trie::new();
            for w in &words {
                trie.add(black_box(w));
            }
            black_box(trie.words_with_prefix("word0", 100, false))
        })
    });
}

criterion_group!(
    benches,
    bench_red_black_tree,
    bench_hash_tables,
    bench_heap,
    bench_deque,
    bench_trie
);
criterion_main!(benches);
