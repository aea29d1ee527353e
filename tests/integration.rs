//! Integration tests driving the containers together, the way a consumer
//! would.

use colloid::{Dict, Error, Iterable, List, Set, Tuple, Value};

#[test]
fn cross_kind_construction() {
    let list = List::from_values([1, 2, 2, 3]);

    // a set built from the list deduplicates
    let set = Set::from_iterable(&list).unwrap();
    assert_eq!(set.length(), 3);

    // a tuple snapshots the set's contents
    let tuple = Tuple::from_iterable(&set);
    assert_eq!(tuple.length(), 3);
    for value in tuple.iterate() {
        assert!(set.contains(value.clone()).unwrap());
    }

    // and a list round-trips the tuple in order
    let back = List::from_iterable(&tuple);
    assert_eq!(back.length(), 3);
}

#[test]
fn heterogeneous_set_algebra() {
    let a = Set::from_values([Value::Int(1), Value::Float(2.2)]).unwrap();
    let b = Set::from_values([Value::Int(1), Value::Text("hello".into())]).unwrap();

    let both = a.intersection(&b);
    assert!(both.equals(&Set::from_values([Value::Int(1)]).unwrap()));

    let either = a.symmetric_difference(&b);
    let expected =
        Set::from_values([Value::Float(2.2), Value::Text("hello".into())]).unwrap();
    assert!(either.equals(&expected));

    let all = a.union(&b).unwrap();
    assert!(all.superset_of(&a));
    assert!(all.superset_of(&b));
}

#[test]
fn nested_values_as_set_elements() {
    let mut set = Set::new();
    set.add(Value::List(vec![Value::Int(1), Value::Int(2)])).unwrap();
    set.add(Value::List(vec![Value::Int(1), Value::Int(2)])).unwrap();
    set.add(Value::List(vec![Value::Int(2), Value::Int(1)])).unwrap();

    // identical nested lists collapse; order inside a list matters
    assert_eq!(set.length(), 2);
}

#[test]
fn drain_is_exact_and_abandonable() {
    let mut dict = Dict::new();
    for i in 0..10 {
        dict.set(i, i * i).unwrap();
    }

    // a full drain yields every key exactly once
    let mut seen = Set::new();
    for key in dict.iterate() {
        seen.add(key.clone()).unwrap();
    }
    assert_eq!(seen.length(), 10);

    // abandoning a drain partway is an ordinary drop
    {
        let mut drain = dict.iterate();
        let _ = drain.next();
        let _ = drain.next();
    }

    // the container is untouched and still fully drainable
    assert_eq!(dict.length(), 10);
    assert_eq!(dict.iterate().count(), 10);
    dict.set(99, 0).unwrap();
    assert_eq!(dict.iterate().count(), 11);
}

#[test]
fn empty_pop_asymmetry() {
    // ordered containers fail on an empty pop
    let mut list = List::new();
    assert!(matches!(list.pop(), Err(Error::Empty)));

    // unordered containers report an empty pop as None
    assert_eq!(Set::new().pop(), None);
    assert_eq!(Dict::new().pop(), None);
}

#[test]
fn dict_snapshots_rebuild_the_dict() {
    let dict = Dict::from_pairs([("a", 1), ("b", 2), ("c", 3)]).unwrap();

    // keys and values pair up positionally; feeding them back reproduces
    // the original mapping
    let keys: Vec<Value> = dict.keys().iterate().cloned().collect();
    let values: Vec<Value> = dict.values().iterate().cloned().collect();
    let rebuilt = Dict::from_keys_values(keys, values).unwrap();
    assert!(rebuilt.equals(&dict));
}

fn edge(to: &str, weight: i64) -> Value {
    Value::List(vec![Value::from(to), Value::from(weight)])
}

/// A shortest-path walk with the adjacency, distance and visited state all
/// held in these containers.
#[test]
fn shortest_path_walk() {
    let edges = Dict::from_pairs([
        ("a", Value::List(vec![edge("b", 1), edge("c", 10)])),
        ("b", Value::List(vec![edge("c", 2), edge("d", 7)])),
        ("c", Value::List(vec![edge("d", 3)])),
        ("d", Value::List(vec![])),
    ])
    .unwrap();

    let mut dist = Dict::new();
    dist.set("a", 0).unwrap();
    let mut visited = Set::new();

    loop {
        // pick the unvisited node with the smallest tentative distance
        let mut current: Option<(Value, i64)> = None;
        for node in dist.iterate() {
            if visited.contains(node.clone()).unwrap() {
                continue;
            }
            let Some(&Value::Int(d)) = dist.get(node.clone()).unwrap() else {
                panic!("distance must be an int");
            };
            if current.as_ref().is_none_or(|(_, best)| d < *best) {
                current = Some((node.clone(), d));
            }
        }
        let Some((node, d)) = current else { break };
        visited.add(node.clone()).unwrap();

        let Some(Value::List(adjacent)) = edges.get(node).unwrap() else {
            continue;
        };
        for e in adjacent {
            let Value::List(pair) = e else {
                panic!("edges must be (node, weight) pairs");
            };
            let (next, weight) = (&pair[0], &pair[1]);
            let Value::Int(w) = weight else {
                panic!("weights must be ints");
            };
            let candidate = d + w;
            let better = match dist.get(next.clone()).unwrap() {
                Some(Value::Int(existing)) => candidate < *existing,
                _ => true,
            };
            if better {
                dist.set(next.clone(), candidate).unwrap();
            }
        }
    }

    assert_eq!(dist.get("b").unwrap(), Some(&Value::Int(1)));
    assert_eq!(dist.get("c").unwrap(), Some(&Value::Int(3)));
    assert_eq!(dist.get("d").unwrap(), Some(&Value::Int(6)));
    assert_eq!(visited.length(), 4);
}
