use std::collections::HashSet;

use tinyecs::{Component, ComponentContainer, Entity, EntityAllocator};

#[derive(Debug, Clone, PartialEq)]
struct Name {
    name: String,
}

impl Component for Name {}

impl From<&str> for Name {
    fn from(value: &str) -> Self {
        Name {
            name: value.to_string(),
        }
    }
}

fn spawn(allocator: &mut EntityAllocator, count: usize) -> Vec<Entity> {
    (0..count).map(|_| allocator.next()).collect()
}

fn assert_dense(names: &ComponentContainer<Name>) {
    assert_eq!(names.len(), names.entities().len());
    assert_eq!(names.len(), names.components().len());
    for (slot, entity) in names.entities().iter().enumerate() {
        assert_eq!(names.slot_of(*entity), Some(slot));
    }
}

#[test]
fn single_insert_is_retrievable() {
    let mut allocator = EntityAllocator::new();
    let fish = allocator.next();
    let mut names = ComponentContainer::<Name>::new();

    names.insert(fish, Name::from("Fish"));

    assert!(names.has(fish));
    assert_eq!(names.get(fish).name, "Fish");
    assert_eq!(names.len(), 1);
}

#[test]
fn removing_middle_keeps_the_others() {
    let mut allocator = EntityAllocator::new();
    let [a, b, c] = [allocator.next(), allocator.next(), allocator.next()];
    let mut names = ComponentContainer::<Name>::new();
    names.emplace(a, "A");
    names.emplace(b, "B");
    names.emplace(c, "C");

    names.remove(b);

    assert_eq!(names.len(), 2);
    assert!(!names.has(b));
    assert_eq!(names.get(a).name, "A");
    assert_eq!(names.get(c).name, "C");
    // the former last record now occupies b's slot
    assert_eq!(names.slot_of(c), Some(1));
    let remaining: HashSet<_> = names.entities().iter().copied().collect();
    assert_eq!(remaining, HashSet::from([a, c]));
    assert_dense(&names);
}

#[test]
fn duplicate_insert_panics_and_leaves_state_alone() {
    let mut allocator = EntityAllocator::new();
    let a = allocator.next();
    let mut names = ComponentContainer::<Name>::new();
    names.emplace(a, "Fish");

    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        names.emplace(a, "Shark");
    }));

    assert!(result.is_err());
    assert_eq!(names.len(), 1);
    assert_eq!(names.get(a).name, "Fish");
    assert_dense(&names);
}

#[test]
fn removing_unknown_entity_is_a_no_op() {
    let mut allocator = EntityAllocator::new();
    let a = allocator.next();
    let never_inserted = allocator.next();
    let mut names = ComponentContainer::<Name>::new();
    names.emplace(a, "Fish");

    assert_eq!(names.remove(never_inserted), None);
    assert_eq!(names.len(), 1);
}

#[test]
fn remove_is_idempotent() {
    let mut allocator = EntityAllocator::new();
    let entities = spawn(&mut allocator, 3);
    let mut names = ComponentContainer::<Name>::new();
    for entity in &entities {
        names.emplace(*entity, "x");
    }

    assert!(names.remove(entities[0]).is_some());
    let after_first: Vec<_> = names.entities().to_vec();
    assert!(names.remove(entities[0]).is_none());

    assert_eq!(names.entities(), after_first.as_slice());
    assert_eq!(names.len(), 2);
}

#[test]
fn removing_even_half_of_a_hundred() {
    let mut allocator = EntityAllocator::new();
    let entities = spawn(&mut allocator, 100);
    let mut names = ComponentContainer::<Name>::new();
    for (i, entity) in entities.iter().enumerate() {
        names.insert(
            *entity,
            Name {
                name: format!("animal-{i}"),
            },
        );
    }

    for entity in entities.iter().step_by(2) {
        names.remove(*entity);
    }

    assert_eq!(names.len(), 50);
    for (i, entity) in entities.iter().enumerate() {
        if i % 2 == 0 {
            assert!(!names.has(*entity));
        } else {
            assert_eq!(names.get(*entity).name, format!("animal-{i}"));
        }
    }
    let remaining: HashSet<_> = names.entities().iter().copied().collect();
    let odd: HashSet<_> = entities.iter().skip(1).step_by(2).copied().collect();
    assert_eq!(remaining, odd);
    assert_dense(&names);
}

#[test]
fn clear_empties_and_allows_reinsert() {
    let mut allocator = EntityAllocator::new();
    let entities = spawn(&mut allocator, 10);
    let mut names = ComponentContainer::<Name>::new();
    for entity in &entities {
        names.emplace(*entity, "x");
    }

    names.clear();
    assert!(names.is_empty());
    assert!(entities.iter().all(|e| !names.has(*e)));
    names.clear();

    names.emplace(entities[3], "again");
    assert_eq!(names.get(entities[3]).name, "again");
    assert_dense(&names);
}

#[test]
fn sort_orders_by_caller_priority() {
    let mut allocator = EntityAllocator::new();
    let entities = spawn(&mut allocator, 6);
    let mut names = ComponentContainer::<Name>::new();
    for entity in &entities {
        names.insert(
            *entity,
            Name {
                name: entity.id().to_string(),
            },
        );
    }
    names.remove(entities[1]);

    // odd ids first, then even, each ascending
    names.sort_by_key(|entity| (entity.id() % 2 == 0, entity.id()));

    let order: Vec<u32> = names.entities().iter().map(|e| e.id()).collect();
    assert_eq!(order, vec![1, 3, 5, 4, 6]);
    for entity in names.entities() {
        assert_eq!(names.get(*entity).name, entity.id().to_string());
    }
    assert_dense(&names);
}
