//! List reconciliation.
//!
//! [`calculate_diff`] turns an old ordered list into a new one with the
//! fewest structural edits it can find:
//!
//! 1. A Myers O(ND) diff over item keys finds the longest run of items that
//!    keep their relative order.
//! 2. Items outside that run whose key appears on both sides become a single
//!    move each; the rest become removals or insertions.
//! 3. Items present on both sides whose contents differ get a change edit.
//!
//! Edits are ordered and indexed so that applying them one after another to
//! the old list (see [`EditScript::apply_to`]) produces the new list. Removals
//! come first, then moves and insertions from front to back, then changes
//! addressed by their index in the new list.

use super::todo::ToDo;
use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

/// An item that can be told apart from other items independently of its contents.
///
/// Two items with the same key are the same logical item; `PartialEq` then
/// decides whether it has to be redrawn.
pub trait ListItem: Clone + PartialEq {
    type Key: Eq + Hash + Clone;

    fn key(&self) -> Self::Key;
}

impl ListItem for ToDo {
    type Key = i32;

    fn key(&self) -> i32 {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Edit<T> {
    Insert { index: usize, item: T },
    Remove { index: usize },
    Move { from: usize, to: usize },
    Change { index: usize, item: T },
}

/// Receiver of incremental list updates, such as a rendered list widget.
pub trait ListUpdateCallback<T> {
    fn on_inserted(&mut self, position: usize, item: &T);
    fn on_removed(&mut self, position: usize);
    fn on_moved(&mut self, from: usize, to: usize);
    fn on_changed(&mut self, position: usize, item: &T);
}

#[derive(Debug, Clone, PartialEq)]
pub struct EditScript<T> {
    edits: Vec<Edit<T>>,
}

impl<T: Clone> EditScript<T> {
    pub fn edits(&self) -> &[Edit<T>] {
        &self.edits
    }

    pub fn len(&self) -> usize {
        self.edits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    /// Applies every edit in order.
    pub fn apply_to(&self, list: &mut Vec<T>) {
        for edit in &self.edits {
            match edit {
                Edit::Insert { index, item } => list.insert(*index, item.clone()),
                Edit::Remove { index } => {
                    list.remove(*index);
                }
                Edit::Move { from, to } => {
                    let item = list.remove(*from);
                    list.insert(*to, item);
                }
                Edit::Change { index, item } => list[*index] = item.clone(),
            }
        }
    }

    /// Forwards every edit, in order, to `callback`.
    pub fn dispatch_updates_to<C: ListUpdateCallback<T> + ?Sized>(&self, callback: &mut C) {
        for edit in &self.edits {
            match edit {
                Edit::Insert { index, item } => callback.on_inserted(*index, item),
                Edit::Remove { index } => callback.on_removed(*index),
                Edit::Move { from, to } => callback.on_moved(*from, *to),
                Edit::Change { index, item } => callback.on_changed(*index, item),
            }
        }
    }
}

/// Where an item of the new list comes from.
#[derive(Debug, Clone, Copy)]
enum Origin {
    /// Part of the common subsequence; never moves.
    Kept(usize),
    /// Present in the old list at this index but out of order.
    Moved(usize),
    Inserted,
}

/// Position of an entry in the list being rebuilt.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Slot {
    Old(usize),
    New(usize),
}

pub fn calculate_diff<T: ListItem>(old: &[T], new: &[T]) -> EditScript<T> {
    let old_keys: Vec<T::Key> = old.iter().map(ListItem::key).collect();
    let new_keys: Vec<T::Key> = new.iter().map(ListItem::key).collect();

    let mut origins: Vec<Origin> = vec![Origin::Inserted; new.len()];
    let mut old_matched = vec![false; old.len()];
    for (i, j) in common_subsequence(&old_keys, &new_keys) {
        origins[j] = Origin::Kept(i);
        old_matched[i] = true;
    }

    // Leftover old items, per key, in old order.
    let mut leftovers: HashMap<T::Key, VecDeque<usize>> = HashMap::new();
    for (i, key) in old_keys.iter().enumerate() {
        if !old_matched[i] {
            leftovers.entry(key.clone()).or_default().push_back(i);
        }
    }
    for (j, key) in new_keys.iter().enumerate() {
        if !matches!(origins[j], Origin::Inserted) {
            continue;
        }
        if let Some(i) = leftovers.get_mut(key).and_then(VecDeque::pop_front) {
            origins[j] = Origin::Moved(i);
            old_matched[i] = true;
        }
    }

    let mut edits = Vec::new();

    // Back to front, so each index is still the item's old index.
    for i in (0..old.len()).rev() {
        if !old_matched[i] {
            edits.push(Edit::Remove { index: i });
        }
    }
    let mut current: Vec<Slot> = (0..old.len()).filter(|&i| old_matched[i]).map(Slot::Old).collect();

    let slot_of = |j: usize, origins: &[Origin]| match origins[j] {
        Origin::Kept(i) | Origin::Moved(i) => Slot::Old(i),
        Origin::Inserted => Slot::New(j),
    };
    let position = |current: &[Slot], slot: Slot| current.iter().position(|s| *s == slot);

    // Each moved or inserted item is placed directly behind its predecessor
    // in the new list. Kept items already appear in the right relative order.
    for j in 0..new.len() {
        let behind = if j == 0 {
            None
        } else {
            position(&current, slot_of(j - 1, &origins))
        };

        match origins[j] {
            Origin::Kept(_) => {}
            Origin::Inserted => {
                let to = behind.map_or(0, |q| q + 1);
                edits.push(Edit::Insert { index: to, item: new[j].clone() });
                current.insert(to, Slot::New(j));
            }
            Origin::Moved(i) => {
                let Some(from) = position(&current, Slot::Old(i)) else {
                    continue;
                };
                let to = match behind {
                    None => 0,
                    Some(q) if from < q => q,
                    Some(q) => q + 1,
                };
                if from != to {
                    edits.push(Edit::Move { from, to });
                    current.remove(from);
                    current.insert(to, Slot::Old(i));
                }
            }
        }
    }

    for (j, origin) in origins.iter().enumerate() {
        if let Origin::Kept(i) | Origin::Moved(i) = *origin {
            if old[i] != new[j] {
                edits.push(Edit::Change { index: j, item: new[j].clone() });
            }
        }
    }

    EditScript { edits }
}

/// Index pairs `(old, new)` of a longest common subsequence, in order.
///
/// Greedy forward Myers search recording the furthest-reaching x per diagonal
/// for every edit distance, followed by a backtrack through those records.
fn common_subsequence<K: Eq>(a: &[K], b: &[K]) -> Vec<(usize, usize)> {
    let n = a.len() as isize;
    let m = b.len() as isize;
    if n == 0 || m == 0 {
        return Vec::new();
    }

    let max = (n + m) as usize;
    let offset = max as isize;
    let mut v = vec![0isize; 2 * max + 2];
    let mut trace: Vec<Vec<isize>> = Vec::new();

    'search: for d in 0..=max as isize {
        trace.push(v.clone());
        let mut k = -d;
        while k <= d {
            let idx = (k + offset) as usize;
            let mut x = if k == -d || (k != d && v[idx - 1] < v[idx + 1]) {
                v[idx + 1]
            } else {
                v[idx - 1] + 1
            };
            let mut y = x - k;
            while x < n && y < m && a[x as usize] == b[y as usize] {
                x += 1;
                y += 1;
            }
            v[idx] = x;
            if x >= n && y >= m {
                break 'search;
            }
            k += 2;
        }
    }

    let mut pairs = Vec::new();
    let (mut x, mut y) = (n, m);
    for (d, v) in trace.iter().enumerate().rev() {
        let d = d as isize;
        let k = x - y;
        let idx = (k + offset) as usize;
        let prev_k = if k == -d || (k != d && v[idx - 1] < v[idx + 1]) { k + 1 } else { k - 1 };
        let prev_x = v[(prev_k + offset) as usize];
        let prev_y = prev_x - prev_k;

        while x > prev_x && y > prev_y {
            x -= 1;
            y -= 1;
            pairs.push((x as usize, y as usize));
        }
        if d > 0 {
            x = prev_x;
            y = prev_y;
        }
    }

    pairs.reverse();
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::priority::Priority;

    fn todo(id: i32, title: &str) -> ToDo {
        ToDo::new(title, Priority::Medium, "details").with_id(id)
    }

    fn assert_transforms(old: &[ToDo], new: &[ToDo]) -> EditScript<ToDo> {
        let script = calculate_diff(old, new);
        let mut list = old.to_vec();
        script.apply_to(&mut list);
        assert_eq!(list, new, "script {:?}", script.edits());
        script
    }

    #[test]
    fn identical_lists_need_no_edits() {
        let list = vec![todo(1, "A"), todo(2, "B"), todo(3, "C")];
        assert!(calculate_diff(&list, &list).is_empty());
    }

    #[test]
    fn empty_old_list_is_all_inserts() {
        let new = vec![todo(1, "A"), todo(2, "B")];
        let script = assert_transforms(&[], &new);
        assert!(script.edits().iter().all(|e| matches!(e, Edit::Insert { .. })));
        assert_eq!(script.len(), 2);
    }

    #[test]
    fn empty_new_list_is_all_removes() {
        let old = vec![todo(1, "A"), todo(2, "B"), todo(3, "C")];
        let script = assert_transforms(&old, &[]);
        assert_eq!(
            script.edits(),
            &[Edit::Remove { index: 2 }, Edit::Remove { index: 1 }, Edit::Remove { index: 0 }]
        );
    }

    #[test]
    fn replaces_first_item_and_appends() {
        let old = vec![todo(1, "A"), todo(2, "B")];
        let new = vec![todo(2, "B"), todo(3, "C")];
        let script = assert_transforms(&old, &new);
        assert_eq!(
            script.edits(),
            &[Edit::Remove { index: 0 }, Edit::Insert { index: 1, item: todo(3, "C") }]
        );
    }

    #[test]
    fn rotation_is_a_single_move() {
        let old = vec![todo(1, "A"), todo(2, "B"), todo(3, "C")];
        let new = vec![todo(2, "B"), todo(3, "C"), todo(1, "A")];
        let script = assert_transforms(&old, &new);
        assert_eq!(script.edits(), &[Edit::Move { from: 0, to: 2 }]);
    }

    #[test]
    fn move_to_front() {
        let old = vec![todo(1, "A"), todo(2, "B"), todo(3, "C")];
        let new = vec![todo(3, "C"), todo(1, "A"), todo(2, "B")];
        let script = assert_transforms(&old, &new);
        assert_eq!(script.edits(), &[Edit::Move { from: 2, to: 0 }]);
    }

    #[test]
    fn content_change_keeps_position() {
        let old = vec![todo(1, "A"), todo(2, "B")];
        let new = vec![todo(1, "A"), todo(2, "B2")];
        let script = assert_transforms(&old, &new);
        assert_eq!(script.edits(), &[Edit::Change { index: 1, item: todo(2, "B2") }]);
    }

    #[test]
    fn moved_and_changed_item_gets_both_edits() {
        let old = vec![todo(1, "A"), todo(2, "B"), todo(3, "C")];
        let new = vec![todo(3, "C!"), todo(1, "A"), todo(2, "B")];
        let script = assert_transforms(&old, &new);
        assert_eq!(
            script.edits(),
            &[Edit::Move { from: 2, to: 0 }, Edit::Change { index: 0, item: todo(3, "C!") }]
        );
    }

    #[test]
    fn reversal_and_mixed_edits_transform_correctly() {
        let old: Vec<ToDo> = (1..=6).map(|i| todo(i, "x")).collect();
        let reversed: Vec<ToDo> = old.iter().rev().cloned().collect();
        assert_transforms(&old, &reversed);

        let mixed = vec![todo(7, "new"), todo(4, "x"), todo(2, "x!"), todo(6, "x"), todo(8, "new"), todo(1, "x")];
        assert_transforms(&old, &mixed);
        assert_transforms(&mixed, &old);
    }

    #[test]
    fn common_subsequence_of_disjoint_lists_is_empty() {
        assert!(common_subsequence(&[1, 2, 3], &[4, 5]).is_empty());
        assert_eq!(common_subsequence(&[1, 2, 3, 4], &[2, 4]), vec![(1, 0), (3, 1)]);
    }

    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
    }

    impl ListUpdateCallback<ToDo> for Recorder {
        fn on_inserted(&mut self, position: usize, item: &ToDo) {
            self.events.push(format!("insert {} {}", position, item.id));
        }
        fn on_removed(&mut self, position: usize) {
            self.events.push(format!("remove {}", position));
        }
        fn on_moved(&mut self, from: usize, to: usize) {
            self.events.push(format!("move {} {}", from, to));
        }
        fn on_changed(&mut self, position: usize, item: &ToDo) {
            self.events.push(format!("change {} {}", position, item.id));
        }
    }

    #[test]
    fn dispatch_preserves_edit_order() {
        let old = vec![todo(1, "A"), todo(2, "B")];
        let new = vec![todo(2, "B"), todo(3, "C")];
        let mut recorder = Recorder::default();
        calculate_diff(&old, &new).dispatch_updates_to(&mut recorder);
        assert_eq!(recorder.events, vec!["remove 0", "insert 1 3"]);
    }
}
