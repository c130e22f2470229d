//! Comparer-ordered red-black tree backing [`SortedSet`](super::SortedSet)
//! and [`SortedDictionary`](super::SortedDictionary).
//!
//! The tree owns its nodes and rebalances on insertion with the four
//! red-red cases of Okasaki's formulation:
//!
//! 1. Every node is either red or black
//! 2. The root is black
//! 3. Red nodes have only black children
//! 4. Every path from root to leaf has the same number of black nodes
//!
//! These invariants keep the height at O(log N). Keys are ordered by a
//! [`Comparer`] instead of `Ord`, and an insertion whose key compares equal
//! to a stored key leaves the tree untouched and hands the rejected entry
//! back to the caller.

use std::cmp::Ordering;

use crate::comparer::Comparer;

// =============================================================================
// Node Definition
// =============================================================================

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Color {
    Red,
    Black,
}

type Link<K, V> = Option<Box<Node<K, V>>>;

#[derive(Clone)]
struct Node<K, V> {
    key: K,
    value: V,
    color: Color,
    left: Link<K, V>,
    right: Link<K, V>,
}

impl<K, V> Node<K, V> {
    const fn new_red(key: K, value: V) -> Self {
        Self {
            key,
            value,
            color: Color::Red,
            left: None,
            right: None,
        }
    }

    fn is_red(&self) -> bool {
        self.color == Color::Red
    }
}

fn is_red<K, V>(node: Option<&Node<K, V>>) -> bool {
    node.is_some_and(Node::is_red)
}

// =============================================================================
// RedBlackTree Definition
// =============================================================================

#[derive(Clone)]
pub(crate) struct RedBlackTree<K, V, C> {
    root: Link<K, V>,
    length: usize,
    comparer: C,
}

impl<K, V, C> RedBlackTree<K, V, C> {
    pub(crate) const fn new(comparer: C) -> Self {
        Self {
            root: None,
            length: 0,
            comparer,
        }
    }

    pub(crate) const fn len(&self) -> usize {
        self.length
    }

    pub(crate) const fn comparer(&self) -> &C {
        &self.comparer
    }

    pub(crate) fn first(&self) -> Option<(&K, &V)> {
        let mut current = self.root.as_deref()?;
        while let Some(left) = current.left.as_deref() {
            current = left;
        }
        Some((&current.key, &current.value))
    }

    pub(crate) fn last(&self) -> Option<(&K, &V)> {
        let mut current = self.root.as_deref()?;
        while let Some(right) = current.right.as_deref() {
            current = right;
        }
        Some((&current.key, &current.value))
    }

    pub(crate) fn iter(&self) -> Iter<'_, K, V> {
        let mut iterator = Iter {
            stack: Vec::new(),
            remaining: self.length,
        };
        iterator.push_left_spine(self.root.as_deref());
        iterator
    }

    pub(crate) fn into_entries(self) -> Vec<(K, V)> {
        let mut entries = Vec::with_capacity(self.length);
        Self::drain_in_order(self.root, &mut entries);
        entries
    }

    fn drain_in_order(link: Link<K, V>, entries: &mut Vec<(K, V)>) {
        if let Some(node) = link {
            let Node {
                key,
                value,
                left,
                right,
                ..
            } = *node;
            Self::drain_in_order(left, entries);
            entries.push((key, value));
            Self::drain_in_order(right, entries);
        }
    }
}

impl<K, V, C: Comparer<K>> RedBlackTree<K, V, C> {
    pub(crate) fn get(&self, key: &K) -> Option<&V> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match self.comparer.compare(key, &node.key) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return Some(&node.value),
            };
        }
        None
    }

    pub(crate) fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let mut current = self.root.as_deref_mut();
        while let Some(node) = current {
            current = match self.comparer.compare(key, &node.key) {
                Ordering::Less => node.left.as_deref_mut(),
                Ordering::Greater => node.right.as_deref_mut(),
                Ordering::Equal => return Some(&mut node.value),
            };
        }
        None
    }

    /// Inserts an entry unless a comparer-equal key is already stored.
    ///
    /// Returns the rejected entry when the key is present; the stored entry
    /// is kept as it was.
    pub(crate) fn insert(&mut self, key: K, value: V) -> Result<(), (K, V)> {
        let (mut new_root, outcome) =
            Self::insert_into_node(self.root.take(), key, value, &self.comparer);
        new_root.color = Color::Black;
        self.root = Some(new_root);
        if outcome.is_ok() {
            self.length += 1;
        }
        outcome
    }

    fn insert_into_node(
        link: Link<K, V>,
        key: K,
        value: V,
        comparer: &C,
    ) -> (Box<Node<K, V>>, Result<(), (K, V)>) {
        let Some(mut node) = link else {
            return (Box::new(Node::new_red(key, value)), Ok(()));
        };
        match comparer.compare(&key, &node.key) {
            Ordering::Less => {
                let (new_left, outcome) =
                    Self::insert_into_node(node.left.take(), key, value, comparer);
                node.left = Some(new_left);
                (Self::balance(node), outcome)
            }
            Ordering::Greater => {
                let (new_right, outcome) =
                    Self::insert_into_node(node.right.take(), key, value, comparer);
                node.right = Some(new_right);
                (Self::balance(node), outcome)
            }
            Ordering::Equal => (node, Err((key, value))),
        }
    }

    /// Resolves a red-red violation below a black node.
    ///
    /// Each case rebuilds the same shape: a red root with two black
    /// children.
    fn balance(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
        if node.is_red() {
            return node;
        }

        if let Some(mut left) = node.left.take() {
            if left.is_red() {
                // Case 1: Left-Left
                if is_red(left.left.as_deref())
                    && let Some(mut outer) = left.left.take()
                {
                    outer.color = Color::Black;
                    node.left = left.right.take();
                    left.left = Some(outer);
                    left.right = Some(node);
                    left.color = Color::Red;
                    return left;
                }
                // Case 2: Left-Right
                if is_red(left.right.as_deref())
                    && let Some(mut inner) = left.right.take()
                {
                    left.right = inner.left.take();
                    left.color = Color::Black;
                    node.left = inner.right.take();
                    inner.left = Some(left);
                    inner.right = Some(node);
                    inner.color = Color::Red;
                    return inner;
                }
            }
            node.left = Some(left);
        }

        if let Some(mut right) = node.right.take() {
            if right.is_red() {
                // Case 3: Right-Right
                if is_red(right.right.as_deref())
                    && let Some(mut outer) = right.right.take()
                {
                    outer.color = Color::Black;
                    node.right = right.left.take();
                    right.left = Some(node);
                    right.right = Some(outer);
                    right.color = Color::Red;
                    return right;
                }
                // Case 4: Right-Left
                if is_red(right.left.as_deref())
                    && let Some(mut inner) = right.left.take()
                {
                    node.right = inner.left.take();
                    right.left = inner.right.take();
                    right.color = Color::Black;
                    inner.left = Some(node);
                    inner.right = Some(right);
                    inner.color = Color::Red;
                    return inner;
                }
            }
            node.right = Some(right);
        }

        node
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// In-order iterator over the entries of a [`RedBlackTree`].
pub(crate) struct Iter<'a, K, V> {
    stack: Vec<&'a Node<K, V>>,
    remaining: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    fn push_left_spine(&mut self, mut node: Option<&'a Node<K, V>>) {
        while let Some(current) = node {
            self.stack.push(current);
            node = current.left.as_deref();
        }
    }
}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        self.remaining -= 1;
        Some((&node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> std::iter::FusedIterator for Iter<'_, K, V> {}

// =============================================================================
// Tests
// =============================================================================
