//! An unbalanced binary search tree of courses
//!
//! The [`CourseIndex`] keeps courses ordered by course number. Its shape is
//! determined entirely by insertion order; no rebalancing is performed, so a
//! source presented in sorted order produces a tree as deep as it is long.
//! Every traversal is therefore iterative rather than recursive.
//!
//! # Key normalisation
//!
//! Stored keys are kept exactly as inserted. Queries made through
//! [`CourseIndex::get`], [`CourseIndex::contains`] and [`CourseIndex::remove`]
//! are ASCII upper-cased before comparison, so a course is only reachable by
//! key if its number was upper-case when inserted.

use std::{cmp::Ordering, iter::FusedIterator};

use crate::domain::Course;

type Link = Option<Box<Node>>;

#[derive(Debug)]
struct Node {
    course: Course,
    left: Link,
    right: Link,
}

impl Node {
    const fn new(course: Course) -> Self {
        Self {
            course,
            left: None,
            right: None,
        }
    }

    fn key(&self) -> &str {
        self.course.number()
    }

    /// The child to descend into when searching for `key`, or `None` if this
    /// node holds `key`.
    fn direction(&self, key: &str) -> Option<Direction> {
        match key.cmp(self.key()) {
            Ordering::Equal => None,
            Ordering::Less => Some(Direction::Left),
            Ordering::Greater => Some(Direction::Right),
        }
    }

    const fn child_mut(&mut self, direction: Direction) -> &mut Link {
        match direction {
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Left,
    Right,
}

/// An ordered collection of courses keyed by course number.
///
/// Equal keys are routed into the right subtree on insert, so duplicates are
/// retained (not deduplicated) and remain reachable by iteration.
#[derive(Debug, Default)]
pub struct CourseIndex {
    root: Link,
    len: usize,
}

impl CourseIndex {
    /// Creates an empty index.
    #[must_use]
    pub const fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// The number of courses stored.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the index holds no courses.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts a course.
    ///
    /// Starting at the root, the course descends left while the current key
    /// is strictly greater than its own, and right otherwise, and is attached
    /// at the first empty position.
    pub fn insert(&mut self, course: Course) {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = if node.key() > course.number() {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *link = Some(Box::new(Node::new(course)));
        self.len += 1;
    }

    /// Looks up a course by number.
    ///
    /// The query is upper-cased before comparison.
    #[must_use]
    pub fn get(&self, course_number: &str) -> Option<&Course> {
        let key = course_number.to_ascii_uppercase();
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match node.direction(&key) {
                None => return Some(&node.course),
                Some(Direction::Left) => node.left.as_deref(),
                Some(Direction::Right) => node.right.as_deref(),
            };
        }
        None
    }

    /// Returns `true` if a course with the given number is stored.
    #[must_use]
    pub fn contains(&self, course_number: &str) -> bool {
        self.get(course_number).is_some()
    }

    /// Removes the course with the given number, returning it.
    ///
    /// The query is upper-cased before comparison. If duplicates exist, the
    /// first match on the search path (the shallowest) is removed. A node
    /// with two children is replaced by its in-order successor, the leftmost
    /// node of its right subtree.
    ///
    /// Removing an absent key is a no-op and returns `None`.
    pub fn remove(&mut self, course_number: &str) -> Option<Course> {
        let key = course_number.to_ascii_uppercase();
        let slot = Self::find_slot(&mut self.root, &key);
        let mut node = slot.take()?;

        *slot = match (node.left.take(), node.right.take()) {
            (None, None) => None,
            (Some(child), None) | (None, Some(child)) => Some(child),
            (Some(left), Some(right)) => {
                let mut right = Some(right);
                Self::take_leftmost(&mut right).map(|mut successor| {
                    successor.left = Some(left);
                    successor.right = right;
                    successor
                })
            }
        };

        self.len -= 1;
        Some(node.course)
    }

    /// Removes every course.
    ///
    /// Nodes are released one at a time from an explicit stack, so the cost
    /// in stack depth is constant regardless of the tree's shape.
    pub fn clear(&mut self) {
        let mut pending: Vec<Box<Node>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
        self.len = 0;
    }

    /// The number of nodes on the longest root-to-leaf path.
    ///
    /// An empty index has depth 0. For `n` courses inserted in sorted order
    /// the depth is `n`.
    #[must_use]
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending: Vec<(&Node, usize)> =
            self.root.as_deref().map(|node| (node, 1)).into_iter().collect();
        while let Some((node, depth)) = pending.pop() {
            deepest = deepest.max(depth);
            pending.extend(node.left.as_deref().map(|child| (child, depth + 1)));
            pending.extend(node.right.as_deref().map(|child| (child, depth + 1)));
        }
        deepest
    }

    /// Returns an iterator over the courses in ascending course-number order.
    ///
    /// The iterator is lazy; calling `iter` again restarts from the smallest
    /// key.
    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self.root.as_deref(), self.len)
    }

    /// Finds the link holding the first node on the search path for `key`, or
    /// the empty link where the search ended.
    fn find_slot<'a>(mut link: &'a mut Link, key: &str) -> &'a mut Link {
        while let Some(direction) = link.as_deref().and_then(|node| node.direction(key)) {
            let Some(node) = link else { break };
            link = node.child_mut(direction);
        }
        link
    }

    /// Unlinks the leftmost node below `link`, promoting its right child into
    /// its place.
    fn take_leftmost(mut link: &mut Link) -> Option<Box<Node>> {
        while link.as_ref().is_some_and(|node| node.left.is_some()) {
            let Some(node) = link else { break };
            link = &mut node.left;
        }
        let mut leftmost = link.take()?;
        *link = leftmost.right.take();
        Some(leftmost)
    }
}

impl Drop for CourseIndex {
    fn drop(&mut self) {
        self.clear();
    }
}

impl Extend<Course> for CourseIndex {
    fn extend<I: IntoIterator<Item = Course>>(&mut self, iter: I) {
        for course in iter {
            self.insert(course);
        }
    }
}

impl FromIterator<Course> for CourseIndex {
    fn from_iter<I: IntoIterator<Item = Course>>(iter: I) -> Self {
        let mut index = Self::new();
        index.extend(iter);
        index
    }
}

impl<'a> IntoIterator for &'a CourseIndex {
    type Item = &'a Course;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// In-order iterator over a [`CourseIndex`].
///
/// Created by [`CourseIndex::iter`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    /// Nodes whose left subtree has been fully pushed but which have not yet
    /// been yielded.
    stack: Vec<&'a Node>,
    remaining: usize,
}

impl<'a> Iter<'a> {
    fn new(root: Option<&'a Node>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node>) {
        while let Some(current) = node {
            self.stack.push(current);
            node = current.left.as_deref();
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Course;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        self.remaining -= 1;
        Some(&node.course)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}
