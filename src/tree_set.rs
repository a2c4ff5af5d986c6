//! An ordered set stored in an unbalanced BST. Elements are kept in a tree of
//! uniquely owned nodes and no rebalancing ever happens, so the shape of the
//! tree is entirely determined by the order of insertions and removals.
//!
//! # Examples
//!
//! ```
//! use treeset::TreeSet;
//!
//! let mut set = TreeSet::new();
//!
//! // Nothing in here yet.
//! assert!(!set.contains(&1));
//!
//! assert!(set.add(1));
//! assert!(set.contains(&1));
//!
//! // Adding the same element again is a no-op.
//! assert!(!set.add(1));
//! assert_eq!(set.len(), 1);
//!
//! // Removing it for good measure.
//! assert!(set.remove(&1));
//! assert!(!set.contains(&1));
//! assert!(set.is_empty());
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;
use std::mem;

use tracing::trace;

/// An owning link to a subtree. `None` marks the empty slot below a leaf.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A `Node` owns one element and both of its subtrees. Nodes never know their parent.
pub(crate) struct Node<T> {
    pub(crate) element: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    fn new_boxed(element: T) -> Box<Self> {
        Box::new(Self {
            element,
            left: None,
            right: None,
        })
    }
}

/// The order in which a traversal visits a node relative to its children.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Order {
    /// Left subtree, node, right subtree. Yields ascending elements.
    InOrder,
    /// Node, left subtree, right subtree.
    PreOrder,
    /// Left subtree, right subtree, node.
    PostOrder,
}

/// Which child slot of its parent a node occupies.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Side {
    Root,
    Left,
    Right,
}

/// A node reached by a traversal, along with where it sits in the tree.
pub(crate) struct Visit<'a, T> {
    pub(crate) node: &'a Node<T>,
    pub(crate) depth: usize,
    pub(crate) side: Side,
}

/// Manual implementation of `Clone` so `T` doesn't need to be `Clone` to copy a reference.
impl<T> Clone for Visit<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Visit<'_, T> {}

impl<'a, T> Visit<'a, T> {
    fn child(self, node: &'a Node<T>, side: Side) -> Self {
        Self {
            node,
            depth: self.depth + 1,
            side,
        }
    }

    pub(crate) fn element(self) -> &'a T {
        &self.node.element
    }
}

/// Pending work for the explicit traversal stack.
enum Step<'a, T> {
    /// Schedule the node and its children according to the traversal order.
    Expand(Visit<'a, T>),
    /// Yield the node.
    Emit(Visit<'a, T>),
}

/// An ordered set of unique elements backed by an unbalanced Binary Search Tree.
///
/// All operations walk from the root guided by comparisons, so they take
/// `O(height)` time. Inserting in sorted order degrades the tree to a chain.
pub struct TreeSet<T> {
    root: Link<T>,
    size: usize,
}

impl<T> Default for TreeSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for TreeSet<T> {
    // Dismantle with a stack so a degenerate chain can't overflow the call stack.
    fn drop(&mut self) {
        let mut pending: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl<T> Clone for TreeSet<T>
where
    T: Clone,
{
    /// Clones the set node by node so the copy has exactly the same shape.
    fn clone(&self) -> Self {
        // Post-order guarantees both subtrees of a node are built, right on top of left,
        // before the node itself is reached.
        let mut built: Vec<Box<Node<T>>> = Vec::new();
        for visit in self.walk(Order::PostOrder) {
            let right = visit.node.right.as_ref().and_then(|_| built.pop());
            let left = visit.node.left.as_ref().and_then(|_| built.pop());
            built.push(Box::new(Node {
                element: visit.node.element.clone(),
                left,
                right,
            }));
        }

        Self {
            root: built.pop(),
            size: self.size,
        }
    }
}

impl<T> fmt::Debug for TreeSet<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.to_vec_in_order()).finish()
    }
}

/// Writes every element in ascending order with no separator.
impl<T> fmt::Display for TreeSet<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for element in self.to_vec_in_order() {
            write!(f, "{}", element)?;
        }
        Ok(())
    }
}

impl<T> FromIterator<T> for TreeSet<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T> Extend<T> for TreeSet<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.add(element);
        }
    }
}

impl<T> TreeSet<T> {
    /// Generates a new, empty `TreeSet`.
    pub fn new() -> Self {
        Self {
            root: None,
            size: 0,
        }
    }

    /// Returns the number of elements in the set.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the set holds no elements.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        // Swapping in a fresh set lets the old one go through the stack-based `Drop`.
        drop(mem::take(self));
    }

    pub(crate) fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Inserts `element` as a new leaf unless an equal element is already present.
    /// Returns whether the set changed.
    ///
    /// # Examples
    ///
    /// ```
    /// use treeset::TreeSet;
    ///
    /// let mut set = TreeSet::new();
    ///
    /// assert!(set.add(5));
    /// assert!(set.add(3));
    /// assert!(!set.add(5));
    /// assert_eq!(set.len(), 2);
    /// ```
    pub fn add(&mut self, element: T) -> bool
    where
        T: Ord,
    {
        let slot = Self::locate(&mut self.root, &element);
        if slot.is_some() {
            trace!(size = self.size, "element already present");
            return false;
        }

        *slot = Some(Node::new_boxed(element));
        self.size += 1;
        trace!(size = self.size, "inserted new leaf");
        true
    }

    /// Returns `true` if an element equal to `element` is in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use treeset::TreeSet;
    ///
    /// let set: TreeSet<_> = vec![2, 1, 3].into_iter().collect();
    ///
    /// assert!(set.contains(&1));
    /// assert!(!set.contains(&42));
    /// ```
    pub fn contains(&self, element: &T) -> bool
    where
        T: Ord,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match element.cmp(&node.element) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Equal => return true,
                Ordering::Greater => node.right.as_deref(),
            };
        }

        false
    }

    /// Removes the element equal to `element`. Returns whether the set changed.
    ///
    /// # Examples
    ///
    /// ```
    /// use treeset::TreeSet;
    ///
    /// let mut set: TreeSet<_> = vec![5, 3, 8].into_iter().collect();
    ///
    /// assert!(set.remove(&5));
    /// assert!(!set.remove(&5));
    /// assert_eq!(set.to_vec_in_order(), [&3, &8]);
    /// ```
    pub fn remove(&mut self, element: &T) -> bool
    where
        T: Ord,
    {
        self.take(element).is_some()
    }

    /// Removes the element equal to `element` and hands it back.
    ///
    /// A node with two children is never unlinked itself: its element is swapped
    /// for the largest element of its left subtree (its in-order predecessor) and
    /// the predecessor's node, which has no right child, is unlinked instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use treeset::TreeSet;
    ///
    /// let mut set: TreeSet<_> = vec![5, 3, 8].into_iter().collect();
    ///
    /// assert_eq!(set.take(&5), Some(5));
    /// assert_eq!(set.take(&5), None);
    ///
    /// // The predecessor took the root's place.
    /// assert_eq!(set.to_vec_pre_order(), [&3, &8]);
    /// ```
    pub fn take(&mut self, element: &T) -> Option<T>
    where
        T: Ord,
    {
        let slot = Self::locate(&mut self.root, element);
        let node = slot.as_mut()?;

        let removed = if node.left.is_some() && node.right.is_some() {
            let predecessor = Self::unlink_max(&mut node.left)?;
            trace!("substituted in-order predecessor");
            mem::replace(&mut node.element, predecessor)
        } else {
            trace!(leaf = node.left.is_none() && node.right.is_none(), "unlinked node");
            Self::unlink(slot)?
        };

        self.size -= 1;
        trace!(size = self.size, "removed element");
        Some(removed)
    }

    /// Returns the smallest element, if any.
    pub fn first(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.element)
    }

    /// Returns the largest element, if any.
    pub fn last(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.element)
    }

    /// Gets the number of levels in the tree. An empty tree has a height of 0 and
    /// a lone root has a height of 1.
    pub fn height(&self) -> usize {
        self.walk(Order::PreOrder)
            .into_iter()
            .map(|visit| visit.depth + 1)
            .max()
            .unwrap_or(0)
    }

    /// Collects references to every element in the given traversal order.
    pub fn to_vec(&self, order: Order) -> Vec<&T> {
        self.walk(order).into_iter().map(Visit::element).collect()
    }

    /// Every element in ascending order.
    pub fn to_vec_in_order(&self) -> Vec<&T> {
        self.to_vec(Order::InOrder)
    }

    /// Every element with each parent ahead of its children. Re-adding the
    /// elements in this order rebuilds the same shape.
    pub fn to_vec_pre_order(&self) -> Vec<&T> {
        self.to_vec(Order::PreOrder)
    }

    /// Every element with each parent after its children.
    pub fn to_vec_post_order(&self) -> Vec<&T> {
        self.to_vec(Order::PostOrder)
    }

    /// Returns the elements `e` with `min <= e < max` in ascending order.
    ///
    /// Subtrees that can't hold a qualifying element are skipped: nothing left of
    /// a node below `min` and nothing right of a node at or above `max` is visited.
    ///
    /// # Examples
    ///
    /// ```
    /// use treeset::TreeSet;
    ///
    /// let set: TreeSet<_> = vec![5, 3, 8, 1, 4, 7, 9].into_iter().collect();
    ///
    /// assert_eq!(set.subset(&3, &8), [&3, &4, &5, &7]);
    /// assert!(set.subset(&8, &3).is_empty());
    /// ```
    pub fn subset(&self, min: &T, max: &T) -> Vec<&T>
    where
        T: Ord,
    {
        let mut elements = Vec::new();
        let mut pending = Vec::new();
        let mut current = self.root.as_deref();

        loop {
            while let Some(node) = current {
                pending.push(node);
                current = if node.element >= *min {
                    node.left.as_deref()
                } else {
                    None
                };
            }

            let node = match pending.pop() {
                Some(node) => node,
                None => break,
            };
            if node.element >= *min && node.element < *max {
                elements.push(&node.element);
            }
            current = if node.element < *max {
                node.right.as_deref()
            } else {
                None
            };
        }

        elements
    }

    /// Visits every node in the given order, tracking depth and side.
    pub(crate) fn walk(&self, order: Order) -> Vec<Visit<'_, T>> {
        let mut visits = Vec::with_capacity(self.size);
        let mut steps: Vec<Step<'_, T>> = self
            .root
            .as_deref()
            .map(|node| {
                Step::Expand(Visit {
                    node,
                    depth: 0,
                    side: Side::Root,
                })
            })
            .into_iter()
            .collect();

        while let Some(step) = steps.pop() {
            let visit = match step {
                Step::Emit(visit) => {
                    visits.push(visit);
                    continue;
                }
                Step::Expand(visit) => visit,
            };
            let left = visit
                .node
                .left
                .as_deref()
                .map(|node| Step::Expand(visit.child(node, Side::Left)));
            let right = visit
                .node
                .right
                .as_deref()
                .map(|node| Step::Expand(visit.child(node, Side::Right)));

            // Pushed in reverse since the stack pops the last step first.
            match order {
                Order::InOrder => {
                    steps.extend(right);
                    steps.push(Step::Emit(visit));
                    steps.extend(left);
                }
                Order::PreOrder => {
                    steps.extend(right);
                    steps.extend(left);
                    steps.push(Step::Emit(visit));
                }
                Order::PostOrder => {
                    steps.push(Step::Emit(visit));
                    steps.extend(right);
                    steps.extend(left);
                }
            }
        }

        visits
    }

    /// Follows comparisons from `slot` down to the slot holding `element`, or to the
    /// empty slot where it would be inserted.
    fn locate<'a>(mut slot: &'a mut Link<T>, element: &T) -> &'a mut Link<T>
    where
        T: Ord,
    {
        loop {
            let go_left = match slot.as_deref().map(|node| element.cmp(&node.element)) {
                Some(Ordering::Less) => true,
                Some(Ordering::Greater) => false,
                Some(Ordering::Equal) | None => return slot,
            };
            if let Some(node) = slot {
                slot = if go_left {
                    &mut node.left
                } else {
                    &mut node.right
                };
            }
        }
    }

    /// Unlinks the largest node of the subtree in `slot` and returns its element.
    fn unlink_max(mut slot: &mut Link<T>) -> Option<T> {
        while slot.as_deref().map_or(false, |node| node.right.is_some()) {
            if let Some(node) = slot {
                slot = &mut node.right;
            }
        }

        Self::unlink(slot)
    }

    /// Unlinks the node in `slot`, which must have at most one child, by moving that
    /// child (or nothing) into the slot.
    fn unlink(slot: &mut Link<T>) -> Option<T> {
        let mut node = slot.take()?;
        *slot = node.left.take().or_else(|| node.right.take());
        Some(node.element)
    }
}
