//! Node implementation for the Lanai Ternary Search Tree.
//!
//! This module provides the TrieNode structure used in the Lanai Trie implementation
//! together with the insert, lookup and collection routines that walk it.
//! The walks loop over a cursor or a heap stack instead of recursing, since
//! sibling chains grow with the number of distinct characters at a depth.
//! None of these routines lock anything; the owning trie serializes access.

use std::cmp::Ordering;

use crate::data_structures::result_queue::ResultQueue;

/// A node in the Lanai Ternary Search Tree.
///
/// Each node compares a single character. `left` and `right` route to
/// siblings holding a smaller or larger character at the same depth, while
/// `mid` continues with the next character of the same key. Terminal nodes
/// hold the key ending at them and its value.
#[derive(Debug)]
pub(crate) struct TrieNode<V> {
    /// Character compared at this node
    pub(crate) symbol: char,

    /// Siblings with a smaller symbol
    pub(crate) left: Option<Box<TrieNode<V>>>,

    /// Next character of the keys passing through this node
    pub(crate) mid: Option<Box<TrieNode<V>>>,

    /// Siblings with a larger symbol
    pub(crate) right: Option<Box<TrieNode<V>>>,

    /// Whether a stored key ends at this node
    pub(crate) is_terminal: bool,

    /// Key ending here, set only on terminal nodes. Enumeration reads it
    /// back instead of rebuilding keys from the path.
    pub(crate) key: Option<String>,

    /// Value for `key`, set only on terminal nodes
    pub(crate) value: Option<V>,
}

/// Pending work for the in-order traversal in [`TrieNode::collect`].
enum Step<'a, V> {
    /// Expand the subtree rooted at this node
    Descend(&'a TrieNode<V>),

    /// Emit this node's key, if it has one
    Visit(&'a TrieNode<V>),
}

impl<V> TrieNode<V> {
    /// Creates a new non-terminal node for `symbol` with no children.
    pub(crate) fn new(symbol: char) -> Self {
        Self {
            symbol,
            left: None,
            mid: None,
            right: None,
            is_terminal: false,
            key: None,
            value: None,
        }
    }

    /// Inserts or updates `key` below `root`, allocating missing nodes.
    ///
    /// `chars` is the character sequence of `key`. Returns `true` only when
    /// the terminal node for `key` was not terminal before, so updates never
    /// count twice. An empty `chars` inserts nothing.
    pub(crate) fn put(
        root: &mut Option<Box<Self>>,
        key: &str,
        chars: &[char],
        value: V,
    ) -> bool {
        let mut slot = root;
        let mut depth = 0;

        while let Some(&c) = chars.get(depth) {
            let node = slot.get_or_insert_with(|| Box::new(Self::new(c)));

            match c.cmp(&node.symbol) {
                Ordering::Less => slot = &mut node.left,
                Ordering::Greater => slot = &mut node.right,
                Ordering::Equal if depth + 1 < chars.len() => {
                    depth += 1;
                    slot = &mut node.mid;
                }
                Ordering::Equal => {
                    let inserted = !node.is_terminal;
                    node.is_terminal = true;
                    node.key = Some(key.to_owned());
                    node.value = Some(value);
                    return inserted;
                }
            }
        }

        false
    }

    /// Finds the node matching the last character of `chars`.
    ///
    /// The node is returned whether or not it is terminal, so this serves
    /// both exact lookups and prefix lookups.
    pub(crate) fn locate<'a>(node: Option<&'a Self>, chars: &[char]) -> Option<&'a Self> {
        let mut node = node?;
        let mut depth = 0;

        loop {
            let c = *chars.get(depth)?;
            let next = match c.cmp(&node.symbol) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal if depth + 1 < chars.len() => {
                    depth += 1;
                    node.mid.as_deref()
                }
                Ordering::Equal => return Some(node),
            };
            node = next?;
        }
    }

    /// Returns the length in characters of the longest stored key that is
    /// a prefix of `chars`, or 0 when there is none.
    pub(crate) fn longest_prefix_len(node: Option<&Self>, chars: &[char]) -> usize {
        let mut node = node;
        let mut depth = 0;
        let mut length = 0;

        while let Some(current) = node {
            let Some(&c) = chars.get(depth) else {
                break;
            };

            match c.cmp(&current.symbol) {
                Ordering::Less => node = current.left.as_deref(),
                Ordering::Greater => node = current.right.as_deref(),
                Ordering::Equal => {
                    depth += 1;
                    if current.is_terminal {
                        length = depth;
                    }
                    node = current.mid.as_deref();
                }
            }
        }

        length
    }

    /// Enqueues every key stored in the subtree rooted at `node`, in
    /// ascending order.
    ///
    /// The traversal order is left, this node, mid, right. Pending work is
    /// kept on the heap, so sibling chains of any length are safe.
    pub(crate) fn collect<Q>(node: Option<&Self>, queue: &mut Q)
    where
        Q: ResultQueue<String>,
    {
        let mut stack: Vec<Step<'_, V>> = node.map(Step::Descend).into_iter().collect();

        while let Some(step) = stack.pop() {
            match step {
                Step::Descend(node) => {
                    // Pushed in reverse of the visiting order
                    if let Some(right) = node.right.as_deref() {
                        stack.push(Step::Descend(right));
                    }
                    if let Some(mid) = node.mid.as_deref() {
                        stack.push(Step::Descend(mid));
                    }
                    stack.push(Step::Visit(node));
                    if let Some(left) = node.left.as_deref() {
                        stack.push(Step::Descend(left));
                    }
                }
                Step::Visit(node) => {
                    if let Some(key) = node.key.as_ref().filter(|_| node.is_terminal) {
                        queue.enqueue(key.clone());
                    }
                }
            }
        }
    }

    /// Counts the terminal nodes in this subtree.
    pub(crate) fn count_terminals(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];

        while let Some(node) = pending.pop() {
            count += usize::from(node.is_terminal);
            pending.extend(
                [&node.left, &node.mid, &node.right]
                    .into_iter()
                    .flatten()
                    .map(|child| child.as_ref()),
            );
        }

        count
    }
}

impl<V> Drop for TrieNode<V> {
    /// Detaches descendants onto a heap stack so freeing a long chain of
    /// nodes never recurses.
    fn drop(&mut self) {
        let mut pending: Vec<Box<TrieNode<V>>> =
            [self.left.take(), self.mid.take(), self.right.take()]
                .into_iter()
                .flatten()
                .collect();

        while let Some(mut node) = pending.pop() {
            pending.extend(
                [node.left.take(), node.mid.take(), node.right.take()]
                    .into_iter()
                    .flatten(),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_structures::result_queue::ArrayQueue;

    fn build(keys: &[&str]) -> Option<Box<TrieNode<usize>>> {
        let mut root = None;
        for (i, key) in keys.iter().enumerate() {
            let chars: Vec<char> = key.chars().collect();
            assert!(TrieNode::put(&mut root, key, &chars, i));
        }
        root
    }

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_node_new() {
        let node: TrieNode<u8> = TrieNode::new('x');
        assert_eq!(node.symbol, 'x');
        assert!(!node.is_terminal);
        assert!(node.left.is_none() && node.mid.is_none() && node.right.is_none());
        assert!(node.key.is_none() && node.value.is_none());
    }

    #[test]
    fn test_put_shapes_branches() {
        let root = build(&["m", "a", "z", "mo"]);
        let root = root.as_deref().unwrap();

        assert_eq!(root.symbol, 'm');
        assert_eq!(root.left.as_ref().unwrap().symbol, 'a');
        assert_eq!(root.right.as_ref().unwrap().symbol, 'z');
        assert_eq!(root.mid.as_ref().unwrap().symbol, 'o');
        assert_eq!(root.count_terminals(), 4);
    }

    #[test]
    fn test_put_update_does_not_count() {
        let mut root = build(&["cape"]);
        assert!(!TrieNode::put(&mut root, "cape", &chars("cape"), 99));

        let node = TrieNode::locate(root.as_deref(), &chars("cape")).unwrap();
        assert_eq!(node.value, Some(99));
        assert_eq!(root.unwrap().count_terminals(), 1);
    }

    #[test]
    fn test_locate_prefix_node_is_not_terminal() {
        let root = build(&["captain"]);
        let node = TrieNode::locate(root.as_deref(), &chars("cap")).unwrap();
        assert!(!node.is_terminal);
        assert!(TrieNode::locate(root.as_deref(), &chars("cat")).is_none());
        assert!(TrieNode::locate(root.as_deref(), &[]).is_none());
    }

    #[test]
    fn test_longest_prefix_len() {
        let root = build(&["she", "shells", "s"]);
        assert_eq!(TrieNode::longest_prefix_len(root.as_deref(), &chars("shell")), 3);
        assert_eq!(TrieNode::longest_prefix_len(root.as_deref(), &chars("shells")), 6);
        assert_eq!(TrieNode::longest_prefix_len(root.as_deref(), &chars("sx")), 1);
        assert_eq!(TrieNode::longest_prefix_len(root.as_deref(), &chars("x")), 0);
    }

    #[test]
    fn test_collect_in_order() {
        let root = build(&["she", "by", "sea", "shells", "the", "a"]);
        let mut queue = ArrayQueue::new();
        TrieNode::collect(root.as_deref(), &mut queue);

        assert_eq!(
            queue.drain_all(),
            vec!["a", "by", "sea", "she", "shells", "the"]
        );
    }

    #[test]
    fn test_long_sibling_chain_on_small_stack() {
        const KEY_COUNT: u32 = 20_000;

        // Ascending single-character keys form one right-leaning chain
        let handle = std::thread::Builder::new()
            .stack_size(256 * 1024)
            .spawn(|| {
                let mut root = None;
                let keys: Vec<String> = (0x100..0x100 + KEY_COUNT)
                    .filter_map(char::from_u32)
                    .map(String::from)
                    .collect();
                for (i, key) in keys.iter().enumerate() {
                    let key_chars = chars(key);
                    assert!(TrieNode::put(&mut root, key, &key_chars, i));
                }

                let last = keys.last().unwrap();
                assert!(TrieNode::locate(root.as_deref(), &chars(last)).is_some());
                assert_eq!(root.as_ref().unwrap().count_terminals(), keys.len());

                let mut queue = ArrayQueue::new();
                TrieNode::collect(root.as_deref(), &mut queue);
                assert_eq!(queue.drain_all(), keys);

                drop(root);
            })
            .unwrap();

        handle.join().expect("Chain walk overflowed the stack");
    }
}
