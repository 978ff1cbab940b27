//! Deterministic Huffman tree construction and traversal.
//!
//! The tree is rebuilt independently by the encoder and the decoder from the
//! same frequency table, so construction must be fully deterministic: nodes
//! are merged lowest weight first, and among equal weights the node carrying
//! the lowest symbol value goes first. Internal nodes inherit the symbol of
//! their first-merged child purely so that later ties between internal nodes
//! stay well-defined — that field is never decoded as payload.
//!
//! Nodes live in a single arena (`Vec`) and link to each other by index.
//! Child links are the owning edges of the tree; the parent link is a plain
//! back-reference used only for the leaf-to-root walk in
//! [`encode`](HuffmanTree::encode), so there is no ownership cycle and the
//! whole structure drops with the arena.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::io::{Read, Write};

use crate::bitio::{BitReader, BitWriter};
use crate::error::Result;

/// Number of distinct byte values the tree can code for.
pub const ALPHABET_SIZE: usize = 256;

#[derive(Debug, Clone, Copy)]
struct Node {
    weight: u64,
    /// Meaningful for leaves; tie-break copy of the first-merged child's
    /// symbol for internal nodes.
    symbol: u8,
    parent: Option<u32>,
    /// `(child0, child1)` in merge order; `None` for leaves. A node has
    /// either zero or exactly two children.
    children: Option<(u32, u32)>,
}

/// Pending node in the build queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Pending {
    weight: u64,
    symbol: u8,
    node: u32,
}

impl Ord for Pending {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-priority queue: lowest weight first, then lowest symbol.
        // Symbols of queued nodes are distinct, so the order is total.
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.symbol.cmp(&self.symbol))
    }
}

impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A Huffman prefix-code tree over the 256-value byte alphabet.
pub struct HuffmanTree {
    nodes: Vec<Node>,
    root: Option<u32>,
    /// Leaf index per byte value; `None` for bytes with zero frequency.
    leaves: [Option<u32>; ALPHABET_SIZE],
}

impl HuffmanTree {
    /// Build the tree from a 256-entry frequency table.
    ///
    /// An all-zero table yields an empty tree (decoding returns `None`
    /// immediately). A table with a single non-zero entry yields a tree
    /// whose root is that lone leaf. Rebuilding for a new table is just
    /// building a new tree.
    pub fn build(freqs: &[u32; ALPHABET_SIZE]) -> Self {
        let mut nodes = Vec::new();
        let mut leaves = [None; ALPHABET_SIZE];
        let mut queue = BinaryHeap::new();

        for (symbol, &freq) in freqs.iter().enumerate() {
            if freq > 0 {
                let id = nodes.len() as u32;
                nodes.push(Node {
                    weight: u64::from(freq),
                    symbol: symbol as u8,
                    parent: None,
                    children: None,
                });
                leaves[symbol] = Some(id);
                queue.push(Pending {
                    weight: u64::from(freq),
                    symbol: symbol as u8,
                    node: id,
                });
            }
        }

        if queue.is_empty() {
            return Self {
                nodes,
                root: None,
                leaves,
            };
        }

        while queue.len() > 1 {
            let first = queue.pop().unwrap();
            let second = queue.pop().unwrap();

            let id = nodes.len() as u32;
            let weight = first.weight + second.weight;
            nodes.push(Node {
                weight,
                symbol: first.symbol,
                parent: None,
                children: Some((first.node, second.node)),
            });
            nodes[first.node as usize].parent = Some(id);
            nodes[second.node as usize].parent = Some(id);

            queue.push(Pending {
                weight,
                symbol: first.symbol,
                node: id,
            });
        }

        let root = queue.pop().map(|p| p.node);
        Self { nodes, root, leaves }
    }

    /// True when the tree was built from an all-zero frequency table.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Write `symbol`'s code to `out`, one bit at a time.
    ///
    /// The bit path is recovered by walking leaf-to-root along parent links
    /// (0 for a child0 edge, 1 for a child1 edge) and reversing. A symbol
    /// absent from the frequency table is a silent no-op — a correct caller
    /// only encodes bytes drawn from the data the table was counted over.
    ///
    /// For a single-symbol tree the lone leaf is the root and its path is
    /// empty; one placeholder 0 bit is written instead so the code is not
    /// zero-length. Decoding never consumes it (see [`decode`](Self::decode)).
    pub fn encode<W: Write>(&self, symbol: u8, out: &mut BitWriter<W>) -> Result<()> {
        let Some(leaf) = self.leaves[symbol as usize] else {
            return Ok(());
        };
        if self.nodes[leaf as usize].parent.is_none() {
            return out.write_bit(0);
        }

        let mut path = Vec::new();
        let mut node = leaf;
        while let Some(parent) = self.nodes[node as usize].parent {
            let bit = match self.nodes[parent as usize].children {
                Some((child0, _)) if child0 == node => 0,
                _ => 1,
            };
            path.push(bit);
            node = parent;
        }
        for &bit in path.iter().rev() {
            out.write_bit(bit)?;
        }
        Ok(())
    }

    /// Decode one symbol by walking from the root, reading one bit per edge.
    ///
    /// Returns `Ok(None)` if the tree is empty or the bit stream ends
    /// mid-walk; both conditions are idempotent, so repeated calls keep
    /// returning `Ok(None)`. For a single-symbol tree the root is already a
    /// leaf and its symbol is returned without consuming any bits.
    pub fn decode<R: Read>(&self, input: &mut BitReader<R>) -> Result<Option<u8>> {
        let Some(mut node) = self.root else {
            return Ok(None);
        };
        while let Some((child0, child1)) = self.nodes[node as usize].children {
            let Some(bit) = input.read_bit()? else {
                return Ok(None);
            };
            node = if bit == 1 { child1 } else { child0 };
        }
        Ok(Some(self.nodes[node as usize].symbol))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn freqs_of(data: &[u8]) -> [u32; ALPHABET_SIZE] {
        crate::codec::count_frequencies(data)
    }

    fn code_of(tree: &HuffmanTree, symbol: u8) -> Vec<u8> {
        let mut out = Vec::new();
        let mut writer = BitWriter::new(&mut out);
        tree.encode(symbol, &mut writer).unwrap();
        writer.flush().unwrap();
        let mut reader = BitReader::new(out.as_slice());
        let depth = {
            let mut node = tree.leaves[symbol as usize].unwrap();
            let mut d = 0;
            while let Some(parent) = tree.nodes[node as usize].parent {
                node = parent;
                d += 1;
            }
            d.max(1) // single-symbol placeholder still occupies one bit
        };
        let mut bits = Vec::new();
        for _ in 0..depth {
            bits.push(reader.read_bit().unwrap().unwrap());
        }
        bits
    }

    #[test]
    fn test_empty_table_builds_empty_tree() {
        let tree = HuffmanTree::build(&[0; ALPHABET_SIZE]);
        assert!(tree.is_empty());
        let mut reader = BitReader::new(&[][..]);
        assert_eq!(tree.decode(&mut reader).unwrap(), None);
        assert_eq!(tree.decode(&mut reader).unwrap(), None);
    }

    #[test]
    fn test_single_symbol_tree_is_lone_leaf() {
        let tree = HuffmanTree::build(&freqs_of(b"AAAAA"));
        let leaf = tree.leaves[b'A' as usize].unwrap();
        assert_eq!(tree.root, Some(leaf));
        assert!(tree.nodes[leaf as usize].parent.is_none());
        assert!(tree.nodes[leaf as usize].children.is_none());

        // Decode consumes zero bits, even from an empty stream.
        let mut reader = BitReader::new(&[][..]);
        for _ in 0..5 {
            assert_eq!(tree.decode(&mut reader).unwrap(), Some(b'A'));
        }
    }

    #[test]
    fn test_single_symbol_encode_writes_placeholder_bit() {
        let tree = HuffmanTree::build(&freqs_of(b"AAAAA"));
        let mut out = Vec::new();
        let mut writer = BitWriter::new(&mut out);
        for _ in 0..5 {
            tree.encode(b'A', &mut writer).unwrap();
        }
        writer.flush().unwrap();
        assert_eq!(out, vec![0x00]); // five 0 bits, zero-padded
    }

    #[test]
    fn test_two_equal_symbols_height_one() {
        let tree = HuffmanTree::build(&freqs_of(b"ABABABABAB"));
        // Equal weights: lower symbol ('A') pops first and becomes child0.
        assert_eq!(code_of(&tree, b'A'), vec![0]);
        assert_eq!(code_of(&tree, b'B'), vec![1]);
    }

    #[test]
    fn test_internal_node_carries_first_popped_symbol() {
        // a:1 b:1 c:2 — first merge takes a then b; the internal node keeps
        // a's symbol for later tie comparisons.
        let mut freqs = [0u32; ALPHABET_SIZE];
        freqs[b'a' as usize] = 1;
        freqs[b'b' as usize] = 1;
        freqs[b'c' as usize] = 2;
        let tree = HuffmanTree::build(&freqs);
        let root = tree.root.unwrap();
        let (c0, c1) = tree.nodes[root as usize].children.unwrap();
        // Tie at weight 2 between leaf 'c' (0x63) and internal node carrying
        // 'a' (0x61): the internal node's lower symbol pops first.
        assert_eq!(tree.nodes[c0 as usize].symbol, b'a');
        assert!(tree.nodes[c0 as usize].children.is_some());
        assert_eq!(tree.nodes[c1 as usize].symbol, b'c');
        assert!(tree.nodes[c1 as usize].children.is_none());
    }

    #[test]
    fn test_rarer_symbols_get_longer_codes() {
        let tree = HuffmanTree::build(&freqs_of(b"aaaaaaaabbbbc"));
        assert!(code_of(&tree, b'a').len() < code_of(&tree, b'c').len());
        assert!(code_of(&tree, b'b').len() <= code_of(&tree, b'c').len());
    }

    #[test]
    fn test_build_is_deterministic() {
        // All weights equal: shape is fixed purely by the symbol tie-break.
        let mut freqs = [0u32; ALPHABET_SIZE];
        for b in 0..8 {
            freqs[b] = 3;
        }
        let a = HuffmanTree::build(&freqs);
        let b = HuffmanTree::build(&freqs);
        for sym in 0u8..8 {
            assert_eq!(code_of(&a, sym), code_of(&b, sym));
        }
    }

    #[test]
    fn test_absent_symbol_encode_is_noop() {
        let tree = HuffmanTree::build(&freqs_of(b"xyz"));
        let mut out = Vec::new();
        let mut writer = BitWriter::new(&mut out);
        tree.encode(b'Q', &mut writer).unwrap();
        writer.flush().unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_decode_eof_mid_walk_returns_none() {
        let tree = HuffmanTree::build(&freqs_of(b"ab"));
        let mut reader = BitReader::new(&[][..]);
        assert_eq!(tree.decode(&mut reader).unwrap(), None);
        assert_eq!(tree.decode(&mut reader).unwrap(), None);
    }

    #[test]
    fn test_encode_decode_roundtrip_per_symbol() {
        let data = b"abracadabra";
        let tree = HuffmanTree::build(&freqs_of(data));

        let mut out = Vec::new();
        let mut writer = BitWriter::new(&mut out);
        for &byte in data {
            tree.encode(byte, &mut writer).unwrap();
        }
        writer.flush().unwrap();

        let mut reader = BitReader::new(out.as_slice());
        for &expected in data {
            assert_eq!(tree.decode(&mut reader).unwrap(), Some(expected));
        }
    }

    #[test]
    fn test_full_binary_shape() {
        // Every node has zero or exactly two children, and the leaf table
        // points only at childless nodes.
        let tree = HuffmanTree::build(&freqs_of(b"the quick brown fox jumps over the lazy dog"));
        for (id, node) in tree.nodes.iter().enumerate() {
            if let Some((c0, c1)) = node.children {
                assert_ne!(c0, c1);
                assert_eq!(tree.nodes[c0 as usize].parent, Some(id as u32));
                assert_eq!(tree.nodes[c1 as usize].parent, Some(id as u32));
            }
        }
        for (symbol, leaf) in tree.leaves.iter().enumerate() {
            if let Some(id) = leaf {
                assert!(tree.nodes[*id as usize].children.is_none());
                assert_eq!(tree.nodes[*id as usize].symbol, symbol as u8);
            }
        }
    }
}
