//! Compression-side codebook: a first-child / next-sibling trie over byte
//! strings.
//!
//! Dictionary membership of a string is a root-to-node path, so the longest
//! dictionary prefix of the upcoming input falls out of walking the trie one
//! byte at a time until a byte has no node. Nodes live in an arena and refer
//! to each other by index; every node is owned by exactly one parent link or
//! by the root chain.

use tracing::trace;

use crate::ALPHABET_SIZE;
use crate::Options;
use crate::policy::{Allocation, CodeAllocator};

/// Arena index meaning "no node".
const NIL: u32 = u32::MAX;

struct Node {
    byte: u8,
    /// Codeword of the root-to-node string, once one has been assigned.
    code: Option<u32>,
    /// First node of the next-byte level under this one.
    child: u32,
    /// Next alternative byte at the same level.
    sibling: u32,
}

pub(crate) struct TrieCodebook {
    nodes: Vec<Node>,
    /// Head of the root sibling chain holding the first byte of every string.
    roots: u32,
    /// Deepest matched node, or `NIL` when no match is in progress.
    cursor: u32,
    /// Bytes consumed by the current match, including the byte that most
    /// recently failed to extend it; the tail of the next registered entry.
    prefix: Vec<u8>,
    alloc: CodeAllocator,
}

impl TrieCodebook {
    pub fn new(opts: &Options) -> Self {
        let mut book = Self {
            nodes: Vec::with_capacity(1 << opts.min_code_width),
            roots: NIL,
            cursor: NIL,
            prefix: Vec::new(),
            alloc: CodeAllocator::new(
                opts.min_code_width,
                opts.max_code_width,
                opts.reset_on_full,
            ),
        };
        book.seed();
        book
    }

    /// Discard all entries and reseed the single-byte alphabet, then reserve
    /// the end-of-stream slot.
    fn seed(&mut self) {
        self.nodes.clear();
        self.roots = NIL;
        for byte in 0..ALPHABET_SIZE {
            if let Allocation::Granted(code) = self.alloc.allocate() {
                let id = self.nodes.len() as u32;
                self.nodes.push(Node {
                    byte: byte as u8,
                    code: Some(code),
                    child: NIL,
                    sibling: self.roots,
                });
                self.roots = id;
            }
        }
        // The end-of-stream code takes a slot but matches no input.
        self.alloc.allocate();
    }

    /// Try to extend the current match with `byte`, walking the root chain
    /// when no match is in progress or the cursor's child chain otherwise.
    /// On failure the cursor stays on the last matched node and `byte` is
    /// kept as the tail of the pending entry.
    pub fn advance(&mut self, byte: u8) -> bool {
        self.prefix.push(byte);
        let mut node = if self.cursor == NIL {
            self.roots
        } else {
            self.nodes[self.cursor as usize].child
        };
        while node != NIL {
            if self.nodes[node as usize].byte == byte {
                self.cursor = node;
                return true;
            }
            node = self.nodes[node as usize].sibling;
        }
        false
    }

    /// Codeword of the string matched so far, if a match is in progress.
    pub fn current_code(&self) -> Option<u32> {
        if self.cursor == NIL {
            None
        } else {
            self.nodes[self.cursor as usize].code
        }
    }

    /// Register the pending entry (matched prefix plus the byte that broke
    /// the match) as a child of the last matched node, then clear the match
    /// state so the next walk starts from the roots.
    pub fn register(&mut self) {
        match self.alloc.allocate() {
            Allocation::Granted(code) => {
                if self.cursor != NIL {
                    if let Some(&tail) = self.prefix.last() {
                        let id = self.nodes.len() as u32;
                        let head = self.nodes[self.cursor as usize].child;
                        self.nodes.push(Node {
                            byte: tail,
                            code: Some(code),
                            child: NIL,
                            sibling: head,
                        });
                        self.nodes[self.cursor as usize].child = id;
                        trace!(code, len = self.prefix.len(), "registered entry");
                    }
                }
            }
            Allocation::Reset => {
                self.seed();
                // The pending entry still consumes a codeword so both ends of
                // the stream keep counting in lockstep, but nothing in the
                // fresh trie can match it; only the expander materializes it.
                self.alloc.allocate();
            }
            Allocation::Full => {}
        }
        self.cursor = NIL;
        self.prefix.clear();
    }

    /// Width an already-assigned codeword is packed at.
    pub fn code_width(&self) -> u32 {
        self.alloc.current_width()
    }

    /// Width the next codeword on the wire will be read at.
    pub fn next_code_width(&self) -> u32 {
        self.alloc.next_code_width()
    }
}
