//! Compiles POS-sequence grammar specs into a rooted trie.
//!
//! A spec such as `"D0p*N1s0j0"` is parsed into `(Pos, Quantifier)` pairs and
//! folded into the trie one pair at a time. The trie is arena-allocated
//! (`Vec<TrieNode>` addressed by [`NodeId`]) so that the `*`/`+` self-loops
//! required by the grammar don't need owning cyclic references: a self-loop
//! is just a [`Edge::SelfLoop`] entry that the parser resolves back to the
//! node it came from.

use std::collections::BTreeMap;

use log::debug;

use crate::error::HanmalErrorKind;
use crate::pos::Pos;
use crate::HanmalResult;

/// Index into [`Trie::nodes`]. Never constructed by callers; handed back by
/// the builder and consumed by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

/// An outgoing transition from a trie node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    /// Advance to a distinct node.
    To(NodeId),
    /// Stay at the node that owns this edge (encodes `*`/`+`).
    SelfLoop,
}

#[derive(Debug, Clone)]
pub struct TrieNode {
    pub pos: Pos,
    pub next: Vec<Edge>,
    /// Set when consuming this node completes a valid parse; names which
    /// terminal category the completed parse belongs to.
    pub ending: Option<Pos>,
}

/// A compiled grammar: a set of alternative first nodes (`roots`) plus the
/// arena backing every node reachable from them.
#[derive(Debug, Clone, Default)]
pub struct Trie {
    nodes: Vec<TrieNode>,
    roots: Vec<NodeId>,
}

impl Trie {
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn node(&self, id: NodeId) -> &TrieNode {
        &self.nodes[id.0]
    }

    /// Resolves `t.next`, replacing every [`Edge::SelfLoop`] with `from`
    /// itself, yielding the concrete set of nodes a candidate advances to
    /// after consuming `from`.
    pub fn advance(&self, from: NodeId) -> Vec<NodeId> {
        self.node(from)
            .next
            .iter()
            .map(|edge| match edge {
                Edge::To(id) => *id,
                Edge::SelfLoop => from,
            })
            .collect()
    }

    fn push_node(&mut self, pos: Pos) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(TrieNode {
            pos,
            next: Vec::new(),
            ending: None,
        });
        id
    }

    fn get_or_create_root(&mut self, pos: Pos) -> NodeId {
        if let Some(&id) = self.roots.iter().find(|&&id| self.nodes[id.0].pos == pos) {
            return id;
        }
        let id = self.push_node(pos);
        self.roots.push(id);
        id
    }

    fn get_or_create_child(&mut self, parent: NodeId, pos: Pos) -> NodeId {
        for edge in &self.nodes[parent.0].next {
            if let Edge::To(id) = edge {
                if self.nodes[id.0].pos == pos {
                    return *id;
                }
            }
        }
        let id = self.push_node(pos);
        self.nodes[parent.0].next.push(Edge::To(id));
        id
    }

    fn add_self_loop(&mut self, node: NodeId) {
        if !self.nodes[node.0].next.contains(&Edge::SelfLoop) {
            self.nodes[node.0].next.push(Edge::SelfLoop);
        }
    }
}

/// One spec-string item: a POS letter paired with its cardinality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantifier {
    /// `0`: optional, matches at most once.
    Zero,
    /// `1`: required, matches exactly once.
    One,
    /// `*`: optional, matches any number of times.
    ZeroOrMore,
    /// `+`: required, matches one or more times.
    OneOrMore,
}

impl Quantifier {
    fn from_char(c: char) -> Option<Quantifier> {
        match c {
            '0' => Some(Quantifier::Zero),
            '1' => Some(Quantifier::One),
            '*' => Some(Quantifier::ZeroOrMore),
            '+' => Some(Quantifier::OneOrMore),
            _ => None,
        }
    }

    fn is_optional(self) -> bool {
        matches!(self, Quantifier::Zero | Quantifier::ZeroOrMore)
    }

    fn is_repeatable(self) -> bool {
        matches!(self, Quantifier::ZeroOrMore | Quantifier::OneOrMore)
    }
}

/// Parses a spec string into `(Pos, Quantifier)` pairs, left to right.
fn parse_spec(spec: &str) -> HanmalResult<Vec<(Pos, Quantifier)>> {
    let chars: Vec<char> = spec.chars().collect();
    let mut pairs = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        let code = chars[i];
        let pos = Pos::from_grammar_code(code).ok_or_else(|| {
            HanmalErrorKind::Grammar.with_error(anyhow::anyhow!(
                "unrecognized POS letter '{}' in spec \"{}\"",
                code,
                spec
            ))
        })?;
        i += 1;
        let quant_char = chars.get(i).copied().ok_or_else(|| {
            HanmalErrorKind::Grammar.with_error(anyhow::anyhow!(
                "POS letter '{}' with no following quantifier in spec \"{}\"",
                code,
                spec
            ))
        })?;
        let quantifier = Quantifier::from_char(quant_char).ok_or_else(|| {
            HanmalErrorKind::Grammar.with_error(anyhow::anyhow!(
                "unrecognized quantifier '{}' in spec \"{}\"",
                quant_char,
                spec
            ))
        })?;
        i += 1;
        pairs.push((pos, quantifier));
    }
    if pairs.is_empty() {
        return Err(HanmalErrorKind::Grammar
            .with_error(anyhow::anyhow!("empty grammar spec is not allowed")));
    }
    Ok(pairs)
}

fn compile_one(trie: &mut Trie, spec: &str, terminal: Pos) -> HanmalResult<()> {
    let pairs = parse_spec(spec)?;

    // Nodes to attach the next pair's node to as a child; empty means "the
    // next pair, if reachable at all, is reachable only as a fresh root".
    let mut parents: Vec<NodeId> = Vec::new();
    // Whether the position we're about to compile can still be the very
    // first node consumed (i.e., every pair so far has been optional).
    let mut still_root = true;

    for (pos, quantifier) in pairs {
        let mut created = Vec::new();
        if still_root {
            created.push(trie.get_or_create_root(pos));
        }
        for &parent in &parents {
            created.push(trie.get_or_create_child(parent, pos));
        }
        if created.is_empty() {
            // Unreachable for well-formed grammars: a non-root, non-child
            // position means nothing points here at all.
            return Err(HanmalErrorKind::Grammar.with_error(anyhow::anyhow!(
                "spec \"{}\" has an unreachable position at POS '{}'",
                spec,
                pos
            )));
        }

        if quantifier.is_repeatable() {
            for &node in &created {
                trie.add_self_loop(node);
            }
        }

        if quantifier.is_optional() {
            // Skipping this pair must still let the next pair attach where
            // this pair's parents were, and (if we were still at the start)
            // still count as root-reachable.
            created.extend(parents.iter().copied());
        } else {
            still_root = false;
        }

        parents = created;
    }

    for node in parents {
        trie.nodes[node.0].ending = Some(terminal);
    }
    debug!("compiled grammar spec \"{}\" -> {}", spec, terminal);
    Ok(())
}

/// Compiles a `spec -> terminal POS` grammar into a [`Trie`]. Specs are
/// compiled in the map's key order (a `BTreeMap` so builds are
/// deterministic); shared prefixes across specs (e.g. the `v*` shared by the
/// default Verb and Adjective specs) are folded into the same nodes.
pub fn build_trie(grammar: &BTreeMap<String, Pos>) -> HanmalResult<Trie> {
    let mut trie = Trie::default();
    for (spec, terminal) in grammar {
        compile_one(&mut trie, spec, *terminal).map_err(|e| {
            e.add_context(format!("while compiling grammar spec \"{}\"", spec))
        })?;
    }
    Ok(trie)
}

/// The default grammar: one entry per top-level word class, sharing the
/// `v*` prefix between `Verb` and `Adjective`.
pub fn default_grammar() -> BTreeMap<String, Pos> {
    let mut grammar = BTreeMap::new();
    grammar.insert("D0p*N1s0j0".to_string(), Pos::Noun);
    grammar.insert("v*V1r*e0".to_string(), Pos::Verb);
    grammar.insert("v*J1r*e0".to_string(), Pos::Adjective);
    grammar.insert("A1".to_string(), Pos::Adverb);
    grammar.insert("C1".to_string(), Pos::Conjunction);
    grammar.insert("E+".to_string(), Pos::Exclamation);
    grammar.insert("j1".to_string(), Pos::Josa);
    grammar
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_dangling_quantifier() {
        let mut grammar = BTreeMap::new();
        grammar.insert("N".to_string(), Pos::Noun);
        let err = build_trie(&grammar).unwrap_err();
        assert_eq!(err.kind(), HanmalErrorKind::Grammar);
    }

    #[test]
    fn rejects_unknown_letter() {
        let mut grammar = BTreeMap::new();
        grammar.insert("Z1".to_string(), Pos::Noun);
        let err = build_trie(&grammar).unwrap_err();
        assert_eq!(err.kind(), HanmalErrorKind::Grammar);
    }

    #[test]
    fn default_grammar_compiles() {
        let trie = build_trie(&default_grammar()).unwrap();
        assert!(!trie.roots().is_empty());
    }

    #[test]
    fn verb_and_adjective_share_the_v_star_root() {
        let trie = build_trie(&default_grammar()).unwrap();
        let v_roots: Vec<NodeId> = trie
            .roots()
            .iter()
            .copied()
            .filter(|&id| trie.node(id).pos == Pos::VerbPrefix)
            .collect();
        assert_eq!(v_roots.len(), 1, "v* prefix should be a single shared root");
        let v_root = v_roots[0];
        // both Verb (V) and Adjective (J) children should hang off of it.
        let child_positions: Vec<Pos> = trie
            .node(v_root)
            .next
            .iter()
            .filter_map(|edge| match edge {
                Edge::To(id) => Some(trie.node(*id).pos),
                Edge::SelfLoop => None,
            })
            .collect();
        assert!(child_positions.contains(&Pos::Verb));
        assert!(child_positions.contains(&Pos::Adjective));
    }

    #[test]
    fn noun_spec_allows_bare_noun_with_no_prefix_or_suffix() {
        let trie = build_trie(&default_grammar()).unwrap();
        // N must be reachable directly as a root (skipping optional D0 p*).
        let noun_roots: Vec<NodeId> = trie
            .roots()
            .iter()
            .copied()
            .filter(|&id| trie.node(id).pos == Pos::Noun)
            .collect();
        assert_eq!(noun_roots.len(), 1);
        // and consuming it alone must complete a parse (s0 j0 are optional).
        assert_eq!(trie.node(noun_roots[0]).ending, Some(Pos::Noun));
    }

    #[test]
    fn verb_spec_requires_at_least_the_verb_root() {
        let trie = build_trie(&default_grammar()).unwrap();
        // v alone (no V) must not be a valid ending.
        let v_prefix_root = trie
            .roots()
            .iter()
            .copied()
            .find(|&id| trie.node(id).pos == Pos::VerbPrefix)
            .unwrap();
        assert_eq!(trie.node(v_prefix_root).ending, None);
    }

    #[test]
    fn exclamation_requires_at_least_one_and_allows_repeats() {
        let trie = build_trie(&default_grammar()).unwrap();
        let e_root = trie
            .roots()
            .iter()
            .copied()
            .find(|&id| trie.node(id).pos == Pos::Exclamation)
            .unwrap();
        assert_eq!(trie.node(e_root).ending, Some(Pos::Exclamation));
        assert!(trie.node(e_root).next.contains(&Edge::SelfLoop));
    }
}
