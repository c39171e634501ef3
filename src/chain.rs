//! Property chains.
//!
//! A `PropertyChain` is the flattened form of a member-access expression such
//! as `order.lines[0].amount`: a list of member names, each optionally followed
//! by collection indexers. The chain is rendered with a configurable separator
//! (see `ValidatorOptions::property_chain_separator`); indexers always render
//! as `[i]` glued to the preceding member.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Segment {
    Member(String),
    Index(String),
}

/// Dotted/indexed path to a nested property, e.g. `Address.City` or
/// `Orders[0].Amount`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct PropertyChain {
    segments: Vec<Segment>,
}

impl PropertyChain {
    /// Create an empty chain.
    pub fn new() -> Self {
        PropertyChain { segments: Vec::new() }
    }

    /// Build a chain from member names, outermost first.
    pub fn from_members<I, S>(members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut chain = PropertyChain::new();
        for member in members {
            chain.add(member);
        }
        chain
    }

    /// Parse a rendered chain using `.` as the member separator.
    ///
    /// `Orders[0].Amount` yields `Orders`, `[0]`, `Amount`. Empty members
    /// (`a..b`) are skipped.
    pub fn parse(path: &str) -> Self {
        let mut chain = PropertyChain::new();
        for caps in regex!(r"([^.\[\]]+)|\[([^\]]*)\]").captures_iter(path) {
            if let Some(member) = caps.get(1) {
                chain.add(member.as_str());
            } else if let Some(index) = caps.get(2) {
                chain.add_indexer(index.as_str());
            }
        }
        chain
    }

    /// Append a member name. Empty names are ignored.
    pub fn add(&mut self, member: impl Into<String>) -> &mut Self {
        let member = member.into();
        if !member.is_empty() {
            self.segments.push(Segment::Member(member));
        }
        self
    }

    /// Append a collection indexer to the last member.
    pub fn add_indexer(&mut self, index: impl fmt::Display) -> &mut Self {
        self.segments.push(Segment::Index(index.to_string()));
        self
    }

    /// True when the chain holds no members and no indexers.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of member names (indexers are not counted).
    pub fn member_count(&self) -> usize {
        self.segments.iter().filter(|s| matches!(s, Segment::Member(_))).count()
    }

    /// Render the chain, joining members with `separator`.
    pub fn build(&self, separator: &str) -> String {
        let mut out = String::new();
        let mut first = true;
        for segment in &self.segments {
            match segment {
                Segment::Member(name) => {
                    if !first {
                        out.push_str(separator);
                    }
                    out.push_str(name);
                }
                Segment::Index(index) => {
                    out.push('[');
                    out.push_str(index);
                    out.push(']');
                }
            }
            first = false;
        }
        out
    }
}

impl fmt::Display for PropertyChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.build("."))
    }
}
