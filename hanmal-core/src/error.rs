use std::fmt;

/// Broad classification of what went wrong, paired with a boxed `source`
/// for the underlying cause.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum HanmalErrorKind {
    /// A grammar spec string could not be compiled into the POS trie.
    Grammar,
    /// The dictionary provider failed to load a backing resource.
    Io,
    /// A resource file was read but its contents were malformed.
    Parse,
    /// A DP bookkeeping invariant that the parser itself is responsible for
    /// upholding was violated. Never expected to surface; if it does, it is
    /// a bug in the parser, not bad input.
    Internal,
}

impl fmt::Display for HanmalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HanmalErrorKind::Grammar => "Grammar",
            HanmalErrorKind::Io => "Io",
            HanmalErrorKind::Parse => "Parse",
            HanmalErrorKind::Internal => "Internal",
        };
        f.write_str(name)
    }
}

impl HanmalErrorKind {
    pub fn with_error<E>(self, source: E) -> HanmalError
    where
        anyhow::Error: From<E>,
    {
        HanmalError {
            kind: self,
            source: From::from(source),
        }
    }
}

#[derive(thiserror::Error, Debug)]
#[error("HanmalError(kind={kind}, source={source})")]
pub struct HanmalError {
    kind: HanmalErrorKind,
    #[source]
    source: anyhow::Error,
}

impl HanmalError {
    pub fn kind(&self) -> HanmalErrorKind {
        self.kind
    }

    pub fn add_context<C>(self, ctx: C) -> Self
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        HanmalError {
            kind: self.kind,
            source: self.source.context(ctx),
        }
    }
}
