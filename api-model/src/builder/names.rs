//! Name resolution shared by the enum and interface builders.

use api_model_syntax::{Node, SymbolResolver};

use crate::error::{ModelError, ModelResult};

/// Resolves declared names through an injected [`SymbolResolver`].
#[derive(Clone, Copy)]
pub struct NameResolver<'r> {
    symbols: &'r dyn SymbolResolver,
}

impl<'r> NameResolver<'r> {
    pub fn new(symbols: &'r dyn SymbolResolver) -> Self {
        Self { symbols }
    }

    /// Declared name of a declaration or member node.
    ///
    /// Fails with [`ModelError::NameResolution`] when the node has no name
    /// child or the name child carries no bound symbol.
    pub fn name(&self, node: Node<'_>) -> ModelResult<String> {
        node.name()
            .and_then(|name| self.symbols.symbol_at(name))
            .map(|symbol| symbol.name.clone())
            .ok_or_else(|| ModelError::NameResolution {
                kind: node.kind(),
                location: node.location(),
            })
    }

    /// Documentation comment bound to a declaration, if any.
    pub fn documentation(&self, node: Node<'_>) -> Option<String> {
        node.name()
            .and_then(|name| self.symbols.symbol_at(name))
            .and_then(|symbol| symbol.documentation.clone())
    }
}
