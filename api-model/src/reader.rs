//! The model reader: walks the selected files of a corpus and collects every
//! interface and enum declaration it finds.

use api_model_syntax::{Corpus, SourceFile, SymbolResolver, SyntaxKind};

use crate::builder::{EnumBuilder, InterfaceBuilder, NameResolver};
use crate::error::ModelResult;
use crate::ir::{Enum, Interface, Model};
use crate::selection::FileSelection;

/// Options for [`ModelReader`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReaderOptions {
    /// Copy documentation comments into the IR.
    pub documentation: bool,
}

/// Interfaces and enums of a corpus, in visit order.
///
/// Construction does all the work. A failure in any builder aborts the read,
/// so a reader only exists for a corpus that was read completely.
#[derive(Debug, Clone, Default)]
pub struct ModelReader {
    interfaces: Vec<Interface>,
    enums: Vec<Enum>,
}

impl ModelReader {
    pub fn new(corpus: &Corpus, selection: &FileSelection) -> ModelResult<Self> {
        Self::with_options(corpus, selection, ReaderOptions::default())
    }

    pub fn with_options(
        corpus: &Corpus,
        selection: &FileSelection,
        options: ReaderOptions,
    ) -> ModelResult<Self> {
        Self::read(corpus.files(), corpus.symbols(), selection, options)
    }

    /// Read `files` resolving names through `symbols`.
    pub fn read(
        files: &[SourceFile],
        symbols: &dyn SymbolResolver,
        selection: &FileSelection,
        options: ReaderOptions,
    ) -> ModelResult<Self> {
        let names = NameResolver::new(symbols);
        let interface_builder =
            InterfaceBuilder::new(names).with_documentation(options.documentation);
        let enum_builder = EnumBuilder::new(names).with_documentation(options.documentation);

        let mut reader = ModelReader::default();
        let mut visited = 0usize;
        for file in files {
            if !selection.is_eligible(file.path()) {
                tracing::debug!(path = %file.path().display(), "skipping file");
                continue;
            }
            visited += 1;
            tracing::debug!(path = %file.path().display(), "reading file");

            for id in file.tree().preorder() {
                let node = file.node(id);
                match node.kind() {
                    SyntaxKind::InterfaceDeclaration => {
                        reader.interfaces.push(interface_builder.build(node)?);
                    }
                    SyntaxKind::EnumDeclaration => {
                        reader.enums.push(enum_builder.build(node)?);
                    }
                    _ => {}
                }
            }
        }

        tracing::info!(
            files = visited,
            interfaces = reader.interfaces.len(),
            enums = reader.enums.len(),
            "model read"
        );
        Ok(reader)
    }

    pub fn interfaces(&self) -> &[Interface] {
        &self.interfaces
    }

    pub fn enums(&self) -> &[Enum] {
        &self.enums
    }

    pub fn into_model(self) -> Model {
        Model {
            interfaces: self.interfaces,
            enums: self.enums,
        }
    }
}
