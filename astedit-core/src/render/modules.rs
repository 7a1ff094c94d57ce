//! Module table: imports and exports

use super::dispatch::{bracket, keyword, punct, Emitter};
use super::fragment::{Fragment, Layout};
use crate::estree::*;

impl<'t> Emitter<'t> {
    pub(super) fn module(&mut self, id: NodeId) -> Option<Fragment> {
        let tree = self.tree;
        let fragment = match tree.get(id)? {
            Node::ImportDeclaration(n) => self.import_declaration(id, n),
            Node::ImportSpecifier(n) => {
                let parts = self.renamed("imported", n.imported, "local", n.local);
                self.wrap(id, Layout::Inline, parts)
            }
            Node::ImportDefaultSpecifier(n) => {
                let parts = self.child("local", n.local, Self::emit).into_iter().collect();
                self.wrap(id, Layout::Inline, parts)
            }
            Node::ImportNamespaceSpecifier(n) => {
                let mut parts = vec![punct("*"), keyword("as")];
                parts.extend(self.child("local", n.local, Self::emit));
                self.wrap(id, Layout::Inline, parts)
            }
            Node::ExportNamedDeclaration(n) => self.export_named(id, n),
            Node::ExportSpecifier(n) => {
                let parts = self.renamed("local", n.local, "exported", n.exported);
                self.wrap(id, Layout::Inline, parts)
            }
            Node::ExportDefaultDeclaration(n) => self.export_default(id, n),
            Node::ExportAllDeclaration(n) => {
                let mut parts = vec![keyword("export"), punct("*"), keyword("from")];
                parts.extend(self.child("source", n.source, Self::emit));
                parts.push(punct(";"));
                self.wrap(id, Layout::Block, parts)
            }
            other => {
                tracing::debug!(kind = other.kind(), "not a module clause, using main table");
                return self.emit(id);
            }
        };
        Some(fragment)
    }

    /// `import a, * as ns, { b as c } from 'source';`
    ///
    /// Default and namespace specifiers come first, named ones are braced. Paths keep the
    /// specifiers' own indices.
    fn import_declaration(&mut self, id: NodeId, n: &ImportDeclaration) -> Fragment {
        let tree = self.tree;
        let (named, plain): (Vec<usize>, Vec<usize>) = n
            .specifiers
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.map(|spec| (i, spec)))
            .map(|(i, spec)| (i, matches!(tree.get(spec), Some(Node::ImportSpecifier(_)))))
            .fold((Vec::new(), Vec::new()), |(mut named, mut plain), (i, is_named)| {
                if is_named {
                    named.push(i);
                } else {
                    plain.push(i);
                }
                (named, plain)
            });

        let mut parts = vec![keyword("import")];
        if !named.is_empty() || !plain.is_empty() {
            let mut clause = Vec::new();
            if !plain.is_empty() {
                clause.push(self.comma_list_of("specifiers", &n.specifiers, plain.iter().copied(), Self::module));
            }
            if !named.is_empty() {
                if !plain.is_empty() {
                    clause.push(punct(","));
                }
                clause.push(bracket("{"));
                clause.push(self.comma_list_of("specifiers", &n.specifiers, named, Self::module));
                clause.push(bracket("}"));
            }
            parts.push(Fragment::group(Layout::Inline, clause));
            parts.push(keyword("from"));
        }
        parts.extend(self.child("source", n.source, Self::emit));
        parts.push(punct(";"));
        self.wrap(id, Layout::Block, parts)
    }

    /// `export declaration` or `export { a as b } from 'source';`
    fn export_named(&mut self, id: NodeId, n: &ExportNamedDeclaration) -> Fragment {
        let mut parts = vec![keyword("export")];
        if let Some(declaration) = self.child("declaration", n.declaration, Self::declaration) {
            parts.push(continued(declaration));
            return self.wrap(id, Layout::Block, parts);
        }
        parts.push(bracket("{"));
        parts.push(self.comma_list("specifiers", &n.specifiers, Self::module));
        parts.push(bracket("}"));
        if let Some(source) = self.child("source", n.source, Self::emit) {
            parts.push(keyword("from"));
            parts.push(source);
        }
        parts.push(punct(";"));
        self.wrap(id, Layout::Block, parts)
    }

    /// `export default declaration`; expressions get a terminating `;`.
    fn export_default(&mut self, id: NodeId, n: &ExportDefaultDeclaration) -> Fragment {
        let tree = self.tree;
        let mut parts = vec![keyword("export"), keyword("default")];
        parts.extend(self.child("declaration", n.declaration, Self::declaration).map(continued));
        let is_declaration = matches!(
            n.declaration.and_then(|decl| tree.get(decl)),
            Some(Node::FunctionDeclaration(_) | Node::ClassDeclaration(_))
        );
        if !is_declaration {
            parts.push(punct(";"));
        }
        self.wrap(id, Layout::Block, parts)
    }

    /// `first as second`, or just `first` when both are the same identifier.
    fn renamed(
        &mut self,
        first_field: &'static str,
        first: Option<NodeId>,
        second_field: &'static str,
        second: Option<NodeId>,
    ) -> Vec<Fragment> {
        let mut parts: Vec<Fragment> = self.child(first_field, first, Self::emit).into_iter().collect();
        let same = matches!(
            (self.identifier_name(first), self.identifier_name(second)),
            (Some(a), Some(b)) if a == b
        );
        if !same {
            if let Some(alias) = self.child(second_field, second, Self::emit) {
                parts.push(keyword("as"));
                parts.push(alias);
            }
        }
        parts
    }
}

/// An exported declaration stays on the line of its `export` keyword.
fn continued(mut declaration: Fragment) -> Fragment {
    if let Fragment::Composite(composite) = &mut declaration {
        composite.layout = Layout::Inline;
    }
    declaration
}

#[cfg(test)]
mod tests {
    use crate::estree::*;
    use crate::render::{render, Layout};
    use crate::testing::{leaf_texts, TreeBuilder};

    fn text(tree: &SyntaxTree, id: NodeId) -> String {
        leaf_texts(&render(tree, Some(id)).unwrap()).join(" ")
    }

    #[test]
    fn test_import_specifier_grouping() {
        let mut b = TreeBuilder::new();
        let react = b.ident("React");
        let default = b.add(Node::ImportDefaultSpecifier(LocalSpecifier { local: Some(react) }));
        let ns = b.ident("all");
        let namespace = b.add(Node::ImportNamespaceSpecifier(LocalSpecifier { local: Some(ns) }));
        let imported = b.ident("useState");
        let local = b.ident("useState");
        let same = b.add(Node::ImportSpecifier(ImportSpecifier {
            imported: Some(imported),
            local: Some(local),
        }));
        let imported = b.ident("a");
        let local = b.ident("b");
        let renamed = b.add(Node::ImportSpecifier(ImportSpecifier {
            imported: Some(imported),
            local: Some(local),
        }));
        let source = b.string("react");
        let import = b.add(Node::ImportDeclaration(ImportDeclaration {
            specifiers: vec![Some(default), Some(namespace), Some(same), Some(renamed)],
            source: Some(source),
        }));
        let tree = b.finish(import);
        assert_eq!(
            text(&tree, import),
            "import React , * as all , { useState , a as b } from 'react' ;"
        );
    }

    #[test]
    fn test_side_effect_import() {
        let mut b = TreeBuilder::new();
        let source = b.string("polyfill");
        let import = b.add(Node::ImportDeclaration(ImportDeclaration {
            specifiers: Vec::new(),
            source: Some(source),
        }));
        let tree = b.finish(import);
        assert_eq!(text(&tree, import), "import 'polyfill' ;");
    }

    #[test]
    fn test_exports() {
        let mut b = TreeBuilder::new();
        let local = b.ident("x");
        let exported = b.ident("y");
        let spec = b.add(Node::ExportSpecifier(ExportSpecifier {
            local: Some(local),
            exported: Some(exported),
        }));
        let named = b.add(Node::ExportNamedDeclaration(ExportNamedDeclaration {
            declaration: None,
            specifiers: vec![Some(spec)],
            source: None,
        }));
        let value = b.number(42.0);
        let default = b.add(Node::ExportDefaultDeclaration(ExportDefaultDeclaration {
            declaration: Some(value),
        }));
        let f = b.function(Some("main"), vec![], vec![]);
        let with_decl = b.add(Node::ExportNamedDeclaration(ExportNamedDeclaration {
            declaration: Some(f),
            specifiers: Vec::new(),
            source: None,
        }));
        let source = b.string("./lib");
        let all = b.add(Node::ExportAllDeclaration(ExportAllDeclaration { source: Some(source) }));
        let tree = b.finish(named);

        assert_eq!(text(&tree, named), "export { x as y } ;");
        assert_eq!(text(&tree, default), "export default 42 ;");
        assert_eq!(text(&tree, with_decl), "export function main ( ) { }");
        assert_eq!(text(&tree, all), "export * from './lib' ;");

        let rendered = render(&tree, Some(with_decl)).unwrap();
        let declaration = &rendered.as_composite().unwrap().children[1];
        assert_eq!(declaration.meta().unwrap().kind, "FunctionDeclaration");
        assert_eq!(declaration.as_composite().unwrap().layout, Layout::Inline);
    }
}
