// Home page rendering
//
// Turns a folder into ordered markdown link lines and works out which home
// files a run has to rewrite.

use crate::tree::Folder;
use std::path::PathBuf;

/// Render a folder as it appears inlined in its parent's page.
///
/// The folder's own heading comes first (skipped for the root), then its
/// documents, then every subfolder that has direct documents, recursively.
pub fn render(folder: &Folder) -> Vec<String> {
    let mut lines = Vec::new();
    render_into(folder, true, &mut lines);
    lines
}

/// Render a folder as a standalone home page.
///
/// Same as [`render`] except that the page owner gets no heading linking to
/// itself.
pub fn render_page(folder: &Folder) -> Vec<String> {
    let mut lines = Vec::new();
    render_into(folder, false, &mut lines);
    lines
}

fn render_into(folder: &Folder, with_heading: bool, lines: &mut Vec<String>) {
    if with_heading && !folder.is_root() {
        lines.push(folder.heading_line());
    }

    for doc in folder.sorted_documents() {
        lines.push(doc.link_line());
    }

    for sub in folder.sorted_subfolders() {
        if sub.has_documents() {
            render_into(sub, true, lines);
        }
    }
}

/// Home file contents for a set of rendered lines
pub fn page_content(lines: &[String]) -> String {
    lines.join("\n")
}

/// One home file to regenerate and the folder it indexes
#[derive(Debug, Clone)]
pub struct HomePage<'a> {
    pub target: PathBuf,
    pub folder: &'a Folder,
}

impl HomePage<'_> {
    pub fn content(&self) -> String {
        page_content(&render_page(self.folder))
    }
}

/// Every home page a run rewrites, deepest first, the root page last.
///
/// A subfolder's override home file is rewritten whenever its parent is
/// rendered. A folder is rendered when it is the root, when it is inlined
/// into a rendered parent (it has direct documents), or when it owns an
/// override page of its own.
pub fn plan_home_pages(root_home: PathBuf, root: &Folder) -> Vec<HomePage<'_>> {
    let mut pages = Vec::new();
    collect_override_pages(root, &mut pages);
    pages.push(HomePage {
        target: root_home,
        folder: root,
    });
    pages
}

fn collect_override_pages<'a>(folder: &'a Folder, pages: &mut Vec<HomePage<'a>>) {
    for sub in folder.sorted_subfolders() {
        let override_file = folder.override_home_file(&sub.name);

        if sub.has_documents() || override_file.is_some() {
            collect_override_pages(sub, pages);
        }

        if let Some(doc) = override_file {
            pages.push(HomePage {
                target: doc.absolute_path.clone(),
                folder: sub,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::{folder_display_name, LinkDeriver};
    use crate::tree::{Document, FolderMeta};
    use std::collections::BTreeMap;
    use std::path::Path;

    const ROOT: &str = "/wiki";

    fn documents(
        dir: &Path,
        names: &[&str],
        ancestor_link: &str,
        depth: usize,
    ) -> BTreeMap<String, Document> {
        let links = LinkDeriver::default();
        names
            .iter()
            .map(|n| {
                let link = links.derive(n, ancestor_link, depth);
                (n.to_string(), Document::new(*n, link, dir.join(n), ".md"))
            })
            .collect()
    }

    fn folder(
        parent: &Path,
        parent_link: &str,
        parent_display: &str,
        depth: usize,
        name: &str,
        doc_names: &[&str],
        subfolders: Vec<Folder>,
    ) -> Folder {
        let path = parent.join(name);
        let link = LinkDeriver::default().derive(name, parent_link, depth);
        let docs = documents(&path, doc_names, &link, depth + 1);
        let meta = FolderMeta {
            name: name.to_string(),
            display_name: folder_display_name(name, parent_display),
            link,
            absolute_path: path,
        };
        let subs = subfolders.into_iter().map(|f| (f.name.clone(), f)).collect();
        Folder::new(meta, docs, subs, ".md")
    }

    fn root(doc_names: &[&str], subfolders: Vec<Folder>) -> Folder {
        let docs = documents(Path::new(ROOT), doc_names, "", 0);
        let subs = subfolders.into_iter().map(|f| (f.name.clone(), f)).collect();
        Folder::root(PathBuf::from(ROOT), docs, subs, ".md")
    }

    fn wiki() -> Folder {
        let api = folder(Path::new(ROOT), "", "", 0, "api", &["intro.md"], vec![]);
        root(&["guide.md", "api.md"], vec![api])
    }

    // outer/inner with a single deep.md
    fn deep_inner() -> Folder {
        let outer = Path::new("/wiki/outer");
        folder(outer, "outer", "Outer", 1, "inner", &["deep.md"], vec![])
    }

    #[test]
    fn test_render_root_with_inlined_folder() {
        let lines = render(&wiki());
        assert_eq!(
            lines,
            vec!["[Guide](guide.md)", "# [Api](api)", "[Intro](api/intro)"]
        );
    }

    #[test]
    fn test_render_page_skips_own_heading() {
        let tree = wiki();
        let api = &tree.subfolders["api"];
        assert_eq!(render_page(api), vec!["[Intro](api/intro)"]);
        assert_eq!(render(api)[0], "# [Api](api)");
    }

    #[test]
    fn test_render_natural_order() {
        let tree = root(&["doc2.md", "doc10.md", "doc1.md"], vec![]);
        assert_eq!(
            render(&tree),
            vec!["[Doc1](doc1.md)", "[Doc2](doc2.md)", "[Doc10](doc10.md)"]
        );
    }

    #[test]
    fn test_folder_without_documents_not_inlined() {
        let inner = deep_inner();
        let outer = folder(Path::new(ROOT), "", "", 0, "outer", &[], vec![inner]);
        let tree = root(&["top.md"], vec![outer]);

        assert_eq!(render(&tree), vec!["[Top](top.md)"]);
    }

    #[test]
    fn test_nested_inlining_order() {
        let v10 = folder(Path::new("/wiki/api"), "api", "Api", 1, "v10", &["b.md"], vec![]);
        let v2 = folder(Path::new("/wiki/api"), "api", "Api", 1, "v2", &["a.md"], vec![]);
        let api = folder(Path::new(ROOT), "", "", 0, "api", &["intro.md"], vec![v10, v2]);
        let tree = root(&[], vec![api]);

        assert_eq!(
            render(&tree),
            vec![
                "# [Api](api)",
                "[Intro](api/intro)",
                "# [Api > V2](api/v2)",
                "[A](api/v2/a)",
                "# [Api > V10](api/v10)",
                "[B](api/v10/b)",
            ]
        );
    }

    #[test]
    fn test_page_content_joins_lines() {
        let lines = vec!["[A](a.md)".to_string(), "[B](b.md)".to_string()];
        assert_eq!(page_content(&lines), "[A](a.md)\n[B](b.md)");
        assert_eq!(page_content(&[]), "");
    }

    #[test]
    fn test_plan_root_last() {
        let tree = wiki();
        let pages = plan_home_pages(PathBuf::from("/wiki/Home.md"), &tree);

        let targets: Vec<&Path> = pages.iter().map(|p| p.target.as_path()).collect();
        assert_eq!(targets, vec![Path::new("/wiki/api.md"), Path::new("/wiki/Home.md")]);
        assert_eq!(pages[0].content(), "[Intro](api/intro)");
    }

    #[test]
    fn test_plan_follows_override_without_documents() {
        let inner = deep_inner();
        let outer = folder(Path::new(ROOT), "", "", 0, "outer", &["inner.md"], vec![inner]);
        let tree = root(&["outer.md"], vec![outer]);

        let pages = plan_home_pages(PathBuf::from("/wiki/Home.md"), &tree);
        let targets: Vec<&Path> = pages.iter().map(|p| p.target.as_path()).collect();
        assert_eq!(
            targets,
            vec![
                Path::new("/wiki/outer/inner.md"),
                Path::new("/wiki/outer.md"),
                Path::new("/wiki/Home.md"),
            ]
        );
        assert_eq!(
            pages[1].content(),
            "# [Outer > Inner](outer/inner)\n[Deep](outer/inner/deep)"
        );
    }

    #[test]
    fn test_plan_skips_unrendered_folders() {
        let inner = deep_inner();
        let outer = folder(Path::new(ROOT), "", "", 0, "outer", &["inner.md"], vec![inner]);
        let tree = root(&[], vec![outer]);

        // outer has no documents once inner.md is relocated, and no override page
        let pages = plan_home_pages(PathBuf::from("/wiki/Home.md"), &tree);
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].target, PathBuf::from("/wiki/Home.md"));
    }
}
