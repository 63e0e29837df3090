//! Markdown and JSON rendering of an [`IndexReport`].
//!
//! Rendering is a pure function of the report: the only time-dependent text
//! is the timestamp captured when the report was built.

use crate::vault::FolderNode;

use super::ReportError;
use super::types::IndexReport;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Render the full Markdown index document.
pub fn render(report: &IndexReport) -> String {
    let mut md = String::new();

    md.push_str("# Obsidian Vault Index\n\n");
    md.push_str(
        "> **Privacy Note**: This index shows vault structure only. \
         File names are redacted; actual note content is never accessed.\n\n",
    );
    md.push_str("---\n\n");

    push_summary(&mut md, report);
    push_file_types(&mut md, report);
    push_patterns(&mut md, report);

    md.push_str("---\n\n");
    md.push_str("## Folder Structure\n\n");
    md.push_str("```\n");
    md.push_str(&render_tree(&report.tree));
    md.push_str("```\n\n");

    md.push_str("---\n\n");
    push_folder_details(&mut md, &report.tree);

    let warnings = report.warnings();
    if !warnings.is_empty() {
        md.push_str("---\n\n");
        md.push_str("## Warnings\n\n");
        for (path, message) in &warnings {
            md.push_str(&format!("- {}: {}\n", code_span(display_path(path)), message));
        }
        md.push('\n');
    }

    md.push_str("---\n\n");
    push_usage(&mut md);

    md
}

/// Render the report as pretty-printed JSON.
pub fn render_json(report: &IndexReport) -> Result<String, ReportError> {
    serde_json::to_string_pretty(report).map_err(ReportError::Serialize)
}

/// Render the indented folder tree, one folder per line, in walk order.
///
/// ```
/// use vault_indexer_core::vault::FolderNode;
/// use vault_indexer_core::report::render_tree;
///
/// let mut root = FolderNode::new("vault", 0);
/// let mut projects = FolderNode::new("Projects", 1);
/// projects.file_count = 2;
/// root.children.push(projects);
///
/// assert_eq!(render_tree(&root), "📁 vault/\n├── 📁 Projects/ (2 files)\n");
/// ```
pub fn render_tree(root: &FolderNode) -> String {
    let mut out = format!("📁 {}/\n", root.name);

    for entry in root.preorder().into_iter().skip(1) {
        let node = entry.node;
        let indent = "    ".repeat(node.depth.saturating_sub(1));
        out.push_str(&format!("{indent}├── 📁 {}/", node.name));
        if node.file_count > 0 {
            out.push_str(&format!(" ({} files)", node.file_count));
        }
        if node.warning.is_some() {
            out.push_str(" (unreadable)");
        }
        out.push('\n');
    }

    out
}

fn push_summary(md: &mut String, report: &IndexReport) {
    md.push_str("## Summary Statistics\n\n");
    md.push_str("| Metric | Value |\n");
    md.push_str("|--------|-------|\n");
    md.push_str(&format!("| Vault | {} |\n", cell_code(&report.vault_name)));
    md.push_str(&format!(
        "| Generated | {} |\n",
        report.generated_at.format(TIMESTAMP_FORMAT)
    ));
    md.push_str(&format!("| Total Folders | {} |\n", report.totals.folders));
    md.push_str(&format!("| Total Files | {} |\n", report.totals.files));
    md.push_str(&format!("| Max Depth | {} levels |\n", report.totals.max_depth));
    md.push('\n');
}

fn push_file_types(md: &mut String, report: &IndexReport) {
    md.push_str("### Files by Type\n\n");
    if report.file_types.is_empty() {
        md.push_str("*No files found*\n\n");
        return;
    }
    md.push_str("| Type | Count |\n");
    md.push_str("|------|-------|\n");
    for (category, count) in report.file_types.ranked() {
        md.push_str(&format!("| {category} | {count} |\n"));
    }
    md.push('\n');
}

fn push_patterns(md: &mut String, report: &IndexReport) {
    md.push_str("### Naming Patterns Detected\n\n");
    if report.patterns.is_empty() {
        md.push_str("*No files found*\n\n");
        return;
    }
    md.push_str("| Pattern | Count | Format Example |\n");
    md.push_str("|---------|-------|----------------|\n");
    for (kind, count) in report.patterns.ranked() {
        md.push_str(&format!("| {kind} | {count} | `{}` |\n", kind.format_example()));
    }
    md.push('\n');
}

fn push_folder_details(md: &mut String, root: &FolderNode) {
    md.push_str("## Detailed Folder Contents\n\n");

    for entry in root.preorder() {
        let node = entry.node;
        md.push_str(&format!("### 📁 {}\n\n", code_span(display_path(&entry.path))));

        if node.samples.is_empty() {
            if node.warning.is_some() {
                md.push_str("*Folder could not be read*\n\n");
            } else {
                md.push_str("*Empty folder or contains only subfolders*\n\n");
            }
            continue;
        }

        md.push_str("| Redacted Name | Pattern | Type |\n");
        md.push_str("|---------------|---------|------|\n");
        for sample in &node.samples {
            md.push_str(&format!(
                "| {} | {} | {} |\n",
                cell_code(&sample.display_name),
                sample.pattern,
                sample.category
            ));
        }

        let remaining = node.unsampled_count();
        if remaining > 0 {
            md.push_str(&format!("\n*...and {remaining} more files*\n"));
        }
        md.push('\n');
    }
}

fn push_usage(md: &mut String) {
    md.push_str("## How to Use This Index\n\n");
    md.push_str(
        "This index is designed for AI assistants to understand your vault's \
         organization without accessing private content.\n\n",
    );
    md.push_str("**What's included:**\n");
    md.push_str("- Complete folder hierarchy with real folder names\n");
    md.push_str("- File counts and types per folder\n");
    md.push_str("- Detected naming patterns (e.g., daily notes format)\n");
    md.push_str("- Redacted file names showing structure only\n\n");
    md.push_str("**What's NOT included:**\n");
    md.push_str("- Actual file names or titles\n");
    md.push_str("- File contents\n");
    md.push_str("- Links between notes\n");
    md.push_str("- Tags or metadata\n");
}

fn display_path(path: &str) -> &str {
    if path.is_empty() { "(root)" } else { path }
}

/// Inline code span whose fence is longer than any backtick run in `text`.
fn code_span(text: &str) -> String {
    let longest = text.split(|c: char| c != '`').map(str::len).max().unwrap_or(0);
    let fence = "`".repeat(longest + 1);
    if longest > 0 {
        format!("{fence} {text} {fence}")
    } else {
        format!("{fence}{text}{fence}")
    }
}

/// Code span for a table cell, where a bare `|` would end the cell.
fn cell_code(text: &str) -> String {
    code_span(&text.replace('|', "\\|"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vault::Aggregator;
    use chrono::NaiveDate;

    fn fixed_time() -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap().and_hms_opt(9, 30, 0).unwrap()
    }

    fn sample_report() -> IndexReport {
        let mut agg = Aggregator::new("vault");
        agg.enter_folder("Daily Notes");
        agg.record_file("2024-01-15.md");
        agg.leave_folder();
        agg.enter_folder("Projects");
        agg.enter_folder("Active");
        agg.record_file("001 - Project Plan.md");
        agg.leave_folder();
        agg.record_file("My Therapy Notes.md");
        agg.leave_folder();
        IndexReport::from_outcome(agg.finish(), fixed_time())
    }

    #[test]
    fn test_tree_indents_by_depth() {
        let tree = render_tree(&sample_report().tree);
        assert_eq!(
            tree,
            "📁 vault/\n\
             ├── 📁 Daily Notes/ (1 files)\n\
             ├── 📁 Projects/ (1 files)\n\
             \x20   ├── 📁 Active/ (1 files)\n"
        );
    }

    #[test]
    fn test_tree_keeps_insertion_order() {
        let mut agg = Aggregator::new("vault");
        agg.enter_folder("Zebra");
        agg.leave_folder();
        agg.enter_folder("Apple");
        agg.leave_folder();
        let tree = render_tree(&agg.finish().root);

        let zebra = tree.find("Zebra").unwrap();
        let apple = tree.find("Apple").unwrap();
        assert!(zebra < apple);
    }

    #[test]
    fn test_tree_omits_zero_counts() {
        let mut agg = Aggregator::new("vault");
        agg.enter_folder("Empty");
        let tree = render_tree(&agg.finish().root);
        assert!(tree.contains("├── 📁 Empty/\n"));
        assert!(!tree.contains("(0 files)"));
    }

    #[test]
    fn test_render_contains_tables() {
        let md = render(&sample_report());

        assert!(md.contains("| Vault | `vault` |"));
        assert!(md.contains("| Generated | 2024-01-15T09:30:00 |"));
        assert!(md.contains("| Total Folders | 3 |"));
        assert!(md.contains("| Total Files | 3 |"));
        assert!(md.contains("| Max Depth | 2 levels |"));
        assert!(md.contains("| notes | 3 |"));
        assert!(md.contains("| standard | 1 | `[Any title].md` |"));
        assert!(md.contains("| `2024-01-15.md` | daily_note | notes |"));
        assert!(md.contains("| `001 - [Redacted Title].md` | numbered_prefix | notes |"));
        assert!(!md.contains("Therapy"));
        assert!(!md.contains("## Warnings"));
    }

    #[test]
    fn test_render_is_deterministic() {
        assert_eq!(render(&sample_report()), render(&sample_report()));
    }

    #[test]
    fn test_render_lists_warnings() {
        let mut agg = Aggregator::new("vault");
        agg.enter_folder("Locked");
        agg.mark_unreadable("permission denied");
        let report = IndexReport::from_outcome(agg.finish(), fixed_time());
        let md = render(&report);

        assert!(md.contains("├── 📁 Locked/ (unreadable)"));
        assert!(md.contains("## Warnings\n\n- `Locked`: permission denied\n"));
        assert!(md.contains("*Folder could not be read*"));
    }

    #[test]
    fn test_render_empty_vault() {
        let report = IndexReport::from_outcome(Aggregator::new("vault").finish(), fixed_time());
        let md = render(&report);

        assert!(md.contains("| Total Folders | 0 |"));
        assert!(md.contains("| Total Files | 0 |"));
        assert!(md.contains("| Max Depth | 0 levels |"));
        assert!(md.contains("*No files found*"));
        assert!(md.contains("```\n📁 vault/\n```"));
    }

    #[test]
    fn test_render_json_keeps_titles_private() {
        let json = render_json(&sample_report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["totals"]["files"], 3);
        assert_eq!(value["patterns"]["daily_note"], 1);
        assert_eq!(value["tree"]["children"][0]["name"], "Daily Notes");
        assert!(!json.contains("Therapy"));
        assert!(!json.contains("Project Plan"));
    }

    #[test]
    fn test_code_span_fences() {
        assert_eq!(code_span("Projects"), "`Projects`");
        assert_eq!(code_span("a `b` c"), "`` a `b` c ``");
        assert_eq!(code_span("x ``y``"), "``` x ``y`` ```");
    }

    #[test]
    fn test_awkward_names_keep_tables_intact() {
        let mut agg = Aggregator::new("A|B `x`");
        agg.enter_folder("Pipe|Folder");
        agg.record_file("2024-01-15.md");
        let report = IndexReport::from_outcome(agg.finish(), fixed_time());
        let md = render(&report);

        assert!(md.contains("| Vault | `` A\\|B `x` `` |\n"));
        assert!(md.contains("### 📁 `Pipe|Folder`\n"));
        let vault_row = md.lines().find(|l| l.starts_with("| Vault |")).unwrap();
        let unescaped = vault_row.matches('|').count() - vault_row.matches("\\|").count();
        assert_eq!(unescaped, 3);
    }
}
