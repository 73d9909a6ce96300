//! Prunes path entries that name directories absent from the filesystem.

use std::collections::BTreeSet;
use std::path::Path;

use serde_json::Value;

/// Drop stale path entries from every configuration in the document.
///
/// Each configuration carries paths in two places: `includePath` on the
/// entry itself and `path` inside its `browse` object. Both go through the
/// same pruning routine. Returns the removed path strings, deduplicated and
/// lexicographically ordered for deterministic reporting; the document was
/// modified iff the set is non-empty.
pub fn prune(doc: &mut Value, project_dir: &Path) -> BTreeSet<String> {
    let mut removed = BTreeSet::new();
    let Some(configs) = doc
        .get_mut("configurations")
        .and_then(Value::as_array_mut)
    else {
        return removed;
    };
    for cfg in configs {
        prune_list(cfg, "includePath", project_dir, &mut removed);
        if let Some(browse) = cfg.get_mut("browse") {
            prune_list(browse, "path", project_dir, &mut removed);
        }
    }
    removed
}

/// Prune one path list in place. Shared by both path-bearing locations so
/// the retention rule cannot drift between them. An absent or non-list
/// field is left untouched.
fn prune_list(
    container: &mut Value,
    key: &str,
    project_dir: &Path,
    removed: &mut BTreeSet<String>,
) {
    let Some(paths) = container.get_mut(key).and_then(Value::as_array_mut) else {
        return;
    };
    let mut kept = Vec::with_capacity(paths.len());
    for entry in paths.drain(..) {
        if retain(&entry, project_dir) {
            kept.push(entry);
        } else if let Some(s) = entry.as_str() {
            log::debug!("dropping {}: not a directory", s);
            removed.insert(s.to_string());
        }
    }
    *paths = kept;
}

/// Retention rule for a single entry: variable-substitution tokens (`${...}`)
/// and empty strings always survive, anything else must name an existing
/// directory. Relative entries are checked against the project root. A
/// failed stat counts as not-a-directory. Non-string elements are kept as-is.
fn retain(entry: &Value, project_dir: &Path) -> bool {
    let Some(s) = entry.as_str() else {
        return true;
    };
    if s.starts_with("${") || s.is_empty() {
        return true;
    }
    let path = Path::new(s);
    if path.is_absolute() {
        path.is_dir()
    } else {
        project_dir.join(path).is_dir()
    }
}
