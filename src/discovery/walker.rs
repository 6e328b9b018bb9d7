use super::DiscoveryOptions;
use crate::config::ResolvedInput;
use ignore::WalkBuilder;
use log::debug;

/// Configures and builds a sequential, sorted `ignore::Walk` for the root.
pub(super) fn build_walker(resolved: &ResolvedInput, opts: &DiscoveryOptions) -> ignore::Walk {
    let mut walker_builder = WalkBuilder::new(&resolved.path);

    // Exclusion is driven entirely by the configured lists, not by VCS ignore
    // files or hidden-file rules, so results do not depend on the repo state.
    walker_builder.standard_filters(false);
    walker_builder.follow_links(false);
    walker_builder.sort_by_file_name(|a, b| a.cmp(b));
    debug!("Configuring WalkBuilder: standard filters off, sorted by file name.");

    if !opts.exclude_dirs.is_empty() {
        let exclude_dirs = opts.exclude_dirs.clone();
        walker_builder.filter_entry(move |entry| {
            let is_dir = entry.file_type().map_or(false, |ft| ft.is_dir());
            if !is_dir || entry.depth() == 0 {
                return true;
            }
            let excluded = entry
                .file_name()
                .to_str()
                .map_or(false, |name| exclude_dirs.iter().any(|d| d == name));
            if excluded {
                debug!("Skipping excluded directory: {}", entry.path().display());
            }
            !excluded
        });
    }

    walker_builder.build()
}
