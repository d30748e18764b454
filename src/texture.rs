use shapedoc::MeshGraph;
use shapegraft_common::names_eq;

/// Rename every texture-table entry matching `old_name` (case-insensitively) to `new_name`, as
/// given. Returns the number of entries renamed.
///
/// Slots keep their positions, so anything referring to a texture by slot now refers to the new
/// name.
pub fn replace_texture(graph: &mut MeshGraph, old_name: &str, new_name: &str) -> usize {
    let mut replaced = 0;
    for name in graph.textures_mut() {
        if names_eq(name.as_str(), old_name) {
            new_name.clone_into(name);
            replaced += 1;
        }
    }
    tracing::debug!(old_name, new_name, replaced, "replaced texture");
    replaced
}
