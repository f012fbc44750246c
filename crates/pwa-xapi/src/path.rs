//! xAPI node paths.
//!
//! Paths are written the way the endpoint documents them, with `/` or
//! spaces between nodes: `Status/Peripherals/ConnectedDevice` or
//! `UserInterface Extensions Panel Save`.

/// Split a path into its node names.
pub fn segments(path: &str) -> Vec<&str> {
    path.split(['/', ' '])
        .filter(|segment| !segment.is_empty())
        .collect()
}

/// JSON-RPC method name for an `xCommand`.
pub fn command_method(path: &str) -> String {
    let mut method = String::from("xCommand");
    for segment in segments(path) {
        method.push('/');
        method.push_str(segment);
    }
    method
}

/// Walk a feedback or `xGet` document down `path`.
pub fn dig<'a>(value: &'a serde_json::Value, path: &str) -> Option<&'a serde_json::Value> {
    segments(path)
        .into_iter()
        .try_fold(value, |node, segment| node.get(segment))
}
