use credset_common::Source;

/// Display value and type label for a credential source.
///
/// Pure: nothing is read, executed or dereferenced.
pub fn classify(source: &Source) -> (&str, &'static str) {
    match source {
        Source::EnvVar(name) => (name.as_str(), "env"),
        Source::Path(path) => (path.as_str(), "path"),
        Source::Command(command) => (command.as_str(), "command"),
        Source::Value(value) => (value.as_str(), "value"),
    }
}
