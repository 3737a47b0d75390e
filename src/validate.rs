//! Config file checks.
//!
//! Unknown keys are detected with `serde_ignored` while decoding into the
//! config's layer type (where all fields are `Option<T>`). Any key the layer
//! doesn't consume is unknown and is reported with its file path and
//! best-effort line number.
//!
//! Identity checks run on the fully loaded repository layer, before it is
//! turned into a [`RepoConfig`](crate::RepoConfig).

use std::path::Path;

use confique::Config;
use serde::Deserialize;

use crate::config::RepoConfig;
use crate::error::SprConfigError;

/// Decode a YAML document into `C::Layer`, collecting keys the layer ignores.
///
/// An empty document decodes to an empty layer.
pub fn decode_layer<C: Config>(
    content: &str,
    path: &Path,
) -> Result<(C::Layer, Vec<SprConfigError>), SprConfigError>
where
    C::Layer: for<'de> Deserialize<'de>,
{
    let mut unknown_keys: Vec<String> = Vec::new();

    let value: serde_yaml::Value =
        serde_yaml::from_str(content).map_err(|e| SprConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;
    let value = match value {
        serde_yaml::Value::Null => serde_yaml::Value::Mapping(Default::default()),
        other => other,
    };

    let layer: C::Layer = serde_ignored::deserialize(value, |ignored_path| {
        unknown_keys.push(ignored_path.to_string());
    })
    .map_err(|e| SprConfigError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })?;

    let unknown = unknown_keys
        .into_iter()
        .map(|key| {
            let line = find_key_line(content, &key);
            SprConfigError::UnknownKey {
                key,
                path: path.to_path_buf(),
                line,
            }
        })
        .collect();

    Ok((layer, unknown))
}

/// Find the 1-indexed line on which a top-level YAML key is defined.
/// Returns 0 if the key cannot be located.
fn find_key_line(content: &str, key: &str) -> usize {
    for (i, line) in content.lines().enumerate() {
        // Only unindented lines hold top-level keys.
        if line.starts_with(char::is_whitespace) {
            continue;
        }
        let Some((candidate, _)) = line.split_once(':') else {
            continue;
        };
        let candidate = candidate.trim().trim_matches(|c| c == '"' || c == '\'');
        if candidate == key {
            return i + 1;
        }
    }
    0
}

#[derive(Deserialize)]
struct IdentityProbe {
    #[serde(rename = "githubRepoOwner")]
    owner: Option<String>,
    #[serde(rename = "githubRepoName")]
    name: Option<String>,
}

/// Check that a loaded repository layer carries a non-empty owner and name.
///
/// The owner is checked first; a missing owner is reported without looking
/// at the name.
pub fn validate_identity(layer: &<RepoConfig as Config>::Layer) -> Result<(), SprConfigError> {
    let value = serde_yaml::to_value(layer).map_err(|e| SprConfigError::InvalidValue {
        key: "<repository>".into(),
        reason: e.to_string(),
    })?;
    let probe: IdentityProbe =
        serde_yaml::from_value(value).map_err(|e| SprConfigError::InvalidValue {
            key: "<repository>".into(),
            reason: e.to_string(),
        })?;

    // Whitespace-only values are as unusable as an empty one.
    let present = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.trim().is_empty());
    if !present(&probe.owner) {
        return Err(SprConfigError::MissingOwner);
    }
    if !present(&probe.name) {
        return Err(SprConfigError::MissingRepoName);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UserConfig;

    type RepoLayer = <RepoConfig as Config>::Layer;

    fn repo_layer(yaml: &str) -> RepoLayer {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn valid_file_has_no_unknown_keys() {
        let content = "showPRLink: false\nruncount: 4\n";
        let (_, unknown) = decode_layer::<UserConfig>(content, Path::new("u.yml")).unwrap();
        assert!(unknown.is_empty());
    }

    #[test]
    fn unknown_key_reported_with_line() {
        let content = "showPRLink: false\ntypo_key: 1\nruncount: 4\n";
        let (_, unknown) = decode_layer::<UserConfig>(content, Path::new("u.yml")).unwrap();
        assert_eq!(unknown.len(), 1);
        match &unknown[0] {
            SprConfigError::UnknownKey { key, line, .. } => {
                assert_eq!(key, "typo_key");
                assert_eq!(*line, 2);
            }
            other => panic!("Expected UnknownKey, got {other:?}"),
        }
    }

    #[test]
    fn empty_document_decodes() {
        let (_, unknown) = decode_layer::<UserConfig>("", Path::new("u.yml")).unwrap();
        assert!(unknown.is_empty());
    }

    #[test]
    fn malformed_yaml_is_parse_error() {
        let result = decode_layer::<UserConfig>("runcount: [1, 2\n", Path::new("u.yml"));
        assert!(matches!(result, Err(SprConfigError::ParseError { .. })));
    }

    #[test]
    fn wrong_type_is_parse_error() {
        let result = decode_layer::<UserConfig>("runcount: lots\n", Path::new("u.yml"));
        assert!(matches!(result, Err(SprConfigError::ParseError { .. })));
    }

    #[test]
    fn find_key_line_skips_nested() {
        let content = "nested:\n  typo: 1\ntypo: 2\n";
        assert_eq!(find_key_line(content, "typo"), 3);
        assert_eq!(find_key_line(content, "missing"), 0);
    }

    #[test]
    fn identity_present() {
        let layer = repo_layer("githubRepoOwner: acme\ngithubRepoName: widgets\n");
        assert!(validate_identity(&layer).is_ok());
    }

    #[test]
    fn owner_checked_before_name() {
        let layer = repo_layer("requireChecks: true\n");
        assert!(matches!(
            validate_identity(&layer),
            Err(SprConfigError::MissingOwner)
        ));
    }

    #[test]
    fn missing_name_with_owner() {
        let layer = repo_layer("githubRepoOwner: acme\n");
        assert!(matches!(
            validate_identity(&layer),
            Err(SprConfigError::MissingRepoName)
        ));
    }

    #[test]
    fn empty_strings_count_as_missing() {
        let layer = repo_layer("githubRepoOwner: \"\"\ngithubRepoName: widgets\n");
        assert!(matches!(
            validate_identity(&layer),
            Err(SprConfigError::MissingOwner)
        ));
    }

    #[test]
    fn whitespace_name_counts_as_missing() {
        let layer = repo_layer("githubRepoOwner: acme\ngithubRepoName: \"  \"\n");
        assert!(matches!(
            validate_identity(&layer),
            Err(SprConfigError::MissingRepoName)
        ));
    }
}
