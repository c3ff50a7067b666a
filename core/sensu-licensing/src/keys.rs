//! Store keys and API paths for licensing resources.
//!
//! Keys are POSIX-style paths under [`ROOT`]. When a namespace is involved
//! but no object name is, the key ends with the separator so that a prefix
//! scan over `…/acme/` cannot also match `…/acme-corp/…`.

/// Root of the keyspace.
pub const ROOT: &str = "/sensu.io";

/// Group name of this API.
pub const GROUP_NAME: &str = "licensing";

/// Version of this API.
pub const VERSION: &str = "v2";

/// `GROUP_NAME/VERSION`.
pub const API_VERSION: &str = "licensing/v2";

/// Name of the license resource.
pub const LICENSE_RESOURCE: &str = "license";

/// Path prefix shared by every enterprise licensing key and URI.
pub const API_KEY_PREFIX: &str = "api/enterprise/licensing/v2";

const KEY_SEPARATOR: &str = "/";

/// Builds multi-tenant resource keys.
///
/// The builder is immutable once configured; `build` takes `&self` and can
/// be called from any number of threads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct KeyBuilder {
    resource_name: String,
    namespace: String,
    include_trailing_slash: bool,
}

impl KeyBuilder {
    /// Creates a builder for the given resource with no namespace.
    #[must_use]
    pub fn new(resource_name: impl Into<String>) -> Self {
        Self {
            resource_name: resource_name.into(),
            ..Self::default()
        }
    }

    /// Scopes keys to a namespace.
    #[must_use]
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Always terminates keys with the separator, for listing the
    /// sub-resources of a specific resource.
    #[must_use]
    pub fn with_trailing_slash(mut self) -> Self {
        self.include_trailing_slash = true;
        self
    }

    /// Returns the resource name.
    #[must_use]
    pub fn resource_name(&self) -> &str {
        &self.resource_name
    }

    /// Returns the namespace, empty if unscoped.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Builds a key from the given path segments.
    #[must_use]
    pub fn build(&self, keys: &[&str]) -> String {
        build_key(
            &self.resource_name,
            &self.namespace,
            self.include_trailing_slash,
            keys,
        )
    }
}

/// Joins [`ROOT`], the resource name, the namespace and `keys` into a key.
///
/// Empty components are skipped and the result is cleaned like a POSIX
/// path. A namespaced key with no object name (no keys, or an empty last
/// key) gets a trailing separator; `include_trailing_slash` appends one more.
#[must_use]
pub fn build_key(
    resource_name: &str,
    namespace: &str,
    include_trailing_slash: bool,
    keys: &[&str],
) -> String {
    let mut key = join(
        [ROOT, resource_name, namespace]
            .into_iter()
            .chain(keys.iter().copied()),
    );

    if !namespace.is_empty() && keys.last().is_none_or(|k| k.is_empty()) {
        key.push_str(KEY_SEPARATOR);
    }

    if include_trailing_slash {
        key.push_str(KEY_SEPARATOR);
    }

    key
}

/// Returns the key builder for the license singleton.
#[must_use]
pub fn license_key_builder() -> KeyBuilder {
    KeyBuilder::new(join([API_KEY_PREFIX, LICENSE_RESOURCE]))
}

/// Returns the store key of the license.
#[must_use]
pub fn license_key() -> String {
    license_key_builder().build(&[])
}

/// Returns the URI path of the license.
#[must_use]
pub fn license_uri() -> String {
    join([KEY_SEPARATOR, API_KEY_PREFIX, LICENSE_RESOURCE])
}

/// Joins non-empty elements with the separator and cleans the result.
/// Returns an empty string if every element is empty.
pub(crate) fn join<'a>(elems: impl IntoIterator<Item = &'a str>) -> String {
    let parts: Vec<&str> = elems.into_iter().filter(|e| !e.is_empty()).collect();
    if parts.is_empty() {
        return String::new();
    }
    clean(&parts.join(KEY_SEPARATOR))
}

/// Lexically normalizes a slash-separated path: collapses repeated
/// separators, drops `.` elements, resolves `..` against the preceding
/// element and strips any trailing separator.
pub(crate) fn clean(path: &str) -> String {
    if path.is_empty() {
        return ".".to_string();
    }

    let rooted = path.starts_with(KEY_SEPARATOR);
    let mut out: Vec<&str> = Vec::new();
    for elem in path.split(KEY_SEPARATOR) {
        match elem {
            "" | "." => {}
            ".." => {
                if out.last().is_some_and(|e| *e != "..") {
                    out.pop();
                } else if !rooted {
                    // ".." cannot climb above the root
                    out.push("..");
                }
            }
            elem => out.push(elem),
        }
    }

    let body = out.join(KEY_SEPARATOR);
    if rooted {
        format!("{KEY_SEPARATOR}{body}")
    } else if body.is_empty() {
        ".".to_string()
    } else {
        body
    }
}
