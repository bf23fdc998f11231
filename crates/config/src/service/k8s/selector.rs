//! Label selector composition.
//!
//! Ownership is enforced only client side: every list issued through [`super::K8s`] starts with
//! [`DEFAULT_LABEL_SELECTORS`], and objects written through it carry the matching label. Anything
//! touching the api server directly bypasses that isolation.
use higress_model::constants::{self, LABEL_SELECTOR_EQUALS, LABEL_SELECTOR_SEPARATOR};
use lazy_static::lazy_static;

lazy_static! {
    /// Selects the objects the console manages.
    pub static ref DEFAULT_LABEL_SELECTORS: String = build_label_selector(constants::RESOURCE_DEFINER_KEY, constants::RESOURCE_DEFINER_VALUE);
}

pub fn build_label_selector(key: &str, value: &str) -> String {
    format!("{key}{LABEL_SELECTOR_EQUALS}{value}")
}

/// AND-combine selector fragments, keeping their order. No fragment selects everything.
pub fn join_label_selectors<S: AsRef<str>>(selectors: &[S]) -> String {
    selectors.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(LABEL_SELECTOR_SEPARATOR)
}

pub fn build_domain_label_selector(domain: &str) -> String {
    build_label_selector(constants::DOMAIN_LABEL_KEY, domain)
}

/// `field=value`, same shape as a label fragment but sent as a field selector.
pub fn build_field_selector(field: &str, value: &str) -> String {
    build_label_selector(field, value)
}

/// The ownership fragment followed by `extra`.
pub fn owned_label_selector<S: AsRef<str>>(extra: &[S]) -> String {
    let mut selectors = Vec::with_capacity(extra.len() + 1);
    selectors.push(DEFAULT_LABEL_SELECTORS.as_str());
    selectors.extend(extra.iter().map(AsRef::as_ref));
    join_label_selectors(&selectors)
}

/// Progressive narrowing of a wasm plugin listing.
///
/// Absent or empty values are skipped, never sent as `key=`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WasmPluginQuery {
    pub name: Option<String>,
    pub version: Option<String>,
    pub built_in: Option<bool>,
}

impl WasmPluginQuery {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn by_version(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            version: Some(version.into()),
            built_in: None,
        }
    }

    pub fn with_built_in(mut self, built_in: bool) -> Self {
        self.built_in = Some(built_in);
        self
    }

    /// The narrowing fragments, without the ownership fragment.
    pub fn fragments(&self) -> Vec<String> {
        let mut selectors = Vec::new();
        if let Some(name) = self.name.as_deref().filter(|n| !n.is_empty()) {
            selectors.push(build_label_selector(constants::WASM_PLUGIN_NAME_KEY, name));
        }
        if let Some(version) = self.version.as_deref().filter(|v| !v.is_empty()) {
            selectors.push(build_label_selector(constants::WASM_PLUGIN_VERSION_KEY, version));
        }
        if let Some(built_in) = self.built_in {
            selectors.push(build_label_selector(constants::WASM_PLUGIN_BUILT_IN_KEY, &built_in.to_string()));
        }
        selectors
    }

    pub fn label_selector(&self) -> String {
        owned_label_selector(&self.fragments())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_build_label_selector() {
        assert_eq!(build_label_selector("app", "httpbin"), "app=httpbin");
        assert_eq!(*DEFAULT_LABEL_SELECTORS, "higress.io/resource-definer=higress");
        assert_eq!(build_domain_label_selector("example.com"), "higress.io/domain=example.com");
    }

    #[test]
    fn test_join_label_selectors() {
        let fragments = ["a=1", "b=2", "c=3"];
        let joined = join_label_selectors(&fragments);
        assert_eq!(joined, "a=1,b=2,c=3");
        assert_eq!(joined.split(LABEL_SELECTOR_SEPARATOR).collect::<Vec<_>>(), fragments);
        assert_eq!(join_label_selectors(&["a=1"]), "a=1");
        assert_eq!(join_label_selectors::<&str>(&[]), "");
    }

    #[test]
    fn test_owned_label_selector() {
        assert_eq!(owned_label_selector::<&str>(&[]), "higress.io/resource-definer=higress");
        assert_eq!(
            owned_label_selector(&[build_domain_label_selector("example.com")]),
            "higress.io/resource-definer=higress,higress.io/domain=example.com"
        );
    }

    #[test]
    fn test_wasm_plugin_query() {
        assert_eq!(WasmPluginQuery::all().label_selector(), "higress.io/resource-definer=higress");
        assert_eq!(
            WasmPluginQuery::by_name("foo").label_selector(),
            "higress.io/resource-definer=higress,higress.io/wasm-plugin-name=foo"
        );
        assert_eq!(
            WasmPluginQuery::by_version("foo", "1.0.0").label_selector(),
            "higress.io/resource-definer=higress,higress.io/wasm-plugin-name=foo,higress.io/wasm-plugin-version=1.0.0"
        );
        // version absent: three fragments, no empty `version=`
        let selector = WasmPluginQuery::by_name("foo").with_built_in(true).label_selector();
        assert_eq!(selector, "higress.io/resource-definer=higress,higress.io/wasm-plugin-name=foo,higress.io/wasm-plugin-built-in=true");
        assert_eq!(selector.split(',').count(), 3);

        let query = WasmPluginQuery {
            name: Some(String::new()),
            version: Some(String::new()),
            built_in: Some(false),
        };
        assert_eq!(query.label_selector(), "higress.io/resource-definer=higress,higress.io/wasm-plugin-built-in=false");
        assert!(WasmPluginQuery::all().fragments().is_empty());
    }
}
