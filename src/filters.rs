//! String transforms exposed to templates as filters.

use cruet::Inflector;
use std::collections::BTreeMap;

/// A pure string transform usable as a template filter.
pub type StringTransform = fn(&str) -> String;

pub fn kebab_case(s: &str) -> String {
    s.to_kebab_case()
}

pub fn snake_case(s: &str) -> String {
    s.to_snake_case()
}

pub fn camel_case(s: &str) -> String {
    s.to_camel_case()
}

pub fn pascal_case(s: &str) -> String {
    s.to_pascal_case()
}

/// Capitalizes every `-` separated piece and joins them: `my-widget` -> `MyWidget`.
///
/// Unlike [`pascal_case`] this only splits on dashes and lowercases the rest of
/// each piece, so `my-HTTP-client` becomes `MyHttpClient`.
pub fn kebab_to_pascal(s: &str) -> String {
    s.split('-')
        .map(|piece| {
            let mut chars = piece.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect::<String>()
                }
                None => String::new(),
            }
        })
        .collect()
}

/// Immutable name -> transform registry handed to the renderer.
#[derive(Clone, Default)]
pub struct FilterRegistry {
    filters: BTreeMap<String, StringTransform>,
}

impl std::fmt::Debug for FilterRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.filters.keys()).finish()
    }
}

impl FilterRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The case conversion filters available to every template.
    pub fn builtin() -> Self {
        Self::new()
            .with("kebab_case", kebab_case)
            .with("snake_case", snake_case)
            .with("camel_case", camel_case)
            .with("pascal_case", pascal_case)
            .with("kebab_to_pascal", kebab_to_pascal)
    }

    /// Registers `transform` under `name`, replacing any previous entry.
    pub fn with<S: Into<String>>(mut self, name: S, transform: StringTransform) -> Self {
        self.filters.insert(name.into(), transform);
        self
    }

    pub fn get(&self, name: &str) -> Option<StringTransform> {
        self.filters.get(name).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, StringTransform)> {
        self.filters.iter().map(|(name, f)| (name.as_str(), *f))
    }
}
