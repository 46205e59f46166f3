use indexmap::IndexMap;

/// Ordered set of named values substituted into the document templates.
///
/// Insertion order is the order substitutions are applied in, which keeps
/// rendering fully deterministic for a given set of values.
#[derive(Debug, Clone, Default)]
pub struct TemplateContext(IndexMap<String, String>);

impl TemplateContext {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Renders a template by literal substitution of `{{key}}` tokens.
///
/// Only the keys present in the context are replaced; any other `{...}` or
/// `{{...}}` text passes through verbatim. Several generated documents rely
/// on this to keep MQTT topic placeholders such as `{gateway_id}` intact.
///
/// Rendering is a pure function: no I/O, deterministic for a given template
/// and context.
pub fn render(template: &str, context: &TemplateContext) -> String {
    let mut rendered = template.to_string();
    for (key, value) in context.iter() {
        let token = format!("{{{{{}}}}}", key);
        rendered = rendered.replace(&token, value);
    }
    rendered
}
