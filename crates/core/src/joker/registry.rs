use super::{register_builtin, Hook, HookLayer, Joker, JokerCall, JokerEffect};
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum JokerError {
    #[error("unknown joker type: {0}")]
    UnknownType(String),
}

/// A registered joker type: its effect and the layer wrapped around it.
pub struct JokerType {
    name: String,
    effect: Box<dyn JokerEffect>,
    layer: Option<Box<dyn HookLayer>>,
}

impl JokerType {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn layer_name(&self) -> Option<&'static str> {
        self.layer.as_ref().map(|layer| layer.name())
    }

    pub fn implements(&self, hook: Hook) -> bool {
        self.effect.hooks().contains(hook)
            || self
                .layer
                .as_ref()
                .is_some_and(|layer| layer.intercepts().contains(hook))
    }

    pub(crate) fn invoke(&self, call: JokerCall<'_, '_>) {
        match &self.layer {
            Some(layer) if layer.intercepts().contains(call.hook) => {
                layer.intercept(call, self.effect.as_ref())
            }
            _ => call.run_own(self.effect.as_ref()),
        }
    }
}

#[derive(Default)]
pub struct JokerRegistry {
    types: HashMap<String, JokerType>,
}

impl JokerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        register_builtin(&mut registry);
        registry
    }

    /// Registers `effect` under `name`, replacing any previous type of that name.
    pub fn register(&mut self, name: &str, effect: impl JokerEffect + 'static) {
        self.insert(name, Box::new(effect), None);
    }

    pub fn register_layered(
        &mut self,
        name: &str,
        effect: impl JokerEffect + 'static,
        layer: impl HookLayer + 'static,
    ) {
        self.insert(name, Box::new(effect), Some(Box::new(layer)));
    }

    fn insert(
        &mut self,
        name: &str,
        effect: Box<dyn JokerEffect>,
        layer: Option<Box<dyn HookLayer>>,
    ) {
        self.types.insert(
            name.to_string(),
            JokerType {
                name: name.to_string(),
                effect,
                layer,
            },
        );
    }

    pub fn get(&self, name: &str) -> Option<&JokerType> {
        self.types.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.types.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn create(&self, name: &str) -> Result<Joker, JokerError> {
        let joker_type = self
            .get(name)
            .ok_or_else(|| JokerError::UnknownType(name.to_string()))?;
        Ok(Joker {
            kind: name.to_string(),
            vars: joker_type.effect.initial_vars(),
        })
    }
}

impl fmt::Debug for JokerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JokerRegistry")
            .field("types", &self.names())
            .finish()
    }
}
