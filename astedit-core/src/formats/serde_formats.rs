//! JSON and YAML dumps of the rendered fragment tree
//!
//! Both formats serialize the same [Fragment](crate::render::Fragment) value, so anything
//! reading one can read the other. A tree whose root cannot be rendered dumps as `null`.

use super::registry::{FormatError, Formatter};
use crate::estree::SyntaxTree;
use crate::navigation::FocusPath;
use crate::render::Renderer;

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, tree: &SyntaxTree, focus: &FocusPath) -> Result<String, FormatError> {
        let fragment = Renderer::new(tree).with_focus(focus).render_root();
        serde_json::to_string_pretty(&fragment)
            .map_err(|err| FormatError::SerializationError(err.to_string()))
    }

    fn description(&self) -> &str {
        "Fragment tree as pretty-printed JSON"
    }
}

pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn serialize(&self, tree: &SyntaxTree, focus: &FocusPath) -> Result<String, FormatError> {
        let fragment = Renderer::new(tree).with_focus(focus).render_root();
        serde_yaml::to_string(&fragment)
            .map_err(|err| FormatError::SerializationError(err.to_string()))
    }

    fn description(&self) -> &str {
        "Fragment tree as YAML"
    }
}
