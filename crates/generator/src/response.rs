//! Parsing of code model output into component descriptors.
//!
//! Models rarely answer in exactly the requested format. Parsing is layered,
//! first hit wins:
//! 1. A fenced `json` block, else the outermost `{ ... }` span, as JSON
//! 2. Fenced `typescript`, `html` and `scss` blocks plus a
//!    `component name: <name>` line
//! 3. A placeholder component carrying an error comment in each file
//!
//! A malformed fenced `json` block goes straight to the placeholder. A brace
//! span that is not JSON (component code in prose often has braces) falls
//! through to the fenced-block step.
//!
//! Parsing never fails: whatever the model says, at least one component
//! comes out.

use regex::Regex;
use serde::Deserialize;
use shotcraft_core::{ComponentDescriptor, RouteEntry};
use std::sync::LazyLock;
use tracing::{debug, warn};

/// Name of the placeholder produced when nothing can be parsed.
pub const ERROR_COMPONENT_NAME: &str = "error-component";

const ERROR_MESSAGE: &str = "Error parsing AI response";

static JSON_FENCE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"```json\s*([\s\S]*?)\s*```").ok());
static TYPESCRIPT_FENCE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"```typescript\s*([\s\S]*?)\s*```").ok());
static HTML_FENCE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"```html\s*([\s\S]*?)\s*```").ok());
static SCSS_FENCE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"```scss\s*([\s\S]*?)\s*```").ok());
static COMPONENT_NAME_LINE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)component name:\s*([a-z0-9-]+)").ok());

/// Components and routes extracted from one model response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult {
    /// Generated components; never empty
    pub components: Vec<ComponentDescriptor>,
    /// Requested routes, when the model supplied any
    pub routing: Option<Vec<RouteEntry>>,
}

impl GenerationResult {
    fn single(component: ComponentDescriptor) -> Self {
        Self {
            components: vec![component],
            routing: None,
        }
    }

    /// Whether the response could not be parsed at all.
    #[must_use]
    pub fn is_error_placeholder(&self) -> bool {
        self.routing.is_none()
            && self.components.len() == 1
            && self.components[0].name == ERROR_COMPONENT_NAME
            && self.components[0].source.starts_with("// Error parsing AI response")
    }
}

/// JSON body of a response, in either the multi-component or the legacy shape.
#[derive(Debug, Default, Deserialize)]
struct ResponseBody {
    #[serde(default)]
    components: Option<Vec<ComponentDescriptor>>,
    #[serde(default)]
    routing: Option<Vec<RouteEntry>>,
    #[serde(default)]
    component_name: Option<String>,
    #[serde(default)]
    component_ts: Option<String>,
    #[serde(default)]
    component_html: Option<String>,
    #[serde(default)]
    component_scss: Option<String>,
}

impl ResponseBody {
    fn into_result(self, fallback_name: &str) -> GenerationResult {
        let components = self.components.unwrap_or_default();
        if components.is_empty() {
            return GenerationResult::single(ComponentDescriptor::new(
                self.component_name.unwrap_or_else(|| fallback_name.to_string()),
                self.component_ts.unwrap_or_default(),
                self.component_html.unwrap_or_default(),
                self.component_scss.unwrap_or_default(),
            ));
        }
        GenerationResult {
            components,
            routing: self.routing,
        }
    }
}

/// Parse a code model response.
///
/// `fallback_name` names the component when a single-component answer
/// carries no name.
#[must_use]
pub fn parse_response(text: &str, fallback_name: &str) -> GenerationResult {
    if let Some(fenced) = capture(&JSON_FENCE, text) {
        return match parse_json(fenced, fallback_name) {
            Ok(result) => result,
            Err(e) => {
                warn!(error = %e, "Model response contains a malformed JSON block");
                error_placeholder(Some(&e.to_string()))
            }
        };
    }

    let json_error = match outermost_object(text).map(|json| parse_json(json, fallback_name)) {
        Some(Ok(result)) => return result,
        Some(Err(e)) => Some(e),
        None => None,
    };

    if let Some(component) = parse_fenced_files(text, fallback_name) {
        debug!(name = %component.name, "Parsed fenced-block model response");
        return GenerationResult::single(component);
    }

    warn!("Model response contains no recognizable code");
    error_placeholder(json_error.map(|e| e.to_string()).as_deref())
}

fn parse_json(json: &str, fallback_name: &str) -> serde_json::Result<GenerationResult> {
    let result = serde_json::from_str::<ResponseBody>(json)?.into_result(fallback_name);
    debug!(
        components = result.components.len(),
        routes = result.routing.as_ref().map_or(0, Vec::len),
        "Parsed JSON model response"
    );
    Ok(result)
}

/// The span from the first `{` to the last `}`.
fn outermost_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (start < end).then(|| &text[start..=end])
}

fn parse_fenced_files(text: &str, fallback_name: &str) -> Option<ComponentDescriptor> {
    let source = capture(&TYPESCRIPT_FENCE, text);
    let template = capture(&HTML_FENCE, text);
    let style = capture(&SCSS_FENCE, text);
    let name = capture(&COMPONENT_NAME_LINE, text);

    if source.is_none() && template.is_none() && style.is_none() && name.is_none() {
        return None;
    }
    Some(ComponentDescriptor::new(
        name.unwrap_or(fallback_name),
        source.unwrap_or_default(),
        template.unwrap_or_default(),
        style.unwrap_or_default(),
    ))
}

fn capture<'t>(regex: &LazyLock<Option<Regex>>, text: &'t str) -> Option<&'t str> {
    regex
        .as_ref()?
        .captures(text)?
        .get(1)
        .map(|group| group.as_str().trim())
}

fn error_placeholder(detail: Option<&str>) -> GenerationResult {
    let message = detail.map_or_else(
        || ERROR_MESSAGE.to_string(),
        |detail| format!("{ERROR_MESSAGE}: {detail}"),
    );
    GenerationResult::single(ComponentDescriptor::new(
        ERROR_COMPONENT_NAME,
        format!("// {message}"),
        format!("<!-- {message} -->"),
        format!("/* {message} */"),
    ))
}
