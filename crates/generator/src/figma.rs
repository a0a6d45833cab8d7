//! Figma REST API client and design summarization.

use crate::http::{build_client, endpoint, send_json};
use crate::provider::DesignSource;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use shotcraft_core::{Error, Result};
use std::collections::HashMap;
use std::fmt::Write as _;
use std::time::Duration;
use tracing::debug;

const PROVIDER: &str = "figma";

/// Number of top-level frames listed in a document summary.
const LISTED_FRAMES: usize = 5;

/// URL path markers that precede the file key.
const KEY_MARKERS: [&str; 2] = ["/file/", "/design/"];

/// A request to generate from a Figma design.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FigmaRequest {
    /// Share URL of the Figma file
    pub url: String,
    /// Node to focus on instead of the whole document
    pub node_id: Option<String>,
    /// Access token overriding the configured one
    pub access_token: Option<String>,
}

impl FigmaRequest {
    /// Request the whole document behind `url`.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            node_id: None,
            access_token: None,
        }
    }

    /// Focus on one node.
    #[must_use]
    pub fn with_node_id(mut self, node_id: impl Into<String>) -> Self {
        self.node_id = Some(node_id.into());
        self
    }

    /// Use `token` for this request.
    #[must_use]
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }
}

/// One node of a Figma document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FigmaNode {
    /// Layer name
    #[serde(default)]
    pub name: Option<String>,
    /// Node type, e.g. `FRAME` or `CANVAS`
    #[serde(rename = "type", default)]
    pub node_type: Option<String>,
    /// Child nodes
    #[serde(default)]
    pub children: Vec<FigmaNode>,
}

/// The parts of `GET /files/{key}` the summary uses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FigmaFile {
    /// Document title
    #[serde(default)]
    pub name: Option<String>,
    /// Root node
    #[serde(default)]
    pub document: FigmaNode,
}

/// A fetched design: the file and, when one was requested, a single node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FigmaDesign {
    /// The whole file
    pub file: FigmaFile,
    /// The requested node's document
    pub node: Option<FigmaNode>,
}

impl FigmaDesign {
    /// Plain-text summary handed to the code model.
    #[must_use]
    pub fn describe(&self) -> String {
        let title = self.file.name.as_deref().unwrap_or("Untitled Figma Document");
        let mut description = format!("Figma design titled '{title}'.\n\n");

        if let Some(node) = &self.node {
            let _ = writeln!(
                description,
                "Node '{}' of type {}.",
                node.name.as_deref().unwrap_or("Untitled Node"),
                node_type(node)
            );
            return description;
        }

        let frames = &self.file.document.children;
        let _ = writeln!(
            description,
            "The document contains {} top-level frames/artboards.",
            frames.len()
        );
        for frame in frames.iter().take(LISTED_FRAMES) {
            let _ = writeln!(
                description,
                "- {} ({})",
                frame.name.as_deref().unwrap_or("Untitled Frame"),
                node_type(frame)
            );
        }
        if frames.len() > LISTED_FRAMES {
            let _ = writeln!(
                description,
                "And {} more frames/artboards...",
                frames.len() - LISTED_FRAMES
            );
        }
        description
    }
}

fn node_type(node: &FigmaNode) -> &str {
    node.node_type.as_deref().unwrap_or("UNKNOWN")
}

/// Extract the file key from a Figma share URL.
///
/// The key is the path segment after `/file/` or `/design/`.
///
/// ```
/// use shotcraft_generator::figma::extract_file_key;
///
/// let key = extract_file_key("https://www.figma.com/file/AbC123/Landing?node-id=1-2").unwrap();
/// assert_eq!(key, "AbC123");
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if the URL has no file key.
pub fn extract_file_key(url: &str) -> Result<String> {
    let rest = KEY_MARKERS
        .iter()
        .find_map(|marker| url.split_once(marker).map(|(_, rest)| rest))
        .ok_or_else(|| {
            Error::invalid_input(
                "Invalid Figma URL. Expected format: https://www.figma.com/file/FILE_KEY/...",
            )
        })?;

    let key = rest
        .split(['/', '?', '#'])
        .next()
        .unwrap_or_default();
    if key.is_empty() {
        return Err(Error::invalid_input(format!("Figma URL has no file key: {url}")));
    }
    Ok(key.to_string())
}

#[derive(Debug, Deserialize)]
struct NodesResponse {
    #[serde(default)]
    nodes: HashMap<String, Option<NodeEntry>>,
}

#[derive(Debug, Deserialize)]
struct NodeEntry {
    #[serde(default)]
    document: FigmaNode,
}

/// Client for the Figma REST API.
#[derive(Debug, Clone)]
pub struct FigmaClient {
    client: Client,
    api_base: String,
    default_token: Option<String>,
}

impl FigmaClient {
    /// Create a client; `default_token` is used for requests without their own token.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the HTTP client cannot be built.
    pub fn new(
        api_base: impl Into<String>,
        default_token: Option<String>,
        timeout: Duration,
    ) -> Result<Self> {
        Ok(Self {
            client: build_client(timeout)?,
            api_base: api_base.into(),
            default_token,
        })
    }

    fn token<'a>(&'a self, request: &'a FigmaRequest) -> Result<&'a str> {
        request
            .access_token
            .as_deref()
            .filter(|token| !token.is_empty())
            .or_else(|| self.default_token.as_deref().filter(|token| !token.is_empty()))
            .ok_or_else(|| Error::invalid_input("Figma access token is required"))
    }
}

#[async_trait]
impl DesignSource for FigmaClient {
    async fn fetch(&self, request: &FigmaRequest) -> Result<FigmaDesign> {
        let key = extract_file_key(&request.url)?;
        let token = self.token(request)?;

        let url = endpoint(&self.api_base, &format!("files/{key}"));
        debug!(%url, "Fetching Figma file");
        let file: FigmaFile =
            send_json(PROVIDER, self.client.get(&url).header("X-Figma-Token", token)).await?;

        let Some(node_id) = request.node_id.as_deref() else {
            return Ok(FigmaDesign { file, node: None });
        };

        let url = endpoint(&self.api_base, &format!("files/{key}/nodes"));
        debug!(%url, node_id, "Fetching Figma node");
        let mut nodes: NodesResponse = send_json(
            PROVIDER,
            self.client
                .get(&url)
                .query(&[("ids", node_id)])
                .header("X-Figma-Token", token),
        )
        .await?;

        let entry = nodes.nodes.remove(node_id).flatten().ok_or_else(|| {
            Error::provider(PROVIDER, format!("Node ID {node_id} not found in Figma file"))
        })?;
        Ok(FigmaDesign {
            file,
            node: Some(entry.document),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(name: &str) -> FigmaNode {
        FigmaNode {
            name: Some(name.to_string()),
            node_type: Some("FRAME".to_string()),
            children: Vec::new(),
        }
    }

    #[test]
    fn test_extract_file_key() {
        assert_eq!(
            extract_file_key("https://www.figma.com/file/KEY123/My-Design").unwrap(),
            "KEY123"
        );
        assert_eq!(
            extract_file_key("https://www.figma.com/design/KEY456/Landing?node-id=0-1").unwrap(),
            "KEY456"
        );
        assert_eq!(extract_file_key("https://figma.com/file/ONLY").unwrap(), "ONLY");
    }

    #[test]
    fn test_extract_file_key_invalid() {
        for url in [
            "https://www.figma.com/proto/KEY/x",
            "not a url",
            "https://www.figma.com/file/",
            "https://www.figma.com/file//name",
        ] {
            let err = extract_file_key(url).unwrap_err();
            assert!(matches!(err, Error::InvalidInput { .. }), "url: {url}");
        }
    }

    #[test]
    fn test_describe_document() {
        let design = FigmaDesign {
            file: FigmaFile {
                name: Some("Shop".to_string()),
                document: FigmaNode {
                    children: vec![frame("Home"), frame("Cart")],
                    ..FigmaNode::default()
                },
            },
            node: None,
        };
        assert_eq!(
            design.describe(),
            "Figma design titled 'Shop'.\n\n\
             The document contains 2 top-level frames/artboards.\n\
             - Home (FRAME)\n\
             - Cart (FRAME)\n"
        );
    }

    #[test]
    fn test_describe_lists_at_most_five_frames() {
        let children = (1..=8).map(|i| frame(&format!("Frame {i}"))).collect();
        let design = FigmaDesign {
            file: FigmaFile {
                name: None,
                document: FigmaNode {
                    children,
                    ..FigmaNode::default()
                },
            },
            node: None,
        };
        let text = design.describe();
        assert!(text.starts_with("Figma design titled 'Untitled Figma Document'.\n\n"));
        assert!(text.contains("The document contains 8 top-level frames/artboards.\n"));
        assert!(text.contains("- Frame 5 (FRAME)\n"));
        assert!(!text.contains("Frame 6"));
        assert!(text.ends_with("And 3 more frames/artboards...\n"));
    }

    #[test]
    fn test_describe_node() {
        let design = FigmaDesign {
            file: FigmaFile {
                name: Some("Shop".to_string()),
                document: FigmaNode {
                    children: vec![frame("Home")],
                    ..FigmaNode::default()
                },
            },
            node: Some(FigmaNode::default()),
        };
        assert_eq!(
            design.describe(),
            "Figma design titled 'Shop'.\n\nNode 'Untitled Node' of type UNKNOWN.\n"
        );
    }

    #[test]
    fn test_describe_defaults_for_unnamed_frames() {
        let design = FigmaDesign {
            file: FigmaFile {
                name: Some("Doc".to_string()),
                document: FigmaNode {
                    children: vec![FigmaNode::default()],
                    ..FigmaNode::default()
                },
            },
            node: None,
        };
        assert!(design.describe().contains("- Untitled Frame (UNKNOWN)\n"));
    }

    #[test]
    fn test_file_deserializes_with_missing_fields() {
        let file: FigmaFile = serde_json::from_str(r#"{"name": null, "version": "1"}"#).unwrap();
        assert!(file.name.is_none());
        assert!(file.document.children.is_empty());
    }

    #[test]
    fn test_token_resolution() {
        let client = FigmaClient::new("http://localhost", Some("cfg".to_string()), Duration::from_secs(1))
            .unwrap();
        let own = FigmaRequest::new("u").with_access_token("own");
        assert_eq!(client.token(&own).unwrap(), "own");
        let empty = FigmaRequest::new("u").with_access_token("");
        assert_eq!(client.token(&empty).unwrap(), "cfg");

        let bare = FigmaClient::new("http://localhost", None, Duration::from_secs(1)).unwrap();
        let err = bare.token(&FigmaRequest::new("u")).unwrap_err();
        assert!(matches!(err, Error::InvalidInput { .. }));
    }
}
