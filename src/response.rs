//! Top-level API responses.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::kind::Kind;
use crate::listing::{Listing, Things};
use crate::model::object;
use crate::thing::{Envelope, Thing};
use crate::threading::PostAndComments;

/// One decoded response document
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    /// A page of things (`{"kind": "Listing", ...}`)
    Listing(Listing),

    /// A post page (a two-element array of listings)
    PostAndComments(Box<PostAndComments>),

    /// Comments loaded for a placeholder (`{"json": {"errors": [], "data": {"things": [...]}}}`)
    MoreChildren(Things),

    /// A single enveloped thing
    Thing(Thing),
}

impl Response {
    /// Parse a response from one complete JSON document.
    pub fn parse(data: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(data)?;
        Self::from_value(value)
    }

    /// Classify an already parsed JSON document by its shape.
    ///
    /// A single thing is decoded strictly: a supported kind whose payload
    /// does not decode is an error here, unlike inside a listing.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Array(_) => {
                let (post_listing, comment_listing): (Listing, Listing) =
                    serde_json::from_value(value)?;
                let pc = PostAndComments::from_listings(post_listing, comment_listing)?;
                Ok(Response::PostAndComments(Box::new(pc)))
            }
            Value::Object(map) if map.contains_key("json") => parse_more_children(map),
            Value::Object(map) => match map.get("kind").and_then(Value::as_str) {
                Some(kind) if kind == Kind::Listing.as_str() => {
                    Ok(Response::Listing(serde_json::from_value(Value::Object(map))?))
                }
                Some(_) => {
                    let envelope: Envelope = serde_json::from_value(Value::Object(map))?;
                    Ok(Response::Thing(envelope.decode()?))
                }
                None => Err(Error::Decode(
                    "object response has neither a kind nor a json body".to_string(),
                )),
            },
            other => Err(Error::Decode(format!(
                "expected an object or array response, got {}",
                value_type(&other)
            ))),
        }
    }

    /// Collect the response's typed records.
    ///
    /// A post page yields its post, its top-level comments and its top-level
    /// placeholder. A single unsupported thing yields nothing.
    pub fn into_things(self) -> Things {
        match self {
            Response::Listing(listing) => listing.into_things(),
            Response::MoreChildren(things) => things,
            Response::PostAndComments(pc) => {
                let PostAndComments {
                    post,
                    comments,
                    more,
                } = *pc;
                Things {
                    comments,
                    mores: more.into_iter().collect(),
                    posts: vec![post],
                    ..Default::default()
                }
            }
            Response::Thing(thing) => {
                let mut things = Things::new();
                things.push(thing);
                things
            }
        }
    }
}

#[derive(Deserialize)]
struct MoreChildrenWire {
    #[serde(deserialize_with = "object")]
    json: MoreChildrenBody,
}

#[derive(Deserialize)]
struct MoreChildrenBody {
    #[serde(default)]
    errors: Vec<Value>,
    #[serde(default)]
    data: MoreChildrenData,
}

#[derive(Default, Deserialize)]
struct MoreChildrenData {
    #[serde(default)]
    things: Things,
}

fn parse_more_children(map: Map<String, Value>) -> Result<Response> {
    let wire: MoreChildrenWire = serde_json::from_value(Value::Object(map))?;
    if !wire.json.errors.is_empty() {
        return Err(Error::Api(
            wire.json.errors.iter().map(api_error_message).collect(),
        ));
    }
    Ok(Response::MoreChildren(wire.json.data.things))
}

/// API errors come as `[code, message, field]` arrays.
fn api_error_message(error: &Value) -> String {
    match error {
        Value::Array(parts) => parts
            .iter()
            .filter_map(Value::as_str)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(": "),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn value_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
