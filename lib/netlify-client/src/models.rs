use indexmap::IndexMap;
use manifest::Hash;
use serde::{Deserialize, Serialize};

/// A hosted site.
///
/// `id` is the server-assigned identifier and the only field required to
/// target a site; `name` and `url` are display values that may be absent,
/// either because the server omitted them or because the value was
/// synthesized locally from a bare id (see [`Site::from_id`]).
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Site {
    pub name: Option<String>,
    pub id: String,
    pub url: Option<String>,
}

impl Site {
    /// A site known only by its id, for delete / deploy-by-id operations.
    pub fn from_id(id: impl Into<String>) -> Self {
        Self {
            name: None,
            id: id.into(),
            url: None,
        }
    }
}

/// Request body for site creation. `None` fields are left out of the payload.
#[derive(Clone, Debug, Default, Serialize)]
pub struct SiteProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_domain: Option<String>,
}

pub const DEPLOY_STATE_READY: &str = "ready";

/// Server-side deploy record.
#[derive(Clone, Debug, Deserialize)]
pub struct Deploy {
    pub id: String,

    /// Server-controlled lifecycle state. Treated as opaque except for
    /// [`DEPLOY_STATE_READY`], which signals the deploy is live.
    #[serde(default)]
    pub state: String,

    /// Digests the server does not have stored yet. Only populated on
    /// create-deploy responses.
    #[serde(default)]
    pub required: Vec<Hash>,
}

impl Deploy {
    pub fn is_ready(&self) -> bool {
        self.state == DEPLOY_STATE_READY
    }
}

#[derive(Serialize)]
pub(crate) struct CreateDeployRequest<'a> {
    pub files: &'a IndexMap<String, Hash>,
}
