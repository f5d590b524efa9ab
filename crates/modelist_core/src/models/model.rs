use serde_json::Number;

/// Shown in place of a model id the provider did not report.
pub const MISSING_ID: &str = "N/A";

/// Shown in place of an owner the provider did not report.
pub const UNKNOWN_OWNER: &str = "Unknown";

/// A single entry of a provider's model listing.
///
/// Every field is optional on the wire, so absence is kept here and the
/// defaults are resolved by the accessors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Model {
    pub id: Option<String>,
    pub owned_by: Option<String>,
    /// Kept as the provider sent it; some report floats or values past `i64`.
    pub created: Option<Number>,
}

impl Model {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    pub fn owned_by(mut self, owner: impl Into<String>) -> Self {
        self.owned_by = Some(owner.into());
        self
    }

    pub fn created_at(mut self, created: i64) -> Self {
        self.created = Some(Number::from(created));
        self
    }

    /// The id as printed, or [`MISSING_ID`].
    pub fn display_id(&self) -> &str {
        self.id.as_deref().unwrap_or(MISSING_ID)
    }

    /// The id used for ordering. A missing id orders as the empty string.
    pub fn sort_key(&self) -> &str {
        self.id.as_deref().unwrap_or("")
    }

    pub fn owner(&self) -> &str {
        self.owned_by.as_deref().unwrap_or(UNKNOWN_OWNER)
    }

    /// Creation timestamp in seconds, `0` when unknown.
    pub fn created(&self) -> Number {
        self.created.clone().unwrap_or_else(|| Number::from(0))
    }
}

/// Sorts models ascending by id. The sort is stable, so entries with equal
/// ids keep the order the provider returned them in.
pub fn sort_by_id(models: &mut [Model]) {
    models.sort_by(|a, b| a.sort_key().cmp(b.sort_key()));
}
