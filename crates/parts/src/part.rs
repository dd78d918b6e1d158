/// The capabilities required of anything that can be used as a part of an assembly.
///
/// [`Part`] is the usual implementation, but any type providing these three accessors can be stored in
/// a [`crate::parts::Parts`] collection.
pub trait PartDescriptor {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    /// `true` if a spare should be carried for this part.
    fn needs_spare(&self) -> bool;
}

#[derive(Debug, Clone)]
#[derive(Hash, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Part {
    name: String,
    description: String,
    #[serde(default = "default_needs_spare")]
    needs_spare: bool,
}

fn default_needs_spare() -> bool {
    true
}

impl Part {
    /// Creates a part that needs a spare.
    pub fn new(name: String, description: String) -> Self {
        Self::with_needs_spare(name, description, default_needs_spare())
    }

    pub fn with_needs_spare(name: String, description: String, needs_spare: bool) -> Self {
        Self {
            name,
            description,
            needs_spare,
        }
    }
}

impl PartDescriptor for Part {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn needs_spare(&self) -> bool {
        self.needs_spare
    }
}

#[cfg(feature = "testing")]
impl Default for Part {
    fn default() -> Self {
        Self {
            name: "Default Name".to_string(),
            description: "Default Description".to_string(),
            needs_spare: true,
        }
    }
}
