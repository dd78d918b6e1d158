use parts::part::{Part, PartDescriptor};
use parts::parts::Parts;
use thiserror::Error;
use tracing::trace;

/// An assembly, such as a bicycle, is composed of a size and the parts it is built from.
///
/// Questions about the parts, such as which parts need spares, are answered by the parts collection.
#[derive(Debug, Clone, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Assembly<P: PartDescriptor = Part> {
    size: String,
    parts: Parts<P>,
}

pub type Bicycle = Assembly<Part>;

impl<P: PartDescriptor> Assembly<P> {
    pub fn new(size: String, parts: Parts<P>) -> Self {
        Self {
            size,
            parts,
        }
    }

    pub fn builder() -> AssemblyBuilder<P> {
        AssemblyBuilder::default()
    }

    pub fn size(&self) -> &str {
        &self.size
    }

    pub fn parts(&self) -> &Parts<P> {
        &self.parts
    }

    pub fn spares(&self) -> Vec<&P> {
        self.parts.spares()
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum AssemblyError {
    #[error("An assembly requires a parts collection")]
    MissingParts,
    #[error("An assembly requires a size")]
    MissingSize,
}

/// Collects the components of an [`Assembly`], which may arrive separately.
///
/// Building fails if either the size or the parts were not supplied.
#[derive(Debug)]
pub struct AssemblyBuilder<P: PartDescriptor = Part> {
    size: Option<String>,
    parts: Option<Parts<P>>,
}

impl<P: PartDescriptor> Default for AssemblyBuilder<P> {
    fn default() -> Self {
        Self {
            size: None,
            parts: None,
        }
    }
}

impl<P: PartDescriptor> AssemblyBuilder<P> {
    pub fn size(mut self, size: String) -> Self {
        self.size = Some(size);
        self
    }

    pub fn parts(mut self, parts: Parts<P>) -> Self {
        self.parts = Some(parts);
        self
    }

    pub fn build(self) -> Result<Assembly<P>, AssemblyError> {
        let size = self.size.ok_or(AssemblyError::MissingSize)?;
        let parts = self.parts.ok_or(AssemblyError::MissingParts)?;

        trace!("Building assembly. size: {}, parts: {}", size, parts.len());

        Ok(Assembly::new(size, parts))
    }
}
