use crate::api::error::LangResult;
use crate::core::doc::Doc;

/// Common pipeline-component interface.
pub trait Pipe {
    /// Component name as it appears in the pipeline config.
    fn name(&self) -> &str;
    /// Token attributes this component sets.
    fn assigns(&self) -> &[&str];
    /// Token attributes this component expects earlier pipes to have set.
    fn requires(&self) -> &[&str] {
        &[]
    }
    /// Annotate the document in place.
    fn annotate(&self, doc: &mut Doc) -> LangResult<()>;
}
