//! Resource definitions module.
//!
//! Each resource is defined in its own file with its URI, metadata, and the
//! remote source its content is read from.

pub mod all_films;

pub use all_films::AllFilmsResource;

/// Where a resource's content comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceSource {
    /// The full film collection, ordered by episode.
    AllFilms,
}

/// Trait for resource definitions.
///
/// Each resource must implement this trait to provide its metadata and source.
pub trait ResourceDefinition {
    /// The unique URI of the resource.
    const URI: &'static str;

    /// The display name of the resource.
    const NAME: &'static str;

    /// A description of the resource.
    const DESCRIPTION: &'static str;

    /// The MIME type of the resource content.
    const MIME_TYPE: &'static str;

    /// The source read when this resource is requested.
    fn source() -> ResourceSource;
}
