//! # TeeStudio Services
//!
//! Network collaborators of the editor, each behind an async trait so the
//! placement model can be driven without a network:
//!
//! - **Background removal**: replaces an image's pixels in place
//! - **Raster upload**: stores an exported PNG on a public CDN
//! - **Order context**: tells the shop which file belongs to the order
//!
//! Results are surfaced as [`RequestState`] values. Failures are terminal
//! for the action and never retried.

pub mod background_removal;
pub mod client;
pub mod order_context;
pub mod request;
pub mod upload;
pub mod workflow;

pub use background_removal::{apply_background_removal, BackgroundRemover, RemoveBgClient};
pub use client::http_client;
pub use order_context::{OrderContext, OrderContextClient, OrderContextSink};
pub use request::RequestState;
pub use upload::{RasterUploader, UploadcareClient, UploadedFile};
pub use workflow::{publish_view, remove_selected_background, PublishedDesign};
