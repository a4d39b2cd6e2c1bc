//! User actions that cross the network.
//!
//! Each action resolves to a [`RequestState`]. Element state only changes on
//! success; a failure reports its reason and leaves the design untouched.

use serde::Serialize;
use teestudio_core::{ElementId, View};
use teestudio_designer::{DesignerState, RenderBridge};
use teestudio_settings::ServiceSettings;

use crate::background_removal::{apply_background_removal, BackgroundRemover};
use crate::order_context::{OrderContext, OrderContextSink};
use crate::request::RequestState;
use crate::upload::RasterUploader;

/// A view that was exported, uploaded and announced to the order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PublishedDesign {
    pub view: View,
    pub file_id: String,
    pub public_url: String,
}

/// Removes the background of the selected image in place.
pub async fn remove_selected_background(
    state: &mut DesignerState,
    remover: &dyn BackgroundRemover,
) -> RequestState<ElementId> {
    let view = state.active_view();
    let Some(image) = state.selected_image() else {
        return RequestState::Failed("No image selected".to_string());
    };
    let id = image.id.clone();
    let (source, mime) = (image.source.clone(), image.mime.clone());

    tracing::info!(view = %view, id = %id, "Removing background");
    let outcome = RequestState::from_result(remover.remove_background(&source, &mime).await);
    let result = apply_background_removal(state, view, &id, outcome);
    match &result {
        RequestState::Succeeded(_) => tracing::info!(id = %id, "Background removed successfully"),
        RequestState::Failed(reason) => tracing::error!(id = %id, "Background removal failed: {}", reason),
        RequestState::Pending => {}
    }
    result
}

/// Exports `view`, uploads the PNG and posts the order context.
///
/// The active view is restored by the export whatever the outcome.
pub async fn publish_view(
    state: &mut DesignerState,
    bridge: &mut RenderBridge,
    uploader: &dyn RasterUploader,
    sink: &dyn OrderContextSink,
    settings: &ServiceSettings,
    view: View,
) -> RequestState<PublishedDesign> {
    let artifact = match bridge.export_view(state, view).await {
        Ok(artifact) => artifact,
        Err(e) => return failed(view, e),
    };

    let uploaded = match uploader.upload(&artifact.file_name, artifact.png).await {
        Ok(uploaded) => uploaded,
        Err(e) => return failed(view, e),
    };

    let context = OrderContext::for_file(settings, &uploaded.file_id);
    if let Err(e) = sink.notify(&context).await {
        return failed(view, e);
    }

    tracing::info!(view = %view, url = %uploaded.public_url, "Design uploaded successfully");
    RequestState::Succeeded(PublishedDesign {
        view,
        file_id: uploaded.file_id,
        public_url: uploaded.public_url,
    })
}

fn failed<T>(view: View, err: impl std::fmt::Display) -> RequestState<T> {
    let reason = format!("{} upload failed: {}", view, err);
    tracing::error!("{}", reason);
    RequestState::Failed(reason)
}
