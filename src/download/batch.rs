//! Building transfer batches from catalog posts.

use std::collections::HashSet;
use std::path::Path;

use crate::api::client::PartyClient;
use crate::api::types::{FileRef, PostRecord};
use crate::download::engine::TransferRequest;
use crate::fs::naming::sanitize_filename;

/// Collect the union of each post's primary file and attachments, in post
/// order, deduplicated by server path (first occurrence wins).
pub fn collect_file_refs(posts: &[PostRecord]) -> Vec<FileRef> {
    let mut seen = HashSet::new();
    let mut refs = Vec::new();

    for post in posts {
        for file in post.file.iter().chain(post.attachments.iter()) {
            if seen.insert(file.path.clone()) {
                refs.push(file.clone());
            }
        }
    }

    refs
}

/// Resolve file refs into transfer requests rooted at `output_dir`.
///
/// Refs whose display name fails sanitization are skipped with a warning and
/// never become requests.
pub fn build_transfer_requests(
    client: &PartyClient,
    refs: &[FileRef],
    output_dir: &Path,
) -> Vec<TransferRequest> {
    refs.iter()
        .filter_map(|file| {
            let name = match sanitize_filename(&file.name) {
                Ok(name) => name,
                Err(e) => {
                    tracing::warn!("Skipping file '{}': {}", file.name, e);
                    return None;
                }
            };

            Some(TransferRequest {
                source_url: client.download_url(&file.path),
                destination: output_dir.join(name),
            })
        })
        .collect()
}
