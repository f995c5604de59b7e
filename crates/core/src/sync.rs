//! Batch driver: one pass over the watchlist, best-effort per record.

use tracing::{debug, warn};

use crate::error::SyncError;
use crate::lookup::ProviderRegistry;
use crate::mapping::map_media_info;
use crate::workspace::Workspace;

/// Records fetched per run. One page only; a watchlist that outgrows this
/// needs a pagination loop here.
pub const PAGE_SIZE: u32 = 100;

/// Process one page of records. Per-record problems (malformed rows, missing
/// providers, failed lookups) are logged and skipped; a failed query or
/// write aborts the whole run.
pub fn run(workspace: &dyn Workspace, registry: &ProviderRegistry) -> Result<(), SyncError> {
    let records = workspace.query(PAGE_SIZE)?;
    for record in records {
        if !record.is_page() {
            debug!(id = %record.id, "skipping non-page object");
            continue;
        }
        if record.titles.len() != 1 {
            warn!(id = %record.id, "bad number of titles: {}", record.titles.len());
            continue;
        }
        let title = &record.titles[0];
        if record.skip {
            debug!(title = %title, "skip flag set");
            continue;
        }
        let provider = match record.media_kind().and_then(|k| registry.provider_for(k)) {
            Some(p) => p,
            None => {
                warn!(title = %title, "no media provider found");
                continue;
            }
        };
        let info = match provider.fetch(title) {
            Ok(info) => info,
            Err(e) => {
                warn!(title = %title, provider = provider.name(), "lookup failed: {}", e);
                continue;
            }
        };
        let mut update = map_media_info(&info);
        update.cover_url = info.image.clone();
        workspace.update(&record.id, &update)?;
        debug!(title = %title, "record updated");
    }
    Ok(())
}
