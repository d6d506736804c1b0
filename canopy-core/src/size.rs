use std::io;

use serde::Serialize;

use crate::types::{CanopyError, ParentSnapshot};

/// Result of applying the size guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SizeOutcome {
    /// Serialized length in bytes, measured before any stripping.
    pub bytes: usize,
    /// Whether per-chain token series were removed.
    pub truncated: bool,
}

/// `io::Write` sink that only counts bytes.
struct ByteCounter(usize);

impl io::Write for ByteCounter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0 += buf.len();
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Length in bytes of the JSON serialization of `snapshot`.
///
/// # Errors
/// Returns `CanopyError::Data` if serialization fails.
pub fn serialized_len(snapshot: &ParentSnapshot) -> Result<usize, CanopyError> {
    let mut counter = ByteCounter(0);
    serde_json::to_writer(&mut counter, snapshot)
        .map_err(|e| CanopyError::Data(format!("failed to serialize parent snapshot: {e}")))?;
    Ok(counter.0)
}

/// Null out every chain's `tokens` and `tokens_in_usd` series.
pub fn strip_chain_tokens(snapshot: &mut ParentSnapshot) {
    for chain in snapshot.chain_tvls.values_mut() {
        chain.tokens = None;
        chain.tokens_in_usd = None;
    }
}

/// Drop per-chain token series when the serialized snapshot reaches `limit` bytes.
///
/// All-or-nothing: either every chain loses both token series or nothing
/// changes. Global series, chain tvl, raises and hallmarks are never touched.
///
/// # Errors
/// Returns `CanopyError::Data` if serialization fails.
pub fn enforce_size_limit(
    snapshot: &mut ParentSnapshot,
    limit: usize,
) -> Result<SizeOutcome, CanopyError> {
    let bytes = serialized_len(snapshot)?;
    let truncated = bytes >= limit;
    if truncated {
        #[cfg(feature = "tracing")]
        tracing::warn!(
            parent = %snapshot.parent.name,
            bytes,
            limit,
            "parent snapshot over size limit; dropping per-chain token series"
        );
        strip_chain_tokens(snapshot);
    }
    Ok(SizeOutcome { bytes, truncated })
}
