use std::cell::Cell;

/// Token held by one issued list fetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchToken(u64);

/// Monotonic sequencer for list fetches.
///
/// A response may be applied only while its token is still the newest one
/// issued. Anything older is stale and must be dropped regardless of arrival
/// order, so a slow early request can never clobber the result of a newer
/// one.
#[derive(Debug, Default)]
pub struct FetchSequencer {
    issued: Cell<u64>,
}

impl FetchSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> FetchToken {
        let next = self.issued.get() + 1;
        self.issued.set(next);
        FetchToken(next)
    }

    pub fn is_current(&self, token: FetchToken) -> bool {
        self.issued.get() == token.0
    }
}
