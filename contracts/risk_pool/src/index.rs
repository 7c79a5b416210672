use soroban_sdk::{String, Vec};

use crate::ledger::Ledger;
use crate::storage::{KvStore, WriteSet};
use crate::types::{IndexKind, LedgerError, StoreKey};

impl IndexKind {
    pub const ALL: [IndexKind; 5] = [
        IndexKind::Risks,
        IndexKind::Members,
        IndexKind::Claims,
        IndexKind::Insurers,
        IndexKind::Groups,
    ];

    pub fn index_key(&self) -> StoreKey {
        StoreKey::Index(*self)
    }

    pub fn seq_key(&self) -> StoreKey {
        StoreKey::Sequence(*self)
    }

    pub fn id_prefix(&self) -> &'static str {
        match self {
            IndexKind::Risks => "rid",
            IndexKind::Members => "uid",
            IndexKind::Claims => "cid",
            IndexKind::Insurers => "ins",
            IndexKind::Groups => "grp",
        }
    }

    /// Error reported when an id of this kind does not resolve.
    pub fn not_found(&self) -> LedgerError {
        match self {
            IndexKind::Risks => LedgerError::RiskNotFound,
            IndexKind::Members => LedgerError::MemberNotFound,
            IndexKind::Claims => LedgerError::ClaimNotFound,
            IndexKind::Insurers => LedgerError::InsurerNotFound,
            IndexKind::Groups => LedgerError::GroupNotFound,
        }
    }
}

impl<S: KvStore> Ledger<S> {
    /// Ids of `kind` in creation order.
    pub fn index(&self, kind: IndexKind) -> Result<Vec<String>, LedgerError> {
        Ok(self
            .fetch(&kind.index_key())?
            .unwrap_or(Vec::new(&self.env)))
    }

    /// Stages `id` at the end of the `kind` index. Duplicates are not checked.
    pub(crate) fn stage_append(
        &self,
        kind: IndexKind,
        id: &String,
        batch: &mut WriteSet,
    ) -> Result<(), LedgerError> {
        let mut ids = self.index(kind)?;
        ids.push_back(id.clone());
        batch.put(&kind.index_key(), &ids);
        Ok(())
    }
}
