use soroban_sdk::String;

use crate::ledger::Ledger;
use crate::storage::{KvStore, WriteSet};
use crate::text;
use crate::types::{Claim, IndexKind, LedgerError, StoreKey};

impl<S: KvStore> Ledger<S> {
    /// Records a claim of `claimed_amount` against a risk. The amount may not
    /// exceed the risk's insured value. Settlement is not performed here.
    pub fn file_claim(
        &mut self,
        risk_id: &String,
        claimed_amount: &String,
        claim_type: &String,
        now: u64,
    ) -> Result<String, LedgerError> {
        let claimed = text::parse_amount(claimed_amount)?;
        self.check_tags(&[claim_type])?;
        let mut risk = self.risk(risk_id)?;
        if claimed > risk.value {
            return Err(LedgerError::ClaimExceedsRiskValue);
        }

        let mut batch = WriteSet::new(&self.env);
        let id = self.next_id(IndexKind::Claims, &mut batch)?;
        let claim = Claim {
            id: id.clone(),
            risk_id: risk_id.clone(),
            claimed,
            settled: 0,
            timestamp: now,
            claim_type: claim_type.clone(),
        };
        batch.put(&StoreKey::entry(&id), &claim);
        self.stage_append(IndexKind::Claims, &id, &mut batch)?;

        risk.claim_ids.push_back(id.clone());
        batch.put(&StoreKey::entry(risk_id), &risk);

        batch.commit(&mut self.store)?;
        Ok(id)
    }

    pub fn claim(&self, id: &String) -> Result<Claim, LedgerError> {
        self.entity(IndexKind::Claims, id)
    }
}
