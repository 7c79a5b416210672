use soroban_sdk::{String, Vec};

use crate::ledger::Ledger;
use crate::storage::{KvStore, WriteSet};
use crate::text;
use crate::types::{IndexKind, LedgerError, Member, Risk, RiskStatus, StoreKey};

impl<S: KvStore> Ledger<S> {
    /// Registers an uncovered risk owned by `owner_id` and links it to the
    /// owner's risk set.
    pub fn register_risk(
        &mut self,
        insured_value: &String,
        model: &String,
        risk_type: &String,
        owner_id: &String,
    ) -> Result<String, LedgerError> {
        let value = text::parse_amount(insured_value)?;
        self.check_tags(&[model, risk_type])?;
        let mut owner: Member = self.member(owner_id)?;

        let mut batch = WriteSet::new(&self.env);
        let id = self.next_id(IndexKind::Risks, &mut batch)?;
        let risk = Risk {
            id: id.clone(),
            value,
            premium: None,
            model: model.clone(),
            risk_type: risk_type.clone(),
            status: RiskStatus::Uncovered,
            owner_id: owner_id.clone(),
            claim_ids: Vec::new(&self.env),
        };
        batch.put(&StoreKey::entry(&id), &risk);
        self.stage_append(IndexKind::Risks, &id, &mut batch)?;

        owner.risk_ids.push_back(id.clone());
        batch.put(&StoreKey::entry(owner_id), &owner);

        batch.commit(&mut self.store)?;
        Ok(id)
    }

    pub fn risk(&self, id: &String) -> Result<Risk, LedgerError> {
        self.entity(IndexKind::Risks, id)
    }
}
