use soroban_sdk::String;

use crate::ledger::Ledger;
use crate::storage::{KvStore, WriteSet};
use crate::text;
use crate::types::{IndexKind, Insurer, LedgerError, StoreKey};

impl Insurer {
    pub(crate) fn credit(&mut self, amount: i128) -> Result<(), LedgerError> {
        self.tokens = self
            .tokens
            .checked_add(amount)
            .ok_or(LedgerError::AmountOverflow)?;
        Ok(())
    }
}

impl<S: KvStore> Ledger<S> {
    pub fn register_insurer(&mut self, name: &String, tokens: &String) -> Result<String, LedgerError> {
        self.check_tags(&[name])?;
        let tokens = text::parse_amount(tokens)?;

        let mut batch = WriteSet::new(&self.env);
        let id = self.next_id(IndexKind::Insurers, &mut batch)?;
        let insurer = Insurer {
            id: id.clone(),
            name: name.clone(),
            tokens,
        };

        batch.put(&StoreKey::entry(&id), &insurer);
        self.stage_append(IndexKind::Insurers, &id, &mut batch)?;
        batch.commit(&mut self.store)?;
        Ok(id)
    }

    pub fn insurer(&self, id: &String) -> Result<Insurer, LedgerError> {
        self.entity(IndexKind::Insurers, id)
    }

    /// Running total of administrative fees.
    pub fn admin_fee_balance(&self) -> Result<i128, LedgerError> {
        self.fetch(&StoreKey::AdminFee)?
            .ok_or(LedgerError::NotInitialized)
    }

    pub(crate) fn stage_admin_fee(
        &self,
        amount: i128,
        batch: &mut WriteSet,
    ) -> Result<(), LedgerError> {
        let balance = self
            .admin_fee_balance()?
            .checked_add(amount)
            .ok_or(LedgerError::AmountOverflow)?;
        batch.put(&StoreKey::AdminFee, &balance);
        Ok(())
    }
}
