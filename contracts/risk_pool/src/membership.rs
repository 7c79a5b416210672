use soroban_sdk::{String, Vec};

use crate::ledger::Ledger;
use crate::storage::{KvStore, WriteSet};
use crate::text;
use crate::types::{IndexKind, LedgerError, Member, StoreKey};

/// Contact details of a new member.
pub struct MemberProfile {
    pub name: String,
    pub email: String,
    pub contact: String,
    pub home_address: String,
    pub dob: String,
}

impl Member {
    /// Takes `amount` from the member, refusing to go below zero.
    pub(crate) fn debit(&mut self, amount: i128) -> Result<(), LedgerError> {
        let remaining = self
            .tokens
            .checked_sub(amount)
            .ok_or(LedgerError::AmountOverflow)?;
        if remaining < 0 {
            return Err(LedgerError::InsufficientFunds);
        }
        self.tokens = remaining;
        Ok(())
    }
}

impl<S: KvStore> Ledger<S> {
    pub fn register_member(
        &mut self,
        profile: MemberProfile,
        tokens: &String,
    ) -> Result<String, LedgerError> {
        self.check_tags(&[
            &profile.name,
            &profile.email,
            &profile.contact,
            &profile.home_address,
            &profile.dob,
        ])?;
        let tokens = text::parse_amount(tokens)?;

        let mut batch = WriteSet::new(&self.env);
        let id = self.next_id(IndexKind::Members, &mut batch)?;
        let member = Member {
            id: id.clone(),
            name: profile.name,
            email: profile.email,
            contact: profile.contact,
            home_address: profile.home_address,
            dob: profile.dob,
            risk_ids: Vec::new(&self.env),
            tokens,
        };

        batch.put(&StoreKey::entry(&id), &member);
        self.stage_append(IndexKind::Members, &id, &mut batch)?;
        batch.commit(&mut self.store)?;
        Ok(id)
    }

    pub fn member(&self, id: &String) -> Result<Member, LedgerError> {
        self.entity(IndexKind::Members, id)
    }
}
