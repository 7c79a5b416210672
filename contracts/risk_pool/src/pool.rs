use soroban_sdk::{String, Vec};

use crate::ledger::Ledger;
use crate::split;
use crate::storage::{KvStore, WriteSet};
use crate::text;
use crate::types::{
    Enrollment, Group, GroupInfo, GroupStatus, IndexKind, Insurer, LedgerError, Member, Risk,
    RiskStatus, StoreKey,
};

const SECONDS_PER_DAY: u64 = 86_400;

/// Whole days from `earlier` to `later`, truncated toward zero.
fn days_between(later: u64, earlier: u64) -> i128 {
    (later as i128 - earlier as i128) / SECONDS_PER_DAY as i128
}

impl Group {
    /// Premium charged for joining at `now`: the group rate scaled by the share
    /// of whole days left in the group's term. Joining before the term starts
    /// costs the full rate; joining after it ends costs nothing.
    pub fn prorated_premium(&self, now: u64) -> Result<i128, LedgerError> {
        let term = days_between(self.end_at, self.created_at);
        if term <= 0 {
            return Ok(self.premium_rate);
        }

        let remaining = days_between(self.end_at, now).clamp(0, term);
        self.premium_rate
            .checked_mul(remaining)
            .map(|scaled| scaled / term)
            .ok_or(LedgerError::AmountOverflow)
    }

    pub(crate) fn credit(&mut self, amount: i128) -> Result<(), LedgerError> {
        self.pool_balance = self
            .pool_balance
            .checked_add(amount)
            .ok_or(LedgerError::AmountOverflow)?;
        Ok(())
    }
}

impl<S: KvStore> Ledger<S> {
    pub fn create_group(
        &mut self,
        name: &String,
        risk_type: &String,
        insurer_id: &String,
        premium_rate: &String,
        created_at: u64,
        end_at: u64,
    ) -> Result<String, LedgerError> {
        self.check_tags(&[name, risk_type])?;
        let premium_rate = text::parse_amount(premium_rate)?;
        if end_at < created_at {
            return Err(LedgerError::InvalidArgument);
        }
        self.insurer(insurer_id)?;

        let mut batch = WriteSet::new(&self.env);
        let id = self.next_id(IndexKind::Groups, &mut batch)?;
        let group = Group {
            id: id.clone(),
            name: name.clone(),
            risk_ids: Vec::new(&self.env),
            risk_type: risk_type.clone(),
            status: GroupStatus::Open,
            pool_balance: 0,
            insurer_id: insurer_id.clone(),
            created_at,
            end_at,
            premium_rate,
        };

        batch.put(&StoreKey::entry(&id), &group);
        self.stage_append(IndexKind::Groups, &id, &mut batch)?;
        batch.commit(&mut self.store)?;
        Ok(id)
    }

    pub fn group(&self, id: &String) -> Result<Group, LedgerError> {
        self.entity(IndexKind::Groups, id)
    }

    /// Enrolls an uncovered risk into a group, charging the owner the prorated
    /// premium and splitting it between the pool, the insurer and the admin fee
    /// account. All five records change together or not at all.
    pub fn enroll_risk(
        &mut self,
        risk_id: &String,
        group_id: &String,
        now: u64,
    ) -> Result<Enrollment, LedgerError> {
        let mut risk: Risk = self.risk(risk_id)?;
        let mut member: Member = self.member(&risk.owner_id)?;
        let mut group: Group = self.group(group_id)?;
        let mut insurer: Insurer = self.insurer(&group.insurer_id)?;

        let headroom = member
            .tokens
            .checked_sub(group.premium_rate)
            .ok_or(LedgerError::AmountOverflow)?;
        if headroom <= 0 {
            return Err(LedgerError::InsufficientFunds);
        }
        if risk.risk_type != group.risk_type {
            return Err(LedgerError::RiskTypeMismatch);
        }
        if risk.status == RiskStatus::Covered {
            return Err(LedgerError::RiskAlreadyCovered);
        }

        let premium = group.prorated_premium(now)?;
        let shares = split::split_percentages(group.risk_ids.len() as i64)?;
        let (pool_amount, insurer_amount, admin_amount) = shares.apportion(premium)?;

        risk.status = RiskStatus::Covered;
        risk.premium = Some(premium);
        group.risk_ids.push_back(risk_id.clone());
        group.credit(pool_amount)?;
        member.debit(premium)?;
        insurer.credit(insurer_amount)?;

        let mut batch = WriteSet::new(&self.env);
        batch.put(&StoreKey::entry(risk_id), &risk);
        batch.put(&StoreKey::entry(group_id), &group);
        batch.put(&StoreKey::entry(&risk.owner_id), &member);
        batch.put(&StoreKey::entry(&group.insurer_id), &insurer);
        self.stage_admin_fee(admin_amount, &mut batch)?;
        batch.commit(&mut self.store)?;

        Ok(Enrollment {
            risk_id: risk_id.clone(),
            group_id: group_id.clone(),
            premium,
            pool_amount,
            insurer_amount,
            admin_amount,
        })
    }

    pub fn group_info(&self, group_id: &String) -> Result<GroupInfo, LedgerError> {
        let group = self.group(group_id)?;
        Ok(GroupInfo {
            id: group.id,
            name: group.name,
            count: group.risk_ids.len(),
            risk_type: group.risk_type,
            status: group.status,
            pool_balance: group.pool_balance,
        })
    }

    /// Distinct owners of the group's risks, in enrollment order.
    pub fn group_members(&self, group_id: &String) -> Result<Vec<String>, LedgerError> {
        let group = self.group(group_id)?;
        let mut owners: Vec<String> = Vec::new(&self.env);
        for risk_id in group.risk_ids.iter() {
            let risk = self.risk(&risk_id)?;
            if !owners.contains(&risk.owner_id) {
                owners.push_back(risk.owner_id);
            }
        }
        Ok(owners)
    }
}
