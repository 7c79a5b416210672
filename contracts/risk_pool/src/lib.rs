#![no_std]

use soroban_sdk::{contract, contractimpl, contractmeta, Bytes, Env, String, Symbol, Vec};

mod accounts;
mod claim;
mod events;
mod index;
mod ledger;
mod membership;
mod pool;
mod risk;
mod split;
mod storage;
mod text;
mod types;

pub use events::LedgerEvent;
pub use ledger::Ledger;
pub use membership::MemberProfile;
pub use storage::{ContractStore, KvStore};
pub use text::{AMOUNT_DECIMALS, AMOUNT_SCALE};
pub use types::{
    Claim, Enrollment, Group, GroupInfo, GroupStatus, IndexKind, Insurer, JournalEntry,
    LedgerConfig, LedgerError, Member, PremiumSplit, Risk, RiskStatus, StoreKey,
};

contractmeta!(
    key = "Description",
    val = "Risk-pooling insurance ledger: risks, pools, premium splits and claims"
);

/// String-argument operations reachable through `dispatch`.
enum Operation {
    Read,
    Write,
    Delete,
    CreateRisk,
    AddRisk,
    RaiseClaim,
}

impl Operation {
    fn from_symbol(env: &Env, name: &Symbol) -> Option<Self> {
        let table = [
            ("read", Operation::Read),
            ("write", Operation::Write),
            ("delete", Operation::Delete),
            ("create_risk", Operation::CreateRisk),
            ("add_risk", Operation::AddRisk),
            ("raise_claim", Operation::RaiseClaim),
        ];
        table
            .into_iter()
            .find(|(label, _)| Symbol::new(env, label) == *name)
            .map(|(_, op)| op)
    }

    fn arity(&self) -> u32 {
        match self {
            Operation::Read | Operation::Delete => 1,
            Operation::Write | Operation::AddRisk => 2,
            Operation::RaiseClaim => 3,
            Operation::CreateRisk => 4,
        }
    }
}

fn open(env: &Env) -> Result<Ledger<ContractStore>, LedgerError> {
    let ledger = Ledger::open(env, ContractStore::new(env))?;
    if ledger.replayed() > 0 {
        events::journal_replayed(env, ledger.replayed());
    }
    Ok(ledger)
}

#[contract]
pub struct RiskPoolContract;

#[contractimpl]
impl RiskPoolContract {
    // ───────────── INITIALIZATION ─────────────

    /// Creates the config record, the admin fee account and the empty indexes.
    pub fn initialize(env: Env) -> Result<(), LedgerError> {
        Ledger::initialize(&env, ContractStore::new(&env), LedgerConfig::default())?;
        events::initialized(&env);
        Ok(())
    }

    pub fn update_config(env: Env, config: LedgerConfig) -> Result<(), LedgerError> {
        open(&env)?.update_config(config)?;
        events::config_updated(&env);
        Ok(())
    }

    pub fn get_config(env: Env) -> Result<LedgerConfig, LedgerError> {
        open(&env)?.config()
    }

    // ───────────── RAW STATE ─────────────

    pub fn read(env: Env, key: String) -> Result<Bytes, LedgerError> {
        open(&env)?.read(&key)
    }

    pub fn write(env: Env, key: String, value: Bytes) -> Result<(), LedgerError> {
        open(&env)?.write(&key, &value)?;
        events::raw_write(&env, &key);
        Ok(())
    }

    pub fn delete(env: Env, key: String) -> Result<(), LedgerError> {
        open(&env)?.delete(&key)?;
        events::raw_delete(&env, &key);
        Ok(())
    }

    // ───────────── PARTICIPANTS ─────────────

    pub fn register_member(
        env: Env,
        name: String,
        email: String,
        contact: String,
        home_address: String,
        dob: String,
        tokens: String,
    ) -> Result<String, LedgerError> {
        let profile = MemberProfile {
            name,
            email,
            contact,
            home_address,
            dob,
        };
        let id = open(&env)?.register_member(profile, &tokens)?;
        events::member_registered(&env, &id);
        Ok(id)
    }

    pub fn register_insurer(env: Env, name: String, tokens: String) -> Result<String, LedgerError> {
        let id = open(&env)?.register_insurer(&name, &tokens)?;
        events::insurer_registered(&env, &id);
        Ok(id)
    }

    /// Opens a pool for risks of `risk_type`, administered by `insurer_id`.
    /// `premium_rate` is decimal text; times are unix seconds.
    pub fn create_group(
        env: Env,
        name: String,
        risk_type: String,
        insurer_id: String,
        premium_rate: String,
        created_at: u64,
        end_at: u64,
    ) -> Result<String, LedgerError> {
        let id = open(&env)?.create_group(
            &name,
            &risk_type,
            &insurer_id,
            &premium_rate,
            created_at,
            end_at,
        )?;
        events::group_created(&env, &id, &insurer_id);
        Ok(id)
    }

    // ───────────── RISKS, POOLS AND CLAIMS ─────────────

    /// Registers an uncovered risk for `owner_id`.
    ///
    /// # Arguments
    /// * `insured_value` - Non-negative decimal text
    /// * `model` - Model tag
    /// * `risk_type` - Type tag matched against group types
    /// * `owner_id` - Existing member id
    pub fn create_risk(
        env: Env,
        insured_value: String,
        model: String,
        risk_type: String,
        owner_id: String,
    ) -> Result<String, LedgerError> {
        let id = open(&env)?.register_risk(&insured_value, &model, &risk_type, &owner_id)?;
        events::risk_registered(&env, &id, &owner_id);
        Ok(id)
    }

    /// Enrolls a risk into a group at time `now` (unix seconds).
    pub fn add_risk(
        env: Env,
        risk_id: String,
        group_id: String,
        now: u64,
    ) -> Result<Enrollment, LedgerError> {
        let enrollment = open(&env)?.enroll_risk(&risk_id, &group_id, now)?;
        events::risk_enrolled(&env, &enrollment);
        Ok(enrollment)
    }

    /// Files a claim against a risk at time `now`. Returns the claim id.
    pub fn raise_claim(
        env: Env,
        risk_id: String,
        claimed_amount: String,
        claim_type: String,
        now: u64,
    ) -> Result<String, LedgerError> {
        let id = open(&env)?.file_claim(&risk_id, &claimed_amount, &claim_type, now)?;
        events::claim_filed(&env, &id, &risk_id);
        Ok(id)
    }

    pub fn split_percentages(_env: Env, pool_size: i64) -> Result<PremiumSplit, LedgerError> {
        split::split_percentages(pool_size)
    }

    /// Runs a named operation with ordered string arguments. Time-dependent
    /// operations receive the ledger close time.
    pub fn dispatch(env: Env, function: Symbol, args: Vec<String>) -> Result<Bytes, LedgerError> {
        let op = Operation::from_symbol(&env, &function).ok_or(LedgerError::UnknownOperation)?;
        if args.len() != op.arity() {
            return Err(LedgerError::InvalidArgumentCount);
        }
        let arg = |i: u32| args.get(i).ok_or(LedgerError::InvalidArgumentCount);
        let now = env.ledger().timestamp();
        let empty = Bytes::new(&env);

        match op {
            Operation::Read => Self::read(env.clone(), arg(0)?),
            Operation::Write => {
                let value = text::to_bytes(&env, &arg(1)?)?;
                Self::write(env.clone(), arg(0)?, value).map(|_| empty)
            }
            Operation::Delete => Self::delete(env.clone(), arg(0)?).map(|_| empty),
            Operation::CreateRisk => {
                let id = Self::create_risk(env.clone(), arg(0)?, arg(1)?, arg(2)?, arg(3)?)?;
                text::to_bytes(&env, &id)
            }
            Operation::AddRisk => Self::add_risk(env.clone(), arg(0)?, arg(1)?, now).map(|_| empty),
            Operation::RaiseClaim => {
                let id = Self::raise_claim(env.clone(), arg(0)?, arg(1)?, arg(2)?, now)?;
                text::to_bytes(&env, &id)
            }
        }
    }

    // ───────────── VIEW FUNCTIONS ─────────────

    pub fn get_risk(env: Env, risk_id: String) -> Result<Risk, LedgerError> {
        open(&env)?.risk(&risk_id)
    }

    pub fn get_member(env: Env, member_id: String) -> Result<Member, LedgerError> {
        open(&env)?.member(&member_id)
    }

    pub fn get_group(env: Env, group_id: String) -> Result<Group, LedgerError> {
        open(&env)?.group(&group_id)
    }

    pub fn get_insurer(env: Env, insurer_id: String) -> Result<Insurer, LedgerError> {
        open(&env)?.insurer(&insurer_id)
    }

    pub fn get_claim(env: Env, claim_id: String) -> Result<Claim, LedgerError> {
        open(&env)?.claim(&claim_id)
    }

    pub fn get_index(env: Env, kind: IndexKind) -> Result<Vec<String>, LedgerError> {
        open(&env)?.index(kind)
    }

    pub fn admin_fee_balance(env: Env) -> Result<i128, LedgerError> {
        open(&env)?.admin_fee_balance()
    }

    pub fn group_info(env: Env, group_id: String) -> Result<GroupInfo, LedgerError> {
        open(&env)?.group_info(&group_id)
    }

    pub fn group_members(env: Env, group_id: String) -> Result<Vec<String>, LedgerError> {
        open(&env)?.group_members(&group_id)
    }
}
