use soroban_sdk::{
    symbol_short,
    xdr::{FromXdr, ToXdr},
    Bytes, Env, IntoVal, String, Symbol, TryFromVal, Val, Vec,
};

use crate::types::{JournalEntry, LedgerError, StoreKey};

// Entries are bumped to ~30 days whenever they drop below ~1 day.
const LEDGER_TTL_THRESHOLD: u32 = 17_280;
const LEDGER_TTL_EXTEND: u32 = 518_400;

const CONFIG: Symbol = symbol_short!("config");

impl StoreKey {
    pub fn entry(id: &String) -> Self {
        StoreKey::Entry(id.clone())
    }
}

/// Raw key-value substrate the ledger is persisted in.
///
/// Implementations give no multi-key guarantee; [`WriteSet`] provides atomicity
/// on top of single-key puts.
pub trait KvStore {
    fn get(&self, key: &StoreKey) -> Result<Option<Bytes>, LedgerError>;
    fn put(&mut self, key: &StoreKey, value: &Bytes) -> Result<(), LedgerError>;
    fn delete(&mut self, key: &StoreKey) -> Result<(), LedgerError>;
}

/// The contract's storage. Config lives in instance storage, everything else
/// in persistent storage.
pub struct ContractStore {
    env: Env,
}

impl ContractStore {
    pub fn new(env: &Env) -> Self {
        ContractStore { env: env.clone() }
    }
}

impl KvStore for ContractStore {
    fn get(&self, key: &StoreKey) -> Result<Option<Bytes>, LedgerError> {
        Ok(match key {
            StoreKey::Config => self.env.storage().instance().get(&CONFIG),
            _ => self.env.storage().persistent().get(key),
        })
    }

    fn put(&mut self, key: &StoreKey, value: &Bytes) -> Result<(), LedgerError> {
        match key {
            StoreKey::Config => {
                let storage = self.env.storage().instance();
                storage.set(&CONFIG, value);
                storage.extend_ttl(LEDGER_TTL_THRESHOLD, LEDGER_TTL_EXTEND);
            }
            _ => {
                let storage = self.env.storage().persistent();
                storage.set(key, value);
                storage.extend_ttl(key, LEDGER_TTL_THRESHOLD, LEDGER_TTL_EXTEND);
            }
        }
        Ok(())
    }

    fn delete(&mut self, key: &StoreKey) -> Result<(), LedgerError> {
        match key {
            StoreKey::Config => self.env.storage().instance().remove(&CONFIG),
            _ => self.env.storage().persistent().remove(key),
        }
        Ok(())
    }
}

pub fn encode<T>(env: &Env, value: &T) -> Bytes
where
    T: IntoVal<Env, Val> + Clone,
{
    value.clone().to_xdr(env)
}

pub fn decode<T>(env: &Env, bytes: &Bytes) -> Result<T, LedgerError>
where
    T: TryFromVal<Env, Val>,
{
    T::from_xdr(env, bytes).map_err(|_| LedgerError::CorruptRecord)
}

//
// ──────────────────────────────────────────────────────────
// STAGED COMMIT
// ──────────────────────────────────────────────────────────
//

/// Writes collected by one operation and committed all-or-nothing.
///
/// `commit` persists the batch as a single journal record before applying it,
/// so an interrupted commit is completed by [`recover`] on the next open.
pub struct WriteSet {
    env: Env,
    entries: Vec<JournalEntry>,
}

impl WriteSet {
    pub fn new(env: &Env) -> Self {
        WriteSet {
            env: env.clone(),
            entries: Vec::new(env),
        }
    }

    pub fn put<T>(&mut self, key: &StoreKey, value: &T)
    where
        T: IntoVal<Env, Val> + Clone,
    {
        self.entries.push_back(JournalEntry {
            key: key.clone(),
            value: Some(encode(&self.env, value)),
        });
    }

    /// Stages bytes verbatim, without record encoding.
    pub fn put_raw(&mut self, key: &StoreKey, value: &Bytes) {
        self.entries.push_back(JournalEntry {
            key: key.clone(),
            value: Some(value.clone()),
        });
    }

    pub fn remove(&mut self, key: &StoreKey) {
        self.entries.push_back(JournalEntry {
            key: key.clone(),
            value: None,
        });
    }

    pub fn commit<S: KvStore>(self, store: &mut S) -> Result<(), LedgerError> {
        if self.entries.is_empty() {
            return Ok(());
        }

        store.put(&StoreKey::Journal, &encode(&self.env, &self.entries))?;
        apply(store, &self.entries)?;
        store.delete(&StoreKey::Journal)
    }
}

/// Finishes a commit that was interrupted after its journal was written.
/// Returns the number of entries replayed.
pub fn recover<S: KvStore>(env: &Env, store: &mut S) -> Result<u32, LedgerError> {
    let Some(bytes) = store.get(&StoreKey::Journal)? else {
        return Ok(0);
    };

    let entries: Vec<JournalEntry> = decode(env, &bytes)?;
    apply(store, &entries)?;
    store.delete(&StoreKey::Journal)?;
    Ok(entries.len())
}

fn apply<S: KvStore>(store: &mut S, entries: &Vec<JournalEntry>) -> Result<(), LedgerError> {
    for entry in entries.iter() {
        match entry.value {
            Some(value) => store.put(&entry.key, &value)?,
            None => store.delete(&entry.key)?,
        }
    }
    Ok(())
}
