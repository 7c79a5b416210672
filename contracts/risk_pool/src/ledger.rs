use soroban_sdk::{Bytes, Env, String, TryFromVal, Val, Vec};

use crate::storage::{self, KvStore, WriteSet};
use crate::text;
use crate::types::{IndexKind, LedgerConfig, LedgerError, StoreKey};

const MAX_ID_WIDTH: u32 = 12;
const MAX_TAG_LEN: u32 = 256;

/// Accounting core over a [`KvStore`].
///
/// Every mutating operation reads and validates first, stages its writes in a
/// [`WriteSet`] and commits once, so a rejected operation leaves the store
/// untouched.
pub struct Ledger<S: KvStore> {
    pub(crate) env: Env,
    pub(crate) store: S,
    replayed: u32,
}

impl<S: KvStore> Ledger<S> {
    /// Writes the config record, a zero admin fee account and empty indexes.
    pub fn initialize(env: &Env, mut store: S, config: LedgerConfig) -> Result<Self, LedgerError> {
        storage::recover(env, &mut store)?;

        if store.get(&StoreKey::Config)?.is_some() {
            return Err(LedgerError::AlreadyInitialized);
        }
        validate_config(&config)?;

        let mut batch = WriteSet::new(env);
        batch.put(&StoreKey::Config, &config);
        batch.put(&StoreKey::AdminFee, &0i128);
        for kind in IndexKind::ALL {
            batch.put(&kind.index_key(), &Vec::<String>::new(env));
        }
        batch.commit(&mut store)?;

        Ok(Ledger {
            env: env.clone(),
            store,
            replayed: 0,
        })
    }

    /// Opens an initialized ledger, first completing any interrupted commit.
    pub fn open(env: &Env, mut store: S) -> Result<Self, LedgerError> {
        let replayed = storage::recover(env, &mut store)?;
        if store.get(&StoreKey::Config)?.is_none() {
            return Err(LedgerError::NotInitialized);
        }

        Ok(Ledger {
            env: env.clone(),
            store,
            replayed,
        })
    }

    /// Journal entries replayed by `open`.
    pub fn replayed(&self) -> u32 {
        self.replayed
    }

    pub fn config(&self) -> Result<LedgerConfig, LedgerError> {
        self.fetch(&StoreKey::Config)?
            .ok_or(LedgerError::NotInitialized)
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn update_config(&mut self, config: LedgerConfig) -> Result<(), LedgerError> {
        validate_config(&config)?;
        let mut batch = WriteSet::new(&self.env);
        batch.put(&StoreKey::Config, &config);
        batch.commit(&mut self.store)
    }

    // ───────────── RAW ACCESS ─────────────

    pub fn read(&self, key: &String) -> Result<Bytes, LedgerError> {
        self.store
            .get(&StoreKey::entry(key))?
            .ok_or(LedgerError::KeyNotFound)
    }

    pub fn write(&mut self, key: &String, value: &Bytes) -> Result<(), LedgerError> {
        let mut batch = WriteSet::new(&self.env);
        batch.put_raw(&StoreKey::entry(key), value);
        batch.commit(&mut self.store)
    }

    pub fn delete(&mut self, key: &String) -> Result<(), LedgerError> {
        let mut batch = WriteSet::new(&self.env);
        batch.remove(&StoreKey::entry(key));
        batch.commit(&mut self.store)
    }

    // ───────────── INTERNAL HELPERS ─────────────

    pub(crate) fn fetch<T>(&self, key: &StoreKey) -> Result<Option<T>, LedgerError>
    where
        T: TryFromVal<Env, Val>,
    {
        match self.store.get(key)? {
            Some(bytes) => storage::decode(&self.env, &bytes).map(Some),
            None => Ok(None),
        }
    }

    /// Loads the `kind` record stored under `id`. Ids of another kind are
    /// reported as missing without being decoded.
    pub(crate) fn entity<T>(&self, kind: IndexKind, id: &String) -> Result<T, LedgerError>
    where
        T: TryFromVal<Env, Val>,
    {
        if !text::is_id_of(id, kind.id_prefix()) {
            return Err(kind.not_found());
        }
        self.fetch(&StoreKey::entry(id))?.ok_or(kind.not_found())
    }

    /// Allocates the next id of `kind`, staging the bumped sequence in `batch`.
    pub(crate) fn next_id(&self, kind: IndexKind, batch: &mut WriteSet) -> Result<String, LedgerError> {
        let id_width = self.config()?.id_width;
        let seq_key = kind.seq_key();
        let seq = self.fetch::<u64>(&seq_key)?.unwrap_or(0) + 1;
        batch.put(&seq_key, &seq);
        text::format_id(&self.env, kind.id_prefix(), seq, id_width)
    }

    pub(crate) fn check_tags(&self, tags: &[&String]) -> Result<(), LedgerError> {
        let max_tag_len = self.config()?.max_tag_len;
        if tags.iter().any(|tag| tag.len() > max_tag_len) {
            return Err(LedgerError::InvalidArgument);
        }
        Ok(())
    }
}

fn validate_config(config: &LedgerConfig) -> Result<(), LedgerError> {
    if config.id_width == 0 || config.id_width > MAX_ID_WIDTH {
        return Err(LedgerError::InvalidArgument);
    }
    if config.max_tag_len == 0 || config.max_tag_len > MAX_TAG_LEN {
        return Err(LedgerError::InvalidArgument);
    }
    Ok(())
}
